pub mod compositor;
pub mod instance;
