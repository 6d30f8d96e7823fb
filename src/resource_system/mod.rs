pub mod file_formats;
pub mod preset_table;
