pub mod presetfile;
