use std::{fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    error::LoadError,
    resource_system::preset_table::PresetTable,
    sim::animator::{EngineOptions, MotionEngine},
};

/// How one logo animates, as read from JSON.
///
/// ```json
/// { "preset": "tornado", "duration": 3.0, "rotation_speed": 0.5 }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    /// Built-in or custom preset name; unknown names fall back to spiral.
    pub preset: String,
    #[serde(flatten)]
    pub options: EngineOptions,
}
impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            preset: "spiral".to_string(),
            options: EngineOptions::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    pub fn build_engine(&self, presets: &PresetTable) -> MotionEngine {
        MotionEngine::new(presets.lookup(&self.preset), self.options)
    }
}
