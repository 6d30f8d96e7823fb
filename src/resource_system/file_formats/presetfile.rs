use std::{collections::BTreeMap, fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    error::LoadError,
    sim::{easing::Easing, pose::PanelPoses, preset},
};

/// On-disk preset overrides and user-defined presets.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct PresetFile {
    /// Duration overrides for built-in presets, keyed by preset name.
    pub durations: BTreeMap<String, f64>,
    /// Presets that run the linear path, keyed by their own name.
    pub custom: BTreeMap<String, CustomPreset>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CustomPreset {
    pub duration: f64,
    pub easing: Easing,
    pub start: PanelPoses,
}
impl Default for CustomPreset {
    fn default() -> Self {
        Self {
            duration: 2.5,
            easing: Easing::default(),
            start: preset::assembled(),
        }
    }
}

impl PresetFile {
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
}
