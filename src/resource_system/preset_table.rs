use std::collections::HashMap;

use crate::{
    error::LoadError,
    sim::preset::{Preset, PresetConfig},
};

use super::file_formats::presetfile::PresetFile;

/// Resolves preset names to configurations: built-ins first, then custom
/// presets, then the spiral default. Lookups never fail.
#[derive(Debug, Clone, Default)]
pub struct PresetTable {
    durations: HashMap<Preset, f64>,
    custom: HashMap<String, PresetConfig>,
}

impl PresetTable {
    pub fn builtin() -> Self {
        Self::default()
    }

    pub fn from_file(file: PresetFile) -> Result<Self, LoadError> {
        let mut table = Self::builtin();
        for (name, duration) in file.durations {
            match Preset::from_name(&name) {
                Some(preset) => table.set_duration(preset, duration),
                None => log::warn!("duration override for unknown preset {name:?} ignored"),
            }
        }
        for (name, custom) in file.custom {
            let config = PresetConfig::linear(custom.duration, custom.easing, custom.start);
            table.insert_custom(name, config)?;
        }
        Ok(table)
    }

    pub fn set_duration(&mut self, preset: Preset, duration: f64) {
        self.durations.insert(preset, duration);
    }

    /// Custom names are matched case-insensitively and may not shadow built-ins.
    pub fn insert_custom(
        &mut self,
        name: impl Into<String>,
        config: PresetConfig,
    ) -> Result<(), LoadError> {
        let name = name.into();
        if Preset::from_name(&name).is_some() {
            return Err(LoadError::ReservedPresetName(name));
        }
        self.custom.insert(name.trim().to_ascii_lowercase(), config);
        Ok(())
    }

    pub fn builtin_config(&self, preset: Preset) -> PresetConfig {
        let mut config = preset.config();
        if let Some(duration) = self.durations.get(&preset) {
            config.duration = *duration;
        }
        config
    }

    pub fn lookup(&self, name: &str) -> PresetConfig {
        if let Some(preset) = Preset::from_name(name) {
            return self.builtin_config(preset);
        }
        if let Some(config) = self.custom.get(&name.trim().to_ascii_lowercase()) {
            return config.clone();
        }
        self.builtin_config(Preset::resolve(name))
    }

    pub fn custom_names(&self) -> impl Iterator<Item = &str> {
        self.custom.keys().map(String::as_str)
    }
}
