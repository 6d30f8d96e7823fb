use std::{
    f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU},
    fmt,
};

use glam::DVec3;
use serde::{Deserialize, Serialize};

use super::{
    easing::Easing,
    pose::{Pose, PanelPoses, FINAL_POSES, FINAL_POSITIONS, FINAL_YAWS, PANEL_COUNT},
};

/// Shared radius of the circular entry paths.
pub const ORBIT_RADIUS: f64 = 8.0;

/// Angular spacing between panels on a ring.
pub const PANEL_SPACING: f64 = TAU / 3.0;

/// Built-in entry animations.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    #[default]
    Spiral,
    Explosion,
    Drop,
    Orbit,
    Wave,
    Zoom,
    Portal,
    Helix,
    Tornado,
    Matrix,
    Vortex,
    Assemble,
}

/// Which path a config runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    Preset(Preset),
    /// Straight blend from start to final pose; custom presets use this.
    Linear(Easing),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PresetConfig {
    pub motion: Motion,
    /// Seconds; may be non-positive here, the engine clamps it.
    pub duration: f64,
    pub start: PanelPoses,
}

impl Preset {
    pub const ALL: [Preset; 12] = [
        Preset::Spiral,
        Preset::Explosion,
        Preset::Drop,
        Preset::Orbit,
        Preset::Wave,
        Preset::Zoom,
        Preset::Portal,
        Preset::Helix,
        Preset::Tornado,
        Preset::Matrix,
        Preset::Vortex,
        Preset::Assemble,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Spiral => "spiral",
            Preset::Explosion => "explosion",
            Preset::Drop => "drop",
            Preset::Orbit => "orbit",
            Preset::Wave => "wave",
            Preset::Zoom => "zoom",
            Preset::Portal => "portal",
            Preset::Helix => "helix",
            Preset::Tornado => "tornado",
            Preset::Matrix => "matrix",
            Preset::Vortex => "vortex",
            Preset::Assemble => "assemble",
        }
    }

    /// Case-insensitive lookup of a built-in name.
    pub fn from_name(name: &str) -> Option<Preset> {
        let name = name.trim();
        Preset::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(name))
    }

    /// Like [`Preset::from_name`] but never fails: unknown names become `Spiral`.
    pub fn resolve(name: &str) -> Preset {
        Preset::from_name(name).unwrap_or_else(|| {
            log::debug!("unknown animation preset {name:?}, falling back to spiral");
            Preset::default()
        })
    }

    pub fn duration(self) -> f64 {
        match self {
            Preset::Spiral => 2.5,
            Preset::Explosion => 4.0,
            Preset::Drop => 2.0,
            Preset::Orbit => 3.0,
            Preset::Wave => 2.5,
            Preset::Zoom => 4.0,
            Preset::Portal => 2.0,
            Preset::Helix => 3.0,
            Preset::Tornado => 2.5,
            Preset::Matrix => 2.5,
            Preset::Vortex => 3.0,
            Preset::Assemble => 2.5,
        }
    }

    pub fn config(self) -> PresetConfig {
        PresetConfig {
            motion: Motion::Preset(self),
            duration: self.duration(),
            start: std::array::from_fn(|index| self.start_pose(index)),
        }
    }

    /// Where panel `index` sits on the first frame. Each entry equals the
    /// preset's path evaluated at ratio 0.
    pub fn start_pose(self, index: usize) -> Pose {
        debug_assert!(index < PANEL_COUNT);
        let slot = index as f64;
        let phase = slot * PANEL_SPACING;
        let final_pos = FINAL_POSITIONS[index];
        let final_yaw = FINAL_YAWS[index];

        let (position, rotation, scale) = match self {
            Preset::Spiral => (
                ring(ORBIT_RADIUS, 5.0, phase),
                DVec3::new(0.0, 2.0 * TAU + phase, 0.0),
                0.3,
            ),
            Preset::Explosion => (
                final_pos,
                DVec3::new(PI, PI + phase, TAU),
                0.001,
            ),
            Preset::Drop => (
                DVec3::new(final_pos.x, 12.0 + 3.0 * slot, final_pos.z),
                DVec3::new(0.0, final_yaw, 0.0),
                1.0,
            ),
            Preset::Orbit => (
                ring(ORBIT_RADIUS, [0.0, 2.0, -2.0][index], phase),
                DVec3::new(0.0, phase, 0.0),
                0.5,
            ),
            Preset::Wave => (
                DVec3::new(-10.0 - 2.0 * slot, 3.0 * (0.5 * slot).sin(), final_pos.z),
                DVec3::new(0.0, -FRAC_PI_2 + phase, 0.2 * slot.sin()),
                1.0,
            ),
            Preset::Zoom => (DVec3::ZERO, DVec3::new(0.0, final_yaw, 0.0), 0.01),
            Preset::Portal => (
                DVec3::new(final_pos.x, final_pos.y, -20.0),
                DVec3::new(FRAC_PI_2, final_yaw + TAU, PI),
                2.0,
            ),
            Preset::Helix => (
                ring(3.0, -10.0, phase),
                DVec3::new(0.0, 0.5 * phase, FRAC_PI_4),
                0.5,
            ),
            Preset::Tornado => (
                ring(6.0, -8.0, phase),
                DVec3::new(0.0, final_yaw + 2.0 * TAU, 0.0),
                0.3,
            ),
            Preset::Matrix => (
                DVec3::new(final_pos.x, 20.0 + 5.0 * slot, final_pos.z),
                DVec3::new(0.0, final_yaw, 0.0),
                1.0,
            ),
            Preset::Vortex => (
                ring(ORBIT_RADIUS, 5.0, phase),
                DVec3::new(0.0, 4.0 * TAU + phase, PI),
                0.2,
            ),
            Preset::Assemble => (
                [
                    DVec3::new(8.0, 0.0, 0.0),
                    DVec3::new(-4.0, 8.0, 6.93),
                    DVec3::new(-4.0, -8.0, -6.93),
                ][index],
                [
                    DVec3::new(0.0, FRAC_PI_2, 0.0),
                    DVec3::new(FRAC_PI_2, phase, 0.0),
                    DVec3::new(-FRAC_PI_2, phase, 0.0),
                ][index],
                1.5,
            ),
        };
        Pose::new(position, rotation, DVec3::splat(scale))
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl PresetConfig {
    /// Custom preset running the linear path.
    pub fn linear(duration: f64, easing: Easing, start: PanelPoses) -> Self {
        Self {
            motion: Motion::Linear(easing),
            duration,
            start,
        }
    }

    pub fn preset(&self) -> Option<Preset> {
        match self.motion {
            Motion::Preset(preset) => Some(preset),
            Motion::Linear(_) => None,
        }
    }
}

impl Default for PresetConfig {
    fn default() -> Self {
        Preset::default().config()
    }
}

/// A point on a horizontal ring of `radius` at height `y`.
pub(crate) fn ring(radius: f64, y: f64, angle: f64) -> DVec3 {
    DVec3::new(angle.cos() * radius, y, angle.sin() * radius)
}

/// Start poses equal to the final poses, a neutral base for custom presets.
pub fn assembled() -> PanelPoses {
    FINAL_POSES
}
