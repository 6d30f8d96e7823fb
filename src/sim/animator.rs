use std::f64::consts::TAU;

use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::{
    paths::{self, PathInput},
    pose::{PanelPoses, FINAL_POSES, PANEL_COUNT},
    preset::{Motion, Preset, PresetConfig},
};

/// Durations at or below zero are replaced by this.
pub const MIN_DURATION: f64 = 1e-6;

/// Idle yaw per second per unit of rotation speed.
const IDLE_SPIN_FACTOR: f64 = 0.5;

const GLITCH_CHANCE: f64 = 0.05;
const GLITCH_AMPLITUDE: f64 = 0.5;

/// Per-logo construction knobs.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct EngineOptions {
    /// Overrides the preset's own duration.
    pub duration: Option<f64>,
    /// Multiplier for the idle spin after the entry animation.
    pub rotation_speed: f64,
    /// Keep the idle yaw in [0, 2π).
    pub wrap_idle_yaw: bool,
    /// Seed for the matrix preset's glitches.
    pub glitch_seed: u64,
}
impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            duration: None,
            rotation_speed: 1.0,
            wrap_idle_yaw: false,
            glitch_seed: 0x5eed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// No tick received yet.
    Unstarted,
    Running,
    /// Entry animation done, idle rotation from here on.
    Complete,
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Running,
    /// This tick finished the entry animation.
    Completed,
    Idle,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationState {
    /// Clock time of the first tick.
    pub start_time: Option<f64>,
    /// Non-decreasing progress in [0, 1].
    pub elapsed_ratio: f64,
    pub is_complete: bool,
}
impl AnimationState {
    pub fn phase(&self) -> Phase {
        match (self.start_time, self.is_complete) {
            (None, _) => Phase::Unstarted,
            (Some(_), false) => Phase::Running,
            (Some(_), true) => Phase::Complete,
        }
    }
}

/// Drives the three logo panels from a preset's start poses to the assembled
/// glyph, then spins the group. Time only advances through [`MotionEngine::tick`].
pub struct MotionEngine {
    config: PresetConfig,
    duration: f64,
    rotation_speed: f64,
    wrap_idle_yaw: bool,
    state: AnimationState,
    poses: PanelPoses,
    group_yaw: f64,
    rng: SmallRng,
    on_complete: Option<Box<dyn FnOnce() + Send>>,
}

impl MotionEngine {
    pub fn new(config: PresetConfig, options: EngineOptions) -> Self {
        let duration = options.duration.unwrap_or(config.duration);
        let duration = if duration > 0.0 {
            duration
        } else {
            log::warn!("animation duration {duration} is not positive, using {MIN_DURATION}");
            MIN_DURATION
        };
        let rotation_speed = if options.rotation_speed >= 0.0 {
            options.rotation_speed
        } else {
            log::warn!("rotation speed {} is negative, idle spin disabled", options.rotation_speed);
            0.0
        };

        Self {
            poses: config.start,
            config,
            duration,
            rotation_speed,
            wrap_idle_yaw: options.wrap_idle_yaw,
            state: AnimationState::default(),
            group_yaw: 0.0,
            rng: SmallRng::seed_from_u64(options.glitch_seed),
            on_complete: None,
        }
    }

    pub fn from_preset(preset: Preset) -> Self {
        Self::new(preset.config(), EngineOptions::default())
    }

    /// Called once, on the tick that completes the entry animation.
    pub fn with_on_complete(mut self, on_complete: impl FnOnce() + Send + 'static) -> Self {
        self.on_complete = Some(Box::new(on_complete));
        self
    }

    /// Advances to clock `time`; `dt` is the time since the previous frame.
    /// Ticks at a non-finite `time` leave the entry animation untouched.
    pub fn tick(&mut self, time: f64, dt: f64) -> TickOutcome {
        if self.state.is_complete {
            self.spin(dt);
            return TickOutcome::Idle;
        }
        if !time.is_finite() {
            log::warn!("ignoring tick at non-finite time {time}");
            return TickOutcome::Running;
        }
        let start_time = *self.state.start_time.get_or_insert(time);

        let elapsed = (time - start_time).max(0.0);
        let raw = (elapsed / self.duration)
            .clamp(0.0, 1.0)
            .max(self.state.elapsed_ratio);
        self.state.elapsed_ratio = raw;

        if raw >= 1.0 {
            self.state.is_complete = true;
            self.poses = FINAL_POSES;
            log::debug!("{:?} entry animation complete after {elapsed:.3}s", self.config.motion);
            if let Some(on_complete) = self.on_complete.take() {
                on_complete();
            }
            return TickOutcome::Completed;
        }

        self.pose_panels(raw);
        TickOutcome::Running
    }

    fn pose_panels(&mut self, raw: f64) {
        let glitching = self.config.motion == Motion::Preset(Preset::Matrix);
        for index in 0..PANEL_COUNT {
            let glitch = if glitching { self.sample_glitch() } else { 0.0 };
            let input = PathInput::new(index, raw, &self.config.start[index], &FINAL_POSES[index])
                .with_glitch(glitch);
            self.poses[index] = paths::sample_pose(self.config.motion, &input);
        }
    }

    fn sample_glitch(&mut self) -> f64 {
        if self.rng.gen::<f64>() < GLITCH_CHANCE {
            (self.rng.gen::<f64>() - 0.5) * GLITCH_AMPLITUDE
        } else {
            0.0
        }
    }

    fn spin(&mut self, dt: f64) {
        self.group_yaw += dt.max(0.0) * self.rotation_speed * IDLE_SPIN_FACTOR;
        if self.wrap_idle_yaw {
            self.group_yaw = self.group_yaw.rem_euclid(TAU);
        }
    }

    pub fn poses(&self) -> &PanelPoses {
        &self.poses
    }

    /// Rotation of the whole group about the vertical axis.
    pub fn group_yaw(&self) -> f64 {
        self.group_yaw
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn elapsed_ratio(&self) -> f64 {
        self.state.elapsed_ratio
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn config(&self) -> &PresetConfig {
        &self.config
    }
}
