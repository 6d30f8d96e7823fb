//! Closed-form entry paths, one per preset.
//!
//! Every path is a function of the raw ratio `t`, the eased ratio `e` and the
//! panel index, and lands exactly on the panel's final pose at `t = 1`.

use std::f64::consts::{PI, TAU};

use glam::DVec3;

use super::{
    easing::{ease_out_back, ease_out_bounce, ease_out_cubic, ease_out_quint},
    pose::Pose,
    preset::{Motion, Preset, ORBIT_RADIUS, PANEL_SPACING},
};

/// Everything a path needs to place one panel.
#[derive(Debug, Clone, Copy)]
pub struct PathInput<'a> {
    pub index: usize,
    /// Linear progress in [0, 1].
    pub raw: f64,
    /// `ease_out_cubic(raw)`.
    pub eased: f64,
    pub start: &'a Pose,
    pub end: &'a Pose,
    /// Matrix glitch offset for this panel and tick, 0 when not glitching.
    pub glitch: f64,
}
impl<'a> PathInput<'a> {
    pub fn new(index: usize, raw: f64, start: &'a Pose, end: &'a Pose) -> Self {
        Self {
            index,
            raw,
            eased: ease_out_cubic(raw),
            start,
            end,
            glitch: 0.0,
        }
    }

    pub fn with_glitch(mut self, glitch: f64) -> Self {
        self.glitch = glitch;
        self
    }

    fn phase(&self) -> f64 {
        self.index as f64 * PANEL_SPACING
    }
}

/// Result of a path: either position and rotation, leaving scale to the
/// shared scale-in step, or a complete pose for paths that own their scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sample {
    Placed { position: DVec3, rotation: DVec3 },
    Posed(Pose),
}

/// Full pose of one panel, including the shared scale-in step.
pub fn sample_pose(motion: Motion, input: &PathInput) -> Pose {
    match sample(motion, input) {
        Sample::Placed { position, rotation } => Pose {
            position,
            rotation,
            scale: input.start.scale.lerp(input.end.scale, input.eased),
        },
        Sample::Posed(pose) => pose,
    }
}

pub fn sample(motion: Motion, input: &PathInput) -> Sample {
    let preset = match motion {
        Motion::Preset(preset) => preset,
        Motion::Linear(easing) => return linear(input, easing.apply(input.raw)),
    };
    match preset {
        Preset::Spiral => spiral(input),
        Preset::Explosion => explosion(input),
        Preset::Drop => drop(input),
        Preset::Orbit => orbit(input),
        Preset::Wave => wave(input),
        Preset::Zoom => zoom(input),
        Preset::Portal => portal(input),
        Preset::Helix => helix(input),
        Preset::Tornado => tornado(input),
        Preset::Matrix => matrix(input),
        Preset::Vortex => vortex(input),
        Preset::Assemble => assemble(input),
    }
}

fn mix(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Horizontal offset on a circle, faded out by `(1 - e)` and blended into
/// the final x/z.
fn converge_xz(angle: f64, radius: f64, end: DVec3, e: f64) -> (f64, f64) {
    let x = angle.cos() * radius * (1.0 - e) + end.x * e;
    let z = angle.sin() * radius * (1.0 - e) + end.z * e;
    (x, z)
}

/// Scale follows the same easing as position and rotation.
fn linear(input: &PathInput, e: f64) -> Sample {
    Sample::Posed(input.start.lerp(input.end, e))
}

fn spiral(input: &PathInput) -> Sample {
    let (t, e, start, end) = (input.raw, input.eased, input.start, input.end);
    // the sweep saturates early so angular motion settles before position
    let spiral_t = (t * 1.2).min(1.0);
    let angle = (1.0 - spiral_t) * 2.0 * TAU + input.phase();
    let (x, z) = converge_xz(angle, ORBIT_RADIUS * (1.0 - e), end.position, e);
    Sample::Placed {
        position: DVec3::new(x, mix(start.position.y, end.position.y, e), z),
        rotation: DVec3::new(
            mix(start.rotation.x, end.rotation.x, e),
            mix(angle, end.rotation.y, e),
            0.0,
        ),
    }
}

fn explosion(input: &PathInput) -> Sample {
    let (t, e, start, end) = (input.raw, input.eased, input.start, input.end);
    let burst = if t < 0.4 { t / 0.4 } else { 1.0 - (t - 0.4) / 0.6 };
    let lift = (burst * PI).sin();
    let radius = lift * 5.0 * (1.0 - e);
    let angle = input.phase();
    Sample::Placed {
        position: end.position
            + DVec3::new(angle.cos() * radius, lift * 3.0 * (1.0 - e), angle.sin() * radius),
        rotation: DVec3::new(
            mix(start.rotation.x, end.rotation.x, e),
            mix(start.rotation.y, end.rotation.y, e),
            (1.0 - e) * TAU,
        ),
    }
}

fn drop(input: &PathInput) -> Sample {
    let (t, e, start, end) = (input.raw, input.eased, input.start, input.end);
    let fall = ease_out_bounce(t);
    Sample::Placed {
        position: DVec3::new(
            mix(start.position.x, end.position.x, e),
            mix(start.position.y, end.position.y, fall),
            mix(start.position.z, end.position.z, e),
        ),
        // only the fall is animated, orientation is pinned
        rotation: DVec3::new(end.rotation.x, end.rotation.y, 0.0),
    }
}

fn orbit(input: &PathInput) -> Sample {
    let (t, e, start, end) = (input.raw, input.eased, input.start, input.end);
    let angle = t * 3.0 * PI + input.phase();
    let (x, z) = converge_xz(angle, ORBIT_RADIUS * (1.0 - e), end.position, e);
    let bob = (t * 4.0 * PI).sin() * (1.0 - e) * 2.0;
    Sample::Placed {
        position: DVec3::new(x, mix(start.position.y, end.position.y, e) + bob, z),
        rotation: DVec3::new(
            mix(start.rotation.x, end.rotation.x, e),
            mix(angle, end.rotation.y, e),
            0.0,
        ),
    }
}

fn wave(input: &PathInput) -> Sample {
    let (t, e, start, end) = (input.raw, input.eased, input.start, input.end);
    let slot = input.index as f64;
    let swell = (t * 3.0 * PI + slot * 0.5).sin() * (1.0 - e) * 3.0;
    Sample::Placed {
        position: DVec3::new(
            mix(start.position.x, end.position.x, e),
            end.position.y + swell,
            mix(start.position.z, end.position.z, e),
        ),
        rotation: DVec3::new(
            (t * TAU).sin() * (1.0 - e) * 0.3,
            mix(start.rotation.y, end.rotation.y, e),
            (t * 3.0 * PI + slot).sin() * (1.0 - e) * 0.2,
        ),
    }
}

pub const ZOOM_STAGGER: f64 = 0.08;
const ZOOM_SCALE_FLOOR: f64 = 0.01;

/// Progress of one panel's staggered zoom timeline.
pub fn zoom_panel_t(index: usize, t: f64) -> f64 {
    let delay = index as f64 * ZOOM_STAGGER;
    ((t - delay) / (1.0 - delay * 2.0)).clamp(0.0, 1.0)
}

fn zoom(input: &PathInput) -> Sample {
    let end = input.end;
    let panel_t = zoom_panel_t(input.index, input.raw);
    let scale = ZOOM_SCALE_FLOOR + ease_out_back(panel_t) * (1.0 - ZOOM_SCALE_FLOOR);
    Sample::Posed(Pose {
        position: end.position * ease_out_quint(panel_t),
        rotation: DVec3::new(0.0, end.rotation.y, 0.0),
        scale: DVec3::splat(scale.max(0.001)),
    })
}

fn portal(input: &PathInput) -> Sample {
    let (t, e, start, end) = (input.raw, input.eased, input.start, input.end);
    let spin = (1.0 - t) * TAU;
    Sample::Placed {
        position: DVec3::new(
            end.position.x,
            end.position.y,
            mix(start.position.z, end.position.z, e),
        ),
        rotation: DVec3::new(
            mix(start.rotation.x, end.rotation.x, e),
            end.rotation.y + spin,
            spin * 0.5,
        ),
    }
}

fn helix(input: &PathInput) -> Sample {
    let (t, e, start, end) = (input.raw, input.eased, input.start, input.end);
    let angle = t * 6.0 * PI + input.phase();
    let (x, z) = converge_xz(angle, 3.0 * (1.0 - e), end.position, e);
    Sample::Placed {
        position: DVec3::new(x, mix(start.position.y, end.position.y, e), z),
        rotation: DVec3::new(
            mix(start.rotation.x, end.rotation.x, e),
            mix(angle * 0.5, end.rotation.y, e),
            start.rotation.z * (1.0 - e),
        ),
    }
}

const TORNADO_RADIUS: f64 = 6.0;

fn tornado(input: &PathInput) -> Sample {
    let (t, e, start, end) = (input.raw, input.eased, input.start, input.end);
    let radius = TORNADO_RADIUS * (1.0 - e);
    // Decreasing angle in x/z is a positive turn about +Y, the same sense
    // as the idle yaw, so there is no reversal at completion.
    let angle = -t * 4.0 * TAU + input.phase();
    let extra_spin = (1.0 - e) * 2.0 * TAU;
    Sample::Placed {
        position: DVec3::new(
            angle.cos() * radius + end.position.x * e,
            mix(start.position.y, end.position.y, e),
            angle.sin() * radius + end.position.z * e,
        ),
        rotation: DVec3::new(end.rotation.x, end.rotation.y + extra_spin, 0.0),
    }
}

fn matrix(input: &PathInput) -> Sample {
    let (t, start, end) = (input.raw, input.start, input.end);
    let fall = ease_out_cubic((t * 1.5).min(1.0));
    let glitch = input.glitch * (t * PI).sin();
    Sample::Placed {
        position: DVec3::new(
            end.position.x + glitch,
            mix(start.position.y, end.position.y, fall),
            end.position.z + glitch,
        ),
        rotation: DVec3::new(end.rotation.x, end.rotation.y, glitch * 0.2),
    }
}

fn vortex(input: &PathInput) -> Sample {
    let (t, e, start, end) = (input.raw, input.eased, input.start, input.end);
    let angle = (1.0 - t) * 4.0 * TAU + input.phase();
    let (x, z) = converge_xz(angle, ORBIT_RADIUS * (1.0 - e), end.position, e);
    Sample::Placed {
        position: DVec3::new(x, mix(start.position.y, end.position.y, e), z),
        rotation: DVec3::new(
            start.rotation.x * (1.0 - e),
            mix(angle, end.rotation.y, e),
            (1.0 - e) * PI,
        ),
    }
}

fn assemble(input: &PathInput) -> Sample {
    let (t, e, start, end) = (input.raw, input.eased, input.start, input.end);
    let wobble = (t * 6.0 * PI).sin() * (1.0 - e) * 0.3;
    Sample::Placed {
        position: start.position.lerp(end.position, e) + DVec3::new(0.0, wobble, 0.0),
        rotation: start.rotation.lerp(end.rotation, e),
    }
}
