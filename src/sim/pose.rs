use glam::{DMat4, DQuat, DVec3, EulerRot};
use serde::{Deserialize, Serialize};

pub const PANEL_COUNT: usize = 3;

/// One pose per panel, indexed by panel.
pub type PanelPoses = [Pose; PANEL_COUNT];

/// Placement of one panel at one instant.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct Pose {
    pub position: DVec3,
    /// Euler angles in radians, applied in XYZ order.
    pub rotation: DVec3,
    pub scale: DVec3,
}
impl Default for Pose {
    fn default() -> Self {
        Self {
            position: DVec3::ZERO,
            rotation: DVec3::ZERO,
            scale: DVec3::ONE,
        }
    }
}
impl Pose {
    pub const fn new(position: DVec3, rotation: DVec3, scale: DVec3) -> Self {
        Self { position, rotation, scale }
    }

    /// Componentwise blend; `t` is not clamped so overshooting curves pass through.
    pub fn lerp(&self, target: &Pose, t: f64) -> Pose {
        Pose {
            position: self.position.lerp(target.position, t),
            rotation: self.rotation.lerp(target.rotation, t),
            scale: self.scale.lerp(target.scale, t),
        }
    }

    pub fn quat(&self) -> DQuat {
        DQuat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    pub fn to_transform(&self) -> DMat4 {
        DMat4::from_scale_rotation_translation(self.scale, self.quat(), self.position)
    }

    pub fn abs_diff_eq(&self, other: &Pose, max_abs_diff: f64) -> bool {
        self.position.abs_diff_eq(other.position, max_abs_diff)
            && self.rotation.abs_diff_eq(other.rotation, max_abs_diff)
            && self.scale.abs_diff_eq(other.scale, max_abs_diff)
    }
}

pub const FINAL_POSITIONS: [DVec3; PANEL_COUNT] = [
    DVec3::new(1.0, 0.0, 0.0),
    DVec3::new(-0.5, 0.0, 0.866),
    DVec3::new(-0.5, 0.0, -0.866),
];

/// Yaw of each assembled panel: 0, 60 and 300 degrees.
pub const FINAL_YAWS: [f64; PANEL_COUNT] = [0.0, 1.0471975511965976, 5.235987755982989];

/// The assembled triangular glyph every animation converges to.
pub const FINAL_POSES: PanelPoses = [
    Pose::new(FINAL_POSITIONS[0], DVec3::new(0.0, FINAL_YAWS[0], 0.0), DVec3::ONE),
    Pose::new(FINAL_POSITIONS[1], DVec3::new(0.0, FINAL_YAWS[1], 0.0), DVec3::ONE),
    Pose::new(FINAL_POSITIONS[2], DVec3::new(0.0, FINAL_YAWS[2], 0.0), DVec3::ONE),
];
