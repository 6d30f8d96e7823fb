use glam::{Mat3, Mat4, Quat, Vec2, Vec3};

use crate::render_engine::compositor::Rect;

/// Pointer pixels per degree of orbit.
pub const DRAG_SENSITIVITY: f32 = 5.0;
/// Closest the eye may get to the target along each diagonal axis.
pub const MIN_DISTANCE: f32 = 0.5;
/// Orbit elevation stays short of the poles so `up` never lines up with the view.
const MAX_ELEVATION_DEG: f32 = 89.0;

/// Elevation of the `[d, d, d]` diagonal, degrees.
fn base_elevation() -> f32 {
    (1.0 / 2f32.sqrt()).atan().to_degrees()
}

fn look_at_rotation(eye: Vec3, target: Vec3, world_up: Vec3) -> Quat {
    let forward = (target - eye).normalize();
    let up = (world_up - forward * world_up.dot(forward)).normalize();
    let right = forward.cross(up);

    // Camera looks down -Z
    Quat::from_mat3(&Mat3::from_cols(right, up, -forward))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraSnapshot {
    pub position: Vec3,
    pub view: Mat4,
    pub proj: Mat4,
}
impl CameraSnapshot {
    pub fn view_proj(&self) -> Mat4 {
        self.proj * self.view
    }
}

/// Per-view camera sitting on the diagonal `[d, d, d]` and looking at the
/// origin, about 35 degrees of elevation at 45 degrees azimuth.
///
/// Interactive cameras orbit the target on drag and dolly on wheel, with
/// damped motion. Panning is not supported.
#[derive(Clone, Debug)]
pub struct ViewCamera {
    pub distance: f32,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view, degrees.
    pub fovy: f32,
    pub znear: f32,
    pub zfar: f32,
    pub interactive: bool,
    pub rot_x: f32, // deg, azimuth offset
    pub rot_y: f32, // deg, elevation offset
    /// Fraction of the pending orbit applied per frame; 1 disables damping.
    pub damping: f32,
    pending_orbit: Vec2,
}
impl Default for ViewCamera {
    fn default() -> Self {
        Self {
            distance: 5.0,
            target: Vec3::ZERO,
            up: Vec3::Y,
            fovy: 60.0,
            znear: 0.1,
            zfar: 1000.0,
            interactive: false,
            rot_x: 0.0,
            rot_y: 0.0,
            damping: 0.05,
            pending_orbit: Vec2::ZERO,
        }
    }
}
impl ViewCamera {
    pub fn interactive() -> Self {
        Self {
            interactive: true,
            ..Self::default()
        }
    }

    pub fn eye(&self) -> Vec3 {
        let azimuth = (45.0 + self.rot_x).to_radians();
        let elevation = (base_elevation() + self.rot_y)
            .clamp(-MAX_ELEVATION_DEG, MAX_ELEVATION_DEG)
            .to_radians();
        let radius = self.distance * 3f32.sqrt();
        let direction = Vec3::new(
            elevation.cos() * azimuth.sin(),
            elevation.sin(),
            elevation.cos() * azimuth.cos(),
        );
        self.target + direction * radius
    }

    /// Queues an orbit for a pointer drag of `delta` pixels. Ignored unless interactive.
    pub fn drag(&mut self, delta: Vec2) -> bool {
        if !self.interactive {
            return false;
        }
        self.pending_orbit -= delta / DRAG_SENSITIVITY;
        true
    }

    /// Dollies toward the target for positive wheel `lines`. Ignored unless interactive.
    pub fn wheel(&mut self, lines: f32) -> bool {
        if !self.interactive {
            return false;
        }
        self.distance = (self.distance - lines).max(MIN_DISTANCE);
        true
    }

    /// Applies one frame of the damped orbit.
    pub fn update(&mut self) {
        let step = self.pending_orbit * self.damping.clamp(0.0, 1.0);
        self.rot_x += step.x;
        self.rot_y = (self.rot_y + step.y).clamp(
            -MAX_ELEVATION_DEG - base_elevation(),
            MAX_ELEVATION_DEG - base_elevation(),
        );
        self.pending_orbit -= step;
    }

    pub fn build_snapshot(&self, aspect: f32) -> CameraSnapshot {
        let eye = self.eye();
        let rotation = look_at_rotation(eye, self.target, self.up);
        let rot_inv = rotation.conjugate();
        CameraSnapshot {
            position: eye,
            view: Mat4::from_rotation_translation(rot_inv, -(rot_inv * eye)),
            proj: Mat4::perspective_rh(self.fovy.to_radians(), aspect, self.znear, self.zfar),
        }
    }

    pub fn snapshot_for(&self, rect: &Rect) -> CameraSnapshot {
        self.build_snapshot(rect.aspect())
    }
}
