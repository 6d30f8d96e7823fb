use glam::{DMat4, DVec3, Mat3, Mat4};

use crate::sim::pose::Pose;

/// Box dimensions of one logo panel: width, height, thickness.
pub const PANEL_SIZE: DVec3 = DVec3::new(2.0, 7.0, 0.05);

/// Per-panel instance data for drawing a unit cube as a logo panel.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PanelInstance {
    pub m4: [[f32; 4]; 4],
    /// Inverse transpose of the upper 3x3, for normals.
    pub itr: [[f32; 3]; 3],
}

impl Default for PanelInstance {
    fn default() -> Self {
        Self {
            m4: Mat4::IDENTITY.to_cols_array_2d(),
            itr: Mat3::IDENTITY.to_cols_array_2d(),
        }
    }
}

impl PanelInstance {
    pub fn from_transform(transform: Mat4) -> Self {
        let linear = Mat3::from_mat4(transform);
        // collapsed panels (zero scale) have no usable normal matrix
        let itr = if linear.determinant().abs() > f32::EPSILON {
            linear.inverse().transpose()
        } else {
            Mat3::IDENTITY
        };
        Self {
            m4: transform.to_cols_array_2d(),
            itr: itr.to_cols_array_2d(),
        }
    }

    /// Panel `pose` inside a group spun by `group_yaw` about +Y.
    pub fn from_pose(pose: &Pose, group_yaw: f64) -> Self {
        let model = DMat4::from_rotation_y(group_yaw)
            * pose.to_transform()
            * DMat4::from_scale(PANEL_SIZE);
        Self::from_transform(model.as_mat4())
    }

    pub fn transform(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.m4)
    }
}
