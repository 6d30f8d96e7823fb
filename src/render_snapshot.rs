use crate::{
    render_engine::{
        compositor::{Rect, ViewId},
        instance::PanelInstance,
    },
    sim::{camera::CameraSnapshot, pose::PANEL_COUNT, scene_tree::Scene},
};

/// Everything needed to draw one logo view.
#[derive(Clone, Debug)]
pub struct ViewSnapshot {
    pub view: ViewId,
    /// Top-left origin, clipped to the surface.
    pub scissor: Rect,
    pub camera: CameraSnapshot,
    pub panels: [PanelInstance; PANEL_COUNT],
}

/// Immutable copy of the scene's drawable state for one frame.
#[derive(Clone, Debug)]
pub struct RenderSnapshot {
    pub frame_index: u32,
    pub surface: glam::UVec2,
    /// Views bottom to top; offscreen views are left out.
    pub views: Vec<ViewSnapshot>,
}

impl RenderSnapshot {
    pub fn build(scene: &Scene) -> Self {
        let views = scene
            .compositor
            .scissors()
            .into_iter()
            .filter_map(|(view, scissor)| {
                let logo = scene.logo(view)?;
                let yaw = logo.engine.group_yaw();
                let poses = logo.engine.poses();
                Some(ViewSnapshot {
                    view,
                    scissor,
                    camera: logo.camera.snapshot_for(&scene.compositor.view(view)?.rect()),
                    panels: std::array::from_fn(|i| PanelInstance::from_pose(&poses[i], yaw)),
                })
            })
            .collect();

        Self {
            frame_index: scene.frame_index,
            surface: scene.compositor.surface(),
            views,
        }
    }

    /// Panel instances of all views, in view order, ready for upload.
    pub fn instance_bytes(&self) -> Vec<u8> {
        let instances: Vec<PanelInstance> = self.views.iter().flat_map(|v| v.panels).collect();
        bytemuck::cast_slice(&instances).to_vec()
    }
}

#[cfg(test)]
mod tests {
    use glam::{DVec2, IVec2, UVec2};

    use super::*;
    use crate::{
        resource_system::preset_table::PresetTable,
        sim::{
            animator::MotionEngine,
            preset::Preset,
            scene_tree::{LogoMount, Scene},
        },
    };

    #[test]
    fn offscreen_views_are_skipped() {
        let mut scene = Scene::new(UVec2::new(640, 480), PresetTable::builtin());
        let visible = scene.mount(LogoMount::default());
        scene.mount(LogoMount {
            origin: IVec2::new(5000, 5000),
            ..LogoMount::default()
        });
        scene.advance(0.016);

        let snap = RenderSnapshot::build(&scene);
        assert_eq!(snap.frame_index, 1);
        assert_eq!(snap.views.len(), 1);
        assert_eq!(snap.views[0].view, visible);
        assert_eq!(snap.instance_bytes().len(), PANEL_COUNT * std::mem::size_of::<PanelInstance>());
    }

    #[test]
    fn panels_follow_engine_poses() {
        let mut scene = Scene::new(UVec2::new(640, 480), PresetTable::builtin());
        let engine = MotionEngine::from_preset(Preset::Assemble);
        let id = scene.mount_engine(IVec2::ZERO, DVec2::splat(20.0), engine);
        scene.advance(0.0);
        scene.advance(3.0);

        let snap = RenderSnapshot::build(&scene);
        let logo = scene.logo(id).unwrap();
        for (panel, pose) in snap.views[0].panels.iter().zip(logo.engine.poses()) {
            assert_eq!(*panel, PanelInstance::from_pose(pose, logo.engine.group_yaw()));
        }
        assert_eq!(snap.views[0].scissor.size, scene.compositor.view(id).unwrap().size);
    }
}
