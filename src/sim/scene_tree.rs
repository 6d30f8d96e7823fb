use std::collections::HashMap;

use glam::{DVec2, IVec2, UVec2};

use crate::{
    config::EngineConfig,
    render_engine::compositor::{Compositor, ViewId},
    resource_system::preset_table::PresetTable,
};

use super::{
    animator::{MotionEngine, TickOutcome},
    camera::ViewCamera,
};

/// Where and how to mount a logo.
#[derive(Debug, Clone)]
pub struct LogoMount {
    /// Top-left corner in page pixels.
    pub origin: IVec2,
    /// Width and height scale, 1..=100.
    pub scale: DVec2,
    pub engine: EngineConfig,
    /// Lets drag and wheel input orbit and dolly this logo's camera.
    pub interactive: bool,
}
impl Default for LogoMount {
    fn default() -> Self {
        Self {
            origin: IVec2::ZERO,
            scale: DVec2::splat(5.0),
            engine: EngineConfig::default(),
            interactive: false,
        }
    }
}

pub struct Logo {
    pub engine: MotionEngine,
    pub camera: ViewCamera,
}

/// All logos sharing one drawing surface. The host calls [`Scene::advance`]
/// once per rendered frame.
pub struct Scene {
    pub compositor: Compositor,
    pub presets: PresetTable,
    logos: HashMap<ViewId, Logo>,
    pub global_time_sec: f64,
    pub frame_index: u32,
}

impl Scene {
    pub fn new(surface: UVec2, presets: PresetTable) -> Self {
        Self {
            compositor: Compositor::new(surface),
            presets,
            logos: HashMap::new(),
            global_time_sec: 0.0,
            frame_index: 0,
        }
    }

    pub fn mount(&mut self, mount: LogoMount) -> ViewId {
        let engine = mount.engine.build_engine(&self.presets);
        let id = self.mount_engine(mount.origin, mount.scale, engine);
        if let Some(logo) = self.logos.get_mut(&id) {
            logo.camera.interactive = mount.interactive;
        }
        id
    }

    /// Mounts an engine built by the caller, e.g. one carrying a completion hook.
    pub fn mount_engine(&mut self, origin: IVec2, scale: DVec2, engine: MotionEngine) -> ViewId {
        let id = self.compositor.register(origin, scale);
        self.logos.insert(
            id,
            Logo {
                engine,
                camera: ViewCamera::default(),
            },
        );
        id
    }

    /// Stops the logo's ticks and frees its clip rectangle.
    pub fn unmount(&mut self, id: ViewId) -> bool {
        let had_logo = self.logos.remove(&id).is_some();
        let had_view = self.compositor.unregister(id);
        had_logo || had_view
    }

    pub fn logo(&self, id: ViewId) -> Option<&Logo> {
        self.logos.get(&id)
    }

    pub fn logo_mut(&mut self, id: ViewId) -> Option<&mut Logo> {
        self.logos.get_mut(&id)
    }

    pub fn logos(&self) -> impl Iterator<Item = (ViewId, &Logo)> {
        self.logos.iter().map(|(id, logo)| (*id, logo))
    }

    /// Moves the shared clock forward by `dt` and ticks every logo.
    /// Returns the logos whose entry animation finished on this frame.
    pub fn advance(&mut self, dt: f64) -> Vec<ViewId> {
        let dt = dt.max(0.0);
        self.global_time_sec += dt;
        self.frame_index = self.frame_index.wrapping_add(1);

        let mut completed = vec![];
        for (id, logo) in self.logos.iter_mut() {
            logo.camera.update();
            if logo.engine.tick(self.global_time_sec, dt) == TickOutcome::Completed {
                completed.push(*id);
            }
        }
        completed
    }

    pub fn resize(&mut self, surface: UVec2) {
        self.compositor.resize(surface);
    }

    /// Logo under the pointer and the pointer position inside its view.
    pub fn pointer(&self, position: DVec2) -> Option<(ViewId, DVec2)> {
        self.compositor.route_pointer(position)
    }

    /// Pointer drag of `delta` pixels at `position`. Returns the view whose
    /// camera took the input; None means the host may scroll the page.
    pub fn pointer_drag(&mut self, position: DVec2, delta: DVec2) -> Option<ViewId> {
        let (id, _) = self.pointer(position)?;
        let logo = self.logos.get_mut(&id)?;
        logo.camera.drag(delta.as_vec2()).then_some(id)
    }

    /// Wheel scroll of `lines` at `position`, positive toward the target.
    pub fn pointer_wheel(&mut self, position: DVec2, lines: f64) -> Option<ViewId> {
        let (id, _) = self.pointer(position)?;
        let logo = self.logos.get_mut(&id)?;
        logo.camera.wheel(lines as f32).then_some(id)
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::{
            atomic::{AtomicBool, Ordering},
            Arc,
        },
        thread,
    };

    use super::*;
    use crate::sim::{
        animator::Phase,
        pose::FINAL_POSES,
        preset::{Motion, Preset},
    };

    fn scene() -> Scene {
        Scene::new(UVec2::new(1280, 720), PresetTable::builtin())
    }

    fn mount_preset(scene: &mut Scene, preset: &str, origin: IVec2) -> ViewId {
        scene.mount(LogoMount {
            origin,
            engine: EngineConfig {
                preset: preset.to_string(),
                ..EngineConfig::default()
            },
            ..LogoMount::default()
        })
    }

    #[test]
    fn late_mounts_start_on_their_own_first_frame() {
        let mut scene = scene();
        let early = mount_preset(&mut scene, "drop", IVec2::ZERO);
        for _ in 0..30 {
            scene.advance(0.05);
        }
        let late = mount_preset(&mut scene, "drop", IVec2::new(300, 0));
        assert_eq!(scene.logo(late).unwrap().engine.phase(), Phase::Unstarted);
        scene.advance(0.05);

        let early_ratio = scene.logo(early).unwrap().engine.elapsed_ratio();
        let late_ratio = scene.logo(late).unwrap().engine.elapsed_ratio();
        assert!(early_ratio > 0.7);
        assert_eq!(late_ratio, 0.0);
    }

    #[test]
    fn completions_are_reported_once_per_logo() {
        let mut scene = scene();
        let fast = scene.mount(LogoMount {
            engine: EngineConfig::from_json(r#"{ "preset": "portal", "duration": 0.2 }"#).unwrap(),
            ..LogoMount::default()
        });
        let slow = mount_preset(&mut scene, "explosion", IVec2::new(100, 100));

        let mut reports: Vec<ViewId> = vec![];
        for _ in 0..(5 * 60) {
            reports.extend(scene.advance(1.0 / 60.0));
        }
        assert_eq!(reports.iter().filter(|id| **id == fast).count(), 1);
        assert_eq!(reports.iter().filter(|id| **id == slow).count(), 1);
        assert_eq!(scene.logo(slow).unwrap().engine.poses(), &FINAL_POSES);
    }

    #[test]
    fn unmount_stops_ticks_and_frees_the_view() {
        let mut scene = scene();
        let fired = Arc::new(AtomicBool::new(false));
        let engine = {
            let fired = fired.clone();
            MotionEngine::from_preset(Preset::Wave)
                .with_on_complete(move || fired.store(true, Ordering::SeqCst))
        };
        let id = scene.mount_engine(IVec2::ZERO, DVec2::splat(10.0), engine);
        scene.advance(0.1);
        assert!(scene.unmount(id));
        assert!(!scene.unmount(id));
        for _ in 0..100 {
            scene.advance(0.1);
        }
        assert!(!fired.load(Ordering::SeqCst));
        assert!(scene.compositor.is_empty());
        assert!(scene.pointer(DVec2::new(10.0, 10.0)).is_none());
    }

    #[test]
    fn unknown_presets_mount_as_spiral() {
        let mut scene = scene();
        let id = mount_preset(&mut scene, "confetti", IVec2::ZERO);
        assert_eq!(scene.logo(id).unwrap().engine.config().motion, Motion::Preset(Preset::Spiral));
    }

    #[test]
    fn pointer_reaches_the_mounted_logo() {
        let mut scene = scene();
        let id = mount_preset(&mut scene, "orbit", IVec2::new(50, 50));
        assert_eq!(scene.pointer(DVec2::new(60.0, 70.0)), Some((id, DVec2::new(10.0, 20.0))));
    }

    #[test]
    fn pointer_input_only_moves_interactive_cameras() {
        let mut scene = scene();
        let still = mount_preset(&mut scene, "helix", IVec2::ZERO);
        let orbiting = scene.mount(LogoMount {
            origin: IVec2::new(400, 0),
            interactive: true,
            ..LogoMount::default()
        });

        let still_eye = scene.logo(still).unwrap().camera.eye();
        assert_eq!(scene.pointer_drag(DVec2::new(10.0, 10.0), DVec2::new(80.0, 0.0)), None);
        assert_eq!(scene.pointer_wheel(DVec2::new(10.0, 10.0), 2.0), None);
        assert_eq!(
            scene.pointer_drag(DVec2::new(410.0, 10.0), DVec2::new(80.0, 0.0)),
            Some(orbiting)
        );
        assert_eq!(scene.pointer_wheel(DVec2::new(410.0, 10.0), 1.0), Some(orbiting));
        // outside every view
        assert_eq!(scene.pointer_drag(DVec2::new(1000.0, 600.0), DVec2::ONE), None);

        for _ in 0..10 {
            scene.advance(1.0 / 60.0);
        }
        let still_cam = &scene.logo(still).unwrap().camera;
        assert_eq!(still_cam.eye(), still_eye);
        assert_eq!(still_cam.rot_x, 0.0);

        let orbit_cam = &scene.logo(orbiting).unwrap().camera;
        assert!(orbit_cam.rot_x < 0.0);
        assert_eq!(orbit_cam.distance, 4.0);
    }

    #[test]
    fn scene_runs_on_a_sim_thread() {
        let mut scene = scene();
        let fired = Arc::new(AtomicBool::new(false));
        let engine = {
            let fired = fired.clone();
            MotionEngine::from_preset(Preset::Portal)
                .with_on_complete(move || fired.store(true, Ordering::SeqCst))
        };
        scene.mount_engine(IVec2::ZERO, DVec2::splat(3.0), engine);

        let scene = thread::spawn(move || {
            for _ in 0..200 {
                scene.advance(1.0 / 60.0);
            }
            scene
        })
        .join()
        .unwrap();
        assert!(fired.load(Ordering::SeqCst));
        assert_eq!(scene.frame_index, 200);
    }
}
