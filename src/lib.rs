pub mod config;
pub mod error;
pub mod render_engine;
pub mod render_snapshot;
pub mod resource_system;
pub mod sim;

pub use config::EngineConfig;
pub use error::LoadError;
pub use sim::{
    animator::{EngineOptions, MotionEngine, Phase, TickOutcome},
    easing::Easing,
    pose::{Pose, FINAL_POSES},
    preset::{Motion, Preset, PresetConfig},
    scene_tree::{LogoMount, Scene},
};
