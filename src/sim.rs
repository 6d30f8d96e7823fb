pub mod animator;
pub mod camera;
pub mod easing;
pub mod paths;
pub mod pose;
pub mod preset;
pub mod scene_tree;
