//! Steps one logo at a fixed frame rate and prints a JSON line per frame.
//!
//! usage: trace_motion [preset] [fps] [seconds] [presets.json]

use std::{
    env,
    io::{self, BufWriter, Write},
};

use logo_motion::{
    resource_system::{file_formats::presetfile::PresetFile, preset_table::PresetTable},
    sim::{animator::Phase, pose::PanelPoses},
    EngineConfig,
};
use serde::Serialize;

#[derive(Serialize)]
struct Frame<'a> {
    time: f64,
    phase: Phase,
    ratio: f64,
    group_yaw: f64,
    poses: &'a PanelPoses,
}

fn parse_arg<T: std::str::FromStr>(args: &[String], index: usize, default: T) -> Result<T, String> {
    match args.get(index) {
        Some(arg) => arg.parse().map_err(|_| format!("could not parse argument {index}: {arg:?}")),
        None => Ok(default),
    }
}

pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let preset = args.get(1).map(String::as_str).unwrap_or("spiral");
    let fps: f64 = parse_arg(&args, 2, 60.0)?;
    let seconds: f64 = parse_arg(&args, 3, 5.0)?;
    if fps.is_nan() || fps <= 0.0 {
        return Err(format!("fps must be positive, got {fps}").into());
    }

    let table = match args.get(4) {
        Some(path) => PresetTable::from_file(PresetFile::load(path)?)?,
        None => PresetTable::builtin(),
    };
    let config = EngineConfig {
        preset: preset.to_string(),
        ..EngineConfig::default()
    };
    let mut engine = config.build_engine(&table);
    log::info!("tracing {preset} for {seconds}s at {fps} fps, duration {}s", engine.duration());

    let dt = 1.0 / fps;
    let frames = (seconds.max(0.0) * fps).ceil() as u64;
    let mut out = BufWriter::new(io::stdout().lock());
    for frame in 0..=frames {
        let time = frame as f64 * dt;
        engine.tick(time, if frame == 0 { 0.0 } else { dt });
        let line = Frame {
            time,
            phase: engine.phase(),
            ratio: engine.elapsed_ratio(),
            group_yaw: engine.group_yaw(),
            poses: engine.poses(),
        };
        serde_json::to_writer(&mut out, &line)?;
        writeln!(out)?;
    }
    out.flush()?;

    Ok(())
}
