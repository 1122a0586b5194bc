//! Command line interface.

use clap::{Parser, ValueEnum};
use glam::Vec3A;
use log::LevelFilter;

/// Log levels selectable on the command line.
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    /// Errors only.
    Error,
    /// Errors and warnings.
    Warn,
    /// Normal operation messages.
    Info,
    /// Per-frame diagnostics.
    Debug,
    /// Everything.
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Parse a comma-separated "x,y,z" triple into a vector.
fn parse_vec3(s: &str) -> Result<Vec3A, String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 3 {
        return Err(format!("expected x,y,z — got '{s}'"));
    }
    let mut components = [0.0f32; 3];
    for (slot, part) in components.iter_mut().zip(&parts) {
        *slot = part
            .trim()
            .parse()
            .map_err(|e| format!("bad component '{part}': {e}"))?;
    }
    Ok(Vec3A::from_array(components))
}

/// Command line arguments.
#[derive(Parser)]
#[command(name = "spherecast")]
#[command(about = "Render a single sphere through a pinhole camera to a PNG")]
pub struct Args {
    /// Image resolution in pixels (square image side length)
    #[arg(short, long, default_value = "500")]
    pub resolution: u32,

    /// Camera center as "x,y,z"
    #[arg(long, default_value = "0,0,0", value_parser = parse_vec3)]
    pub camera_center: Vec3A,

    /// Camera focal length
    #[arg(long, default_value = "1.0")]
    pub focal_length: f32,

    /// Viewport width in world units
    #[arg(long, default_value = "2.0")]
    pub viewport_width: f32,

    /// Viewport height in world units
    #[arg(long, default_value = "2.0")]
    pub viewport_height: f32,

    /// Sphere center as "x,y,z"
    #[arg(long, default_value = "0,0,-1", value_parser = parse_vec3)]
    pub sphere_center: Vec3A,

    /// Sphere radius
    #[arg(long, default_value = "0.5")]
    pub sphere_radius: f32,

    /// Number of render passes over the same frame (for timing runs)
    #[arg(long, default_value = "1")]
    pub frames: u32,

    /// Render the position-gradient test pattern instead of the sphere
    #[arg(long)]
    pub test_pattern: bool,

    /// Output PNG file path
    #[arg(short, long, default_value = "output.png")]
    pub output: String,

    /// Set the logging level
    #[arg(long, default_value = "info")]
    pub debug_level: LogLevel,
}
