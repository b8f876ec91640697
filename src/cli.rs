use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use ppm_tracer::config::Overrides;
use ppm_tracer::random::Jitter;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
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

/// Command line arguments structure using clap derive macros
#[derive(Parser)]
#[command(name = "ppm-tracer")]
#[command(about = "Render spheres against a sky gradient to a plain-text PPM image")]
pub struct Args {
    /// TOML file with render settings and scene spheres
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Image width in pixels
    #[arg(long, help = "Image width in pixels [default: 400]")]
    pub width: Option<u32>,

    /// Width divided by height; the height is derived from it
    #[arg(long, help = "Width divided by height [default: 1.7777778]")]
    pub aspect_ratio: Option<f32>,

    /// Number of samples per pixel
    #[arg(long, short = 's', help = "Number of samples per pixel [default: 1]")]
    pub samples_per_pixel: Option<u32>,

    /// Sub-pixel offset strategy for samples
    #[arg(long, value_enum, help = "Sub-pixel offset strategy [default: none for one sample, independent otherwise]")]
    pub jitter: Option<Jitter>,

    /// Seed for the jitter random source
    #[arg(long, help = "Seed for the jitter random source [default: 0]")]
    pub seed: Option<u64>,

    /// Render rows on all cores; output is identical to a serial render
    #[arg(long, help = "Render rows on all cores; output is identical to a serial render")]
    pub parallel: bool,

    /// Output file path, or "-" for stdout
    #[arg(short, long, default_value = "image.ppm", help = "Output file path, or \"-\" for stdout")]
    pub output: PathBuf,

    /// Hide the progress bar
    #[arg(long, help = "Hide the progress bar")]
    pub no_progress: bool,
}

impl Args {
    /// Settings given on the command line, to be layered over the config file.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            image_width: self.width,
            aspect_ratio: self.aspect_ratio,
            samples_per_pixel: self.samples_per_pixel,
            jitter: self.jitter,
            seed: self.seed,
            parallel: self.parallel.then_some(true),
        }
    }

    /// Whether output goes to stdout rather than a file.
    pub fn to_stdout(&self) -> bool {
        self.output.as_os_str() == "-"
    }
}
