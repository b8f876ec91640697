use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};

use ppm_tracer::config::RenderConfig;
use ppm_tracer::output::PpmWriter;
use ppm_tracer::random::Jitter;

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;

fn scanline_progress(hidden: bool) -> anyhow::Result<ProgressBar> {
    if hidden {
        return Ok(ProgressBar::hidden());
    }
    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40} {pos}/{len} scanlines ETA: {eta}")
            .context("invalid progress bar template")?,
    );
    Ok(pb)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logger(args.debug_level.clone().into());

    // Log application startup with version information
    info!("ppm-tracer - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    let mut config = match &args.config {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig::default(),
    };
    config.apply(&args.overrides());
    config.validate().context("invalid render settings")?;

    if config.samples_per_pixel > 1 && config.jitter() == Jitter::None {
        warn!(
            "{} samples per pixel without jitter all trace the same ray",
            config.samples_per_pixel
        );
    }

    let scene = config.scene();
    let renderer = config.renderer();
    info!("Scene has {} spheres", scene.len());

    let progress = scanline_progress(args.no_progress)?;

    let sink: Box<dyn Write> = if args.to_stdout() {
        Box::new(io::stdout().lock())
    } else {
        let file = File::create(&args.output)
            .with_context(|| format!("failed to create {}", args.output.display()))?;
        Box::new(file)
    };
    let mut out = PpmWriter::new(BufWriter::new(sink));

    renderer
        .render(&scene, &mut out, &progress)
        .context("failed to write image")?;
    out.finish().context("failed to write image")?;

    if !args.to_stdout() {
        info!("Image saved as {}", args.output.display());
    }
    Ok(())
}
