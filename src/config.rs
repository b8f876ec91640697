//! Render settings.
//!
//! Settings come from three layers, later ones winning: built-in defaults,
//! an optional TOML file, and command line overrides.

use std::fs;
use std::path::Path;

use anyhow::{bail, ensure, Context};
use log::debug;
use serde::Deserialize;

use crate::camera::{image_height_for, Camera};
use crate::random::Jitter;
use crate::render::Renderer;
use crate::scene::Scene;
use crate::sphere::Sphere;
use crate::vec3::Point3;

/// One sphere as written in a config file.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SphereConfig {
    /// World position as `[x, y, z]`
    pub center: [f32; 3],
    /// Radius, positive and finite
    pub radius: f32,
}

/// Everything needed to render an image.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Image width in pixels
    pub image_width: u32,
    /// Width divided by height
    pub aspect_ratio: f32,
    /// Samples averaged per pixel, at least one
    pub samples_per_pixel: u32,
    /// Sub-pixel offset strategy; unset resolves through [`jitter`](Self::jitter).
    pub jitter: Option<Jitter>,
    /// Seed for the per-row jitter generators
    pub seed: u64,
    /// Render rows on the rayon pool
    pub parallel: bool,
    /// Scene contents; `None` renders [`Scene::default_scene`].
    pub spheres: Option<Vec<SphereConfig>>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            image_width: 400,
            aspect_ratio: 16.0 / 9.0,
            samples_per_pixel: 1,
            jitter: None,
            seed: 0,
            parallel: false,
            spheres: None,
        }
    }
}

/// Values given on the command line, each replacing the configured one when set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    /// Replaces [`RenderConfig::image_width`]
    pub image_width: Option<u32>,
    /// Replaces [`RenderConfig::aspect_ratio`]
    pub aspect_ratio: Option<f32>,
    /// Replaces [`RenderConfig::samples_per_pixel`]
    pub samples_per_pixel: Option<u32>,
    /// Replaces [`RenderConfig::jitter`]
    pub jitter: Option<Jitter>,
    /// Replaces [`RenderConfig::seed`]
    pub seed: Option<u64>,
    /// Replaces [`RenderConfig::parallel`]
    pub parallel: Option<bool>,
}

impl RenderConfig {
    /// Parse settings from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        toml::from_str(text).context("invalid render config")
    }

    /// Read and parse a TOML settings file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::from_toml_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Layer command line values over the loaded settings.
    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(image_width) = overrides.image_width {
            self.image_width = image_width;
        }
        if let Some(aspect_ratio) = overrides.aspect_ratio {
            self.aspect_ratio = aspect_ratio;
        }
        if let Some(samples_per_pixel) = overrides.samples_per_pixel {
            self.samples_per_pixel = samples_per_pixel;
        }
        if let Some(jitter) = overrides.jitter {
            self.jitter = Some(jitter);
        }
        if let Some(seed) = overrides.seed {
            self.seed = seed;
        }
        if let Some(parallel) = overrides.parallel {
            self.parallel = parallel;
        }
    }

    /// Check every setting so building the camera, scene and renderer cannot panic.
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(self.image_width >= 1, "image width must be at least 1 pixel");
        ensure!(
            self.aspect_ratio.is_finite() && self.aspect_ratio > 0.0,
            "aspect ratio must be a positive number, got {}",
            self.aspect_ratio
        );
        let height = image_height_for(self.aspect_ratio, self.image_width);
        if height < 1 {
            bail!(
                "image width {} at aspect ratio {} gives an image height of 0",
                self.image_width,
                self.aspect_ratio
            );
        }
        ensure!(self.samples_per_pixel >= 1, "samples per pixel must be at least 1");

        for (index, sphere) in self.spheres.iter().flatten().enumerate() {
            ensure!(
                sphere.radius.is_finite() && sphere.radius > 0.0,
                "sphere {} has invalid radius {}",
                index,
                sphere.radius
            );
            ensure!(
                sphere.center.iter().all(|c| c.is_finite()),
                "sphere {} has a non-finite center {:?}",
                index,
                sphere.center
            );
        }
        Ok(())
    }

    /// Scene described by this config. Call [`validate`](Self::validate) first.
    pub fn scene(&self) -> Scene {
        match &self.spheres {
            Some(spheres) => Scene::from_spheres(
                spheres
                    .iter()
                    .map(|s| Sphere::new(Point3::new(s.center[0], s.center[1], s.center[2]), s.radius))
                    .collect(),
            ),
            None => Scene::default_scene(),
        }
    }

    /// Jitter actually used for rendering.
    ///
    /// An explicit choice always wins. Otherwise a single sample stays on the
    /// pixel coordinate and several samples get independent offsets.
    pub fn jitter(&self) -> Jitter {
        match self.jitter {
            Some(jitter) => jitter,
            None if self.samples_per_pixel > 1 => Jitter::Independent,
            None => Jitter::None,
        }
    }

    /// Camera for the configured image size.
    pub fn camera(&self) -> Camera {
        Camera::new(self.aspect_ratio, self.image_width)
    }

    /// Renderer for these settings. Call [`validate`](Self::validate) first.
    pub fn renderer(&self) -> Renderer {
        Renderer::new(self.camera(), self.samples_per_pixel, self.jitter(), self.seed)
            .parallel(self.parallel)
    }
}
