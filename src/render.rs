//! Per-pixel sampling and the image row loop.

use std::io::{self, Write};
use std::time::Instant;

use indicatif::ProgressBar;
use log::{debug, info};
use rand::Rng;
use rayon::prelude::*;

use crate::camera::Camera;
use crate::hittable::Hittable;
use crate::interval::Interval;
use crate::output::PpmWriter;
use crate::random::{self, Jitter};
use crate::ray::Ray;
use crate::vec3::{Colour, Vec3};

/// Colour seen along a ray.
///
/// Hits are shaded by mapping the unit normal from [-1, 1] to [0, 1] per
/// channel; misses show the sky gradient.
pub fn ray_colour(r: &Ray, world: &dyn Hittable) -> Colour {
    match world.hit(r, Interval::NON_NEGATIVE) {
        Some(rec) => Colour::from_vec((rec.normal + Vec3::ONE) * 0.5),
        None => r.background_colour(),
    }
}

/// Sampling settings plus the camera they apply to.
#[derive(Debug, Clone)]
pub struct Renderer {
    camera: Camera,
    /// Number of samples averaged for each pixel, at least one
    samples_per_pixel: u32,
    jitter: Jitter,
    seed: u64,
    /// Render rows on the rayon pool instead of the calling thread
    parallel: bool,
}

impl Renderer {
    /// Renderer taking `samples_per_pixel` samples per pixel, serial by default.
    ///
    /// # Panics
    ///
    /// Panics if `samples_per_pixel` is zero.
    pub fn new(camera: Camera, samples_per_pixel: u32, jitter: Jitter, seed: u64) -> Self {
        assert!(samples_per_pixel >= 1, "at least one sample per pixel is required");
        Self {
            camera,
            samples_per_pixel,
            jitter,
            seed,
            parallel: false,
        }
    }

    /// Render rows in parallel. Output is identical to the serial path.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Camera the renderer casts rays from.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Averaged colour of pixel `(i, j)`, row 0 at the bottom.
    pub fn pixel_colour<R: Rng>(&self, world: &dyn Hittable, i: u32, j: u32, rng: &mut R) -> Colour {
        let mut pixel_colour = Colour::BLACK;
        for _sample in 0..self.samples_per_pixel {
            let (du, dv) = self.jitter.offset(rng);
            let r = self.camera.pixel_ray(i, j, du, dv);
            pixel_colour += ray_colour(&r, world);
        }
        pixel_colour / self.samples_per_pixel as f32
    }

    /// Colours of row `j`, left to right.
    pub fn render_row(&self, world: &dyn Hittable, j: u32) -> Vec<Colour> {
        let mut rng = random::row_rng(self.seed, j);
        (0..self.camera.image_width())
            .map(|i| self.pixel_colour(world, i, j, &mut rng))
            .collect()
    }

    /// Render the whole image into `out`, top row first.
    ///
    /// Stops at the first write error and returns it.
    pub fn render<W: Write>(
        &self,
        world: &dyn Hittable,
        out: &mut PpmWriter<W>,
        progress: &ProgressBar,
    ) -> io::Result<()> {
        let width = self.camera.image_width();
        let height = self.camera.image_height();

        info!(
            "Rendering {}x{} with {} samples per pixel (jitter: {:?})",
            width, height, self.samples_per_pixel, self.jitter
        );
        let start = Instant::now();
        progress.set_length(u64::from(height));

        out.write_header(width, height)?;

        if self.parallel {
            info!("Rendering rows on {} threads...", rayon::current_num_threads());
            let rows: Vec<Vec<Colour>> = (0..height)
                .into_par_iter()
                .rev()
                .map(|j| {
                    let row = self.render_row(world, j);
                    progress.inc(1);
                    row
                })
                .collect();
            for row in &rows {
                out.write_row(row)?;
            }
        } else {
            for j in (0..height).rev() {
                debug!("Scanlines remaining: {}", j + 1);
                let row = self.render_row(world, j);
                out.write_row(&row)?;
                progress.inc(1);
            }
        }

        progress.finish();
        info!("Image generated in {:.2?}", start.elapsed());
        Ok(())
    }
}
