//! Camera for ray generation.
//!
//! A fixed pinhole camera at the world origin looking down -z through a
//! viewport two units tall, one unit in front of it.

use crate::ray::Ray;
use crate::vec3::{Point3, Vec3};

/// Height of the viewport in world units.
pub const VIEWPORT_HEIGHT: f32 = 2.0;

/// Distance from the camera origin to the viewport plane.
pub const FOCAL_LENGTH: f32 = 1.0;

/// Pinhole camera mapping normalized image coordinates to world rays.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Rendered image width in pixel count
    image_width: u32,
    /// Rendered image height in pixel count, `floor(width / aspect_ratio)`
    image_height: u32,
    /// Camera position in world space
    origin: Point3,
    /// Vector spanning the full viewport width
    horizontal: Vec3,
    /// Vector spanning the full viewport height
    vertical: Vec3,
    /// World position of the bottom-left viewport corner
    lower_left_corner: Point3,
}

impl Camera {
    /// Build the camera for an image of `image_width` pixels at the given aspect ratio.
    ///
    /// `aspect_ratio` must be positive; the derived height may be zero for
    /// extreme ratios, which callers are expected to reject.
    pub fn new(aspect_ratio: f32, image_width: u32) -> Self {
        let image_height = image_height_for(aspect_ratio, image_width);

        let viewport_width = aspect_ratio * VIEWPORT_HEIGHT;
        let origin = Point3::ORIGIN;
        let horizontal = Vec3::new(viewport_width, 0.0, 0.0);
        let vertical = Vec3::new(0.0, VIEWPORT_HEIGHT, 0.0);
        let lower_left_corner =
            origin - horizontal / 2.0 - vertical / 2.0 - Vec3::new(0.0, 0.0, FOCAL_LENGTH);

        Self {
            image_width,
            image_height,
            origin,
            horizontal,
            vertical,
            lower_left_corner,
        }
    }

    /// Image width in pixels.
    pub fn image_width(&self) -> u32 {
        self.image_width
    }

    /// Image height in pixels.
    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    /// Camera position, the eye point of every ray.
    pub fn origin(&self) -> Point3 {
        self.origin
    }

    /// World position of the bottom-left viewport corner.
    pub fn lower_left_corner(&self) -> Point3 {
        self.lower_left_corner
    }

    /// Ray through the viewport point at normalized coordinates `(u, v)`.
    ///
    /// `(0, 0)` is the bottom-left viewport corner and `(1, 1)` the top-right.
    pub fn get_ray(&self, u: f32, v: f32) -> Ray {
        let target = self.lower_left_corner + self.horizontal * u + self.vertical * v;
        Ray::new(self.origin, target - self.origin)
    }

    /// Ray through pixel column `i`, row `j` (row 0 at the bottom), offset by
    /// `(du, dv)` pixels within it.
    pub fn pixel_ray(&self, i: u32, j: u32, du: f32, dv: f32) -> Ray {
        let u = (i as f32 + du) / span(self.image_width);
        let v = (j as f32 + dv) / span(self.image_height);
        self.get_ray(u, v)
    }
}

/// Image height for a width and aspect ratio, rounded down.
pub fn image_height_for(aspect_ratio: f32, image_width: u32) -> u32 {
    (image_width as f32 / aspect_ratio).floor() as u32
}

/// Pixel-index span across a dimension; a single pixel spans 1 to avoid dividing by zero.
fn span(pixels: u32) -> f32 {
    pixels.saturating_sub(1).max(1) as f32
}
