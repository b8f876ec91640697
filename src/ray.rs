//! Ray representation for 3D ray tracing.
//!
//! A ray is defined as r(t) = origin + t * direction, representing a semi-infinite
//! line in 3D space used for intersection testing.

use crate::vec3::{Colour, Point3, Vec3};

/// Horizon colour of the sky gradient, seen looking straight down.
pub const SKY_HORIZON: Colour = Colour::WHITE;

/// Zenith colour of the sky gradient, seen looking straight up.
pub const SKY_ZENITH: Colour = Colour::new(0.5, 0.7, 1.0);

/// Ray in 3D space defined by origin and direction.
///
/// Mathematical representation: r(t) = origin + t * direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    pub origin: Point3,

    /// Direction vector of the ray.
    ///
    /// Not required to be normalized; camera rays are not.
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Compute a point at parameter t along the ray.
    ///
    /// Returns r(t) = origin + t * direction.
    pub fn at(&self, t: f32) -> Point3 {
        self.origin + self.direction * t
    }

    /// Sky colour seen along this ray when it hits nothing.
    ///
    /// Blends from [`SKY_HORIZON`] (direction pointing down) to [`SKY_ZENITH`]
    /// (pointing up) on the y component only. The direction must be non-zero.
    pub fn background_colour(&self) -> Colour {
        let unit_direction = self.direction.normalize();
        // y = -1 gives a = 0, y = 1 gives a = 1
        let a = 0.5 * (unit_direction.y() + 1.0);
        SKY_HORIZON.lerp(SKY_ZENITH, a)
    }
}
