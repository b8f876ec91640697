//! Ray-object intersection system.
//!
//! Defines the Hittable trait for geometric primitives and HitRecord for
//! storing intersection data.

use crate::interval::Interval;
use crate::ray::Ray;
use crate::vec3::{Point3, Vec3};

/// Ray-object intersection information.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Point where the ray intersects the object
    pub point: Point3,
    /// Surface normal at the intersection point (unit vector, facing the ray)
    pub normal: Vec3,
    /// Ray parameter of the intersection point
    pub t: f32,
    /// True if ray hits the front face, false if hits the back face
    pub front_face: bool,
}

impl HitRecord {
    /// Build a record from an outward normal, orienting it against the ray.
    ///
    /// `outward_normal` must be unit length. The stored normal always points
    /// against the incident ray; shading relies on this.
    pub fn with_face_normal(r: &Ray, point: Point3, t: f32, outward_normal: Vec3) -> Self {
        let front_face = r.direction.dot(outward_normal) < 0.0;
        let normal = if front_face {
            outward_normal
        } else {
            -outward_normal
        };
        Self {
            point,
            normal,
            t,
            front_face,
        }
    }
}

/// Trait for objects that can be intersected by rays.
///
/// Must be thread-safe (Sync + Send) so scenes can be shared by parallel
/// row renderers.
pub trait Hittable: Sync + Send {
    /// Nearest intersection with parameter inside `ray_t`, if any.
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord>;
}
