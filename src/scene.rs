//! Scene made of spheres.
//!
//! Uses linear search for intersection testing. Built once at startup and
//! shared read-only with the renderer.

use crate::hittable::{HitRecord, Hittable};
use crate::interval::Interval;
use crate::ray::Ray;
use crate::sphere::Sphere;
use crate::vec3::Point3;

/// Ordered collection of spheres.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    spheres: Vec<Sphere>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scene from an existing list of spheres, keeping their order.
    pub fn from_spheres(spheres: Vec<Sphere>) -> Self {
        Self { spheres }
    }

    /// A small sphere straight ahead of the camera resting on a huge ground sphere.
    pub fn default_scene() -> Self {
        let mut scene = Self::new();
        scene.add(Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5));
        scene.add(Sphere::new(Point3::new(0.0, -100.5, -1.0), 100.0));
        scene
    }

    /// Just the sphere straight ahead of the camera.
    pub fn single_sphere() -> Self {
        Self::from_spheres(vec![Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5)])
    }

    /// Add a sphere to the scene.
    pub fn add(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    /// Spheres in insertion order.
    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    /// Number of spheres.
    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    /// True when the scene has no spheres.
    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }
}

impl Hittable for Scene {
    /// Closest hit across all spheres.
    ///
    /// The upper bound shrinks to each accepted hit, and a later sphere only
    /// replaces the current hit when strictly closer, so the result does not
    /// depend on the order the spheres were added in.
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let mut closest: Option<HitRecord> = None;
        let mut closest_so_far = ray_t.max;

        for sphere in &self.spheres {
            if let Some(rec) = sphere.hit(r, ray_t.with_max(closest_so_far)) {
                if closest.is_none() || rec.t < closest_so_far {
                    closest_so_far = rec.t;
                    closest = Some(rec);
                }
            }
        }

        closest
    }
}
