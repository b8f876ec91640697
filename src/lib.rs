//! ppm-tracer: a minimal sphere ray tracer.
//!
//! Casts one or more rays per pixel through a fixed pinhole camera into a
//! scene of spheres, shades hits by their surface normal and misses with a
//! sky gradient, and streams the result as a plain-text PPM (P3) image.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod camera;
pub mod config;
pub mod hittable;
pub mod interval;
pub mod output;
pub mod random;
pub mod ray;
pub mod render;
pub mod scene;
pub mod sphere;
pub mod vec3;
