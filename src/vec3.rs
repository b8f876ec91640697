//! Vector types for positions, directions and colours.
//!
//! All three wrap the same SIMD-friendly `glam::Vec3A` triple but are kept
//! as distinct types so a position cannot be mixed up with a colour. Moving
//! between them is always explicit.

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

use glam::Vec3A;

/// Free vector in 3D space (directions, offsets, normals).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3(Vec3A);

/// Position in world space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3(Vec3A);

/// Linear RGB colour, one channel per component.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Colour(Vec3A);

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self(Vec3A::ZERO);
    /// Vector with every component set to one.
    pub const ONE: Self = Self(Vec3A::ONE);

    /// Create a vector from its components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3A::new(x, y, z))
    }

    /// The x component.
    pub fn x(self) -> f32 {
        self.0.x
    }

    /// The y component.
    pub fn y(self) -> f32 {
        self.0.y
    }

    /// The z component.
    pub fn z(self) -> f32 {
        self.0.z
    }

    /// Dot product.
    pub fn dot(self, rhs: Self) -> f32 {
        self.0.dot(rhs.0)
    }

    /// Squared Euclidean length.
    pub fn length_squared(self) -> f32 {
        self.0.length_squared()
    }

    /// Euclidean length.
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Scale to unit length.
    ///
    /// # Panics
    ///
    /// Panics if the vector has zero (or non-finite) length.
    pub fn normalize(self) -> Self {
        let length = self.length();
        assert!(
            length > 0.0 && length.is_finite(),
            "cannot normalize a vector of length {length}"
        );
        self / length
    }

    /// Unit vector in the same direction, or `None` for a zero-length vector.
    pub fn try_normalize(self) -> Option<Self> {
        self.0.try_normalize().map(Self)
    }

    /// Reinterpret as a position relative to the world origin.
    pub fn to_point(self) -> Point3 {
        Point3(self.0)
    }
}

impl Point3 {
    /// The world origin.
    pub const ORIGIN: Self = Self(Vec3A::ZERO);

    /// Create a point from its coordinates.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3A::new(x, y, z))
    }

    /// The x coordinate.
    pub fn x(self) -> f32 {
        self.0.x
    }

    /// The y coordinate.
    pub fn y(self) -> f32 {
        self.0.y
    }

    /// The z coordinate.
    pub fn z(self) -> f32 {
        self.0.z
    }

    /// Offset of this point from the world origin.
    pub fn to_vec(self) -> Vec3 {
        Vec3(self.0)
    }
}

impl Colour {
    /// All channels zero.
    pub const BLACK: Self = Self(Vec3A::ZERO);
    /// All channels one.
    pub const WHITE: Self = Self(Vec3A::ONE);

    /// Create a colour from its channels.
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self(Vec3A::new(r, g, b))
    }

    /// Use the components of a vector directly as colour channels.
    pub fn from_vec(v: Vec3) -> Self {
        Self(v.0)
    }

    /// Red channel.
    pub fn r(self) -> f32 {
        self.0.x
    }

    /// Green channel.
    pub fn g(self) -> f32 {
        self.0.y
    }

    /// Blue channel.
    pub fn b(self) -> f32 {
        self.0.z
    }

    /// Linear blend: `self * (1 - t) + end * t`.
    pub fn lerp(self, end: Self, t: f32) -> Self {
        self * (1.0 - t) + end * t
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self(self.0 * rhs)
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs * self
    }
}

impl Div<f32> for Vec3 {
    type Output = Self;

    fn div(self, rhs: f32) -> Self {
        debug_assert!(rhs != 0.0, "vector divided by zero");
        Self(self.0 / rhs)
    }
}

impl Add<Vec3> for Point3 {
    type Output = Self;

    fn add(self, rhs: Vec3) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub<Vec3> for Point3 {
    type Output = Self;

    fn sub(self, rhs: Vec3) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Sub for Point3 {
    type Output = Vec3;

    fn sub(self, rhs: Self) -> Vec3 {
        Vec3(self.0 - rhs.0)
    }
}

impl Add for Colour {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Colour {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Mul<f32> for Colour {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self(self.0 * rhs)
    }
}

impl Div<f32> for Colour {
    type Output = Self;

    fn div(self, rhs: f32) -> Self {
        debug_assert!(rhs != 0.0, "colour divided by zero");
        Self(self.0 / rhs)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    fn random_vec(rng: &mut ChaCha20Rng) -> Vec3 {
        Vec3::new(
            rng.random_range(-10.0..10.0),
            rng.random_range(-10.0..10.0),
            rng.random_range(-10.0..10.0),
        )
    }

    #[test]
    fn test_arithmetic() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, -5.0, 6.0);

        assert_eq!(a + b, Vec3::new(5.0, -3.0, 9.0));
        assert_eq!(a - b, Vec3::new(-3.0, 7.0, -3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(b / 2.0, Vec3::new(2.0, -2.5, 3.0));
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(a.dot(b), 12.0);
        assert_eq!(Vec3::new(3.0, 4.0, 0.0).length(), 5.0);
        assert_eq!(Vec3::new(3.0, 4.0, 0.0).length_squared(), 25.0);
    }

    #[test]
    fn test_point_and_colour_conversions() {
        let p = Point3::new(1.0, 1.0, 1.0);
        let q = Point3::new(0.0, 2.0, -1.0);

        assert_eq!(p - q, Vec3::new(1.0, -1.0, 2.0));
        assert_eq!(q + (p - q), p);
        assert_eq!(p - Vec3::ONE, Point3::ORIGIN);
        assert_eq!(p.to_vec().to_point(), p);
        assert_eq!(Colour::from_vec(Vec3::new(0.1, 0.2, 0.3)), Colour::new(0.1, 0.2, 0.3));
    }

    #[test]
    fn test_normalize_gives_unit_length() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = random_vec(&mut rng);
            if v.length_squared() < 1e-6 {
                continue;
            }
            assert_abs_diff_eq!(v.normalize().length(), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    #[should_panic(expected = "cannot normalize")]
    fn test_normalize_zero_panics() {
        let _ = Vec3::ZERO.normalize();
    }

    #[test]
    fn test_try_normalize_zero() {
        assert_eq!(Vec3::ZERO.try_normalize(), None);
        assert_eq!(Vec3::new(0.0, 0.0, 2.0).try_normalize(), Some(Vec3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_dot_symmetric_and_triangle_inequality() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        for _ in 0..1000 {
            let a = random_vec(&mut rng);
            let b = random_vec(&mut rng);
            assert_eq!(a.dot(b), b.dot(a));
            assert!((a + b).length() <= a.length() + b.length() + 1e-4);
        }
    }

    #[test]
    fn test_colour_lerp_endpoints() {
        let start = Colour::WHITE;
        let end = Colour::new(0.5, 0.7, 1.0);
        assert_eq!(start.lerp(end, 0.0), start);
        assert_eq!(start.lerp(end, 1.0), end);
    }
}
