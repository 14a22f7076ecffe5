//! 2D vector type used for every position, force and acceleration.

use crate::error::PhysicsError;
use crate::float::Float;
use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// 2D vector for planar physics.
///
/// A plain `Copy` value: every operation returns a new vector. Addition,
/// subtraction, negation and scalar multiply/divide are the operator traits.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Create a new 2D vector.
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }

    /// Zero vector.
    pub fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }

    /// Scale both components by a scalar.
    pub fn scale(self, s: F) -> Self { Vec2 { x: self.x * s, y: self.y * s } }

    /// Same as unary `-`.
    pub fn negate(self) -> Self { Vec2 { x: -self.x, y: -self.y } }

    /// Dot product.
    pub fn dot(self, other: Self) -> F { self.x * other.x + self.y * other.y }

    /// 2D cross product (returns scalar): self.x * other.y - self.y * other.x
    pub fn cross(self, other: Self) -> F {
        self.x * other.y - self.y * other.x
    }

    /// Perpendicular vector (rotated 90 degrees counter-clockwise).
    pub fn perp(self) -> Self {
        Vec2 { x: -self.y, y: self.x }
    }

    /// Squared magnitude (avoids sqrt).
    pub fn magnitude_sq(self) -> F { self.dot(self) }

    /// Euclidean length, `sqrt(x² + y²)`.
    pub fn magnitude(self) -> F { self.magnitude_sq().sqrt() }

    /// Unit vector in the same direction.
    ///
    /// Fails with [`PhysicsError::DivideByZero`] for a zero vector rather than
    /// producing NaNs or silently returning zero.
    pub fn normalize(self) -> Result<Self, PhysicsError> {
        let len = self.magnitude();
        if len == F::zero() {
            return Err(PhysicsError::DivideByZero);
        }
        Ok(self / len)
    }

    /// Distance between two points.
    pub fn distance_to(self, other: Self) -> F { (self - other).magnitude() }

    /// Linear interpolation between self and other.
    pub fn lerp(self, other: Self, t: F) -> Self {
        self + (other - self).scale(t)
    }

    /// Unsigned angle between two vectors, in `[0, π]`.
    ///
    /// Zero when either vector has zero length.
    pub fn angle_between(self, other: Self) -> F {
        F::atan2(self.cross(other).abs(), self.dot(other))
    }

    /// True when both components are finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec2 { x: -self.x, y: -self.y } }
}

impl<F: Float> Mul<F> for Vec2<F> {
    type Output = Self;
    fn mul(self, s: F) -> Self { self.scale(s) }
}

impl<F: Float> Div<F> for Vec2<F> {
    type Output = Self;
    fn div(self, s: F) -> Self { Vec2 { x: self.x / s, y: self.y / s } }
}

impl<F: Float> AddAssign for Vec2<F> {
    fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
}

impl<F: Float> SubAssign for Vec2<F> {
    fn sub_assign(&mut self, rhs: Self) { *self = *self - rhs; }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec2_magnitude() {
        let v = Vec2::new(3.0f32, 4.0);
        assert!((v.magnitude() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn normalize_zero_vector_fails() {
        let v = Vec2::<f64>::zero();
        assert_eq!(v.normalize(), Err(PhysicsError::DivideByZero));
    }

    #[test]
    fn normalize_has_unit_length() {
        let n = Vec2::new(-6.0f64, 8.0).normalize().unwrap();
        assert!((n.magnitude() - 1.0).abs() < 1e-12);
        assert!((n.x + 0.6).abs() < 1e-12);
        assert!((n.y - 0.8).abs() < 1e-12);
    }

    #[test]
    fn operators() {
        let a = Vec2::new(1.0f64, 2.0);
        let b = Vec2::new(0.5f64, -4.0);
        assert_eq!(a + b, Vec2::new(1.5, -2.0));
        assert_eq!(a - b, Vec2::new(0.5, 6.0));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
        assert_eq!(-a, a.negate());
        assert_eq!(a * 3.0, a.scale(3.0));
        assert_eq!(a / 2.0, Vec2::new(0.5, 1.0));
        assert_eq!(a.dot(b), 0.5 - 8.0);

        let mut c = a;
        c += b;
        c -= a;
        assert_eq!(c, b);
    }

    #[test]
    fn angle_between_right_angle() {
        let a = Vec2::new(1.0f64, 0.0);
        let b = Vec2::new(0.0f64, -2.0);
        assert!((a.angle_between(b) - core::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn distance_calculation() {
        let a = Vec2::new(0.0f32, 0.0);
        let b = Vec2::new(3.0f32, 4.0);
        assert!((a.distance_to(b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn non_finite_detected() {
        assert!(Vec2::new(1.0f64, 2.0).is_finite());
        assert!(!Vec2::new(f64::NAN, 2.0).is_finite());
        assert!(!Vec2::new(1.0f64, f64::INFINITY).is_finite());
    }
}
