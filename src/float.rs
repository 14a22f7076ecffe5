//! Floating-point abstraction trait for generic numeric operations.

use core::cmp::PartialOrd;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// Trait abstracting floating-point operations needed by the simulation.
///
/// Implemented for `f32` and `f64`. All transcendental functions go through
/// `libm` so the crate stays `no_std`.
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Default
    + core::fmt::Debug
    + core::fmt::Display
{
    /// The additive identity (0.0).
    fn zero() -> Self;
    /// The multiplicative identity (1.0).
    fn one() -> Self;
    /// Half (0.5).
    fn half() -> Self;
    /// Two (2.0).
    fn two() -> Self;
    /// Pi (~3.14159).
    fn pi() -> Self;
    /// Positive infinity.
    fn infinity() -> Self;
    /// Square root.
    fn sqrt(self) -> Self;
    /// Sine.
    fn sin(self) -> Self;
    /// Cosine.
    fn cos(self) -> Self;
    /// Absolute value.
    fn abs(self) -> Self;
    /// Minimum of two values.
    fn min(self, other: Self) -> Self;
    /// Maximum of two values.
    fn max(self, other: Self) -> Self;
    /// Convert from f32 (for constants and configuration).
    fn from_f32(v: f32) -> Self;
    /// Convert from a count (particle indices, segment numbers).
    fn from_usize(v: usize) -> Self;
    /// Arctangent of y/x, with correct quadrant.
    fn atan2(y: Self, x: Self) -> Self;
    /// Neither NaN nor infinite.
    fn is_finite(self) -> bool;

    /// Check if approximately zero within epsilon.
    fn is_near_zero(self, epsilon: Self) -> bool {
        self.abs() < epsilon
    }
}

macro_rules! impl_float {
    ($t:ident, $sqrt:ident, $sin:ident, $cos:ident, $fabs:ident, $atan2:ident) => {
        impl Float for $t {
            #[inline] fn zero() -> Self { 0.0 }
            #[inline] fn one() -> Self { 1.0 }
            #[inline] fn half() -> Self { 0.5 }
            #[inline] fn two() -> Self { 2.0 }
            #[inline] fn pi() -> Self { core::$t::consts::PI }
            #[inline] fn infinity() -> Self { $t::INFINITY }
            #[inline] fn sqrt(self) -> Self { libm::$sqrt(self) }
            #[inline] fn sin(self) -> Self { libm::$sin(self) }
            #[inline] fn cos(self) -> Self { libm::$cos(self) }
            #[inline] fn abs(self) -> Self { libm::$fabs(self) }
            #[inline] fn min(self, other: Self) -> Self { if other < self { other } else { self } }
            #[inline] fn max(self, other: Self) -> Self { if other > self { other } else { self } }
            #[inline] fn from_f32(v: f32) -> Self { v as $t }
            #[inline] fn from_usize(v: usize) -> Self { v as $t }
            #[inline] fn atan2(y: Self, x: Self) -> Self { libm::$atan2(y, x) }
            #[inline] fn is_finite(self) -> bool { $t::is_finite(self) }
        }
    };
}

impl_float!(f32, sqrtf, sinf, cosf, fabsf, atan2f);
impl_float!(f64, sqrt, sin, cos, fabs, atan2);
