//! Error types for simulation operations.

use core::fmt;

/// Errors that can occur while building or stepping a simulation.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// A value was outside the domain the operation accepts (negative mass,
    /// stiffness outside `[0, 1]`, non-finite force, invalid time step...).
    InvalidArgument(&'static str),
    /// Attempted to normalize a zero-length vector.
    DivideByZero,
    /// Particle index is out of bounds.
    IndexOutOfRange { index: usize, count: usize },
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::InvalidArgument(reason) => write!(f, "invalid argument: {}", reason),
            PhysicsError::DivideByZero => write!(f, "cannot normalize a zero-length vector"),
            PhysicsError::IndexOutOfRange { index, count } => {
                write!(f, "particle index {} out of range (count: {})", index, count)
            }
        }
    }
}

impl core::error::Error for PhysicsError {}

/// Check `index` against `count`, producing the matching error.
pub(crate) fn check_index(index: usize, count: usize) -> Result<(), PhysicsError> {
    if index < count {
        Ok(())
    } else {
        Err(PhysicsError::IndexOutOfRange { index, count })
    }
}
