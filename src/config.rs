//! Configuration types for the integrator.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::vec::Vec2;

/// Default number of constraint relaxation passes per step.
pub const DEFAULT_ITERATIONS: usize = 8;

/// Default velocity retention factor.
pub const DEFAULT_DAMPING: f32 = 0.99;

/// Frame time of a 60 Hz loop.
pub const DEFAULT_TIME_STEP: f32 = 1.0 / 60.0;

/// Configuration for the constraint solver and simulation.
///
/// # Builder Pattern
/// ```
/// use tether::config::SolverConfig;
/// use tether::vec::Vec2;
///
/// let config: SolverConfig<f32> = SolverConfig::new()
///     .with_iterations(10)
///     .with_gravity(Vec2::new(0.0, 800.0))
///     .with_damping(0.99);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SolverConfig<F: Float> {
    /// Number of constraint relaxation passes per step.
    /// More iterations = stiffer and more accurate, but slower. Default: 8.
    pub iterations: usize,
    /// Gravity acceleration vector. Default: zero (no gravity).
    pub gravity: Vec2<F>,
    /// Fraction of velocity kept each step. Only values strictly inside
    /// (0, 1) have an effect; anything else disables global damping.
    /// Default: 0.99.
    pub damping: F,
}

impl<F: Float> SolverConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SolverConfig {
            iterations: DEFAULT_ITERATIONS,
            gravity: Vec2::zero(),
            damping: F::from_f32(DEFAULT_DAMPING),
        }
    }

    /// Set the number of constraint iterations.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the gravity vector.
    pub fn with_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the damping factor.
    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    /// Whether the global damping phase runs with this configuration.
    pub fn damping_active(&self) -> bool {
        self.damping > F::zero() && self.damping < F::one()
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        if self.iterations == 0 {
            return Err(PhysicsError::InvalidArgument("at least one constraint iteration is required"));
        }
        if !self.gravity.is_finite() {
            return Err(PhysicsError::InvalidArgument("gravity must be finite"));
        }
        if !self.damping.is_finite() {
            return Err(PhysicsError::InvalidArgument("damping must be finite"));
        }
        Ok(())
    }
}

impl<F: Float> Default for SolverConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
