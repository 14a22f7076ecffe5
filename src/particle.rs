//! Verlet particles with position-based dynamics.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::vec::Vec2;

/// A Verlet particle with implicit velocity.
///
/// `old_position` is the only velocity state: the velocity is always derived
/// as `position - old_position`.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle<F: Float> {
    pub position: Vec2<F>,
    pub old_position: Vec2<F>,
    pub acceleration: Vec2<F>,
    mass: F,
    inv_mass: F,
    pub is_fixed: bool,
}

impl<F: Float> Particle<F> {
    /// Create a free particle at rest.
    ///
    /// A zero mass yields an infinite inverse mass; such particles are meant
    /// to be anchors and should be pinned.
    pub fn new(position: Vec2<F>, mass: F) -> Result<Self, PhysicsError> {
        if !position.is_finite() {
            return Err(PhysicsError::InvalidArgument("particle position must be finite"));
        }
        if !mass.is_finite() || mass < F::zero() {
            return Err(PhysicsError::InvalidArgument("mass must be finite and non-negative"));
        }
        let inv_mass = if mass == F::zero() {
            F::infinity()
        } else {
            F::one() / mass
        };
        Ok(Particle {
            position,
            old_position: position,
            acceleration: Vec2::zero(),
            mass,
            inv_mass,
            is_fixed: false,
        })
    }

    /// Create an anchored particle.
    pub fn fixed(position: Vec2<F>, mass: F) -> Result<Self, PhysicsError> {
        let mut particle = Self::new(position, mass)?;
        particle.is_fixed = true;
        Ok(particle)
    }

    pub fn mass(&self) -> F { self.mass }

    pub fn inv_mass(&self) -> F { self.inv_mass }

    /// Accumulate `force * inv_mass` into the acceleration.
    ///
    /// Non-finite forces are rejected even for fixed particles; a valid
    /// force on a fixed particle is ignored.
    pub fn apply_force(&mut self, force: Vec2<F>) -> Result<(), PhysicsError> {
        if !force.is_finite() {
            return Err(PhysicsError::InvalidArgument("force must have finite components"));
        }
        if !self.is_fixed {
            self.acceleration += force * self.inv_mass;
        }
        Ok(())
    }

    /// Accumulate a mass-independent acceleration (gravity).
    pub fn apply_acceleration(&mut self, accel: Vec2<F>) {
        if !self.is_fixed {
            self.acceleration += accel;
        }
    }

    /// Verlet step: `position += velocity + acceleration * dt²`, then clear
    /// the accumulator.
    pub fn update_position(&mut self, dt: F) {
        if self.is_fixed {
            return;
        }
        let velocity = self.velocity();
        self.old_position = self.position;
        self.position += velocity + self.acceleration * (dt * dt);
        self.acceleration = Vec2::zero();
    }

    /// Displacement over the last step (`position - old_position`).
    pub fn velocity(&self) -> Vec2<F> {
        self.position - self.old_position
    }

    /// Velocity in units per second for a step of length `dt`.
    pub fn velocity_per_second(&self, dt: F) -> Vec2<F> {
        if dt.is_near_zero(F::from_f32(1e-30)) {
            return Vec2::zero();
        }
        self.velocity() / dt
    }

    pub fn pin(&mut self) {
        self.is_fixed = true;
        self.old_position = self.position;
        self.acceleration = Vec2::zero();
    }

    pub fn unpin(&mut self) {
        self.is_fixed = false;
    }
}
