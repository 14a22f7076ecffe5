//! Six-particle humanoid skeleton.

use crate::constraint::{Constraint, DistanceConstraint};
use crate::error::{check_index, PhysicsError};
use crate::float::Float;
use crate::particle::Particle;
use crate::topology::Topology;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

pub const HEAD: usize = 0;
pub const TORSO: usize = 1;
pub const LEFT_ARM: usize = 2;
pub const RIGHT_ARM: usize = 3;
pub const LEFT_LEG: usize = 4;
pub const RIGHT_LEG: usize = 5;

/// Number of particles in a ragdoll.
pub const PART_COUNT: usize = 6;

const PART_MASSES: [f32; PART_COUNT] = [5.0, 10.0, 3.0, 3.0, 5.0, 5.0];

/// Configuration for a ragdoll.
#[derive(Clone, Debug, PartialEq)]
pub struct RagdollConfig<F: Float> {
    /// Rest length of every limb, also used to lay out the body.
    pub limb_length: F,
    pub stiffness: F,
    pub damping: F,
}

impl<F: Float> Default for RagdollConfig<F> {
    fn default() -> Self {
        RagdollConfig {
            limb_length: F::from_f32(20.0),
            stiffness: F::half(),
            damping: F::from_f32(0.1),
        }
    }
}

/// Head, torso, two arms, and two legs, every limb hanging off the torso.
///
/// Index the parts with [`HEAD`], [`TORSO`], [`LEFT_ARM`], [`RIGHT_ARM`],
/// [`LEFT_LEG`] and [`RIGHT_LEG`].
#[derive(Clone, Debug)]
pub struct Ragdoll<F: Float> {
    particles: AllocVec<Particle<F>>,
    constraints: AllocVec<Constraint<F>>,
}

impl<F: Float> Ragdoll<F> {
    /// Build a ragdoll with its head at `position`, body extending toward +y.
    pub fn new(position: Vec2<F>, config: &RagdollConfig<F>) -> Result<Self, PhysicsError> {
        let l = config.limb_length;
        if !l.is_finite() || l <= F::zero() {
            return Err(PhysicsError::InvalidArgument("limb length must be positive"));
        }
        let one_and_half = F::from_f32(1.5);
        let two_and_half = F::from_f32(2.5);
        let offsets = [
            Vec2::new(F::zero(), F::zero()),
            Vec2::new(F::zero(), l),
            Vec2::new(-l, l * one_and_half),
            Vec2::new(l, l * one_and_half),
            Vec2::new(-l * F::half(), l * two_and_half),
            Vec2::new(l * F::half(), l * two_and_half),
        ];

        let mut particles = AllocVec::with_capacity(PART_COUNT);
        for (offset, mass) in offsets.iter().zip(PART_MASSES) {
            particles.push(Particle::new(position + *offset, F::from_f32(mass))?);
        }

        let mut constraints = AllocVec::with_capacity(PART_COUNT - 1);
        let limbs = [
            (HEAD, TORSO),
            (TORSO, LEFT_ARM),
            (TORSO, RIGHT_ARM),
            (TORSO, LEFT_LEG),
            (TORSO, RIGHT_LEG),
        ];
        for (a, b) in limbs {
            constraints.push(DistanceConstraint::new(a, b, l, config.stiffness, config.damping)?.into());
        }

        Ok(Ragdoll { particles, constraints })
    }

    /// Anchor one body part in place.
    pub fn pin(&mut self, part: usize) -> Result<(), PhysicsError> {
        check_index(part, self.particles.len())?;
        self.particles[part].pin();
        Ok(())
    }

    pub fn part(&self, part: usize) -> Result<&Particle<F>, PhysicsError> {
        check_index(part, self.particles.len())?;
        Ok(&self.particles[part])
    }
}

impl<F: Float> Topology<F> for Ragdoll<F> {
    fn particles(&self) -> &[Particle<F>] {
        &self.particles
    }

    fn constraints(&self) -> &[Constraint<F>] {
        &self.constraints
    }

    fn into_parts(self) -> (AllocVec<Particle<F>>, AllocVec<Constraint<F>>) {
        (self.particles, self.constraints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::ParticleConstraint;

    #[test]
    fn skeleton_layout() {
        let doll = Ragdoll::new(Vec2::new(100.0f64, 50.0), &RagdollConfig::default()).unwrap();
        assert_eq!(doll.particles().len(), PART_COUNT);
        assert_eq!(doll.constraints().len(), 5);
        assert_eq!(doll.part(TORSO).unwrap().position, Vec2::new(100.0, 70.0));
        assert_eq!(doll.part(LEFT_ARM).unwrap().position, Vec2::new(80.0, 80.0));
        assert_eq!(doll.part(RIGHT_LEG).unwrap().position, Vec2::new(110.0, 100.0));
        assert_eq!(doll.part(TORSO).unwrap().mass(), 10.0);
        assert_eq!(doll.part(LEFT_ARM).unwrap().mass(), 3.0);
    }

    #[test]
    fn every_limb_meets_torso() {
        let doll = Ragdoll::new(Vec2::new(0.0f64, 0.0), &RagdollConfig::default()).unwrap();
        assert!(doll.constraints().iter().all(|c| c.references(TORSO)));
    }

    #[test]
    fn non_positive_limb_rejected() {
        let config = RagdollConfig { limb_length: 0.0f64, ..RagdollConfig::default() };
        assert!(Ragdoll::new(Vec2::new(0.0, 0.0), &config).is_err());
    }

    #[test]
    fn pin_checks_part() {
        let mut doll = Ragdoll::new(Vec2::new(0.0f64, 0.0), &RagdollConfig::default()).unwrap();
        doll.pin(HEAD).unwrap();
        assert!(doll.part(HEAD).unwrap().is_fixed);
        assert_eq!(doll.pin(6), Err(PhysicsError::IndexOutOfRange { index: 6, count: 6 }));
    }
}
