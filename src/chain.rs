//! Chain of links laid out horizontally, with optional angle stiffening.

use crate::constraint::{AngleConstraint, Constraint, DistanceConstraint};
use crate::error::{check_index, PhysicsError};
use crate::float::Float;
use crate::particle::Particle;
use crate::topology::Topology;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Configuration for creating a chain.
#[derive(Clone, Debug, PartialEq)]
pub struct ChainConfig<F: Float> {
    pub link_length: F,
    pub particle_mass: F,
    pub stiffness: F,
    pub damping: F,
}

impl<F: Float> Default for ChainConfig<F> {
    fn default() -> Self {
        ChainConfig {
            link_length: F::one(),
            particle_mass: F::one(),
            stiffness: F::one(),
            damping: F::from_f32(0.1),
        }
    }
}

/// `num_links` particles along +x from an origin, anchored at the first.
#[derive(Clone, Debug)]
pub struct Chain<F: Float> {
    particles: AllocVec<Particle<F>>,
    constraints: AllocVec<Constraint<F>>,
}

impl<F: Float> Chain<F> {
    pub fn new(origin: Vec2<F>, num_links: usize, config: &ChainConfig<F>) -> Result<Self, PhysicsError> {
        if num_links == 0 {
            return Err(PhysicsError::InvalidArgument("chain needs at least one link"));
        }
        let mut particles = AllocVec::with_capacity(num_links);
        for i in 0..num_links {
            let pos = origin + Vec2::new(F::from_usize(i) * config.link_length, F::zero());
            particles.push(Particle::new(pos, config.particle_mass)?);
        }
        particles[0].pin();

        let mut constraints = AllocVec::with_capacity(num_links - 1);
        for i in 1..num_links {
            constraints.push(
                DistanceConstraint::new(i - 1, i, config.link_length, config.stiffness, config.damping)?
                    .into(),
            );
        }

        Ok(Chain { particles, constraints })
    }

    /// Stiffen the joint at `vertex` so the angle `a`-`vertex`-`c` tends
    /// toward `angle` radians.
    pub fn add_angle_constraint(
        &mut self,
        a: usize,
        vertex: usize,
        c: usize,
        angle: F,
    ) -> Result<(), PhysicsError> {
        let count = self.particles.len();
        check_index(a, count)?;
        check_index(vertex, count)?;
        check_index(c, count)?;
        self.constraints.push(AngleConstraint::new(a, vertex, c, angle)?.into());
        Ok(())
    }

    /// Angle constraints at every interior joint, holding the chain straight.
    pub fn stiffen(&mut self) -> Result<(), PhysicsError> {
        for vertex in 1..self.particles.len().saturating_sub(1) {
            self.add_angle_constraint(vertex - 1, vertex, vertex + 1, F::pi())?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

impl<F: Float> Topology<F> for Chain<F> {
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
