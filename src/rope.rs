//! Rope built from a line of particles and distance constraints.

use crate::constraint::{Constraint, DistanceConstraint};
use crate::error::{check_index, PhysicsError};
use crate::float::Float;
use crate::particle::Particle;
use crate::topology::Topology;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Configuration for creating a rope.
#[derive(Clone, Debug, PartialEq)]
pub struct RopeConfig<F: Float> {
    pub particle_mass: F,
    pub stiffness: F,
    pub damping: F,
}

impl<F: Float> Default for RopeConfig<F> {
    fn default() -> Self {
        RopeConfig {
            particle_mass: F::one(),
            stiffness: F::one(),
            damping: F::from_f32(0.1),
        }
    }
}

/// A rope anchored at its first particle.
#[derive(Clone, Debug)]
pub struct Rope<F: Float> {
    particles: AllocVec<Particle<F>>,
    constraints: AllocVec<Constraint<F>>,
    segment_length: F,
}

impl<F: Float> Rope<F> {
    /// Particle `i` sits at `start - (0, i * segment_length)`; particle 0 is
    /// fixed.
    pub fn new(
        start: Vec2<F>,
        num_particles: usize,
        segment_length: F,
        config: &RopeConfig<F>,
    ) -> Result<Self, PhysicsError> {
        let step = Vec2::new(F::zero(), -segment_length);
        let points = (0..num_particles).map(|i| start + step * F::from_usize(i));
        Self::build(points, num_particles, segment_length, config)
    }

    /// A rope of `segments` equal links laid straight from `start` to `end`,
    /// fixed at `start`.
    pub fn between(
        start: Vec2<F>,
        end: Vec2<F>,
        segments: usize,
        config: &RopeConfig<F>,
    ) -> Result<Self, PhysicsError> {
        if segments == 0 {
            return Err(PhysicsError::InvalidArgument("rope needs at least one segment"));
        }
        let count = F::from_usize(segments);
        let segment_length = start.distance_to(end) / count;
        let points = (0..=segments).map(|i| start.lerp(end, F::from_usize(i) / count));
        Self::build(points, segments + 1, segment_length, config)
    }

    fn build(
        points: impl Iterator<Item = Vec2<F>>,
        num_particles: usize,
        segment_length: F,
        config: &RopeConfig<F>,
    ) -> Result<Self, PhysicsError> {
        if num_particles == 0 {
            return Err(PhysicsError::InvalidArgument("rope needs at least one particle"));
        }
        let mut particles = AllocVec::with_capacity(num_particles);
        for (i, pos) in points.enumerate() {
            let particle = if i == 0 {
                Particle::fixed(pos, config.particle_mass)?
            } else {
                Particle::new(pos, config.particle_mass)?
            };
            particles.push(particle);
        }

        let mut constraints = AllocVec::with_capacity(num_particles - 1);
        for i in 0..(num_particles - 1) {
            constraints.push(
                DistanceConstraint::new(i, i + 1, segment_length, config.stiffness, config.damping)?
                    .into(),
            );
        }

        Ok(Rope { particles, constraints, segment_length })
    }

    pub fn pin(&mut self, index: usize) -> Result<(), PhysicsError> {
        check_index(index, self.particles.len())?;
        self.particles[index].pin();
        Ok(())
    }

    pub fn unpin(&mut self, index: usize) -> Result<(), PhysicsError> {
        check_index(index, self.particles.len())?;
        self.particles[index].unpin();
        Ok(())
    }

    pub fn segment_length(&self) -> F {
        self.segment_length
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn segment_count(&self) -> usize {
        self.constraints.len()
    }
}

impl<F: Float> Topology<F> for Rope<F> {
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

    #[test]
    fn hangs_upward_from_anchor() {
        let rope = Rope::new(Vec2::new(400.0f64, 100.0), 5, 20.0, &RopeConfig::default()).unwrap();
        assert_eq!(rope.len(), 5);
        assert_eq!(rope.segment_count(), 4);
        assert!(rope.particles()[0].is_fixed);
        assert!(rope.particles()[1..].iter().all(|p| !p.is_fixed));
        assert_eq!(rope.particles()[4].position, Vec2::new(400.0, 20.0));
    }

    #[test]
    fn single_particle_rope_has_no_links() {
        let rope = Rope::new(Vec2::new(0.0f64, 0.0), 1, 5.0, &RopeConfig::default()).unwrap();
        assert_eq!(rope.len(), 1);
        assert_eq!(rope.segment_count(), 0);
    }

    #[test]
    fn empty_rope_rejected() {
        assert!(Rope::new(Vec2::new(0.0f64, 0.0), 0, 5.0, &RopeConfig::default()).is_err());
        assert!(Rope::between(Vec2::new(0.0f64, 0.0), Vec2::new(1.0, 0.0), 0, &RopeConfig::default()).is_err());
    }

    #[test]
    fn between_endpoints() {
        let rope = Rope::between(
            Vec2::new(0.0f64, 0.0),
            Vec2::new(10.0, 0.0),
            10,
            &RopeConfig::default(),
        )
        .unwrap();
        assert_eq!(rope.len(), 11);
        assert_eq!(rope.segment_length(), 1.0);
        assert_eq!(rope.particles()[10].position, Vec2::new(10.0, 0.0));
    }

    #[test]
    fn negative_segment_length_rejected() {
        let err = Rope::new(Vec2::new(0.0f64, 0.0), 3, -1.0, &RopeConfig::default()).unwrap_err();
        assert!(matches!(err, PhysicsError::InvalidArgument(_)));
    }
}
