//! Shared interface of the body builders (rope, chain, grid, soft body,
//! ragdoll).

use crate::constraint::{Constraint, ParticleConstraint};
use crate::float::Float;
use crate::particle::Particle;
use crate::render::Renderer;
use alloc::vec::Vec as AllocVec;

/// A body description: particles plus constraints indexed into them.
///
/// Bodies never step themselves; hand them to a
/// [`VerletIntegrator`](crate::integrator::VerletIntegrator).
pub trait Topology<F: Float> {
    fn particles(&self) -> &[Particle<F>];

    fn constraints(&self) -> &[Constraint<F>];

    fn into_parts(self) -> (AllocVec<Particle<F>>, AllocVec<Constraint<F>>)
    where
        Self: Sized;

    /// Draw every constraint, then every particle on top.
    fn render(&self, renderer: &mut dyn Renderer<F>) {
        render_parts(self.particles(), self.constraints(), renderer);
    }
}

pub(crate) fn render_parts<F: Float>(
    particles: &[Particle<F>],
    constraints: &[Constraint<F>],
    renderer: &mut dyn Renderer<F>,
) {
    for c in constraints {
        c.draw(particles, renderer);
    }
    for p in particles {
        renderer.draw_particle(p);
    }
}
