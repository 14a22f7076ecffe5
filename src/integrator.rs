//! Verlet integrator with iterative constraint relaxation.

use crate::config::SolverConfig;
use crate::constraint::{Constraint, ParticleConstraint};
use crate::error::{check_index, PhysicsError};
use crate::float::Float;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::particle::Particle;
use crate::render::Renderer;
use crate::topology::{render_parts, Topology};
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;
use core::ops::Range;
use log::{debug, log_enabled, trace, warn, Level};

/// Owns the particles and constraints of a scene and advances them.
///
/// Each [`integrate`](Self::integrate) call runs four phases in order:
/// gravity accumulation, Verlet position update, `iterations` passes over
/// every constraint, then global velocity damping.
#[derive(Clone, Debug)]
pub struct VerletIntegrator<F: Float> {
    particles: AllocVec<Particle<F>>,
    constraints: AllocVec<Constraint<F>>,
    config: SolverConfig<F>,
}

impl<F: Float> VerletIntegrator<F> {
    pub fn new(config: SolverConfig<F>) -> Result<Self, PhysicsError> {
        Self::from_parts(AllocVec::new(), AllocVec::new(), config)
    }

    /// Build from arrays produced elsewhere. Every constraint must reference
    /// particles inside `particles`.
    pub fn from_parts(
        particles: AllocVec<Particle<F>>,
        constraints: AllocVec<Constraint<F>>,
        config: SolverConfig<F>,
    ) -> Result<Self, PhysicsError> {
        config.validate()?;
        for c in &constraints {
            check_index(c.highest_index(), particles.len())?;
        }
        if !config.damping_active() {
            debug!("damping {} outside (0, 1): global damping disabled", config.damping);
        }
        debug!(
            "integrator ready: {} particles, {} constraints, {} iterations",
            particles.len(),
            constraints.len(),
            config.iterations
        );
        Ok(VerletIntegrator { particles, constraints, config })
    }

    pub fn from_topology<T: Topology<F>>(
        body: T,
        config: SolverConfig<F>,
    ) -> Result<Self, PhysicsError> {
        let (particles, constraints) = body.into_parts();
        Self::from_parts(particles, constraints, config)
    }

    pub fn add_particle(&mut self, particle: Particle<F>) -> usize {
        let idx = self.particles.len();
        self.particles.push(particle);
        idx
    }

    /// Add a constraint over existing particles, returning its index.
    pub fn add_constraint(&mut self, constraint: impl Into<Constraint<F>>) -> Result<usize, PhysicsError> {
        let constraint = constraint.into();
        check_index(constraint.highest_index(), self.particles.len())?;
        let idx = self.constraints.len();
        self.constraints.push(constraint);
        Ok(idx)
    }

    /// Append a whole body, returning the index range its particles occupy.
    pub fn add_body<T: Topology<F>>(&mut self, body: T) -> Result<Range<usize>, PhysicsError> {
        let (particles, mut constraints) = body.into_parts();
        for c in &constraints {
            check_index(c.highest_index(), particles.len())?;
        }
        let start = self.particles.len();
        for c in constraints.iter_mut() {
            c.offset(start);
        }
        self.particles.extend(particles);
        self.constraints.extend(constraints);
        debug!("added body at particles {}..{}", start, self.particles.len());
        Ok(start..self.particles.len())
    }

    /// Advance the simulation by `dt`.
    pub fn integrate(&mut self, dt: F) -> Result<(), PhysicsError> {
        self.integrate_observed(dt, &mut NoOpStepObserver)
    }

    /// Advance by `dt`, reporting phase boundaries to `observer`.
    ///
    /// A failing constraint aborts the step; phases already run are not
    /// rolled back.
    pub fn integrate_observed<O: StepObserver>(
        &mut self,
        dt: F,
        observer: &mut O,
    ) -> Result<(), PhysicsError> {
        if !dt.is_finite() || dt < F::zero() {
            return Err(PhysicsError::InvalidArgument("time step must be finite and non-negative"));
        }
        let tracing = log_enabled!(Level::Trace);
        if tracing {
            trace!(
                "integrate dt={} particles={} constraints={}",
                dt,
                self.particles.len(),
                self.constraints.len()
            );
        }

        let gravity = self.config.gravity;
        for p in self.particles.iter_mut() {
            p.apply_acceleration(gravity);
        }
        for p in self.particles.iter_mut() {
            p.update_position(dt);
        }
        observer.on_integrate();

        for pass in 0..self.config.iterations {
            for (idx, c) in self.constraints.iter().enumerate() {
                if let Err(err) = c.apply(&mut self.particles) {
                    warn!("constraint {} failed on pass {}: {}", idx, pass, err);
                    return Err(err);
                }
            }
            if tracing {
                trace!("relaxation pass {} of {} done", pass + 1, self.config.iterations);
            }
            observer.on_constraint_iteration(pass);
        }

        if self.config.damping_active() {
            let damping = self.config.damping;
            for p in self.particles.iter_mut().filter(|p| !p.is_fixed) {
                p.position = p.old_position + p.velocity() * damping;
            }
            observer.on_damping();
        }

        observer.on_step_complete();
        Ok(())
    }

    /// Accumulate an external force (wind, a poke) on one particle.
    pub fn apply_force_to(&mut self, index: usize, force: Vec2<F>) -> Result<(), PhysicsError> {
        check_index(index, self.particles.len())?;
        self.particles[index].apply_force(force)
    }

    /// Accumulate the same force on every particle.
    pub fn apply_force_all(&mut self, force: Vec2<F>) -> Result<(), PhysicsError> {
        if !force.is_finite() {
            return Err(PhysicsError::InvalidArgument("force must have finite components"));
        }
        for p in self.particles.iter_mut() {
            p.apply_force(force)?;
        }
        Ok(())
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

    /// Remove every constraint touching particle `index`, returning how many
    /// were removed.
    pub fn tear_at(&mut self, index: usize) -> Result<usize, PhysicsError> {
        check_index(index, self.particles.len())?;
        let before = self.constraints.len();
        self.constraints.retain(|c| !c.references(index));
        Ok(before - self.constraints.len())
    }

    pub fn particle(&self, index: usize) -> Result<&Particle<F>, PhysicsError> {
        check_index(index, self.particles.len())?;
        Ok(&self.particles[index])
    }

    pub fn particles(&self) -> &[Particle<F>] { &self.particles }
    pub fn constraints(&self) -> &[Constraint<F>] { &self.constraints }
    pub fn particle_count(&self) -> usize { self.particles.len() }
    pub fn constraint_count(&self) -> usize { self.constraints.len() }
    pub fn config(&self) -> &SolverConfig<F> { &self.config }

    pub fn set_config(&mut self, config: SolverConfig<F>) -> Result<(), PhysicsError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.particles.iter().map(|p| p.position).collect()
    }

    /// Draw every constraint, then every particle.
    pub fn render(&self, renderer: &mut dyn Renderer<F>) {
        render_parts(&self.particles, &self.constraints, renderer);
    }
}
