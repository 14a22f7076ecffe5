//! Constraints between particles: PBD distance, force spring, angle.

use crate::error::{check_index, PhysicsError};
use crate::float::Float;
use crate::particle::Particle;
use crate::render::Renderer;
use crate::spring::ForceSpring;

/// Separations within this distance of the rest length are left alone.
pub const SETTLE_EPSILON: f32 = 1e-6;

/// Default gain of the angle correction heuristic.
pub const DEFAULT_ANGLE_GAIN: f32 = 0.1;

/// Capability shared by every constraint kind.
///
/// Indices refer to the particle slice passed to [`apply`](Self::apply); the
/// constraint never owns particles.
pub trait ParticleConstraint<F: Float> {
    /// Apply one relaxation pass of this constraint.
    fn apply(&self, particles: &mut [Particle<F>]) -> Result<(), PhysicsError>;

    /// Whether this constraint reads or writes particle `index`.
    fn references(&self, index: usize) -> bool;

    /// Largest particle index referenced.
    fn highest_index(&self) -> usize;

    fn draw(&self, particles: &[Particle<F>], renderer: &mut dyn Renderer<F>);
}

/// The closed set of constraint kinds an integrator steps.
#[derive(Clone, Debug, PartialEq)]
pub enum Constraint<F: Float> {
    Distance(DistanceConstraint<F>),
    Spring(ForceSpring<F>),
    Angle(AngleConstraint<F>),
}

impl<F: Float> Constraint<F> {
    /// Shift every particle index by `by`, for appending a body after
    /// existing particles.
    pub fn offset(&mut self, by: usize) {
        match self {
            Constraint::Distance(c) => c.offset(by),
            Constraint::Spring(c) => c.offset(by),
            Constraint::Angle(c) => c.offset(by),
        }
    }

    fn as_dyn(&self) -> &dyn ParticleConstraint<F> {
        match self {
            Constraint::Distance(c) => c,
            Constraint::Spring(c) => c,
            Constraint::Angle(c) => c,
        }
    }
}

impl<F: Float> ParticleConstraint<F> for Constraint<F> {
    fn apply(&self, particles: &mut [Particle<F>]) -> Result<(), PhysicsError> {
        self.as_dyn().apply(particles)
    }

    fn references(&self, index: usize) -> bool {
        self.as_dyn().references(index)
    }

    fn highest_index(&self) -> usize {
        self.as_dyn().highest_index()
    }

    fn draw(&self, particles: &[Particle<F>], renderer: &mut dyn Renderer<F>) {
        self.as_dyn().draw(particles, renderer)
    }
}

impl<F: Float> From<DistanceConstraint<F>> for Constraint<F> {
    fn from(c: DistanceConstraint<F>) -> Self { Constraint::Distance(c) }
}

impl<F: Float> From<ForceSpring<F>> for Constraint<F> {
    fn from(c: ForceSpring<F>) -> Self { Constraint::Spring(c) }
}

impl<F: Float> From<AngleConstraint<F>> for Constraint<F> {
    fn from(c: AngleConstraint<F>) -> Self { Constraint::Angle(c) }
}

// --------------------------------------------------------------------------
// DistanceConstraint: position-based projection
// --------------------------------------------------------------------------

/// Keeps two particles `rest_length` apart by moving them directly.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceConstraint<F: Float> {
    a: usize,
    b: usize,
    rest_length: F,
    stiffness: F,
    damping: F,
}

impl<F: Float> DistanceConstraint<F> {
    pub fn new(
        a: usize,
        b: usize,
        rest_length: F,
        stiffness: F,
        damping: F,
    ) -> Result<Self, PhysicsError> {
        if a == b {
            return Err(PhysicsError::InvalidArgument("constraint endpoints must differ"));
        }
        if !rest_length.is_finite() || rest_length < F::zero() {
            return Err(PhysicsError::InvalidArgument("rest length must be non-negative"));
        }
        if !stiffness.is_finite() || stiffness < F::zero() || stiffness > F::one() {
            return Err(PhysicsError::InvalidArgument("stiffness must be in [0, 1]"));
        }
        if !damping.is_finite() || damping < F::zero() {
            return Err(PhysicsError::InvalidArgument("damping must be non-negative"));
        }
        Ok(DistanceConstraint { a, b, rest_length, stiffness, damping })
    }

    /// Constraint whose rest length is the particles' current separation.
    pub fn from_particles(
        a: usize,
        b: usize,
        particles: &[Particle<F>],
        stiffness: F,
        damping: F,
    ) -> Result<Self, PhysicsError> {
        check_index(a, particles.len())?;
        check_index(b, particles.len())?;
        let rest_length = particles[a].position.distance_to(particles[b].position);
        Self::new(a, b, rest_length, stiffness, damping)
    }

    pub fn a(&self) -> usize { self.a }
    pub fn b(&self) -> usize { self.b }
    pub fn rest_length(&self) -> F { self.rest_length }
    pub fn stiffness(&self) -> F { self.stiffness }
    pub fn damping(&self) -> F { self.damping }

    pub fn offset(&mut self, by: usize) {
        self.a += by;
        self.b += by;
    }

    /// Current separation minus rest length.
    pub fn error(&self, particles: &[Particle<F>]) -> Result<F, PhysicsError> {
        check_index(self.a, particles.len())?;
        check_index(self.b, particles.len())?;
        Ok(particles[self.a].position.distance_to(particles[self.b].position) - self.rest_length)
    }
}

impl<F: Float> ParticleConstraint<F> for DistanceConstraint<F> {
    fn apply(&self, particles: &mut [Particle<F>]) -> Result<(), PhysicsError> {
        check_index(self.a, particles.len())?;
        check_index(self.b, particles.len())?;

        let delta = particles[self.b].position - particles[self.a].position;
        let current_length = delta.magnitude();
        let stretch = current_length - self.rest_length;
        if current_length == F::zero() || stretch.abs() < F::from_f32(SETTLE_EPSILON) {
            return Ok(());
        }

        let correction_factor = stretch / current_length;
        let correction = delta * (correction_factor * F::half() * self.stiffness);

        let p1 = &mut particles[self.a];
        if !p1.is_fixed {
            p1.position += correction * p1.inv_mass();
        }
        let p2 = &mut particles[self.b];
        if !p2.is_fixed {
            p2.position -= correction * p2.inv_mass();
        }

        // Relative-velocity term, consumed on the next integration pass.
        if self.damping > F::zero() {
            let relative = particles[self.b].velocity() - particles[self.a].velocity();
            let damping_force = relative * -self.damping;
            let p1 = &mut particles[self.a];
            if !p1.is_fixed {
                p1.acceleration += damping_force * p1.inv_mass();
            }
            let p2 = &mut particles[self.b];
            if !p2.is_fixed {
                p2.acceleration -= damping_force * p2.inv_mass();
            }
        }
        Ok(())
    }

    fn references(&self, index: usize) -> bool {
        self.a == index || self.b == index
    }

    fn highest_index(&self) -> usize {
        self.a.max(self.b)
    }

    fn draw(&self, particles: &[Particle<F>], renderer: &mut dyn Renderer<F>) {
        if let (Some(p1), Some(p2)) = (particles.get(self.a), particles.get(self.b)) {
            renderer.draw_spring(p1, p2);
        }
    }
}

// --------------------------------------------------------------------------
// AngleConstraint: proportional push heuristic
// --------------------------------------------------------------------------

/// Nudges the angle at `vertex` between `a` and `c` toward a target.
///
/// This is not a true angular constraint: it pushes the outer particles
/// sideways with a force proportional to the angle error, scaled by `gain`.
///
/// `a` is pushed along `perp(a - vertex)` and `c` along `-perp(c - vertex)`,
/// signed by the winding of the two arms, so a too-wide angle closes from
/// either side. The usual form of this heuristic pushes both along `+perp`,
/// which opens the angle as often as it closes it.
#[derive(Clone, Debug, PartialEq)]
pub struct AngleConstraint<F: Float> {
    a: usize,
    vertex: usize,
    c: usize,
    target_angle: F,
    gain: F,
}

impl<F: Float> AngleConstraint<F> {
    /// `target_angle` is the unsigned angle in radians, in `[0, π]`.
    pub fn new(a: usize, vertex: usize, c: usize, target_angle: F) -> Result<Self, PhysicsError> {
        if a == vertex || c == vertex || a == c {
            return Err(PhysicsError::InvalidArgument("angle constraint needs three distinct particles"));
        }
        if !target_angle.is_finite() || target_angle < F::zero() || target_angle > F::pi() {
            return Err(PhysicsError::InvalidArgument("target angle must be in [0, pi]"));
        }
        Ok(AngleConstraint {
            a,
            vertex,
            c,
            target_angle,
            gain: F::from_f32(DEFAULT_ANGLE_GAIN),
        })
    }

    /// Replace the correction gain. Rejects non-finite or negative values.
    pub fn with_gain(mut self, gain: F) -> Result<Self, PhysicsError> {
        if !gain.is_finite() || gain < F::zero() {
            return Err(PhysicsError::InvalidArgument("angle gain must be finite and non-negative"));
        }
        self.gain = gain;
        Ok(self)
    }

    pub fn target_angle(&self) -> F { self.target_angle }
    pub fn gain(&self) -> F { self.gain }
    pub fn vertex(&self) -> usize { self.vertex }

    pub fn offset(&mut self, by: usize) {
        self.a += by;
        self.vertex += by;
        self.c += by;
    }

    /// Current unsigned angle at the vertex.
    pub fn current_angle(&self, particles: &[Particle<F>]) -> Result<F, PhysicsError> {
        let count = particles.len();
        check_index(self.a, count)?;
        check_index(self.vertex, count)?;
        check_index(self.c, count)?;
        let pivot = particles[self.vertex].position;
        Ok((particles[self.a].position - pivot).angle_between(particles[self.c].position - pivot))
    }
}

impl<F: Float> ParticleConstraint<F> for AngleConstraint<F> {
    fn apply(&self, particles: &mut [Particle<F>]) -> Result<(), PhysicsError> {
        let count = particles.len();
        check_index(self.a, count)?;
        check_index(self.vertex, count)?;
        check_index(self.c, count)?;

        let pivot = particles[self.vertex].position;
        let v1 = particles[self.a].position - pivot;
        let v2 = particles[self.c].position - pivot;
        if v1.magnitude_sq() == F::zero() || v2.magnitude_sq() == F::zero() {
            return Ok(());
        }

        let angle_diff = v1.angle_between(v2) - self.target_angle;
        // Orient the pushes so a positive error closes the angle.
        let orientation = if v1.cross(v2) < F::zero() { -F::one() } else { F::one() };
        let magnitude = self.gain * angle_diff * orientation;

        let push_a = v1.perp().normalize()? * magnitude;
        let push_c = -(v2.perp().normalize()?) * magnitude;
        particles[self.a].apply_force(push_a)?;
        particles[self.c].apply_force(push_c)?;
        Ok(())
    }

    fn references(&self, index: usize) -> bool {
        self.a == index || self.vertex == index || self.c == index
    }

    fn highest_index(&self) -> usize {
        self.a.max(self.vertex).max(self.c)
    }

    fn draw(&self, particles: &[Particle<F>], renderer: &mut dyn Renderer<F>) {
        let (Some(a), Some(vertex), Some(c)) =
            (particles.get(self.a), particles.get(self.vertex), particles.get(self.c))
        else {
            return;
        };
        renderer.draw_line(a.position, vertex.position);
        renderer.draw_line(vertex.position, c.position);
    }
}
