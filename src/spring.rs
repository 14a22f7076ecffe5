//! Force-based (Hooke) spring between two particles.
//!
//! Unlike [`DistanceConstraint`](crate::constraint::DistanceConstraint), this
//! never moves particles directly. It accumulates equal and opposite forces
//! which the next Verlet pass turns into motion, so stiff values need small
//! time steps to stay stable.

use crate::constraint::ParticleConstraint;
use crate::error::{check_index, PhysicsError};
use crate::float::Float;
use crate::particle::Particle;
use crate::render::Renderer;

/// Hooke spring with damping along the spring axis.
#[derive(Clone, Debug, PartialEq)]
pub struct ForceSpring<F: Float> {
    a: usize,
    b: usize,
    rest_length: F,
    stiffness: F,
    damping: F,
}

impl<F: Float> ForceSpring<F> {
    /// `stiffness` is the spring constant `k`; unlike the PBD constraint it
    /// is not limited to `[0, 1]`.
    pub fn new(
        a: usize,
        b: usize,
        rest_length: F,
        stiffness: F,
        damping: F,
    ) -> Result<Self, PhysicsError> {
        if a == b {
            return Err(PhysicsError::InvalidArgument("spring endpoints must differ"));
        }
        if !rest_length.is_finite() || rest_length < F::zero() {
            return Err(PhysicsError::InvalidArgument("rest length must be non-negative"));
        }
        if !stiffness.is_finite() || stiffness < F::zero() {
            return Err(PhysicsError::InvalidArgument("spring constant must be non-negative"));
        }
        if !damping.is_finite() || damping < F::zero() {
            return Err(PhysicsError::InvalidArgument("damping must be non-negative"));
        }
        Ok(ForceSpring { a, b, rest_length, stiffness, damping })
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

    /// Elastic energy stored at the current separation, `k·x²/2`.
    pub fn potential_energy(&self, particles: &[Particle<F>]) -> Result<F, PhysicsError> {
        check_index(self.a, particles.len())?;
        check_index(self.b, particles.len())?;
        let extension =
            particles[self.a].position.distance_to(particles[self.b].position) - self.rest_length;
        Ok(F::half() * self.stiffness * extension * extension)
    }
}

impl<F: Float> ParticleConstraint<F> for ForceSpring<F> {
    /// Fails with [`PhysicsError::DivideByZero`] when the particles coincide.
    fn apply(&self, particles: &mut [Particle<F>]) -> Result<(), PhysicsError> {
        check_index(self.a, particles.len())?;
        check_index(self.b, particles.len())?;

        let p1 = &particles[self.a];
        let p2 = &particles[self.b];
        let offset = p1.position - p2.position;
        let direction = offset.normalize()?;
        let extension = offset.magnitude() - self.rest_length;

        let spring = direction * (-self.stiffness * extension);
        let closing_speed = (p1.velocity() - p2.velocity()).dot(direction);
        let damping = direction * (-self.damping * closing_speed);
        let force = spring + damping;

        particles[self.a].apply_force(force)?;
        particles[self.b].apply_force(-force)?;
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec::Vec2;
    use alloc::vec;

    #[test]
    fn stretched_spring_pulls_together() {
        let mut particles = vec![
            Particle::new(Vec2::new(0.0f64, 0.0), 1.0).unwrap(),
            Particle::new(Vec2::new(3.0f64, 0.0), 1.0).unwrap(),
        ];
        let s = ForceSpring::new(0, 1, 1.0, 10.0, 0.0).unwrap();
        s.apply(&mut particles).unwrap();
        assert_eq!(particles[0].acceleration, Vec2::new(20.0, 0.0));
        assert_eq!(particles[1].acceleration, Vec2::new(-20.0, 0.0));
    }

    #[test]
    fn compressed_spring_pushes_apart() {
        let mut particles = vec![
            Particle::new(Vec2::new(0.0f64, 0.0), 1.0).unwrap(),
            Particle::new(Vec2::new(0.0f64, 1.0), 2.0).unwrap(),
        ];
        let s = ForceSpring::new(0, 1, 2.0, 4.0, 0.0).unwrap();
        s.apply(&mut particles).unwrap();
        assert_eq!(particles[0].acceleration, Vec2::new(0.0, -4.0));
        assert_eq!(particles[1].acceleration, Vec2::new(0.0, 2.0));
    }

    #[test]
    fn coincident_particles_fail() {
        let mut particles = vec![
            Particle::new(Vec2::new(1.0f64, 1.0), 1.0).unwrap(),
            Particle::new(Vec2::new(1.0f64, 1.0), 1.0).unwrap(),
        ];
        let s = ForceSpring::new(0, 1, 1.0, 1.0, 0.0).unwrap();
        assert_eq!(s.apply(&mut particles), Err(PhysicsError::DivideByZero));
    }

    #[test]
    fn damping_opposes_closing_speed() {
        let mut particles = vec![
            Particle::new(Vec2::new(0.0f64, 0.0), 1.0).unwrap(),
            Particle::new(Vec2::new(2.0f64, 0.0), 1.0).unwrap(),
        ];
        // b moving away from a at 1 unit per step, spring at rest length
        particles[1].old_position = Vec2::new(1.0, 0.0);
        let s = ForceSpring::new(0, 1, 2.0, 5.0, 0.5).unwrap();
        s.apply(&mut particles).unwrap();
        assert_eq!(particles[0].acceleration, Vec2::new(0.5, 0.0));
        assert_eq!(particles[1].acceleration, Vec2::new(-0.5, 0.0));
    }

    #[test]
    fn potential_energy_is_quadratic() {
        let particles = vec![
            Particle::new(Vec2::new(0.0f64, 0.0), 1.0).unwrap(),
            Particle::new(Vec2::new(3.0f64, 0.0), 1.0).unwrap(),
        ];
        let s = ForceSpring::new(0, 1, 1.0, 2.0, 0.0).unwrap();
        assert_eq!(s.potential_energy(&particles), Ok(4.0));
        assert_eq!(
            ForceSpring::new(0, 3, 1.0, 2.0, 0.0).unwrap().potential_energy(&particles),
            Err(PhysicsError::IndexOutOfRange { index: 3, count: 2 })
        );
    }

    #[test]
    fn invalid_parameters_rejected() {
        assert!(ForceSpring::<f64>::new(0, 1, -1.0, 1.0, 0.0).is_err());
        assert!(ForceSpring::<f64>::new(0, 1, 1.0, -1.0, 0.0).is_err());
        assert!(ForceSpring::<f64>::new(0, 1, 1.0, 1.0, -1.0).is_err());
        assert!(ForceSpring::<f64>::new(0, 0, 1.0, 1.0, 0.0).is_err());
        assert!(ForceSpring::<f64>::new(0, 1, 1.0, 50.0, 0.0).is_ok());
    }
}
