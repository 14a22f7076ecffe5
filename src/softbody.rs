//! 2D soft bodies: spring lattices and closed ring blobs.

use crate::constraint::{Constraint, DistanceConstraint};
use crate::error::{check_index, PhysicsError};
use crate::float::Float;
use crate::grid::{Grid, GridConfig};
use crate::particle::Particle;
use crate::topology::Topology;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Configuration shared by the soft body shapes.
#[derive(Clone, Debug, PartialEq)]
pub struct SoftBodyConfig<F: Float> {
    pub particle_mass: F,
    pub stiffness: F,
    pub damping: F,
}

impl<F: Float> Default for SoftBodyConfig<F> {
    fn default() -> Self {
        SoftBodyConfig {
            particle_mass: F::one(),
            stiffness: F::one(),
            damping: F::from_f32(0.1),
        }
    }
}

/// A deformable body with a closed outline.
#[derive(Clone, Debug)]
pub struct SoftBody<F: Float> {
    particles: AllocVec<Particle<F>>,
    constraints: AllocVec<Constraint<F>>,
    /// Particle indices walking the boundary in order.
    outline: AllocVec<usize>,
}

impl<F: Float> SoftBody<F> {
    /// A `rows × cols` lattice spanning `width × height` from `position`,
    /// linked by horizontal and vertical springs only.
    pub fn lattice(
        position: Vec2<F>,
        width: F,
        height: F,
        rows: usize,
        cols: usize,
        config: &SoftBodyConfig<F>,
    ) -> Result<Self, PhysicsError> {
        let spacing_x = if cols > 1 { width / F::from_usize(cols - 1) } else { width };
        let spacing_y = if rows > 1 { height / F::from_usize(rows - 1) } else { height };
        let grid = Grid::new(
            position,
            &GridConfig {
                cols,
                rows,
                spacing: Vec2::new(spacing_x, spacing_y),
                particle_mass: config.particle_mass,
                stiffness: config.stiffness,
                damping: config.damping,
                shear_stiffness: None,
                bend_stiffness: None,
            },
        )?;
        let outline = lattice_outline(cols, rows);
        let (particles, constraints) = grid.into_parts();
        Ok(SoftBody { particles, constraints, outline })
    }

    /// A closed blob of `segments` particles on a circle, with perimeter
    /// links and half-stiffness braces between opposite particles.
    pub fn ring(
        center: Vec2<F>,
        radius: F,
        segments: usize,
        config: &SoftBodyConfig<F>,
    ) -> Result<Self, PhysicsError> {
        if segments < 3 {
            return Err(PhysicsError::InvalidArgument("ring needs at least three segments"));
        }
        if !radius.is_finite() || radius <= F::zero() {
            return Err(PhysicsError::InvalidArgument("ring radius must be positive"));
        }

        let mut particles = AllocVec::with_capacity(segments);
        let two_pi = F::two() * F::pi();
        for i in 0..segments {
            let angle = two_pi * F::from_usize(i) / F::from_usize(segments);
            let pos = Vec2::new(center.x + radius * angle.cos(), center.y + radius * angle.sin());
            particles.push(Particle::new(pos, config.particle_mass)?);
        }

        let mut constraints = AllocVec::with_capacity(segments + segments / 2);
        for i in 0..segments {
            let j = (i + 1) % segments;
            constraints.push(
                DistanceConstraint::from_particles(i, j, &particles, config.stiffness, config.damping)?
                    .into(),
            );
        }

        // Cross braces keep the ring from collapsing
        if segments >= 4 {
            let half = segments / 2;
            for i in 0..half {
                constraints.push(
                    DistanceConstraint::from_particles(
                        i,
                        i + half,
                        &particles,
                        config.stiffness * F::half(),
                        config.damping,
                    )?
                    .into(),
                );
            }
        }

        let outline = (0..segments).collect();
        Ok(SoftBody { particles, constraints, outline })
    }

    /// Enclosed area of the outline (shoelace formula).
    pub fn area(&self) -> F {
        shoelace(&self.particles, &self.outline)
    }

    /// Mean position of all particles.
    pub fn centroid(&self) -> Vec2<F> {
        if self.particles.is_empty() {
            return Vec2::zero();
        }
        let sum = self.particles.iter().fold(Vec2::zero(), |acc, p| acc + p.position);
        sum / F::from_usize(self.particles.len())
    }

    pub fn outline(&self) -> &[usize] {
        &self.outline
    }
}

/// Shoelace area over `particles` visited in `outline` order.
///
/// Use with [`SoftBody::outline`] to measure a body after it has been
/// handed to an integrator. Fails if `outline` names a missing particle.
pub fn polygon_area<F: Float>(
    particles: &[Particle<F>],
    outline: &[usize],
) -> Result<F, PhysicsError> {
    for &index in outline {
        check_index(index, particles.len())?;
    }
    Ok(shoelace(particles, outline))
}

// Callers guarantee every outline index is in range.
fn shoelace<F: Float>(particles: &[Particle<F>], outline: &[usize]) -> F {
    let n = outline.len();
    if n < 3 {
        return F::zero();
    }
    let mut sum = F::zero();
    for i in 0..n {
        let a = particles[outline[i]].position;
        let b = particles[outline[(i + 1) % n]].position;
        sum = sum + a.cross(b);
    }
    (sum * F::half()).abs()
}

fn lattice_outline(cols: usize, rows: usize) -> AllocVec<usize> {
    if cols < 2 || rows < 2 {
        return (0..cols * rows).collect();
    }
    let mut outline = AllocVec::with_capacity(2 * (cols + rows) - 4);
    // Top row left to right, right column down, bottom row back, left column up
    outline.extend(0..cols);
    outline.extend((1..rows).map(|r| r * cols + cols - 1));
    outline.extend((0..cols - 1).rev().map(|c| (rows - 1) * cols + c));
    outline.extend((1..rows - 1).rev().map(|r| r * cols));
    outline
}

impl<F: Float> Topology<F> for SoftBody<F> {
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
