//! Particle grid (cloth, lattices) with structural, shear, and bend
//! constraints.

use crate::constraint::{Constraint, DistanceConstraint, ParticleConstraint};
use crate::error::PhysicsError;
use crate::float::Float;
use crate::particle::Particle;
use crate::topology::Topology;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Configuration for a grid.
#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig<F: Float> {
    pub cols: usize,
    pub rows: usize,
    /// Distance between neighbouring columns (`x`) and rows (`y`).
    pub spacing: Vec2<F>,
    pub particle_mass: F,
    /// Stiffness of the horizontal and vertical neighbour links.
    pub stiffness: F,
    pub damping: F,
    /// Diagonal links across each cell; `None` leaves cells free to shear.
    pub shear_stiffness: Option<F>,
    /// Skip-one links resisting folding; `None` disables them.
    pub bend_stiffness: Option<F>,
}

impl<F: Float> Default for GridConfig<F> {
    fn default() -> Self {
        GridConfig {
            cols: 10,
            rows: 10,
            spacing: Vec2::new(F::one(), F::one()),
            particle_mass: F::one(),
            stiffness: F::one(),
            damping: F::from_f32(0.1),
            shear_stiffness: Some(F::one()),
            bend_stiffness: None,
        }
    }
}

/// A rectangular mesh of particles.
#[derive(Clone, Debug)]
pub struct Grid<F: Float> {
    particles: AllocVec<Particle<F>>,
    constraints: AllocVec<Constraint<F>>,
    cols: usize,
    rows: usize,
}

impl<F: Float> Grid<F> {
    /// Create a grid whose top-left particle sits at `origin`.
    ///
    /// The grid extends in positive X (columns) and positive Y (rows).
    /// Particle at (col, row) has index `row * cols + col`.
    ///
    /// Constraint families, in insertion order:
    /// - Structural: horizontal + vertical neighbours
    /// - Shear: both diagonals of every cell (if enabled)
    /// - Bend: skip-one horizontal + vertical (if enabled)
    pub fn new(origin: Vec2<F>, config: &GridConfig<F>) -> Result<Self, PhysicsError> {
        let cols = config.cols;
        let rows = config.rows;
        if cols == 0 || rows == 0 {
            return Err(PhysicsError::InvalidArgument("grid needs at least one row and one column"));
        }
        let spacing = config.spacing;
        let mut particles = AllocVec::with_capacity(cols * rows);
        for row in 0..rows {
            for col in 0..cols {
                let x = origin.x + F::from_usize(col) * spacing.x;
                let y = origin.y + F::from_usize(row) * spacing.y;
                particles.push(Particle::new(Vec2::new(x, y), config.particle_mass)?);
            }
        }

        let damping = config.damping;
        let mut constraints = AllocVec::new();
        let mut link = |a: usize, b: usize, rest: F, stiffness: F| -> Result<(), PhysicsError> {
            constraints.push(DistanceConstraint::new(a, b, rest, stiffness, damping)?.into());
            Ok(())
        };

        // Structural: horizontal
        for row in 0..rows {
            for col in 0..(cols - 1) {
                let a = row * cols + col;
                link(a, a + 1, spacing.x, config.stiffness)?;
            }
        }

        // Structural: vertical
        for row in 0..(rows - 1) {
            for col in 0..cols {
                let a = row * cols + col;
                link(a, a + cols, spacing.y, config.stiffness)?;
            }
        }

        // Shear: diagonals
        if let Some(shear) = config.shear_stiffness {
            let diag_length = spacing.magnitude();
            for row in 0..(rows - 1) {
                for col in 0..(cols - 1) {
                    let tl = row * cols + col;
                    let tr = tl + 1;
                    let bl = tl + cols;
                    let br = bl + 1;
                    link(tl, br, diag_length, shear)?;
                    link(tr, bl, diag_length, shear)?;
                }
            }
        }

        if let Some(bend) = config.bend_stiffness {
            // Bend: skip-one horizontal
            for row in 0..rows {
                for col in 0..(cols.saturating_sub(2)) {
                    let a = row * cols + col;
                    link(a, a + 2, spacing.x * F::two(), bend)?;
                }
            }

            // Bend: skip-one vertical
            for row in 0..(rows.saturating_sub(2)) {
                for col in 0..cols {
                    let a = row * cols + col;
                    link(a, a + 2 * cols, spacing.y * F::two(), bend)?;
                }
            }
        }

        Ok(Grid { particles, constraints, cols, rows })
    }

    pub fn index(&self, col: usize, row: usize) -> usize {
        row * self.cols + col
    }

    fn checked_index(&self, col: usize, row: usize) -> Result<usize, PhysicsError> {
        let count = self.particles.len();
        if col >= self.cols || row >= self.rows {
            let index = row.saturating_mul(self.cols).saturating_add(col);
            return Err(PhysicsError::IndexOutOfRange { index, count });
        }
        Ok(self.index(col, row))
    }

    pub fn pin(&mut self, col: usize, row: usize) -> Result<(), PhysicsError> {
        let idx = self.checked_index(col, row)?;
        self.particles[idx].pin();
        Ok(())
    }

    pub fn unpin(&mut self, col: usize, row: usize) -> Result<(), PhysicsError> {
        let idx = self.checked_index(col, row)?;
        self.particles[idx].unpin();
        Ok(())
    }

    pub fn pin_top_row(&mut self) {
        for p in self.particles.iter_mut().take(self.cols) {
            p.pin();
        }
    }

    /// Cut every link attached to (col, row), returning how many were removed.
    pub fn tear_at(&mut self, col: usize, row: usize) -> Result<usize, PhysicsError> {
        let idx = self.checked_index(col, row)?;
        let before = self.constraints.len();
        self.constraints.retain(|c| !c.references(idx));
        Ok(before - self.constraints.len())
    }

    pub fn position_at(&self, col: usize, row: usize) -> Result<Vec2<F>, PhysicsError> {
        let idx = self.checked_index(col, row)?;
        Ok(self.particles[idx].position)
    }

    pub fn cols(&self) -> usize { self.cols }
    pub fn rows(&self) -> usize { self.rows }
    pub fn particle_count(&self) -> usize { self.particles.len() }
    pub fn constraint_count(&self) -> usize { self.constraints.len() }
}

impl<F: Float> Topology<F> for Grid<F> {
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
