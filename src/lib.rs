//! Position-based Verlet dynamics for ropes, cloth, ragdolls, and blobs.
//!
//! `tether` simulates deformable bodies as point masses joined by distance
//! constraints. Each frame the [`VerletIntegrator`] accumulates gravity,
//! advances every particle with a Verlet step, relaxes the constraints over
//! a fixed number of passes, and applies global damping.
//!
//! # Features
//!
//! - **Verlet integration**: velocity is implicit in `position - old_position`
//! - **Constraint relaxation**: mass-weighted distance projection, Hooke
//!   springs, and a joint-angle heuristic
//! - **Body builders**: [`Rope`], [`Chain`], [`Grid`], [`SoftBody`] and
//!   [`Ragdoll`], merged into one scene with [`VerletIntegrator::add_body`]
//! - **Render contract**: draw through any [`Renderer`], or record with
//!   [`DrawList`]
//! - **Observable**: monitor step phases via the [`StepObserver`] trait
//! - **`no_std` compatible**: needs only `alloc`
//!
//! ```
//! use tether::config::DEFAULT_TIME_STEP;
//! use tether::{Rope, RopeConfig, SolverConfig, Vec2, VerletIntegrator};
//!
//! let rope = Rope::new(Vec2::new(0.0f32, 0.0), 10, 1.0, &RopeConfig::default()).unwrap();
//! let config = SolverConfig::new().with_gravity(Vec2::new(0.0, -9.8));
//! let mut sim = VerletIntegrator::from_topology(rope, config).unwrap();
//! for _ in 0..60 {
//!     sim.integrate(DEFAULT_TIME_STEP).unwrap();
//! }
//! assert_eq!(sim.particle(0).unwrap().position, Vec2::new(0.0, 0.0));
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod error;
pub mod particle;
pub mod constraint;
pub mod spring;
pub mod config;
pub mod observer;
pub mod render;
pub mod topology;
pub mod integrator;
pub mod rope;
pub mod chain;
pub mod grid;
pub mod softbody;
pub mod ragdoll;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use error::PhysicsError;
pub use particle::Particle;
pub use constraint::{AngleConstraint, Constraint, DistanceConstraint, ParticleConstraint};
pub use spring::ForceSpring;
pub use config::SolverConfig;
pub use observer::{NoOpStepObserver, StepObserver};
pub use render::{DrawCommand, DrawList, Renderer};
pub use topology::Topology;
pub use integrator::VerletIntegrator;
pub use rope::{Rope, RopeConfig};
pub use chain::{Chain, ChainConfig};
pub use grid::{Grid, GridConfig};
pub use softbody::{SoftBody, SoftBodyConfig};
pub use ragdoll::{Ragdoll, RagdollConfig};
