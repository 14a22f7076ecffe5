//! Draw contract between the simulation and whatever presents it.
//!
//! The simulation never draws directly: it hands points and line segments to
//! a [`Renderer`]. Renderers only read particle state.

use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Sink for draw primitives.
pub trait Renderer<F: Float> {
    fn draw_point(&mut self, position: Vec2<F>);

    fn draw_line(&mut self, start: Vec2<F>, end: Vec2<F>);

    fn draw_particle(&mut self, particle: &Particle<F>) {
        self.draw_point(particle.position);
    }

    /// Draw the segment joining two connected particles.
    fn draw_spring(&mut self, a: &Particle<F>, b: &Particle<F>) {
        self.draw_line(a.position, b.position);
    }
}

/// A recorded draw primitive.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DrawCommand<F: Float> {
    Point(Vec2<F>),
    Line(Vec2<F>, Vec2<F>),
}

/// Renderer that records primitives for a headless consumer to replay.
#[derive(Clone, Debug, Default)]
pub struct DrawList<F: Float> {
    commands: AllocVec<DrawCommand<F>>,
}

impl<F: Float> DrawList<F> {
    pub fn new() -> Self {
        DrawList { commands: AllocVec::new() }
    }

    pub fn commands(&self) -> &[DrawCommand<F>] {
        &self.commands
    }

    pub fn points(&self) -> impl Iterator<Item = Vec2<F>> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Point(p) => Some(*p),
            DrawCommand::Line(..) => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = (Vec2<F>, Vec2<F>)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line(a, b) => Some((*a, *b)),
            DrawCommand::Point(_) => None,
        })
    }

    /// Drop all recorded commands, keeping the allocation for the next frame.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl<F: Float> Renderer<F> for DrawList<F> {
    fn draw_point(&mut self, position: Vec2<F>) {
        self.commands.push(DrawCommand::Point(position));
    }

    fn draw_line(&mut self, start: Vec2<F>, end: Vec2<F>) {
        self.commands.push(DrawCommand::Line(start, end));
    }
}
