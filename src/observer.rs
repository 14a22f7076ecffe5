//! Hooks into the phases of an integration step.

/// Receives a callback at each phase boundary of
/// [`VerletIntegrator::integrate_observed`](crate::integrator::VerletIntegrator::integrate_observed).
///
/// Every method defaults to doing nothing, so implementors only override the
/// phases they care about (profiling, debug overlays, step counters).
pub trait StepObserver {
    /// Gravity has been accumulated and every free particle has taken its
    /// Verlet step.
    fn on_integrate(&mut self) {}

    /// Relaxation pass `iteration` (zero-based) has visited every constraint.
    fn on_constraint_iteration(&mut self, _iteration: usize) {}

    /// Global damping ran. Not called when damping is disabled.
    fn on_damping(&mut self) {}

    fn on_step_complete(&mut self) {}
}

/// Observer used by [`VerletIntegrator::integrate`](crate::integrator::VerletIntegrator::integrate).
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
