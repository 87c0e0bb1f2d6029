//! Step observer trait for monitoring strip simulation progress.

/// Trait for observing strip simulation steps.
///
/// Implement this trait to monitor update progress (e.g., for debugging,
/// visualization, or performance profiling). All methods have default
/// no-op implementations.
pub trait StepObserver {
    /// Called after each fixed step's deformation pass.
    fn on_fixed_step(&mut self) {}

    /// Called when a frame's update is fully complete, with the number of
    /// fixed steps that ran this frame (may be zero).
    fn on_frame_complete(&mut self, _steps: usize) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
