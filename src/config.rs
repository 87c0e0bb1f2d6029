//! Configuration types for the strip solver.

use crate::float::Float;

/// Per-strip sway tuning, fixed at construction.
///
/// # Builder Pattern
/// ```
/// use swishy::config::StripConfig;
///
/// let config: StripConfig<f32> = StripConfig::new()
///     .with_move_diff_coef(0.08)
///     .with_lerp_coef(0.05)
///     .with_move_begin_index(3);
/// ```
#[derive(Clone, Debug)]
pub struct StripConfig<F: Float> {
    /// How strongly horizontal motion translates into lateral sway, further
    /// scaled by each row's falloff weight. Default: 0.02.
    pub move_diff_coef: F,
    /// Per-fixed-step interpolation factor toward the sway target, in
    /// [0, 1]. Higher is stiffer. Default: 0.2.
    pub lerp_coef: F,
    /// Rows below this index stay rigid — a fixed root beneath the flexible
    /// tip. Default: 0 (whole strip sways).
    pub move_begin_index: usize,
}

impl<F: Float> StripConfig<F> {
    /// Create a config with default values.
    pub fn new() -> Self {
        StripConfig {
            move_diff_coef: F::from_f32(0.02),
            lerp_coef: F::from_f32(0.2),
            move_begin_index: 0,
        }
    }

    /// Set the motion-to-sway coefficient.
    pub fn with_move_diff_coef(mut self, move_diff_coef: F) -> Self {
        self.move_diff_coef = move_diff_coef;
        self
    }

    /// Set the per-step interpolation factor.
    pub fn with_lerp_coef(mut self, lerp_coef: F) -> Self {
        self.lerp_coef = lerp_coef;
        self
    }

    /// Set the first sway-affected row index.
    pub fn with_move_begin_index(mut self, move_begin_index: usize) -> Self {
        self.move_begin_index = move_begin_index;
        self
    }
}

impl<F: Float> Default for StripConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
