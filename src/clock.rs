//! Fixed-timestep accumulator clock.

use crate::float::Float;

/// Accumulates variable frame deltas and doles out whole fixed steps.
///
/// The solver's interpolation coefficients are authored against a 60 Hz
/// step. Running them with the raw frame delta would make sway stiffness
/// depend on the display's refresh rate; the clock instead banks elapsed
/// milliseconds and releases them in 16.666 ms increments. A fast display
/// yields frames with zero due steps (intentional skipping); a stall yields
/// a catch-up burst of several discrete steps rather than one huge one.
///
/// There is no cap on the catch-up burst; a pathologically long stall runs
/// proportionally many steps in a single frame.
#[derive(Clone, Debug)]
pub struct FixedStepClock<F: Float> {
    accumulated: F,
    step_ms: F,
}

impl<F: Float> FixedStepClock<F> {
    /// 60 Hz clock (16.666... ms per step).
    pub fn new() -> Self {
        FixedStepClock {
            accumulated: F::zero(),
            step_ms: F::from_f32(1000.0) / F::from_f32(60.0),
        }
    }

    /// Bank `delta_ms` of frame time; returns how many whole fixed steps
    /// are now due. The fractional remainder stays banked.
    pub fn advance(&mut self, delta_ms: F) -> usize {
        self.accumulated = self.accumulated + delta_ms;
        let mut steps = 0;
        while self.accumulated >= self.step_ms {
            self.accumulated = self.accumulated - self.step_ms;
            steps += 1;
        }
        steps
    }

    /// Duration of one fixed step in milliseconds.
    pub fn step_ms(&self) -> F {
        self.step_ms
    }

    /// Milliseconds currently banked (always less than one step after
    /// [`advance`](Self::advance) returns).
    pub fn accumulated(&self) -> F {
        self.accumulated
    }
}

impl<F: Float> Default for FixedStepClock<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_frame_yields_no_step() {
        let mut clock = FixedStepClock::<f32>::new();
        assert_eq!(clock.advance(8.0), 0);
        assert!(clock.accumulated() > 0.0);
    }

    #[test]
    fn two_short_frames_yield_one_step() {
        let mut clock = FixedStepClock::<f32>::new();
        assert_eq!(clock.advance(8.0), 0);
        assert_eq!(clock.advance(9.0), 1);
        assert!(clock.accumulated() < clock.step_ms());
    }

    #[test]
    fn stall_produces_catch_up_burst() {
        let mut clock = FixedStepClock::<f32>::new();
        let steps = clock.advance(clock.step_ms() * 10.5);
        assert_eq!(steps, 10);
    }

    #[test]
    fn remainder_carries_between_frames() {
        let mut clock = FixedStepClock::<f64>::new();
        let step = clock.step_ms();
        clock.advance(step * 1.25);
        assert!(Float::abs(clock.accumulated() - step * 0.25) < 1e-9);
    }
}
