//! Motion sampling: world-space deltas smoothed into a sway signal.

use crate::float::Float;
use crate::vec::Vec2;

// Fixed exponential-smoothing factor for the horizontal delta. Deliberately
// not time-scaled: the sampler is only ever evaluated at the fixed step rate.
const SMOOTHING: f32 = 0.2;

/// Samples the strip's world position and derives a smoothed horizontal
/// velocity signal for the solver.
///
/// Single-frame jitter in the raw delta is suppressed with an exponential
/// moving average. [`MotionSampler::anchor`] re-seats the previous sample so
/// that the first tick after an idle period measures a zero delta instead of
/// the whole idle-time displacement.
#[derive(Clone, Debug)]
pub struct MotionSampler<F: Float> {
    prev: Vec2<F>,
    smoothed_dx: F,
}

impl<F: Float> MotionSampler<F> {
    /// Create a sampler anchored at `world`.
    pub fn new(world: Vec2<F>) -> Self {
        MotionSampler { prev: world, smoothed_dx: F::zero() }
    }

    /// Re-seat the previous-position sample to `world`.
    ///
    /// The next [`sample`](Self::sample) call then measures its raw delta
    /// from here. The smoothed signal is left alone and keeps decaying.
    pub fn anchor(&mut self, world: Vec2<F>) {
        self.prev = world;
    }

    /// Feed one tick's world position; returns the updated smoothed signal.
    ///
    /// The previous sample is updated every call, whether or not the caller
    /// consumes the returned value.
    pub fn sample(&mut self, world: Vec2<F>) -> F {
        let raw_dx = world.x - self.prev.x;
        self.smoothed_dx = self.smoothed_dx.lerp(raw_dx, F::from_f32(SMOOTHING));
        self.prev = world;
        self.smoothed_dx
    }

    /// Current smoothed horizontal signal without advancing the sampler.
    pub fn smoothed_dx(&self) -> F {
        self.smoothed_dx
    }

    /// World position recorded by the last sample or anchor.
    pub fn prev(&self) -> Vec2<F> {
        self.prev
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float::Float;

    #[test]
    fn first_sample_after_anchor_is_damped_delta() {
        let mut sampler = MotionSampler::new(Vec2::new(0.0f32, 0.0));
        let s = sampler.sample(Vec2::new(100.0, 0.0));
        assert!(Float::abs(s - 20.0) < 1e-5); // lerp(0, 100, 0.2)
    }

    #[test]
    fn anchor_suppresses_jump() {
        let mut sampler = MotionSampler::new(Vec2::new(0.0f32, 0.0));
        sampler.anchor(Vec2::new(500.0, 0.0));
        let s = sampler.sample(Vec2::new(500.0, 0.0));
        assert_eq!(s, 0.0);
    }

    #[test]
    fn signal_decays_when_held() {
        let mut sampler = MotionSampler::new(Vec2::new(0.0f32, 0.0));
        let first = sampler.sample(Vec2::new(50.0, 0.0));
        let mut last = first;
        for _ in 0..10 {
            let s = sampler.sample(Vec2::new(50.0, 0.0));
            assert!(Float::abs(s) < Float::abs(last));
            last = s;
        }
    }
}
