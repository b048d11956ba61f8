//! Simple one-pole low-pass filter.
//!
//! Based on <https://www.earlevel.com/main/2012/12/15/a-one-pole-filter/>,
//! this is the recurrence `y = a0 * x + b1 * y` shared by every smoother in
//! the crate. With `a0 = alpha` and `b1 = 1 - alpha` it is the exponential
//! smoothing step `y += alpha * (x - y)`.
//!
//! The filter starts unseeded. The first tick adopts the input as its output,
//! so there is no warm-up transient from zero.

use core::f32::consts::PI;

use libm::expf;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OnePoleFilter {
    y_m1: f32,
    a0: f32,
    b1: f32,
    phase: Phase,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum Phase {
    Unseeded,
    Running,
}

impl Default for OnePoleFilter {
    fn default() -> Self {
        Self::from_alpha(1.0)
    }
}

impl OnePoleFilter {
    // Cutoff is in the same unit as the sample rate. 10.0 at 1000.0 would be 10 Hz.
    pub fn new(sample_rate: f32, cutoff: f32) -> Self {
        let normalized_frequency = cutoff / sample_rate;
        let b1 = expf(-2.0 * PI * normalized_frequency);
        let a0 = 1.0 - b1;
        Self::from_coefficients(a0, b1)
    }

    pub const fn from_coefficients(a0: f32, b1: f32) -> Self {
        Self {
            y_m1: 0.0,
            a0,
            b1,
            phase: Phase::Unseeded,
        }
    }

    pub fn from_alpha(alpha: f32) -> Self {
        Self::from_coefficients(alpha, 1.0 - alpha)
    }

    /// Replace the coefficients, keeping the current output.
    pub fn set_coefficients(&mut self, a0: f32, b1: f32) {
        self.a0 = a0;
        self.b1 = b1;
    }

    pub fn set_alpha(&mut self, alpha: f32) {
        self.set_coefficients(alpha, 1.0 - alpha);
    }

    pub fn coefficients(&self) -> (f32, f32) {
        (self.a0, self.b1)
    }

    pub fn tick(&mut self, x: f32) -> f32 {
        match self.phase {
            Phase::Unseeded => self.seed(x),
            Phase::Running => self.y_m1 = x * self.a0 + self.y_m1 * self.b1,
        }
        self.y_m1
    }

    /// Force the output to `y`, making the next tick continue from there.
    pub fn seed(&mut self, y: f32) {
        self.y_m1 = y;
        self.phase = Phase::Running;
    }

    /// Forget the output. The next tick seeds the filter again.
    pub fn reset(&mut self) {
        self.phase = Phase::Unseeded;
    }

    pub fn is_seeded(&self) -> bool {
        self.phase == Phase::Running
    }

    /// The last output, `None` until the filter gets seeded.
    pub fn value(&self) -> Option<f32> {
        match self.phase {
            Phase::Unseeded => None,
            Phase::Running => Some(self.y_m1),
        }
    }
}
