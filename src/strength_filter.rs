//! Low-pass filter with a discrete strength setting.
//!
//! Useful where the sampling interval is steady and unknown, e.g. smoothing
//! pots read in a fixed-rate control loop. See [`Strength`] for the profiles.

use crate::one_pole_filter::OnePoleFilter;
use crate::strength::{Coefficients, Strength};

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StrengthFilter {
    strength: u8,
    filter: OnePoleFilter,
}

impl Default for StrengthFilter {
    fn default() -> Self {
        Self::new(Strength::default().into())
    }
}

impl StrengthFilter {
    /// 0 disables the filter, 1 to 4 go from light to heavy smoothing. Other
    /// values use the strength 1 profile.
    pub fn new(strength: u8) -> Self {
        let mut filter = Self {
            strength,
            filter: OnePoleFilter::default(),
        };
        filter.apply_profile();
        filter
    }

    /// Takes effect on the next step. A different strength makes the next
    /// step seed the filter as if it was the first one.
    pub fn set_strength(&mut self, strength: u8) {
        if strength == self.strength {
            return;
        }
        self.strength = strength;
        self.apply_profile();
        self.configuration_changed();
    }

    pub fn strength(&self) -> u8 {
        self.strength
    }

    pub fn profile(&self) -> Strength {
        Strength::from(self.strength)
    }

    pub fn coefficients(&self) -> Option<Coefficients> {
        self.profile().coefficients()
    }

    pub fn step(&mut self, x: f32) -> f32 {
        if !self.profile().is_enabled() {
            return x;
        }

        match self.filter.value() {
            Some(old_tap) => {
                let new_tap = self.filter.tick(x);
                old_tap + new_tap
            }
            None => {
                self.init(x);
                x
            }
        }
    }

    /// Saturate both taps with `x`, so the filter reports `x` right away.
    pub fn init(&mut self, x: f32) {
        self.filter.seed(x / 2.0);
    }

    fn apply_profile(&mut self) {
        if let Some(Coefficients { c1, c2 }) = self.coefficients() {
            self.filter.set_coefficients(c1, c2);
        }
    }

    fn configuration_changed(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::trace!("Strength changed to {}, reseeding", self.strength);
        self.filter.reset();
    }
}
