use core::f32::consts::PI;

use crate::error::Error;

/// RC time constant in seconds, the time a step response takes to reach
/// roughly 63% of its final value.
///
/// Any value can be stored. Non-positive, infinite and NaN ones are rejected
/// when a smoothing factor is requested.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeConstant(f32);

impl Default for TimeConstant {
    fn default() -> Self {
        Self::from_seconds(1.0)
    }
}

impl TimeConstant {
    pub const fn from_seconds(seconds: f32) -> Self {
        Self(seconds)
    }

    /// `RC = 1 / (2π·fc)`
    pub fn from_cutoff_frequency(cutoff: f32) -> Self {
        Self(1.0 / (2.0 * PI * cutoff))
    }

    pub const fn seconds(self) -> f32 {
        self.0
    }

    pub fn cutoff_frequency(self) -> f32 {
        1.0 / (2.0 * PI * self.0)
    }

    pub fn validate(self) -> Result<Self, Error> {
        if self.0 > 0.0 && self.0.is_finite() {
            Ok(self)
        } else {
            Err(Error::InvalidTimeConstant)
        }
    }

    /// Smoothing factor for a step of `dt` seconds, `dt / (RC + dt)`.
    ///
    /// Always within (0, 1]. An infinite `dt` gives 1, the output jumps to
    /// the input.
    pub fn alpha(self, dt: f32) -> Result<f32, Error> {
        let rc = self.validate()?.0;
        if dt.is_nan() || dt <= 0.0 {
            return Err(Error::NonPositiveInterval);
        }
        // Divided form, `rc + dt` would overflow for huge values.
        let alpha = 1.0 / (1.0 + rc / dt);
        Ok(alpha.max(f32::MIN_POSITIVE))
    }
}
