//! Low-pass filter defined by its RC time constant.
//!
//! The smoothing factor is recomputed on every step from the time elapsed
//! since the previous one, `alpha = dt / (RC + dt)`, so irregular sampling
//! still decays with the configured time constant. [`RcFilter`] takes the
//! interval from the caller, [`ClockedRcFilter`] measures it with a [`Clock`].
//!
//! A rejected step leaves the filter untouched. The next valid step continues
//! as if the rejected one never happened.

use crate::clock::{elapsed_seconds, Clock, Instant};
use crate::error::Error;
use crate::one_pole_filter::OnePoleFilter;
use crate::time_constant::TimeConstant;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RcFilter {
    filter: OnePoleFilter,
    time_constant: TimeConstant,
    last_error: Option<Error>,
}

impl Default for RcFilter {
    fn default() -> Self {
        Self::with_time_constant(TimeConstant::default())
    }
}

impl RcFilter {
    pub fn new(time_constant_seconds: f32) -> Self {
        Self::with_time_constant(TimeConstant::from_seconds(time_constant_seconds))
    }

    pub fn with_time_constant(time_constant: TimeConstant) -> Self {
        Self {
            filter: OnePoleFilter::default(),
            time_constant,
            last_error: None,
        }
    }

    pub fn set_time_constant(&mut self, seconds: f32) {
        self.time_constant = TimeConstant::from_seconds(seconds);
    }

    pub fn set_cutoff_frequency(&mut self, cutoff: f32) {
        self.time_constant = TimeConstant::from_cutoff_frequency(cutoff);
    }

    pub fn time_constant(&self) -> f32 {
        self.time_constant.seconds()
    }

    pub fn cutoff_frequency(&self) -> f32 {
        self.time_constant.cutoff_frequency()
    }

    /// Filter `x` sampled `dt` seconds after the previous step.
    ///
    /// The first step seeds the filter and returns `x`, ignoring `dt`.
    pub fn step(&mut self, x: f32, dt: f32) -> Result<f32, Error> {
        let result = self.advance(x, dt).inspect_err(|_error| {
            #[cfg(feature = "defmt")]
            defmt::warn!("Rejected step with dt={}s: {}", dt, _error);
        });
        self.last_error = result.err();
        result
    }

    /// Seed the filter with `x`, dropping its history. Use it when the signal
    /// is known to jump.
    pub fn init(&mut self, x: f32) {
        self.filter.seed(x);
    }

    pub fn is_seeded(&self) -> bool {
        self.filter.is_seeded()
    }

    /// The last output, `None` until the first step.
    pub fn value(&self) -> Option<f32> {
        self.filter.value()
    }

    /// Error of the last step, `None` if it succeeded.
    pub fn last_error(&self) -> Option<Error> {
        self.last_error
    }

    pub fn error_message(&self) -> &'static str {
        self.last_error.map_or("no error", Error::message)
    }

    fn advance(&mut self, x: f32, dt: f32) -> Result<f32, Error> {
        let time_constant = self.time_constant.validate()?;
        if !self.filter.is_seeded() {
            return Ok(self.filter.tick(x));
        }
        let alpha = time_constant.alpha(dt)?;
        self.filter.set_alpha(alpha);
        Ok(self.filter.tick(x))
    }
}

pub struct Config<C> {
    pub clock: C,
    pub time_constant: TimeConstant,
}

/// [`RcFilter`] measuring the interval between steps with its own clock.
pub struct ClockedRcFilter<C, const HZ: u32> {
    filter: RcFilter,
    clock: C,
    reference: Option<Instant<HZ>>,
}

impl<C: Clock<HZ>, const HZ: u32> ClockedRcFilter<C, HZ> {
    pub fn new(config: Config<C>) -> Self {
        Self {
            filter: RcFilter::with_time_constant(config.time_constant),
            clock: config.clock,
            reference: None,
        }
    }

    /// The first step seeds the filter, returns `x` and starts measuring
    /// time. Each following step reads the clock and uses the time passed
    /// since the last successful step.
    pub fn step(&mut self, x: f32) -> Result<f32, Error> {
        let now = self.clock.now();
        let dt = self
            .reference
            .map_or(0.0, |reference| elapsed_seconds(reference, now));
        let value = self.filter.step(x, dt)?;
        self.reference = Some(now);
        Ok(value)
    }

    /// Seed the filter with `x` and restart the time measurement.
    pub fn init(&mut self, x: f32) {
        self.filter.init(x);
        self.reference = Some(self.clock.now());
    }

    pub fn set_time_constant(&mut self, seconds: f32) {
        self.filter.set_time_constant(seconds);
    }

    pub fn set_cutoff_frequency(&mut self, cutoff: f32) {
        self.filter.set_cutoff_frequency(cutoff);
    }

    pub fn time_constant(&self) -> f32 {
        self.filter.time_constant()
    }

    pub fn cutoff_frequency(&self) -> f32 {
        self.filter.cutoff_frequency()
    }

    pub fn value(&self) -> Option<f32> {
        self.filter.value()
    }

    pub fn last_error(&self) -> Option<Error> {
        self.filter.last_error()
    }

    pub fn error_message(&self) -> &'static str {
        self.filter.error_message()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}
