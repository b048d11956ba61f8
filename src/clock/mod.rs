//! Monotonic time sources for the time-constant filter.
//!
//! A clock reports a 32-bit tick count at `HZ` ticks per second. The count is
//! allowed to wrap around: instants are compared the way `fugit` compares
//! them, so elapsed time is measured correctly as long as two consecutive
//! readings are less than half of the counter range apart.

#[cfg(feature = "dwt")]
mod dwt;
#[cfg(feature = "std")]
mod system;

#[cfg(feature = "dwt")]
pub use self::dwt::DwtClock;
#[cfg(feature = "std")]
pub use self::system::SystemClock;

pub use fugit::TimerInstantU32 as Instant;

pub trait Clock<const HZ: u32> {
    fn now(&mut self) -> Instant<HZ>;
}

impl<C: Clock<HZ>, const HZ: u32> Clock<HZ> for &mut C {
    fn now(&mut self) -> Instant<HZ> {
        (**self).now()
    }
}

/// Seconds passed from `earlier` to `later`, zero if `later` is not ahead.
pub fn elapsed_seconds<const HZ: u32>(earlier: Instant<HZ>, later: Instant<HZ>) -> f32 {
    match later.checked_duration_since(earlier) {
        #[allow(clippy::cast_precision_loss)]
        Some(duration) => duration.ticks() as f32 / HZ as f32,
        None => 0.0,
    }
}
