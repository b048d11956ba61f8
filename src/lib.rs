//! First-order low-pass filters for smoothing sensor readings.
//!
//! * [`StrengthFilter`] picks one of four precomputed butterworth profiles.
//!   Fit for readings taken at a steady rate, like pots sampled in a control
//!   loop.
//! * [`RcFilter`] and [`ClockedRcFilter`] are defined by an RC time constant
//!   and adapt to the time elapsed between readings.
//!
//! Both seed themselves with the first reading, so there is no warm-up
//! transient. Both are built on [`OnePoleFilter`].
//!
//! Features:
//!
//! * `defmt`: derive `defmt::Format` for public types and log reseeding and
//!   rejected steps.
//! * `dwt`: [`clock::DwtClock`], the Cortex-M cycle counter as a clock.
//! * `std`: [`clock::SystemClock`], a clock for hosted targets.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod clock;
pub mod error;
pub mod one_pole_filter;
pub mod rc_filter;
pub mod strength;
pub mod strength_filter;
pub mod time_constant;

pub use self::clock::Clock;
pub use self::error::Error;
pub use self::one_pole_filter::OnePoleFilter;
pub use self::rc_filter::{ClockedRcFilter, RcFilter};
pub use self::strength::{Coefficients, Strength};
pub use self::strength_filter::StrengthFilter;
pub use self::time_constant::TimeConstant;
