use std::time::Instant as StdInstant;

use super::{Clock, Instant};

/// Microsecond clock for hosted targets.
///
/// Ticks are 32 bits wide and wrap every ~71.6 minutes. Two steps more than
/// half of that (~35.8 minutes) apart read as time going backwards, and the
/// step gets rejected with `NonPositiveInterval`. Call `init` after such a
/// pause, or use [`RcFilter`](crate::RcFilter) with an explicit `dt`.
pub struct SystemClock {
    epoch: StdInstant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            epoch: StdInstant::now(),
        }
    }
}

impl Clock<1_000_000> for SystemClock {
    fn now(&mut self) -> Instant<1_000_000> {
        // NOTE: Truncation is the wrap-around the instant comparison expects.
        #[allow(clippy::cast_possible_truncation)]
        let ticks = self.epoch.elapsed().as_micros() as u32;
        Instant::from_ticks(ticks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::elapsed_seconds;

    #[test]
    fn does_not_go_backwards() {
        let mut clock = SystemClock::new();
        let earlier = clock.now();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let later = clock.now();
        assert!(elapsed_seconds(earlier, later) >= 0.002);
    }
}
