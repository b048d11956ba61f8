use cortex_m::peripheral::{DCB, DWT};

use super::{Clock, Instant};

/// Cycle counter of the Cortex-M data watchpoint and trace unit.
///
/// `HZ` must match the core clock, e.g. `DwtClock<480_000_000>` on an
/// STM32H750 running at full speed. At that rate the counter wraps every
/// ~9 seconds, so filters must be stepped more often than every ~4 seconds.
pub struct DwtClock<const HZ: u32> {
    _dwt: DWT,
}

impl<const HZ: u32> DwtClock<HZ> {
    pub fn new(dcb: &mut DCB, mut dwt: DWT) -> Self {
        dcb.enable_trace();
        dwt.enable_cycle_counter();
        Self { _dwt: dwt }
    }
}

impl<const HZ: u32> Clock<HZ> for DwtClock<HZ> {
    fn now(&mut self) -> Instant<HZ> {
        Instant::from_ticks(DWT::cycle_count())
    }
}
