//! Fixed-rate tick clock for the game loops.
//!
//! Time is passed in as milliseconds since an arbitrary start, so the pacer can
//! be driven by `Instant` in the binaries and by plain numbers in tests.

/// At most this many ticks are replayed after a stall; older backlog is dropped.
const MAX_CATCH_UP_TICKS: u32 = 5;

#[derive(Debug, Clone)]
pub struct TickPacer {
    tick_ms: u64,
    next_tick_ms: u64,
    started: bool,
}

impl TickPacer {
    pub fn new(tick_ms: u32) -> Self {
        Self {
            tick_ms: u64::from(tick_ms.max(1)),
            next_tick_ms: 0,
            started: false,
        }
    }

    pub fn tick_ms(&self) -> u32 {
        self.tick_ms as u32
    }

    /// Number of ticks to run at `now_ms`. The first call always yields one tick.
    pub fn due(&mut self, now_ms: u64) -> u32 {
        if !self.started {
            self.started = true;
            self.next_tick_ms = now_ms + self.tick_ms;
            return 1;
        }
        if now_ms < self.next_tick_ms {
            return 0;
        }

        let behind = (now_ms - self.next_tick_ms) / self.tick_ms + 1;
        if behind > u64::from(MAX_CATCH_UP_TICKS) {
            log::debug!("tick loop fell {behind} ticks behind; dropping backlog");
            self.next_tick_ms = now_ms + self.tick_ms;
            return MAX_CATCH_UP_TICKS;
        }
        self.next_tick_ms += behind * self.tick_ms;
        behind as u32
    }

    /// Milliseconds until the next tick is due (0 when one is already due).
    pub fn timeout_ms(&self, now_ms: u64) -> u64 {
        if !self.started {
            return 0;
        }
        self.next_tick_ms.saturating_sub(now_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_call_ticks_once() {
        let mut p = TickPacer::new(16);
        assert_eq!(p.timeout_ms(1_000), 0);
        assert_eq!(p.due(1_000), 1);
        assert_eq!(p.due(1_000), 0);
        assert_eq!(p.timeout_ms(1_004), 12);
    }

    #[test]
    fn ticks_at_fixed_rate() {
        let mut p = TickPacer::new(16);
        p.due(0);
        assert_eq!(p.due(15), 0);
        assert_eq!(p.due(16), 1);
        assert_eq!(p.due(31), 0);
        assert_eq!(p.due(32), 1);
    }

    #[test]
    fn catches_up_after_short_stall() {
        let mut p = TickPacer::new(16);
        p.due(0);
        assert_eq!(p.due(50), 3);
        // Schedule stays on the original grid.
        assert_eq!(p.timeout_ms(50), 14);
    }

    #[test]
    fn long_stall_drops_backlog() {
        let mut p = TickPacer::new(16);
        p.due(0);
        assert_eq!(p.due(10_000), MAX_CATCH_UP_TICKS);
        assert_eq!(p.timeout_ms(10_000), 16);
    }

    #[test]
    fn zero_tick_is_clamped() {
        assert_eq!(TickPacer::new(0).tick_ms(), 1);
    }
}
