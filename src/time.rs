//! Fixed-period tick clock.
//!
//! The host feeds wall-clock timestamps (from `performance.now()` or a
//! timer callback) and applies one `GameSession::tick` whenever `fire`
//! reports true. One firing is one period's worth of production: if the
//! host stalls past several periods, the backlog is discarded rather
//! than replayed, so a laggy frame never produces a burst of gain.

/// Milliseconds between passive production ticks.
pub const TICK_MS: f64 = 100.0;

pub struct TickClock {
    /// Timestamp of the last fired tick (ms), None before the first.
    last_fire: Option<f64>,
    /// Total ticks fired since creation.
    pub total_ticks: u64,
    cancelled: bool,
}

impl TickClock {
    pub fn new() -> Self {
        Self {
            last_fire: None,
            total_ticks: 0,
            cancelled: false,
        }
    }

    /// Feed the current wall-clock time. Returns true when one tick
    /// should be applied now.
    ///
    /// The first call only anchors the clock. After `cancel` this
    /// always returns false.
    pub fn fire(&mut self, now_ms: f64) -> bool {
        if self.cancelled {
            return false;
        }
        let prev = match self.last_fire {
            Some(prev) => prev,
            None => {
                self.last_fire = Some(now_ms);
                return false;
            }
        };
        if now_ms - prev < TICK_MS {
            return false;
        }
        // Re-anchor at now: elapsed periods beyond the first are dropped.
        self.last_fire = Some(now_ms);
        self.total_ticks += 1;
        true
    }

    /// Stop the schedule for good. Ends the session's passive
    /// production with no further side effects.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new()
    }
}
