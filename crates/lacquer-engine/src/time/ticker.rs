use std::time::Duration;

/// Converts elapsed time into a whole number of fixed-interval ticks.
///
/// Elapsed time accumulates across calls; the remainder carries over so no
/// time is lost between frames. A single `advance` never reports more than
/// `max_ticks_per_advance` ticks, which keeps a long stall (debugger, minimized
/// window) from replaying a burst of animation steps.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    accumulated: Duration,
    running: bool,
    max_ticks_per_advance: u32,
}

impl Ticker {
    /// A stopped ticker firing every `interval`. Zero intervals are raised to 1 ms.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            accumulated: Duration::ZERO,
            running: false,
            max_ticks_per_advance: 16,
        }
    }

    /// Caps the ticks reported by one [`advance`](Self::advance) (at least 1).
    #[must_use]
    pub fn with_max_ticks_per_advance(mut self, max: u32) -> Self {
        self.max_ticks_per_advance = max.max(1);
        self
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stops ticking and drops any partially accumulated interval.
    pub fn stop(&mut self) {
        self.running = false;
        self.accumulated = Duration::ZERO;
    }

    /// Adds `dt` of elapsed time and returns how many ticks are due.
    ///
    /// A stopped ticker always returns 0.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        if !self.running {
            return 0;
        }

        self.accumulated += dt;
        let due = (self.accumulated.as_nanos() / self.interval.as_nanos()) as u64;
        let ticks = due.min(self.max_ticks_per_advance as u64) as u32;

        if due > ticks as u64 {
            log::trace!("ticker dropped {} overdue ticks", due - ticks as u64);
            self.accumulated = Duration::ZERO;
        } else {
            self.accumulated -= self.interval * ticks;
        }
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration { Duration::from_millis(v) }

    #[test]
    fn stopped_ticker_never_fires() {
        let mut t = Ticker::new(ms(10));
        assert_eq!(t.advance(ms(100)), 0);
    }

    #[test]
    fn remainder_carries_over() {
        let mut t = Ticker::new(ms(10));
        t.start();
        assert_eq!(t.advance(ms(15)), 1);
        assert_eq!(t.advance(ms(5)), 1);
        assert_eq!(t.advance(ms(9)), 0);
    }

    #[test]
    fn burst_is_capped() {
        let mut t = Ticker::new(ms(1)).with_max_ticks_per_advance(4);
        t.start();
        assert_eq!(t.advance(ms(1000)), 4);
        assert_eq!(t.advance(ms(0)), 0);
    }

    #[test]
    fn stop_discards_partial_interval() {
        let mut t = Ticker::new(ms(10));
        t.start();
        assert_eq!(t.advance(ms(9)), 0);
        t.stop();
        t.start();
        assert_eq!(t.advance(ms(2)), 0);
    }

    #[test]
    fn zero_interval_is_raised() {
        assert_eq!(Ticker::new(Duration::ZERO).interval(), ms(1));
    }
}
