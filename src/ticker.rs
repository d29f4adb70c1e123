//! Recurring deadlines owned by a dashboard view
//!
//! A [`Ticker`] does not spawn anything: the event loop asks it whether a
//! period elapsed. Stopping is permanent, and dropping a ticker stops it.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct Ticker {
    name: &'static str,
    interval: Duration,
    next_due: Option<Instant>,
    fired: u64,
}

impl Ticker {
    /// Arm a ticker whose first firing is one `interval` after `now`
    pub fn start(name: &'static str, interval: Duration, now: Instant) -> Self {
        log::debug!("{} ticker started ({} ms)", name, interval.as_millis());
        Self {
            name,
            interval,
            next_due: Some(now + interval),
            fired: 0,
        }
    }

    /// Fire at most once if the deadline has passed
    ///
    /// Periods missed while the loop was busy are dropped rather than
    /// replayed, so a stalled loop resumes with a single tick.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };
        if now < due {
            return false;
        }

        let mut next = due + self.interval;
        if next <= now {
            next = now + self.interval;
        }
        self.next_due = Some(next);
        self.fired += 1;
        true
    }

    /// Time left before the next firing; `None` once stopped
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_due
            .map(|due| due.saturating_duration_since(now))
    }

    /// Cancel all future firings. Idempotent.
    pub fn stop(&mut self) {
        if self.next_due.take().is_some() {
            log::debug!("{} ticker stopped after {} ticks", self.name, self.fired);
        }
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Number of times this ticker fired
    pub fn fired(&self) -> u64 {
        self.fired
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_fires_after_interval() {
        let t0 = Instant::now();
        let mut ticker = Ticker::start("clock", 1000 * MS, t0);
        assert!(!ticker.poll(t0));
        assert!(!ticker.poll(t0 + 999 * MS));
        assert!(ticker.poll(t0 + 1000 * MS));
        assert!(!ticker.poll(t0 + 1500 * MS));
        assert!(ticker.poll(t0 + 2000 * MS));
        assert_eq!(ticker.fired(), 2);
    }

    #[test]
    fn test_missed_periods_collapse() {
        let t0 = Instant::now();
        let mut ticker = Ticker::start("metrics", 1400 * MS, t0);
        assert!(ticker.poll(t0 + 10_000 * MS));
        assert!(!ticker.poll(t0 + 10_000 * MS));
        assert_eq!(ticker.time_until_next(t0 + 10_000 * MS), Some(1400 * MS));
    }

    #[test]
    fn test_time_until_next() {
        let t0 = Instant::now();
        let ticker = Ticker::start("clock", 1000 * MS, t0);
        assert_eq!(ticker.time_until_next(t0 + 400 * MS), Some(600 * MS));
        assert_eq!(ticker.time_until_next(t0 + 5000 * MS), Some(Duration::ZERO));
    }

    #[test]
    fn test_stopped_ticker_never_fires() {
        let t0 = Instant::now();
        let mut ticker = Ticker::start("clock", 1000 * MS, t0);
        ticker.stop();
        ticker.stop();
        assert!(!ticker.is_running());
        assert!(!ticker.poll(t0 + 60_000 * MS));
        assert_eq!(ticker.time_until_next(t0), None);
        assert_eq!(ticker.fired(), 0);
    }
}
