use std::time::{Duration, Instant};

/// Fixed-rate step clock. Late polls do not queue extra steps.
pub struct Ticker {
    interval: Duration,
    next: Instant,
}

impl Ticker {
    pub fn new(rate_hz: u32, now: Instant) -> Self {
        let interval = Duration::from_secs(1) / rate_hz.max(1);
        Self { interval, next: now + interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// When the event loop should wake for the next step.
    pub fn deadline(&self) -> Instant {
        self.next
    }

    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }
        self.next = now + self.interval;
        true
    }
}
