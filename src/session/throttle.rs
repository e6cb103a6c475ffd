/// Lets an action through at most once per `interval_ms`.
///
/// The last-fired timestamp starts at 0, so the first call only passes once the clock is past one
/// full interval. A call exactly `interval_ms` after the previous one is not yet due.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Throttle {
    interval_ms: f64,
    last_ms: f64,
}

impl Throttle {
    /// New throttle that last fired at time 0.
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_ms: 0.0,
        }
    }

    /// Minimum spacing between firings.
    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Timestamp of the last firing.
    pub fn last_ms(&self) -> f64 {
        self.last_ms
    }

    /// `true` when strictly more than one interval has passed since the last firing.
    pub fn is_due(&self, now_ms: f64) -> bool {
        now_ms - self.last_ms > self.interval_ms
    }

    /// Record a firing at `now_ms`.
    pub fn mark(&mut self, now_ms: f64) {
        self.last_ms = now_ms;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/throttle.rs"]
mod tests;
