/// A single cancellable deadline.
///
/// Each call to [`Debouncer::schedule`] replaces the pending deadline, so a
/// burst of schedules collapses into one firing once `interval` seconds pass
/// without another schedule. Time is supplied by the caller in seconds.
#[derive(Debug, Clone)]
pub struct Debouncer {
    interval: f64,
    deadline: Option<f64>,
}

impl Debouncer {
    pub fn new(interval_secs: f64) -> Self {
        Self {
            interval: interval_secs,
            deadline: None,
        }
    }

    /// Arm (or re-arm) the deadline relative to `now`
    pub fn schedule(&mut self, now: f64) {
        self.deadline = Some(now + self.interval);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Seconds until the pending deadline, if any
    pub fn remaining(&self, now: f64) -> Option<f64> {
        self.deadline.map(|deadline| (deadline - now).max(0.0))
    }

    /// Returns true exactly once when the deadline has passed.
    pub fn poll(&mut self, now: f64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
