//! Cancelable deferred task for the exit debounce.
//!
//! Time is passed in explicitly (seconds on the scene clock), so the task is
//! driven by the frame loop and never fires on its own.

/// A single pending deadline. Scheduling again supersedes the old one.
#[derive(Debug, Clone, Default)]
pub struct ScheduledReset {
    deadline: Option<f64>,
}

impl ScheduledReset {
    pub fn new() -> Self {
        Self { deadline: None }
    }

    pub fn schedule(&mut self, now: f64, delay: f64) {
        self.deadline = Some(now + delay);
    }

    /// Returns true if something was actually pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<f64> {
        self.deadline
    }

    pub fn is_due(&self, now: f64) -> bool {
        matches!(self.deadline, Some(d) if now >= d)
    }

    /// Consume the task if its deadline has passed.
    pub fn take_if_due(&mut self, now: f64) -> bool {
        if self.is_due(now) {
            self.deadline = None;
            true
        } else {
            false
        }
    }
}
