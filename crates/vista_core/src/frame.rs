//! Coalescing work to the next animation frame
//!
//! High-frequency inputs (pointer moves) mark work as pending instead of
//! performing it immediately. [`NextFrame`] holds at most one pending value:
//! scheduling again replaces it rather than queuing, and the host drains it
//! once per frame with [`NextFrame::take`].

/// A single-slot "run on the next frame" request
#[derive(Debug)]
pub struct NextFrame<T> {
    pending: Option<T>,
    scheduled: u64,
    superseded: u64,
}

impl<T> NextFrame<T> {
    pub fn new() -> Self {
        Self {
            pending: None,
            scheduled: 0,
            superseded: 0,
        }
    }

    /// Schedule `value` for the next frame.
    ///
    /// Returns `true` if it replaced a request that had not run yet.
    pub fn schedule(&mut self, value: T) -> bool {
        self.scheduled += 1;
        let replaced = self.pending.replace(value).is_some();
        if replaced {
            self.superseded += 1;
        }
        replaced
    }

    /// Whether a request is waiting for the next frame
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the pending request without running it
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take()
    }

    /// Take the pending request; call once per frame
    pub fn take(&mut self) -> Option<T> {
        self.pending.take()
    }

    /// Total number of `schedule` calls
    pub fn scheduled_count(&self) -> u64 {
        self.scheduled
    }

    /// Number of requests replaced before they ran
    pub fn superseded_count(&self) -> u64 {
        self.superseded
    }
}

impl<T> Default for NextFrame<T> {
    fn default() -> Self {
        Self::new()
    }
}
