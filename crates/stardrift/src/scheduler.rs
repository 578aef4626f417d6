//! Frame scheduling for the terminal event loop.

use std::time::{Duration, Instant};

use stardrift_core::{FrameHandle, FrameScheduler};

/// Holds at most one pending frame, due one interval after it was
/// requested. The event loop asks for due frames between input events.
#[derive(Debug)]
pub struct TickScheduler {
    interval: Duration,
    next_id: u64,
    pending: Option<(FrameHandle, Instant)>,
}

impl TickScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_id: 0,
            pending: None,
        }
    }

    /// Request a frame due one interval after `now`, replacing any pending
    /// one.
    pub fn request_frame_at(&mut self, now: Instant) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending = Some((handle, now + self.interval));
        handle
    }

    /// Remove and return the pending frame if it is due at `now`.
    pub fn take_due(&mut self, now: Instant) -> Option<FrameHandle> {
        match self.pending {
            Some((handle, due)) if due <= now => {
                self.pending = None;
                Some(handle)
            }
            _ => None,
        }
    }

    /// How long until the pending frame is due; `None` when idle.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|(_, due)| due.saturating_duration_since(now))
    }
}

impl FrameScheduler for TickScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.request_frame_at(Instant::now())
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if matches!(self.pending, Some((pending, _)) if pending == handle) {
            self.pending = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(16);

    #[test]
    fn test_frame_due_after_interval() {
        let mut scheduler = TickScheduler::new(INTERVAL);
        let start = Instant::now();
        let handle = scheduler.request_frame_at(start);

        assert_eq!(scheduler.time_until_due(start), Some(INTERVAL));
        assert_eq!(scheduler.take_due(start), None);
        assert_eq!(scheduler.take_due(start + INTERVAL), Some(handle));
        assert_eq!(scheduler.time_until_due(start), None);
        assert_eq!(scheduler.take_due(start + INTERVAL * 2), None);
    }

    #[test]
    fn test_cancelled_frame_is_never_delivered() {
        let mut scheduler = TickScheduler::new(INTERVAL);
        let start = Instant::now();
        let handle = scheduler.request_frame_at(start);
        scheduler.cancel_frame(handle);

        assert_eq!(scheduler.time_until_due(start), None);
        assert_eq!(scheduler.time_until_due(start), None);
        assert_eq!(scheduler.take_due(start + INTERVAL * 10), None);
    }

    #[test]
    fn test_cancel_ignores_stale_handle() {
        let mut scheduler = TickScheduler::new(INTERVAL);
        let start = Instant::now();
        let old = scheduler.request_frame_at(start);
        let current = scheduler.request_frame_at(start);
        assert_ne!(old, current);

        scheduler.cancel_frame(old);
        assert_eq!(scheduler.take_due(start + INTERVAL), Some(current));
    }

    #[test]
    fn test_overdue_frame_reports_zero_wait() {
        let mut scheduler = TickScheduler::new(INTERVAL);
        let start = Instant::now();
        scheduler.request_frame_at(start);
        assert_eq!(
            scheduler.time_until_due(start + INTERVAL * 3),
            Some(Duration::ZERO)
        );
    }
}
