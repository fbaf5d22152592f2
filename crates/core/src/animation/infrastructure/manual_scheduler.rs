use std::collections::BTreeSet;
use std::time::Duration;

use crate::animation::border_animator::BorderAnimator;
use crate::animation::domain::host_window::HostWindow;
use crate::animation::domain::overlay_surface::OverlaySurface;
use crate::animation::domain::tick_scheduler::{TickScheduler, TimerId};
use crate::shared::constants::MIN_TICK_RESOLUTION;

/// Single-threaded timer queue on a virtual clock.
///
/// Stands in for a GUI toolkit's event loop when rendering headlessly: time
/// only moves when the driver pops due timers or advances the clock.
#[derive(Debug)]
pub struct ManualScheduler {
    now: Duration,
    next_id: u64,
    queue: BTreeSet<(Duration, TimerId)>,
    resolution: Duration,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::with_resolution(MIN_TICK_RESOLUTION)
    }

    /// Delays shorter than `resolution` are rounded up to it.
    pub fn with_resolution(resolution: Duration) -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            queue: BTreeSet::new(),
            resolution,
        }
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.queue.iter().any(|&(_, t)| t == id)
    }

    pub fn next_due(&self) -> Option<Duration> {
        self.queue.first().map(|&(due, _)| due)
    }

    /// Removes the earliest timer due at or before `deadline` and moves the
    /// clock to its due time.
    pub fn pop_due(&mut self, deadline: Duration) -> Option<TimerId> {
        let &(due, id) = self.queue.first()?;
        if due > deadline {
            return None;
        }
        self.queue.pop_first();
        self.now = self.now.max(due);
        Some(id)
    }

    pub fn advance_to(&mut self, time: Duration) {
        self.now = self.now.max(time);
    }
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl TickScheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let due = self.now + delay.max(self.resolution);
        self.queue.insert((due, id));
        id
    }

    fn cancel(&mut self, id: TimerId) {
        if self.is_pending(id) {
            self.queue.retain(|&(_, t)| t != id);
        }
    }
}

/// Fires every timer that falls due within the next `span` of virtual time,
/// then moves the clock to the end of the span. Returns the number of ticks
/// the animator ran.
pub fn run_for<W, O>(animator: &mut BorderAnimator<W, O, ManualScheduler>, span: Duration) -> usize
where
    W: HostWindow,
    O: OverlaySurface,
{
    let deadline = animator.scheduler().now() + span;
    let mut ticks = 0;
    while let Some(id) = animator.scheduler_mut().pop_due(deadline) {
        if animator.fire(id).is_some() {
            ticks += 1;
        }
    }
    animator.scheduler_mut().advance_to(deadline);
    ticks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timers_fire_in_due_order() {
        let mut scheduler = ManualScheduler::new();
        let late = scheduler.schedule(Duration::from_millis(30));
        let early = scheduler.schedule(Duration::from_millis(10));

        let deadline = Duration::from_secs(1);
        assert_eq!(scheduler.pop_due(deadline), Some(early));
        assert_eq!(scheduler.now(), Duration::from_millis(10));
        assert_eq!(scheduler.pop_due(deadline), Some(late));
        assert_eq!(scheduler.pop_due(deadline), None);
    }

    #[test]
    fn test_timer_not_due_before_deadline() {
        let mut scheduler = ManualScheduler::new();
        scheduler.schedule(Duration::from_millis(100));
        assert_eq!(scheduler.pop_due(Duration::from_millis(99)), None);
        assert_eq!(scheduler.pending_count(), 1);
    }

    #[test]
    fn test_cancel_removes_timer() {
        let mut scheduler = ManualScheduler::new();
        let id = scheduler.schedule(Duration::from_millis(5));
        assert!(scheduler.is_pending(id));
        scheduler.cancel(id);
        assert!(!scheduler.is_pending(id));
        assert_eq!(scheduler.pop_due(Duration::from_secs(1)), None);
    }

    #[test]
    fn test_cancel_unknown_is_noop() {
        let mut scheduler = ManualScheduler::new();
        scheduler.schedule(Duration::from_millis(5));
        scheduler.cancel(TimerId(99));
        assert_eq!(scheduler.pending_count(), 1);
    }

    #[test]
    fn test_cancel_after_fire_keeps_other_timers() {
        let mut scheduler = ManualScheduler::new();
        let first = scheduler.schedule(Duration::from_millis(5));
        let second = scheduler.schedule(Duration::from_millis(10));
        assert_eq!(scheduler.pop_due(Duration::from_millis(5)), Some(first));

        scheduler.cancel(first);
        assert!(scheduler.is_pending(second));
        assert_eq!(scheduler.pending_count(), 1);
    }

    #[test]
    fn test_sub_resolution_delay_is_clamped() {
        let mut scheduler = ManualScheduler::with_resolution(Duration::from_millis(4));
        scheduler.schedule(Duration::from_micros(10));
        assert_eq!(scheduler.next_due(), Some(Duration::from_millis(4)));
    }

    #[test]
    fn test_delay_is_relative_to_now() {
        let mut scheduler = ManualScheduler::new();
        scheduler.advance_to(Duration::from_secs(2));
        scheduler.schedule(Duration::from_millis(50));
        assert_eq!(scheduler.next_due(), Some(Duration::from_millis(2050)));
    }

    #[test]
    fn test_clock_never_moves_backwards() {
        let mut scheduler = ManualScheduler::new();
        scheduler.advance_to(Duration::from_secs(5));
        scheduler.advance_to(Duration::from_secs(1));
        assert_eq!(scheduler.now(), Duration::from_secs(5));
    }
}
