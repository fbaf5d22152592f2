use std::time::Duration;

/// Identifies one scheduled callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(pub u64);

/// The host event loop's one-shot timer primitive.
///
/// Hosts may clamp `delay` to their own minimum resolution.
pub trait TickScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerId;

    /// Cancelling an unknown or already-fired timer is a no-op.
    fn cancel(&mut self, id: TimerId);
}
