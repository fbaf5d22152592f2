use std::time::Duration;

use iced::widget::canvas;

use rainbow_border_core::animation::domain::host_window::HostWindow;
use rainbow_border_core::animation::domain::overlay_surface::OverlaySurface;
use rainbow_border_core::animation::domain::tick_scheduler::{TickScheduler, TimerId};
use rainbow_border_core::border::domain::border_segment::BorderSegment;
use rainbow_border_core::shared::constants::MIN_TICK_RESOLUTION;
use rainbow_border_core::shared::size::Size;

/// Last known state of the application window, fed by iced window events.
#[derive(Debug, Clone)]
pub struct IcedWindow {
    size: Size,
    open: bool,
}

impl IcedWindow {
    pub fn new(size: iced::Size) -> Self {
        Self {
            size: to_pixels(size),
            open: true,
        }
    }

    pub fn set_size(&mut self, size: iced::Size) {
        self.size = to_pixels(size);
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

impl HostWindow for IcedWindow {
    fn size(&self) -> Size {
        self.size
    }

    fn is_open(&self) -> bool {
        self.open
    }
}

fn to_pixels(size: iced::Size) -> Size {
    Size::new(
        size.width.max(0.0).round() as u32,
        size.height.max(0.0).round() as u32,
    )
}

/// Holds the current frame's segments for the border canvas to stroke.
pub struct IcedOverlay {
    size: Size,
    segments: Vec<BorderSegment>,
    cache: canvas::Cache,
    released: bool,
}

impl IcedOverlay {
    pub fn new() -> Self {
        Self {
            size: Size::ZERO,
            segments: Vec::new(),
            cache: canvas::Cache::new(),
            released: false,
        }
    }

    pub fn segments(&self) -> &[BorderSegment] {
        &self.segments
    }

    /// Geometry cache, invalidated whenever the segments change.
    pub fn cache(&self) -> &canvas::Cache {
        &self.cache
    }
}

impl Default for IcedOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl OverlaySurface for IcedOverlay {
    fn size(&self) -> Size {
        self.size
    }

    fn resize(&mut self, size: Size) -> Result<(), Box<dyn std::error::Error>> {
        if self.released {
            return Err("overlay has been released".into());
        }
        self.size = size;
        self.clear();
        Ok(())
    }

    fn clear(&mut self) {
        self.segments.clear();
        self.cache.clear();
    }

    fn draw_segments(
        &mut self,
        segments: &[BorderSegment],
    ) -> Result<(), Box<dyn std::error::Error>> {
        if self.released {
            return Err("overlay has been released".into());
        }
        self.segments.extend_from_slice(segments);
        self.cache.clear();
        Ok(())
    }

    fn release(&mut self) {
        self.released = true;
        self.size = Size::ZERO;
        self.clear();
    }
}

/// One-shot timer backed by an `iced::time::every` subscription.
///
/// The animator keeps at most one tick pending, so a single slot suffices.
/// The subscription is active while the slot is filled.
#[derive(Debug, Default)]
pub struct IcedScheduler {
    next_id: u64,
    pending: Option<(TimerId, Duration)>,
}

impl IcedScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending_delay(&self) -> Option<Duration> {
        self.pending.map(|(_, delay)| delay)
    }

    /// Empties the slot when the subscription fires.
    pub fn take_pending(&mut self) -> Option<TimerId> {
        self.pending.take().map(|(id, _)| id)
    }
}

impl TickScheduler for IcedScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending = Some((id, delay.max(MIN_TICK_RESOLUTION)));
        id
    }

    fn cancel(&mut self, id: TimerId) {
        if matches!(self.pending, Some((pending, _)) if pending == id) {
            self.pending = None;
        }
    }
}
