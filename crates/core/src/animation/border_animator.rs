use std::time::Duration;

use crate::animation::domain::host_window::HostWindow;
use crate::animation::domain::overlay_surface::OverlaySurface;
use crate::animation::domain::tick_scheduler::{TickScheduler, TimerId};
use crate::border::domain::border_config::{BorderConfig, ConfigurationError};
use crate::border::domain::border_path::BorderPath;
use crate::border::domain::hue_phase::HuePhase;
use crate::shared::constants::SEGMENT_SPACING;

/// What a single tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Drawn { segments: usize },
    /// Window minimized or too small for the border; nothing drawn.
    Skipped,
    /// The animator is stopped; no further ticks will be scheduled.
    Halted,
}

/// Rotating rainbow border attached to a host window.
///
/// Each tick samples one hue per pixel of perimeter starting at the current
/// phase, redraws the border on the overlay, advances the phase and asks the
/// host to call back after the configured interval. Ticks run on the host's
/// event loop and take `&mut self`, so they never overlap.
pub struct BorderAnimator<W, O, S>
where
    W: HostWindow,
    O: OverlaySurface,
    S: TickScheduler,
{
    config: BorderConfig,
    window: W,
    overlay: O,
    scheduler: S,
    phase: HuePhase,
    pending: Option<TimerId>,
    running: bool,
    ticks: u64,
    last_segment_count: usize,
}

impl<W, O, S> BorderAnimator<W, O, S>
where
    W: HostWindow,
    O: OverlaySurface,
    S: TickScheduler,
{
    /// Validates the parameters, then attaches as [`BorderAnimator::attach`].
    pub fn new(
        window: W,
        overlay: O,
        scheduler: S,
        border_width: u32,
        interval: Duration,
        corner_radius: u32,
    ) -> Result<Self, ConfigurationError> {
        let config = BorderConfig::new(border_width, interval, corner_radius)?;
        Ok(Self::attach(window, overlay, scheduler, config))
    }

    /// Sizes the overlay to the window and schedules the first tick.
    ///
    /// If the overlay cannot take the window's size the animator starts
    /// halted.
    pub fn attach(window: W, overlay: O, scheduler: S, config: BorderConfig) -> Self {
        let mut animator = Self {
            config,
            window,
            overlay,
            scheduler,
            phase: HuePhase::ZERO,
            pending: None,
            running: true,
            ticks: 0,
            last_segment_count: 0,
        };

        let size = animator.window.size();
        if let Err(e) = animator.overlay.resize(size) {
            log::error!("Cannot size border overlay to {size}: {e}");
            animator.teardown();
            return animator;
        }

        log::info!(
            "Border attached to {size} window (width={}, {} corners, interval={:?})",
            animator.config.border_width(),
            if animator.config.is_rounded() {
                format!("{}px rounded", animator.config.corner_radius())
            } else {
                "square".to_string()
            },
            animator.config.interval()
        );
        animator.pending = Some(animator.scheduler.schedule(animator.config.interval()));
        animator
    }

    /// Redraws at the current phase, advances it and schedules the next tick.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Halted;
        }
        if let Some(id) = self.pending.take() {
            self.scheduler.cancel(id);
        }
        if !self.window.is_open() {
            log::info!("Window closed, stopping border animation");
            self.teardown();
            return TickOutcome::Halted;
        }

        let outcome = match self.render() {
            Ok(outcome) => outcome,
            Err(e) => {
                log::error!("Border drawing failed, stopping animation: {e}");
                self.teardown();
                return TickOutcome::Halted;
            }
        };

        self.ticks += 1;
        self.phase = self.phase.advanced_by(self.config.phase_step());
        self.pending = Some(self.scheduler.schedule(self.config.interval()));
        log::trace!(
            "Tick {}: {:?}, phase now {:.1}°",
            self.ticks,
            outcome,
            self.phase.degrees()
        );
        outcome
    }

    /// Host callback for an expired timer. Only the currently pending timer
    /// triggers a tick; anything else returns `None`.
    pub fn fire(&mut self, id: TimerId) -> Option<TickOutcome> {
        if self.pending != Some(id) {
            log::trace!("Ignoring stale timer {id:?}");
            return None;
        }
        self.pending = None;
        Some(self.tick())
    }

    /// Redraws at the current phase without advancing or rescheduling, e.g.
    /// right after the host reports a resize.
    pub fn redraw(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Halted;
        }
        if !self.window.is_open() {
            self.teardown();
            return TickOutcome::Halted;
        }
        match self.render() {
            Ok(outcome) => outcome,
            Err(e) => {
                log::error!("Border drawing failed, stopping animation: {e}");
                self.teardown();
                TickOutcome::Halted
            }
        }
    }

    /// Cancels the pending tick and releases the overlay. Idempotent.
    pub fn teardown(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        if let Some(id) = self.pending.take() {
            self.scheduler.cancel(id);
        }
        self.overlay.release();
        log::info!("Border animation stopped after {} ticks", self.ticks);
    }

    fn render(&mut self) -> Result<TickOutcome, Box<dyn std::error::Error>> {
        let size = self.window.size();
        if size != self.overlay.size() {
            log::debug!("Resizing border overlay {} -> {size}", self.overlay.size());
            self.overlay.resize(size)?;
        }

        let Some(path) = BorderPath::fit(
            size,
            self.config.border_width(),
            self.config.corner_radius(),
        ) else {
            log::debug!("Window {size} cannot hold the border, skipping frame");
            self.last_segment_count = 0;
            return Ok(TickOutcome::Skipped);
        };

        if path.radius() < self.config.corner_radius() as f32 {
            log::trace!(
                "Corner radius clamped to {:.1}px for {size} window",
                path.radius()
            );
        }

        let segments = path.segments(self.phase, SEGMENT_SPACING);
        self.overlay.clear();
        self.overlay.draw_segments(&segments)?;
        self.last_segment_count = segments.len();
        Ok(TickOutcome::Drawn {
            segments: segments.len(),
        })
    }

    pub fn config(&self) -> &BorderConfig {
        &self.config
    }

    pub fn phase(&self) -> HuePhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Completed ticks, skipped ones included.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Segments drawn by the most recent frame; 0 if it was skipped.
    pub fn last_segment_count(&self) -> usize {
        self.last_segment_count
    }

    pub fn pending_timer(&self) -> Option<TimerId> {
        self.pending
    }

    pub fn window(&self) -> &W {
        &self.window
    }

    /// The host feeds size changes through here.
    pub fn window_mut(&mut self) -> &mut W {
        &mut self.window
    }

    pub fn overlay(&self) -> &O {
        &self.overlay
    }

    pub fn overlay_mut(&mut self) -> &mut O {
        &mut self.overlay
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

impl<W, O, S> Drop for BorderAnimator<W, O, S>
where
    W: HostWindow,
    O: OverlaySurface,
    S: TickScheduler,
{
    fn drop(&mut self) {
        self.teardown();
    }
}
