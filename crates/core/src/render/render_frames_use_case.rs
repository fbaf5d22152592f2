use std::path::{Path, PathBuf};

use crate::animation::border_animator::BorderAnimator;
use crate::animation::domain::host_window::HostWindow;
use crate::animation::infrastructure::manual_scheduler::{run_for, ManualScheduler};
use crate::render::domain::frame_writer::FrameWriter;
use crate::render::infrastructure::raster_overlay::RasterOverlay;

/// File name of the `index`-th rendered frame.
pub fn frame_path(output_dir: &Path, index: usize) -> PathBuf {
    output_dir.join(format!("frame_{index:04}.png"))
}

/// Headless rendering pipeline: advance one tick → write the overlay frame.
pub struct RenderFramesUseCase {
    writer: Box<dyn FrameWriter>,
    on_progress: Option<Box<dyn Fn(usize, usize) -> bool + Send>>,
}

impl RenderFramesUseCase {
    pub fn new(
        writer: Box<dyn FrameWriter>,
        on_progress: Option<Box<dyn Fn(usize, usize) -> bool + Send>>,
    ) -> Self {
        Self {
            writer,
            on_progress,
        }
    }

    /// Runs the animator one interval at a time and writes the overlay after
    /// every tick, straight from the overlay's buffer. Returns the number of
    /// frames written, which is less than `frames` only if the progress
    /// callback cancelled.
    pub fn execute<W: HostWindow>(
        &self,
        animator: &mut BorderAnimator<W, RasterOverlay, ManualScheduler>,
        frames: usize,
        output_dir: &Path,
    ) -> Result<usize, Box<dyn std::error::Error>> {
        let interval = animator.config().interval();
        let mut written = 0;

        while written < frames {
            if run_for(animator, interval) == 0 {
                if animator.is_running() {
                    continue;
                }
                break;
            }
            let Some(frame) = animator.overlay().frame() else {
                break;
            };
            self.writer.write(&frame_path(output_dir, written), frame)?;
            written += 1;

            if let Some(ref cb) = self.on_progress {
                if !cb(written, frames) {
                    log::info!("Frame rendering cancelled after {written} frames");
                    return Ok(written);
                }
            }
        }

        if written < frames {
            return Err(format!("Animation halted after {written} of {frames} frames").into());
        }
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use super::*;
    use crate::animation::infrastructure::headless_window::HeadlessWindow;
    use crate::shared::color::Rgb;
    use crate::shared::constants::MAX_OVERLAY_DIMENSION;
    use crate::shared::frame::Frame;
    use crate::shared::size::Size;

    // --- Stubs ---

    #[derive(Default)]
    struct Written {
        paths: Vec<PathBuf>,
        buffers: Vec<usize>,
        firsts: Vec<Rgb>,
    }

    struct RecordingWriter {
        log: Arc<Mutex<Written>>,
    }

    impl FrameWriter for RecordingWriter {
        fn write(&self, path: &Path, frame: &Frame) -> Result<(), Box<dyn std::error::Error>> {
            let mut log = self.log.lock().unwrap();
            log.paths.push(path.to_path_buf());
            log.buffers.push(frame.data().as_ptr() as usize);
            log.firsts.push(frame.pixel(0, 0).unwrap());
            Ok(())
        }
    }

    fn animator(size: Size) -> BorderAnimator<HeadlessWindow, RasterOverlay, ManualScheduler> {
        BorderAnimator::new(
            HeadlessWindow::new(size),
            RasterOverlay::new(Rgb::new(0xa9, 0xa9, 0xa9)),
            ManualScheduler::new(),
            5,
            Duration::from_millis(100),
            0,
        )
        .unwrap()
    }

    fn use_case(
        on_progress: Option<Box<dyn Fn(usize, usize) -> bool + Send>>,
    ) -> (RenderFramesUseCase, Arc<Mutex<Written>>) {
        let log = Arc::new(Mutex::new(Written::default()));
        let writer = RecordingWriter { log: log.clone() };
        (RenderFramesUseCase::new(Box::new(writer), on_progress), log)
    }

    #[test]
    fn test_frame_path_is_zero_padded() {
        assert_eq!(
            frame_path(Path::new("out"), 7),
            Path::new("out").join("frame_0007.png")
        );
    }

    #[test]
    fn test_writes_one_frame_per_tick() {
        let (use_case, log) = use_case(None);
        let mut animator = animator(Size::new(40, 30));

        let written = use_case.execute(&mut animator, 3, Path::new("out")).unwrap();

        assert_eq!(written, 3);
        assert_eq!(animator.ticks(), 3);
        let log = log.lock().unwrap();
        assert_eq!(log.paths[2], Path::new("out").join("frame_0002.png"));
        // Hue rotates between frames
        assert_ne!(log.firsts[0], log.firsts[1]);
    }

    #[test]
    fn test_writes_from_overlay_buffer_without_copying() {
        let (use_case, log) = use_case(None);
        let mut animator = animator(Size::new(40, 30));

        use_case.execute(&mut animator, 4, Path::new("out")).unwrap();

        let overlay_buffer = animator.overlay().frame().unwrap().data().as_ptr() as usize;
        let log = log.lock().unwrap();
        assert!(log.buffers.iter().all(|&b| b == overlay_buffer));
    }

    #[test]
    fn test_progress_callback_can_cancel() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let calls_clone = calls.clone();
        let (use_case, log) = use_case(Some(Box::new(move |current, total| {
            calls_clone.lock().unwrap().push((current, total));
            current < 2
        })));
        let mut animator = animator(Size::new(40, 30));

        let written = use_case.execute(&mut animator, 10, Path::new("out")).unwrap();

        assert_eq!(written, 2);
        assert_eq!(log.lock().unwrap().paths.len(), 2);
        assert_eq!(*calls.lock().unwrap(), vec![(1, 10), (2, 10)]);
    }

    #[test]
    fn test_halted_animation_is_an_error() {
        let (use_case, log) = use_case(None);
        let mut animator = animator(Size::new(40, 30));
        animator
            .window_mut()
            .resize(Size::new(MAX_OVERLAY_DIMENSION + 1, 30));

        let err = use_case
            .execute(&mut animator, 3, Path::new("out"))
            .unwrap_err();

        assert!(err.to_string().contains("halted after 0 of 3"));
        assert!(log.lock().unwrap().paths.is_empty());
    }
}
