use crate::border::domain::border_segment::BorderSegment;
use crate::shared::size::Size;

/// Drawing layer stacked above the window's own content.
///
/// Implementations decide how segments are rendered; the animator only
/// sizes the surface, clears it and hands over a full frame of segments.
pub trait OverlaySurface {
    fn size(&self) -> Size;

    fn resize(&mut self, size: Size) -> Result<(), Box<dyn std::error::Error>>;

    /// Removes the previous frame's border, keeping any persistent content.
    fn clear(&mut self);

    fn draw_segments(
        &mut self,
        segments: &[BorderSegment],
    ) -> Result<(), Box<dyn std::error::Error>>;

    /// Frees the surface. Nothing is drawn after this.
    fn release(&mut self);
}
