use crate::shared::size::Size;

/// The window a border is attached to. Owned by the host toolkit.
pub trait HostWindow {
    /// Current drawable size. Zero in either axis while minimized.
    fn size(&self) -> Size;

    /// False once the window has been closed or destroyed.
    fn is_open(&self) -> bool;
}
