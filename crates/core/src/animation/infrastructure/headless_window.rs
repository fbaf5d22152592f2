use crate::animation::domain::host_window::HostWindow;
use crate::shared::size::Size;

/// Off-screen window whose size and lifetime are driven by the caller.
#[derive(Clone, Debug)]
pub struct HeadlessWindow {
    size: Size,
    restore_size: Size,
    open: bool,
}

impl HeadlessWindow {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            restore_size: size,
            open: true,
        }
    }

    pub fn resize(&mut self, size: Size) {
        self.size = size;
        self.restore_size = size;
    }

    /// Reports a zero size until `restore` is called.
    pub fn minimize(&mut self) {
        self.size = Size::ZERO;
    }

    pub fn restore(&mut self) {
        self.size = self.restore_size;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

impl HostWindow for HeadlessWindow {
    fn size(&self) -> Size {
        self.size
    }

    fn is_open(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimize_and_restore() {
        let mut window = HeadlessWindow::new(Size::new(400, 300));
        window.minimize();
        assert!(window.size().is_empty());
        window.restore();
        assert_eq!(window.size(), Size::new(400, 300));
    }

    #[test]
    fn test_resize_updates_restore_size() {
        let mut window = HeadlessWindow::new(Size::new(400, 300));
        window.resize(Size::new(640, 480));
        window.minimize();
        window.restore();
        assert_eq!(window.size(), Size::new(640, 480));
    }

    #[test]
    fn test_close() {
        let mut window = HeadlessWindow::new(Size::new(10, 10));
        assert!(window.is_open());
        window.close();
        assert!(!window.is_open());
    }
}
