pub mod host_window;
pub mod overlay_surface;
pub mod tick_scheduler;
