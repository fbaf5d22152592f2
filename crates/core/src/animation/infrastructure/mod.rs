pub mod headless_window;
pub mod manual_scheduler;
