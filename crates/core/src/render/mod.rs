pub mod domain;
pub mod infrastructure;
pub mod render_frames_use_case;
