pub mod animation;
pub mod border;
pub mod render;
pub mod shared;
