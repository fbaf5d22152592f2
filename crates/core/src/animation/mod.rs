pub mod border_animator;
pub mod domain;
pub mod infrastructure;
