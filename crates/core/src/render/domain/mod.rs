pub mod frame_writer;
pub mod persistent_item;
