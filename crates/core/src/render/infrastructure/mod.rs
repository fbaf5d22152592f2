pub mod item_painter;
pub mod png_frame_writer;
pub mod raster_overlay;
