pub mod border_canvas;
