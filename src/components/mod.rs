mod sketch_canvas;
pub use sketch_canvas::*;

mod prediction_panel;
pub use prediction_panel::*;

mod sketch_board;
pub use sketch_board::*;
