mod stroke;
pub use stroke::*;

pub mod raster;
pub use raster::Raster;

mod sketch;
pub use sketch::*;
