//! Raster icon adapters.

mod raster;

pub use raster::RasterResizer;
