pub mod bitmap;
pub mod loader;
pub(crate) mod svg_raster;
