//! Raster chart rendering backend for slide embedding.
//!
//! Draws bar, pie, and line charts into a transparent RGBA buffer and
//! encodes them as PNG, implementing `deck_core`'s `ChartBackend` seam.

pub mod font;
pub mod render;

pub use render::RasterChartBackend;
