//! Seam between the layout engine and the raster plotting backend.

use crate::error::Result;
use crate::types::ChartSpec;

/// A plotting backend that turns a chart spec into a PNG buffer.
///
/// `Ok(None)` means there is nothing to draw (empty series); a
/// `MalformedChart` error means the chart data failed validation and the
/// chart is omitted; a `RenderBackend` error means the backend itself
/// failed and the composer substitutes a textual placeholder.
pub trait ChartBackend {
    fn render(&self, spec: &ChartSpec) -> Result<Option<Vec<u8>>>;
}

/// Backend that never draws anything; charts are always omitted.
///
/// Useful for text-only generation and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoChartBackend;

impl ChartBackend for NoChartBackend {
    fn render(&self, _spec: &ChartSpec) -> Result<Option<Vec<u8>>> {
        Ok(None)
    }
}
