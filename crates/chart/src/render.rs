//! Raster chart rendering: bar, pie, and line charts as transparent PNGs.
//!
//! Output is sized for embedding in a 4x3 inch slide box. Axis lines and
//! labels are white for dark-theme slides; series colors come from the
//! brand palette, cycling when a series has more than six entries.

use std::io::Cursor;

use deck_core::chart_backend::ChartBackend;
use deck_core::error::{Error, Result};
use deck_core::theme::{palette_color, Rgb};
use deck_core::types::{ChartKind, ChartSpec};
use image::{Rgba, RgbaImage};

const WHITE: Rgba<u8> = Rgba([0xFF, 0xFF, 0xFF, 0xFF]);
/// Faint white used for gridlines.
const GRID: Rgba<u8> = Rgba([0xFF, 0xFF, 0xFF, 0x4D]);

/// Text scale for category/value labels (5x7 glyphs doubled).
const LABEL_SCALE: u32 = 2;

/// Plotting backend drawing into an RGBA buffer and encoding PNG.
#[derive(Debug, Clone, Copy)]
pub struct RasterChartBackend {
    width: u32,
    height: u32,
}

impl Default for RasterChartBackend {
    fn default() -> Self {
        // 4:3, matching the slide chart box aspect.
        Self {
            width: 800,
            height: 600,
        }
    }
}

impl RasterChartBackend {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl ChartBackend for RasterChartBackend {
    fn render(&self, spec: &ChartSpec) -> Result<Option<Vec<u8>>> {
        if spec.is_empty() {
            return Ok(None);
        }
        spec.validate()?;

        // A fresh buffer per call: no drawing context survives between
        // renders, so sequential builds cannot accumulate state.
        let mut img = RgbaImage::new(self.width, self.height);

        let drawn = match spec.kind {
            ChartKind::Bar => draw_bar(&mut img, spec),
            ChartKind::Pie => draw_pie(&mut img, spec),
            ChartKind::Line => draw_line(&mut img, spec),
        };
        if !drawn {
            return Ok(None);
        }

        let mut buf = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .map_err(|e| Error::RenderBackend(e.to_string()))?;
        log::debug!(
            "rendered {} chart with {} points ({} bytes)",
            spec.kind.name(),
            spec.values.len(),
            buf.len()
        );
        Ok(Some(buf))
    }
}

/// The plot area inside the image, leaving room for labels.
struct PlotArea {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
}

impl PlotArea {
    fn of(img: &RgbaImage) -> Self {
        Self {
            left: 60.0,
            top: 40.0,
            right: img.width() as f64 - 30.0,
            bottom: img.height() as f64 - 60.0,
        }
    }

    fn width(&self) -> f64 {
        self.right - self.left
    }

    fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

fn draw_bar(img: &mut RgbaImage, spec: &ChartSpec) -> bool {
    let area = PlotArea::of(img);
    let n = spec.values.len();

    let vmax = spec.values.iter().cloned().fold(0.0_f64, f64::max);
    let vmin = spec.values.iter().cloned().fold(0.0_f64, f64::min);
    let range = if vmax - vmin > 0.0 { vmax - vmin } else { 1.0 };
    let y_of = |v: f64| area.bottom - (v - vmin) / range * area.height();
    let baseline = y_of(0.0);

    let slot = area.width() / n as f64;
    let bar_w = slot * 0.7;

    for (i, &value) in spec.values.iter().enumerate() {
        let x = area.left + i as f64 * slot + (slot - bar_w) / 2.0;
        let y = y_of(value);
        let (top, bottom) = if y < baseline { (y, baseline) } else { (baseline, y) };
        fill_rect(img, x, top, bar_w, bottom - top, rgba(palette_color(i)));

        // Numeric value above the bar.
        let label = format!("{}", value);
        let lw = crate::font::text_width(&label, LABEL_SCALE) as f64;
        draw_text(
            img,
            x + bar_w / 2.0 - lw / 2.0,
            top - 20.0,
            &label,
            LABEL_SCALE,
            WHITE,
        );

        draw_category_label(img, &spec.labels[i], x + bar_w / 2.0, area.bottom + 12.0, slot);
    }

    draw_axes(img, &area);
    true
}

fn draw_line(img: &mut RgbaImage, spec: &ChartSpec) -> bool {
    let area = PlotArea::of(img);
    let n = spec.values.len();

    let vmax = spec.values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let vmin = spec.values.iter().cloned().fold(f64::INFINITY, f64::min);
    let range = if vmax - vmin > 0.0 { vmax - vmin } else { 1.0 };
    // 10% headroom so extremes don't sit on the plot edge.
    let pad = range * 0.1;
    let y_of = |v: f64| area.bottom - (v - (vmin - pad)) / (range + 2.0 * pad) * area.height();

    let slot = area.width() / n as f64;
    let x_of = |i: usize| area.left + (i as f64 + 0.5) * slot;

    // Faint gridlines behind the data.
    for g in 1..5 {
        let y = area.top + area.height() * g as f64 / 5.0;
        draw_segment(img, area.left, y, area.right, y, 1, GRID);
    }
    for i in 0..n {
        draw_segment(img, x_of(i), area.top, x_of(i), area.bottom, 1, GRID);
    }

    let line_color = rgba(palette_color(0));
    let marker_color = rgba(palette_color(1));
    for i in 1..n {
        draw_segment(
            img,
            x_of(i - 1),
            y_of(spec.values[i - 1]),
            x_of(i),
            y_of(spec.values[i]),
            3,
            line_color,
        );
    }
    for (i, &value) in spec.values.iter().enumerate() {
        fill_disc(img, x_of(i), y_of(value), 5.0, marker_color);
        draw_category_label(img, &spec.labels[i], x_of(i), area.bottom + 12.0, slot);
    }

    draw_axes(img, &area);
    true
}

fn draw_pie(img: &mut RgbaImage, spec: &ChartSpec) -> bool {
    let total: f64 = spec.values.iter().map(|v| v.max(0.0)).sum();
    if total <= 0.0 {
        // No positive share to draw; treated like an empty series.
        return false;
    }

    let cx = img.width() as f64 / 2.0;
    let cy = img.height() as f64 / 2.0;
    let radius = (img.width().min(img.height()) as f64) * 0.33;

    // Cumulative wedge boundaries as fractions of the full turn.
    let mut bounds = Vec::with_capacity(spec.values.len() + 1);
    bounds.push(0.0_f64);
    let mut acc = 0.0;
    for v in &spec.values {
        acc += v.max(0.0) / total;
        bounds.push(acc);
    }

    // Wedges start at 12 o'clock and advance counter-clockwise.
    let start = std::f64::consts::FRAC_PI_2;
    let tau = std::f64::consts::TAU;

    let x0 = (cx - radius).floor().max(0.0) as u32;
    let x1 = ((cx + radius).ceil() as u32).min(img.width() - 1);
    let y0 = (cy - radius).floor().max(0.0) as u32;
    let y1 = ((cy + radius).ceil() as u32).min(img.height() - 1);

    for py in y0..=y1 {
        for px in x0..=x1 {
            let dx = px as f64 + 0.5 - cx;
            let dy = py as f64 + 0.5 - cy;
            if dx * dx + dy * dy > radius * radius {
                continue;
            }
            // Screen y grows downward; negate for math angles.
            let angle = (-dy).atan2(dx);
            let frac = ((angle - start).rem_euclid(tau)) / tau;
            let wedge = match bounds.iter().position(|&b| b > frac) {
                Some(idx) => idx - 1,
                None => spec.values.len() - 1,
            };
            img.put_pixel(px, py, rgba(palette_color(wedge)));
        }
    }

    // Percentage inside each wedge, category label outside it.
    for (i, v) in spec.values.iter().enumerate() {
        let share = v.max(0.0) / total;
        if share <= 0.0 {
            continue;
        }
        let mid = start + (bounds[i] + share / 2.0) * tau;
        let (sin, cos) = mid.sin_cos();

        let pct = format!("{:.1}%", share * 100.0);
        let pw = crate::font::text_width(&pct, LABEL_SCALE) as f64;
        draw_text(
            img,
            cx + cos * radius * 0.55 - pw / 2.0,
            cy - sin * radius * 0.55 - 7.0,
            &pct,
            LABEL_SCALE,
            WHITE,
        );

        let lw = crate::font::text_width(&spec.labels[i], LABEL_SCALE) as f64;
        draw_text(
            img,
            cx + cos * radius * 1.18 - lw / 2.0,
            cy - sin * radius * 1.18 - 7.0,
            &spec.labels[i],
            LABEL_SCALE,
            WHITE,
        );
    }
    true
}

fn draw_axes(img: &mut RgbaImage, area: &PlotArea) {
    draw_segment(img, area.left, area.top, area.left, area.bottom, 2, WHITE);
    draw_segment(img, area.left, area.bottom, area.right, area.bottom, 2, WHITE);
}

/// Category label centered under a tick, truncated to its slot width.
fn draw_category_label(img: &mut RgbaImage, label: &str, center_x: f64, top: f64, slot: f64) {
    let advance = (crate::font::GLYPH_ADVANCE * LABEL_SCALE) as f64;
    let max_chars = ((slot - 4.0) / advance).max(1.0) as usize;
    let text: String = label.chars().take(max_chars).collect();
    let w = crate::font::text_width(&text, LABEL_SCALE) as f64;
    draw_text(img, center_x - w / 2.0, top, &text, LABEL_SCALE, WHITE);
}

fn rgba(color: Rgb) -> Rgba<u8> {
    Rgba([color.0, color.1, color.2, 0xFF])
}

/// Source-over blend of `color` onto the pixel at (x, y).
fn blend_pixel(img: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>) {
    if x < 0 || y < 0 || x >= img.width() as i64 || y >= img.height() as i64 {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    let src_a = color.0[3] as u32;
    if src_a == 0 {
        return;
    }
    if src_a == 255 {
        img.put_pixel(x, y, color);
        return;
    }
    let dst = *img.get_pixel(x, y);
    let dst_a = dst.0[3] as u32;
    let out_a = src_a + dst_a * (255 - src_a) / 255;
    let mut out = [0u8; 4];
    for c in 0..3 {
        let s = color.0[c] as u32;
        let d = dst.0[c] as u32;
        let num = s * src_a + d * dst_a * (255 - src_a) / 255;
        // Floor loss in the alpha terms can push the quotient past 255.
        out[c] = if out_a == 0 { 0 } else { (num / out_a).min(255) as u8 };
    }
    out[3] = out_a as u8;
    img.put_pixel(x, y, Rgba(out));
}

fn fill_rect(img: &mut RgbaImage, left: f64, top: f64, width: f64, height: f64, color: Rgba<u8>) {
    let x0 = left.round() as i64;
    let y0 = top.round() as i64;
    let x1 = (left + width).round() as i64;
    let y1 = (top + height).round() as i64;
    for y in y0..y1 {
        for x in x0..x1 {
            blend_pixel(img, x, y, color);
        }
    }
}

/// Line segment of the given pixel thickness.
fn draw_segment(
    img: &mut RgbaImage,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    thickness: u32,
    color: Rgba<u8>,
) {
    let steps = ((x1 - x0).abs().max((y1 - y0).abs()).ceil() as usize).max(1);
    let half = thickness as i64 / 2;
    let steep = (y1 - y0).abs() > (x1 - x0).abs();
    for s in 0..=steps {
        let t = s as f64 / steps as f64;
        let x = (x0 + (x1 - x0) * t).round() as i64;
        let y = (y0 + (y1 - y0) * t).round() as i64;
        for o in -half..=(thickness as i64 - 1 - half) {
            if steep {
                blend_pixel(img, x + o, y, color);
            } else {
                blend_pixel(img, x, y + o, color);
            }
        }
    }
}

fn fill_disc(img: &mut RgbaImage, cx: f64, cy: f64, radius: f64, color: Rgba<u8>) {
    let r = radius.ceil() as i64;
    let (icx, icy) = (cx.round() as i64, cy.round() as i64);
    for dy in -r..=r {
        for dx in -r..=r {
            if (dx * dx + dy * dy) as f64 <= radius * radius {
                blend_pixel(img, icx + dx, icy + dy, color);
            }
        }
    }
}

/// Blit `text` with the built-in 5x7 font; unsupported chars advance blank.
fn draw_text(img: &mut RgbaImage, left: f64, top: f64, text: &str, scale: u32, color: Rgba<u8>) {
    let mut pen_x = left.round() as i64;
    let pen_y = top.round() as i64;
    let advance = (crate::font::GLYPH_ADVANCE * scale) as i64;
    for c in text.chars() {
        if let Some(rows) = crate::font::glyph(c) {
            for (gy, row) in rows.iter().enumerate() {
                for gx in 0..crate::font::GLYPH_WIDTH {
                    if row & (0x10 >> gx) == 0 {
                        continue;
                    }
                    for sy in 0..scale {
                        for sx in 0..scale {
                            blend_pixel(
                                img,
                                pen_x + (gx * scale + sx) as i64,
                                pen_y + (gy as u32 * scale + sy) as i64,
                                color,
                            );
                        }
                    }
                }
            }
        }
        pen_x += advance;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(kind: ChartKind, labels: &[&str], values: &[f64]) -> ChartSpec {
        ChartSpec {
            kind,
            labels: labels.iter().map(|s| s.to_string()).collect(),
            values: values.to_vec(),
            title: None,
        }
    }

    #[test]
    fn empty_series_renders_nothing() {
        let backend = RasterChartBackend::default();
        let out = backend.render(&spec(ChartKind::Bar, &[], &[])).unwrap();
        assert!(out.is_none());
    }

    #[test]
    fn mismatched_series_is_a_malformed_chart() {
        let backend = RasterChartBackend::default();
        let err = backend
            .render(&spec(ChartKind::Bar, &["a", "b"], &[1.0]))
            .unwrap_err();
        assert!(matches!(err, Error::MalformedChart(_)));
    }

    #[test]
    fn bar_chart_is_a_png_with_transparent_corners() {
        let backend = RasterChartBackend::default();
        let png = backend
            .render(&spec(ChartKind::Bar, &["Q1", "Q2", "Q3"], &[10.0, 25.0, 15.0]))
            .unwrap()
            .unwrap();
        assert_eq!(&png[..4], &[0x89, b'P', b'N', b'G']);

        let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (800, 600));
        // Corners stay transparent for dark-slide embedding.
        assert_eq!(decoded.get_pixel(0, 0).0[3], 0);
        assert_eq!(decoded.get_pixel(799, 0).0[3], 0);
    }

    #[test]
    fn pie_fills_wedges_and_cycles_palette() {
        let backend = RasterChartBackend::default();
        let labels: Vec<String> = (0..8).map(|i| format!("C{}", i)).collect();
        let label_refs: Vec<&str> = labels.iter().map(|s| s.as_str()).collect();
        let png = backend
            .render(&spec(ChartKind::Pie, &label_refs, &[1.0; 8]))
            .unwrap()
            .unwrap();

        let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
        // Center of the pie is opaque.
        assert_eq!(decoded.get_pixel(400, 300).0[3], 0xFF);
        // The seventh series reuses the first palette entry.
        assert_eq!(palette_color(6), palette_color(0));
    }

    #[test]
    fn zero_sum_pie_renders_nothing() {
        let backend = RasterChartBackend::default();
        let out = backend
            .render(&spec(ChartKind::Pie, &["a", "b"], &[0.0, 0.0]))
            .unwrap();
        assert!(out.is_none());
    }

    #[test]
    fn overlapping_gridlines_do_not_darken() {
        // Two translucent white gridlines crossing must stay white and
        // gain opacity, never collapse to black.
        let mut img = RgbaImage::new(1, 1);
        blend_pixel(&mut img, 0, 0, GRID);
        let lone = *img.get_pixel(0, 0);
        blend_pixel(&mut img, 0, 0, GRID);
        let crossing = *img.get_pixel(0, 0);

        for c in 0..3 {
            assert!(
                crossing.0[c] >= lone.0[c],
                "channel {} darkened: {} < {}",
                c,
                crossing.0[c],
                lone.0[c]
            );
        }
        assert!(crossing.0[3] > lone.0[3]);
    }

    #[test]
    fn line_chart_renders_single_point_without_panicking() {
        let backend = RasterChartBackend::default();
        let png = backend
            .render(&spec(ChartKind::Line, &["only"], &[5.0]))
            .unwrap()
            .unwrap();
        assert_eq!(&png[..4], &[0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn negative_bars_extend_below_baseline() {
        let backend = RasterChartBackend::default();
        let png = backend
            .render(&spec(ChartKind::Bar, &["up", "down"], &[5.0, -3.0]))
            .unwrap()
            .unwrap();
        assert_eq!(&png[..4], &[0x89, b'P', b'N', b'G']);
    }
}
