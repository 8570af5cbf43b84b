//! Slide geometry: the fixed 16:9 canvas and boundary clamping.
//!
//! All positions and sizes are in inches against a 16x9 slide with a
//! 0.5 inch margin reserved on every side.

/// Slide width in inches.
pub const SLIDE_WIDTH: f64 = 16.0;
/// Slide height in inches.
pub const SLIDE_HEIGHT: f64 = 9.0;
/// Outer margin reserved on all sides.
pub const SLIDE_MARGIN: f64 = 0.5;
/// Height of the title bar at the top of each content slide.
pub const TITLE_HEIGHT: f64 = 0.8;
/// Top of the content band, below the title bar.
pub const CONTENT_TOP: f64 = 1.2;
/// Usable content width between the margins.
pub const CONTENT_MAX_WIDTH: f64 = SLIDE_WIDTH - 2.0 * SLIDE_MARGIN;
/// Usable content height between the content top and the bottom margin.
pub const CONTENT_MAX_HEIGHT: f64 = SLIDE_HEIGHT - CONTENT_TOP - SLIDE_MARGIN;

/// An axis-aligned rectangle in slide coordinates (inches).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// Reposition `rect` so it stays within the printable slide area.
///
/// Width and height are preserved; only the position moves. A rectangle
/// larger than the printable area is pinned to the margin and may visually
/// overflow, which is tolerated.
pub fn clamp_to_canvas(rect: Rect) -> Rect {
    let max_left = SLIDE_WIDTH - SLIDE_MARGIN - rect.width;
    let max_top = SLIDE_HEIGHT - SLIDE_MARGIN - rect.height;

    // min before max so oversized content pins to the margin.
    Rect {
        left: rect.left.min(max_left).max(SLIDE_MARGIN),
        top: rect.top.min(max_top).max(SLIDE_MARGIN),
        width: rect.width,
        height: rect.height,
    }
}

/// Fixed chart image box size in inches.
///
/// Isolated so layout policy can change without touching callers.
pub fn default_chart_box() -> (f64, f64) {
    (4.0, 3.0)
}
