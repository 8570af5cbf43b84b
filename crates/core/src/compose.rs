//! Slide composer: turns one slide-content record into placed shapes.
//!
//! Placement order is fixed: title bar, text block, chart image, table.
//! Content that would overflow its box is tolerated; only positions are
//! clamped, never sizes.

use crate::chart_backend::ChartBackend;
use crate::document::{Document, Paragraph, SlideId, TextBlock};
use crate::error::Error;
use crate::geometry::{self, clamp_to_canvas, default_chart_box, Rect};
use crate::table::build_table;
use crate::theme::Theme;
use crate::types::SlideContent;

/// Vertical offset of the title bar from the slide top.
const TITLE_TOP: f64 = 0.3;
/// Share of the content band reserved for the text block.
const TEXT_BAND_SHARE: f64 = 0.6;
/// Fixed text block height in inches.
const TEXT_BLOCK_HEIGHT: f64 = 3.0;

/// Builds individual slides into a [`Document`].
pub struct SlideComposer<'a, D: Document, C: ChartBackend> {
    doc: &'a mut D,
    charts: &'a C,
    theme: &'a Theme,
}

impl<'a, D: Document, C: ChartBackend> SlideComposer<'a, D, C> {
    pub fn new(doc: &'a mut D, charts: &'a C, theme: &'a Theme) -> Self {
        Self { doc, charts, theme }
    }

    /// Compose one content slide. `index` is the 0-based position in the
    /// input list, used for placeholder titles.
    pub fn add_content_slide(&mut self, index: usize, content: &SlideContent) {
        let slide = self.doc.add_slide();

        let title = if content.title.trim().is_empty() {
            log::warn!("slide {} has no title, using placeholder", index + 1);
            format!("Slide {}", index + 1)
        } else {
            content.title.clone()
        };
        self.place_title(slide, &title);

        let headline = content.headline.as_deref().filter(|s| !s.trim().is_empty());
        let body = content.content.as_deref().filter(|s| !s.trim().is_empty());

        if headline.is_some() || body.is_some() {
            self.place_text_block(slide, headline, body);
        } else if content.chart_data.is_none() && content.table_data.is_none() {
            // Nothing at all was supplied; tolerated with placeholder text.
            self.place_text_block(slide, None, Some("Slide content will appear here"));
        }

        if let Some(spec) = content.chart() {
            let (chart_w, chart_h) = default_chart_box();
            let rect = clamp_to_canvas(Rect::new(
                geometry::SLIDE_WIDTH - chart_w - geometry::SLIDE_MARGIN,
                geometry::CONTENT_TOP,
                chart_w,
                chart_h,
            ));
            match self.charts.render(&spec) {
                Ok(Some(png)) => self.doc.add_picture(slide, rect, png),
                Ok(None) => log::debug!("slide {}: empty chart series, omitted", index + 1),
                Err(Error::MalformedChart(reason)) => {
                    log::warn!("slide {}: chart omitted: {}", index + 1, reason);
                }
                Err(e) => {
                    // Backend failure: substitute a textual placeholder.
                    log::warn!("slide {}: chart render failed: {}", index + 1, e);
                    let placeholder = format!(
                        "[Chart: {} - Data visualization available]",
                        spec.kind.name()
                    );
                    self.doc.add_text_box(
                        slide,
                        rect,
                        TextBlock::new(vec![Paragraph::new(
                            placeholder,
                            self.theme.body_size,
                            self.theme.text_color,
                        )]),
                    );
                }
            }
        }

        if let Some(table_spec) = &content.table_data {
            match build_table(table_spec, self.theme) {
                Ok((rect, grid)) => self.doc.add_table(slide, rect, grid),
                Err(e) => log::warn!("slide {}: table omitted: {}", index + 1, e),
            }
        }
    }

    /// Allocate a blank slide carrying only a styled title bar.
    ///
    /// Used for the fixed structural slides (summary) that place their own
    /// body content.
    pub(crate) fn add_titled_slide(&mut self, title: &str) -> SlideId {
        let slide = self.doc.add_slide();
        self.place_title(slide, title);
        slide
    }

    /// Place the full-width title bar with theme title styling.
    pub(crate) fn place_title(&mut self, slide: SlideId, title: &str) {
        let rect = Rect::new(0.0, TITLE_TOP, geometry::SLIDE_WIDTH, geometry::TITLE_HEIGHT);
        let mut para = Paragraph::new(title, self.theme.title_size, self.theme.title_color).bold();
        if !self.theme.title_align_left {
            para = para.centered();
        }
        self.doc.add_text_box(
            slide,
            rect,
            TextBlock::new(vec![para]).outlined(self.theme.title_bar_color),
        );
    }

    fn place_text_block(&mut self, slide: SlideId, headline: Option<&str>, body: Option<&str>) {
        let rect = clamp_to_canvas(Rect::new(
            geometry::SLIDE_MARGIN,
            geometry::CONTENT_TOP,
            geometry::CONTENT_MAX_WIDTH * TEXT_BAND_SHARE,
            TEXT_BLOCK_HEIGHT,
        ));

        let mut paragraphs = Vec::new();
        if let Some(headline) = headline {
            paragraphs.push(
                Paragraph::new(headline, self.theme.headline_size, self.theme.text_color).bold(),
            );
        }
        if let Some(body) = body {
            paragraphs.push(Paragraph::new(body, self.theme.body_size, self.theme.text_color));
        }
        self.doc.add_text_box(slide, rect, TextBlock::new(paragraphs));
    }
}
