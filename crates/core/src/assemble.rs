//! Presentation assembler: document lifecycle and the fixed slide bracket.
//!
//! A deck is always: title slide, one slide per content record, and a
//! summary slide appended only when more than one content slide exists.

use crate::chart_backend::ChartBackend;
use crate::compose::SlideComposer;
use crate::document::{Document, Paragraph, TextBlock};
use crate::error::{Error, Result};
use crate::geometry::{self, Rect};
use crate::theme::Theme;
use crate::types::DeckRequest;

/// Fixed subtitle under the deck title.
const SUBTITLE: &str = "Comprehensive Analysis & Strategic Insights";

/// Title of the closing summary slide.
const SUMMARY_TITLE: &str = "Key Takeaways & Next Steps";

/// At most this many content titles are echoed as summary talking points.
pub const SUMMARY_MAX_POINTS: usize = 4;

/// Fixed closing bullets on the summary slide.
const NEXT_STEPS: [&str; 4] = [
    "Develop detailed implementation roadmap",
    "Allocate necessary resources and budget",
    "Establish key performance indicators",
    "Begin pilot program execution",
];

/// Assembles a whole presentation into a [`Document`].
pub struct PresentationAssembler<'a, C: ChartBackend> {
    charts: &'a C,
}

impl<'a, C: ChartBackend> PresentationAssembler<'a, C> {
    pub fn new(charts: &'a C) -> Self {
        Self { charts }
    }

    /// Build the full deck into `doc`.
    ///
    /// Fails with [`Error::EmptyInput`] when no slide content was supplied;
    /// per-slide data defects never abort the build.
    pub fn assemble<D: Document>(&self, doc: &mut D, request: &DeckRequest) -> Result<()> {
        if request.slides.is_empty() {
            return Err(Error::EmptyInput);
        }

        let theme = Theme::customized(request.customization.as_ref());

        // Background first, so every slide added below inherits it.
        doc.set_background(theme.background);

        self.add_title_slide(doc, &theme, request.topic());

        let mut composer = SlideComposer::new(doc, self.charts, &theme);
        for (index, content) in request.slides.iter().enumerate() {
            composer.add_content_slide(index, content);
        }

        if request.slides.len() > 1 {
            self.add_summary_slide(doc, &theme, request);
        }

        log::info!(
            "assembled deck for '{}' with {} content slides",
            request.topic(),
            request.slides.len()
        );
        Ok(())
    }

    fn add_title_slide<D: Document>(&self, doc: &mut D, theme: &Theme, topic: &str) {
        let slide = doc.add_slide();

        let title_rect = Rect::new(
            geometry::SLIDE_MARGIN,
            3.2,
            geometry::CONTENT_MAX_WIDTH,
            1.2,
        );
        doc.add_text_box(
            slide,
            title_rect,
            TextBlock::new(vec![Paragraph::new(
                format!("Business Analysis: {}", topic),
                theme.deck_title_size,
                theme.title_color,
            )
            .bold()
            .centered()]),
        );

        let subtitle_rect = Rect::new(
            geometry::SLIDE_MARGIN,
            4.6,
            geometry::CONTENT_MAX_WIDTH,
            0.8,
        );
        doc.add_text_box(
            slide,
            subtitle_rect,
            TextBlock::new(vec![
                Paragraph::new(SUBTITLE, theme.subtitle_size, theme.text_color).centered(),
            ]),
        );
    }

    fn add_summary_slide<D: Document>(&self, doc: &mut D, theme: &Theme, request: &DeckRequest) {
        let mut composer = SlideComposer::new(doc, self.charts, theme);
        let slide = composer.add_titled_slide(SUMMARY_TITLE);

        let mut paragraphs = vec![
            Paragraph::new("Summary of Key Findings:", theme.headline_size, theme.text_color)
                .bold(),
        ];

        for (index, content) in request.slides.iter().take(SUMMARY_MAX_POINTS).enumerate() {
            let title = if content.title.trim().is_empty() {
                format!("Point {}", index + 1)
            } else {
                content.title.clone()
            };
            paragraphs.push(Paragraph::new(
                format!("\u{2022} {}: Strategic importance for business growth", title),
                theme.body_size,
                theme.text_color,
            ));
        }

        paragraphs.push(
            Paragraph::new("Recommended Next Steps:", theme.headline_size, theme.text_color)
                .bold(),
        );
        for step in NEXT_STEPS {
            paragraphs.push(Paragraph::new(
                format!("\u{2022} {}", step),
                theme.body_size,
                theme.text_color,
            ));
        }

        let body_rect = Rect::new(
            geometry::SLIDE_MARGIN,
            geometry::CONTENT_TOP,
            geometry::CONTENT_MAX_WIDTH,
            geometry::CONTENT_MAX_HEIGHT,
        );
        doc.add_text_box(slide, body_rect, TextBlock::new(paragraphs));
    }
}

/// Assemble and serialize a deck in one call.
///
/// This is the whole core pipeline: content records in, presentation byte
/// buffer out. No output buffer is produced on a fatal error.
pub fn build_deck<D: Document, C: ChartBackend>(
    doc: &mut D,
    charts: &C,
    request: &DeckRequest,
) -> Result<Vec<u8>> {
    PresentationAssembler::new(charts).assemble(doc, request)?;
    doc.serialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart_backend::NoChartBackend;
    use crate::document::mock::MockDocument;
    use crate::theme::Rgb;
    use crate::types::SlideContent;

    fn request_of(n: usize) -> DeckRequest {
        DeckRequest::from_slides(
            (0..n)
                .map(|i| SlideContent::text(format!("Topic {}", i + 1), "body"))
                .collect(),
        )
    }

    #[test]
    fn empty_input_fails_with_no_output() {
        let mut doc = MockDocument::new();
        let result = build_deck(&mut doc, &NoChartBackend, &DeckRequest::default());
        assert!(matches!(result, Err(Error::EmptyInput)));
        assert!(doc.slides.is_empty());
    }

    #[test]
    fn single_content_slide_yields_two_slides() {
        let mut doc = MockDocument::new();
        build_deck(&mut doc, &NoChartBackend, &request_of(1)).unwrap();
        assert_eq!(doc.slides.len(), 2);
    }

    #[test]
    fn multiple_content_slides_gain_a_summary() {
        for n in 2..=5 {
            let mut doc = MockDocument::new();
            build_deck(&mut doc, &NoChartBackend, &request_of(n)).unwrap();
            assert_eq!(doc.slides.len(), n + 2, "n={}", n);
        }
    }

    #[test]
    fn background_is_applied() {
        let mut doc = MockDocument::new();
        build_deck(&mut doc, &NoChartBackend, &request_of(1)).unwrap();
        assert_eq!(doc.background, Some(Rgb(0x0F, 0x16, 0x32)));
    }

    #[test]
    fn title_slide_carries_topic_and_content_follows_in_order() {
        let mut request = DeckRequest::from_slides(vec![SlideContent::text(
            "Q1 Results",
            "Revenue up",
        )]);
        request.search_phrase = Some("Acme".into());

        let mut doc = MockDocument::new();
        build_deck(&mut doc, &NoChartBackend, &request).unwrap();

        assert_eq!(doc.slides.len(), 2);
        assert!(doc.slide_text(0).contains("Acme"));
        let content_text = doc.slide_text(1);
        assert!(content_text.contains("Q1 Results"));
        assert!(content_text.contains("Revenue up"));
    }

    #[test]
    fn summary_lists_at_most_four_titles_plus_next_steps() {
        let mut doc = MockDocument::new();
        build_deck(&mut doc, &NoChartBackend, &request_of(6)).unwrap();

        let summary = doc.slide_text(doc.slides.len() - 1);
        for i in 1..=4 {
            assert!(summary.contains(&format!("Topic {}", i)));
        }
        assert!(!summary.contains("Topic 5"));
        assert!(summary.contains("Key Takeaways & Next Steps"));
        for step in NEXT_STEPS {
            assert!(summary.contains(step));
        }
    }
}
