//! Deterministic fallback content when no provider output is available.
//!
//! The remote content provider either returns well-formed slide JSON or
//! nothing; this module covers the "nothing" case with a fixed,
//! topic-parameterized deck so generation always has input.

use crate::types::SlideContent;

/// (title, headline, content) templates, in deck order. `{}` is the topic.
const SLIDE_TEMPLATES: [(&str, &str, &str); 6] = [
    (
        "Introduction to {}",
        "Understanding the fundamentals of {}",
        "\u{2022} Overview of {} landscape\n\u{2022} Key market players and stakeholders\n\u{2022} Current industry trends\n\u{2022} Strategic importance",
    ),
    (
        "{} Market Analysis",
        "Current state and trends in {}",
        "\u{2022} Market size and growth projections\n\u{2022} Competitive landscape analysis\n\u{2022} Emerging opportunities\n\u{2022} Key challenges and barriers",
    ),
    (
        "Technology & Innovation in {}",
        "Technological advances shaping {}",
        "\u{2022} Latest technological developments\n\u{2022} Innovation drivers and catalysts\n\u{2022} Disruptive technologies on horizon\n\u{2022} Impact on business models",
    ),
    (
        "Strategic Implications of {}",
        "How {} affects business strategy",
        "\u{2022} Strategic opportunities for growth\n\u{2022} Risk mitigation strategies\n\u{2022} Investment considerations\n\u{2022} Competitive advantages",
    ),
    (
        "Implementation Roadmap for {}",
        "Practical steps for {} adoption",
        "\u{2022} Short-term implementation priorities\n\u{2022} Medium-term strategic initiatives\n\u{2022} Long-term vision and goals\n\u{2022} Success metrics and KPIs",
    ),
    (
        "Future Outlook for {}",
        "Predictions and trends for {}",
        "\u{2022} Future market projections\n\u{2022} Emerging trends to watch\n\u{2022} Potential disruptors\n\u{2022} Strategic recommendations",
    ),
];

fn fill(template: &str, topic: &str) -> String {
    template.replace("{}", topic)
}

/// Build `count` fallback slides for `topic`.
///
/// The first six slides come from fixed templates; requests beyond that
/// get numbered filler slides so any count is honored.
pub fn fallback_slides(topic: &str, count: usize) -> Vec<SlideContent> {
    let mut slides: Vec<SlideContent> = SLIDE_TEMPLATES
        .iter()
        .take(count)
        .map(|(title, headline, content)| SlideContent {
            title: fill(title, topic),
            headline: Some(fill(headline, topic)),
            content: Some(fill(content, topic)),
            ..SlideContent::default()
        })
        .collect();

    while slides.len() < count {
        let n = slides.len() + 1;
        slides.push(SlideContent {
            title: format!("{} - Additional Insights {}", topic, n),
            headline: Some(format!("Further analysis of {}", topic)),
            content: Some(
                "\u{2022} Additional research findings\n\u{2022} Supplementary market data\n\u{2022} Extended strategic analysis\n\u{2022} Continued recommendations"
                    .to_string(),
            ),
            ..SlideContent::default()
        });
    }

    slides
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requested_count_is_honored() {
        assert_eq!(fallback_slides("AI", 3).len(), 3);
        assert_eq!(fallback_slides("AI", 6).len(), 6);
        assert_eq!(fallback_slides("AI", 9).len(), 9);
        assert!(fallback_slides("AI", 0).is_empty());
    }

    #[test]
    fn topic_is_substituted() {
        let slides = fallback_slides("Quantum Computing", 2);
        assert_eq!(slides[0].title, "Introduction to Quantum Computing");
        assert!(slides[1]
            .headline
            .as_deref()
            .unwrap()
            .contains("Quantum Computing"));
    }

    #[test]
    fn overflow_slides_are_numbered() {
        let slides = fallback_slides("X", 8);
        assert_eq!(slides[6].title, "X - Additional Insights 7");
        assert_eq!(slides[7].title, "X - Additional Insights 8");
    }

    #[test]
    fn output_is_deterministic() {
        let a = fallback_slides("Topic", 5);
        let b = fallback_slides("Topic", 5);
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.title, y.title);
            assert_eq!(x.content, y.content);
        }
    }
}
