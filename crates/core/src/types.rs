//! Domain types for the slide-content input schema.
//!
//! These mirror the JSON the content provider emits: a `slides` array of
//! per-slide records, an optional topic string, and an optional
//! customization block. All fields beyond `title` are optional and default
//! at this boundary; nothing deeper in the pipeline inspects raw JSON.

use serde::{Deserialize, Serialize};

/// A full deck-generation request: topic, slide records, customization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckRequest {
    /// Topic the deck was generated for, e.g. a search phrase.
    pub search_phrase: Option<String>,

    /// Slide records in presentation order.
    pub slides: Vec<SlideContent>,

    /// Optional visual overrides; unrecognized keys are ignored.
    pub customization: Option<Customization>,
}

impl DeckRequest {
    /// Create a request from a list of slides with no topic or overrides.
    pub fn from_slides(slides: Vec<SlideContent>) -> Self {
        Self {
            slides,
            ..Self::default()
        }
    }

    /// The topic used for the title slide heading.
    ///
    /// Falls back to the first slide's title, then to a generic default.
    pub fn topic(&self) -> &str {
        if let Some(phrase) = self.search_phrase.as_deref() {
            if !phrase.trim().is_empty() {
                return phrase;
            }
        }
        self.slides
            .first()
            .map(|s| s.title.as_str())
            .filter(|t| !t.trim().is_empty())
            .unwrap_or("Business Analysis")
    }
}

/// One input record describing a single content slide.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SlideContent {
    /// Slide title; blank titles get a positional placeholder at compose time.
    pub title: String,

    /// Bold lead-in text shown as the first body paragraph.
    pub headline: Option<String>,

    /// Body text; bullet characters come embedded from the provider.
    pub content: Option<String>,

    /// Chart kind name ("bar", "pie", "line"); defaults to "bar".
    #[serde(rename = "chartType")]
    pub chart_type: Option<String>,

    /// Labeled numeric series to chart.
    #[serde(rename = "chartData")]
    pub chart_data: Option<ChartData>,

    /// Tabular data to render below the text block.
    #[serde(rename = "tableData")]
    pub table_data: Option<TableSpec>,
}

impl SlideContent {
    /// Create a text-only slide record.
    pub fn text(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: Some(content.into()),
            ..Self::default()
        }
    }

    /// Fold the `chartType`/`chartData` pair into a renderable spec.
    ///
    /// Returns `None` when no chart data was supplied at all.
    pub fn chart(&self) -> Option<ChartSpec> {
        let data = self.chart_data.as_ref()?;
        let kind = ChartKind::from_name(self.chart_type.as_deref().unwrap_or("bar"));
        Some(ChartSpec {
            kind,
            labels: data.labels.clone(),
            values: data.values.clone(),
            title: data.title.clone(),
        })
    }
}

/// The three supported chart kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Pie,
    Line,
}

impl ChartKind {
    /// Parse a chart kind name, defaulting to `Bar` for anything unknown.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "pie" => Self::Pie,
            "line" => Self::Line,
            _ => Self::Bar,
        }
    }

    /// Lowercase display name, as used in placeholder text.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Pie => "pie",
            Self::Line => "line",
        }
    }
}

/// Raw chart series as it appears in the input JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartData {
    /// Category axis / wedge labels.
    pub labels: Vec<String>,

    /// Series values, expected to pair with `labels`.
    pub values: Vec<f64>,

    /// Optional chart title.
    pub title: Option<String>,
}

/// A chart ready to hand to the plotting backend.
#[derive(Debug, Clone)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub title: Option<String>,
}

impl ChartSpec {
    /// True when there is nothing to draw at all.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() || self.values.is_empty()
    }

    /// Validate the label/value pairing invariant.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.labels.len() != self.values.len() {
            return Err(crate::error::Error::MalformedChart(format!(
                "{} labels but {} values",
                self.labels.len(),
                self.values.len()
            )));
        }
        Ok(())
    }
}

/// Tabular data: a header row plus data rows.
///
/// Row lengths may disagree with the header count; the table builder slices
/// surplus cells and blanks missing ones rather than erroring.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSpec {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

/// A single table cell value from JSON: string, number, bool, or null.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Bool(bool),
    Text(String),
    Null,
}

impl CellValue {
    /// Render the cell value as display text.
    pub fn as_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) => format!("{}", n),
            Self::Bool(b) => b.to_string(),
            Self::Null => String::new(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

/// Visual overrides accepted alongside the slide content.
///
/// Color values are `#RRGGBB` strings; anything unparseable falls back to
/// the theme default for that slot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Customization {
    pub slide_bg_color: Option<String>,
    pub title_font_color: Option<String>,
    pub title_bg_color: Option<String>,
    pub body_text_color: Option<String>,
    /// "left" keeps the default left-aligned title; anything else centers it.
    pub title_position: Option<String>,
    /// Body text point size.
    pub font_size: Option<u32>,
}
