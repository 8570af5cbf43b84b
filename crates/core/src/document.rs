//! Capability interface over the output document object model.
//!
//! The layout engine only ever talks to this trait, so the core never
//! depends on a concrete presentation library's object graph. `deck-pptx`
//! provides the OOXML implementation; tests use a recording mock.

use crate::error::Result;
use crate::geometry::Rect;
use crate::theme::Rgb;

/// Handle to a slide inside a [`Document`], in creation order.
pub type SlideId = usize;

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// One styled paragraph of a text box.
#[derive(Debug, Clone)]
pub struct Paragraph {
    pub text: String,
    pub size_pt: u32,
    pub bold: bool,
    pub color: Rgb,
    pub align: Align,
}

impl Paragraph {
    /// Create a regular-weight, left-aligned paragraph.
    pub fn new(text: impl Into<String>, size_pt: u32, color: Rgb) -> Self {
        Self {
            text: text.into(),
            size_pt,
            bold: false,
            color,
            align: Align::Left,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn centered(mut self) -> Self {
        self.align = Align::Center;
        self
    }
}

/// A text box: styled paragraphs plus box-level options.
#[derive(Debug, Clone, Default)]
pub struct TextBlock {
    pub paragraphs: Vec<Paragraph>,
    /// Outline color for the box border (used by the title bar).
    pub outline: Option<Rgb>,
}

impl TextBlock {
    pub fn new(paragraphs: Vec<Paragraph>) -> Self {
        Self {
            paragraphs,
            outline: None,
        }
    }

    pub fn outlined(mut self, color: Rgb) -> Self {
        self.outline = Some(color);
        self
    }
}

/// One styled table cell.
#[derive(Debug, Clone)]
pub struct Cell {
    pub text: String,
    pub size_pt: u32,
    pub bold: bool,
    pub color: Rgb,
    /// Solid fill behind the cell; `None` leaves the slide background.
    pub fill: Option<Rgb>,
}

/// A fully styled table: `columns` wide, header row first.
#[derive(Debug, Clone)]
pub struct TableGrid {
    pub columns: usize,
    pub rows: Vec<Vec<Cell>>,
}

/// The document operations the layout engine needs.
///
/// Mirrors the shape vocabulary of the open-office document model: slides,
/// text frames, tables, pictures, background fill, and one-shot
/// serialization to an output byte buffer.
pub trait Document {
    /// Set the background fill inherited by every slide.
    fn set_background(&mut self, color: Rgb);

    /// Append a blank slide, returning its handle.
    fn add_slide(&mut self) -> SlideId;

    /// Place a text box on a slide.
    fn add_text_box(&mut self, slide: SlideId, rect: Rect, block: TextBlock);

    /// Place a table on a slide.
    fn add_table(&mut self, slide: SlideId, rect: Rect, grid: TableGrid);

    /// Place a PNG image on a slide.
    fn add_picture(&mut self, slide: SlideId, rect: Rect, png: Vec<u8>);

    /// Serialize the finished document to a byte buffer.
    fn serialize(&self) -> Result<Vec<u8>>;
}

#[cfg(test)]
pub(crate) mod mock {
    //! Recording document used by composer and assembler tests.

    use super::*;

    #[derive(Debug)]
    pub enum Placed {
        Text { rect: Rect, block: TextBlock },
        Table { rect: Rect, grid: TableGrid },
        Picture { rect: Rect, png: Vec<u8> },
    }

    #[derive(Debug, Default)]
    pub struct MockDocument {
        pub background: Option<Rgb>,
        pub slides: Vec<Vec<Placed>>,
    }

    impl MockDocument {
        pub fn new() -> Self {
            Self::default()
        }

        /// All text on a slide, joined for containment assertions.
        pub fn slide_text(&self, slide: SlideId) -> String {
            self.slides[slide]
                .iter()
                .filter_map(|p| match p {
                    Placed::Text { block, .. } => Some(
                        block
                            .paragraphs
                            .iter()
                            .map(|p| p.text.as_str())
                            .collect::<Vec<_>>()
                            .join("\n"),
                    ),
                    _ => None,
                })
                .collect::<Vec<_>>()
                .join("\n")
        }

        pub fn tables_on(&self, slide: SlideId) -> Vec<&TableGrid> {
            self.slides[slide]
                .iter()
                .filter_map(|p| match p {
                    Placed::Table { grid, .. } => Some(grid),
                    _ => None,
                })
                .collect()
        }

        pub fn pictures_on(&self, slide: SlideId) -> usize {
            self.slides[slide]
                .iter()
                .filter(|p| matches!(p, Placed::Picture { .. }))
                .count()
        }
    }

    impl Document for MockDocument {
        fn set_background(&mut self, color: Rgb) {
            self.background = Some(color);
        }

        fn add_slide(&mut self) -> SlideId {
            self.slides.push(Vec::new());
            self.slides.len() - 1
        }

        fn add_text_box(&mut self, slide: SlideId, rect: Rect, block: TextBlock) {
            self.slides[slide].push(Placed::Text { rect, block });
        }

        fn add_table(&mut self, slide: SlideId, rect: Rect, grid: TableGrid) {
            self.slides[slide].push(Placed::Table { rect, grid });
        }

        fn add_picture(&mut self, slide: SlideId, rect: Rect, png: Vec<u8>) {
            self.slides[slide].push(Placed::Picture { rect, png });
        }

        fn serialize(&self) -> Result<Vec<u8>> {
            Ok(Vec::new())
        }
    }
}
