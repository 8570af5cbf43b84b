//! Core slide-layout and chart/table-composition engine for generating
//! PowerPoint decks from structured slide content.
//!
//! The engine is synchronous and side-effect-free: it writes shapes into a
//! [`document::Document`] implementation and asks it to serialize once.
//! Chart rasterization sits behind [`chart_backend::ChartBackend`].

pub mod assemble;
pub mod chart_backend;
pub mod compose;
pub mod document;
pub mod error;
pub mod geometry;
pub mod table;
pub mod template;
pub mod theme;
pub mod types;

pub use assemble::{build_deck, PresentationAssembler};
pub use chart_backend::{ChartBackend, NoChartBackend};
pub use compose::SlideComposer;
pub use document::{Align, Cell, Document, Paragraph, SlideId, TableGrid, TextBlock};
pub use error::{Error, Result};
pub use geometry::{clamp_to_canvas, default_chart_box, Rect};
pub use theme::{palette_color, Rgb, Theme};
pub use types::{
    CellValue, ChartData, ChartKind, ChartSpec, Customization, DeckRequest, SlideContent,
    TableSpec,
};
