//! PPTX (OOXML) writer backend.
//!
//! Implements `deck_core`'s [`deck_core::Document`] trait by building a
//! minimal valid PresentationML package: fixed master/layout/theme parts,
//! one XML part per slide, and embedded PNG media, zipped into a `.pptx`
//! byte buffer.

pub mod parts;
pub mod writer;

pub use writer::PptxDocument;
