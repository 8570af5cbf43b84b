//! Error types for presentation assembly.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while assembling a presentation.
///
/// Only `EmptyInput` and `DocumentWrite` abort a build. The remaining
/// variants are recovered at the slide-composer boundary and degrade a
/// single slide's visual richness instead of failing the batch.
#[derive(Error, Debug)]
pub enum Error {
    /// No slide content was supplied; nothing to build.
    #[error("No slide content supplied")]
    EmptyInput,

    /// Chart labels/values were missing or length-mismatched.
    #[error("Malformed chart spec: {0}")]
    MalformedChart(String),

    /// Table headers or rows were missing.
    #[error("Malformed table spec: {0}")]
    MalformedTable(String),

    /// The plotting backend failed while producing a chart image.
    #[error("Chart render backend error: {0}")]
    RenderBackend(String),

    /// The document object could not be serialized to an output buffer.
    #[error("Failed to write document: {0}")]
    DocumentWrite(String),
}
