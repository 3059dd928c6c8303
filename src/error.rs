//! Error type shared by the encoding and rendering pipeline.

use thiserror::Error;

/// Failures surfaced by the pipeline. Every variant is fatal; invalid size
/// or border values are normalized to defaults instead of reported here.
#[derive(Debug, Error)]
pub enum Error {
    /// No text remained after flag parsing and stdin resolution.
    #[error("text to encode is required")]
    MissingInput,

    /// The encoder could not construct a symbol for the given text.
    #[error("failed to generate QR code: {0}")]
    Encoding(#[from] qrcode::types::QrError),

    /// Writing the raster image failed.
    #[error("failed to write image: {0}")]
    FileWrite(#[from] image::ImageError),
}
