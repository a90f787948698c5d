//! Unified error type for deckmint.
//!
//! Each pipeline stage has its own error enum; this module folds them into a
//! single type so callers can use `?` across stages.
use thiserror::Error;

/// Main error type for deckmint operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Presentation package could not be written or read
    #[error("Presentation error: {0}")]
    Presentation(#[from] crate::ooxml::error::OoxmlError),

    /// Icon rendering or encoding failed
    #[error("Icon error: {0}")]
    Icon(#[from] crate::icons::IconError),

    /// SVG download or rasterization failed
    #[error("Raster error: {0}")]
    Raster(#[from] crate::raster::RasterError),
}

/// Result type for deckmint operations.
pub type Result<T> = std::result::Result<T, Error>;
