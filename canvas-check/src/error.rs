//! Error types for canvas-check.

use crate::surface::Rgba;
use canvas_check_canvas2d::Canvas2dError;
use thiserror::Error;

/// Result type alias using CheckError.
pub type CheckResult<T> = Result<T, CheckError>;

/// A failed pixel assertion.
///
/// Both variants are fatal to the conformance case that raised them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssertionError {
    /// The sample coordinate lies outside the surface.
    #[error("Pixel ({x}, {y}) is outside the {width}x{height} surface")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },

    /// The sampled pixel differs from the expected color.
    #[error("Got pixel {actual} at ({x}, {y}), expected {expected}")]
    PixelMismatch {
        x: u32,
        y: u32,
        expected: Rgba,
        actual: Rgba,
    },
}

/// Anything that can end a conformance case early.
#[derive(Debug, Error)]
pub enum CaseError {
    #[error(transparent)]
    Assertion(#[from] AssertionError),

    #[error("Canvas error: {0}")]
    Canvas(#[from] Canvas2dError),
}

/// Errors from surfaces, configuration, and reporting.
#[derive(Debug, Error)]
pub enum CheckError {
    /// Surface dimensions must be positive.
    #[error("Invalid surface dimensions: width={width}, height={height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Pixel buffer length does not match `width * height * 4`.
    #[error("Pixel buffer has {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("PNG encoding error: {0}")]
    Png(#[from] png::EncodingError),
}
