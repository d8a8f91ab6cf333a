//! Errors

use thiserror::Error;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, DrawError>;

/// Errors reported before any pixel is touched
#[derive(Error, Debug)]
pub enum DrawError {
    /// Geometry that cannot describe a shape
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Point list shorter than the primitive requires
    #[error("points argument must contain {needed} or more points, got {got}")]
    TooFewPoints { needed: usize, got: usize },

    /// Outline width below zero
    #[error("negative width")]
    NegativeWidth,

    /// Outline width larger than the shape radius
    #[error("width {width} greater than radius {radius}")]
    WidthExceedsRadius { width: i64, radius: i64 },

    /// Bytes per pixel outside of 1..=4
    #[error("unsupported surface bit depth ({0}) for drawing")]
    UnsupportedDepth(usize),

    /// Row stride smaller than a row of pixels
    #[error("pitch {pitch} smaller than row size {min}")]
    InvalidPitch { pitch: usize, min: usize },

    /// Pixel storage smaller than pitch * height
    #[error("buffer of {len} bytes too small, need {needed}")]
    BufferTooSmall { len: usize, needed: usize },

    /// Scratch allocation failed
    #[error("cannot allocate memory to draw {0}")]
    OutOfMemory(&'static str),

    /// Reading or writing an image file
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// File system error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
