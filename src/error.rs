//! Error types for the icon encoder

use std::{io, path::PathBuf};

use thiserror::Error;

/// Result type alias for encoder operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Width or height is zero
    #[error("Invalid dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: u32, height: u32 },

    /// Bit depth and colour type combination the encoder cannot emit
    #[error("Unsupported format: bit depth {bit_depth} with colour type {colour_type}")]
    UnsupportedFormat { bit_depth: u8, colour_type: u8 },

    /// The zlib stream could not be produced
    #[error("Compression failed: {0}")]
    Compression(#[source] io::Error),

    /// The destination could not be created or written
    #[error("Cannot write {}: {source}", path.display())]
    Unwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
