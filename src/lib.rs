//! Writes a uniform-colour truecolour PNG.
//!
//! The stream is built from a signature and three chunks (IHDR, a single
//! IDAT and IEND), each framed by [`Chunk`]. Pixel data goes through a
//! [`Compress`] implementation, [`ZlibCompressor`] by default.

pub mod compress;
pub mod error;
pub mod structs;

use std::path::Path;

pub use compress::{Compress, ZlibCompressor};
pub use error::{Error, Result};
pub use structs::{Chunk, ColourType, PNG};

/// Encodes a `width` x `height` image filled with `rgb`.
pub fn encode_solid_image(
    width: u32,
    height: u32,
    bit_depth: u8,
    colour_type: ColourType,
    rgb: [u8; 3],
) -> Result<Vec<u8>> {
    PNG::new(width, height, bit_depth, colour_type, rgb)?.to_bytes()
}

/// Writes `bytes` to `path`, replacing any existing file.
pub fn write_file<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<()> {
    structs::save_bytes(path.as_ref(), bytes)
}
