use std::io::{self, Write};

use libflate::zlib::Encoder;

/// Turns raw scanlines into the zlib stream carried by IDAT.
pub trait Compress {
    fn compress(&self, data: &[u8]) -> io::Result<Vec<u8>>;
}

/// libflate zlib encoder with its default options. Output is deterministic.
#[derive(Debug, Default, Clone, Copy)]
pub struct ZlibCompressor;

impl Compress for ZlibCompressor {
    fn compress(&self, data: &[u8]) -> io::Result<Vec<u8>> {
        let mut encoder = Encoder::new(Vec::new())?;
        encoder.write_all(data)?;
        encoder.finish().into_result()
    }
}
