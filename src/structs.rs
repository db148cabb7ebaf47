use std::{
    fmt::Debug,
    fs::File,
    io::Write,
    path::Path,
};

use log::{debug, trace};

use crate::{
    compress::{Compress, ZlibCompressor},
    error::{Error, Result},
};

#[derive(Clone, PartialEq, Eq)]
pub struct Data {
    pub data: Vec<u8>,
}

impl Debug for Data {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let data_chunks = format!(
            "[\n{}\n]",
            self.data
                .chunks(16)
                .map(|data_chunk| {
                    format!(
                        "\t{}",
                        data_chunk
                            .iter()
                            .map(|x| format!("0x{:02X?}", x))
                            .collect::<Vec<_>>()
                            .join(", ")
                    )
                })
                .collect::<Vec<_>>()
                .join(",\n")
        );
        write!(f, "{}", data_chunks)
    }
}

/// A framed PNG record: length, type tag, data and CRC.
#[derive(Clone, PartialEq, Eq)]
pub struct Chunk {
    pub size: u32,
    pub kind: [u8; 4],
    pub data: Data,
    pub crc: u32,
}

impl Debug for Chunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Chunk {{
    Size:\t {}
    Kind:\t\"{}\"
    Data:\t{}
    CRC:\t{:08X?}
}}",
            self.size,
            String::from_utf8_lossy(&self.kind),
            format!("{:?}", self.data).replace('\n', "\n\t\t"),
            self.crc
        )
    }
}

impl Chunk {
    /// CRC32 over the type tag followed by the data. The length is not covered.
    pub fn crc(kind: &[u8; 4], data: &[u8]) -> u32 {
        let mut hasher = crc32fast::Hasher::new();
        hasher.update(kind);
        hasher.update(data);
        hasher.finalize()
    }

    pub fn check_crc(&self) -> bool {
        Chunk::crc(&self.kind, self.data()) == self.crc
    }

    pub fn from_data(kind: &[u8; 4], data: &[u8]) -> Chunk {
        Chunk {
            size: data.len() as u32,
            kind: *kind,
            data: Data {
                data: data.to_owned(),
            },
            crc: Chunk::crc(kind, data),
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data.data
    }

    /// Bytes the chunk occupies once framed.
    pub fn chunk_size(&self) -> usize {
        self.size as usize + 12
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut res = Vec::with_capacity(self.chunk_size());
        res.extend_from_slice(&self.size.to_be_bytes());
        res.extend_from_slice(&self.kind);
        res.extend_from_slice(self.data());
        res.extend_from_slice(&self.crc.to_be_bytes());
        res
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColourType {
    Grayscale,
    RGB,
    Palette,
    GrayscaleAlpha,
    RGBAlpha,
}

impl ColourType {
    pub fn valid_bit_depth(&self, bit_depth: u8) -> bool {
        match self {
            ColourType::Grayscale => [1, 2, 4, 8, 16].contains(&bit_depth),
            ColourType::RGB => [8, 16].contains(&bit_depth),
            ColourType::Palette => [1, 2, 4, 8].contains(&bit_depth),
            ColourType::GrayscaleAlpha => [8, 16].contains(&bit_depth),
            ColourType::RGBAlpha => [8, 16].contains(&bit_depth),
        }
    }

    /// Only 8-bit truecolour can be filled from an RGB triple.
    pub fn can_encode(&self, bit_depth: u8) -> bool {
        self.valid_bit_depth(bit_depth) && matches!(self, ColourType::RGB) && bit_depth == 8
    }

    pub fn get_code(&self) -> u8 {
        match self {
            ColourType::Grayscale => 0,
            ColourType::RGB => 2,
            ColourType::Palette => 3,
            ColourType::GrayscaleAlpha => 4,
            ColourType::RGBAlpha => 6,
        }
    }

    pub fn samples_per_pixel(&self) -> usize {
        match self {
            ColourType::Grayscale | ColourType::Palette => 1,
            ColourType::GrayscaleAlpha => 2,
            ColourType::RGB => 3,
            ColourType::RGBAlpha => 4,
        }
    }
}

pub const HEADER: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

pub const IHDR: &[u8; 4] = b"IHDR";
pub const IDAT: &[u8; 4] = b"IDAT";
pub const IEND: &[u8; 4] = b"IEND";

/// A uniform-colour image ready to be serialised.
#[derive(Debug)]
pub struct PNG {
    pub ihdr: Chunk,
    pub dimension: (u32, u32),
    pub bit_depth: u8,
    pub colour_type: ColourType,
    pub fill: [u8; 3],
}

impl PNG {
    pub fn new(
        width: u32,
        height: u32,
        bit_depth: u8,
        colour_type: ColourType,
        fill: [u8; 3],
    ) -> Result<PNG> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        if !colour_type.can_encode(bit_depth) {
            return Err(Error::UnsupportedFormat {
                bit_depth,
                colour_type: colour_type.get_code(),
            });
        }

        let mut ihdr_data = Vec::with_capacity(13);
        ihdr_data.extend_from_slice(&width.to_be_bytes());
        ihdr_data.extend_from_slice(&height.to_be_bytes());
        ihdr_data.extend_from_slice(&[
            bit_depth,
            colour_type.get_code(),
            0, // Type 0 compression
            0, // Type 0 filtering
            0, // No interlacing
        ]);
        let ihdr = Chunk::from_data(IHDR, &ihdr_data);
        debug!("built IHDR for {}x{} image", width, height);
        trace!("{:?}", ihdr);

        Ok(PNG {
            ihdr,
            dimension: (width, height),
            bit_depth,
            colour_type,
            fill,
        })
    }

    /// One filter byte (0) per row followed by the fill colour repeated across it.
    pub fn scanlines(&self) -> Vec<u8> {
        let (width, height) = self.dimension;
        let row_len = width as usize * self.colour_type.samples_per_pixel();
        let mut uncompressed = Vec::with_capacity(height as usize * (row_len + 1));

        for _ in 0..height {
            uncompressed.push(0x00); // No filter
            for _ in 0..width {
                uncompressed.extend_from_slice(&self.fill);
            }
        }
        uncompressed
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        self.to_bytes_with(&ZlibCompressor)
    }

    pub fn to_bytes_with<C: Compress>(&self, compressor: &C) -> Result<Vec<u8>> {
        let uncompressed = self.scanlines();
        let compressed = compressor
            .compress(&uncompressed)
            .map_err(Error::Compression)?;
        debug!(
            "compressed {} scanline bytes to {}",
            uncompressed.len(),
            compressed.len()
        );

        let idat = Chunk::from_data(IDAT, &compressed);
        let iend = Chunk::from_data(IEND, &[]);

        let mut res = Vec::with_capacity(
            HEADER.len() + self.ihdr.chunk_size() + idat.chunk_size() + iend.chunk_size(),
        );
        res.extend_from_slice(&HEADER);
        res.extend_from_slice(&self.ihdr.to_bytes());
        res.extend_from_slice(&idat.to_bytes());
        res.extend_from_slice(&iend.to_bytes());
        Ok(res)
    }

    pub fn save<P: AsRef<Path>>(&self, filepath: P) -> Result<()> {
        save_bytes(filepath.as_ref(), &self.to_bytes()?)
    }
}

/// Creates or truncates `filepath` and writes `bytes` to it.
pub fn save_bytes(filepath: &Path, bytes: &[u8]) -> Result<()> {
    let unwritable = |source| Error::Unwritable {
        path: filepath.to_path_buf(),
        source,
    };

    let mut file = File::create(filepath).map_err(unwritable)?;
    file.write_all(bytes).map_err(unwritable)?;
    debug!("wrote {} bytes to {}", bytes.len(), filepath.display());
    Ok(())
}
