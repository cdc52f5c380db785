//! Uncompressed 24-bit BMP decoder.
//!
//! Accepts the BITMAPINFOHEADER family of DIB headers (40, 52, 56, 64, 108,
//! 124 bytes) with bpp=24 and compression=0; everything else is rejected.
//! Decoded rows are normalized to top-down order, samples stay in the file's
//! native BGR byte order.

use enough::Stop;

use crate::error::BlurError;
use crate::limits::Limits;
use crate::pixel::PixelBuffer;

// ── Cursor for reading from &[u8] ───────────────────────────────────

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn read_u8(&mut self) -> Result<u8, BlurError> {
        if self.pos < self.data.len() {
            let b = self.data[self.pos];
            self.pos += 1;
            Ok(b)
        } else {
            Err(BlurError::UnexpectedEof)
        }
    }

    fn get_u16_le(&mut self) -> Result<u16, BlurError> {
        if self.pos + 2 > self.data.len() {
            return Err(BlurError::UnexpectedEof);
        }
        let val = u16::from_le_bytes([self.data[self.pos], self.data[self.pos + 1]]);
        self.pos += 2;
        Ok(val)
    }

    fn get_u32_le(&mut self) -> Result<u32, BlurError> {
        if self.pos + 4 > self.data.len() {
            return Err(BlurError::UnexpectedEof);
        }
        let val = u32::from_le_bytes([
            self.data[self.pos],
            self.data[self.pos + 1],
            self.data[self.pos + 2],
            self.data[self.pos + 3],
        ]);
        self.pos += 4;
        Ok(val)
    }
}

// ── Parsed header info ──────────────────────────────────────────────

/// BMP header fields, parsed without touching pixel data.
///
/// Structural checks only (signature, header size, planes, non-zero
/// dimensions); `bits_per_pixel` and `compression` are reported as-is so a
/// probe can describe files the decoder itself rejects.
#[derive(Clone, Copy, Debug)]
pub struct BmpInfo {
    pub width: u32,
    pub height: u32,
    pub bits_per_pixel: u16,
    /// Compression method field; 0 means uncompressed.
    pub compression: u32,
    /// True when rows are stored top-down in the file (negative height).
    pub top_down: bool,
    pub(crate) pixel_offset: u32,
}

impl BmpInfo {
    /// Parse a BMP header to extract dimensions and pixel format.
    /// This is the header-only fast path for probing.
    pub fn from_bytes(data: &[u8]) -> Result<Self, BlurError> {
        let mut bytes = Cursor::new(data);

        if bytes.read_u8()? != b'B' || bytes.read_u8()? != b'M' {
            return Err(BlurError::UnrecognizedFormat);
        }

        // File size field (offset 2) is unreliable in the wild; ignored.
        let _file_size_field = bytes.get_u32_le()?;
        // Reserved (2 x u16)
        let _reserved1 = bytes.get_u16_le()?;
        let _reserved2 = bytes.get_u16_le()?;

        let pixel_offset = bytes.get_u32_le()?;
        let ihsize = bytes.get_u32_le()?;

        match ihsize {
            40 | 52 | 56 | 64 | 108 | 124 => {}
            12 | 16 => {
                return Err(BlurError::UnsupportedVariant(format!(
                    "OS/2 BMP header (size {ihsize}) unsupported"
                )));
            }
            _ => {
                return Err(BlurError::InvalidHeader(format!(
                    "unknown BMP info header size: {ihsize}"
                )));
            }
        }

        if u64::from(pixel_offset) < 14 + u64::from(ihsize) {
            return Err(BlurError::InvalidHeader(format!(
                "pixel data offset {pixel_offset} overlaps the headers"
            )));
        }

        let width = bytes.get_u32_le()? as i32;
        let height = bytes.get_u32_le()? as i32;
        let planes = bytes.get_u16_le()?;
        let bits_per_pixel = bytes.get_u16_le()?;
        let compression = bytes.get_u32_le()?;

        if planes != 1 {
            return Err(BlurError::InvalidHeader(format!(
                "BMP planes field is {planes}, expected 1"
            )));
        }
        if width <= 0 {
            return Err(BlurError::InvalidHeader(format!(
                "BMP width must be positive, got {width}"
            )));
        }
        if height == 0 {
            return Err(BlurError::InvalidHeader("BMP height is zero".into()));
        }

        Ok(Self {
            width: width as u32,
            height: height.unsigned_abs(),
            bits_per_pixel,
            compression,
            top_down: height < 0,
            pixel_offset,
        })
    }
}

// ── Full decode ─────────────────────────────────────────────────────

pub(crate) fn decode_bmp(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<PixelBuffer, BlurError> {
    let header = BmpInfo::from_bytes(data)?;

    if header.bits_per_pixel != 24 {
        return Err(BlurError::UnsupportedVariant(format!(
            "BMP bit depth {} unsupported (only 24-bit)",
            header.bits_per_pixel
        )));
    }
    if header.compression != 0 {
        return Err(BlurError::UnsupportedVariant(format!(
            "BMP compression method {} unsupported (only uncompressed)",
            header.compression
        )));
    }

    let w = header.width as usize;
    let h = header.height as usize;
    let too_large = || BlurError::DimensionsTooLarge {
        width: header.width,
        height: header.height,
    };

    let out_size = w
        .checked_mul(h)
        .and_then(|wh| wh.checked_mul(PixelBuffer::CHANNELS))
        .ok_or_else(too_large)?;
    if let Some(limits) = limits {
        limits.check(header.width, header.height)?;
        limits.check_memory(out_size)?;
    }

    // Rows are padded to a 4-byte boundary in the file.
    let row_bytes = w * PixelBuffer::CHANNELS;
    let row_stride = row_bytes.checked_add(3).ok_or_else(too_large)? & !3;
    let pixel_end = row_stride
        .checked_mul(h)
        .and_then(|n| n.checked_add(header.pixel_offset as usize))
        .ok_or_else(too_large)?;
    if data.len() < pixel_end {
        return Err(BlurError::UnexpectedEof);
    }

    stop.check()?;

    let mut buf = vec![0u8; out_size];
    let rows = data[header.pixel_offset as usize..].chunks_exact(row_stride);
    for (row_idx, file_row) in rows.take(h).enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        let y = if header.top_down {
            row_idx
        } else {
            h - 1 - row_idx
        };
        buf[y * row_bytes..(y + 1) * row_bytes].copy_from_slice(&file_row[..row_bytes]);
    }

    Ok(PixelBuffer::from_vec(header.width, header.height, buf))
}
