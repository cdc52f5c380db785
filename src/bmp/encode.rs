//! BMP encoder: uncompressed 24-bit, canonical 14+40-byte header pair.

use enough::Stop;

use crate::error::BlurError;
use crate::pixel::PixelBuffer;

/// Encode a pixel buffer to BMP bytes.
///
/// Rows are written bottom-up (positive height) and zero-padded to the
/// 4-byte stride; samples are already in the file's BGR order, so each row
/// is a direct copy.
pub(crate) fn encode_bmp(image: &PixelBuffer, stop: &dyn Stop) -> Result<Vec<u8>, BlurError> {
    let width = image.width();
    let height = image.height();
    let w = width as usize;
    let h = height as usize;
    let too_large = || BlurError::DimensionsTooLarge { width, height };

    let row_stride = w
        .checked_mul(3)
        .and_then(|r| r.checked_add(3))
        .map(|r| r & !3)
        .ok_or_else(too_large)?;
    let pixel_data_size = row_stride.checked_mul(h).ok_or_else(too_large)?;
    let file_size = pixel_data_size.checked_add(54).ok_or_else(too_large)?;

    stop.check()?;

    let mut out = Vec::with_capacity(file_size);
    write_bmp_header(&mut out, file_size, pixel_data_size, width, height);

    let pad_bytes = row_stride - w * 3;
    for row in (0..h).rev() {
        if row % 16 == 0 {
            stop.check()?;
        }
        out.extend_from_slice(image.row(row as u32));
        out.extend(core::iter::repeat_n(0u8, pad_bytes));
    }

    Ok(out)
}

fn write_bmp_header(
    out: &mut Vec<u8>,
    file_size: usize,
    pixel_data_size: usize,
    width: u32,
    height: u32,
) {
    // File header (14 bytes)
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(file_size as u32).to_le_bytes());
    out.extend_from_slice(&[0u8; 4]); // reserved
    out.extend_from_slice(&54u32.to_le_bytes()); // data offset

    // DIB header (BITMAPINFOHEADER, 40 bytes)
    out.extend_from_slice(&40u32.to_le_bytes());
    out.extend_from_slice(&(width as i32).to_le_bytes());
    out.extend_from_slice(&(height as i32).to_le_bytes()); // positive = bottom-up
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&24u16.to_le_bytes()); // bits per pixel
    out.extend_from_slice(&0u32.to_le_bytes()); // compression
    out.extend_from_slice(&(pixel_data_size as u32).to_le_bytes());
    out.extend_from_slice(&2835u32.to_le_bytes()); // h resolution (72 DPI)
    out.extend_from_slice(&2835u32.to_le_bytes()); // v resolution
    out.extend_from_slice(&0u32.to_le_bytes()); // colors used
    out.extend_from_slice(&0u32.to_le_bytes()); // important colors
}
