//! Uncompressed 24-bit BMP decoder and encoder (internal).
//!
//! Use [`crate::DecodeRequest`] / [`crate::EncodeRequest`], or
//! [`BmpInfo::from_bytes`] to probe a header without decoding.

mod decode;
mod encode;

pub use decode::BmpInfo;

use enough::Stop;

use crate::error::BlurError;
use crate::limits::Limits;
use crate::pixel::PixelBuffer;

/// Decode BMP data into a top-down BGR pixel buffer.
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<PixelBuffer, BlurError> {
    decode::decode_bmp(data, limits, stop)
}

/// Encode a pixel buffer to BMP bytes.
pub(crate) fn encode(image: &PixelBuffer, stop: &dyn Stop) -> Result<Vec<u8>, BlurError> {
    encode::encode_bmp(image, stop)
}
