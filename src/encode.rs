use enough::Stop;

use crate::bmp;
use crate::error::BlurError;
use crate::pixel::PixelBuffer;

/// Builder for encoding a [`PixelBuffer`] to BMP bytes.
///
/// The output is always uncompressed 24-bit with the canonical 14+40-byte
/// header pair and bottom-up rows.
#[derive(Clone, Copy, Debug, Default)]
pub struct EncodeRequest {}

impl EncodeRequest {
    pub fn new() -> Self {
        Self {}
    }

    /// Run the encode. Pass [`crate::Unstoppable`] when cancellation is not
    /// needed.
    pub fn encode(self, image: &PixelBuffer, stop: impl Stop) -> Result<Vec<u8>, BlurError> {
        bmp::encode(image, &stop)
    }
}
