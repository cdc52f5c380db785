use enough::Stop;

use crate::bmp;
use crate::error::BlurError;
use crate::limits::Limits;
use crate::pixel::PixelBuffer;

/// Builder for decoding BMP bytes into a [`PixelBuffer`].
///
/// ```no_run
/// use bmpblur::{DecodeRequest, Limits};
/// use enough::Unstoppable;
///
/// let data: &[u8] = &[];
/// let limits = Limits {
///     max_pixels: Some(100_000_000),
///     ..Default::default()
/// };
/// let image = DecodeRequest::new(data)
///     .with_limits(&limits)
///     .decode(Unstoppable)?;
/// # Ok::<(), bmpblur::BlurError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    /// Bound the dimensions and output allocation the decode may produce.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Run the decode. Pass [`crate::Unstoppable`] when cancellation is not
    /// needed.
    pub fn decode(self, stop: impl Stop) -> Result<PixelBuffer, BlurError> {
        bmp::decode(self.data, self.limits, &stop)
    }
}
