use crate::error::BlurError;

/// Owned 24-bit pixel buffer.
///
/// Samples are 8-bit, three channels per pixel in BGR order (BMP native),
/// rows stored top-down with no padding. The length invariant
/// `data.len() == width * height * 3` holds for every constructed buffer,
/// and dimensions never change after construction; filters produce new
/// buffers instead of resizing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Channels per pixel (blue, green, red).
    pub const CHANNELS: usize = 3;

    /// Construct a buffer from raw BGR bytes, top-down row order.
    ///
    /// Returns [`BlurError::InvalidParameter`] if either dimension is zero,
    /// [`BlurError::DimensionsTooLarge`] if `width * height * 3` overflows,
    /// or [`BlurError::BufferTooSmall`] if `data` has the wrong length.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, BlurError> {
        if width == 0 || height == 0 {
            return Err(BlurError::InvalidParameter(format!(
                "image dimensions must be non-zero, got {width}x{height}"
            )));
        }
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|wh| wh.checked_mul(Self::CHANNELS))
            .ok_or(BlurError::DimensionsTooLarge { width, height })?;
        if data.len() != expected {
            return Err(BlurError::BufferTooSmall {
                needed: expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub(crate) fn from_vec(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(
            data.len(),
            width as usize * height as usize * Self::CHANNELS
        );
        Self {
            width,
            height,
            data,
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Channels per pixel. Always 3 for this crate.
    pub fn channels(&self) -> usize {
        Self::CHANNELS
    }

    /// The raw samples, `width * height * 3` bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer and return the raw samples.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// One row of samples (`width * 3` bytes), `y` counted from the top.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.width as usize * Self::CHANNELS;
        let start = y as usize * stride;
        &self.data[start..start + stride]
    }

    /// Typed view of the samples as BGR pixels.
    #[cfg(feature = "rgb")]
    pub fn as_bgr(&self) -> &[rgb::alt::BGR8] {
        use rgb::FromSlice;
        self.data.as_bgr()
    }

    /// Synthetic gradient pattern: red varies along x, green along y,
    /// blue is constant 128. Handy as a self-contained test input.
    pub fn gradient(width: u32, height: u32) -> Result<Self, BlurError> {
        let w = width as usize;
        let h = height as usize;
        let len = w
            .checked_mul(h)
            .and_then(|wh| wh.checked_mul(Self::CHANNELS))
            .ok_or(BlurError::DimensionsTooLarge { width, height })?;
        let mut data = Vec::with_capacity(len);
        for y in 0..h {
            for x in 0..w {
                data.push(128);
                data.push(((255 * y) / h) as u8);
                data.push(((255 * x) / w) as u8);
            }
        }
        Self::new(width, height, data)
    }
}
