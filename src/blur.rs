//! Gaussian blur over pixel buffers.

use enough::Stop;

use crate::error::BlurError;
use crate::kernel::GaussianKernel;
use crate::pixel::PixelBuffer;

/// Gaussian blur filter.
///
/// The 2D convolution is separable, so it runs as two 1D passes: horizontal
/// into an f32 working buffer, then vertical back to bytes. The result
/// matches direct 2D convolution up to floating-point rounding. Neighbor
/// coordinates outside the image clamp to the nearest edge (no wrap, no
/// zero padding), so a constant image blurs to itself.
#[derive(Clone, Debug)]
pub struct BlurFilter {
    kernel: GaussianKernel,
}

impl BlurFilter {
    pub fn new(kernel: GaussianKernel) -> Self {
        Self { kernel }
    }

    pub fn kernel(&self) -> &GaussianKernel {
        &self.kernel
    }

    /// Blur `image` into a freshly allocated buffer of the same dimensions.
    ///
    /// The input is never mutated. Samples accumulate in f32 and are rounded
    /// to nearest, then clamped to `[0, 255]`.
    pub fn apply(&self, image: &PixelBuffer, stop: impl Stop) -> Result<PixelBuffer, BlurError> {
        self.apply_inner(image, &stop)
    }

    pub(crate) fn apply_inner(
        &self,
        image: &PixelBuffer,
        stop: &dyn Stop,
    ) -> Result<PixelBuffer, BlurError> {
        let w = image.width() as usize;
        let h = image.height() as usize;
        let row_len = w * PixelBuffer::CHANNELS;
        let taps = self.kernel.taps();
        let radius = self.kernel.radius();
        let src = image.as_bytes();

        // Horizontal pass
        let mut mid = vec![0.0f32; src.len()];
        for y in 0..h {
            if y % 16 == 0 {
                stop.check()?;
            }
            let row = &src[y * row_len..(y + 1) * row_len];
            let out = &mut mid[y * row_len..(y + 1) * row_len];
            filter_row(row, out, taps, radius, w);
        }

        // Vertical pass
        let mut out = vec![0u8; src.len()];
        let mut acc = vec![0.0f32; row_len];
        for y in 0..h {
            if y % 16 == 0 {
                stop.check()?;
            }
            acc.fill(0.0);
            for (k, &tap) in taps.iter().enumerate() {
                let sy = clamp_index(y as isize + k as isize - radius as isize, h);
                let mid_row = &mid[sy * row_len..(sy + 1) * row_len];
                for (a, &m) in acc.iter_mut().zip(mid_row) {
                    *a += tap * m;
                }
            }
            let dst_row = &mut out[y * row_len..(y + 1) * row_len];
            for (d, &a) in dst_row.iter_mut().zip(&acc) {
                *d = a.round().clamp(0.0, 255.0) as u8;
            }
        }

        Ok(PixelBuffer::from_vec(image.width(), image.height(), out))
    }
}

fn filter_row(row: &[u8], out: &mut [f32], taps: &[f32], radius: usize, width: usize) {
    for x in 0..width {
        let mut acc = [0.0f32; PixelBuffer::CHANNELS];
        for (k, &tap) in taps.iter().enumerate() {
            let sx = clamp_index(x as isize + k as isize - radius as isize, width);
            let off = sx * PixelBuffer::CHANNELS;
            acc[0] += tap * f32::from(row[off]);
            acc[1] += tap * f32::from(row[off + 1]);
            acc[2] += tap * f32::from(row[off + 2]);
        }
        let off = x * PixelBuffer::CHANNELS;
        out[off..off + PixelBuffer::CHANNELS].copy_from_slice(&acc);
    }
}

fn clamp_index(idx: isize, upper: usize) -> usize {
    if idx < 0 {
        0
    } else if (idx as usize) >= upper {
        upper - 1
    } else {
        idx as usize
    }
}
