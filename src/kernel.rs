use crate::error::BlurError;

/// Normalized Gaussian convolution kernel.
///
/// Stored as the 1D taps of the separable kernel: `2 * radius + 1` weights
/// sampled from `exp(-d² / (2σ²))` and renormalized so they sum to 1.0
/// (sampling truncates the Gaussian tails, so the raw sum falls short of the
/// analytic integral). The full 2D weight at offset `(dx, dy)` is the product
/// `taps[dx] * taps[dy]`, which keeps the 2D kernel normalized as well.
#[derive(Clone, Debug)]
pub struct GaussianKernel {
    sigma: f32,
    radius: usize,
    taps: Vec<f32>,
}

impl GaussianKernel {
    /// Build a kernel with the default radius rule `ceil(3 * sigma)`
    /// (minimum 1), which covers 99.7% of the Gaussian mass.
    ///
    /// Returns [`BlurError::InvalidParameter`] unless `sigma` is finite
    /// and positive.
    pub fn new(sigma: f32) -> Result<Self, BlurError> {
        check_sigma(sigma)?;
        let radius = (3.0 * sigma).ceil().max(1.0) as usize;
        Self::with_radius(sigma, radius)
    }

    /// Build a kernel with an explicit radius.
    ///
    /// Returns [`BlurError::InvalidParameter`] unless `sigma` is finite and
    /// positive and `radius` is at least 1.
    pub fn with_radius(sigma: f32, radius: usize) -> Result<Self, BlurError> {
        check_sigma(sigma)?;
        if radius == 0 {
            return Err(BlurError::InvalidParameter(
                "kernel radius must be at least 1".into(),
            ));
        }
        let len = radius
            .checked_mul(2)
            .and_then(|n| n.checked_add(1))
            .ok_or_else(|| {
                BlurError::InvalidParameter(format!("kernel radius {radius} too large"))
            })?;

        let mut taps = Vec::with_capacity(len);
        let inv_two_sigma_sq = 1.0 / (2.0 * sigma * sigma);
        for i in 0..len {
            let d = i as f32 - radius as f32;
            taps.push((-d * d * inv_two_sigma_sq).exp());
        }
        let sum: f32 = taps.iter().sum();
        for tap in &mut taps {
            *tap /= sum;
        }

        Ok(Self {
            sigma,
            radius,
            taps,
        })
    }

    /// The sigma this kernel was built from.
    pub fn sigma(&self) -> f32 {
        self.sigma
    }

    /// Kernel radius; the square kernel spans `2 * radius + 1` taps per axis.
    pub fn radius(&self) -> usize {
        self.radius
    }

    /// The normalized 1D taps, in left-to-right order.
    pub fn taps(&self) -> &[f32] {
        &self.taps
    }

    /// 2D weight at offset `(dx, dy)` from the kernel centre.
    ///
    /// # Panics
    ///
    /// Panics if either offset magnitude exceeds the radius.
    pub fn weight(&self, dx: i32, dy: i32) -> f32 {
        let r = self.radius as i32;
        self.taps[(dx + r) as usize] * self.taps[(dy + r) as usize]
    }
}

fn check_sigma(sigma: f32) -> Result<(), BlurError> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(BlurError::InvalidParameter(format!(
            "sigma must be finite and positive, got {sigma}"
        )));
    }
    Ok(())
}
