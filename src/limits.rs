use crate::error::BlurError;

/// Resource limits for decode operations.
///
/// All fields default to `None` (no limit). Checks run after the header is
/// parsed and before the output buffer is allocated, so an oversized file is
/// rejected without paying for its pixels.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u32>,
    pub max_height: Option<u32>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum bytes for the decoded buffer allocation.
    pub max_memory_bytes: Option<usize>,
}

impl Limits {
    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), BlurError> {
        fn over(what: &str, value: u64, max: u64) -> BlurError {
            BlurError::LimitExceeded(format!("{what} {value} exceeds limit {max}"))
        }

        if let Some(max) = self.max_width {
            if width > max {
                return Err(over("width", width.into(), max.into()));
            }
        }
        if let Some(max) = self.max_height {
            if height > max {
                return Err(over("height", height.into(), max.into()));
            }
        }
        if let Some(max) = self.max_pixels {
            let pixels = u64::from(width) * u64::from(height);
            if pixels > max {
                return Err(over("pixel count", pixels, max));
            }
        }
        Ok(())
    }

    pub(crate) fn check_memory(&self, bytes: usize) -> Result<(), BlurError> {
        if let Some(max) = self.max_memory_bytes {
            if bytes > max {
                return Err(BlurError::LimitExceeded(format!(
                    "allocation {bytes} bytes exceeds memory limit {max}"
                )));
            }
        }
        Ok(())
    }
}
