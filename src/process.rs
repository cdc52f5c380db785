//! File-to-file processing: read → decode → blur → encode → write.
//!
//! This is the entry point a UI shell calls. It touches exactly two paths
//! (plus a sibling temporary file for the atomic write) and reports every
//! failure as a typed [`BlurError`] instead of terminating the process.

use std::fs;
use std::path::{Path, PathBuf};

use enough::{Stop, Unstoppable};

use crate::blur::BlurFilter;
use crate::bmp;
use crate::error::BlurError;
use crate::kernel::GaussianKernel;
use crate::limits::Limits;

/// Default blur strength used by [`process_image`].
///
/// A documented policy placeholder, not a contract; override per call with
/// [`ProcessRequest::with_sigma`].
pub const DEFAULT_SIGMA: f32 = 2.0;

/// Blur a BMP file into a new BMP file with the default sigma.
///
/// Shorthand for [`ProcessRequest::new`] + [`ProcessRequest::run`] with
/// [`Unstoppable`].
pub fn process_image(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<(), BlurError> {
    ProcessRequest::new(input, output).run(Unstoppable)
}

/// Builder for one decode → blur → encode pass over a pair of file paths.
///
/// ```no_run
/// use bmpblur::ProcessRequest;
/// use enough::Unstoppable;
///
/// ProcessRequest::new("input.bmp", "output.bmp")
///     .with_sigma(1.5)
///     .run(Unstoppable)?;
/// # Ok::<(), bmpblur::BlurError>(())
/// ```
#[derive(Clone, Debug)]
pub struct ProcessRequest<'a> {
    input: PathBuf,
    output: PathBuf,
    sigma: f32,
    radius: Option<usize>,
    limits: Option<&'a Limits>,
}

impl<'a> ProcessRequest<'a> {
    pub fn new(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Self {
        Self {
            input: input.as_ref().to_path_buf(),
            output: output.as_ref().to_path_buf(),
            sigma: DEFAULT_SIGMA,
            radius: None,
            limits: None,
        }
    }

    /// Blur strength. Must be finite and positive.
    pub fn with_sigma(mut self, sigma: f32) -> Self {
        self.sigma = sigma;
        self
    }

    /// Explicit kernel radius instead of the default `ceil(3 * sigma)`.
    pub fn with_radius(mut self, radius: usize) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Bound the dimensions and memory the decode may use.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Run the pipeline.
    ///
    /// Filter parameters are validated before the input file is opened. On
    /// any failure the output path is left untouched: encoded bytes go to a
    /// sibling temporary file first and are renamed into place only once
    /// complete.
    pub fn run(self, stop: impl Stop) -> Result<(), BlurError> {
        let kernel = match self.radius {
            Some(radius) => GaussianKernel::with_radius(self.sigma, radius)?,
            None => GaussianKernel::new(self.sigma)?,
        };
        let filter = BlurFilter::new(kernel);

        let data = fs::read(&self.input)?;
        let image = bmp::decode(&data, self.limits, &stop)?;
        let blurred = filter.apply_inner(&image, &stop)?;
        let encoded = bmp::encode(&blurred, &stop)?;

        write_atomic(&self.output, &encoded)
    }
}

/// Write to `<name>.tmp` next to the destination, then rename into place.
/// The destination never holds a partial file.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), BlurError> {
    let Some(name) = path.file_name() else {
        return Err(BlurError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "output path has no file name",
        )));
    };
    let mut tmp_name = name.to_os_string();
    tmp_name.push(".tmp");
    let tmp = path.with_file_name(tmp_name);

    if let Err(e) = fs::write(&tmp, bytes) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    Ok(())
}
