//! # bmpblur
//!
//! Uncompressed 24-bit BMP codec paired with a Gaussian blur filter.
//!
//! The crate is the processing engine behind a thin UI shell: the shell picks
//! an input file and displays a result, this crate does everything in
//! between. One call reads a BMP file, blurs it, and writes a BMP file, or
//! fails with a typed error the caller can present.
//!
//! ## Supported format
//!
//! Windows BMP, uncompressed, 24 bits per pixel (the BITMAPINFOHEADER family
//! of DIB headers, bottom-up or top-down row order). Everything else
//! (palettes, RLE, bitfields, 16/32-bit) is rejected with
//! [`BlurError::UnsupportedVariant`].
//!
//! ## Non-Goals
//!
//! - Other image formats (PNG, JPEG, …)
//! - BMP variants beyond uncompressed 24-bpp
//! - Color management
//!
//! ## Usage
//!
//! ```no_run
//! use bmpblur::{BlurFilter, DecodeRequest, EncodeRequest, GaussianKernel};
//! use enough::Unstoppable;
//!
//! let data: &[u8] = &[]; // your BMP bytes
//!
//! let image = DecodeRequest::new(data).decode(Unstoppable)?;
//! let kernel = GaussianKernel::new(2.0)?;
//! let blurred = BlurFilter::new(kernel).apply(&image, Unstoppable)?;
//! let encoded = EncodeRequest::new().encode(&blurred, Unstoppable)?;
//! # Ok::<(), bmpblur::BlurError>(())
//! ```
//!
//! Or, file to file, the whole pipeline in one call:
//!
//! ```no_run
//! bmpblur::process_image("input.bmp", "output.bmp")?;
//! # Ok::<(), bmpblur::BlurError>(())
//! ```

#![forbid(unsafe_code)]

mod blur;
mod error;
mod kernel;
mod limits;
mod pixel;

pub mod bmp;

mod decode;
mod encode;
mod process;

// Re-exports
pub use blur::BlurFilter;
pub use bmp::BmpInfo;
pub use decode::DecodeRequest;
pub use encode::EncodeRequest;
pub use enough::{Stop, Unstoppable};
pub use error::BlurError;
pub use kernel::GaussianKernel;
pub use limits::Limits;
pub use pixel::PixelBuffer;
pub use process::{DEFAULT_SIGMA, ProcessRequest, process_image};
