//! # lcdbitmap
//!
//! Stream Windows BMP images into the RGB565 frame memory of small SPI color
//! LCD modules (ST7735-class 160x128 panels and friends).
//!
//! The loader reads the 14-byte file header and 40-byte info header, seeks to
//! the pixel array and writes every pixel through a [`FrameSink`], packing
//! BGR(A) samples into 5-6-5 and flipping rows so the bottom-up BMP lands
//! the right way up. [`FrameBuffer`] is the in-memory sink most callers want.
//!
//! ## Supported input
//!
//! - Uncompressed 24-bit BGR and 32-bit BGRA, bottom-up rows
//! - Rows read back to back by default; 4-byte aligned rows on request
//!
//! Pixel data that ends early is not an error: the load stops, reports
//! [`LoadOutcome::truncated`] and leaves the rest of the sink untouched.
//! The header alone decides how many pixels are walked, so untrusted files
//! should be loaded through [`LoadRequest::with_limits`].
//!
//! ## Non-Goals
//!
//! - Display controller bring-up, GPIO and SPI transport
//! - Fonts and vector drawing (see the `embedded-graphics` feature)
//! - Palettized, RLE or bitfield-masked BMP variants
//!
//! ## Usage
//!
//! ```no_run
//! use lcdbitmap::{FrameBuffer, load_bitmap_file};
//!
//! let mut fb = FrameBuffer::new(160, 128);
//! let outcome = load_bitmap_file("pic/time.bmp", &mut fb)?;
//! println!("{} of {} pixels", outcome.pixels_written, outcome.width * outcome.height);
//!
//! // Hand the bytes to the panel driver in its bus order.
//! let wire = fb.to_be_bytes();
//! # let _ = wire;
//! # Ok::<(), lcdbitmap::BitmapError>(())
//! ```

#![forbid(unsafe_code)]

mod error;
mod framebuffer;
mod limits;
mod pixel;
mod sink;

pub mod bmp;

mod decode;

#[cfg(feature = "embedded-graphics")]
mod graphics;

// Re-exports
pub use bmp::{BmpHeaders, FileHeader, InfoHeader, Permissiveness};
pub use decode::{LoadOutcome, LoadRequest, load_bitmap, load_bitmap_file, probe_bitmap};
pub use enough::{Stop, Unstoppable};
pub use error::BitmapError;
pub use framebuffer::FrameBuffer;
pub use limits::Limits;
pub use pixel::{PixelSample, Rgb565};
pub use sink::{FrameSink, ScanDirection};

#[cfg(feature = "embedded-graphics")]
pub use graphics::DrawTargetSink;
