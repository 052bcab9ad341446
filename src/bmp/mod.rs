//! BMP subset: 14-byte file header, 40-byte info header, uncompressed
//! 24-bit BGR or 32-bit BGRA pixels stored bottom-up.

pub(crate) mod decode;
mod header;

pub use header::{BmpHeaders, FileHeader, InfoHeader};

/// Controls how strictly the loader validates the headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Permissiveness {
    /// Accept anything with complete headers. The signature is not checked,
    /// any bit depth is walked as `bits_per_pixel / 8` bytes per pixel and
    /// compression is ignored.
    #[default]
    Permissive,

    /// Only accept `BM` files with planes == 1, 24 or 32 bits per pixel,
    /// no compression (or bitfields at 32 bits), bottom-up rows and a pixel
    /// offset past the headers.
    Strict,
}
