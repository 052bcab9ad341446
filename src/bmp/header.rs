//! BITMAPFILEHEADER + BITMAPINFOHEADER, little-endian, packed.

use crate::error::BitmapError;

const BI_RGB: u32 = 0;
const BI_BITFIELDS: u32 = 3;

/// The 14-byte file header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileHeader {
    /// `BM` for Windows bitmaps. Only checked in strict mode.
    pub signature: [u8; 2],
    pub file_size: u32,
    pub reserved1: u16,
    pub reserved2: u16,
    /// Absolute offset of the first pixel byte.
    pub pixel_offset: u32,
}

impl FileHeader {
    pub const SIZE: usize = 14;

    pub fn parse(b: &[u8; Self::SIZE]) -> Self {
        Self {
            signature: [b[0], b[1]],
            file_size: u32::from_le_bytes([b[2], b[3], b[4], b[5]]),
            reserved1: u16::from_le_bytes([b[6], b[7]]),
            reserved2: u16::from_le_bytes([b[8], b[9]]),
            pixel_offset: u32::from_le_bytes([b[10], b[11], b[12], b[13]]),
        }
    }

    pub fn has_bmp_signature(&self) -> bool {
        self.signature == *b"BM"
    }
}

/// The 40-byte info header.
///
/// Width and height are signed on disk but read as unsigned, so a top-down
/// bitmap (negative height) shows up as a very large height.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoHeader {
    pub header_size: u32,
    pub width: u32,
    pub height: u32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    pub image_size: u32,
    pub x_pixels_per_meter: i32,
    pub y_pixels_per_meter: i32,
    pub colors_used: u32,
    pub colors_important: u32,
}

impl InfoHeader {
    pub const SIZE: usize = 40;

    pub fn parse(b: &[u8; Self::SIZE]) -> Self {
        let u32_at = |i: usize| u32::from_le_bytes([b[i], b[i + 1], b[i + 2], b[i + 3]]);
        let u16_at = |i: usize| u16::from_le_bytes([b[i], b[i + 1]]);
        Self {
            header_size: u32_at(0),
            width: u32_at(4),
            height: u32_at(8),
            planes: u16_at(12),
            bits_per_pixel: u16_at(14),
            compression: u32_at(16),
            image_size: u32_at(20),
            x_pixels_per_meter: u32_at(24) as i32,
            y_pixels_per_meter: u32_at(28) as i32,
            colors_used: u32_at(32),
            colors_important: u32_at(36),
        }
    }
}

/// Both headers of a bitmap, as read from the start of the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BmpHeaders {
    pub file: FileHeader,
    pub info: InfoHeader,
}

impl BmpHeaders {
    /// Combined size of the two headers.
    pub const SIZE: usize = FileHeader::SIZE + InfoHeader::SIZE;

    pub fn width(&self) -> u32 {
        self.info.width
    }

    pub fn height(&self) -> u32 {
        self.info.height
    }

    /// `bits_per_pixel / 8`; only 3 and 4 decode to meaningful colors.
    pub fn bytes_per_pixel(&self) -> usize {
        usize::from(self.info.bits_per_pixel / 8)
    }

    /// Bytes of pixel data per row, optionally rounded up to 4 bytes.
    pub fn row_bytes(&self, padded: bool) -> u64 {
        let raw = u64::from(self.info.width) * self.bytes_per_pixel() as u64;
        if padded { raw.div_ceil(4) * 4 } else { raw }
    }

    /// Reject everything outside uncompressed, bottom-up 24/32-bit BMP.
    pub(crate) fn validate_strict(&self) -> Result<(), BitmapError> {
        if !self.file.has_bmp_signature() {
            return Err(BitmapError::UnrecognizedFormat);
        }
        let bpp = self.info.bits_per_pixel;
        if bpp != 24 && bpp != 32 {
            return Err(BitmapError::UnsupportedFormat(format!(
                "{bpp} bits per pixel (only 24 and 32 are supported)"
            )));
        }
        match (self.info.compression, bpp) {
            (BI_RGB, _) | (BI_BITFIELDS, 32) => {}
            (other, _) => {
                return Err(BitmapError::UnsupportedFormat(format!(
                    "compression type {other} at {bpp} bits per pixel"
                )));
            }
        }
        if (self.info.height as i32) < 0 {
            return Err(BitmapError::UnsupportedFormat(
                "top-down row order (negative height)".into(),
            ));
        }
        if (self.info.width as i32) < 0 {
            return Err(BitmapError::InvalidHeader(format!(
                "negative width {}",
                self.info.width as i32
            )));
        }
        if self.info.planes != 1 {
            return Err(BitmapError::InvalidHeader(format!(
                "planes is {} (must be 1)",
                self.info.planes
            )));
        }
        if (self.file.pixel_offset as usize) < Self::SIZE {
            return Err(BitmapError::InvalidHeader(format!(
                "pixel data offset {} overlaps the {}-byte headers",
                self.file.pixel_offset,
                Self::SIZE
            )));
        }
        Ok(())
    }
}
