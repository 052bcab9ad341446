//! In-memory RGB565 image cache, the buffer a demo draws into before pushing
//! it to the panel.

use crate::error::BitmapError;
use crate::pixel::Rgb565;
use crate::sink::{FrameSink, ScanDirection};

/// Owned RGB565 frame with scan-direction aware addressing.
///
/// Memory is always laid out physically (`physical_size()` row-major). The
/// current [`ScanDirection`] only changes how logical coordinates passed to
/// [`FrameSink::set_pixel`] and [`FrameBuffer::pixel`] land in that memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    scan: ScanDirection,
    pixels: Vec<Rgb565>,
}

impl FrameBuffer {
    /// A `width` x `height` buffer cleared to white.
    ///
    /// # Panics
    ///
    /// Panics if the frame cannot be allocated, as [`FrameBuffer::filled`].
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Rgb565::WHITE)
    }

    /// A `width` x `height` buffer cleared to `color`.
    ///
    /// # Panics
    ///
    /// Panics if `width * height` pixels do not fit in memory. Use
    /// [`FrameBuffer::try_filled`] for sizes that come from outside.
    pub fn filled(width: u32, height: u32, color: Rgb565) -> Self {
        match Self::try_filled(width, height, color) {
            Ok(fb) => fb,
            Err(e) => panic!("{e}"),
        }
    }

    /// Like [`FrameBuffer::filled`], but an oversized or unallocatable frame
    /// is a [`BitmapError::LimitExceeded`].
    pub fn try_filled(width: u32, height: u32, color: Rgb565) -> Result<Self, BitmapError> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .filter(|&len| len <= isize::MAX as usize / size_of::<Rgb565>())
            .ok_or_else(|| {
                BitmapError::LimitExceeded(format!(
                    "{width}x{height} frame is too large to address"
                ))
            })?;
        let mut pixels = Vec::new();
        pixels.try_reserve_exact(len).map_err(|e| {
            BitmapError::LimitExceeded(format!("{width}x{height} frame cannot be allocated: {e}"))
        })?;
        pixels.resize(len, color);
        Ok(Self {
            width,
            height,
            scan: ScanDirection::default(),
            pixels,
        })
    }

    /// Logical width under the current scan direction.
    pub fn width(&self) -> u32 {
        if self.scan.is_transposed() {
            self.height
        } else {
            self.width
        }
    }

    /// Logical height under the current scan direction.
    pub fn height(&self) -> u32 {
        if self.scan.is_transposed() {
            self.width
        } else {
            self.height
        }
    }

    /// Memory dimensions, independent of scan direction.
    pub fn physical_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn scan_direction(&self) -> ScanDirection {
        self.scan
    }

    pub fn clear(&mut self, color: Rgb565) {
        self.pixels.fill(color);
    }

    /// Read back a pixel in logical coordinates.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb565> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Physical row-major pixel memory.
    pub fn pixels(&self) -> &[Rgb565] {
        &self.pixels
    }

    /// Pixel memory as the panel expects it on the bus: high byte first.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 2);
        for px in &self.pixels {
            out.extend_from_slice(&px.0.to_be_bytes());
        }
        out
    }

    /// Zero-copy 2D view of the physical memory.
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, Rgb565> {
        imgref::ImgRef::new(&self.pixels, self.width as usize, self.height as usize)
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let (col, row) = self.scan.to_physical(x, y, self.width, self.height);
        Some(row as usize * self.width as usize + col as usize)
    }
}

impl FrameSink for FrameBuffer {
    fn set_pixel(&mut self, x: u32, y: u32, color: Rgb565) {
        // Out-of-range writes are clipped.
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    fn set_scan_direction(&mut self, dir: ScanDirection) {
        self.scan = dir;
    }

    fn reset_scan_direction(&mut self) {
        self.scan = ScanDirection::default();
    }
}
