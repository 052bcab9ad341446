//! The pixel-addressable display buffer the loader writes into.

use core::ops::{Deref, DerefMut};

use crate::pixel::Rgb565;

/// Order in which the panel controller walks its frame memory.
///
/// Names read "horizontal then vertical" for the `L2r*`/`R2l*` family and
/// "vertical then horizontal" for the `U2d*`/`D2u*` family. The latter
/// walks columns first, so it swaps the logical width and height.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScanDirection {
    /// Left to right, then top to bottom.
    #[default]
    L2rU2d,
    /// Left to right, then bottom to top.
    L2rD2u,
    /// Right to left, then top to bottom.
    R2lU2d,
    /// Right to left, then bottom to top.
    R2lD2u,
    /// Top to bottom, then left to right.
    U2dL2r,
    /// Top to bottom, then right to left.
    U2dR2l,
    /// Bottom to top, then left to right.
    D2uL2r,
    /// Bottom to top, then right to left.
    D2uR2l,
}

impl ScanDirection {
    pub const ALL: [ScanDirection; 8] = [
        Self::L2rU2d,
        Self::L2rD2u,
        Self::R2lU2d,
        Self::R2lD2u,
        Self::U2dL2r,
        Self::U2dR2l,
        Self::D2uL2r,
        Self::D2uR2l,
    ];

    /// Columns are walked before rows; logical width and height swap.
    pub fn is_transposed(self) -> bool {
        matches!(
            self,
            Self::U2dL2r | Self::U2dR2l | Self::D2uL2r | Self::D2uR2l
        )
    }

    /// Horizontal travel is right to left.
    pub fn mirrors_x(self) -> bool {
        matches!(
            self,
            Self::R2lU2d | Self::R2lD2u | Self::U2dR2l | Self::D2uR2l
        )
    }

    /// Vertical travel is bottom to top.
    pub fn mirrors_y(self) -> bool {
        matches!(
            self,
            Self::L2rD2u | Self::R2lD2u | Self::D2uL2r | Self::D2uR2l
        )
    }

    /// Map a logical coordinate to physical `(column, row)` in a buffer of
    /// `phys_w` x `phys_h`. The caller has already bounds-checked `x`/`y`
    /// against the logical size.
    pub fn to_physical(self, x: u32, y: u32, phys_w: u32, phys_h: u32) -> (u32, u32) {
        let (mut col, mut row) = if self.is_transposed() { (y, x) } else { (x, y) };
        if self.mirrors_x() {
            col = phys_w - 1 - col;
        }
        if self.mirrors_y() {
            row = phys_h - 1 - row;
        }
        (col, row)
    }
}

/// A display buffer that accepts one pixel at a time.
///
/// Coordinates have their origin at the top-left. Implementations decide
/// what to do with out-of-range writes; [`crate::FrameBuffer`] clips them.
pub trait FrameSink {
    /// Write one pixel in the sink's native 5-6-5 encoding.
    fn set_pixel(&mut self, x: u32, y: u32, color: Rgb565);

    /// Switch to a non-default traversal orientation.
    fn set_scan_direction(&mut self, _dir: ScanDirection) {}

    /// Restore the default traversal orientation.
    fn reset_scan_direction(&mut self) {}
}

impl<S: FrameSink + ?Sized> FrameSink for &mut S {
    fn set_pixel(&mut self, x: u32, y: u32, color: Rgb565) {
        (**self).set_pixel(x, y, color);
    }

    fn set_scan_direction(&mut self, dir: ScanDirection) {
        (**self).set_scan_direction(dir);
    }

    fn reset_scan_direction(&mut self) {
        (**self).reset_scan_direction();
    }
}

/// Holds a sink for the length of one load and restores its default
/// orientation exactly once when dropped.
pub(crate) struct ScanScope<'a, S: FrameSink + ?Sized> {
    sink: &'a mut S,
}

impl<'a, S: FrameSink + ?Sized> ScanScope<'a, S> {
    pub(crate) fn open(sink: &'a mut S, dir: Option<ScanDirection>) -> Self {
        if let Some(dir) = dir {
            log::debug!("scan scope opened with {dir:?}");
            sink.set_scan_direction(dir);
        }
        Self { sink }
    }
}

impl<S: FrameSink + ?Sized> Deref for ScanScope<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        &*self.sink
    }
}

impl<S: FrameSink + ?Sized> DerefMut for ScanScope<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        &mut *self.sink
    }
}

impl<S: FrameSink + ?Sized> Drop for ScanScope<'_, S> {
    fn drop(&mut self) {
        log::debug!("scan scope closed, restoring default scan direction");
        self.sink.reset_scan_direction();
    }
}
