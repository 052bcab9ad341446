//! embedded-graphics integration.
//!
//! [`FrameBuffer`] is a `DrawTarget`, so text and shapes from the
//! embedded-graphics ecosystem can be drawn around a loaded bitmap.
//! [`DrawTargetSink`] goes the other way and lets the loader write straight
//! into any `Rgb565` draw target, such as a panel driver.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb565 as EgRgb565;
use embedded_graphics::pixelcolor::raw::{RawData, RawU16};
use embedded_graphics::prelude::*;

use crate::framebuffer::FrameBuffer;
use crate::pixel::Rgb565;
use crate::sink::FrameSink;

impl From<Rgb565> for EgRgb565 {
    fn from(c: Rgb565) -> Self {
        EgRgb565::from(RawU16::new(c.0))
    }
}

impl From<EgRgb565> for Rgb565 {
    fn from(c: EgRgb565) -> Self {
        Rgb565(RawU16::from(c).into_inner())
    }
}

impl DrawTarget for FrameBuffer {
    type Color = EgRgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }
            self.set_pixel(point.x as u32, point.y as u32, color.into());
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        FrameBuffer::clear(self, color.into());
        Ok(())
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        // Swapped for transposed scan directions.
        Size::new(self.width(), self.height())
    }
}

/// Adapts a `DrawTarget<Color = Rgb565>` into a [`FrameSink`].
///
/// `set_pixel` cannot fail, so draw errors are logged and dropped. The most
/// recent one is kept for the caller to inspect.
pub struct DrawTargetSink<D: DrawTarget<Color = EgRgb565>> {
    target: D,
    last_error: Option<D::Error>,
}

impl<D: DrawTarget<Color = EgRgb565>> DrawTargetSink<D> {
    pub fn new(target: D) -> Self {
        Self {
            target,
            last_error: None,
        }
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    /// Take the last draw error, if any.
    pub fn take_error(&mut self) -> Option<D::Error> {
        self.last_error.take()
    }

    pub fn into_inner(self) -> D {
        self.target
    }
}

impl<D> FrameSink for DrawTargetSink<D>
where
    D: DrawTarget<Color = EgRgb565>,
    D::Error: core::fmt::Debug,
{
    fn set_pixel(&mut self, x: u32, y: u32, color: Rgb565) {
        let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) else {
            return;
        };
        let pixel = Pixel(Point::new(x, y), color.into());
        if let Err(e) = self.target.draw_iter(core::iter::once(pixel)) {
            log::warn!("draw target rejected pixel ({x}, {y}): {e:?}");
            self.last_error = Some(e);
        }
    }
}
