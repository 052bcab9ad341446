use crate::error::BitmapError;

/// Bounds on the dimensions a bitmap header may declare.
///
/// The pixel walk trusts the header, so a load without limits visits every
/// declared position even when the file holds no pixel data. Unset fields
/// are unbounded.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Bound on `width * height`.
    pub max_pixels: Option<u64>,
}

impl Limits {
    /// Nothing wider or taller than a `width` x `height` panel.
    pub fn for_panel(width: u32, height: u32) -> Self {
        Self {
            max_width: Some(u64::from(width)),
            max_height: Some(u64::from(height)),
            max_pixels: None,
        }
    }

    /// Reject a `width` x `height` bitmap if any bound is exceeded. The error
    /// names the first dimension found over its bound.
    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), BitmapError> {
        let declared = [
            ("width", u64::from(width), self.max_width),
            ("height", u64::from(height), self.max_height),
            ("pixel count", u64::from(width) * u64::from(height), self.max_pixels),
        ];
        for (dimension, value, bound) in declared {
            if let Some(bound) = bound.filter(|&bound| value > bound) {
                return Err(BitmapError::LimitExceeded(format!(
                    "{width}x{height} bitmap: {dimension} {value} is over the bound of {bound}"
                )));
            }
        }
        Ok(())
    }
}
