/// 16-bit panel color: red in bits 15–11, green in 10–5, blue in 4–0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Rgb565(pub u16);

impl Rgb565 {
    pub const BLACK: Self = Self(0x0000);
    pub const WHITE: Self = Self(0xFFFF);
    pub const RED: Self = Self(0xF800);
    pub const GREEN: Self = Self(0x07E0);
    pub const BLUE: Self = Self(0x001F);

    /// Pack 8-bit channels, keeping the high 5/6/5 bits of each.
    pub const fn from_rgb888(r: u8, g: u8, b: u8) -> Self {
        let r = (r as u16 >> 3) << 11;
        let g = (g as u16 >> 2) << 5;
        let b = b as u16 >> 3;
        Self(r | g | b)
    }

    /// Raw 5-6-5 value.
    pub const fn into_inner(self) -> u16 {
        self.0
    }

    /// Channels widened back to 8 bits (low bits zero).
    pub const fn to_rgb888(self) -> (u8, u8, u8) {
        let r = ((self.0 >> 11) & 0x1F) as u8;
        let g = ((self.0 >> 5) & 0x3F) as u8;
        let b = (self.0 & 0x1F) as u8;
        (r << 3, g << 2, b << 3)
    }
}

impl From<u16> for Rgb565 {
    fn from(v: u16) -> Self {
        Self(v)
    }
}

impl From<Rgb565> for u16 {
    fn from(c: Rgb565) -> Self {
        c.0
    }
}

impl From<PixelSample> for Rgb565 {
    fn from(s: PixelSample) -> Self {
        Self::from_rgb888(s.red, s.green, s.blue)
    }
}

#[cfg(feature = "rgb")]
impl From<rgb::RGB8> for Rgb565 {
    fn from(px: rgb::RGB8) -> Self {
        Self::from_rgb888(px.r, px.g, px.b)
    }
}

/// Alpha is dropped; the panel has no transparency.
#[cfg(feature = "rgb")]
impl From<rgb::RGBA8> for Rgb565 {
    fn from(px: rgb::RGBA8) -> Self {
        Self::from_rgb888(px.r, px.g, px.b)
    }
}

#[cfg(feature = "rgb")]
impl From<Rgb565> for rgb::RGB8 {
    fn from(c: Rgb565) -> Self {
        let (r, g, b) = c.to_rgb888();
        rgb::RGB8 { r, g, b }
    }
}

/// One pixel as stored on disk: blue, green, red, then reserved/alpha.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PixelSample {
    pub blue: u8,
    pub green: u8,
    pub red: u8,
    pub reserved: u8,
}

impl PixelSample {
    /// Build a sample from however many raw bytes were read.
    ///
    /// Missing channels stay zero and bytes past the fourth are ignored, so a
    /// 16-bit or 8-bit pixel yields a sample without failing.
    pub fn from_bytes(raw: &[u8]) -> Self {
        let mut bgra = [0u8; 4];
        let n = raw.len().min(4);
        bgra[..n].copy_from_slice(&raw[..n]);
        Self {
            blue: bgra[0],
            green: bgra[1],
            red: bgra[2],
            reserved: bgra[3],
        }
    }

    pub fn to_rgb565(self) -> Rgb565 {
        Rgb565::from(self)
    }
}
