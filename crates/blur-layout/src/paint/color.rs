use std::fmt;

/// Packed 32-bit straight-alpha color, `0xAARRGGBB`.
///
/// This is the representation host style systems hand out and the one blur
/// primitives accept, so it is kept packed rather than split into floats.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct ColorArgb(pub u32);

impl ColorArgb {
    pub const TRANSPARENT: Self = Self(0x0000_0000);

    #[inline]
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Returns this color with only the alpha channel replaced.
    #[inline]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self((self.0 & 0x00FF_FFFF) | ((alpha as u32) << 24))
    }

    /// Straight-alpha `f32` components in `[0, 1]`, ordered `(r, g, b, a)`.
    #[inline]
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        (
            self.red() as f32 / 255.0,
            self.green() as f32 / 255.0,
            self.blue() as f32 / 255.0,
            self.alpha() as f32 / 255.0,
        )
    }
}

impl From<u32> for ColorArgb {
    fn from(argb: u32) -> Self {
        Self(argb)
    }
}

impl From<ColorArgb> for u32 {
    fn from(c: ColorArgb) -> Self {
        c.0
    }
}

impl fmt::Display for ColorArgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08x}", self.0)
    }
}
