/// Straight-alpha sRGB color packed as `0xAARRGGBB`.
///
/// This is the representation hosts hand over in attribute bags, so the
/// packed value is kept verbatim. `0x00000000` is a legal value here; whether
/// it means "disabled" is decided by the style that consumes it.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Color(u32);

impl Color {
    pub const TRANSPARENT: Color = Color(0);
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const WHITE: Color = Color(0xFFFF_FFFF);

    #[inline]
    pub const fn from_argb(argb: u32) -> Self {
        Self(argb)
    }

    #[inline]
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Opaque color from RGB bytes.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::argb(0xFF, r, g, b)
    }

    #[inline]
    pub const fn to_argb(self) -> u32 {
        self.0
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

    /// Same RGB, different alpha.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::argb(a, self.red(), self.green(), self.blue())
    }

    /// True for the all-zero packed value.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_unpack_from_argb() {
        let c = Color::from_argb(0x80FF_2010);
        assert_eq!((c.alpha(), c.red(), c.green(), c.blue()), (0x80, 0xFF, 0x20, 0x10));
    }

    #[test]
    fn with_alpha_keeps_rgb() {
        let c = Color::rgb(10, 20, 30).with_alpha(0);
        assert_eq!(c.to_argb(), 0x000A_141E);
        assert!(!c.is_zero());
    }
}
