/// Host view dimensions in device pixels.
///
/// Delivered by the layout signal. A zero width means the host has not laid
/// the view out yet.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Both dimensions are finite and strictly positive.
    #[inline]
    pub fn is_positive(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Width truncated to whole pixels, the way the host reports it.
    #[inline]
    pub fn width_px(self) -> i32 {
        self.width as i32
    }

    /// Height truncated to whole pixels.
    #[inline]
    pub fn height_px(self) -> i32 {
        self.height as i32
    }
}
