use super::Color;

/// Solid fill for a path.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct FillStyle {
    pub color: Color,
}

impl FillStyle {
    #[inline]
    pub const fn new(color: Color) -> Self {
        Self { color }
    }
}

/// On/off dash intervals for a stroke, in device pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Dash {
    pub on: f32,
    pub off: f32,
}

impl Dash {
    /// Returns a dash only when both intervals are positive.
    #[inline]
    pub fn new(on: f32, off: f32) -> Option<Self> {
        (on > 0.0 && off > 0.0).then_some(Self { on, off })
    }
}

/// Stroke centered on a path.
///
/// `width` is the full stroke width as the surface should draw it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StrokeStyle {
    pub width: f32,
    pub color: Color,
    pub dash: Option<Dash>,
}

impl StrokeStyle {
    #[inline]
    pub const fn new(width: f32, color: Color, dash: Option<Dash>) -> Self {
        Self { width, color, dash }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_requires_both_intervals() {
        assert!(Dash::new(4.0, 2.0).is_some());
        assert!(Dash::new(0.0, 2.0).is_none());
        assert!(Dash::new(4.0, -1.0).is_none());
    }
}
