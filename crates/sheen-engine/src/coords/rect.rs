use super::Vec2;

/// Axis-aligned rectangle in device pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Builds a rectangle from the host's `left, top, right, bottom` edges.
    #[inline]
    pub fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Rect::new(left, top, right - left, bottom - top)
    }

    #[inline]
    pub fn from_min_max(min: Vec2, max: Vec2) -> Self {
        Rect::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y + self.size.y)
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Same size, origin moved to `(0, 0)`.
    #[inline]
    pub fn at_origin(self) -> Self {
        Rect::new(0.0, 0.0, self.size.x, self.size.y)
    }

    /// Component-wise comparison with an absolute tolerance.
    pub fn approx_eq(self, other: Rect, eps: f32) -> bool {
        self.origin.approx_eq(other.origin, eps) && self.size.approx_eq(other.size, eps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── constructors ──────────────────────────────────────────────────────

    #[test]
    fn from_ltrb_uses_edges() {
        assert_eq!(Rect::from_ltrb(10.0, 20.0, 210.0, 120.0), r(10.0, 20.0, 200.0, 100.0));
    }

    #[test]
    fn at_origin_keeps_size() {
        assert_eq!(r(7.0, 9.0, 30.0, 40.0).at_origin(), r(0.0, 0.0, 30.0, 40.0));
    }

    #[test]
    fn from_min_max_roundtrips_edges() {
        let rect = Rect::from_min_max(Vec2::new(-5.0, 2.0), Vec2::new(5.0, 12.0));
        assert_eq!(rect.min(), Vec2::new(-5.0, 2.0));
        assert_eq!(rect.max(), Vec2::new(5.0, 12.0));
    }

    // ── is_empty ──────────────────────────────────────────────────────────

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(r(0.0, 0.0, 5.0, 0.0).is_empty());
    }

    #[test]
    fn is_empty_positive_size() {
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
