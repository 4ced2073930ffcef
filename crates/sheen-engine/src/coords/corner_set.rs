/// Per-corner radii for a rounded view (device pixels).
///
/// Corners are named by their logical position; right-to-left mirroring is
/// applied later, when the radii are laid out on a path.
///
/// `uniform`, when positive, takes precedence over the four individual
/// values. Negative and non-finite inputs are treated as zero.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerSet {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_left: f32,
    pub bottom_right: f32,
    pub uniform: f32,
}

impl CornerSet {
    #[inline]
    pub fn new(top_left: f32, top_right: f32, bottom_left: f32, bottom_right: f32) -> Self {
        Self {
            top_left: sanitize(top_left),
            top_right: sanitize(top_right),
            bottom_left: sanitize(bottom_left),
            bottom_right: sanitize(bottom_right),
            uniform: 0.0,
        }
    }

    /// Uniform radius on all four corners.
    #[inline]
    pub fn all(r: f32) -> Self {
        Self::zero().with_uniform(r)
    }

    /// No rounding.
    #[inline]
    pub const fn zero() -> Self {
        Self { top_left: 0.0, top_right: 0.0, bottom_left: 0.0, bottom_right: 0.0, uniform: 0.0 }
    }

    /// Sets the uniform override, keeping the individual values underneath.
    #[inline]
    pub fn with_uniform(mut self, r: f32) -> Self {
        self.uniform = sanitize(r);
        self
    }

    #[inline]
    pub fn has_uniform(self) -> bool {
        sanitize(self.uniform) > 0.0
    }

    /// Resolves the uniform override into the four individual values.
    ///
    /// The result has `uniform == 0` and every radius `>= 0`.
    pub fn effective(self) -> Self {
        if self.has_uniform() {
            let r = self.uniform;
            Self { top_left: r, top_right: r, bottom_left: r, bottom_right: r, uniform: 0.0 }
        } else {
            Self::new(self.top_left, self.top_right, self.bottom_left, self.bottom_right)
        }
    }

    /// Swaps start/end corners (top-left with top-right, bottom-left with bottom-right).
    #[inline]
    pub fn mirrored(self) -> Self {
        Self {
            top_left: self.top_right,
            top_right: self.top_left,
            bottom_left: self.bottom_right,
            bottom_right: self.bottom_left,
            uniform: self.uniform,
        }
    }

    /// True when no corner is rounded.
    pub fn is_square(self) -> bool {
        let e = self.effective();
        e.top_left == 0.0 && e.top_right == 0.0 && e.bottom_left == 0.0 && e.bottom_right == 0.0
    }
}

#[inline]
fn sanitize(r: f32) -> f32 {
    if r.is_finite() && r > 0.0 { r } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_radii_clamp_to_zero() {
        let c = CornerSet::new(-4.0, 3.0, f32::NAN, -0.5);
        assert_eq!(c, CornerSet::new(0.0, 3.0, 0.0, 0.0));
    }

    #[test]
    fn uniform_overrides_individual_values() {
        let c = CornerSet::new(100.0, 1.0, 0.0, 50.0).with_uniform(8.0);
        assert_eq!(c.effective(), CornerSet::new(8.0, 8.0, 8.0, 8.0));
    }

    #[test]
    fn zero_uniform_keeps_individual_values() {
        let c = CornerSet::new(1.0, 2.0, 3.0, 4.0).with_uniform(0.0);
        assert_eq!(c.effective(), CornerSet::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn mirrored_swaps_start_and_end() {
        let c = CornerSet::new(1.0, 2.0, 3.0, 4.0).mirrored();
        assert_eq!(c, CornerSet::new(2.0, 1.0, 4.0, 3.0));
    }

    #[test]
    fn square_detection() {
        assert!(CornerSet::zero().is_square());
        assert!(!CornerSet::all(2.0).is_square());
        assert!(!CornerSet::new(0.0, 0.0, 0.0, 1.0).is_square());
    }
}
