use crate::coords::Vec2;

use super::Color;

/// A single gradient stop.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Linear gradient definition in device pixel space.
///
/// Semantics:
/// - `start` and `end` are positions in the same coordinate space as geometry.
/// - Stops are straight-alpha colors; surfaces interpolate premultiplied.
/// - Outside the start..end range the edge stops are extended (clamp).
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>) -> Self {
        Self { start, end, stops }
    }

    /// Returns true when the gradient definition is structurally usable:
    /// finite points that differ, at least two finite stops in
    /// non-decreasing order inside [0, 1].
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.stops.len() >= 2
            && self.stops.iter().all(|s| s.t.is_finite() && (0.0..=1.0).contains(&s.t))
            && self.stops.windows(2).all(|w| w[0].t <= w[1].t)
            && (self.end.x != self.start.x || self.end.y != self.start.y)
    }
}
