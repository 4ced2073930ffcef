//! Pure shimmer math: highlight width, gradient stops and gradient line.

use sheen_engine::coords::{Rect, Size, Vec2};
use sheen_engine::paint::{Color, ColorStop, LinearGradient};

use super::config::ShimmerConfig;

/// Width in whole pixels of the bitmap that carries one diagonal highlight.
///
/// `trunc(view_w / 2 * fraction / cos|a| + view_h * tan|a|)`. The sign of the
/// angle only changes the gradient direction, never the width.
pub fn compute_mask_width(view_w: f32, view_h: f32, angle_deg: i32, fraction: f32) -> i32 {
    let angle = f64::from(angle_deg.unsigned_abs()).to_radians();
    let half = f64::from(view_w) / 2.0 * f64::from(fraction);
    (half / angle.cos() + f64::from(view_h) * angle.tan()) as i32
}

/// Four stop positions: transparent edge, color band start, color band end,
/// transparent edge.
pub fn compute_color_stops(center_width: f32) -> [f32; 4] {
    [0.0, 0.5 - center_width / 2.0, 0.5 + center_width / 2.0, 1.0]
}

/// Start and end point of the highlight gradient in mask-local coordinates.
///
/// Positive angles anchor the line at the bottom-left corner, negative ones at
/// the top-left corner. The line runs `view_w / 2 * fraction` along the angle.
pub fn gradient_line(view_w: f32, view_h: f32, angle_deg: i32, fraction: f32) -> (Vec2, Vec2) {
    let start = if angle_deg >= 0 { Vec2::new(0.0, view_h) } else { Vec2::zero() };
    let len = view_w / 2.0 * fraction;
    let angle = (angle_deg as f32).to_radians();
    (start, start + Vec2::from_angle(angle, len))
}

/// `color` with its alpha zeroed, used for the outer stops so the edges fade
/// through the shimmer hue rather than through black.
#[inline]
pub fn transparent_of(color: Color) -> Color {
    color.with_alpha(0)
}

/// Rect of the mask bitmap: `(0, 0, mask_width, view_h)`.
pub fn mask_rect(size: Size, config: &ShimmerConfig) -> Rect {
    let w = compute_mask_width(size.width, size.height, config.angle_deg, config.mask_width);
    Rect::new(0.0, 0.0, w.max(0) as f32, size.height)
}

/// Highlight gradient for a view of `size`.
pub fn shimmer_gradient(size: Size, config: &ShimmerConfig) -> LinearGradient {
    let (start, end) = gradient_line(size.width, size.height, config.angle_deg, config.mask_width);
    let edge = transparent_of(config.color);
    let [t0, t1, t2, t3] = compute_color_stops(config.gradient_center_width);

    let stops = vec![
        ColorStop::new(t0, edge),
        ColorStop::new(t1, config.color),
        ColorStop::new(t2, config.color),
        ColorStop::new(t3, edge),
    ];
    LinearGradient::new(start, end, stops)
}
