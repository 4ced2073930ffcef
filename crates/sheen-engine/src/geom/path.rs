use std::f32::consts::{FRAC_PI_2, PI};

use crate::coords::{Rect, Vec2};

/// Tolerance used when deciding whether two path points coincide.
const POINT_EPS: f32 = 1e-3;

/// Elliptical arc segment.
///
/// Angles are in radians, measured clockwise on screen from +X. A positive
/// `sweep_angle` traces the arc clockwise.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Arc {
    pub center: Vec2,
    pub radii: Vec2,
    pub start_angle: f32,
    pub sweep_angle: f32,
}

impl Arc {
    #[inline]
    pub fn point_at(&self, angle: f32) -> Vec2 {
        Vec2::new(
            self.center.x + angle.cos() * self.radii.x,
            self.center.y + angle.sin() * self.radii.y,
        )
    }

    #[inline]
    pub fn start_point(&self) -> Vec2 {
        self.point_at(self.start_angle)
    }

    #[inline]
    pub fn end_point(&self) -> Vec2 {
        self.point_at(self.start_angle + self.sweep_angle)
    }

    /// True when both radii equal `r` within `eps`.
    #[inline]
    pub fn is_circular(&self, r: f32, eps: f32) -> bool {
        (self.radii.x - r).abs() <= eps && (self.radii.y - r).abs() <= eps
    }

    /// Extends `(min, max)` with the arc's endpoints and any axis extremes it crosses.
    fn extend_bounds(&self, mut min: Vec2, mut max: Vec2) -> (Vec2, Vec2) {
        let a0 = self.start_angle.min(self.start_angle + self.sweep_angle);
        let a1 = self.start_angle.max(self.start_angle + self.sweep_angle);

        for p in [self.start_point(), self.end_point()] {
            min = min.min(p);
            max = max.max(p);
        }

        let first = (a0 / FRAC_PI_2).ceil() as i32;
        let last = (a1 / FRAC_PI_2).floor() as i32;
        for k in first..=last {
            let p = self.point_at(k as f32 * FRAC_PI_2);
            min = min.min(p);
            max = max.max(p);
        }

        (min, max)
    }
}

/// A single path segment.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathVerb {
    MoveTo(Vec2),
    LineTo(Vec2),
    ArcTo(Arc),
    Close,
}

/// Closed-contour path made of lines and arcs.
///
/// Built once per geometry change and handed to the drawing surface by
/// reference; surfaces flatten or replay the verbs however they like.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    verbs: Vec<PathVerb>,
    current: Option<Vec2>,
    contour_start: Option<Vec2>,
}

impl Path {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a clockwise rounded rectangle starting at the top-left corner.
    ///
    /// `radii` holds x/y pairs in clockwise order: top-left, top-right,
    /// bottom-right, bottom-left. Radii that do not fit are scaled down
    /// uniformly so adjacent arcs never overlap. Empty, zero-area or
    /// non-finite rectangles produce an empty path.
    pub fn rounded_rect(rect: Rect, radii: &[f32; 8]) -> Self {
        let mut path = Path::new();
        if !rect.is_finite() || rect.is_empty() {
            return path;
        }

        let [tl_x, tl_y, tr_x, tr_y, br_x, br_y, bl_x, bl_y] = fit_radii(rect, radii);
        let Vec2 { x: l, y: t } = rect.min();
        let Vec2 { x: r, y: b } = rect.max();

        path.move_to(Vec2::new(l + tl_x, t));
        path.line_to(Vec2::new(r - tr_x, t));
        path.corner(Vec2::new(r - tr_x, t + tr_y), Vec2::new(tr_x, tr_y), 1.5 * PI);
        path.line_to(Vec2::new(r, b - br_y));
        path.corner(Vec2::new(r - br_x, b - br_y), Vec2::new(br_x, br_y), 0.0);
        path.line_to(Vec2::new(l + bl_x, b));
        path.corner(Vec2::new(l + bl_x, b - bl_y), Vec2::new(bl_x, bl_y), FRAC_PI_2);
        path.line_to(Vec2::new(l, t + tl_y));
        path.corner(Vec2::new(l + tl_x, t + tl_y), Vec2::new(tl_x, tl_y), PI);
        path.close();

        path
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    #[inline]
    pub fn verbs(&self) -> &[PathVerb] {
        &self.verbs
    }

    pub fn arcs(&self) -> impl Iterator<Item = &Arc> + '_ {
        self.verbs.iter().filter_map(|v| match v {
            PathVerb::ArcTo(arc) => Some(arc),
            _ => None,
        })
    }

    /// True when the last contour ends with `Close`.
    #[inline]
    pub fn is_closed(&self) -> bool {
        matches!(self.verbs.last(), Some(PathVerb::Close))
    }

    pub fn move_to(&mut self, p: Vec2) {
        self.verbs.push(PathVerb::MoveTo(p));
        self.current = Some(p);
        self.contour_start = Some(p);
    }

    /// Adds a line; degenerate segments are dropped.
    pub fn line_to(&mut self, p: Vec2) {
        match self.current {
            None => self.move_to(p),
            Some(cur) if cur.approx_eq(p, POINT_EPS) => {}
            Some(_) => {
                self.verbs.push(PathVerb::LineTo(p));
                self.current = Some(p);
            }
        }
    }

    /// Adds an arc, connecting the current point to the arc start with a line.
    pub fn arc_to(&mut self, arc: Arc) {
        self.line_to(arc.start_point());
        self.verbs.push(PathVerb::ArcTo(arc));
        self.current = Some(arc.end_point());
    }

    pub fn close(&mut self) {
        if self.current.is_some() && !self.is_closed() {
            self.verbs.push(PathVerb::Close);
            self.current = self.contour_start;
        }
    }

    /// Tight bounding box, or `None` for an empty path.
    pub fn bounds(&self) -> Option<Rect> {
        let mut acc: Option<(Vec2, Vec2)> = None;

        for verb in &self.verbs {
            acc = match (*verb, acc) {
                (PathVerb::MoveTo(p) | PathVerb::LineTo(p), None) => Some((p, p)),
                (PathVerb::MoveTo(p) | PathVerb::LineTo(p), Some((min, max))) => {
                    Some((min.min(p), max.max(p)))
                }
                (PathVerb::ArcTo(arc), None) => {
                    let p = arc.start_point();
                    Some(arc.extend_bounds(p, p))
                }
                (PathVerb::ArcTo(arc), Some((min, max))) => Some(arc.extend_bounds(min, max)),
                (PathVerb::Close, acc) => acc,
            };
        }

        acc.map(|(min, max)| Rect::from_min_max(min, max))
    }

    fn corner(&mut self, center: Vec2, radii: Vec2, start_angle: f32) {
        if radii.x > 0.0 && radii.y > 0.0 {
            self.arc_to(Arc { center, radii, start_angle, sweep_angle: FRAC_PI_2 });
        }
    }
}

/// Sanitizes corner radii and scales them so opposite arcs fit the rectangle.
///
/// A corner with one zero radius becomes square. When the radii along a side
/// add up to more than the side length, every radius is multiplied by the
/// smallest `side / sum` ratio.
pub fn fit_radii(rect: Rect, radii: &[f32; 8]) -> [f32; 8] {
    let mut r = radii.map(|v| if v.is_finite() && v > 0.0 { v } else { 0.0 });

    for corner in r.chunks_exact_mut(2) {
        if corner[0] == 0.0 || corner[1] == 0.0 {
            corner[0] = 0.0;
            corner[1] = 0.0;
        }
    }

    let w = rect.width();
    let h = rect.height();
    let sides = [
        (r[0] + r[2], w), // top
        (r[3] + r[5], h), // right
        (r[4] + r[6], w), // bottom
        (r[7] + r[1], h), // left
    ];

    let scale = sides
        .iter()
        .filter(|&&(sum, side)| sum > side && sum > 0.0)
        .map(|&(sum, side)| side / sum)
        .fold(1.0f32, f32::min);

    if scale < 1.0 {
        for v in &mut r {
            *v *= scale;
        }
    }

    r
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(r: f32) -> [f32; 8] { [r; 8] }

    // ── rounded_rect ──────────────────────────────────────────────────────

    #[test]
    fn uniform_rounded_rect_has_four_arcs() {
        let path = Path::rounded_rect(Rect::new(0.0, 0.0, 200.0, 100.0), &uniform(20.0));
        assert!(path.is_closed());
        assert_eq!(path.arcs().count(), 4);
        assert!(path.arcs().all(|a| a.is_circular(20.0, 1e-4)));
    }

    #[test]
    fn rounded_rect_starts_at_top_left_and_winds_clockwise() {
        let path = Path::rounded_rect(Rect::new(0.0, 0.0, 200.0, 100.0), &uniform(20.0));
        assert_eq!(path.verbs()[0], PathVerb::MoveTo(Vec2::new(20.0, 0.0)));
        assert_eq!(path.verbs()[1], PathVerb::LineTo(Vec2::new(180.0, 0.0)));
        let centers: Vec<Vec2> = path.arcs().map(|a| a.center).collect();
        assert_eq!(
            centers,
            vec![
                Vec2::new(180.0, 20.0),
                Vec2::new(180.0, 80.0),
                Vec2::new(20.0, 80.0),
                Vec2::new(20.0, 20.0),
            ]
        );
        assert!(path.arcs().all(|a| a.sweep_angle > 0.0));
    }

    #[test]
    fn square_rect_has_no_arcs() {
        let path = Path::rounded_rect(Rect::new(0.0, 0.0, 10.0, 10.0), &uniform(0.0));
        assert_eq!(path.arcs().count(), 0);
        // move + 3 lines + closing line back to the start + close
        assert_eq!(path.verbs().len(), 6);
    }

    #[test]
    fn empty_rect_gives_empty_path() {
        assert!(Path::rounded_rect(Rect::new(0.0, 0.0, 0.0, 50.0), &uniform(4.0)).is_empty());
        assert!(Path::rounded_rect(Rect::new(0.0, 0.0, -10.0, 50.0), &uniform(4.0)).is_empty());
        assert!(Path::rounded_rect(Rect::new(0.0, 0.0, f32::NAN, 5.0), &uniform(4.0)).is_empty());
    }

    // ── bounds ────────────────────────────────────────────────────────────

    #[test]
    fn bounds_of_rounded_rect_match_rect() {
        let rect = Rect::new(0.0, 0.0, 200.0, 100.0);
        let path = Path::rounded_rect(rect, &uniform(20.0));
        assert!(path.bounds().unwrap().approx_eq(rect, 1e-3));
    }

    #[test]
    fn bounds_of_offset_rect() {
        let rect = Rect::new(15.0, -5.0, 40.0, 30.0);
        let path = Path::rounded_rect(rect, &[3.0, 3.0, 0.0, 0.0, 9.0, 9.0, 1.0, 1.0]);
        assert!(path.bounds().unwrap().approx_eq(rect, 1e-3));
    }

    #[test]
    fn empty_path_has_no_bounds() {
        assert!(Path::new().bounds().is_none());
    }

    // ── fit_radii ─────────────────────────────────────────────────────────

    #[test]
    fn oversized_radii_scale_down_uniformly() {
        let r = fit_radii(Rect::new(0.0, 0.0, 100.0, 40.0), &uniform(40.0));
        // left/right sides: 80 > 40 → scale 0.5
        assert!(r.iter().all(|v| (*v - 20.0).abs() < 1e-4));
    }

    #[test]
    fn half_zero_corner_becomes_square() {
        let r = fit_radii(Rect::new(0.0, 0.0, 100.0, 100.0), &[5.0, 0.0, 6.0, 6.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(&r[..2], &[0.0, 0.0]);
        assert_eq!(&r[2..4], &[6.0, 6.0]);
    }

    #[test]
    fn negative_radii_are_ignored() {
        let r = fit_radii(Rect::new(0.0, 0.0, 10.0, 10.0), &[-1.0; 8]);
        assert_eq!(r, [0.0; 8]);
    }
}
