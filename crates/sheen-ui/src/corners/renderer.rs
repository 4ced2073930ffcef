use log::{debug, trace};

use sheen_engine::coords::{CornerSet, Rect};
use sheen_engine::geom::Path;
use sheen_engine::paint::{Color, Dash, FillStyle, StrokeStyle};
use sheen_engine::surface::{DrawingSurface, SurfaceResult};

use super::geometry::{compute_path, LayoutDirection};

/// Border configuration as the widget sets it.
///
/// `width` is the visible border thickness; the stroke handed to the surface
/// is twice as wide because half of it falls outside the clip.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

/// Rounded clip, fill and border for one view.
///
/// Paint order per frame:
///
/// ```text
/// begin_clip → draw_fill → <host content> → draw_stroke → end_clip
/// ```
///
/// Every draw operation is best-effort: it is a no-op when its style is
/// disabled or no geometry has been computed yet, and surface failures are
/// logged and swallowed so the host's frame always completes.
#[derive(Debug, Default)]
pub struct CornerRenderer {
    corners: CornerSet,
    direction: LayoutDirection,
    fill: Option<FillStyle>,
    border: Option<Border>,
    dash: Option<Dash>,

    bounds: Option<Rect>,
    path: Option<Path>,
    /// Corners or direction changed since `path` was built.
    path_dirty: bool,
    clip_active: bool,
}

impl CornerRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    // ── configuration ─────────────────────────────────────────────────────

    /// Replaces the corner radii. The path is rebuilt on the next layout
    /// signal, or lazily before the next clip if bounds are already known.
    pub fn set_corners(&mut self, corners: CornerSet) {
        if self.corners != corners {
            self.corners = corners;
            self.path_dirty = true;
        }
    }

    pub fn set_layout_direction(&mut self, direction: LayoutDirection) {
        if self.direction != direction {
            self.direction = direction;
            self.path_dirty = true;
        }
    }

    /// Sets the fill color; a packed value of exactly zero disables the fill.
    pub fn set_fill(&mut self, color: Color) {
        self.fill = (!color.is_zero()).then_some(FillStyle::new(color));
    }

    /// Sets the border; a width `<= 0` disables the border entirely.
    pub fn set_stroke(&mut self, width: f32, color: Color) {
        self.border = (width > 0.0).then_some(Border { width, color });
    }

    /// Sets the dash pattern; it applies only while both values are positive.
    pub fn set_dash(&mut self, dash_width: f32, dash_gap: f32) {
        self.dash = Dash::new(dash_width, dash_gap);
    }

    // ── layout signal ─────────────────────────────────────────────────────

    /// Host layout notification. Bounds are relative to the view, so only the
    /// size of `bounds` is kept.
    pub fn on_layout_changed(&mut self, changed: bool, bounds: Rect) {
        if !changed {
            return;
        }
        self.bounds = Some(bounds.at_origin());
        self.rebuild_path();
    }

    // ── queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn corners(&self) -> CornerSet {
        self.corners
    }

    #[inline]
    pub fn layout_direction(&self) -> LayoutDirection {
        self.direction
    }

    #[inline]
    pub fn fill(&self) -> Option<FillStyle> {
        self.fill
    }

    #[inline]
    pub fn border(&self) -> Option<Border> {
        self.border
    }

    /// Stroke as it is handed to the surface, if the border is enabled.
    pub fn stroke(&self) -> Option<StrokeStyle> {
        self.border
            .map(|b| StrokeStyle::new(b.width * 2.0, b.color, self.dash))
    }

    #[inline]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_ref()
    }

    #[inline]
    pub fn is_clip_active(&self) -> bool {
        self.clip_active
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Saves the surface and clips it to the rounded path.
    pub fn begin_clip(&mut self, surface: &mut dyn DrawingSurface) {
        if self.path_dirty && self.bounds.is_some() {
            self.rebuild_path();
        }
        let Some(path) = self.path.as_ref().filter(|p| !p.is_empty()) else { return; };

        if let Err(err) = surface.save() {
            trace!("corner clip: save failed: {err}");
            return;
        }
        self.clip_active = true;
        if let Err(err) = surface.clip_path(path) {
            trace!("corner clip: clip_path failed: {err}");
        }
    }

    pub fn draw_fill(&self, surface: &mut dyn DrawingSurface) {
        let Some(fill) = self.fill else { return; };
        self.best_effort("fill", |path| surface.fill_path(path, &fill));
    }

    pub fn draw_stroke(&self, surface: &mut dyn DrawingSurface) {
        let Some(stroke) = self.stroke() else { return; };
        self.best_effort("stroke", |path| surface.stroke_path(path, &stroke));
    }

    /// Restores the surface if a clip is active. Idempotent.
    pub fn end_clip(&mut self, surface: &mut dyn DrawingSurface) {
        if !self.clip_active {
            return;
        }
        self.clip_active = false;
        if let Err(err) = surface.restore() {
            trace!("corner clip: restore failed: {err}");
        }
    }

    // ── internal ──────────────────────────────────────────────────────────

    fn best_effort(&self, what: &str, op: impl FnOnce(&Path) -> SurfaceResult<()>) {
        let Some(path) = self.path.as_ref().filter(|p| !p.is_empty()) else { return; };
        if let Err(err) = op(path) {
            trace!("corner {what} failed: {err}");
        }
    }

    fn rebuild_path(&mut self) {
        let Some(bounds) = self.bounds else { return; };
        self.path = Some(compute_path(bounds, self.corners, self.direction));
        self.path_dirty = false;
        debug!(
            "corner path rebuilt: {}x{} {:?} {:?}",
            bounds.width(),
            bounds.height(),
            self.corners,
            self.direction
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheen_engine::surface::{DrawCmd, FailurePolicy, RecordingSurface, SurfaceOp};

    fn laid_out(corners: CornerSet) -> CornerRenderer {
        let mut r = CornerRenderer::new();
        r.set_corners(corners);
        r.on_layout_changed(true, Rect::from_ltrb(10.0, 20.0, 210.0, 120.0));
        r
    }

    fn frame(r: &mut CornerRenderer, s: &mut RecordingSurface) {
        r.begin_clip(s);
        r.draw_fill(s);
        r.draw_stroke(s);
        r.end_clip(s);
    }

    // ── geometry lifecycle ────────────────────────────────────────────────

    #[test]
    fn layout_builds_path_at_origin() {
        let r = laid_out(CornerSet::all(20.0));
        let bounds = r.path().unwrap().bounds().unwrap();
        assert!(bounds.approx_eq(Rect::new(0.0, 0.0, 200.0, 100.0), 1e-3));
    }

    #[test]
    fn unchanged_layout_keeps_geometry() {
        let mut r = laid_out(CornerSet::all(20.0));
        let before = r.path().cloned();
        r.on_layout_changed(false, Rect::new(0.0, 0.0, 5.0, 5.0));
        assert_eq!(r.path().cloned(), before);
    }

    #[test]
    fn corner_change_is_applied_before_next_clip() {
        let mut r = laid_out(CornerSet::all(20.0));
        r.set_corners(CornerSet::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(r.path().unwrap().arcs().count(), 4);

        let mut s = RecordingSurface::new();
        r.begin_clip(&mut s);
        assert_eq!(r.path().unwrap().arcs().count(), 0);
        r.end_clip(&mut s);
    }

    #[test]
    fn direction_change_mirrors_path() {
        let mut r = laid_out(CornerSet::new(30.0, 0.0, 0.0, 0.0));
        r.set_layout_direction(LayoutDirection::Rtl);
        r.on_layout_changed(true, Rect::new(0.0, 0.0, 200.0, 100.0));
        let arc = r.path().unwrap().arcs().next().copied().unwrap();
        assert_eq!(arc.center.x, 170.0);
    }

    // ── draw order ────────────────────────────────────────────────────────

    #[test]
    fn full_frame_issues_balanced_calls() {
        let mut r = laid_out(CornerSet::all(8.0));
        r.set_fill(Color::rgb(1, 2, 3));
        r.set_stroke(2.0, Color::BLACK);
        let mut s = RecordingSurface::new();
        frame(&mut r, &mut s);

        let ops: Vec<SurfaceOp> = s.items().iter().map(DrawCmd::op).collect();
        assert_eq!(
            ops,
            vec![SurfaceOp::Save, SurfaceOp::ClipPath, SurfaceOp::FillPath, SurfaceOp::StrokePath, SurfaceOp::Restore]
        );
        assert_eq!(s.depth(), 0);
        assert!(!r.is_clip_active());
    }

    #[test]
    fn nothing_drawn_before_layout() {
        let mut r = CornerRenderer::new();
        r.set_fill(Color::WHITE);
        r.set_stroke(1.0, Color::WHITE);
        let mut s = RecordingSurface::new();
        frame(&mut r, &mut s);
        assert!(s.items().is_empty());
    }

    #[test]
    fn end_clip_is_idempotent() {
        let mut r = laid_out(CornerSet::all(4.0));
        let mut s = RecordingSurface::new();
        r.begin_clip(&mut s);
        r.end_clip(&mut s);
        r.end_clip(&mut s);
        assert_eq!(s.count(SurfaceOp::Restore), 1);
    }

    // ── styles ────────────────────────────────────────────────────────────

    #[test]
    fn zero_fill_color_disables_fill() {
        let mut r = laid_out(CornerSet::all(4.0));
        r.set_fill(Color::rgb(9, 9, 9));
        r.set_fill(Color::TRANSPARENT);
        let mut s = RecordingSurface::new();
        r.draw_fill(&mut s);
        assert_eq!(s.count(SurfaceOp::FillPath), 0);
    }

    #[test]
    fn transparent_but_nonzero_fill_still_draws() {
        let mut r = laid_out(CornerSet::all(4.0));
        r.set_fill(Color::rgb(9, 9, 9).with_alpha(0));
        let mut s = RecordingSurface::new();
        r.draw_fill(&mut s);
        assert_eq!(s.count(SurfaceOp::FillPath), 1);
    }

    #[test]
    fn zero_stroke_width_disables_stroke_even_with_dash() {
        let mut r = laid_out(CornerSet::all(4.0));
        r.set_dash(6.0, 3.0);
        r.set_stroke(0.0, Color::rgb(255, 0, 0));
        let mut s = RecordingSurface::new();
        r.draw_stroke(&mut s);
        assert_eq!(s.count(SurfaceOp::StrokePath), 0);
    }

    #[test]
    fn stroke_width_is_doubled_and_dash_applied() {
        let mut r = laid_out(CornerSet::all(4.0));
        r.set_stroke(3.0, Color::BLACK);
        r.set_dash(6.0, 2.0);
        let mut s = RecordingSurface::new();
        r.draw_stroke(&mut s);

        let DrawCmd::StrokePath { style, .. } = &s.items()[0] else { panic!("expected stroke") };
        assert_eq!(style.width, 6.0);
        assert_eq!(style.dash, Dash::new(6.0, 2.0));
    }

    #[test]
    fn dash_needs_both_values() {
        let mut r = laid_out(CornerSet::all(4.0));
        r.set_stroke(1.0, Color::BLACK);
        r.set_dash(6.0, 0.0);
        assert_eq!(r.stroke().unwrap().dash, None);
    }

    // ── failure handling ──────────────────────────────────────────────────

    #[test]
    fn surface_failures_are_swallowed() {
        let mut r = laid_out(CornerSet::all(4.0));
        r.set_fill(Color::WHITE);
        r.set_stroke(1.0, Color::BLACK);
        let policy = FailurePolicy::new()
            .fail(SurfaceOp::ClipPath)
            .fail(SurfaceOp::FillPath)
            .fail(SurfaceOp::StrokePath);
        let mut s = RecordingSurface::with_policy(policy);

        frame(&mut r, &mut s);

        // The save went through, so the matching restore is still issued.
        assert_eq!(s.count(SurfaceOp::Save), 1);
        assert_eq!(s.count(SurfaceOp::Restore), 1);
        assert_eq!(s.depth(), 0);
    }

    #[test]
    fn failed_save_skips_restore() {
        let mut r = laid_out(CornerSet::all(4.0));
        let mut s = RecordingSurface::with_policy(FailurePolicy::new().fail(SurfaceOp::Save));
        r.begin_clip(&mut s);
        assert!(!r.is_clip_active());
        r.end_clip(&mut s);
        assert!(s.items().is_empty());
    }
}
