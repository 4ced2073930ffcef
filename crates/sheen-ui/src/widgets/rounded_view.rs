use log::debug;
use sheen_engine::coords::{CornerSet, Rect};
use sheen_engine::paint::Color;
use sheen_engine::surface::DrawingSurface;

use crate::attrs::{names, AttrError, Attributes};
use crate::corners::{CornerRenderer, LayoutDirection};

/// A content view decorated with rounded corners, a fill behind the content
/// and an optional (dashed) border on top.
///
/// # Example
/// ```rust,ignore
/// let attrs = Attributes::parse_pairs([("radius", "12"), ("fillColor", "#FF202020")])?;
/// let mut view = RoundedView::from_attributes(&attrs)?;
/// view.on_layout(true, Rect::from_ltrb(0.0, 0.0, 320.0, 180.0));
/// view.draw(&mut surface, &mut |s| paint_image(s));
/// ```
#[derive(Debug, Default)]
pub struct RoundedView {
    renderer: CornerRenderer,
    needs_redraw: bool,
}

impl RoundedView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads radii, border, dash, fill and layout direction from `attrs`.
    ///
    /// Absent options default to zero (no rounding, no border, no fill).
    pub fn from_attributes(attrs: &Attributes) -> Result<Self, AttrError> {
        let corners = CornerSet::new(
            attrs.dimension(names::TOP_LEFT_RADIUS, 0.0)?,
            attrs.dimension(names::TOP_RIGHT_RADIUS, 0.0)?,
            attrs.dimension(names::BOTTOM_LEFT_RADIUS, 0.0)?,
            attrs.dimension(names::BOTTOM_RIGHT_RADIUS, 0.0)?,
        )
        .with_uniform(attrs.dimension(names::RADIUS, 0.0)?);

        let mut renderer = CornerRenderer::new();
        renderer.set_corners(corners);
        renderer.set_stroke(
            attrs.dimension(names::STROKE_WIDTH, 0.0)?,
            attrs.color(names::STROKE_COLOR, Color::TRANSPARENT)?,
        );
        renderer.set_dash(
            attrs.dimension(names::DASH_WIDTH, 0.0)?,
            attrs.dimension(names::DASH_GAP, 0.0)?,
        );
        renderer.set_fill(attrs.color(names::FILL_COLOR, Color::TRANSPARENT)?);

        if let Some(name) = attrs.text(names::LAYOUT_DIRECTION)? {
            match LayoutDirection::from_name(name) {
                Some(direction) => renderer.set_layout_direction(direction),
                None => debug!("ignoring unknown layout direction {name:?}"),
            }
        }

        Ok(Self { renderer, needs_redraw: false })
    }

    #[inline]
    pub fn renderer(&self) -> &CornerRenderer {
        &self.renderer
    }

    pub fn corners(&self) -> CornerSet {
        self.renderer.corners()
    }

    pub fn set_corners(&mut self, corners: CornerSet) {
        self.renderer.set_corners(corners);
        self.needs_redraw = true;
    }

    pub fn set_stroke(&mut self, width: f32, color: Color) {
        self.renderer.set_stroke(width, color);
        self.needs_redraw = true;
    }

    pub fn set_dash(&mut self, dash_width: f32, dash_gap: f32) {
        self.renderer.set_dash(dash_width, dash_gap);
        self.needs_redraw = true;
    }

    /// A color of exactly zero removes the fill.
    pub fn set_fill(&mut self, color: Color) {
        self.renderer.set_fill(color);
        self.needs_redraw = true;
    }

    pub fn set_layout_direction(&mut self, direction: LayoutDirection) {
        self.renderer.set_layout_direction(direction);
        self.needs_redraw = true;
    }

    /// Host layout signal with the view's frame in parent coordinates.
    pub fn on_layout(&mut self, changed: bool, frame: Rect) {
        self.renderer.on_layout_changed(changed, frame);
        if changed {
            self.needs_redraw = true;
        }
    }

    /// Returns and clears the pending redraw request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// clip → fill → content → border → unclip
    pub fn draw(&mut self, surface: &mut dyn DrawingSurface, content: &mut dyn FnMut(&mut dyn DrawingSurface)) {
        self.renderer.begin_clip(surface);
        self.renderer.draw_fill(surface);
        content(&mut *surface);
        self.renderer.draw_stroke(surface);
        self.renderer.end_clip(surface);
    }
}
