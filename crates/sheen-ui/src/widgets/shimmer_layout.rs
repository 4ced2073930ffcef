use std::time::Duration;

use log::debug;
use sheen_engine::coords::Size;
use sheen_engine::paint::Color;
use sheen_engine::surface::DrawingSurface;

use crate::attrs::Attributes;
use crate::shimmer::{ConfigError, ShimmerConfig, ShimmerEngine, ShimmerState, TickOutcome};

use super::WidgetError;

/// Container that overlays a shimmer sweep on its content while loading.
///
/// The host forwards its lifecycle: attach/detach, layout sizes, one
/// [`tick`](Self::tick) per animation frame and one [`draw`](Self::draw)
/// per rendered frame.
#[derive(Debug, Default)]
pub struct ShimmerLayout {
    engine: ShimmerEngine,
    attached: bool,
}

impl ShimmerLayout {
    pub fn new(config: ShimmerConfig) -> Result<Self, ConfigError> {
        Ok(Self { engine: ShimmerEngine::new(config)?, attached: false })
    }

    /// Builds the layout from host attributes. With `shimmerAutoStart` the
    /// sweep is requested on every attach and begins at the first layout.
    pub fn from_attributes(attrs: &Attributes) -> Result<Self, WidgetError> {
        Ok(Self::new(ShimmerConfig::from_attributes(attrs)?)?)
    }

    #[inline]
    pub fn engine(&self) -> &ShimmerEngine {
        &self.engine
    }

    #[inline]
    pub fn state(&self) -> ShimmerState {
        self.engine.state()
    }

    #[inline]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    /// Requests the sweep when the config asks for auto-start.
    pub fn on_attach(&mut self) {
        self.attached = true;
        if self.engine.config().auto_start {
            self.engine.start();
        }
    }

    /// Stops the sweep and releases its bitmap.
    pub fn on_detach(&mut self) {
        self.attached = false;
        self.engine.on_detach();
    }

    pub fn on_layout(&mut self, size: Size) {
        self.engine.on_layout(size);
    }

    /// Ignored while detached; the sweep cannot outlive its host.
    pub fn start_shimmer(&mut self) {
        if !self.attached {
            debug!("shimmer start ignored while detached");
            return;
        }
        self.engine.start();
    }

    pub fn stop_shimmer(&mut self) {
        self.engine.stop();
    }

    /// Animation ticker callback. Returns whether the host should redraw.
    pub fn tick(&mut self, dt: Duration) -> bool {
        match self.engine.tick(dt) {
            TickOutcome::Redraw => self.engine.take_redraw_request(),
            TickOutcome::Skipped | TickOutcome::Idle => false,
        }
    }

    pub fn draw(&mut self, surface: &mut dyn DrawingSurface, content: &mut dyn FnMut(&mut dyn DrawingSurface)) {
        self.engine.render(surface, content);
    }

    // ── configuration ─────────────────────────────────────────────────────

    pub fn set_shimmer_angle(&mut self, angle_deg: i32) -> Result<(), ConfigError> {
        self.engine.set_angle(angle_deg).inspect_err(|e| debug!("rejected shimmer angle: {e}"))
    }

    pub fn set_shimmer_duration(&mut self, duration_ms: u32) -> Result<(), ConfigError> {
        self.engine.set_duration(duration_ms)
    }

    pub fn set_mask_width(&mut self, fraction: f32) -> Result<(), ConfigError> {
        self.engine.set_mask_width(fraction)
    }

    pub fn set_gradient_center_width(&mut self, fraction: f32) -> Result<(), ConfigError> {
        self.engine.set_gradient_center_width(fraction)
    }

    pub fn set_shimmer_color(&mut self, color: Color) {
        self.engine.set_color(color);
    }

    pub fn set_animation_reversed(&mut self, reversed: bool) {
        self.engine.set_reversed(reversed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs::names;
    use sheen_engine::surface::{RecordingSurface, SurfaceOp};

    fn ms(v: u64) -> Duration { Duration::from_millis(v) }

    fn content(s: &mut dyn DrawingSurface) {
        let _ = s.translate(0.0, 0.0);
    }

    fn attached() -> ShimmerLayout {
        let mut layout = ShimmerLayout::default();
        layout.on_attach();
        layout
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    #[test]
    fn auto_start_waits_for_attach_and_first_layout() {
        let attrs = Attributes::parse_pairs([(names::SHIMMER_AUTO_START, "true")]).unwrap();
        let mut layout = ShimmerLayout::from_attributes(&attrs).unwrap();
        assert_eq!(layout.state(), ShimmerState::Stopped);
        layout.on_layout(Size::new(300.0, 80.0));
        assert_eq!(layout.state(), ShimmerState::Stopped);

        layout.on_attach();
        assert_eq!(layout.state(), ShimmerState::Running);
    }

    #[test]
    fn auto_start_before_layout_is_pending() {
        let attrs = Attributes::parse_pairs([(names::SHIMMER_AUTO_START, "true")]).unwrap();
        let mut layout = ShimmerLayout::from_attributes(&attrs).unwrap();
        layout.on_attach();
        assert_eq!(layout.state(), ShimmerState::PendingFirstLayout);

        layout.on_layout(Size::new(300.0, 80.0));
        assert_eq!(layout.state(), ShimmerState::Running);
    }

    #[test]
    fn auto_start_resumes_on_reattach() {
        let attrs = Attributes::parse_pairs([(names::SHIMMER_AUTO_START, "true")]).unwrap();
        let mut layout = ShimmerLayout::from_attributes(&attrs).unwrap();
        layout.on_attach();
        layout.on_layout(Size::new(300.0, 80.0));
        layout.on_detach();
        assert_eq!(layout.state(), ShimmerState::Stopped);

        layout.on_attach();
        assert_eq!(layout.state(), ShimmerState::Running);
    }

    #[test]
    fn manual_start_requires_attach() {
        let mut layout = ShimmerLayout::default();
        layout.on_layout(Size::new(200.0, 100.0));
        layout.start_shimmer();
        assert_eq!(layout.state(), ShimmerState::Stopped);

        layout.on_attach();
        assert_eq!(layout.state(), ShimmerState::Stopped);
        layout.start_shimmer();
        assert_eq!(layout.state(), ShimmerState::Running);
    }

    #[test]
    fn without_auto_start_stays_stopped() {
        let mut layout = ShimmerLayout::from_attributes(&Attributes::new()).unwrap();
        layout.on_layout(Size::new(300.0, 80.0));
        assert_eq!(layout.state(), ShimmerState::Stopped);
    }

    #[test]
    fn invalid_attribute_config_is_rejected() {
        let attrs = Attributes::parse_pairs([(names::SHIMMER_ANGLE, "90")]).unwrap();
        assert_eq!(
            ShimmerLayout::from_attributes(&attrs).unwrap_err(),
            WidgetError::Config(ConfigError::AngleOutOfRange(90))
        );
    }

    // ── frames ────────────────────────────────────────────────────────────

    #[test]
    fn tick_reports_redraw_once_visible() {
        let mut layout = attached();
        layout.on_layout(Size::new(200.0, 100.0));
        layout.start_shimmer();
        // sweep -200..200 over 1500ms, mask 89px
        assert!(!layout.tick(ms(100)));
        assert!(layout.tick(ms(650)));
    }

    #[test]
    fn detach_stops_and_releases() {
        let mut layout = attached();
        layout.on_layout(Size::new(200.0, 100.0));
        layout.start_shimmer();

        let mut surface = RecordingSurface::new();
        layout.draw(&mut surface, &mut content);
        assert_eq!(surface.count(SurfaceOp::DrawRect), 1);
        assert_eq!(surface.live_offscreens(), 1);

        layout.on_detach();
        assert!(!layout.is_attached());
        assert_eq!(layout.state(), ShimmerState::Stopped);
        assert_eq!(surface.live_offscreens(), 0);
        assert!(!layout.tick(ms(16)));
    }

    // ── configuration ─────────────────────────────────────────────────────

    #[test]
    fn rejected_setter_keeps_running_sweep() {
        let mut layout = attached();
        layout.on_layout(Size::new(200.0, 100.0));
        layout.start_shimmer();
        layout.tick(ms(400));
        let offset = layout.engine().offset();

        assert!(layout.set_mask_width(1.5).is_err());
        assert_eq!(layout.engine().offset(), offset);
        assert_eq!(layout.state(), ShimmerState::Running);

        layout.set_shimmer_color(Color::WHITE);
        assert_eq!(layout.engine().config().color, Color::WHITE);
        assert_eq!(layout.engine().animator().map(|a| a.fraction()), Some(0.0));
    }
}
