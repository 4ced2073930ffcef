use std::fmt;
use std::time::Duration;

use log::{debug, trace, warn};
use sheen_engine::coords::{Rect, Size};
use sheen_engine::paint::{BlendMode, Color, ComposeShader, LinearGradient};
use sheen_engine::surface::{DrawingSurface, Offscreen, PixelFormat, SurfaceError, SurfaceResult};
use sheen_engine::time::RepeatingAnimator;

use super::config::{ConfigError, ShimmerConfig};
use super::geometry::{mask_rect, shimmer_gradient};

/// Lifecycle of the shimmer sweep.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum ShimmerState {
    #[default]
    Stopped,
    /// `start` was called before the view had a width; the next layout
    /// signal starts the sweep.
    PendingFirstLayout,
    Running,
}

/// Result of feeding the animator one step.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TickOutcome {
    /// The highlight overlaps the view; a redraw was requested.
    Redraw,
    /// The highlight is still entirely off the left edge.
    Skipped,
    /// Not running.
    Idle,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
struct Sweep {
    initial_offset: i32,
    mask_width: i32,
}

/// Drives the shimmer overlay: animation state, mask bitmap and draw pass.
///
/// The engine never schedules work. The host feeds it layout sizes, frame
/// deltas via [`tick`](Self::tick) and draw calls via [`render`](Self::render).
/// Surface failures during a frame are logged and the content is still drawn.
pub struct ShimmerEngine {
    config: ShimmerConfig,
    state: ShimmerState,
    size: Size,

    animator: Option<RepeatingAnimator>,
    sweep: Option<Sweep>,
    offset: i32,
    redraw_requested: bool,

    // Survives stop/start; dropped when size or config change.
    mask_rect: Option<Rect>,
    gradient: Option<LinearGradient>,
    mask: Option<Box<dyn Offscreen>>,
}

impl ShimmerEngine {
    pub fn new(config: ShimmerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: ShimmerConfig) -> Self {
        Self {
            config,
            state: ShimmerState::Stopped,
            size: Size::zero(),
            animator: None,
            sweep: None,
            offset: 0,
            redraw_requested: false,
            mask_rect: None,
            gradient: None,
            mask: None,
        }
    }

    // ── queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn state(&self) -> ShimmerState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == ShimmerState::Running
    }

    #[inline]
    pub fn config(&self) -> &ShimmerConfig {
        &self.config
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Current horizontal offset of the highlight in pixels.
    #[inline]
    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// Mask width of the active sweep.
    pub fn mask_width(&self) -> Option<i32> {
        self.sweep.map(|s| s.mask_width)
    }

    pub fn mask_rect(&self) -> Option<Rect> {
        self.mask_rect
    }

    pub fn animator(&self) -> Option<&RepeatingAnimator> {
        self.animator.as_ref()
    }

    pub fn has_offscreen(&self) -> bool {
        self.mask.is_some()
    }

    pub fn offscreen(&self) -> Option<&dyn Offscreen> {
        self.mask.as_deref()
    }

    /// Returns and clears the pending redraw request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    /// Starts the sweep. No-op while running.
    ///
    /// Without a width yet, the engine waits for the next layout signal.
    pub fn start(&mut self) {
        if self.state == ShimmerState::Running {
            return;
        }

        let width = self.size.width_px();
        if width <= 0 {
            if self.state != ShimmerState::PendingFirstLayout {
                debug!("shimmer start deferred until first layout");
            }
            self.state = ShimmerState::PendingFirstLayout;
            return;
        }

        let (size, config) = (self.size, self.config);
        let rect = *self.mask_rect.get_or_insert_with(|| mask_rect(size, &config));
        let mask_width = rect.width() as i32;

        // Saturates for views wider than half the i32 range.
        let initial_offset = -width.max(mask_width);
        let final_offset = width.saturating_sub(initial_offset);
        let (from, to) = if config.reversed { (final_offset, 0) } else { (0, final_offset) };

        let mut animator = RepeatingAnimator::new(from, to, Duration::from_millis(u64::from(config.duration_ms)));
        animator.start();

        debug!(
            "shimmer start: {}x{} mask={} offsets {}..{}",
            width,
            size.height_px(),
            mask_width,
            initial_offset.saturating_add(from),
            initial_offset.saturating_add(to)
        );

        self.animator = Some(animator);
        self.sweep = Some(Sweep { initial_offset, mask_width });
        self.state = ShimmerState::Running;
        self.advance(0.0);
    }

    /// Stops the sweep and releases the animator, shader and mask bitmap.
    /// Idempotent; also cancels a pending start.
    pub fn stop(&mut self) {
        if let Some(mut animator) = self.animator.take() {
            animator.cancel();
        }
        if self.state == ShimmerState::Running {
            debug!("shimmer stop");
        }
        self.sweep = None;
        self.gradient = None;
        self.mask = None;
        self.offset = 0;
        self.redraw_requested = false;
        self.state = ShimmerState::Stopped;
    }

    /// Host layout signal.
    pub fn on_layout(&mut self, size: Size) {
        if size != self.size {
            self.size = size;
            self.invalidate_geometry();
            if self.state == ShimmerState::Running {
                self.stop();
                self.start();
            }
        }

        if self.state == ShimmerState::PendingFirstLayout && size.width_px() > 0 {
            self.start();
        }
    }

    pub fn on_detach(&mut self) {
        self.stop();
    }

    // ── animation ─────────────────────────────────────────────────────────

    /// Advances the animator by `dt` and applies the resulting value.
    pub fn tick(&mut self, dt: Duration) -> TickOutcome {
        if self.state != ShimmerState::Running {
            return TickOutcome::Idle;
        }
        match self.animator.as_mut().and_then(|a| a.advance(dt)) {
            Some(fraction) => self.advance(fraction),
            None => TickOutcome::Idle,
        }
    }

    /// Applies the animator value at `fraction` of a cycle.
    ///
    /// A redraw is requested only once the highlight reaches the view.
    pub fn advance(&mut self, fraction: f32) -> TickOutcome {
        if self.state != ShimmerState::Running {
            return TickOutcome::Idle;
        }
        let (Some(animator), Some(sweep)) = (self.animator.as_ref(), self.sweep) else {
            return TickOutcome::Idle;
        };

        self.offset = sweep.initial_offset.saturating_add(animator.value_at(fraction));
        if self.offset.saturating_add(sweep.mask_width) >= 0 {
            self.redraw_requested = true;
            TickOutcome::Redraw
        } else {
            TickOutcome::Skipped
        }
    }

    // ── configuration ─────────────────────────────────────────────────────

    /// Replaces the configuration. Invalid values leave everything as it was.
    pub fn reconfigure(&mut self, config: ShimmerConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.apply(config);
        Ok(())
    }

    pub fn set_angle(&mut self, angle_deg: i32) -> Result<(), ConfigError> {
        self.reconfigure(self.config.angle(angle_deg))
    }

    pub fn set_duration(&mut self, duration_ms: u32) -> Result<(), ConfigError> {
        self.reconfigure(self.config.duration_ms(duration_ms))
    }

    pub fn set_mask_width(&mut self, fraction: f32) -> Result<(), ConfigError> {
        self.reconfigure(self.config.mask_width(fraction))
    }

    pub fn set_gradient_center_width(&mut self, fraction: f32) -> Result<(), ConfigError> {
        self.reconfigure(self.config.gradient_center_width(fraction))
    }

    pub fn set_color(&mut self, color: Color) {
        self.apply(self.config.color(color));
    }

    pub fn set_reversed(&mut self, reversed: bool) {
        self.apply(self.config.reversed(reversed));
    }

    fn apply(&mut self, config: ShimmerConfig) {
        self.config = config;
        self.invalidate_geometry();
        if self.state == ShimmerState::Running {
            self.stop();
            self.start();
        }
    }

    fn invalidate_geometry(&mut self) {
        self.mask_rect = None;
        self.gradient = None;
        self.mask = None;
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Draws `content`, then the highlight on top while running.
    ///
    /// `content` is invoked a second time to render the mask silhouette.
    pub fn render(&mut self, surface: &mut dyn DrawingSurface, content: &mut dyn FnMut(&mut dyn DrawingSurface)) {
        content(&mut *surface);

        if self.state != ShimmerState::Running || !self.size.is_positive() {
            return;
        }

        if let Err(err) = self.draw_shimmer(surface, content) {
            match err {
                SurfaceError::OutOfMemory { .. } => warn!("shimmer skipped: {err}"),
                _ => trace!("shimmer pass failed: {err}"),
            }
        }
    }

    fn draw_shimmer(
        &mut self,
        surface: &mut dyn DrawingSurface,
        content: &mut dyn FnMut(&mut dyn DrawingSurface),
    ) -> SurfaceResult<()> {
        let Some(rect) = self.mask_rect else {
            return Ok(());
        };
        let offset = self.offset as f32;

        if self.mask.is_none() {
            let width = rect.width().max(0.0) as u32;
            let height = rect.height().max(0.0) as u32;
            let mask = surface.create_offscreen(width, height, PixelFormat::Alpha8)?;
            debug!("shimmer mask allocated: {width}x{height}");
            self.mask = Some(mask);
        }
        let Some(mask) = self.mask.as_mut() else {
            return Ok(());
        };

        let canvas = mask.surface();
        canvas.clear()?;
        with_saved(canvas, |c| {
            c.translate(-offset, 0.0)?;
            content(c);
            Ok(())
        })?;

        let (size, config) = (self.size, self.config);
        let gradient = self.gradient.get_or_insert_with(|| shimmer_gradient(size, &config));
        let Some(mask) = self.mask.as_deref() else {
            return Ok(());
        };
        let shader = ComposeShader::new(gradient, mask, BlendMode::DstIn);

        with_saved(surface, |s| {
            s.translate(offset, 0.0)?;
            s.draw_rect(rect, &shader)
        })
    }
}

impl Default for ShimmerEngine {
    fn default() -> Self {
        Self::with_valid_config(ShimmerConfig::default())
    }
}

impl fmt::Debug for ShimmerEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShimmerEngine")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("size", &self.size)
            .field("offset", &self.offset)
            .field("mask_rect", &self.mask_rect)
            .field("has_offscreen", &self.mask.is_some())
            .finish_non_exhaustive()
    }
}

/// Runs `f` between `save` and `restore`. The restore is issued even when
/// `f` fails.
fn with_saved<F>(surface: &mut dyn DrawingSurface, f: F) -> SurfaceResult<()>
where
    F: FnOnce(&mut dyn DrawingSurface) -> SurfaceResult<()>,
{
    surface.save()?;
    let drawn = f(&mut *surface);
    let restored = surface.restore();
    drawn.and(restored)
}
