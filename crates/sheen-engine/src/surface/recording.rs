use std::any::Any;
use std::cell::Cell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::coords::{Rect, Vec2};
use crate::geom::Path;
use crate::paint::{BlendMode, ComposeShader, FillStyle, LinearGradient, StrokeStyle};

use super::{DrawingSurface, Offscreen, OffscreenId, PixelFormat, SurfaceError, SurfaceResult};

/// One recorded surface operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Save,
    Restore,
    Translate { dx: f32, dy: f32 },
    ClipPath(Path),
    FillPath { path: Path, style: FillStyle },
    StrokePath { path: Path, style: StrokeStyle },
    /// `draw_rect` with the translation in effect when it was issued.
    ShadedRect {
        rect: Rect,
        translation: Vec2,
        gradient: LinearGradient,
        mask: OffscreenId,
        mask_size: (u32, u32),
        mode: BlendMode,
    },
    Clear,
}

impl DrawCmd {
    pub fn op(&self) -> SurfaceOp {
        match self {
            DrawCmd::Save => SurfaceOp::Save,
            DrawCmd::Restore => SurfaceOp::Restore,
            DrawCmd::Translate { .. } => SurfaceOp::Translate,
            DrawCmd::ClipPath(_) => SurfaceOp::ClipPath,
            DrawCmd::FillPath { .. } => SurfaceOp::FillPath,
            DrawCmd::StrokePath { .. } => SurfaceOp::StrokePath,
            DrawCmd::ShadedRect { .. } => SurfaceOp::DrawRect,
            DrawCmd::Clear => SurfaceOp::Clear,
        }
    }
}

/// Operation kinds, used for counting and failure injection.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SurfaceOp {
    Save,
    Restore,
    Translate,
    ClipPath,
    FillPath,
    StrokePath,
    DrawRect,
    Clear,
    CreateOffscreen,
}

/// Which operations a `RecordingSurface` should fail.
///
/// Failing `CreateOffscreen` reports `OutOfMemory`; every other op reports
/// a backend error and records nothing.
#[derive(Debug, Clone, Default)]
pub struct FailurePolicy {
    failing: HashSet<SurfaceOp>,
    max_offscreen_pixels: Option<u64>,
}

impl FailurePolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail(mut self, op: SurfaceOp) -> Self {
        self.failing.insert(op);
        self
    }

    /// Offscreens larger than `pixels` fail with `OutOfMemory`.
    pub fn max_offscreen_pixels(mut self, pixels: u64) -> Self {
        self.max_offscreen_pixels = Some(pixels);
        self
    }

    #[inline]
    fn fails(&self, op: SurfaceOp) -> bool {
        self.failing.contains(&op)
    }
}

/// Bookkeeping shared by a surface and every offscreen it created.
#[derive(Debug, Default)]
struct Allocations {
    live: Cell<usize>,
    total: Cell<usize>,
    next_id: Cell<u64>,
}

/// Surface that records every operation instead of rasterizing.
///
/// Performance characteristics:
/// - each operation is O(1) apart from cloning the path/gradient it records
/// - `clear()` drops previously recorded commands, so an offscreen that is
///   cleared every frame only holds the latest frame
///
/// Tracks the save stack and accumulated translation so tests can assert
/// balanced state, and counts live offscreens across the whole surface tree.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    items: Vec<DrawCmd>,
    translation: Vec2,
    /// Saved translations; restored on `restore`.
    state_stack: Vec<Vec2>,
    policy: FailurePolicy,
    allocations: Rc<Allocations>,
}

impl RecordingSurface {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: FailurePolicy) -> Self {
        Self { policy, ..Self::default() }
    }

    /// Recorded commands in issue order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    /// Drops recorded commands. Keeps allocated capacity and the state stack.
    #[inline]
    pub fn clear_items(&mut self) {
        self.items.clear();
    }

    pub fn count(&self, op: SurfaceOp) -> usize {
        self.items.iter().filter(|c| c.op() == op).count()
    }

    /// Current save-stack depth.
    #[inline]
    pub fn depth(&self) -> usize {
        self.state_stack.len()
    }

    #[inline]
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    /// Offscreens created through this surface tree that are still alive.
    #[inline]
    pub fn live_offscreens(&self) -> usize {
        self.allocations.live.get()
    }

    /// Offscreens ever created through this surface tree.
    #[inline]
    pub fn total_offscreens(&self) -> usize {
        self.allocations.total.get()
    }

    fn check(&self, op: SurfaceOp) -> SurfaceResult<()> {
        if self.policy.fails(op) {
            Err(SurfaceError::Backend(format!("injected {op:?} failure")))
        } else {
            Ok(())
        }
    }

    fn record(&mut self, op: SurfaceOp, cmd: DrawCmd) -> SurfaceResult<()> {
        self.check(op)?;
        self.items.push(cmd);
        Ok(())
    }
}

impl DrawingSurface for RecordingSurface {
    fn save(&mut self) -> SurfaceResult<()> {
        self.record(SurfaceOp::Save, DrawCmd::Save)?;
        self.state_stack.push(self.translation);
        Ok(())
    }

    fn restore(&mut self) -> SurfaceResult<()> {
        self.check(SurfaceOp::Restore)?;
        let saved = self.state_stack.pop().ok_or(SurfaceError::StackUnderflow)?;
        self.translation = saved;
        self.items.push(DrawCmd::Restore);
        Ok(())
    }

    fn translate(&mut self, dx: f32, dy: f32) -> SurfaceResult<()> {
        self.record(SurfaceOp::Translate, DrawCmd::Translate { dx, dy })?;
        self.translation = self.translation + Vec2::new(dx, dy);
        Ok(())
    }

    fn clip_path(&mut self, path: &Path) -> SurfaceResult<()> {
        self.record(SurfaceOp::ClipPath, DrawCmd::ClipPath(path.clone()))
    }

    fn fill_path(&mut self, path: &Path, style: &FillStyle) -> SurfaceResult<()> {
        self.record(SurfaceOp::FillPath, DrawCmd::FillPath { path: path.clone(), style: *style })
    }

    fn stroke_path(&mut self, path: &Path, style: &StrokeStyle) -> SurfaceResult<()> {
        self.record(SurfaceOp::StrokePath, DrawCmd::StrokePath { path: path.clone(), style: *style })
    }

    fn draw_rect(&mut self, rect: Rect, shader: &ComposeShader<'_>) -> SurfaceResult<()> {
        let cmd = DrawCmd::ShadedRect {
            rect,
            translation: self.translation,
            gradient: shader.gradient.clone(),
            mask: shader.mask.id(),
            mask_size: (shader.mask.width(), shader.mask.height()),
            mode: shader.mode,
        };
        self.record(SurfaceOp::DrawRect, cmd)
    }

    fn clear(&mut self) -> SurfaceResult<()> {
        self.check(SurfaceOp::Clear)?;
        self.items.clear();
        self.items.push(DrawCmd::Clear);
        Ok(())
    }

    fn create_offscreen(
        &mut self,
        width: u32,
        height: u32,
        format: PixelFormat,
    ) -> SurfaceResult<Box<dyn Offscreen>> {
        if width == 0 || height == 0 {
            return Err(SurfaceError::InvalidSize { width, height });
        }

        let too_large = self
            .policy
            .max_offscreen_pixels
            .is_some_and(|max| u64::from(width) * u64::from(height) > max);
        if too_large || self.policy.fails(SurfaceOp::CreateOffscreen) {
            return Err(SurfaceError::OutOfMemory { width, height });
        }

        let allocations = Rc::clone(&self.allocations);
        let id = OffscreenId(allocations.next_id.get());
        allocations.next_id.set(id.0 + 1);
        allocations.live.set(allocations.live.get() + 1);
        allocations.total.set(allocations.total.get() + 1);

        let canvas = RecordingSurface {
            policy: self.policy.clone(),
            allocations: Rc::clone(&allocations),
            ..RecordingSurface::default()
        };

        Ok(Box::new(RecordedOffscreen { id, width, height, format, canvas, allocations }))
    }
}

/// Offscreen bitmap created by a `RecordingSurface`.
#[derive(Debug)]
pub struct RecordedOffscreen {
    id: OffscreenId,
    width: u32,
    height: u32,
    format: PixelFormat,
    canvas: RecordingSurface,
    allocations: Rc<Allocations>,
}

impl RecordedOffscreen {
    /// Commands drawn into this bitmap since its last `clear`.
    #[inline]
    pub fn canvas(&self) -> &RecordingSurface {
        &self.canvas
    }
}

impl Offscreen for RecordedOffscreen {
    fn id(&self) -> OffscreenId {
        self.id
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn format(&self) -> PixelFormat {
        self.format
    }

    fn surface(&mut self) -> &mut dyn DrawingSurface {
        &mut self.canvas
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Drop for RecordedOffscreen {
    fn drop(&mut self) {
        self.allocations.live.set(self.allocations.live.get().saturating_sub(1));
    }
}
