//! Drawing-surface capability injected by the host.
//!
//! Responsibilities:
//! - define the operations the decorations need from a canvas
//!   (state stack, translate, path clip/fill/stroke, shaded rect)
//! - define offscreen bitmaps, including alpha-only ones used as masks
//! - provide `RecordingSurface`, a command recorder for tests and headless hosts
//!
//! Every operation is fallible. Callers in `sheen-ui` decide whether a failure
//! is swallowed (cosmetic paint) or degrades a frame (offscreen allocation).

mod recording;

use std::any::Any;
use std::fmt;

use crate::coords::Rect;
use crate::geom::Path;
use crate::paint::{ComposeShader, FillStyle, StrokeStyle};

pub use recording::{DrawCmd, FailurePolicy, RecordedOffscreen, RecordingSurface, SurfaceOp};

pub type SurfaceResult<T> = Result<T, SurfaceError>;

/// Failure reported by a drawing surface.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceError {
    /// Offscreen bitmap could not be allocated.
    OutOfMemory { width: u32, height: u32 },
    /// Offscreen requested with a zero dimension.
    InvalidSize { width: u32, height: u32 },
    /// `restore` without a matching `save`.
    StackUnderflow,
    /// Backend-specific failure.
    Backend(String),
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::OutOfMemory { width, height } => {
                write!(f, "out of memory allocating {width}x{height} offscreen")
            }
            SurfaceError::InvalidSize { width, height } => {
                write!(f, "invalid offscreen size {width}x{height}")
            }
            SurfaceError::StackUnderflow => write!(f, "restore called without matching save"),
            SurfaceError::Backend(msg) => write!(f, "surface backend error: {msg}"),
        }
    }
}

impl std::error::Error for SurfaceError {}

/// Pixel layout of an offscreen bitmap.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PixelFormat {
    /// Coverage only, one byte per pixel.
    Alpha8,
}

/// Identity of an offscreen bitmap, unique per surface tree.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct OffscreenId(pub u64);

/// Canvas operations the decorations rely on.
///
/// Transform and clip state follow save/restore stack discipline.
pub trait DrawingSurface {
    fn save(&mut self) -> SurfaceResult<()>;

    fn restore(&mut self) -> SurfaceResult<()>;

    fn translate(&mut self, dx: f32, dy: f32) -> SurfaceResult<()>;

    /// Intersects the current clip with `path`.
    fn clip_path(&mut self, path: &Path) -> SurfaceResult<()>;

    fn fill_path(&mut self, path: &Path, style: &FillStyle) -> SurfaceResult<()>;

    fn stroke_path(&mut self, path: &Path, style: &StrokeStyle) -> SurfaceResult<()>;

    /// Fills `rect` (current transform applied) with a composed shader.
    fn draw_rect(&mut self, rect: Rect, shader: &ComposeShader<'_>) -> SurfaceResult<()>;

    /// Resets every pixel to transparent, ignoring clip and transform.
    fn clear(&mut self) -> SurfaceResult<()>;

    /// Allocates a bitmap-backed surface owned by the caller.
    fn create_offscreen(
        &mut self,
        width: u32,
        height: u32,
        format: PixelFormat,
    ) -> SurfaceResult<Box<dyn Offscreen>>;
}

/// Bitmap-backed surface returned by [`DrawingSurface::create_offscreen`].
///
/// Dropping it releases the bitmap.
pub trait Offscreen {
    fn id(&self) -> OffscreenId;

    fn width(&self) -> u32;

    fn height(&self) -> u32;

    fn format(&self) -> PixelFormat;

    /// Canvas that draws into this bitmap.
    fn surface(&mut self) -> &mut dyn DrawingSurface;

    /// Downcast hook for backends that need their concrete bitmap type.
    fn as_any(&self) -> &dyn Any;
}
