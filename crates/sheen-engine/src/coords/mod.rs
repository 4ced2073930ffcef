//! Coordinate and geometry types shared across the engine and UI.
//!
//! Canonical space:
//! - Device pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Angles are in radians and grow clockwise on screen (from +X towards +Y).

mod corner_set;
mod rect;
mod size;
mod vec2;

pub use corner_set::CornerSet;
pub use rect::Rect;
pub use size::Size;
pub use vec2::Vec2;
