//! Rounded-corner decoration.
//!
//! - `geometry`: radius layout (with RTL mirroring) and the rounded path
//! - `renderer`: cached path plus fill/border state, drawn best-effort

pub mod geometry;
pub mod renderer;

pub use geometry::{compute_path, corner_radii_array, LayoutDirection};
pub use renderer::{Border, CornerRenderer};
