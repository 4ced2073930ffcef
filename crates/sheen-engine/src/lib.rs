//! Sheen engine crate.
//!
//! Renderer-agnostic primitives shared by the view decorations in `sheen-ui`:
//! coordinates, closed paths, the paint model, the drawing-surface capability
//! the host injects, and animation timing.

pub mod coords;
pub mod geom;
pub mod logging;
pub mod paint;
pub mod surface;
pub mod time;
