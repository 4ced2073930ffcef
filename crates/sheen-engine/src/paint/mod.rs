//! Paint model shared between the decorations and drawing surfaces.
//!
//! Scope:
//! - color representation (packed straight-alpha ARGB)
//! - gradients and the composed shimmer shader
//! - fill/stroke styles handed to `DrawingSurface`
//!
//! Geometry types remain in `coords` and `geom`.

pub mod color;
pub mod gradient;
pub mod shader;
pub mod style;

pub use color::Color;
pub use gradient::{ColorStop, LinearGradient};
pub use shader::{BlendMode, ComposeShader};
pub use style::{Dash, FillStyle, StrokeStyle};
