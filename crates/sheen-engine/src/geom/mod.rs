//! Path geometry.
//!
//! `Path` is the only shape the decorations hand to a drawing surface: a
//! closed contour of lines and circular/elliptical arcs.

mod path;

pub use path::{fit_radii, Arc, Path, PathVerb};
