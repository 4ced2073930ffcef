//! Shimmer loading overlay: a diagonal highlight masked by the content's own
//! silhouette.

pub mod config;
pub mod engine;
pub mod geometry;

pub use config::{ConfigError, ShimmerConfig, DEFAULT_SHIMMER_COLOR};
pub use engine::{ShimmerEngine, ShimmerState, TickOutcome};
pub use geometry::{
    compute_color_stops, compute_mask_width, gradient_line, mask_rect, shimmer_gradient, transparent_of,
};
