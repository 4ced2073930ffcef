//! Sheen UI: view decorations on top of `sheen-engine`.
//!
//! Two independent decorations, each driven by a hosting widget layer:
//!
//! - [`corners`]: rounded clip, fill and (dashed) border with per-corner
//!   radii and right-to-left mirroring.
//! - [`shimmer`]: a looping diagonal gradient sweep masked by the
//!   silhouette of the hosted content.
//!
//! The host supplies view dimensions through the layout signal, a
//! [`DrawingSurface`](sheen_engine::surface::DrawingSurface) per frame and
//! elapsed time through the ticker.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use sheen_ui::prelude::*;
//!
//! let attrs = Attributes::parse_pairs([("radius", "12"), ("strokeWidth", "2"), ("strokeColor", "#FF2060A0")])?;
//! let mut view = RoundedView::from_attributes(&attrs)?;
//! view.on_layout(true, Rect::new(0.0, 0.0, 320.0, 180.0));
//!
//! // In the host's draw callback:
//! view.draw(&mut surface, &mut |s| draw_image(s));
//! ```

pub mod attrs;
pub mod corners;
pub mod shimmer;
pub mod widgets;

/// Everything a host needs to wire the decorations. Import this in widget code.
pub mod prelude {
    pub use crate::attrs::{AttrError, AttrValue, Attributes};
    pub use crate::corners::{CornerRenderer, LayoutDirection};
    pub use crate::shimmer::{ConfigError, ShimmerConfig, ShimmerEngine, ShimmerState, TickOutcome};
    pub use crate::widgets::{RoundedView, ShimmerLayout};

    // Re-export the engine primitives everyone needs.
    pub use sheen_engine::coords::{CornerSet, Rect, Size, Vec2};
    pub use sheen_engine::paint::Color;
    pub use sheen_engine::surface::{DrawingSurface, RecordingSurface};
}
