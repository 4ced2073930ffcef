//! Host-facing widgets that wire attributes, layout, ticker and draw order
//! around the decorations.

pub mod rounded_view;
pub mod shimmer_layout;

pub use rounded_view::RoundedView;
pub use shimmer_layout::ShimmerLayout;

use std::fmt;

use crate::attrs::AttrError;
use crate::shimmer::ConfigError;

/// Failure building a widget from host attributes.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetError {
    Attr(AttrError),
    Config(ConfigError),
}

impl fmt::Display for WidgetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidgetError::Attr(e) => write!(f, "attribute error: {e}"),
            WidgetError::Config(e) => write!(f, "invalid shimmer configuration: {e}"),
        }
    }
}

impl std::error::Error for WidgetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WidgetError::Attr(e) => Some(e),
            WidgetError::Config(e) => Some(e),
        }
    }
}

impl From<AttrError> for WidgetError {
    fn from(e: AttrError) -> Self {
        WidgetError::Attr(e)
    }
}

impl From<ConfigError> for WidgetError {
    fn from(e: ConfigError) -> Self {
        WidgetError::Config(e)
    }
}
