use crate::surface::Offscreen;

use super::LinearGradient;

/// Porter-Duff mode used to combine the two halves of a `ComposeShader`.
///
/// The gradient is the destination, the mask bitmap is the source.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum BlendMode {
    /// Source over destination.
    #[default]
    SrcOver,
    /// Destination kept only where the source has coverage.
    DstIn,
}

/// Gradient composited with an offscreen alpha mask.
///
/// Borrowed for the duration of a single `draw_rect` call; the mask stays
/// owned by whoever allocated it.
pub struct ComposeShader<'a> {
    pub gradient: &'a LinearGradient,
    pub mask: &'a dyn Offscreen,
    pub mode: BlendMode,
}

impl<'a> ComposeShader<'a> {
    #[inline]
    pub fn new(gradient: &'a LinearGradient, mask: &'a dyn Offscreen, mode: BlendMode) -> Self {
        Self { gradient, mask, mode }
    }
}

impl std::fmt::Debug for ComposeShader<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComposeShader")
            .field("gradient", self.gradient)
            .field("mask", &self.mask.id())
            .field("mode", &self.mode)
            .finish()
    }
}
