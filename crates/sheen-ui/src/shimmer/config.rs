use std::fmt;

use sheen_engine::paint::Color;

use crate::attrs::{names, AttrError, Attributes};

/// Shimmer color used when the host theme does not provide one.
pub const DEFAULT_SHIMMER_COLOR: Color = Color::from_argb(0x80FF_FFFF);

/// Shimmer parameters.
///
/// Invariants (checked by [`validate`](Self::validate)):
/// - `angle_deg` in `[-45, 45]`
/// - `duration_ms > 0`
/// - `mask_width` in `(0, 1]`
/// - `gradient_center_width` in `(0, 1)`
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShimmerConfig {
    /// Sweep angle in degrees; positive tilts the highlight clockwise.
    pub angle_deg: i32,
    /// Length of one sweep.
    pub duration_ms: u32,
    pub color: Color,
    /// Sweep from end to start instead of start to end.
    pub reversed: bool,
    /// Highlight width as a fraction of half the view width.
    pub mask_width: f32,
    /// Width of the solid center band as a fraction of the gradient.
    pub gradient_center_width: f32,
    /// Start as soon as the host attaches the view.
    pub auto_start: bool,
}

impl ShimmerConfig {
    pub const MIN_ANGLE: i32 = -45;
    pub const MAX_ANGLE: i32 = 45;

    pub fn angle(mut self, v: i32) -> Self { self.angle_deg = v; self }
    pub fn duration_ms(mut self, v: u32) -> Self { self.duration_ms = v; self }
    pub fn color(mut self, v: Color) -> Self { self.color = v; self }
    pub fn reversed(mut self, v: bool) -> Self { self.reversed = v; self }
    pub fn mask_width(mut self, v: f32) -> Self { self.mask_width = v; self }
    pub fn gradient_center_width(mut self, v: f32) -> Self { self.gradient_center_width = v; self }
    pub fn auto_start(mut self, v: bool) -> Self { self.auto_start = v; self }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(Self::MIN_ANGLE..=Self::MAX_ANGLE).contains(&self.angle_deg) {
            return Err(ConfigError::AngleOutOfRange(self.angle_deg));
        }
        if self.duration_ms == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        if !(self.mask_width > 0.0 && self.mask_width <= 1.0) {
            return Err(ConfigError::MaskWidthOutOfRange(self.mask_width));
        }
        if !(self.gradient_center_width > 0.0 && self.gradient_center_width < 1.0) {
            return Err(ConfigError::GradientCenterWidthOutOfRange(self.gradient_center_width));
        }
        Ok(())
    }

    /// Reads the shimmer options from a host attribute bag.
    ///
    /// The result is not validated; pass it through [`validate`](Self::validate)
    /// or a mutator that does.
    pub fn from_attributes(attrs: &Attributes) -> Result<Self, AttrError> {
        let d = Self::default();
        Ok(Self {
            angle_deg: attrs.integer(names::SHIMMER_ANGLE, d.angle_deg)?,
            duration_ms: attrs.integer(names::SHIMMER_DURATION, d.duration_ms as i32)?.max(0) as u32,
            color: attrs.color(names::SHIMMER_COLOR, d.color)?,
            reversed: attrs.boolean(names::ANIMATION_REVERSED, d.reversed)?,
            mask_width: attrs.float(names::MASK_WIDTH, d.mask_width)?,
            gradient_center_width: attrs.float(names::GRADIENT_CENTER_WIDTH, d.gradient_center_width)?,
            auto_start: attrs.boolean(names::SHIMMER_AUTO_START, d.auto_start)?,
        })
    }
}

impl Default for ShimmerConfig {
    fn default() -> Self {
        Self {
            angle_deg: 20,
            duration_ms: 1500,
            color: DEFAULT_SHIMMER_COLOR,
            reversed: false,
            mask_width: 0.5,
            gradient_center_width: 0.1,
            auto_start: false,
        }
    }
}

/// Rejected shimmer configuration. The previous configuration stays in effect.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ConfigError {
    AngleOutOfRange(i32),
    ZeroDuration,
    MaskWidthOutOfRange(f32),
    GradientCenterWidthOutOfRange(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::AngleOutOfRange(v) => write!(
                f,
                "shimmer angle {v} must be between {} and {}",
                ShimmerConfig::MIN_ANGLE,
                ShimmerConfig::MAX_ANGLE
            ),
            ConfigError::ZeroDuration => write!(f, "shimmer duration must be positive"),
            ConfigError::MaskWidthOutOfRange(v) => {
                write!(f, "mask width {v} must be greater than 0 and at most 1")
            }
            ConfigError::GradientCenterWidthOutOfRange(v) => {
                write!(f, "gradient center width {v} must be greater than 0 and less than 1")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(ShimmerConfig::default().validate(), Ok(()));
    }

    #[test]
    fn angle_bounds_are_inclusive() {
        let c = ShimmerConfig::default();
        assert!(c.angle(-45).validate().is_ok());
        assert!(c.angle(45).validate().is_ok());
        assert_eq!(c.angle(46).validate(), Err(ConfigError::AngleOutOfRange(46)));
        assert_eq!(c.angle(-46).validate(), Err(ConfigError::AngleOutOfRange(-46)));
    }

    #[test]
    fn mask_width_excludes_zero_includes_one() {
        let c = ShimmerConfig::default();
        assert!(c.mask_width(1.0).validate().is_ok());
        assert!(c.mask_width(0.0).validate().is_err());
        assert!(c.mask_width(1.01).validate().is_err());
        assert!(c.mask_width(f32::NAN).validate().is_err());
    }

    #[test]
    fn center_width_is_open_interval() {
        let c = ShimmerConfig::default();
        assert!(c.gradient_center_width(0.99).validate().is_ok());
        assert!(c.gradient_center_width(1.0).validate().is_err());
        assert!(c.gradient_center_width(0.0).validate().is_err());
    }

    #[test]
    fn zero_duration_rejected() {
        assert_eq!(ShimmerConfig::default().duration_ms(0).validate(), Err(ConfigError::ZeroDuration));
    }

    #[test]
    fn reads_attributes_with_defaults() {
        let attrs = Attributes::parse_pairs([
            (names::SHIMMER_ANGLE, "-15"),
            (names::ANIMATION_REVERSED, "true"),
            (names::MASK_WIDTH, "0.8"),
        ])
        .unwrap();
        let c = ShimmerConfig::from_attributes(&attrs).unwrap();
        assert_eq!(c.angle_deg, -15);
        assert!(c.reversed);
        assert_eq!(c.mask_width, 0.8);
        assert_eq!(c.duration_ms, 1500);
        assert_eq!(c.gradient_center_width, 0.1);
        assert!(!c.auto_start);
    }

    #[test]
    fn error_message_names_range() {
        assert_eq!(
            ConfigError::AngleOutOfRange(46).to_string(),
            "shimmer angle 46 must be between -45 and 45"
        );
    }
}
