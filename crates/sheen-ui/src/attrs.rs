//! Styled-attribute bag handed over by the host.
//!
//! The host resolves its styling system into plain values; decorations read
//! them through typed getters that fall back to per-option defaults when an
//! option is absent.

use std::collections::HashMap;
use std::fmt;

use sheen_engine::paint::Color;

/// Option names understood by the decorations.
pub mod names {
    pub const RADIUS: &str = "radius";
    pub const TOP_LEFT_RADIUS: &str = "topLeftRadius";
    pub const TOP_RIGHT_RADIUS: &str = "topRightRadius";
    pub const BOTTOM_LEFT_RADIUS: &str = "bottomLeftRadius";
    pub const BOTTOM_RIGHT_RADIUS: &str = "bottomRightRadius";
    pub const STROKE_WIDTH: &str = "strokeWidth";
    pub const STROKE_COLOR: &str = "strokeColor";
    pub const DASH_WIDTH: &str = "dashWidth";
    pub const DASH_GAP: &str = "dashGap";
    pub const FILL_COLOR: &str = "fillColor";
    pub const LAYOUT_DIRECTION: &str = "layoutDirection";

    pub const SHIMMER_ANGLE: &str = "shimmerAngle";
    pub const SHIMMER_DURATION: &str = "shimmerAnimationDuration";
    pub const SHIMMER_COLOR: &str = "shimmerColor";
    pub const ANIMATION_REVERSED: &str = "animationReversed";
    pub const MASK_WIDTH: &str = "maskWidth";
    pub const GRADIENT_CENTER_WIDTH: &str = "gradientCenterColorWidth";
    pub const SHIMMER_AUTO_START: &str = "shimmerAutoStart";
}

/// A resolved attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// Integer literal; also carries packed ARGB colors given as numbers.
    Integer(i64),
    Number(f32),
    Color(Color),
    Bool(bool),
    Text(String),
}

impl AttrValue {
    /// Parses a raw attribute string.
    ///
    /// - `#AARRGGBB` / `#RRGGBB` → color (6 digits are opaque)
    /// - `true` / `false` → bool
    /// - integer with optional `px` or `ms` suffix → integer
    /// - other number with optional `px` or `ms` suffix → number
    /// - anything else → text
    pub fn parse(raw: &str) -> Result<Self, AttrError> {
        let raw = raw.trim();

        if let Some(hex) = raw.strip_prefix('#') {
            return parse_color(hex).map(AttrValue::Color).ok_or_else(|| AttrError::Malformed {
                value: raw.to_string(),
                reason: "color must be #AARRGGBB or #RRGGBB",
            });
        }

        match raw {
            "true" => return Ok(AttrValue::Bool(true)),
            "false" => return Ok(AttrValue::Bool(false)),
            _ => {}
        }

        let numeric = raw
            .strip_suffix("px")
            .or_else(|| raw.strip_suffix("ms"))
            .unwrap_or(raw);
        let starts_numeric = numeric
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_digit() || c == '-' || c == '+' || c == '.');

        if starts_numeric {
            if let Ok(v) = numeric.parse::<i64>() {
                return Ok(AttrValue::Integer(v));
            }
            return numeric.parse::<f32>().map(AttrValue::Number).map_err(|_| AttrError::Malformed {
                value: raw.to_string(),
                reason: "expected a number",
            });
        }

        Ok(AttrValue::Text(raw.to_string()))
    }

    fn kind(&self) -> &'static str {
        match self {
            AttrValue::Integer(_) | AttrValue::Number(_) => "number",
            AttrValue::Color(_) => "color",
            AttrValue::Bool(_) => "bool",
            AttrValue::Text(_) => "text",
        }
    }
}

fn parse_color(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let packed = u32::from_str_radix(hex, 16).ok()?;
    match hex.len() {
        6 => Some(Color::from_argb(0xFF00_0000 | packed)),
        8 => Some(Color::from_argb(packed)),
        _ => None,
    }
}

/// Attribute lookup or parse failure.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrError {
    Malformed { value: String, reason: &'static str },
    TypeMismatch { name: String, expected: &'static str, found: &'static str },
}

impl fmt::Display for AttrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrError::Malformed { value, reason } => {
                write!(f, "malformed attribute value {value:?}: {reason}")
            }
            AttrError::TypeMismatch { name, expected, found } => {
                write!(f, "attribute {name:?} expected {expected}, found {found}")
            }
        }
    }
}

impl std::error::Error for AttrError {}

/// Flat mapping from option name to value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    values: HashMap<String, AttrValue>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a bag from raw `name = value` string pairs.
    pub fn parse_pairs<I, K, V>(pairs: I) -> Result<Self, AttrError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut attrs = Self::new();
        for (name, raw) in pairs {
            attrs.values.insert(name.into(), AttrValue::parse(raw.as_ref())?);
        }
        Ok(attrs)
    }

    pub fn set(mut self, name: impl Into<String>, value: AttrValue) -> Self {
        self.values.insert(name.into(), value);
        self
    }

    /// Dimension in device pixels.
    pub fn dimension(&self, name: &str, default: f32) -> Result<f32, AttrError> {
        match self.values.get(name) {
            None => Ok(default),
            Some(AttrValue::Integer(v)) => Ok(*v as f32),
            Some(AttrValue::Number(v)) => Ok(*v),
            Some(other) => Err(mismatch(name, "number", other)),
        }
    }

    /// Integer option; fractional values are truncated, out-of-range values
    /// saturate.
    pub fn integer(&self, name: &str, default: i32) -> Result<i32, AttrError> {
        match self.values.get(name) {
            None => Ok(default),
            Some(AttrValue::Integer(v)) => Ok((*v).clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32),
            Some(AttrValue::Number(v)) => Ok(*v as i32),
            Some(other) => Err(mismatch(name, "number", other)),
        }
    }

    pub fn float(&self, name: &str, default: f32) -> Result<f32, AttrError> {
        self.dimension(name, default)
    }

    /// Color option; integers in `0..=0xFFFFFFFF` are read as packed ARGB.
    pub fn color(&self, name: &str, default: Color) -> Result<Color, AttrError> {
        match self.values.get(name) {
            None => Ok(default),
            Some(AttrValue::Color(c)) => Ok(*c),
            Some(AttrValue::Integer(v)) => u32::try_from(*v).map(Color::from_argb).map_err(|_| AttrError::Malformed {
                value: v.to_string(),
                reason: "packed color must fit in 32 bits",
            }),
            Some(other) => Err(mismatch(name, "color", other)),
        }
    }

    pub fn boolean(&self, name: &str, default: bool) -> Result<bool, AttrError> {
        match self.values.get(name) {
            None => Ok(default),
            Some(AttrValue::Bool(b)) => Ok(*b),
            Some(other) => Err(mismatch(name, "bool", other)),
        }
    }

    pub fn text(&self, name: &str) -> Result<Option<&str>, AttrError> {
        match self.values.get(name) {
            None => Ok(None),
            Some(AttrValue::Text(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(mismatch(name, "text", other)),
        }
    }
}

fn mismatch(name: &str, expected: &'static str, found: &AttrValue) -> AttrError {
    AttrError::TypeMismatch { name: name.to_string(), expected, found: found.kind() }
}
