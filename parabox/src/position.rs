use core::fmt;

use crate::Host;
use crate::style::normalize_zero;

pub const BACKGROUND_POSITION: &str = "background-position";
pub const BACKGROUND_POSITION_X: &str = "background-position-x";

/// Resolves the horizontal part of an element's background position.
///
/// Prefers `background-position-x`; falls back to the first token of `background-position`.
/// Returns an empty string when neither is set.
pub fn horizontal_anchor<E, H: Host<E> + ?Sized>(host: &H, element: &E) -> String {
    if let Some(x) = host.css(element, BACKGROUND_POSITION_X) {
        if !x.trim().is_empty() {
            return x.trim().to_owned();
        }
    }
    host.css(element, BACKGROUND_POSITION)
        .and_then(|pos| pos.split_whitespace().next().map(str::to_owned))
        .unwrap_or_default()
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerticalPosition {
    Px(f64),
    Top,
    Bottom,
}

impl fmt::Display for VerticalPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(v) => write!(f, "{}px", normalize_zero(*v)),
            Self::Top => f.write_str("top"),
            Self::Bottom => f.write_str("bottom"),
        }
    }
}

/// A computed `background-position` value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BackgroundPosition {
    pub left: String,
    pub vertical: VerticalPosition,
}

impl fmt::Display for BackgroundPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.left, self.vertical)
    }
}
