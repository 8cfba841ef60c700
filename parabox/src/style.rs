use core::fmt;
use std::collections::BTreeMap;

/// A single style property value.
///
/// Numeric values (`Number`, `Px`) can be interpolated by hosts that animate; keywords are applied
/// as-is.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "RawStyleValue", into = "RawStyleValue")
)]
pub enum StyleValue {
    Number(f64),
    Px(f64),
    Keyword(String),
}

impl StyleValue {
    /// Parses a CSS-like value: `"0.5"` is a number, `"-12px"` a pixel length, anything else a
    /// keyword.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if let Some(px) = s.strip_suffix("px") {
            if let Ok(v) = px.trim_end().parse::<f64>() {
                return Self::Px(v);
            }
        }
        match s.parse::<f64>() {
            Ok(v) => Self::Number(v),
            Err(_) => Self::Keyword(s.to_owned()),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(v) | Self::Px(v) => Some(*v),
            Self::Keyword(_) => None,
        }
    }

    /// Returns a value of the same kind as `self` holding `v`, or `None` for keywords.
    pub fn with_f64(&self, v: f64) -> Option<Self> {
        match self {
            Self::Number(_) => Some(Self::Number(v)),
            Self::Px(_) => Some(Self::Px(v)),
            Self::Keyword(_) => None,
        }
    }

    /// Whether both values are numeric with the same unit.
    pub fn same_unit(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::Number(_), Self::Number(_)) | (Self::Px(_), Self::Px(_))
        )
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{}", normalize_zero(*v)),
            Self::Px(v) => write!(f, "{}px", normalize_zero(*v)),
            Self::Keyword(k) => f.write_str(k),
        }
    }
}

impl From<f64> for StyleValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

/// `-0` renders as `0`.
pub(crate) fn normalize_zero(v: f64) -> f64 {
    if v == 0.0 { 0.0 } else { v }
}

#[cfg(feature = "serde")]
#[derive(Clone, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
enum RawStyleValue {
    Number(f64),
    Text(String),
}

#[cfg(feature = "serde")]
impl From<RawStyleValue> for StyleValue {
    fn from(raw: RawStyleValue) -> Self {
        match raw {
            RawStyleValue::Number(v) => Self::Number(v),
            RawStyleValue::Text(s) => Self::parse(&s),
        }
    }
}

#[cfg(feature = "serde")]
impl From<StyleValue> for RawStyleValue {
    fn from(v: StyleValue) -> Self {
        match v {
            StyleValue::Number(v) => Self::Number(v),
            other => Self::Text(other.to_string()),
        }
    }
}

/// An ordered set of style property assignments, e.g. `{ opacity: 0, top: 20px }`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StyleMap(BTreeMap<String, StyleValue>);

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, property: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.insert(property, value);
        self
    }

    pub fn insert(
        &mut self,
        property: impl Into<String>,
        value: impl Into<StyleValue>,
    ) -> Option<StyleValue> {
        self.0.insert(property.into(), value.into())
    }

    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.0.get(property)
    }

    pub fn remove(&mut self, property: &str) -> Option<StyleValue> {
        self.0.remove(property)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
