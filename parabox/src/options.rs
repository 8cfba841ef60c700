use std::collections::BTreeMap;

use crate::{Animation, Behavior, Easing, Error, Result, StyleMap};

/// Configuration for [`crate::BackgroundParallax`].
///
/// With `feature = "serde"`, field names follow the page-facing option keys (`bgHeight`, `area`,
/// `reverse`) and missing fields take their defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct BackgroundOptions {
    /// Height of the background image, in pixels.
    pub bg_height: u32,
    /// Radius around the element's offset within which the background moves continuously.
    ///
    /// Must be greater than zero.
    pub area: u32,
    /// Move the background against the scroll direction.
    pub reverse: bool,
}

impl Default for BackgroundOptions {
    fn default() -> Self {
        Self {
            bg_height: 480,
            area: 240,
            reverse: true,
        }
    }
}

impl BackgroundOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bg_height(mut self, bg_height: u32) -> Self {
        self.bg_height = bg_height;
        self
    }

    pub fn with_area(mut self, area: u32) -> Self {
        self.area = area;
        self
    }

    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.area == 0 {
            return Err(Error::ZeroArea);
        }
        Ok(())
    }
}

/// Configuration for [`crate::ItemParallax`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ItemOptions {
    /// Inclusive lower bound of the activation range. Unset acts as zero.
    pub top: Option<f64>,
    /// Exclusive upper bound of the activation range. Unset means the document height at
    /// registration time.
    pub bottom: Option<f64>,
    pub easing: Easing,
    #[cfg_attr(feature = "serde", serde(rename = "duration"))]
    pub duration_ms: u64,
    /// Styles applied while inactive.
    pub from: StyleMap,
    /// Styles applied while active.
    pub to: StyleMap,
}

impl Default for ItemOptions {
    fn default() -> Self {
        Self {
            top: None,
            bottom: None,
            easing: Easing::Swing,
            duration_ms: 500,
            from: StyleMap::new(),
            to: StyleMap::new(),
        }
    }
}

impl ItemOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the activation range `[top, bottom)`.
    pub fn with_range(mut self, top: Option<f64>, bottom: Option<f64>) -> Self {
        self.top = top;
        self.bottom = bottom;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_from(mut self, from: StyleMap) -> Self {
        self.from = from;
        self
    }

    pub fn with_to(mut self, to: StyleMap) -> Self {
        self.to = to;
        self
    }

    pub fn animation(&self) -> Animation {
        Animation {
            easing: self.easing,
            duration_ms: self.duration_ms,
        }
    }
}

/// Configuration for [`crate::SectionTracker`]: section name to scroll threshold.
///
/// Input order does not matter; thresholds are sorted when the tracker is built.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SectionOptions {
    pub sections: BTreeMap<String, f64>,
}

impl SectionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_section(mut self, name: impl Into<String>, value: f64) -> Self {
        self.sections.insert(name.into(), value);
        self
    }

    pub fn validate(&self) -> Result<()> {
        match self.sections.iter().find(|(_, v)| !v.is_finite()) {
            Some((name, _)) => Err(Error::NonFiniteThreshold { name: name.clone() }),
            None => Ok(()),
        }
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for SectionOptions {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            sections: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Options for any behavior, as accepted by [`crate::ParaBox::register`].
#[derive(Clone, Debug, PartialEq)]
pub enum BehaviorOptions {
    Background(BackgroundOptions),
    Item(ItemOptions),
    Section(SectionOptions),
}

impl BehaviorOptions {
    pub fn behavior(&self) -> Behavior {
        match self {
            Self::Background(_) => Behavior::Background,
            Self::Item(_) => Behavior::Item,
            Self::Section(_) => Behavior::Section,
        }
    }

    /// Default options for `behavior`.
    pub fn defaults(behavior: Behavior) -> Self {
        match behavior {
            Behavior::Background => Self::Background(BackgroundOptions::default()),
            Behavior::Item => Self::Item(ItemOptions::default()),
            Behavior::Section => Self::Section(SectionOptions::default()),
        }
    }

    /// Decodes a page-style options object for `behavior`.
    ///
    /// `null` yields the defaults; missing fields take their defaults.
    #[cfg(feature = "json")]
    pub fn from_json(behavior: Behavior, value: &serde_json::Value) -> Result<Self> {
        use serde::Deserialize;

        if value.is_null() {
            return Ok(Self::defaults(behavior));
        }
        Ok(match behavior {
            Behavior::Background => Self::Background(BackgroundOptions::deserialize(value)?),
            Behavior::Item => Self::Item(ItemOptions::deserialize(value)?),
            Behavior::Section => Self::Section(SectionOptions::deserialize(value)?),
        })
    }
}

impl From<BackgroundOptions> for BehaviorOptions {
    fn from(o: BackgroundOptions) -> Self {
        Self::Background(o)
    }
}

impl From<ItemOptions> for BehaviorOptions {
    fn from(o: ItemOptions) -> Self {
        Self::Item(o)
    }
}

impl From<SectionOptions> for BehaviorOptions {
    fn from(o: SectionOptions) -> Self {
        Self::Section(o)
    }
}
