use core::fmt;
use core::str::FromStr;

use crate::Error;

/// Name of the custom event a [`crate::SectionTracker`] dispatches on its targets.
pub const SECTION_CHANGE_EVENT: &str = "sectionChange";

/// The behaviors a host can register through [`crate::ParaBox`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Behavior {
    Background,
    Item,
    Section,
}

impl Behavior {
    pub const ALL: [Behavior; 3] = [Self::Background, Self::Item, Self::Section];

    pub fn name(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Item => "item",
            Self::Section => "section",
        }
    }
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Behavior {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|b| b.name() == s)
            .ok_or_else(|| Error::UnknownBehavior(s.to_owned()))
    }
}

/// Easing curves understood by hosts when animating item styles.
///
/// `Swing` is the classic page-animation default: slow at both ends, cosine shaped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Easing {
    #[default]
    Swing,
    Linear,
    SmoothStep,
    EaseInOutCubic,
}

impl Easing {
    pub fn name(self) -> &'static str {
        match self {
            Self::Swing => "swing",
            Self::Linear => "linear",
            Self::SmoothStep => "smoothStep",
            Self::EaseInOutCubic => "easeInOutCubic",
        }
    }

    /// Maps linear progress `t` in `[0, 1]` to eased progress.
    pub fn sample(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Swing => 0.5 - (t * core::f32::consts::PI).cos() / 2.0,
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
        }
    }
}

impl FromStr for Easing {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            Self::Swing,
            Self::Linear,
            Self::SmoothStep,
            Self::EaseInOutCubic,
        ]
        .into_iter()
        .find(|e| e.name() == s)
        .ok_or_else(|| Error::UnknownEasing(s.to_owned()))
    }
}

/// How a host should transition an element between two style maps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Animation {
    pub easing: Easing,
    pub duration_ms: u64,
}

/// Handle returned by every registration.
///
/// Pass it to [`crate::ParaBox::unsubscribe`] to drop the scroll handlers the registration added.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Subscription(pub(crate) u64);

impl Subscription {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// One labeled scroll threshold.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionPoint {
    pub name: String,
    pub value: f64,
}

/// Payload of the [`SECTION_CHANGE_EVENT`] notification.
///
/// `index` is `None` while the scroll position is before every section; `name` and `value` are
/// `None` in that case too.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionChange {
    pub index: Option<usize>,
    pub name: Option<String>,
    pub value: Option<f64>,
    /// The tracker that emitted the event.
    pub tracker: Subscription,
}
