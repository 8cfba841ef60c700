use alloc::vec::Vec;

use crate::key::{ElementKey, ElementMap, remove_handlers};
use crate::position::{BACKGROUND_POSITION, horizontal_anchor};
use crate::{
    BackgroundOptions, BackgroundPosition, Host, Result, StyleValue, Subscription,
    VerticalPosition,
};

/// Per-element state captured when an element is registered for background parallax.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BackgroundAttrs {
    pub reverse: bool,
    /// Element height at registration.
    pub height: u32,
    /// Horizontal background anchor, kept as-is in every update.
    pub left: String,
    /// Element top in document coordinates at registration.
    pub offset: u64,
    /// Always non-zero.
    pub area: u32,
    /// `bg_height - height`; negative when the image is shorter than the element.
    pub margin: i64,
}

impl BackgroundAttrs {
    /// Computes the background position for a scroll offset.
    ///
    /// Within `area` of the element's offset the vertical position is interpolated across
    /// `margin`; outside it the background is pinned to the top or the bottom.
    pub fn position_at(&self, scroll: u64) -> BackgroundPosition {
        let diff = scroll as i64 - self.offset as i64;
        let area = self.area as i64;

        let vertical = if diff.abs() < area {
            let t = (diff + area) as f64 / (area * 2) as f64;
            let margin = self.margin as f64;
            if self.reverse {
                VerticalPosition::Px(-t * margin)
            } else {
                VerticalPosition::Px(-(1.0 - t) * margin)
            }
        } else {
            match (self.reverse, diff < 0) {
                (true, true) | (false, false) => VerticalPosition::Top,
                (true, false) | (false, true) => VerticalPosition::Bottom,
            }
        };

        BackgroundPosition {
            left: self.left.clone(),
            vertical,
        }
    }
}

/// Moves element backgrounds vertically as the page scrolls.
#[derive(Clone, Debug)]
pub struct BackgroundParallax<E> {
    attrs: ElementMap<E, BackgroundAttrs>,
    handlers: Vec<(Subscription, E)>,
}

impl<E: ElementKey> Default for BackgroundParallax<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ElementKey> BackgroundParallax<E> {
    pub fn new() -> Self {
        Self {
            attrs: ElementMap::new(),
            handlers: Vec::new(),
        }
    }

    /// Captures geometry for each element and adds one scroll handler per element.
    ///
    /// Fails with [`crate::Error::ZeroArea`] before touching any element when `options.area` is
    /// zero. Registering an element twice replaces its attributes and adds a second handler.
    pub fn initialize<H: Host<E> + ?Sized>(
        &mut self,
        host: &H,
        elements: &[E],
        options: &BackgroundOptions,
        subscription: Subscription,
    ) -> Result<()> {
        options.validate()?;
        pdebug!(
            elements = elements.len(),
            bg_height = options.bg_height,
            area = options.area,
            reverse = options.reverse,
            "BackgroundParallax::initialize"
        );

        for element in elements {
            let height = host.client_height(element);
            let attrs = BackgroundAttrs {
                reverse: options.reverse,
                height,
                left: horizontal_anchor(host, element),
                offset: host.offset_top(element),
                area: options.area,
                margin: options.bg_height as i64 - height as i64,
            };
            self.attrs.insert(element.clone(), attrs);
            self.handlers.push((subscription, element.clone()));
        }
        Ok(())
    }

    /// Runs every background handler for the scroll offset `scroll`.
    pub fn on_scroll<H: Host<E> + ?Sized>(&self, host: &mut H, scroll: u64) {
        for (_, element) in &self.handlers {
            let Some(attrs) = self.attrs.get(element) else {
                continue;
            };
            let position = attrs.position_at(scroll);
            host.set_css(
                element,
                BACKGROUND_POSITION,
                StyleValue::Keyword(position.to_string()),
            );
        }
    }

    pub fn attrs(&self, element: &E) -> Option<&BackgroundAttrs> {
        self.attrs.get(element)
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Drops the handlers added by `subscription`, and the attributes of elements left without
    /// handlers. Returns `true` if anything was removed.
    pub fn remove(&mut self, subscription: Subscription) -> bool {
        remove_handlers(&mut self.handlers, &mut self.attrs, subscription)
    }
}
