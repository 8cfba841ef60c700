use alloc::vec::Vec;

use crate::key::{ElementKey, ElementMap, remove_handlers};
use crate::{Animation, Host, ItemOptions, Result, StyleMap, Subscription, in_range};

/// Per-element state for item parallax.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemAttrs {
    pub animation: Animation,
    pub top: Option<f64>,
    pub bottom: f64,
    pub from: StyleMap,
    pub to: StyleMap,
    /// Whether the element currently shows its `to` styles.
    pub shown: bool,
}

impl ItemAttrs {
    /// Whether `scroll` lies inside the activation range. An unset `top` acts as zero.
    pub fn is_active_at(&self, scroll: u64) -> bool {
        in_range(scroll as f64, self.top.unwrap_or(0.0), self.bottom)
    }
}

/// Animates elements between two style maps when the scroll offset enters or leaves a range.
#[derive(Clone, Debug)]
pub struct ItemParallax<E> {
    attrs: ElementMap<E, ItemAttrs>,
    handlers: Vec<(Subscription, E)>,
}

impl<E: ElementKey> Default for ItemParallax<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ElementKey> ItemParallax<E> {
    pub fn new() -> Self {
        Self {
            attrs: ElementMap::new(),
            handlers: Vec::new(),
        }
    }

    /// Stores attributes for each element, applies the `from` styles immediately and adds one
    /// scroll handler per element.
    pub fn initialize<H: Host<E> + ?Sized>(
        &mut self,
        host: &mut H,
        elements: &[E],
        options: &ItemOptions,
        subscription: Subscription,
    ) -> Result<()> {
        let bottom = options.bottom.unwrap_or_else(|| host.document_height());
        pdebug!(
            elements = elements.len(),
            top = ?options.top,
            bottom,
            duration_ms = options.duration_ms,
            "ItemParallax::initialize"
        );

        for element in elements {
            let attrs = ItemAttrs {
                animation: options.animation(),
                top: options.top,
                bottom,
                from: options.from.clone(),
                to: options.to.clone(),
                shown: false,
            };
            host.apply_styles(element, &attrs.from);
            self.attrs.insert(element.clone(), attrs);
            self.handlers.push((subscription, element.clone()));
        }
        Ok(())
    }

    /// Runs every item handler for the scroll offset `scroll`.
    ///
    /// An element is animated only when its active state flips; the in-flight animation is
    /// stopped first so rapid direction changes never queue up.
    pub fn on_scroll<H: Host<E> + ?Sized>(&mut self, host: &mut H, scroll: u64) {
        for (_, element) in &self.handlers {
            let Some(attrs) = self.attrs.get_mut(element) else {
                continue;
            };
            let active = attrs.is_active_at(scroll);
            if active == attrs.shown {
                continue;
            }

            ptrace!(scroll, active, "ItemParallax toggle");
            host.stop(element);
            let target = if attrs.shown { &attrs.from } else { &attrs.to };
            host.animate(element, target, attrs.animation);
            attrs.shown = !attrs.shown;
        }
    }

    pub fn attrs(&self, element: &E) -> Option<&ItemAttrs> {
        self.attrs.get(element)
    }

    pub fn is_shown(&self, element: &E) -> bool {
        self.attrs.get(element).is_some_and(|a| a.shown)
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
