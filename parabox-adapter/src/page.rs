use alloc::vec::Vec;

use parabox::{Animation, Host, SectionChange, StyleMap, StyleValue};

use crate::Tween;

/// Handle of an element on a [`Page`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementId(u32);

impl ElementId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
struct PropertyTween {
    property: String,
    // Carries the unit the sampled value is written back with.
    target: StyleValue,
    tween: Tween,
}

#[derive(Clone, Debug, Default)]
struct ElementState {
    offset_top: u64,
    client_height: u32,
    styles: StyleMap,
    running: Vec<PropertyTween>,
}

/// An in-memory page: element geometry, inline styles, a millisecond clock and an event log.
///
/// `Page` implements [`Host`], so it can drive a [`parabox::ParaBox`] directly. Animations are
/// advanced explicitly with [`Page::tick`]; numeric values with matching units are tweened, other
/// values are applied when the animation starts.
#[derive(Clone, Debug, Default)]
pub struct Page {
    elements: Vec<ElementState>,
    scroll_top: u64,
    document_height: f64,
    now_ms: u64,
    events: Vec<(ElementId, SectionChange)>,
}

impl Page {
    pub fn new(document_height: f64) -> Self {
        Self {
            document_height,
            ..Self::default()
        }
    }

    /// Adds an element at `offset_top` (document coordinates) with the given height.
    pub fn add_element(&mut self, offset_top: u64, client_height: u32) -> ElementId {
        let id = ElementId(self.elements.len() as u32);
        self.elements.push(ElementState {
            offset_top,
            client_height,
            ..ElementState::default()
        });
        id
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    pub fn set_scroll_top(&mut self, scroll_top: u64) {
        self.scroll_top = scroll_top;
    }

    pub fn set_document_height(&mut self, document_height: f64) {
        self.document_height = document_height;
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn set_style(
        &mut self,
        element: ElementId,
        property: &str,
        value: impl Into<StyleValue>,
    ) {
        self.set_css(&element, property, value.into());
    }

    pub fn style(&self, element: ElementId, property: &str) -> Option<&StyleValue> {
        self.elements.get(element.index())?.styles.get(property)
    }

    pub fn styles(&self, element: ElementId) -> Option<&StyleMap> {
        self.elements.get(element.index()).map(|e| &e.styles)
    }

    pub fn is_animating(&self, element: ElementId) -> bool {
        self.elements
            .get(element.index())
            .is_some_and(|e| !e.running.is_empty())
    }

    pub fn has_running_animations(&self) -> bool {
        self.elements.iter().any(|e| !e.running.is_empty())
    }

    /// Advances the clock to `now_ms` and writes sampled values for every running animation.
    ///
    /// Finished animations land exactly on their targets and are dropped. Returns whether any
    /// animation is still running.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.now_ms = self.now_ms.max(now_ms);
        let now_ms = self.now_ms;
        let mut running = false;

        for element in &mut self.elements {
            for pt in &element.running {
                if let Some(value) = pt.target.with_f64(pt.tween.sample(now_ms)) {
                    element.styles.insert(pt.property.as_str(), value);
                }
            }
            element.running.retain(|pt| !pt.tween.is_done(now_ms));
            running |= !element.running.is_empty();
        }
        running
    }

    /// Events dispatched since the last call, oldest first.
    pub fn take_events(&mut self) -> Vec<(ElementId, SectionChange)> {
        core::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[(ElementId, SectionChange)] {
        &self.events
    }
}

impl Host<ElementId> for Page {
    fn scroll_top(&self) -> u64 {
        self.scroll_top
    }

    fn document_height(&self) -> f64 {
        self.document_height
    }

    fn client_height(&self, element: &ElementId) -> u32 {
        self.elements
            .get(element.index())
            .map_or(0, |e| e.client_height)
    }

    fn offset_top(&self, element: &ElementId) -> u64 {
        self.elements.get(element.index()).map_or(0, |e| e.offset_top)
    }

    fn css(&self, element: &ElementId, property: &str) -> Option<String> {
        self.style(*element, property).map(|v| v.to_string())
    }

    fn set_css(&mut self, element: &ElementId, property: &str, value: StyleValue) {
        let Some(e) = self.elements.get_mut(element.index()) else {
            pwarn!(element = element.index(), property, "set_css on unknown element");
            return;
        };
        e.styles.insert(property, value);
    }

    fn stop(&mut self, element: &ElementId) {
        if let Some(e) = self.elements.get_mut(element.index()) {
            if !e.running.is_empty() {
                ptrace!(element = element.index(), "stop");
            }
            e.running.clear();
        }
    }

    fn animate(&mut self, element: &ElementId, styles: &StyleMap, animation: Animation) {
        let now_ms = self.now_ms;
        let Some(e) = self.elements.get_mut(element.index()) else {
            pwarn!(element = element.index(), "animate on unknown element");
            return;
        };
        ptrace!(
            element = element.index(),
            properties = styles.len(),
            duration_ms = animation.duration_ms,
            "animate"
        );

        for (property, target) in styles.iter() {
            e.running.retain(|pt| pt.property != property);

            let Some(to) = target.as_f64() else {
                e.styles.insert(property, target.clone());
                continue;
            };
            // A missing value starts from zero in the target's unit.
            let from = match e.styles.get(property) {
                Some(current) if current.same_unit(target) => current.as_f64(),
                Some(_) => None,
                None => Some(0.0),
            };
            let Some(from) = from.filter(|_| animation.duration_ms > 0) else {
                e.styles.insert(property, target.clone());
                continue;
            };
            e.running.push(PropertyTween {
                property: property.to_owned(),
                target: target.clone(),
                tween: Tween::new(from, to, now_ms, animation.duration_ms, animation.easing),
            });
        }
    }

    fn trigger(&mut self, element: &ElementId, event: &SectionChange) {
        self.events.push((*element, event.clone()));
    }
}
