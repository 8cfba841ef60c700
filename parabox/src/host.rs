use crate::{Animation, SectionChange, StyleMap, StyleValue};

/// Everything the engine needs from the page it decorates.
///
/// The engine never holds UI objects. A browser binding, a TUI/GUI toolkit, or a test double
/// implements this trait and passes itself to [`crate::ParaBox`] on registration and on every
/// scroll event.
pub trait Host<E> {
    /// The current vertical scroll offset of the viewport.
    fn scroll_top(&self) -> u64;

    /// Total document height, used as the default activation bound for item parallax.
    fn document_height(&self) -> f64;

    /// Inner height of `element`, in pixels.
    fn client_height(&self, element: &E) -> u32;

    /// Top of `element` in document coordinates.
    fn offset_top(&self, element: &E) -> u64;

    /// Current value of a style property, rendered as CSS text.
    fn css(&self, element: &E, property: &str) -> Option<String>;

    fn set_css(&mut self, element: &E, property: &str, value: StyleValue);

    /// Applies every assignment in `styles` immediately.
    fn apply_styles(&mut self, element: &E, styles: &StyleMap) {
        for (property, value) in styles.iter() {
            self.set_css(element, property, value.clone());
        }
    }

    /// Cancels any in-flight animation on `element`, leaving its current values in place.
    fn stop(&mut self, element: &E);

    /// Starts transitioning `element` towards `styles`.
    ///
    /// The animation runs asynchronously relative to scroll handling.
    fn animate(&mut self, element: &E, styles: &StyleMap, animation: Animation);

    /// Dispatches a [`crate::SECTION_CHANGE_EVENT`] on `element`.
    fn trigger(&mut self, element: &E, event: &SectionChange);
}
