use alloc::vec::Vec;

use parabox::{BehaviorOptions, ParaBox, Result, SectionChange, Subscription};

use crate::{ElementId, Page};

/// A framework-neutral controller that owns a [`ParaBox`] engine and the [`Page`] it decorates.
///
/// Adapters drive it by calling:
/// - `on_scroll(offset, now_ms)` when the viewport scrolls
/// - `tick(now_ms)` each frame/timer tick, to advance running animations
#[derive(Clone, Debug, Default)]
pub struct Controller {
    engine: ParaBox<ElementId>,
    page: Page,
}

impl Controller {
    pub fn new(page: Page) -> Self {
        Self {
            engine: ParaBox::new(),
            page,
        }
    }

    pub fn from_parts(engine: ParaBox<ElementId>, page: Page) -> Self {
        Self { engine, page }
    }

    pub fn engine(&self) -> &ParaBox<ElementId> {
        &self.engine
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    pub fn into_parts(self) -> (ParaBox<ElementId>, Page) {
        (self.engine, self.page)
    }

    pub fn register(
        &mut self,
        elements: &[ElementId],
        options: impl Into<BehaviorOptions>,
    ) -> Result<Subscription> {
        self.engine.register(&mut self.page, elements, options)
    }

    pub fn register_named(
        &mut self,
        elements: &[ElementId],
        name: &str,
        options: impl Into<BehaviorOptions>,
    ) -> Result<Subscription> {
        self.engine
            .register_named(&mut self.page, elements, name, options)
    }

    #[cfg(feature = "json")]
    pub fn register_json(
        &mut self,
        elements: &[ElementId],
        name: &str,
        options: &serde_json::Value,
    ) -> Result<Subscription> {
        self.engine
            .register_json(&mut self.page, elements, name, options)
    }

    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.engine.unsubscribe(subscription)
    }

    /// Call this when the UI reports a scroll offset change.
    ///
    /// Running animations are first advanced to `now_ms`, so an item that toggles again restarts
    /// from the value it had actually reached.
    pub fn on_scroll(&mut self, scroll_offset: u64, now_ms: u64) {
        self.page.tick(now_ms);
        self.page.set_scroll_top(scroll_offset);
        self.engine.on_scroll(&mut self.page);
    }

    /// Advances running animations. Returns whether any animation is still running.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.page.tick(now_ms)
    }

    pub fn is_animating(&self) -> bool {
        self.page.has_running_animations()
    }

    /// Section-change events dispatched since the last call, oldest first.
    pub fn take_events(&mut self) -> Vec<(ElementId, SectionChange)> {
        self.page.take_events()
    }
}
