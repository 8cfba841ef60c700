use alloc::vec::Vec;

use crate::key::ElementKey;
use crate::{
    BackgroundParallax, Behavior, BehaviorOptions, Error, Host, ItemParallax, Result,
    SectionTracker, Subscription,
};

/// The registration and dispatch point for every scroll effect.
///
/// This type is UI-agnostic:
/// - Hosts register elements with a behavior and its options.
/// - Hosts call [`ParaBox::on_scroll`] whenever the viewport scroll offset changes.
/// - Every effect is applied back through the [`Host`] passed to each call.
///
/// For a ready-made in-memory host with an animation clock, see the `parabox-adapter` crate.
#[derive(Clone, Debug)]
pub struct ParaBox<E> {
    background: BackgroundParallax<E>,
    item: ItemParallax<E>,
    sections: Vec<SectionTracker<E>>,
    next_subscription: u64,
}

impl<E: ElementKey> Default for ParaBox<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ElementKey> ParaBox<E> {
    pub fn new() -> Self {
        Self {
            background: BackgroundParallax::new(),
            item: ItemParallax::new(),
            sections: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Registers `elements` for the behavior selected by `options`.
    ///
    /// Options are validated before anything is stored, so a failed registration leaves the
    /// engine unchanged.
    pub fn register<H: Host<E> + ?Sized>(
        &mut self,
        host: &mut H,
        elements: &[E],
        options: impl Into<BehaviorOptions>,
    ) -> Result<Subscription> {
        let options = options.into();
        let subscription = Subscription(self.next_subscription);

        let res = match &options {
            BehaviorOptions::Background(o) => {
                self.background.initialize(&*host, elements, o, subscription)
            }
            BehaviorOptions::Item(o) => self.item.initialize(host, elements, o, subscription),
            BehaviorOptions::Section(o) => SectionTracker::new(elements, o, subscription)
                .map(|tracker| self.sections.push(tracker)),
        };
        if let Err(err) = res {
            pwarn!(behavior = %options.behavior(), %err, "registration rejected");
            return Err(err);
        }

        self.next_subscription = self.next_subscription.saturating_add(1);
        pdebug!(
            behavior = %options.behavior(),
            subscription = subscription.id(),
            elements = elements.len(),
            "ParaBox::register"
        );
        Ok(subscription)
    }

    /// Registers `elements` for the behavior called `name` (`"background"`, `"item"` or
    /// `"section"`).
    ///
    /// Unknown names fail with [`Error::UnknownBehavior`]; options meant for another behavior
    /// fail with [`Error::OptionsMismatch`].
    pub fn register_named<H: Host<E> + ?Sized>(
        &mut self,
        host: &mut H,
        elements: &[E],
        name: &str,
        options: impl Into<BehaviorOptions>,
    ) -> Result<Subscription> {
        let behavior: Behavior = name.parse()?;
        let options = options.into();
        if options.behavior() != behavior {
            return Err(Error::OptionsMismatch {
                behavior,
                options: options.behavior(),
            });
        }
        self.register(host, elements, options)
    }

    /// Registers `elements` for the behavior called `name`, decoding its options from a
    /// page-style JSON object such as `{"bgHeight": 600, "reverse": false}`.
    #[cfg(feature = "json")]
    pub fn register_json<H: Host<E> + ?Sized>(
        &mut self,
        host: &mut H,
        elements: &[E],
        name: &str,
        options: &serde_json::Value,
    ) -> Result<Subscription> {
        let behavior: Behavior = name.parse()?;
        let options = BehaviorOptions::from_json(behavior, options)?;
        self.register(host, elements, options)
    }

    /// Reads the scroll offset from `host` once and runs every registered handler.
    pub fn on_scroll<H: Host<E> + ?Sized>(&mut self, host: &mut H) {
        let scroll = host.scroll_top();
        ptrace!(scroll, "ParaBox::on_scroll");
        self.background.on_scroll(host, scroll);
        self.item.on_scroll(host, scroll);
        for tracker in &mut self.sections {
            tracker.on_scroll(host, scroll);
        }
    }

    /// Removes every handler added by `subscription`.
    ///
    /// Returns `true` when the subscription was live.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let mut removed = self.background.remove(subscription);
        removed |= self.item.remove(subscription);

        let before = self.sections.len();
        self.sections
            .retain(|tracker| tracker.subscription() != subscription);
        removed |= self.sections.len() != before;

        pdebug!(subscription = subscription.id(), removed, "ParaBox::unsubscribe");
        removed
    }

    pub fn background(&self) -> &BackgroundParallax<E> {
        &self.background
    }

    pub fn item(&self) -> &ItemParallax<E> {
        &self.item
    }

    pub fn section(&self, subscription: Subscription) -> Option<&SectionTracker<E>> {
        self.sections
            .iter()
            .find(|tracker| tracker.subscription() == subscription)
    }

    pub fn sections(&self) -> &[SectionTracker<E>] {
        &self.sections
    }

    /// Number of live scroll handlers: one per registered element for background and item
    /// parallax, one per section tracker.
    pub fn handler_count(&self) -> usize {
        self.background.handler_count() + self.item.handler_count() + self.sections.len()
    }
}
