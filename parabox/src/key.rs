use alloc::vec::Vec;
use std::collections::HashMap;

/// Per-element attribute storage owned by a behavior.
pub(crate) type ElementMap<E, V> = HashMap<E, V>;

/// Identity of a host element.
///
/// Any cheap, clonable handle works: an arena index, a DOM node id, a widget key. The engine
/// never dereferences it; it only uses it to key per-element state and to address the host.
pub trait ElementKey: Clone + core::hash::Hash + Eq {}
impl<T: Clone + core::hash::Hash + Eq> ElementKey for T {}

/// Drops the handlers tagged with `subscription` and the attributes of elements left without a
/// handler. Returns `true` if any handler was removed.
pub(crate) fn remove_handlers<E: ElementKey, V>(
    handlers: &mut Vec<(crate::Subscription, E)>,
    attrs: &mut ElementMap<E, V>,
    subscription: crate::Subscription,
) -> bool {
    let before = handlers.len();
    let mut dropped = Vec::new();
    handlers.retain(|(sub, element)| {
        if *sub == subscription {
            dropped.push(element.clone());
            false
        } else {
            true
        }
    });
    for element in dropped {
        if !handlers.iter().any(|(_, e)| *e == element) {
            attrs.remove(&element);
        }
    }
    handlers.len() != before
}
