use alloc::vec::Vec;

use crate::{Host, Result, SectionChange, SectionOptions, SectionPoint, Subscription};

/// Tracks which labeled scroll threshold was passed last and notifies targets when it changes.
///
/// A section is active once the scroll offset is strictly greater than its threshold; the active
/// section is the one with the greatest such threshold. Before every threshold no section is
/// active.
#[derive(Clone, Debug)]
pub struct SectionTracker<E> {
    subscription: Subscription,
    targets: Vec<E>,
    points: Vec<SectionPoint>,
    // `None` until the first notification; the inner value is the notified index.
    notified: Option<Option<usize>>,
}

impl<E: Clone> SectionTracker<E> {
    pub fn new(
        targets: &[E],
        options: &SectionOptions,
        subscription: Subscription,
    ) -> Result<Self> {
        options.validate()?;

        let mut points: Vec<SectionPoint> = options
            .sections
            .iter()
            .map(|(name, value)| SectionPoint {
                name: name.clone(),
                value: *value,
            })
            .collect();
        points.sort_by(|a, b| a.value.total_cmp(&b.value));
        pdebug!(
            targets = targets.len(),
            sections = points.len(),
            "SectionTracker::new"
        );

        Ok(Self {
            subscription,
            targets: targets.to_vec(),
            points,
            notified: None,
        })
    }

    pub fn subscription(&self) -> Subscription {
        self.subscription
    }

    /// Thresholds in ascending order.
    pub fn points(&self) -> &[SectionPoint] {
        &self.points
    }

    pub fn targets(&self) -> &[E] {
        &self.targets
    }

    /// Index of the last notified section, or `None` if nothing was notified yet.
    ///
    /// `Some(None)` means the last notification reported "before every section".
    pub fn current(&self) -> Option<Option<usize>> {
        self.notified
    }

    /// Index of the section active at `scroll`.
    pub fn active_index(&self, scroll: u64) -> Option<usize> {
        let scroll = scroll as f64;
        self.points
            .partition_point(|p| p.value < scroll)
            .checked_sub(1)
    }

    pub fn change_for(&self, index: Option<usize>) -> SectionChange {
        let point = index.and_then(|i| self.points.get(i));
        SectionChange {
            index,
            name: point.map(|p| p.name.clone()),
            value: point.map(|p| p.value),
            tracker: self.subscription,
        }
    }

    /// Notifies every target when the active section differs from the last notified one.
    ///
    /// Returns the dispatched event, if any.
    pub fn on_scroll<H: Host<E> + ?Sized>(
        &mut self,
        host: &mut H,
        scroll: u64,
    ) -> Option<SectionChange> {
        let index = self.active_index(scroll);
        if self.notified == Some(index) {
            return None;
        }

        let change = self.change_for(index);
        ptrace!(
            scroll,
            index = ?change.index,
            name = ?change.name,
            "SectionTracker change"
        );
        for target in &self.targets {
            host.trigger(target, &change);
        }
        self.notified = Some(index);
        Some(change)
    }
}
