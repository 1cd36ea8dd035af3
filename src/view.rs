use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use log::debug;

pub mod browser;
#[cfg(test)]
pub mod fake;

/// Fraction of a region that has to be on screen before it counts as
/// intersecting. Always in `(0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Threshold(f64);

impl Threshold {
    pub const SECTION_VIEW: Threshold = Threshold(0.4);
    pub const STICKY_CTA: Threshold = Threshold(0.25);

    #[cfg(test)]
    pub fn new(ratio: f64) -> Option<Self> {
        if ratio > 0.0 && ratio <= 1.0 {
            Some(Threshold(ratio))
        } else {
            None
        }
    }

    pub fn ratio(self) -> f64 {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntersectionEvent {
    pub is_intersecting: bool,
}

/// Tears down whatever the environment set up for one watch.
pub type Unwatch = Box<dyn FnOnce()>;

/// The document the interactive pieces run against. The browser version
/// lives in [`browser`]; tests use a fake viewport.
pub trait ViewEnvironment {
    fn contains_region(&self, region_id: &str) -> bool;

    /// Starts delivering intersection changes for `region_id`. Returns `None`
    /// when the region isn't mounted.
    fn watch(
        &self,
        region_id: &str,
        threshold: Threshold,
        on_change: Box<dyn FnMut(IntersectionEvent)>,
    ) -> Option<Unwatch>;

    /// Animated scroll to the region. `false` if it doesn't exist.
    fn scroll_into_view(&self, region_id: &str) -> bool;
}

/// Registration front-end over a [`ViewEnvironment`] that hands out
/// cancellable subscriptions.
#[derive(Clone)]
pub struct VisibilityObserver {
    env: Rc<dyn ViewEnvironment>,
}

impl VisibilityObserver {
    pub fn new(env: Rc<dyn ViewEnvironment>) -> Self {
        Self { env }
    }

    pub fn observe<F>(&self, region_id: &str, threshold: Threshold, mut on_event: F) -> Option<Subscription>
    where
        F: FnMut(IntersectionEvent) + 'static,
    {
        let live = Rc::new(Cell::new(true));
        let gate = live.clone();
        let unwatch = self.env.watch(
            region_id,
            threshold,
            Box::new(move |event| {
                if gate.get() {
                    on_event(event);
                }
            }),
        );
        let Some(unwatch) = unwatch else {
            debug!("region #{} not mounted, nothing to observe", region_id);
            return None;
        };
        debug!("observing #{} at {}", region_id, threshold.ratio());
        Some(Subscription {
            region_id: region_id.to_string(),
            live,
            unwatch: RefCell::new(Some(unwatch)),
        })
    }
}

/// A live observation of one region. Cancelling is immediate and can be
/// repeated; dropping cancels too.
pub struct Subscription {
    region_id: String,
    live: Rc<Cell<bool>>,
    unwatch: RefCell<Option<Unwatch>>,
}

impl Subscription {
    pub fn is_active(&self) -> bool {
        self.live.get()
    }

    pub fn cancel(&self) {
        self.live.set(false);
        // A callback may cancel its own subscription while the environment is
        // still borrowed, so take the teardown out before running it.
        let unwatch = self.unwatch.borrow_mut().take();
        if let Some(unwatch) = unwatch {
            debug!("stopped observing #{}", self.region_id);
            unwatch();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("region_id", &self.region_id)
            .field("active", &self.live.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::fake::FakeViewport;
    use super::*;

    fn observer(viewport: &Rc<FakeViewport>) -> VisibilityObserver {
        VisibilityObserver::new(viewport.clone())
    }

    #[test]
    fn threshold_rejects_out_of_range() {
        assert!(Threshold::new(0.0).is_none());
        assert!(Threshold::new(-0.1).is_none());
        assert!(Threshold::new(1.5).is_none());
        assert!(Threshold::new(f64::NAN).is_none());
        assert_eq!(Threshold::new(1.0).map(Threshold::ratio), Some(1.0));
        assert_eq!(Threshold::SECTION_VIEW.ratio(), 0.4);
        assert_eq!(Threshold::STICKY_CTA.ratio(), 0.25);
    }

    #[test]
    fn missing_region_is_a_silent_no_op() {
        let viewport = FakeViewport::with_regions(&["hero"]);
        let seen = Rc::new(Cell::new(0));
        let counter = seen.clone();
        let sub = observer(&viewport).observe("nope", Threshold::SECTION_VIEW, move |_| {
            counter.set(counter.get() + 1);
        });
        assert!(sub.is_none());
        viewport.set_visible("nope", true);
        assert_eq!(seen.get(), 0);
        assert_eq!(viewport.watcher_count("nope"), 0);
    }

    #[test]
    fn events_arrive_in_order() {
        let viewport = FakeViewport::with_regions(&["laptops"]);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        let _sub = observer(&viewport)
            .observe("laptops", Threshold::STICKY_CTA, move |event| {
                log.borrow_mut().push(event.is_intersecting)
            })
            .unwrap();
        viewport.set_visible("laptops", true);
        viewport.set_visible("laptops", false);
        viewport.set_visible("laptops", true);
        assert_eq!(*seen.borrow(), vec![true, false, true]);
    }

    #[test]
    fn cancel_twice_is_harmless_and_stops_delivery() {
        let viewport = FakeViewport::with_regions(&["about"]);
        let seen = Rc::new(Cell::new(0));
        let counter = seen.clone();
        let sub = observer(&viewport)
            .observe("about", Threshold::SECTION_VIEW, move |_| {
                counter.set(counter.get() + 1)
            })
            .unwrap();
        viewport.set_visible("about", true);
        sub.cancel();
        sub.cancel();
        assert!(!sub.is_active());
        assert_eq!(viewport.watcher_count("about"), 0);
        viewport.set_visible("about", false);
        viewport.set_visible("about", true);
        assert_eq!(seen.get(), 1);
    }

    #[test]
    fn dropping_subscription_unwatches() {
        let viewport = FakeViewport::with_regions(&["contact"]);
        let sub = observer(&viewport).observe("contact", Threshold::SECTION_VIEW, |_| {});
        assert_eq!(viewport.watcher_count("contact"), 1);
        drop(sub);
        assert_eq!(viewport.watcher_count("contact"), 0);
    }
}
