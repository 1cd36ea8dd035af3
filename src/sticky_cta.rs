use std::cell::Cell;
use std::rc::Rc;

use crate::view::{Subscription, Threshold, VisibilityObserver};

pub const STICKY_REGION: &str = "laptops";

/// Length of the enter and exit transitions, in milliseconds.
pub const TRANSITION_MS: u32 = 250;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StickyRegionState {
    pub region_id: &'static str,
    pub is_visible: bool,
}

/// Mirrors whether the deals section is on screen. Every event overwrites
/// the state; there is no debouncing.
pub struct StickyCtaController {
    visible: Rc<Cell<bool>>,
    subscription: Option<Subscription>,
}

impl StickyCtaController {
    pub fn start<F>(observer: &VisibilityObserver, mut on_change: F) -> Self
    where
        F: FnMut(bool) + 'static,
    {
        let visible = Rc::new(Cell::new(false));
        let state = visible.clone();
        let subscription = observer.observe(STICKY_REGION, Threshold::STICKY_CTA, move |event| {
            state.set(event.is_intersecting);
            on_change(event.is_intersecting);
        });
        Self { visible, subscription }
    }

    pub fn state(&self) -> StickyRegionState {
        StickyRegionState {
            region_id: STICKY_REGION,
            is_visible: self.visible.get(),
        }
    }

    pub fn is_watching(&self) -> bool {
        self.subscription.as_ref().map_or(false, Subscription::is_active)
    }

    pub fn stop(&self) {
        if let Some(subscription) = &self.subscription {
            subscription.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::fake::FakeViewport;
    use std::cell::RefCell;

    #[test]
    fn follows_latest_intersection() {
        let viewport = FakeViewport::with_regions(&["hero", "laptops"]);
        let changes = Rc::new(RefCell::new(Vec::new()));
        let log = changes.clone();
        let controller = StickyCtaController::start(&VisibilityObserver::new(viewport.clone()), move |v| {
            log.borrow_mut().push(v)
        });
        assert_eq!(viewport.thresholds("laptops"), vec![0.25]);
        assert!(!controller.state().is_visible);

        for visible in [true, true, false, true, false, false, true] {
            viewport.set_visible("laptops", visible);
            assert_eq!(controller.state().is_visible, visible);
        }
        assert_eq!(changes.borrow().len(), 7);
        assert_eq!(controller.state().region_id, "laptops");
        assert!(controller.is_watching());
    }

    #[test]
    fn other_regions_do_not_move_it() {
        let viewport = FakeViewport::with_regions(&["hero", "laptops"]);
        let controller = StickyCtaController::start(&VisibilityObserver::new(viewport.clone()), |_| {});
        viewport.set_visible("hero", true);
        assert!(!controller.state().is_visible);
    }

    #[test]
    fn without_deals_section_stays_hidden() {
        let viewport = FakeViewport::with_regions(&["hero"]);
        let controller = StickyCtaController::start(&VisibilityObserver::new(viewport.clone()), |_| {});
        assert!(!controller.is_watching());
        controller.stop();
        assert!(!controller.state().is_visible);
    }

    #[test]
    fn stop_is_idempotent() {
        let viewport = FakeViewport::with_regions(&["laptops"]);
        let controller = StickyCtaController::start(&VisibilityObserver::new(viewport.clone()), |_| {});
        viewport.set_visible("laptops", true);
        controller.stop();
        controller.stop();
        viewport.set_visible("laptops", false);
        assert!(controller.state().is_visible);
        assert_eq!(viewport.watcher_count("laptops"), 0);
    }
}
