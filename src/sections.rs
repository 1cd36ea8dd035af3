use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use crate::analytics::{AnalyticsEvent, AnalyticsSink};
use crate::view::{Subscription, Threshold, VisibilityObserver};

/// Regions whose first appearance is reported, with the label sent along.
pub const TRACKED_SECTIONS: &[(&str, &str)] = &[
    ("hero", "section_hero"),
    ("services", "section_services"),
    ("laptops", "section_laptops"),
    ("about", "section_about"),
    ("contact", "section_contact"),
];

#[derive(Clone, Debug, PartialEq)]
pub struct TrackedRegion {
    pub region_id: &'static str,
    pub label: &'static str,
    pub threshold: Threshold,
    pub has_been_viewed: bool,
}

struct Tracked {
    region: TrackedRegion,
    subscription: Option<Subscription>,
}

/// Sends one `section_view` per region per page lifetime, then stops
/// watching that region.
pub struct SectionViewNotifier {
    regions: Rc<RefCell<Vec<Tracked>>>,
}

impl SectionViewNotifier {
    pub fn start(observer: &VisibilityObserver, sink: Rc<dyn AnalyticsSink>) -> Self {
        Self::start_with(observer, sink, TRACKED_SECTIONS)
    }

    pub fn start_with(
        observer: &VisibilityObserver,
        sink: Rc<dyn AnalyticsSink>,
        sections: &[(&'static str, &'static str)],
    ) -> Self {
        let regions = Rc::new(RefCell::new(Vec::with_capacity(sections.len())));
        for &(region_id, label) in sections {
            let index = regions.borrow().len();
            regions.borrow_mut().push(Tracked {
                region: TrackedRegion {
                    region_id,
                    label,
                    threshold: Threshold::SECTION_VIEW,
                    has_been_viewed: false,
                },
                subscription: None,
            });

            let slot = regions.clone();
            let sink = sink.clone();
            let subscription = observer.observe(region_id, Threshold::SECTION_VIEW, move |event| {
                if event.is_intersecting {
                    mark_viewed(&slot, index, sink.as_ref());
                }
            });
            let Some(subscription) = subscription else {
                debug!("section #{} not on the page, not tracked", region_id);
                continue;
            };
            let already_viewed = regions.borrow()[index].region.has_been_viewed;
            if already_viewed {
                subscription.cancel();
            } else {
                regions.borrow_mut()[index].subscription = Some(subscription);
            }
        }
        Self { regions }
    }

    #[cfg(test)]
    pub fn regions(&self) -> Vec<TrackedRegion> {
        self.regions
            .borrow()
            .iter()
            .map(|tracked| tracked.region.clone())
            .collect()
    }

    /// Regions still waiting for their first view.
    pub fn pending(&self) -> Vec<&'static str> {
        self.regions
            .borrow()
            .iter()
            .filter(|tracked| tracked.subscription.as_ref().map_or(false, Subscription::is_active))
            .map(|tracked| tracked.region.region_id)
            .collect()
    }

    pub fn disconnect(&self) {
        let subscriptions: Vec<Subscription> = self
            .regions
            .borrow_mut()
            .iter_mut()
            .filter_map(|tracked| tracked.subscription.take())
            .collect();
        for subscription in subscriptions {
            subscription.cancel();
        }
    }
}

impl Drop for SectionViewNotifier {
    fn drop(&mut self) {
        self.disconnect();
    }
}

fn mark_viewed(regions: &RefCell<Vec<Tracked>>, index: usize, sink: &dyn AnalyticsSink) {
    let (label, subscription) = {
        let mut regions = regions.borrow_mut();
        let Some(tracked) = regions.get_mut(index) else {
            return;
        };
        if tracked.region.has_been_viewed {
            return;
        }
        tracked.region.has_been_viewed = true;
        (tracked.region.label, tracked.subscription.take())
    };
    AnalyticsEvent::section_view(label).send(sink);
    if let Some(subscription) = subscription {
        subscription.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::RecordingSink;
    use crate::view::fake::FakeViewport;

    const ALL: &[&str] = &["hero", "laptops", "services", "about", "contact"];

    fn setup() -> (Rc<FakeViewport>, Rc<RecordingSink>, SectionViewNotifier) {
        let viewport = FakeViewport::with_regions(ALL);
        let sink = Rc::new(RecordingSink::default());
        let notifier = SectionViewNotifier::start(&VisibilityObserver::new(viewport.clone()), sink.clone());
        (viewport, sink, notifier)
    }

    #[test]
    fn watches_every_section_at_forty_percent() {
        let (viewport, _sink, notifier) = setup();
        for id in ALL {
            assert_eq!(viewport.thresholds(id), vec![0.4]);
        }
        assert_eq!(notifier.pending().len(), 5);
        assert!(notifier.regions().iter().all(|r| !r.has_been_viewed));
    }

    #[test]
    fn laptops_reported_once_across_reentries() {
        let (viewport, sink, notifier) = setup();
        viewport.set_visible("laptops", false);
        assert!(sink.events().is_empty());

        viewport.set_visible("laptops", true);
        viewport.set_visible("laptops", false);
        viewport.set_visible("laptops", true);
        viewport.set_visible("laptops", true);

        assert_eq!(sink.labels("section_view"), vec!["section_laptops"]);
        assert_eq!(viewport.watcher_count("laptops"), 0);
        assert!(!notifier.pending().contains(&"laptops"));
        let laptops = notifier
            .regions()
            .into_iter()
            .find(|r| r.region_id == "laptops")
            .unwrap();
        assert!(laptops.has_been_viewed);
    }

    #[test]
    fn regions_report_independently() {
        let (viewport, sink, _notifier) = setup();
        viewport.set_visible("contact", true);
        viewport.set_visible("hero", true);
        viewport.set_visible("contact", true);
        assert_eq!(sink.labels("section_view"), vec!["section_contact", "section_hero"]);
        assert_eq!(viewport.watcher_count("services"), 1);
    }

    #[test]
    fn missing_sections_are_skipped() {
        let viewport = FakeViewport::with_regions(&["hero"]);
        let sink = Rc::new(RecordingSink::default());
        let notifier = SectionViewNotifier::start(&VisibilityObserver::new(viewport.clone()), sink.clone());
        assert_eq!(notifier.pending(), vec!["hero"]);
        viewport.set_visible("about", true);
        assert!(sink.events().is_empty());
    }

    #[test]
    fn teardown_cancels_unfired_watches() {
        let (viewport, sink, notifier) = setup();
        viewport.set_visible("hero", true);
        drop(notifier);
        for id in ALL {
            assert_eq!(viewport.watcher_count(id), 0);
        }
        viewport.set_visible("about", true);
        assert_eq!(sink.labels("section_view"), vec!["section_hero"]);
    }

    #[test]
    fn disconnect_twice_is_harmless() {
        let (viewport, sink, notifier) = setup();
        notifier.disconnect();
        notifier.disconnect();
        viewport.set_visible("services", true);
        assert!(sink.events().is_empty());
        assert!(notifier.pending().is_empty());
    }
}
