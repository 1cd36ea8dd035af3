//! In-memory viewport for unit tests. Intersection changes are pushed by the
//! test instead of by layout.

use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::rc::Rc;

use super::{IntersectionEvent, Threshold, Unwatch, ViewEnvironment};

type Sink = Rc<RefCell<Box<dyn FnMut(IntersectionEvent)>>>;

struct Watcher {
    id: u64,
    region_id: String,
    threshold: Threshold,
    sink: Sink,
}

#[derive(Default)]
pub struct FakeViewport {
    regions: RefCell<BTreeSet<String>>,
    watchers: Rc<RefCell<Vec<Watcher>>>,
    next_id: Cell<u64>,
    scrolls: RefCell<Vec<String>>,
}

impl FakeViewport {
    pub fn with_regions(ids: &[&str]) -> Rc<Self> {
        let viewport = FakeViewport::default();
        viewport
            .regions
            .borrow_mut()
            .extend(ids.iter().map(|id| id.to_string()));
        Rc::new(viewport)
    }

    pub fn remove_region(&self, region_id: &str) {
        self.regions.borrow_mut().remove(region_id);
    }

    /// Delivers one intersection change to every watcher of the region.
    pub fn set_visible(&self, region_id: &str, is_intersecting: bool) {
        let sinks: Vec<Sink> = self
            .watchers
            .borrow()
            .iter()
            .filter(|w| w.region_id == region_id)
            .map(|w| w.sink.clone())
            .collect();
        for sink in sinks {
            let mut callback = sink.borrow_mut();
            (*callback)(IntersectionEvent { is_intersecting });
        }
    }

    pub fn watcher_count(&self, region_id: &str) -> usize {
        self.watchers
            .borrow()
            .iter()
            .filter(|w| w.region_id == region_id)
            .count()
    }

    pub fn thresholds(&self, region_id: &str) -> Vec<f64> {
        self.watchers
            .borrow()
            .iter()
            .filter(|w| w.region_id == region_id)
            .map(|w| w.threshold.ratio())
            .collect()
    }

    pub fn scrolls(&self) -> Vec<String> {
        self.scrolls.borrow().clone()
    }
}

impl ViewEnvironment for FakeViewport {
    fn contains_region(&self, region_id: &str) -> bool {
        self.regions.borrow().contains(region_id)
    }

    fn watch(
        &self,
        region_id: &str,
        threshold: Threshold,
        on_change: Box<dyn FnMut(IntersectionEvent)>,
    ) -> Option<Unwatch> {
        if !self.contains_region(region_id) {
            return None;
        }
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.watchers.borrow_mut().push(Watcher {
            id,
            region_id: region_id.to_string(),
            threshold,
            sink: Rc::new(RefCell::new(on_change)),
        });
        let watchers = self.watchers.clone();
        Some(Box::new(move || {
            watchers.borrow_mut().retain(|w| w.id != id);
        }))
    }

    fn scroll_into_view(&self, region_id: &str) -> bool {
        if !self.contains_region(region_id) {
            return false;
        }
        self.scrolls.borrow_mut().push(region_id.to_string());
        true
    }
}
