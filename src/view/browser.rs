use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollIntoViewOptions,
};

use super::{IntersectionEvent, Threshold, Unwatch, ViewEnvironment};
use crate::error::DomError;

/// [`ViewEnvironment`] backed by the live DOM.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BrowserViewport;

pub fn document() -> Result<Document, DomError> {
    web_sys::window()
        .ok_or(DomError::NoWindow)?
        .document()
        .ok_or(DomError::NoDocument)
}

fn region(region_id: &str) -> Option<Element> {
    match document() {
        Ok(document) => document.get_element_by_id(region_id),
        Err(err) => {
            debug!("region lookup for #{} failed: {}", region_id, err);
            None
        }
    }
}

fn observe_element(
    element: &Element,
    threshold: Threshold,
    mut on_change: Box<dyn FnMut(IntersectionEvent)>,
) -> Result<Unwatch, DomError> {
    let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
        // One batch can carry several geometry changes; keep their order.
        for entry in entries.iter() {
            if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                on_change(IntersectionEvent {
                    is_intersecting: entry.is_intersecting(),
                });
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold.ratio()));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(element);

    Ok(Box::new(move || {
        observer.disconnect();
        drop(callback);
    }))
}

impl ViewEnvironment for BrowserViewport {
    fn contains_region(&self, region_id: &str) -> bool {
        region(region_id).is_some()
    }

    fn watch(
        &self,
        region_id: &str,
        threshold: Threshold,
        on_change: Box<dyn FnMut(IntersectionEvent)>,
    ) -> Option<Unwatch> {
        let element = region(region_id)?;
        match observe_element(&element, threshold, on_change) {
            Ok(unwatch) => Some(unwatch),
            Err(err) => {
                debug!("could not observe #{}: {}", region_id, err);
                None
            }
        }
    }

    fn scroll_into_view(&self, region_id: &str) -> bool {
        let Some(element) = region(region_id) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount(id: &str) -> Element {
        let document = document().unwrap();
        let element = document.create_element("section").unwrap();
        element.set_id(id);
        document.body().unwrap().append_child(&element).unwrap();
        element
    }

    #[wasm_bindgen_test]
    fn absent_region_is_not_watched_or_scrolled() {
        let viewport = BrowserViewport;
        assert!(!viewport.contains_region("missing-region"));
        assert!(viewport
            .watch("missing-region", Threshold::SECTION_VIEW, Box::new(|_| {}))
            .is_none());
        assert!(!viewport.scroll_into_view("missing-region"));
    }

    #[wasm_bindgen_test]
    fn mounted_region_can_be_watched_and_released() {
        let element = mount("browser-test-region");
        let viewport = BrowserViewport;
        assert!(viewport.contains_region("browser-test-region"));
        let unwatch = viewport
            .watch("browser-test-region", Threshold::STICKY_CTA, Box::new(|_| {}))
            .unwrap();
        unwatch();
        assert!(viewport.scroll_into_view("browser-test-region"));
        element.remove();
    }
}
