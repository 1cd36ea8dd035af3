use std::rc::Rc;

use log::debug;

use crate::view::ViewEnvironment;

/// Animated in-page navigation. A newer call simply replaces whatever scroll
/// is still running.
#[derive(Clone)]
pub struct SmoothNavigator {
    env: Rc<dyn ViewEnvironment>,
}

impl SmoothNavigator {
    pub fn new(env: Rc<dyn ViewEnvironment>) -> Self {
        Self { env }
    }

    /// Returns `false`, and changes nothing, if the region isn't on the page.
    pub fn navigate_to(&self, region_id: &str) -> bool {
        if !self.env.contains_region(region_id) {
            debug!("no #{} to scroll to", region_id);
            return false;
        }
        self.env.scroll_into_view(region_id)
    }
}
