use std::rc::Rc;

use log::debug;
use web_sys::MouseEvent;
use yew::Callback;

use crate::analytics::{self, AnalyticsEvent, AnalyticsSink};
use crate::navigator::SmoothNavigator;
use crate::view::browser::BrowserViewport;
use crate::view::{ViewEnvironment, VisibilityObserver};

/// What every interactive piece of the page needs, handed down through a
/// yew context.
#[derive(Clone)]
pub struct PageServices {
    pub observer: VisibilityObserver,
    pub navigator: SmoothNavigator,
    pub analytics: Rc<dyn AnalyticsSink>,
}

impl PartialEq for PageServices {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.analytics, &other.analytics)
    }
}

impl PageServices {
    pub fn new(env: Rc<dyn ViewEnvironment>, analytics: Rc<dyn AnalyticsSink>) -> Self {
        Self {
            observer: VisibilityObserver::new(env.clone()),
            navigator: SmoothNavigator::new(env),
            analytics,
        }
    }

    pub fn browser() -> Self {
        Self::new(Rc::new(BrowserViewport), analytics::default_sink())
    }

    pub fn track(&self, event: &AnalyticsEvent) {
        event.send(self.analytics.as_ref());
    }

    /// Click handler for in-page anchors: report the click, then scroll
    /// instead of jumping.
    pub fn nav_click(&self, region_id: &'static str, source_label: &str) -> Callback<MouseEvent> {
        let services = self.clone();
        let event = AnalyticsEvent::cta_click(source_label);
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            services.track(&event);
            debug!("navigating to #{}", region_id);
            services.navigator.navigate_to(region_id);
        })
    }

    /// Click handler for outbound WhatsApp links. The link itself opens.
    pub fn whatsapp_click(&self, source_label: &str) -> Callback<MouseEvent> {
        let services = self.clone();
        let event = AnalyticsEvent::whatsapp_click(source_label);
        Callback::from(move |_: MouseEvent| services.track(&event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::RecordingSink;
    use crate::view::fake::FakeViewport;

    #[test]
    fn shares_one_environment() {
        let viewport = FakeViewport::with_regions(&["contact"]);
        let sink = Rc::new(RecordingSink::default());
        let services = PageServices::new(viewport.clone(), sink.clone());
        assert!(services.navigator.navigate_to("contact"));
        let _sub = services
            .observer
            .observe("contact", crate::view::Threshold::SECTION_VIEW, |_| {});
        assert_eq!(viewport.watcher_count("contact"), 1);
        services.track(&AnalyticsEvent::cta_click("nav_contact"));
        assert_eq!(sink.labels("cta_click"), vec!["nav_contact"]);
    }

    #[test]
    fn equality_follows_the_sink() {
        let viewport = FakeViewport::with_regions(&[]);
        let sink: Rc<dyn AnalyticsSink> = Rc::new(RecordingSink::default());
        let a = PageServices::new(viewport.clone(), sink.clone());
        let b = a.clone();
        let c = PageServices::new(viewport, Rc::new(RecordingSink::default()));
        assert!(a == b);
        assert!(a != c);
    }
}
