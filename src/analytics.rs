use std::rc::Rc;

use log::debug;
use serde::Serialize;
use serde_json::{Map, Value};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Function, Reflect};

use crate::config::{self, AnalyticsMode};
use crate::error::DomError;

pub type Properties = Map<String, Value>;

/// Where tracked events go. Implementations never fail loudly; an absent
/// backend is just skipped.
pub trait AnalyticsSink {
    fn track(&self, name: &str, properties: &Properties);
}

#[derive(Serialize)]
struct EventParams<'a> {
    event_category: &'a str,
    event_label: &'a str,
}

/// The events the page sends, with the GA4 parameter shape they travel in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalyticsEvent {
    pub name: &'static str,
    pub category: &'static str,
    pub label: String,
}

impl AnalyticsEvent {
    pub fn section_view(label: &str) -> Self {
        Self::new("section_view", "engagement", label)
    }

    pub fn cta_click(label: &str) -> Self {
        Self::new("cta_click", "engagement", label)
    }

    pub fn nav_click(label: &str) -> Self {
        Self::new("nav_click", "navigation", label)
    }

    pub fn whatsapp_click(label: &str) -> Self {
        Self::new("whatsapp_click", "conversion", label)
    }

    fn new(name: &'static str, category: &'static str, label: &str) -> Self {
        Self {
            name,
            category,
            label: label.to_string(),
        }
    }

    pub fn properties(&self) -> Properties {
        let params = EventParams {
            event_category: self.category,
            event_label: &self.label,
        };
        match serde_json::to_value(params) {
            Ok(Value::Object(map)) => map,
            _ => Properties::new(),
        }
    }

    pub fn send(&self, sink: &dyn AnalyticsSink) {
        sink.track(self.name, &self.properties());
    }
}

/// Forwards to `window.gtag` when the GA snippet has loaded.
#[derive(Debug, Default)]
pub struct GtagSink;

impl GtagSink {
    fn try_track(name: &str, properties: &Properties) -> Result<bool, DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let gtag = Reflect::get(&window, &JsValue::from_str("gtag"))?;
        let Some(gtag) = gtag.dyn_ref::<Function>() else {
            return Ok(false);
        };
        // Plain object, not a JS Map, so gtag can read the fields.
        let params = properties.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?;
        gtag.call3(
            &JsValue::NULL,
            &JsValue::from_str("event"),
            &JsValue::from_str(name),
            &params,
        )?;
        Ok(true)
    }
}

impl AnalyticsSink for GtagSink {
    fn track(&self, name: &str, properties: &Properties) {
        match Self::try_track(name, properties) {
            Ok(true) => {}
            Ok(false) => debug!("gtag unavailable, skipped {}", name),
            Err(err) => debug!("gtag call for {} failed: {}", name, err),
        }
    }
}

/// Debug builds log events instead of sending them.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl AnalyticsSink for ConsoleSink {
    fn track(&self, name: &str, properties: &Properties) {
        debug!("analytics {} {}", name, Value::Object(properties.clone()));
    }
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct NoopSink;

#[cfg(test)]
impl AnalyticsSink for NoopSink {
    fn track(&self, _name: &str, _properties: &Properties) {}
}

/// Keeps every event in memory, in order.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: std::cell::RefCell<Vec<(String, Properties)>>,
}

#[cfg(test)]
impl RecordingSink {
    pub fn events(&self) -> Vec<(String, Properties)> {
        self.events.borrow().clone()
    }

    pub fn labels(&self, name: &str) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter(|(event, _)| event == name)
            .filter_map(|(_, props)| props.get("event_label")?.as_str().map(str::to_string))
            .collect()
    }
}

#[cfg(test)]
impl AnalyticsSink for RecordingSink {
    fn track(&self, name: &str, properties: &Properties) {
        self.events
            .borrow_mut()
            .push((name.to_string(), properties.clone()));
    }
}

pub fn default_sink() -> Rc<dyn AnalyticsSink> {
    match config::analytics_mode() {
        AnalyticsMode::Gtag => Rc::new(GtagSink),
        AnalyticsMode::Console => Rc::new(ConsoleSink),
    }
}
