use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures of browser primitives. None of these are shown to visitors;
/// callers log them at debug level and carry on.
#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<serde_wasm_bindgen::Error> for DomError {
    fn from(value: serde_wasm_bindgen::Error) -> Self {
        DomError::Js(value.to_string())
    }
}
