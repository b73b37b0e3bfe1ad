//! WASM-side error handling for the course site

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Failures raised while wiring the page.
#[derive(Debug, Clone)]
pub enum SiteWasmError {
    /// No `window` / `document` (not running in a browser page)
    NoDocument,
    /// A required element is absent from the markup
    MissingElement(String),
    /// A DOM call threw
    DomError(String),
    /// Fetching a resource failed
    NetworkError(String),
    /// Configuration is invalid
    ConfigurationError(String),
    /// Serialization/deserialization error
    SerializationError(String),
}

impl std::fmt::Display for SiteWasmError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SiteWasmError::NoDocument => write!(f, "No document available"),
            SiteWasmError::MissingElement(sel) => write!(f, "Missing element: {sel}"),
            SiteWasmError::DomError(msg) => write!(f, "DOM error: {msg}"),
            SiteWasmError::NetworkError(msg) => write!(f, "Network error: {msg}"),
            SiteWasmError::ConfigurationError(msg) => write!(f, "Configuration error: {msg}"),
            SiteWasmError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for SiteWasmError {}

impl From<SiteWasmError> for JsValue {
    fn from(error: SiteWasmError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

impl From<arabic40_core::Error> for SiteWasmError {
    fn from(error: arabic40_core::Error) -> Self {
        match error {
            arabic40_core::Error::Config(msg) => SiteWasmError::ConfigurationError(msg),
            arabic40_core::Error::Serde(e) => SiteWasmError::SerializationError(e.to_string()),
            arabic40_core::Error::VideoLoad(msg) => SiteWasmError::NetworkError(msg),
            other => SiteWasmError::DomError(other.to_string()),
        }
    }
}

/// Result type for WASM operations
pub type WasmResult<T> = Result<T, JsValue>;

/// Best-effort message out of a thrown JS value.
pub fn js_error_message(err: &JsValue, fallback: &str) -> String {
    if let Some(message) = err.as_string() {
        return message;
    }
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return error.message().into();
    }
    fallback.to_string()
}
