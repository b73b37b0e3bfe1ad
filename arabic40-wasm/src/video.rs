//! Day video embedding on the day-detail page.

use crate::dom;
use crate::errors::{js_error_message, SiteWasmError};
use arabic40_core::{VideoDisplay, VideoMapping};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlElement, HtmlIFrameElement};

pub const IFRAME_ID: &str = "youtube-video";
pub const FALLBACK_ID: &str = "video-fallback";
pub const CONTAINER_SELECTOR: &str = ".video-player";

/// The player iframe, the fallback notice and the sizing container.
pub struct DomVideo {
    iframe: HtmlIFrameElement,
    fallback: Option<HtmlElement>,
    container: Option<HtmlElement>,
}

impl DomVideo {
    /// `None` on pages without a player.
    pub fn find(doc: &Document) -> Option<Self> {
        Some(Self {
            iframe: dom::by_id(doc, IFRAME_ID)?,
            fallback: dom::by_id(doc, FALLBACK_ID),
            container: dom::query(doc, CONTAINER_SELECTOR),
        })
    }
}

impl VideoDisplay for DomVideo {
    fn show_embed(&mut self, url: &str) {
        if let Some(container) = &self.container {
            // 16:9 box
            dom::set_style(container, "position", "relative");
            dom::set_style(container, "width", "100%");
            dom::set_style(container, "padding-top", "56.25%");
        }
        for (property, value) in
            [("position", "absolute"), ("top", "0"), ("left", "0"), ("width", "100%"), ("height", "100%")]
        {
            dom::set_style(&self.iframe, property, value);
        }
        self.iframe.set_src(url);
        dom::set_style(&self.iframe, "display", "block");
        if let Some(fallback) = &self.fallback {
            dom::set_style(fallback, "display", "none");
        }
    }

    fn show_fallback(&mut self) {
        self.iframe.set_src("");
        dom::set_style(&self.iframe, "display", "none");
        if let Some(fallback) = &self.fallback {
            dom::set_style(fallback, "display", "block");
        }
    }
}

/// Fetch and parse the day -> video mapping.
pub async fn fetch_mapping(url: &str) -> Result<VideoMapping, SiteWasmError> {
    let window = dom::window()?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| SiteWasmError::NetworkError(js_error_message(&e, "fetch failed")))?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|_| SiteWasmError::NetworkError("fetch did not return a Response".into()))?;
    if !response.ok() {
        return Err(SiteWasmError::NetworkError(format!(
            "Failed to load video configuration (HTTP {})",
            response.status()
        )));
    }
    let text_promise = response
        .text()
        .map_err(|e| SiteWasmError::NetworkError(js_error_message(&e, "unreadable body")))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|e| SiteWasmError::NetworkError(js_error_message(&e, "unreadable body")))?;
    let body = text.as_string().unwrap_or_default();
    Ok(VideoMapping::from_json(&body)?)
}
