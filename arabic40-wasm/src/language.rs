use crate::dom;
use arabic40_core::{LanguageCode, LanguageSurface};
use tracing::warn;
use web_sys::{Document, HtmlElement};

pub const TOGGLE_SELECTOR: &str = ".language-btn";
const ACTIVE_CLASS: &str = "active";

/// `<html lang>`, the `.language-btn[data-lang]` toggles and the address bar.
pub struct DomLanguage {
    doc: Document,
    toggles: Vec<HtmlElement>,
}

impl DomLanguage {
    pub fn new(doc: &Document) -> Self {
        Self { doc: doc.clone(), toggles: dom::query_all(doc, TOGGLE_SELECTOR) }
    }

    pub fn toggles(&self) -> &[HtmlElement] {
        &self.toggles
    }
}

impl LanguageSurface for DomLanguage {
    fn set_document_language(&mut self, code: &LanguageCode) {
        if let Some(root) = self.doc.document_element() {
            let _ = root.set_attribute("lang", code.as_str());
        }
    }

    fn toggle_codes(&self) -> Vec<Option<String>> {
        self.toggles.iter().map(|t| t.get_attribute("data-lang")).collect()
    }

    fn set_toggle_active(&mut self, index: usize, active: bool) {
        let Some(toggle) = self.toggles.get(index) else { return };
        let classes = toggle.class_list();
        let _ = if active { classes.add_1(ACTIVE_CLASS) } else { classes.remove_1(ACTIVE_CLASS) };
    }

    fn replace_url_lang(&mut self, code: &LanguageCode) {
        let Ok(window) = dom::window() else { return };
        let Ok(href) = window.location().href() else { return };
        let Ok(url) = web_sys::Url::new(&href) else {
            warn!(%href, "cannot parse page URL");
            return;
        };
        url.search_params().set(arabic40_core::types::LANG_PARAM, code.as_str());
        if let Ok(history) = window.history() {
            let state = js_sys::Object::new();
            let _ = history.push_state_with_url(&state, "", Some(&url.href()));
        }
    }
}

/// Current `lang` attribute of the document element.
pub fn document_language(doc: &Document) -> String {
    doc.document_element().and_then(|root| root.get_attribute("lang")).unwrap_or_default()
}
