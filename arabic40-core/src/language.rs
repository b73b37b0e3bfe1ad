//! Preferred-language handling.
//!
//! The preference is the only state that survives a reload. It is resolved once at
//! start-up (URL `lang`, then storage, then the configured default) and rewritten only
//! by an explicit user choice: a toggle button or a language card.

use crate::config::SiteConfig;
use crate::types::LanguageCode;
use std::collections::HashMap;
use tracing::{debug, info};

/// Durable key/value storage (browser `localStorage` in production).
pub trait PreferenceStore {
	/// Read a value; `None` when absent or storage is unavailable.
	fn get(&self, key: &str) -> Option<String>;
	/// Write a value. Failures are swallowed by the host; the page keeps working.
	fn set(&mut self, key: &str, value: &str);
}

/// The document-side effects of a language change.
pub trait LanguageSurface {
	/// Set the document's `lang` attribute.
	fn set_document_language(&mut self, code: &LanguageCode);
	/// Codes carried by the toggle controls, in document order; `None` for a toggle
	/// without a code, which is never active.
	fn toggle_codes(&self) -> Vec<Option<String>>;
	/// Mark toggle `index` active or inactive.
	fn set_toggle_active(&mut self, index: usize, active: bool);
	/// Rewrite the `lang` query parameter of the current URL without navigating.
	fn replace_url_lang(&mut self, code: &LanguageCode);
}

/// In-memory [`PreferenceStore`].
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
	values: HashMap<String, String>,
}

impl MemoryStore {
	/// Empty store.
	pub fn new() -> Self { Self::default() }
}

impl PreferenceStore for MemoryStore {
	fn get(&self, key: &str) -> Option<String> { self.values.get(key).cloned() }
	fn set(&mut self, key: &str, value: &str) { self.values.insert(key.to_string(), value.to_string()); }
}

/// Language Preference Manager.
#[derive(Debug)]
pub struct LanguagePreference<S: PreferenceStore> {
	store: S,
	storage_key: String,
	default_language: LanguageCode,
	current: Option<LanguageCode>,
}

impl<S: PreferenceStore> LanguagePreference<S> {
	/// Manager over `store` using the key and default from `cfg`.
	pub fn new(store: S, cfg: &SiteConfig) -> Self {
		Self {
			store,
			storage_key: cfg.storage_key.clone(),
			default_language: LanguageCode::new(cfg.default_language.clone()),
			current: None,
		}
	}

	/// The stored preference, if any.
	pub fn stored(&self) -> Option<LanguageCode> { self.store.get(&self.storage_key).map(LanguageCode::from) }

	/// Last applied code.
	pub fn current(&self) -> Option<&LanguageCode> { self.current.as_ref() }

	/// Code used for newly rendered grid links: the stored preference or the default.
	pub fn link_language(&self) -> LanguageCode { self.stored().unwrap_or_else(|| self.default_language.clone()) }

	/// Resolve the starting language and apply it.
	pub fn initialize(&mut self, url_lang: Option<&str>, surface: &mut impl LanguageSurface) -> LanguageCode {
		let code = url_lang
			.map(LanguageCode::from)
			.or_else(|| self.stored())
			.unwrap_or_else(|| self.default_language.clone());
		debug!(code = %code, from_url = url_lang.is_some(), "initial language resolved");
		self.apply(&code, surface);
		code
	}

	/// Persist `code` and reflect it on the document and the toggles.
	///
	/// A toggle is active iff its code equals `code` exactly.
	pub fn apply(&mut self, code: &LanguageCode, surface: &mut impl LanguageSurface) {
		self.store.set(&self.storage_key, code.as_str());
		surface.set_document_language(code);
		for (index, toggle) in surface.toggle_codes().iter().enumerate() {
			surface.set_toggle_active(index, toggle.as_deref() == Some(code.as_str()));
		}
		info!(code = %code, "language applied");
		self.current = Some(code.clone());
	}

	/// A toggle was clicked: apply its code and rewrite the URL in place.
	pub fn select_toggle(&mut self, code: &LanguageCode, surface: &mut impl LanguageSurface) {
		self.apply(code, surface);
		surface.replace_url_lang(code);
	}

	/// Borrow the underlying store.
	pub fn store(&self) -> &S { &self.store }
}
