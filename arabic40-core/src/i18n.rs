use crate::error::{Error, Result};
use fluent_bundle::{FluentBundle, FluentResource};
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

const EN_FTL: &str = "\
error-banner = An error occurred. Please try again later.
";

const AR_FTL: &str = "\
error-banner = حدث خطأ. يرجى المحاولة مرة أخرى لاحقًا.
";

/// Thin wrapper over `fluent-bundle`, one bundle per language tag.
#[derive(Default)]
pub struct I18n {
	bundles: HashMap<String, FluentBundle<FluentResource>>,
}

impl I18n {
	/// Catalog with the site's English and Arabic strings.
	pub fn builtin() -> Result<Self> {
		let mut i = Self::default();
		i.insert_resource("en", EN_FTL)?;
		i.insert_resource("ar", AR_FTL)?;
		Ok(i)
	}

	/// Insert a Fluent resource for a language tag.
	pub fn insert_resource(&mut self, lang: &str, ftl: &str) -> Result<()> {
		let res = FluentResource::try_new(ftl.to_string()).map_err(|(_, e)| Error::localization(format!("fluent parse error: {e:?}")))?;
		let langid: LanguageIdentifier = lang.parse().unwrap_or_default();
		let mut bundle = FluentBundle::new(vec![langid]);
		// No Unicode isolation marks around interpolations; the strings land in plain DOM text.
		bundle.set_use_isolating(false);
		bundle.add_resource(res).map_err(|e| Error::localization(format!("bundle add resource: {e:?}")))?;
		self.bundles.insert(lang.to_string(), bundle);
		Ok(())
	}

	/// Format `key` for `lang`; the key itself when missing or on formatting errors.
	pub fn format(&self, lang: &str, key: &str) -> String {
		let Some(bundle) = self.bundles.get(lang) else { return key.to_string() };
		let Some(msg) = bundle.get_message(key) else { return key.to_string() };
		let Some(pattern) = msg.value() else { return key.to_string() };
		let mut errors = vec![];
		let s = bundle.format_pattern(pattern, None, &mut errors).to_string();
		if errors.is_empty() { s } else { key.to_string() }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn builtin_has_both_languages() {
		let i = I18n::builtin().unwrap();
		assert_eq!(i.format("en", "error-banner"), "An error occurred. Please try again later.");
		assert!(i.format("ar", "error-banner").starts_with("حدث خطأ"));
	}

	#[test]
	fn missing_language_or_key_falls_back_to_key() {
		let i = I18n::builtin().unwrap();
		assert_eq!(i.format("fr", "error-banner"), "error-banner");
		assert_eq!(i.format("en", "nope"), "nope");
	}

	#[test]
	fn formatting_error_falls_back_to_key() {
		let mut i = I18n::builtin().unwrap();
		i.insert_resource("en", "greeting = Hello { $name }\n").unwrap();
		assert_eq!(i.format("en", "greeting"), "greeting");
	}
}
