use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Site-level settings shared by the browser bindings and the maintainer CLI.
///
/// Course shape (40 days, 10 per page) is fixed and deliberately absent here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
	/// `trace` | `debug` | `info` | `warn` | `error`.
	pub log_level: String,
	/// Language applied when neither the URL nor storage names one.
	pub default_language: String,
	/// Durable storage key holding the preferred language.
	pub storage_key: String,
	/// Location of the day -> video mapping, relative to the page.
	pub videos_url: String,
	/// Embed endpoint of the video provider; the video id is appended after a `/`.
	pub embed_base: String,
	/// Day-detail page the grid links point at.
	pub day_page: String,
}

impl Default for SiteConfig {
	fn default() -> Self {
		Self {
			log_level: "info".into(),
			default_language: "ar".into(),
			storage_key: "preferredLanguage".into(),
			videos_url: "videos.json".into(),
			embed_base: "https://www.youtube.com/embed".into(),
			day_page: "day.html".into(),
		}
	}
}

impl SiteConfig {
	/// Load and validate a TOML file.
	pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
		let data = fs::read_to_string(path)?;
		Self::from_toml_str(&data)
	}

	/// Parse and validate TOML text; missing keys take their defaults.
	pub fn from_toml_str(data: &str) -> Result<Self> {
		let cfg: Self = toml::from_str(data).map_err(|e| Error::config(format!("toml parse error: {e}")))?;
		cfg.validate()?;
		Ok(cfg)
	}

	/// Parse and validate a JSON object (used for the page-embedded override).
	pub fn from_json_str(data: &str) -> Result<Self> {
		let cfg: Self = serde_json::from_str(data)?;
		cfg.validate()?;
		Ok(cfg)
	}

	/// Serialize to TOML at `path`.
	pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
		let s = toml::to_string_pretty(self).map_err(|e| Error::config(format!("toml serialize error: {e}")))?;
		fs::write(path, s)?;
		Ok(())
	}

	/// Defaults overridden by `ARABIC40_*` environment variables.
	pub fn from_env() -> Result<Self> {
		let mut cfg = Self::default();
		cfg.apply_env();
		cfg.validate()?;
		Ok(cfg)
	}

	/// Overlay `ARABIC40_LOG_LEVEL`, `ARABIC40_DEFAULT_LANG` and `ARABIC40_VIDEOS_URL`.
	pub fn apply_env(&mut self) {
		if let Ok(v) = std::env::var("ARABIC40_LOG_LEVEL") { self.log_level = v; }
		if let Ok(v) = std::env::var("ARABIC40_DEFAULT_LANG") { self.default_language = v; }
		if let Ok(v) = std::env::var("ARABIC40_VIDEOS_URL") { self.videos_url = v; }
	}

	/// Reject settings that would break the page.
	pub fn validate(&self) -> Result<()> {
		let allowed = ["trace", "debug", "info", "warn", "error"];
		if !allowed.contains(&self.log_level.as_str()) {
			return Err(Error::config(format!("invalid log_level: {}", self.log_level)));
		}
		for (name, value) in [
			("default_language", &self.default_language),
			("storage_key", &self.storage_key),
			("videos_url", &self.videos_url),
			("day_page", &self.day_page),
		] {
			if value.trim().is_empty() {
				return Err(Error::config(format!("{name} must not be empty")));
			}
		}
		if !(self.embed_base.starts_with("https://") || self.embed_base.starts_with("http://")) {
			return Err(Error::config(format!("embed_base must be an http(s) URL: {}", self.embed_base)));
		}
		Ok(())
	}

	/// A `tracing` level matching `log_level`.
	pub fn tracing_level(&self) -> tracing::Level {
		match self.log_level.as_str() {
			"trace" => tracing::Level::TRACE,
			"debug" => tracing::Level::DEBUG,
			"warn" => tracing::Level::WARN,
			"error" => tracing::Level::ERROR,
			_ => tracing::Level::INFO,
		}
	}
}
