use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors surfaced by the course core.
///
/// Nothing here is fatal to a page: the video loader turns `VideoLoad` into the
/// fallback display and every other component keeps running.
#[derive(Debug, Error)]
pub enum Error {
	/// Filesystem access (config files, phrase books, mappings).
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// JSON (de)serialization.
	#[error("serde: {0}")]
	Serde(#[from] serde_json::Error),
	/// Invalid or unreadable configuration.
	#[error("config: {0}")]
	Config(String),
	/// The day -> video mapping could not be fetched or parsed.
	#[error("video mapping: {0}")]
	VideoLoad(String),
	/// A day outside the course range where one is required.
	#[error("invalid day: {0}")]
	InvalidDay(i64),
	/// Localization catalog problems.
	#[error("localization: {0}")]
	Localization(String),
}

impl Error {
	/// Build a [`Error::Config`].
	pub fn config(msg: impl Into<String>) -> Self { Self::Config(msg.into()) }
	/// Build a [`Error::VideoLoad`].
	pub fn video_load(msg: impl Into<String>) -> Self { Self::VideoLoad(msg.into()) }
	/// Build a [`Error::Localization`].
	pub fn localization(msg: impl Into<String>) -> Self { Self::Localization(msg.into()) }
}
