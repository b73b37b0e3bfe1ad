//! Day video resolution.
//!
//! The day -> video mapping is fetched once per page view. Requests that arrive before it
//! settles are queued and replayed in arrival order, after the day named by the URL. A
//! day without an entry, or a mapping that never loads, ends in the fallback display.
//!
//! ```text
//! Uninitialized --begin--> Loading --complete(Ok)--> Ready
//!        \                    \
//!         `-----complete(Err)--`--> Failed (terminal)
//! ```

use crate::error::{Error, Result};
use crate::types::Day;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, VecDeque};
use tracing::{debug, error, info, warn};

/// Mapping from `"day<N>"` to a provider video id.
///
/// Values are kept as raw JSON: a `null`, number or object under one key makes only
/// that key missing and survives a save unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoMapping(BTreeMap<String, Value>);

impl VideoMapping {
	/// Parse the `videos.json` payload.
	pub fn from_json(data: &str) -> Result<Self> {
		serde_json::from_str(data).map_err(|e| Error::video_load(format!("malformed mapping: {e}")))
	}

	/// Pretty JSON, two-space indented.
	pub fn to_json_pretty(&self) -> Result<String> { Ok(serde_json::to_string_pretty(self)?) }

	/// Video id for `day`. Empty ids count as missing.
	pub fn video_for(&self, day: Day) -> Option<&str> { self.get(&day.key()) }

	/// Video id by raw key. Empty and non-string values count as missing.
	pub fn get(&self, key: &str) -> Option<&str> { self.0.get(key).and_then(Value::as_str).filter(|id| !id.is_empty()) }

	/// Whether `key` is present with a non-empty id.
	pub fn has(&self, key: &str) -> bool { self.get(key).is_some() }

	/// Set or replace an entry.
	pub fn insert(&mut self, key: impl Into<String>, id: impl Into<String>) {
		self.0.insert(key.into(), Value::String(id.into()));
	}

	/// Course days lacking a usable entry.
	pub fn missing_days(&self) -> Vec<Day> { Day::all().filter(|d| self.video_for(*d).is_none()).collect() }

	/// Number of entries, empty ones included.
	pub fn len(&self) -> usize { self.0.len() }

	/// True without entries.
	pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

impl FromIterator<(String, String)> for VideoMapping {
	fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
		Self(iter.into_iter().map(|(k, v)| (k, Value::String(v))).collect())
	}
}

/// Embed URL for a video id: `<base>/<id>`.
pub fn embed_url(embed_base: &str, video_id: &str) -> String {
	format!("{}/{}", embed_base.trim_end_matches('/'), video_id)
}

/// Video area of the day-detail page.
pub trait VideoDisplay {
	/// Size the container to a 16:9 box, point the player at `url`, hide the fallback.
	fn show_embed(&mut self, url: &str);
	/// Clear the player source, hide it, reveal the fallback. Must be idempotent.
	fn show_fallback(&mut self);
}

/// Loader lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderPhase {
	Uninitialized,
	Loading,
	Ready,
	Failed,
}

/// What a single resolution did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveOutcome {
	/// Mapping not available yet; the day waits in the queue.
	Queued,
	/// Player now shows this embed URL.
	Embedded(String),
	/// Fallback display shown.
	Fallback,
}

/// Video Loader state machine.
#[derive(Debug)]
pub struct VideoLoader {
	phase: LoaderPhase,
	mapping: Option<VideoMapping>,
	pending: VecDeque<Day>,
	embed_base: String,
}

impl VideoLoader {
	/// Loader embedding from `embed_base` (e.g. `https://www.youtube.com/embed`).
	pub fn new(embed_base: impl Into<String>) -> Self {
		Self { phase: LoaderPhase::Uninitialized, mapping: None, pending: VecDeque::new(), embed_base: embed_base.into() }
	}

	/// Current phase.
	pub fn phase(&self) -> LoaderPhase { self.phase }

	/// Days waiting for the mapping, oldest first.
	pub fn pending(&self) -> impl Iterator<Item = Day> + '_ { self.pending.iter().copied() }

	/// The fetch has started.
	pub fn begin(&mut self) {
		if self.phase == LoaderPhase::Uninitialized {
			info!("initializing video loader");
			self.phase = LoaderPhase::Loading;
		}
	}

	/// Resolve the video for `day`.
	///
	/// Before the mapping settles the day is queued (duplicates included). After a failed
	/// load every request shows the fallback.
	pub fn resolve(&mut self, day: Day, display: &mut impl VideoDisplay) -> ResolveOutcome {
		match self.phase {
			LoaderPhase::Uninitialized | LoaderPhase::Loading => {
				debug!(day = %day, "mapping not loaded yet, queueing request");
				self.pending.push_back(day);
				ResolveOutcome::Queued
			}
			LoaderPhase::Failed => fallback(display),
			LoaderPhase::Ready => {
				let found = self.mapping.as_ref().and_then(|m| m.video_for(day));
				match found {
					Some(id) => {
						let url = embed_url(&self.embed_base, id);
						debug!(day = %day, url = %url, "embedding video");
						display.show_embed(&url);
						ResolveOutcome::Embedded(url)
					}
					None => {
						warn!(day = %day, "no video available for day");
						fallback(display)
					}
				}
			}
		}
	}

	/// The fetch settled.
	///
	/// On success: resolve `initial_day`, then every queued day in arrival order. On
	/// failure: show the fallback, drop the queue and stay `Failed`. Returns each
	/// resolution performed, in order.
	pub fn complete(
		&mut self,
		result: Result<VideoMapping>,
		initial_day: Day,
		display: &mut impl VideoDisplay,
	) -> Vec<(Day, ResolveOutcome)> {
		match result {
			Err(e) => {
				error!(error = %e, dropped = self.pending.len(), "error initializing video loader");
				self.phase = LoaderPhase::Failed;
				self.pending.clear();
				fallback(display);
				Vec::new()
			}
			Ok(mapping) => {
				info!(entries = mapping.len(), "video mapping loaded");
				self.mapping = Some(mapping);
				self.phase = LoaderPhase::Ready;
				let mut done = Vec::with_capacity(self.pending.len() + 1);
				let outcome = self.resolve(initial_day, display);
				done.push((initial_day, outcome));
				while let Some(day) = self.pending.pop_front() {
					let outcome = self.resolve(day, display);
					done.push((day, outcome));
				}
				done
			}
		}
	}
}

fn fallback(display: &mut impl VideoDisplay) -> ResolveOutcome {
	display.show_fallback();
	ResolveOutcome::Fallback
}
