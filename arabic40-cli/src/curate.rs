#![forbid(unsafe_code)]

//! Fill gaps in a video mapping file from a [`VideoSearch`] provider.

use crate::youtube::VideoSearch;
use anyhow::{Context, Result};
use arabic40_core::curriculum::{day_topic, SupplementaryCategory};
use arabic40_core::{Day, VideoMapping};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// One mapping key and the topic searched for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
	pub key: String,
	pub topic: &'static str,
}

pub fn day_targets() -> Vec<Target> {
	Day::all().map(|d| Target { key: d.key(), topic: day_topic(d) }).collect()
}

pub fn supplementary_targets() -> Vec<Target> {
	SupplementaryCategory::ALL.iter().map(|c| Target { key: c.key().to_string(), topic: c.topic() }).collect()
}

#[derive(Debug, Default)]
pub struct CurateReport {
	pub kept: usize,
	pub found: Vec<String>,
	pub unresolved: Vec<String>,
}

/// Mapping at `path`; empty when the file does not exist yet.
pub async fn load_mapping(path: &Path) -> Result<VideoMapping> {
	match tokio::fs::read_to_string(path).await {
		Ok(s) => VideoMapping::from_json(&s).with_context(|| format!("parsing {}", path.display())),
		Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(VideoMapping::default()),
		Err(e) => Err(e).with_context(|| format!("reading {}", path.display())),
	}
}

async fn save_mapping(path: &Path, mapping: &VideoMapping) -> Result<()> {
	let json = mapping.to_json_pretty()?;
	tokio::fs::write(path, json).await.with_context(|| format!("writing {}", path.display()))
}

/// Search every target without a non-empty id, saving after each hit.
///
/// Provider errors are logged and leave the target unresolved. `delay` is slept after
/// each search to stay within API quota.
pub async fn curate<S>(path: &Path, targets: &[Target], search: Arc<S>, delay: Duration) -> Result<CurateReport>
where
	S: VideoSearch + Send + Sync + 'static,
{
	let mut mapping = load_mapping(path).await?;
	let mut report = CurateReport::default();

	for target in targets {
		if mapping.has(&target.key) {
			debug!(key = %target.key, "already mapped");
			report.kept += 1;
			continue;
		}
		let (s, topic) = (search.clone(), target.topic);
		let result = tokio::task::spawn_blocking(move || s.find_video(topic))
			.await
			.map_err(|e| anyhow::anyhow!("join error: {e}"))?;
		match result {
			Ok(Some(id)) => {
				info!(key = %target.key, %id, "found video");
				mapping.insert(target.key.clone(), id);
				save_mapping(path, &mapping).await?;
				report.found.push(target.key.clone());
			}
			Ok(None) => {
				warn!(key = %target.key, "no suitable video");
				report.unresolved.push(target.key.clone());
			}
			Err(e) => {
				warn!(key = %target.key, error = %e, "search failed");
				report.unresolved.push(target.key.clone());
			}
		}
		if !delay.is_zero() {
			tokio::time::sleep(delay).await;
		}
	}
	Ok(report)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::sync::Mutex;

	struct Scripted {
		calls: Mutex<Vec<String>>,
	}

	impl VideoSearch for Scripted {
		fn find_video(&self, topic: &str) -> Result<Option<String>> {
			self.calls.lock().unwrap().push(topic.to_string());
			match topic {
				t if t.contains("alphabet") => Ok(Some("alpha1".into())),
				t if t.contains("greetings") => anyhow::bail!("quota exceeded"),
				_ => Ok(None),
			}
		}
	}

	#[test]
	fn targets_cover_course_and_categories() {
		let days = day_targets();
		assert_eq!(days.len(), 40);
		assert_eq!(days[0].key, "day1");
		assert_eq!(supplementary_targets().len(), 5);
	}

	#[tokio::test]
	async fn fills_only_missing_entries() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("videos.json");
		std::fs::write(&path, r#"{"day2":"keep","day3":""}"#).unwrap();

		let search = Arc::new(Scripted { calls: Mutex::new(Vec::new()) });
		let targets = &day_targets()[..3];
		let report = curate(&path, targets, search.clone(), Duration::ZERO).await.unwrap();

		assert_eq!(report.kept, 1);
		assert_eq!(report.found, vec!["day1".to_string()]);
		assert_eq!(report.unresolved, vec!["day3".to_string()]);
		assert_eq!(search.calls.lock().unwrap().len(), 2);

		let saved = VideoMapping::from_json(&std::fs::read_to_string(&path).unwrap()).unwrap();
		assert_eq!(saved.get("day1"), Some("alpha1"));
		assert_eq!(saved.get("day2"), Some("keep"));
	}

	#[tokio::test]
	async fn null_entries_are_searched_not_fatal() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("videos.json");
		std::fs::write(&path, r#"{"day1":null,"day2":"keep","note":{"by":"hand"}}"#).unwrap();

		let search = Arc::new(Scripted { calls: Mutex::new(Vec::new()) });
		let report = curate(&path, &day_targets()[..2], search, Duration::ZERO).await.unwrap();
		assert_eq!(report.found, vec!["day1".to_string()]);
		assert_eq!(report.kept, 1);

		let saved = std::fs::read_to_string(&path).unwrap();
		assert!(saved.contains("\"day1\": \"alpha1\""));
		assert!(saved.contains("\"by\": \"hand\""));
	}

	#[tokio::test]
	async fn missing_file_starts_empty() {
		let dir = tempfile::tempdir().unwrap();
		let mapping = load_mapping(&dir.path().join("nope.json")).await.unwrap();
		assert!(mapping.is_empty());
	}
}
