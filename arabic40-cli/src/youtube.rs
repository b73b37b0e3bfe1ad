#![forbid(unsafe_code)]

//! Minimal YouTube Data API v3 client: one search plus one details lookup per topic.

use anyhow::{Context, Result};
use arabic40_core::curriculum::{parse_iso8601_duration, pick_video, search_query, VideoCandidate};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

const API_BASE: &str = "https://www.googleapis.com/youtube/v3";
const MAX_RESULTS: &str = "10";

/// Finds a lesson video for a search topic.
pub trait VideoSearch {
	fn find_video(&self, topic: &str) -> Result<Option<String>>;
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
	#[serde(default)]
	items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
	id: SearchId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchId {
	video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VideosResponse {
	#[serde(default)]
	items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoItem {
	id: String,
	content_details: ContentDetails,
	#[serde(default)]
	statistics: Statistics,
	snippet: Snippet,
}

#[derive(Debug, Deserialize)]
struct ContentDetails {
	duration: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Statistics {
	// The API sends counts as strings and omits them when hidden.
	view_count: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snippet {
	channel_title: String,
}

impl From<VideoItem> for VideoCandidate {
	fn from(v: VideoItem) -> Self {
		VideoCandidate {
			duration_secs: parse_iso8601_duration(&v.content_details.duration),
			views: v.statistics.view_count.and_then(|c| c.parse().ok()).unwrap_or(0),
			channel: v.snippet.channel_title,
			id: v.id,
		}
	}
}

/// Blocking client; run it off the async runtime.
#[derive(Clone)]
pub struct YouTubeClient {
	agent: ureq::Agent,
	api_key: String,
}

impl YouTubeClient {
	pub fn new(api_key: impl Into<String>) -> Self {
		let agent = ureq::AgentBuilder::new()
			.timeout_connect(Duration::from_secs(5))
			.timeout(Duration::from_secs(15))
			.build();
		Self { agent, api_key: api_key.into() }
	}

	fn search_ids(&self, query: &str) -> Result<Vec<String>> {
		let resp: SearchResponse = self
			.agent
			.get(&format!("{API_BASE}/search"))
			.query("key", &self.api_key)
			.query("q", query)
			.query("part", "snippet")
			.query("type", "video")
			.query("videoDefinition", "high")
			.query("videoEmbeddable", "true")
			.query("relevanceLanguage", "ar")
			.query("maxResults", MAX_RESULTS)
			.call()
			.context("youtube search request")?
			.into_json()
			.context("youtube search response")?;
		Ok(resp.items.into_iter().filter_map(|i| i.id.video_id).collect())
	}

	fn details(&self, ids: &[String]) -> Result<Vec<VideoCandidate>> {
		let resp: VideosResponse = self
			.agent
			.get(&format!("{API_BASE}/videos"))
			.query("key", &self.api_key)
			.query("part", "contentDetails,statistics,snippet")
			.query("id", &ids.join(","))
			.call()
			.context("youtube videos request")?
			.into_json()
			.context("youtube videos response")?;
		Ok(resp.items.into_iter().map(VideoCandidate::from).collect())
	}
}

impl VideoSearch for YouTubeClient {
	fn find_video(&self, topic: &str) -> Result<Option<String>> {
		let query = search_query(topic);
		info!(%query, "searching");
		let ids = self.search_ids(&query)?;
		if ids.is_empty() {
			debug!("no search results");
			return Ok(None);
		}
		let details = self.details(&ids)?;
		Ok(pick_video(&ids, &details))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn video_item_maps_to_candidate() {
		let raw = r#"{"items":[{"id":"abc","contentDetails":{"duration":"PT4M10S"},
			"statistics":{"viewCount":"1200"},"snippet":{"channelTitle":"ArabicPod101"}}]}"#;
		let resp: VideosResponse = serde_json::from_str(raw).unwrap();
		let c: Vec<VideoCandidate> = resp.items.into_iter().map(Into::into).collect();
		assert_eq!(c[0], VideoCandidate { id: "abc".into(), duration_secs: 250, views: 1200, channel: "ArabicPod101".into() });
	}

	#[test]
	fn hidden_view_count_is_zero() {
		let raw = r#"{"items":[{"id":"x","contentDetails":{"duration":"PT3M"},"snippet":{"channelTitle":"c"}}]}"#;
		let resp: VideosResponse = serde_json::from_str(raw).unwrap();
		let c = VideoCandidate::from(resp.items.into_iter().next().unwrap());
		assert_eq!(c.views, 0);
	}

	#[test]
	fn search_skips_non_video_hits() {
		let raw = r#"{"items":[{"id":{"kind":"youtube#channel"}},{"id":{"videoId":"v1"}}]}"#;
		let resp: SearchResponse = serde_json::from_str(raw).unwrap();
		let ids: Vec<_> = resp.items.into_iter().filter_map(|i| i.id.video_id).collect();
		assert_eq!(ids, vec!["v1".to_string()]);
	}
}
