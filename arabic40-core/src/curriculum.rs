//! Lesson topics and the video selection rules used to curate `videos.json`.

use crate::types::Day;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const DAY_TOPICS: [&str; 40] = [
	// Foundations (days 1-7)
	"arabic alphabet pronunciation lesson tutorial",
	"arabic numbers counting lesson tutorial",
	"arabic time expressions lesson tutorial",
	"arabic basic verbs actions lesson tutorial",
	"arabic basic adjectives lesson tutorial",
	"arabic question words lesson tutorial",
	"arabic alphabet diacritics lesson tutorial",
	// Essential daily phrases (days 8-14)
	"arabic shopping transportation phrases lesson tutorial",
	"arabic dining restaurant phrases lesson tutorial",
	"arabic directions navigation phrases lesson tutorial",
	"arabic basic grammar patterns lesson tutorial",
	"arabic travel survival phrases lesson tutorial",
	"arabic public transport phrases lesson tutorial",
	"arabic daily communication phrases lesson tutorial",
	// Cultural context and daily life (days 15-22)
	"arabic family relationships vocabulary lesson tutorial",
	"arabic social interactions phrases lesson tutorial",
	"arab etiquette culture lesson tutorial",
	"arab festivals traditions lesson tutorial",
	"arabic home life vocabulary lesson tutorial",
	"arabic public places vocabulary lesson tutorial",
	"arab cultural customs lesson tutorial",
	"arab social norms lesson tutorial",
	// Professional communication (days 23-30)
	"arabic workplace vocabulary lesson tutorial",
	"arab business etiquette lesson tutorial",
	"arabic online meetings phrases lesson tutorial",
	"arabic remote work vocabulary lesson tutorial",
	"arabic email writing phrases lesson tutorial",
	"arabic presentations phrases lesson tutorial",
	"arabic technical terms vocabulary lesson tutorial",
	"arab professional conduct lesson tutorial",
	// Advanced fluency (days 31-40)
	"arabic idioms expressions lesson tutorial",
	"arabic formal expressions lesson tutorial",
	"arabic casual slang lesson tutorial",
	"arabic debate discussion phrases lesson tutorial",
	"arabic storytelling phrases lesson tutorial",
	"arabic persuasive speech lesson tutorial",
	"arabic advanced dialogue lesson tutorial",
	"arabic role play scenarios lesson tutorial",
	"arabic complex conversations lesson tutorial",
	"arabic fluent communication lesson tutorial",
];

/// Search topic for a day outside the course.
pub const DEFAULT_DAY_TOPIC: &str = "arabic language lesson tutorial";

/// Search topic for a day's lesson video.
pub fn day_topic(day: Day) -> &'static str {
	let index = day.get().checked_sub(1).and_then(|i| usize::try_from(i).ok());
	index.and_then(|i| DAY_TOPICS.get(i)).copied().unwrap_or(DEFAULT_DAY_TOPIC)
}

/// Extra material outside the 40 days, stored in `videos_supplementary.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupplementaryCategory {
	Education,
	Hobbies,
	Emotions,
	DailyLife,
	Comparisons,
}

impl SupplementaryCategory {
	/// Every category in curation order.
	pub const ALL: [SupplementaryCategory; 5] =
		[Self::Education, Self::Hobbies, Self::Emotions, Self::DailyLife, Self::Comparisons];

	/// Key in the supplementary mapping.
	pub fn key(self) -> &'static str {
		match self {
			Self::Education => "education",
			Self::Hobbies => "hobbies",
			Self::Emotions => "emotions",
			Self::DailyLife => "daily_life",
			Self::Comparisons => "comparisons",
		}
	}

	/// Search topic.
	pub fn topic(self) -> &'static str {
		match self {
			Self::Education => "arabic academic vocabulary lesson tutorial",
			Self::Hobbies => "arabic hobbies interests vocabulary lesson tutorial",
			Self::Emotions => "arabic expressing emotions vocabulary lesson tutorial",
			Self::DailyLife => "arabic daily life vocabulary lesson tutorial",
			Self::Comparisons => "arabic making comparisons grammar lesson tutorial",
		}
	}
}

impl fmt::Display for SupplementaryCategory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.key()) }
}

impl FromStr for SupplementaryCategory {
	type Err = crate::Error;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|c| c.key() == s)
			.ok_or_else(|| crate::Error::config(format!("unknown supplementary category: {s}")))
	}
}

/// Channels whose lessons win over more popular uploads.
pub const PREFERRED_CHANNELS: [&str; 12] = [
	"Arabic Pod 101",
	"Learn Arabic with Maha",
	"Arabic Khatawaat",
	"Learn Arabic with ArabicPod101.com",
	"Spoken Arabic Made Easy",
	"Arabic Mike",
	"Learn Arabic with Dalya",
	"Arabic with Nadia",
	"Arabic Anywhere",
	"Easy Arabic",
	"Learn Levantine Arabic",
	"Madinah Arabic",
];

/// Accepted lesson length, in seconds (3 to 10 minutes).
pub const MIN_DURATION_SECS: u64 = 180;
/// See [`MIN_DURATION_SECS`].
pub const MAX_DURATION_SECS: u64 = 600;

/// Full search query for a topic.
pub fn search_query(topic: &str) -> String { format!("learn {topic} تعلم العربية") }

/// Case-insensitive match against [`PREFERRED_CHANNELS`].
pub fn is_preferred_channel(channel_title: &str) -> bool {
	let title = channel_title.to_lowercase();
	PREFERRED_CHANNELS.iter().any(|c| title.contains(&c.to_lowercase()))
}

/// Seconds in an ISO-8601 `PT#H#M#S` duration; 0 when it does not start with `PT`.
///
/// Parsing stops at the first component out of `H`, `M`, `S` order.
pub fn parse_iso8601_duration(s: &str) -> u64 {
	let Some(mut rest) = s.strip_prefix("PT") else { return 0 };
	let mut total = 0u64;
	for (unit, scale) in [('H', 3600u64), ('M', 60), ('S', 1)] {
		let digits = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
		if digits == 0 || !rest[digits..].starts_with(unit) {
			continue;
		}
		let n: u64 = rest[..digits].parse().unwrap_or(0);
		total = total.saturating_add(n.saturating_mul(scale));
		rest = &rest[digits + 1..];
	}
	total
}

/// Video details returned by the provider for one search hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoCandidate {
	pub id: String,
	pub duration_secs: u64,
	pub views: u64,
	pub channel: String,
}

/// Pick the lesson video for a search.
///
/// Only 3-10 minute videos qualify. Preferred channels win, most viewed first; otherwise
/// the most viewed qualifying video; otherwise the first search hit.
pub fn pick_video(search_ids: &[String], details: &[VideoCandidate]) -> Option<String> {
	let fitting = details.iter().filter(|v| (MIN_DURATION_SECS..=MAX_DURATION_SECS).contains(&v.duration_secs));
	let (mut preferred, mut other): (Vec<_>, Vec<_>) = fitting.partition(|v| is_preferred_channel(&v.channel));
	preferred.sort_by(|a, b| b.views.cmp(&a.views));
	other.sort_by(|a, b| b.views.cmp(&a.views));
	preferred
		.first()
		.or_else(|| other.first())
		.map(|v| v.id.clone())
		.or_else(|| search_ids.first().cloned())
}
