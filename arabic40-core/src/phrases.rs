//! Course phrase lists and their plain-text / speech-script exports.
//!
//! The course ships its own phrasebook ([`Phrasebook::builtin`]): 40 days plus the
//! supplementary categories. Each set exports one text file per [`Track`] and, for the
//! spoken tracks, a script for an external speech synthesizer.

use crate::curriculum::SupplementaryCategory;
use crate::error::{Error, Result};
use crate::types::Day;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

const BUILTIN_PHRASEBOOK: &str = include_str!("../data/phrasebook.json");

/// One phrase in its three renderings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phrase {
	pub ar: String,
	pub transliteration: String,
	pub en: String,
}

/// A named group of phrases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseCategory {
	pub name: String,
	pub phrases: Vec<Phrase>,
}

/// All categories of one day, in teaching order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPhrases {
	pub day: Day,
	pub categories: Vec<PhraseCategory>,
}

/// Phrases of one supplementary category, grouped by sub-topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplementaryPhrases {
	pub category: SupplementaryCategory,
	pub categories: Vec<PhraseCategory>,
}

/// Content track of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Track {
	Arabic,
	Transliteration,
	English,
}

impl Track {
	/// Every track.
	pub const ALL: [Track; 3] = [Self::Arabic, Self::Transliteration, Self::English];

	/// Code used in file names and language cards.
	pub fn code(self) -> &'static str {
		match self {
			Self::Arabic => "ar",
			Self::Transliteration => "transliteration",
			Self::English => "en",
		}
	}

	fn pick(self, p: &Phrase) -> &str {
		match self {
			Self::Arabic => &p.ar,
			Self::Transliteration => &p.transliteration,
			Self::English => &p.en,
		}
	}
}

impl fmt::Display for Track {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.code()) }
}

impl FromStr for Track {
	type Err = Error;
	fn from_str(s: &str) -> Result<Self> {
		Self::ALL.into_iter().find(|t| t.code() == s).ok_or_else(|| Error::config(format!("unknown track: {s}")))
	}
}

/// Input for a speech synthesizer: the voice to use and the text to speak.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeechScript {
	pub voice: &'static str,
	pub text: String,
}

/// A whole course's phrases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phrasebook {
	pub days: Vec<DayPhrases>,
	#[serde(default)]
	pub supplementary: Vec<SupplementaryPhrases>,
}

impl Phrasebook {
	/// The course's own phrasebook.
	pub fn builtin() -> Result<Self> { Self::from_json(BUILTIN_PHRASEBOOK) }

	/// Parse the JSON phrase book.
	pub fn from_json(data: &str) -> Result<Self> { Ok(serde_json::from_str(data)?) }

	/// Read a JSON phrase book from disk.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> { Self::from_json(&std::fs::read_to_string(path)?) }

	/// Phrases of `day`.
	pub fn day(&self, day: Day) -> Option<&DayPhrases> { self.days.iter().find(|d| d.day == day) }

	/// Days present, in file order.
	pub fn days(&self) -> impl Iterator<Item = Day> + '_ { self.days.iter().map(|d| d.day) }

	/// Phrases of a supplementary category.
	pub fn supplementary(&self, category: SupplementaryCategory) -> Option<&SupplementaryPhrases> {
		self.supplementary.iter().find(|s| s.category == category)
	}
}

fn render_categories(categories: &[PhraseCategory], track: Track) -> String {
	let mut out = String::new();
	for cat in categories {
		out.push('\n');
		out.push_str(&cat.name);
		out.push('\n');
		out.push_str(&"-".repeat(cat.name.chars().count()));
		out.push('\n');
		for p in &cat.phrases {
			out.push_str(track.pick(p));
			out.push('\n');
		}
	}
	out
}

fn speech_text(categories: &[PhraseCategory], track: Track, arabic_sep: &str) -> String {
	let sep = if track == Track::Arabic { arabic_sep } else { ". " };
	categories.iter().flat_map(|c| c.phrases.iter()).map(|p| format!("{}{sep}", track.pick(p))).collect()
}

impl DayPhrases {
	/// Text file body: each category as a blank line, its name, a dash underline of the
	/// same length, then one phrase per line.
	pub fn render_text(&self, track: Track) -> String { render_categories(&self.categories, track) }

	/// Speech script for `track`. Arabic phrases are joined by the Arabic comma and read
	/// by an Egyptian voice; English ones as sentences. Transliteration is not spoken.
	pub fn tts_script(&self, track: Track) -> Option<SpeechScript> {
		let voice = match track {
			Track::Arabic => "ar-EG-SalmaNeural",
			Track::English => "en-US-JennyNeural",
			Track::Transliteration => return None,
		};
		Some(SpeechScript { voice, text: speech_text(&self.categories, track, "، ") })
	}

	/// File name of an export: `day7_transliteration.txt`.
	pub fn file_name(&self, track: Track) -> String { format!("{}_{}.txt", self.day.key(), track.code()) }
}

impl SupplementaryPhrases {
	pub fn render_text(&self, track: Track) -> String { render_categories(&self.categories, track) }

	/// Speech script; Arabic phrases end with a bare full stop and use a Saudi voice.
	pub fn tts_script(&self, track: Track) -> Option<SpeechScript> {
		let voice = match track {
			Track::Arabic => "ar-SA-ZariyahNeural",
			Track::English => "en-US-JennyNeural",
			Track::Transliteration => return None,
		};
		Some(SpeechScript { voice, text: speech_text(&self.categories, track, ".") })
	}

	/// File name of an export: `daily_life_en.txt`.
	pub fn file_name(&self, track: Track) -> String { format!("{}_{}.txt", self.category.key(), track.code()) }
}

#[cfg(test)]
mod tests {
	use super::*;

	const BOOK: &str = r#"{"days":[{"day":1,"categories":[
		{"name":"Basic Greetings","phrases":[
			{"ar":"مرحبا","transliteration":"Marhaba","en":"Hello"},
			{"ar":"شكرا","transliteration":"Shukran","en":"Thank you"}]},
		{"name":"Self","phrases":[{"ar":"اسمي...","transliteration":"Ismi...","en":"My name is..."}]}
	]}],
	"supplementary":[{"category":"daily_life","categories":[
		{"name":"Routine","phrases":[{"ar":"أستيقظ","transliteration":"Astayqiz","en":"I wake up"}]}]}]}"#;

	fn book() -> Phrasebook { Phrasebook::from_json(BOOK).unwrap() }

	fn day1() -> DayPhrases { book().day(Day::FIRST).cloned().unwrap() }

	#[test]
	fn text_export_layout() {
		let text = day1().render_text(Track::Transliteration);
		assert_eq!(text, "\nBasic Greetings\n---------------\nMarhaba\nShukran\n\nSelf\n----\nIsmi...\n");
	}

	#[test]
	fn speech_scripts_cover_arabic_and_english_only() {
		let en = day1().tts_script(Track::English).unwrap();
		assert_eq!(en.text, "Hello. Thank you. My name is.... ");
		assert_eq!(en.voice, "en-US-JennyNeural");
		let ar = day1().tts_script(Track::Arabic).unwrap();
		assert!(ar.text.starts_with("مرحبا، شكرا، "));
		assert_eq!(ar.voice, "ar-EG-SalmaNeural");
		assert!(day1().tts_script(Track::Transliteration).is_none());
	}

	#[test]
	fn supplementary_sets() {
		let b = book();
		let s = b.supplementary(SupplementaryCategory::DailyLife).unwrap();
		assert_eq!(s.file_name(Track::English), "daily_life_en.txt");
		assert_eq!(s.render_text(Track::English), "\nRoutine\n-------\nI wake up\n");
		let ar = s.tts_script(Track::Arabic).unwrap();
		assert_eq!(ar.text, "أستيقظ.");
		assert_eq!(ar.voice, "ar-SA-ZariyahNeural");
		assert!(b.supplementary(SupplementaryCategory::Hobbies).is_none());
	}

	#[test]
	fn file_names_and_tracks() {
		assert_eq!(day1().file_name(Track::Arabic), "day1_ar.txt");
		assert_eq!("transliteration".parse::<Track>().unwrap(), Track::Transliteration);
		assert!("fr".parse::<Track>().is_err());
	}

	#[test]
	fn builtin_book_covers_course() {
		let b = Phrasebook::builtin().unwrap();
		assert_eq!(b.days().count(), 40);
		assert!(Day::all().all(|d| b.day(d).is_some()));
		for c in SupplementaryCategory::ALL {
			assert!(b.supplementary(c).is_some(), "{c}");
		}
		let first = &b.day(Day::FIRST).unwrap().categories[0];
		assert_eq!(first.name, "Basic Greetings & Common Phrases");
		assert_eq!(first.phrases[0].en, "Hello");
	}
}
