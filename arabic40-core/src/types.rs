use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of course days.
pub const TOTAL_DAYS: u32 = 40;

/// Day links shown per grid page.
pub const DAYS_PER_PAGE: u32 = 10;

/// Last grid page (`ceil(TOTAL_DAYS / DAYS_PER_PAGE)`).
pub const MAX_PAGE: u32 = TOTAL_DAYS.div_ceil(DAYS_PER_PAGE);

/// Query parameter carrying the language code.
pub const LANG_PARAM: &str = "lang";

/// Query parameter carrying the day number on the day-detail view.
pub const DAY_PARAM: &str = "day";

/// One course day. Any nonzero number is representable: a detail URL may name a
/// negative day or one far past the course and simply finds no video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Day(i64);

impl Day {
	/// The first day, used whenever a `day` parameter is missing, zero or non-numeric.
	pub const FIRST: Day = Day(1);

	/// Wrap a positive day number; zero is rejected.
	pub fn new(n: u32) -> Option<Self> { Self::from_number(n.into()) }

	/// Wrap any nonzero day number.
	pub fn from_number(n: i64) -> Option<Self> { (n != 0).then_some(Self(n)) }

	/// Numeric value.
	pub fn get(self) -> i64 { self.0 }

	/// Parse a `day` query parameter.
	///
	/// Leading whitespace and a sign are accepted and anything after the leading digits
	/// is ignored (`"3abc"` is day 3). Negative and oversized numbers are kept as they
	/// are, saturating at the `i64` bounds, so they resolve to no video. Absent, empty,
	/// zero or non-numeric input yields [`Day::FIRST`].
	pub fn parse_param(raw: Option<&str>) -> Self {
		let Some(raw) = raw else { return Self::FIRST };
		let s = raw.trim_start();
		let (negative, s) = match s.as_bytes().first() {
			Some(b'-') => (true, &s[1..]),
			Some(b'+') => (false, &s[1..]),
			_ => (false, s),
		};
		let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
		let n = s[..end].bytes().fold(0i64, |acc, b| {
			let digit = i64::from(b - b'0');
			if negative {
				acc.saturating_mul(10).saturating_sub(digit)
			} else {
				acc.saturating_mul(10).saturating_add(digit)
			}
		});
		Self::from_number(n).unwrap_or(Self::FIRST)
	}

	/// Key used by the video mapping (`"day7"`).
	pub fn key(self) -> String { format!("day{}", self.0) }

	/// Whether the day belongs to the 40-day course.
	pub fn in_course(self) -> bool { (1..=i64::from(TOTAL_DAYS)).contains(&self.0) }

	/// Every course day in order.
	pub fn all() -> impl Iterator<Item = Day> { (1..=TOTAL_DAYS).map(|n| Day(n.into())) }
}

impl fmt::Display for Day {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

/// A language code as it appears in URLs, storage and `data-lang` attributes.
///
/// Codes are opaque: no validation, no case folding. A content-track key such as
/// `"transliteration"` is carried the same way as a display language like `"ar"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
	/// Wrap any string.
	pub fn new(code: impl Into<String>) -> Self { Self(code.into()) }
	/// Borrow the raw code.
	pub fn as_str(&self) -> &str { &self.0 }
	/// True for Arabic, the only right-to-left display language of the site.
	pub fn is_arabic(&self) -> bool { self.0 == "ar" }
}

impl fmt::Display for LanguageCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

impl From<&str> for LanguageCode {
	fn from(s: &str) -> Self { Self(s.to_string()) }
}

impl From<String> for LanguageCode {
	fn from(s: String) -> Self { Self(s) }
}

impl AsRef<str> for LanguageCode {
	fn as_ref(&self) -> &str { &self.0 }
}
