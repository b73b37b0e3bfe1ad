//! Day grid pagination.

use crate::progress::{update_progress, ProgressSurface};
use crate::types::{Day, LanguageCode, DAYS_PER_PAGE, MAX_PAGE, TOTAL_DAYS};
use tracing::debug;

/// Class flashed on the grid container after a page change.
pub const GRID_FLASH_CLASS: &str = "animate-fade-in";

/// How long the flash class stays on the grid, in milliseconds.
pub const GRID_FLASH_MS: u32 = 800;

/// Entrance-animation stagger between neighbouring links, in seconds.
pub const LINK_STAGGER_SECS: f64 = 0.05;

/// Classes carried by every rendered day link.
pub const DAY_LINK_CLASSES: &str = "animate-fade-in hover-scale";

/// Curriculum block a day belongs to; drives the link tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicBucket {
	/// Days 1-7.
	Foundations,
	/// Days 8-14.
	Essentials,
	/// Days 15-22.
	Culture,
	/// Days 23-30.
	Professional,
	/// Days 31 and later.
	Fluency,
}

impl TopicBucket {
	/// Inclusive upper thresholds: 7, 14, 22, 30, then everything else.
	pub fn for_day(day: u32) -> Self {
		match day {
			..=7 => Self::Foundations,
			..=14 => Self::Essentials,
			..=22 => Self::Culture,
			..=30 => Self::Professional,
			_ => Self::Fluency,
		}
	}

	/// 1-based bucket number.
	pub fn index(self) -> u8 {
		match self {
			Self::Foundations => 1,
			Self::Essentials => 2,
			Self::Culture => 3,
			Self::Professional => 4,
			Self::Fluency => 5,
		}
	}

	/// Tooltip text shown on the day link.
	pub fn tooltip(self) -> &'static str {
		match self {
			Self::Foundations => "Arabic alphabet, diacritics, and pronunciation basics",
			Self::Essentials => "Essential daily phrases and basic grammar",
			Self::Culture => "Cultural context and daily life communication",
			Self::Professional => "Professional and business Arabic",
			Self::Fluency => "Advanced fluency and real-world applications",
		}
	}
}

/// One rendered grid entry.
#[derive(Debug, Clone, PartialEq)]
pub struct DayLink {
	pub day: u32,
	pub href: String,
	pub tooltip: &'static str,
	/// CSS `animation-delay` in seconds.
	pub delay_secs: f64,
}

impl DayLink {
	/// `animation-delay` value, e.g. `"0.15s"`.
	pub fn delay_css(&self) -> String { format!("{}s", self.delay_secs) }
}

/// A rendered page of day links.
#[derive(Debug, Clone, PartialEq)]
pub struct DayPage {
	pub start: u32,
	pub end: u32,
	pub links: Vec<DayLink>,
}

/// Link to the day-detail view: `day.html?day=7&lang=ar`.
pub fn day_href(day_page: &str, day: u32, lang: &str) -> String {
	format!("{day_page}?day={day}&lang={lang}")
}

/// Grid page holding `day`; days outside the course map to the nearest page.
pub fn page_for_day(day: Day) -> u32 {
	let n = day.get().clamp(1, i64::from(TOTAL_DAYS));
	u32::try_from(n).map_or(1, |n| n.div_ceil(DAYS_PER_PAGE))
}

/// Paginator over the fixed 40-day range.
#[derive(Debug, Clone)]
pub struct DayPaginator {
	cursor: u32,
	day_page: String,
}

impl DayPaginator {
	/// Starts on page 1.
	pub fn new(day_page: impl Into<String>) -> Self { Self { cursor: 1, day_page: day_page.into() } }

	/// Current page, always in `1..=MAX_PAGE`.
	pub fn cursor(&self) -> u32 { self.cursor }

	/// Jump to a page; out-of-range values are clamped.
	pub fn set_cursor(&mut self, page: u32) { self.cursor = page.clamp(1, MAX_PAGE); }

	/// Inclusive day range of the current page.
	pub fn range(&self) -> (u32, u32) {
		let start = (self.cursor - 1) * DAYS_PER_PAGE + 1;
		let end = (start + DAYS_PER_PAGE - 1).min(TOTAL_DAYS);
		(start, end)
	}

	/// Build the links for the current page.
	pub fn render(&self, lang: &LanguageCode) -> DayPage {
		let (start, end) = self.range();
		let links = (start..=end)
			.map(|day| DayLink {
				day,
				href: day_href(&self.day_page, day, lang.as_str()),
				tooltip: TopicBucket::for_day(day).tooltip(),
				delay_secs: f64::from(day - start) * LINK_STAGGER_SECS,
			})
			.collect();
		DayPage { start, end, links }
	}

	/// Step back one page; `false` and no change on page 1.
	pub fn prev(&mut self) -> bool {
		if self.cursor > 1 {
			self.cursor -= 1;
			debug!(page = self.cursor, "grid page back");
			true
		} else {
			false
		}
	}

	/// Step forward one page; `false` and no change on the last page.
	pub fn next(&mut self) -> bool {
		if self.cursor < MAX_PAGE {
			self.cursor += 1;
			debug!(page = self.cursor, "grid page forward");
			true
		} else {
			false
		}
	}
}

/// `#dayRangeStart` / `#dayRangeEnd`. Optional on a page.
pub trait RangeDisplay {
	/// Show the first and last day of the page.
	fn show_range(&mut self, start: u32, end: u32);
}

/// Document side of the day grid.
pub trait GridSurface: ProgressSurface {
	/// Replace the grid container's children with `page`'s links.
	fn replace_links(&mut self, page: &DayPage);
	/// Range display, when the page has one.
	fn range_display(&mut self) -> Option<&mut dyn RangeDisplay>;
	/// Add [`GRID_FLASH_CLASS`] now and remove it after [`GRID_FLASH_MS`].
	fn flash(&mut self);
}

/// Paginator plus the language written into newly rendered links.
#[derive(Debug, Clone)]
pub struct DayGrid {
	paginator: DayPaginator,
	link_language: LanguageCode,
}

impl DayGrid {
	/// Grid on page 1 linking with `link_language`.
	pub fn new(day_page: impl Into<String>, link_language: LanguageCode) -> Self {
		Self { paginator: DayPaginator::new(day_page), link_language }
	}

	/// Underlying paginator.
	pub fn paginator(&self) -> &DayPaginator { &self.paginator }

	/// Language used for links rendered from now on.
	pub fn link_language(&self) -> &LanguageCode { &self.link_language }

	/// Change the language of future renders; existing links are rewritten by the caller.
	/// Page changes keep this code instead of re-reading the stored preference, so a
	/// transliteration card choice survives prev/next.
	pub fn set_link_language(&mut self, code: LanguageCode) { self.link_language = code; }

	/// Rebuild the grid for the current page, then reset progress to day 0.
	pub fn render(&self, surface: &mut impl GridSurface) -> DayPage {
		let page = self.paginator.render(&self.link_language);
		if let Some(range) = surface.range_display() {
			range.show_range(page.start, page.end);
		}
		surface.replace_links(&page);
		update_progress(0, surface);
		page
	}

	/// Previous page; re-renders and flashes only when the page changed.
	pub fn prev(&mut self, surface: &mut impl GridSurface) -> bool {
		let moved = self.paginator.prev();
		if moved {
			self.render(surface);
			surface.flash();
		}
		moved
	}

	/// Next page; re-renders and flashes only when the page changed.
	pub fn next(&mut self, surface: &mut impl GridSurface) -> bool {
		let moved = self.paginator.next();
		if moved {
			self.render(surface);
			surface.flash();
		}
		moved
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Default)]
	struct Range(Option<(u32, u32)>);

	impl RangeDisplay for Range {
		fn show_range(&mut self, start: u32, end: u32) { self.0 = Some((start, end)); }
	}

	#[derive(Default)]
	struct Surface {
		range: Option<Range>,
		hrefs: Vec<String>,
		width: String,
		label: String,
		flashes: u32,
	}

	impl ProgressSurface for Surface {
		fn set_fill_width(&mut self, css: &str) { self.width = css.to_string(); }
		fn set_label(&mut self, text: &str) { self.label = text.to_string(); }
	}

	impl GridSurface for Surface {
		fn replace_links(&mut self, page: &DayPage) { self.hrefs = page.links.iter().map(|l| l.href.clone()).collect(); }
		fn range_display(&mut self) -> Option<&mut dyn RangeDisplay> { self.range.as_mut().map(|r| r as &mut dyn RangeDisplay) }
		fn flash(&mut self) { self.flashes += 1; }
	}

	#[test]
	fn grid_render_resets_progress_and_shows_range() {
		let grid = DayGrid::new("day.html", "en".into());
		let mut s = Surface { range: Some(Range::default()), width: "50%".into(), ..Default::default() };
		grid.render(&mut s);
		assert_eq!(s.range.as_ref().unwrap().0, Some((1, 10)));
		assert_eq!(s.hrefs[9], "day.html?day=10&lang=en");
		assert_eq!(s.width, "0%");
		assert_eq!(s.label, "Progress: Day 0/40");
	}

	#[test]
	fn grid_without_range_display_still_paginates() {
		let mut grid = DayGrid::new("day.html", "ar".into());
		let mut s = Surface::default();
		assert!(!grid.prev(&mut s));
		assert_eq!(s.flashes, 0);
		assert!(grid.next(&mut s));
		assert_eq!(s.flashes, 1);
		assert_eq!(s.hrefs[0], "day.html?day=11&lang=ar");
		grid.set_link_language("transliteration".into());
		grid.next(&mut s);
		assert_eq!(s.hrefs[0], "day.html?day=21&lang=transliteration");
	}

	#[test]
	fn card_link_code_survives_page_changes() {
		let mut grid = DayGrid::new("day.html", "en".into());
		let mut s = Surface::default();
		grid.set_link_language("transliteration".into());
		grid.next(&mut s);
		grid.next(&mut s);
		grid.prev(&mut s);
		assert_eq!(grid.link_language().as_str(), "transliteration");
		assert!(s.hrefs.iter().all(|h| h.ends_with("&lang=transliteration")));
		assert_eq!(s.hrefs[0], "day.html?day=11&lang=transliteration");
	}

	#[test]
	fn first_page_renders_days_one_to_ten() {
		let p = DayPaginator::new("day.html");
		let page = p.render(&"ar".into());
		assert_eq!((page.start, page.end), (1, 10));
		assert_eq!(page.links.len(), 10);
		assert_eq!(page.links[0].href, "day.html?day=1&lang=ar");
		assert_eq!(page.links[0].delay_css(), "0s");
		assert!((page.links[3].delay_secs - 0.15).abs() < 1e-9);
	}

	#[test]
	fn last_page_ends_at_forty() {
		let mut p = DayPaginator::new("day.html");
		p.set_cursor(99);
		assert_eq!(p.cursor(), 4);
		assert_eq!(p.range(), (31, 40));
	}

	#[test]
	fn edges_are_noops() {
		let mut p = DayPaginator::new("day.html");
		assert!(!p.prev());
		assert_eq!(p.cursor(), 1);
		assert!(p.next() && p.next() && p.next());
		assert!(!p.next());
		assert_eq!(p.cursor(), 4);
	}

	#[test]
	fn bucket_boundaries() {
		let cases = [(7, 1), (8, 2), (14, 2), (15, 3), (22, 3), (23, 4), (30, 4), (31, 5), (40, 5)];
		for (day, bucket) in cases {
			assert_eq!(TopicBucket::for_day(day).index(), bucket, "day {day}");
		}
	}
}
