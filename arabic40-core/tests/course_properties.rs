use arabic40_core::{
	language::{LanguagePreference, LanguageSurface, MemoryStore, PreferenceStore},
	pagination::{page_for_day, DayPaginator, TopicBucket},
	types::{Day, LanguageCode, MAX_PAGE},
	video::{ResolveOutcome, VideoDisplay, VideoLoader, VideoMapping},
	SiteConfig,
};
use proptest::prelude::*;

struct NullSurface;

impl LanguageSurface for NullSurface {
	fn set_document_language(&mut self, _code: &LanguageCode) {}
	fn toggle_codes(&self) -> Vec<Option<String>> { Vec::new() }
	fn set_toggle_active(&mut self, _index: usize, _active: bool) {}
	fn replace_url_lang(&mut self, _code: &LanguageCode) {}
}

#[derive(Debug, Default, Clone, PartialEq)]
struct Player {
	src: String,
	fallback: bool,
	embeds: u32,
}

impl VideoDisplay for Player {
	fn show_embed(&mut self, url: &str) {
		self.src = url.to_string();
		self.fallback = false;
		self.embeds += 1;
	}
	fn show_fallback(&mut self) {
		self.src.clear();
		self.fallback = true;
	}
}

fn sample_mapping() -> VideoMapping {
	(1..=40u32)
		.filter(|d| d % 3 != 0)
		.map(|d| (format!("day{d}"), format!("vid{d}")))
		.collect()
}

proptest! {
	#[test]
	fn page_of_day_contains_day(day in 1u32..=40) {
		let mut p = DayPaginator::new("day.html");
		p.set_cursor(page_for_day(Day::new(day).unwrap()));
		let (start, end) = p.range();
		prop_assert!(start <= day && day <= end);
	}

	#[test]
	fn cursor_never_leaves_bounds(moves in proptest::collection::vec(any::<bool>(), 0..64)) {
		let mut p = DayPaginator::new("day.html");
		for forward in moves {
			if forward { p.next(); } else { p.prev(); }
			prop_assert!((1..=MAX_PAGE).contains(&p.cursor()));
		}
	}

	#[test]
	fn language_round_trips_through_storage(code in "[a-zA-Z-]{0,16}") {
		let mut lp = LanguagePreference::new(MemoryStore::new(), &SiteConfig::default());
		lp.apply(&LanguageCode::new(code.clone()), &mut NullSurface);
		prop_assert_eq!(lp.store().get("preferredLanguage"), Some(code));
	}

	#[test]
	fn queued_resolution_matches_direct_resolution(days in proptest::collection::vec(1u32..=45, 0..12)) {
		let days: Vec<Day> = days.into_iter().filter_map(Day::new).collect();

		let mut early = VideoLoader::new("https://www.youtube.com/embed");
		let mut p1 = Player::default();
		early.begin();
		for d in &days {
			prop_assert_eq!(early.resolve(*d, &mut p1), ResolveOutcome::Queued);
		}
		let replayed = early.complete(Ok(sample_mapping()), Day::FIRST, &mut p1);

		let mut late = VideoLoader::new("https://www.youtube.com/embed");
		let mut p2 = Player::default();
		late.begin();
		let mut direct = late.complete(Ok(sample_mapping()), Day::FIRST, &mut p2);
		for d in &days {
			direct.push((*d, late.resolve(*d, &mut p2)));
		}

		prop_assert_eq!(replayed, direct);
		prop_assert_eq!(p1, p2);
	}
}

#[test]
fn bucket_thresholds_match_exactly() {
	let expected = [(7, 1), (8, 2), (14, 2), (15, 3), (22, 3), (23, 4), (30, 4), (31, 5)];
	for (day, bucket) in expected {
		assert_eq!(TopicBucket::for_day(day).index(), bucket);
	}
}

#[test]
fn prev_and_next_are_noops_at_edges() {
	let mut p = DayPaginator::new("day.html");
	assert!(!p.prev());
	assert_eq!(p.cursor(), 1);
	p.set_cursor(4);
	assert!(!p.next());
	assert_eq!(p.cursor(), 4);
}

#[test]
fn example_scenario_single_entry_mapping() {
	let mapping = VideoMapping::from_json(r#"{"day1":"abc123"}"#).unwrap();

	let mut loader = VideoLoader::new("https://www.youtube.com/embed");
	let mut player = Player::default();
	loader.begin();
	loader.complete(Ok(mapping.clone()), Day::parse_param(Some("1")), &mut player);
	assert_eq!(player.src, "https://www.youtube.com/embed/abc123");
	assert!(!player.fallback);

	let mut loader = VideoLoader::new("https://www.youtube.com/embed");
	let mut player = Player { src: "stale".into(), ..Default::default() };
	loader.begin();
	loader.complete(Ok(mapping), Day::parse_param(Some("2")), &mut player);
	assert!(player.fallback);
	assert!(player.src.is_empty());
}

#[test]
fn repeated_day_requests_embed_twice() {
	let mut loader = VideoLoader::new("https://www.youtube.com/embed");
	let mut player = Player::default();
	loader.begin();
	loader.resolve(Day::new(2).unwrap(), &mut player);
	loader.resolve(Day::new(2).unwrap(), &mut player);
	loader.complete(Ok(sample_mapping()), Day::new(4).unwrap(), &mut player);
	assert_eq!(player.embeds, 3);
	assert_eq!(player.src, "https://www.youtube.com/embed/vid2");
}
