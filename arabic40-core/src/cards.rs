//! The three language selection cards.
//!
//! Cards are bound by position to [`LANGUAGE_CARDS`]. Each entry carries two codes: the
//! card key, written into day-grid links, and the display code, applied as the page
//! language. They differ for the transliteration card.

use crate::pagination::day_href;
use crate::types::LanguageCode;
use tracing::info;

/// One selection card binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardBinding {
	/// Content-track key placed in day links.
	pub key: &'static str,
	/// Language applied to the document.
	pub display: &'static str,
}

/// Cards in document order.
pub const LANGUAGE_CARDS: [CardBinding; 3] = [
	CardBinding { key: "ar", display: "ar" },
	CardBinding { key: "transliteration", display: "en" },
	CardBinding { key: "en", display: "en" },
];

/// Element id scrolled into view after a selection.
pub const DAY_SELECTION_ID: &str = "day-selection";

/// Opacity marking a card that lost the selection. Hover effects are suppressed while a
/// card's inline opacity reads exactly this value.
pub const DIMMED_OPACITY: &str = "0.7";

/// Inline style of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardStyle {
	pub opacity: Option<&'static str>,
	pub transform: Option<&'static str>,
	pub box_shadow: Option<&'static str>,
}

impl CardStyle {
	/// Not selected after a click elsewhere.
	pub const DIMMED: CardStyle = CardStyle { opacity: Some(DIMMED_OPACITY), transform: Some("none"), box_shadow: None };
	/// The clicked card.
	pub const SELECTED: CardStyle = CardStyle { opacity: Some("1"), transform: Some("translateY(-10px)"), box_shadow: None };
	/// Pointer over an undimmed card.
	pub const HOVER_IN: CardStyle =
		CardStyle { opacity: None, transform: Some("translateY(-10px)"), box_shadow: Some("0 15px 30px rgba(0,0,0,0.15)") };
	/// Pointer left an undimmed card.
	pub const HOVER_OUT: CardStyle =
		CardStyle { opacity: None, transform: Some("translateY(0)"), box_shadow: Some("0 10px 20px rgba(0,0,0,0.1)") };
}

/// Result of clicking a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSelection {
	/// Goes to the language manager.
	pub display_code: LanguageCode,
	/// Goes into every day-grid link.
	pub link_code: LanguageCode,
	/// Style per card, in card order.
	pub styles: Vec<CardStyle>,
}

/// Card selector over `card_count` cards found in the document.
///
/// Cards beyond the binding table get no behavior.
#[derive(Debug, Clone)]
pub struct CardSelector {
	card_count: usize,
}

impl CardSelector {
	/// Selector for the cards present in the document.
	pub fn new(card_count: usize) -> Self { Self { card_count } }

	/// Binding for the card at `index`, if it has one.
	pub fn binding(&self, index: usize) -> Option<CardBinding> {
		if index < self.card_count { LANGUAGE_CARDS.get(index).copied() } else { None }
	}

	/// Number of cards that receive handlers.
	pub fn bound_cards(&self) -> usize { self.card_count.min(LANGUAGE_CARDS.len()) }

	/// Handle a click on card `index`.
	pub fn click(&self, index: usize) -> Option<CardSelection> {
		let binding = self.binding(index)?;
		let styles = (0..self.card_count)
			.map(|i| if i == index { CardStyle::SELECTED } else { CardStyle::DIMMED })
			.collect();
		info!(card = binding.key, display = binding.display, "language card selected");
		Some(CardSelection {
			display_code: LanguageCode::from(binding.display),
			link_code: LanguageCode::from(binding.key),
			styles,
		})
	}

	/// Hover style for a card, given its current inline opacity. `None` means leave the
	/// card untouched.
	pub fn hover(&self, index: usize, entering: bool, current_opacity: &str) -> Option<CardStyle> {
		self.binding(index)?;
		if current_opacity == DIMMED_OPACITY {
			return None;
		}
		Some(if entering { CardStyle::HOVER_IN } else { CardStyle::HOVER_OUT })
	}
}

/// Href of an existing grid link after a card selection.
pub fn rewrite_day_href(day_page: &str, day_text: &str, link_code: &LanguageCode) -> String {
	day_href_text(day_page, day_text.trim(), link_code.as_str())
}

fn day_href_text(day_page: &str, day: &str, lang: &str) -> String {
	match day.parse::<u32>() {
		Ok(n) => day_href(day_page, n, lang),
		Err(_) => format!("{day_page}?day={day}&lang={lang}"),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn transliteration_card_splits_codes() {
		let sel = CardSelector::new(3).click(1).unwrap();
		assert_eq!(sel.display_code.as_str(), "en");
		assert_eq!(sel.link_code.as_str(), "transliteration");
		assert_eq!(sel.styles, vec![CardStyle::DIMMED, CardStyle::SELECTED, CardStyle::DIMMED]);
	}

	#[test]
	fn extra_cards_are_inert() {
		let s = CardSelector::new(5);
		assert_eq!(s.bound_cards(), 3);
		assert!(s.click(3).is_none());
		assert!(s.hover(4, true, "").is_none());
	}

	#[test]
	fn missing_cards_shrink_the_table() {
		let s = CardSelector::new(2);
		assert!(s.click(2).is_none());
		assert_eq!(s.click(0).unwrap().styles.len(), 2);
	}

	#[test]
	fn hover_suppressed_while_dimmed() {
		let s = CardSelector::new(3);
		assert_eq!(s.hover(0, true, ""), Some(CardStyle::HOVER_IN));
		assert_eq!(s.hover(0, false, "1"), Some(CardStyle::HOVER_OUT));
		assert_eq!(s.hover(0, true, "0.7"), None);
	}

	#[test]
	fn rewrites_link_language() {
		let href = rewrite_day_href("day.html", "12", &"transliteration".into());
		assert_eq!(href, "day.html?day=12&lang=transliteration");
	}
}
