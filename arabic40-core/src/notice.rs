//! Inline error banner and localized long dates.

use crate::i18n::I18n;
use chrono::{Datelike, NaiveDate, Weekday};

/// Classes of the banner container.
pub const ERROR_BANNER_CLASSES: &str = "error animate-fade-in";

/// Element the banner is prepended to.
pub const ERROR_BANNER_PARENT: &str = "main";

/// Localized error banner. Arabic when the document language is exactly `"ar"`,
/// English otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBanner {
	/// `"ar"` or `"en"`; also the class of the inner span.
	pub lang: &'static str,
	pub text: String,
}

impl ErrorBanner {
	/// Banner for the current document language.
	pub fn for_language(document_lang: &str, i18n: &I18n) -> Self {
		let lang = if document_lang == "ar" { "ar" } else { "en" };
		Self { lang, text: i18n.format(lang, "error-banner") }
	}

	/// Inner markup: `<span class="en">…</span>`.
	pub fn inner_html(&self) -> String { format!("<span class=\"{}\">{}</span>", self.lang, self.text) }
}

const AR_WEEKDAYS: [&str; 7] = ["الاثنين", "الثلاثاء", "الأربعاء", "الخميس", "الجمعة", "السبت", "الأحد"];

const AR_MONTHS: [&str; 12] = [
	"يناير", "فبراير", "مارس", "أبريل", "مايو", "يونيو", "يوليو", "أغسطس", "سبتمبر", "أكتوبر", "نوفمبر", "ديسمبر",
];

fn arabic_indic_digits(n: impl ToString) -> String {
	n.to_string()
		.chars()
		.map(|c| match c.to_digit(10) {
			Some(d) => char::from_u32(0x0660 + d).unwrap_or(c),
			None => c,
		})
		.collect()
}

fn ar_weekday(w: Weekday) -> &'static str { AR_WEEKDAYS[w.num_days_from_monday() as usize] }

/// Long date with weekday: Egyptian Arabic for `"ar"`, US English otherwise.
///
/// `ar`: `الاثنين، ٥ يناير ٢٠٢٦`; otherwise `Monday, January 5, 2026`.
pub fn format_long_date(date: NaiveDate, document_lang: &str) -> String {
	if document_lang == "ar" {
		format!(
			"{}، {} {} {}",
			ar_weekday(date.weekday()),
			arabic_indic_digits(date.day()),
			AR_MONTHS[date.month0() as usize],
			arabic_indic_digits(date.year()),
		)
	} else {
		date.format("%A, %B %-d, %Y").to_string()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn banner_language_selection() {
		let i = I18n::builtin().unwrap();
		let ar = ErrorBanner::for_language("ar", &i);
		assert_eq!(ar.lang, "ar");
		assert!(ar.inner_html().starts_with("<span class=\"ar\">حدث خطأ"));
		let en = ErrorBanner::for_language("transliteration", &i);
		assert_eq!(en.inner_html(), "<span class=\"en\">An error occurred. Please try again later.</span>");
	}

	#[test]
	fn long_dates() {
		let d = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
		assert_eq!(format_long_date(d, "en"), "Monday, January 5, 2026");
		assert_eq!(format_long_date(d, "ar"), "الاثنين، ٥ يناير ٢٠٢٦");
	}
}
