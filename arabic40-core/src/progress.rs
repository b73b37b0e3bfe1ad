use crate::types::TOTAL_DAYS;

/// Progress bar fill elements.
pub const PROGRESS_FILL_SELECTOR: &str = ".progress-fill";
/// Progress text elements.
pub const PROGRESS_LABEL_SELECTOR: &str = ".progress-container p";

/// Progress indicator contents for a day.
///
/// Values are not clamped: day -4 gives -10% and day 60 gives 150%.
#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
	pub day: i32,
	pub percent: f64,
}

impl Progress {
	/// `(day / 40) * 100` percent.
	pub fn for_day(day: i32) -> Self {
		Self { day, percent: f64::from(day) / f64::from(TOTAL_DAYS) * 100.0 }
	}

	/// Value for the CSS `width` property.
	pub fn width_css(&self) -> String { format!("{}%", self.percent) }

	/// `"Progress: Day 3/40"`.
	pub fn label(&self) -> String { format!("Progress: Day {}/{}", self.day, TOTAL_DAYS) }
}

/// Where progress is drawn.
pub trait ProgressSurface {
	/// Apply a width to every progress fill.
	fn set_fill_width(&mut self, css: &str);
	/// Replace the text of every progress label.
	fn set_label(&mut self, text: &str);
}

/// Draw `day` on every progress element.
pub fn update_progress(day: i32, surface: &mut impl ProgressSurface) -> Progress {
	let p = Progress::for_day(day);
	surface.set_fill_width(&p.width_css());
	surface.set_label(&p.label());
	p
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn reset_to_zero() {
		let p = Progress::for_day(0);
		assert_eq!(p.width_css(), "0%");
		assert_eq!(p.label(), "Progress: Day 0/40");
	}

	#[test]
	fn unclamped() {
		assert_eq!(Progress::for_day(20).width_css(), "50%");
		assert_eq!(Progress::for_day(-4).percent, -10.0);
		assert_eq!(Progress::for_day(60).percent, 150.0);
	}
}
