//! Scroll-triggered entrance animations and decorative micro-interactions.
//!
//! Each observed node runs a two-state machine: `Pending` until it first intersects the
//! viewport, then `Animated` for good. The host stops observing a node as soon as it
//! leaves `Pending`.

use std::collections::HashMap;
use tracing::trace;

/// Visible fraction that counts as an intersection.
pub const INTERSECTION_THRESHOLD: f64 = 0.1;

/// Selector of every node considered for scroll animation.
pub const OBSERVED_SELECTOR: &str = "section, .language-card, .section-card, .benefit-card, .section-divider";

/// Nodes that float continuously regardless of visibility.
pub const FLOAT_SELECTOR: &str = ".visual-anchor";
/// Continuous floating animation.
pub const FLOAT_CLASS: &str = "animate-float";

/// Section dividers pulse continuously.
pub const DIVIDER_SELECTOR: &str = ".section-divider";
/// Continuous pulse animation.
pub const PULSE_CLASS: &str = "animate-pulse";

/// One-shot entrance animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationKind {
	SlideRight,
	SlideLeft,
	FadeIn,
}

impl AnimationKind {
	/// Every entrance animation.
	pub const ALL: [AnimationKind; 3] = [Self::SlideRight, Self::SlideLeft, Self::FadeIn];

	/// CSS class applying the animation.
	pub fn class(self) -> &'static str {
		match self {
			Self::SlideRight => "animate-slide-right",
			Self::SlideLeft => "animate-slide-left",
			Self::FadeIn => "animate-fade-in",
		}
	}
}

/// Node category, by class membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeCategory {
	SectionCard,
	BenefitCard,
	Other,
}

impl NodeCategory {
	/// `section-card` takes precedence over `benefit-card`.
	pub fn classify<'a>(classes: impl IntoIterator<Item = &'a str> + Clone) -> Self {
		if classes.clone().into_iter().any(|c| c == "section-card") {
			Self::SectionCard
		} else if classes.into_iter().any(|c| c == "benefit-card") {
			Self::BenefitCard
		} else {
			Self::Other
		}
	}

	/// Entrance animation for the category.
	pub fn animation(self) -> AnimationKind {
		match self {
			Self::SectionCard => AnimationKind::SlideRight,
			Self::BenefitCard => AnimationKind::SlideLeft,
			Self::Other => AnimationKind::FadeIn,
		}
	}
}

/// True when the node already carries an entrance animation and must not be observed.
pub fn already_animated<'a>(classes: impl IntoIterator<Item = &'a str>) -> bool {
	classes.into_iter().any(|c| AnimationKind::ALL.iter().any(|k| k.class() == c))
}

/// Per-node observation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeState {
	Pending(NodeCategory),
	Animated(AnimationKind),
}

/// Opaque node handle chosen by the host.
pub type NodeId = usize;

/// Tracks observed nodes until each has animated once.
#[derive(Debug, Default)]
pub struct ScrollAnimator {
	nodes: HashMap<NodeId, NodeState>,
}

impl ScrollAnimator {
	/// Empty tracker.
	pub fn new() -> Self { Self::default() }

	/// Register a node; returns `false` (and ignores it) if it is already animated.
	pub fn observe<'a>(&mut self, id: NodeId, classes: impl IntoIterator<Item = &'a str> + Clone) -> bool {
		if already_animated(classes.clone()) {
			return false;
		}
		self.nodes.insert(id, NodeState::Pending(NodeCategory::classify(classes)));
		true
	}

	/// Feed an intersection report. Returns the animation to apply the first time a
	/// pending node intersects; the host must then stop observing it.
	pub fn on_intersect(&mut self, id: NodeId, intersecting: bool) -> Option<AnimationKind> {
		if !intersecting {
			return None;
		}
		let state = self.nodes.get_mut(&id)?;
		match *state {
			NodeState::Pending(category) => {
				let kind = category.animation();
				*state = NodeState::Animated(kind);
				trace!(node = id, class = kind.class(), "node animated");
				Some(kind)
			}
			NodeState::Animated(_) => None,
		}
	}

	/// State of a node, if registered.
	pub fn state(&self, id: NodeId) -> Option<NodeState> { self.nodes.get(&id).copied() }

	/// Nodes still waiting for their first intersection.
	pub fn pending(&self) -> usize { self.nodes.values().filter(|s| matches!(s, NodeState::Pending(_))).count() }
}

/// Inline style toggled by a decorative hover effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverEffect {
	/// Elements receiving the effect.
	pub selector: &'static str,
	/// CSS property name.
	pub property: &'static str,
	/// Value on pointer enter.
	pub enter: &'static str,
	/// Value on pointer leave.
	pub leave: &'static str,
}

/// Micro-interactions on benefit and section cards.
pub const HOVER_EFFECTS: [HoverEffect; 2] = [
	HoverEffect { selector: ".benefit-card", property: "background", enter: "linear-gradient(135deg, white, #f8f9fa)", leave: "white" },
	HoverEffect { selector: ".section-card", property: "border-left-width", enter: "8px", leave: "4px" },
];

impl HoverEffect {
	/// Value to set for a pointer transition.
	pub fn value(&self, entering: bool) -> &'static str { if entering { self.enter } else { self.leave } }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn category_precedence() {
		assert_eq!(NodeCategory::classify(["benefit-card", "section-card"]), NodeCategory::SectionCard);
		assert_eq!(NodeCategory::classify(["benefit-card"]), NodeCategory::BenefitCard);
		assert_eq!(NodeCategory::classify(["language-card"]), NodeCategory::Other);
	}

	#[test]
	fn animates_exactly_once() {
		let mut a = ScrollAnimator::new();
		assert!(a.observe(1, ["section-card"]));
		assert_eq!(a.on_intersect(1, false), None);
		assert_eq!(a.on_intersect(1, true), Some(AnimationKind::SlideRight));
		assert_eq!(a.on_intersect(1, true), None);
		assert_eq!(a.state(1), Some(NodeState::Animated(AnimationKind::SlideRight)));
		assert_eq!(a.pending(), 0);
	}

	#[test]
	fn pre_animated_nodes_are_skipped() {
		let mut a = ScrollAnimator::new();
		assert!(!a.observe(2, ["benefit-card", "animate-slide-left"]));
		assert_eq!(a.on_intersect(2, true), None);
		assert!(a.state(2).is_none());
	}

	#[test]
	fn unknown_nodes_ignored() {
		let mut a = ScrollAnimator::new();
		assert_eq!(a.on_intersect(42, true), None);
	}

	#[test]
	fn hover_values() {
		assert_eq!(HOVER_EFFECTS[1].value(true), "8px");
		assert_eq!(HOVER_EFFECTS[0].value(false), "white");
	}
}
