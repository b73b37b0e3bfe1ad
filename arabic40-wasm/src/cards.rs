//! Language selection cards on the landing page.

use crate::dom;
use crate::site::Site;
use arabic40_core::cards::{CardSelector, CardStyle, DAY_SELECTION_ID};
use std::rc::Rc;
use tracing::debug;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

pub const CARD_SELECTOR: &str = ".language-card";

fn apply_style(card: &HtmlElement, style: CardStyle) {
    if let Some(opacity) = style.opacity {
        dom::set_style(card, "opacity", opacity);
    }
    if let Some(transform) = style.transform {
        dom::set_style(card, "transform", transform);
    }
    if let Some(shadow) = style.box_shadow {
        dom::set_style(card, "box-shadow", shadow);
    }
}

fn scroll_to_day_selection(site: &Site) {
    let Some(target) = dom::by_id::<HtmlElement>(site.document(), DAY_SELECTION_ID) else { return };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Bind click and hover handlers to the first three cards.
pub fn init_language_cards(site: &Rc<Site>) {
    let cards: Vec<HtmlElement> = dom::query_all(site.document(), CARD_SELECTOR);
    if cards.is_empty() {
        return;
    }
    let selector = Rc::new(CardSelector::new(cards.len()));
    let cards = Rc::new(cards);

    for index in 0..selector.bound_cards() {
        let card = &cards[index];

        let (site_c, sel, all) = (site.clone(), selector.clone(), cards.clone());
        dom::on(card, "click", move |_| {
            let Some(selection) = sel.click(index) else { return };
            for (el, style) in all.iter().zip(&selection.styles) {
                apply_style(el, *style);
            }
            site_c.set_language(&selection.display_code);
            site_c.set_link_language(selection.link_code.clone());
            scroll_to_day_selection(&site_c);
        });

        for (event, entering) in [("mouseenter", true), ("mouseleave", false)] {
            let (sel, el) = (selector.clone(), card.clone());
            dom::on(card, event, move |_| {
                if let Some(style) = sel.hover(index, entering, &dom::style_value(&el, "opacity")) {
                    apply_style(&el, style);
                }
            });
        }
    }
    debug!(cards = cards.len(), bound = selector.bound_cards(), "language cards bound");
}
