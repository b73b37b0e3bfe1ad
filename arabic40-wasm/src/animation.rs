//! Scroll-triggered entrance animations and hover micro-interactions.

use crate::dom;
use arabic40_core::animation::{
    NodeId, ScrollAnimator, DIVIDER_SELECTOR, FLOAT_CLASS, FLOAT_SELECTOR, HOVER_EFFECTS, INTERSECTION_THRESHOLD,
    OBSERVED_SELECTOR, PULSE_CLASS,
};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

const NODE_ID_ATTR: &str = "data-a40-node";

fn node_id(el: &Element) -> Option<NodeId> {
    el.get_attribute(NODE_ID_ATTR)?.parse().ok()
}

/// Observe every animatable node; each animates once on first sight.
pub fn init_scroll_animations(doc: &Document) {
    let animator = Rc::new(RefCell::new(ScrollAnimator::new()));

    let state = animator.clone();
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else { continue };
            let target = entry.target();
            let Some(id) = node_id(&target) else { continue };
            if let Some(kind) = state.borrow_mut().on_intersect(id, entry.is_intersecting()) {
                let _ = target.class_list().add_1(kind.class());
                observer.unobserve(&target);
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(INTERSECTION_THRESHOLD));
    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer,
        Err(_) => {
            warn!("IntersectionObserver unavailable; scroll animations disabled");
            return;
        }
    };
    callback.forget();

    let mut observed = 0usize;
    for (id, el) in dom::query_all::<Element>(doc, OBSERVED_SELECTOR).into_iter().enumerate() {
        let classes = dom::class_names(&el);
        if animator.borrow_mut().observe(id, classes.iter().map(String::as_str)) {
            let _ = el.set_attribute(NODE_ID_ATTR, &id.to_string());
            observer.observe(&el);
            observed += 1;
        }
    }
    debug!(observed, "scroll animations armed");

    for anchor in dom::query_all::<Element>(doc, FLOAT_SELECTOR) {
        let _ = anchor.class_list().add_1(FLOAT_CLASS);
    }
}

/// Pulse the dividers and wire the card hover styles.
pub fn init_micro_interactions(doc: &Document) {
    for divider in dom::query_all::<Element>(doc, DIVIDER_SELECTOR) {
        let _ = divider.class_list().add_1(PULSE_CLASS);
    }

    for effect in HOVER_EFFECTS {
        for card in dom::query_all::<HtmlElement>(doc, effect.selector) {
            for (event, entering) in [("mouseenter", true), ("mouseleave", false)] {
                let target = card.clone();
                dom::on(&card, event, move |_| dom::set_style(&target, effect.property, effect.value(entering)));
            }
        }
    }
}
