//! Small DOM helpers shared by the page components.

use crate::errors::SiteWasmError;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, UrlSearchParams, Window};

pub fn window() -> Result<Window, SiteWasmError> {
    web_sys::window().ok_or(SiteWasmError::NoDocument)
}

pub fn document() -> Result<Document, SiteWasmError> {
    window()?.document().ok_or(SiteWasmError::NoDocument)
}

/// Every element matching `selector` that casts to `T`, in document order.
pub fn query_all<T: JsCast>(doc: &Document, selector: &str) -> Vec<T> {
    let Ok(list) = doc.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

/// First element matching `selector`, if present and of type `T`.
pub fn query<T: JsCast>(doc: &Document, selector: &str) -> Option<T> {
    doc.query_selector(selector).ok().flatten().and_then(|el| el.dyn_into::<T>().ok())
}

pub fn by_id<T: JsCast>(doc: &Document, id: &str) -> Option<T> {
    doc.get_element_by_id(id).and_then(|el| el.dyn_into::<T>().ok())
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

pub fn style_value(el: &HtmlElement, property: &str) -> String {
    el.style().get_property_value(property).unwrap_or_default()
}

pub fn class_names(el: &Element) -> Vec<String> {
    let list = el.class_list();
    (0..list.length()).filter_map(|i| list.item(i)).collect()
}

/// Attach a listener for the page lifetime.
pub fn on<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Value of a query parameter of the current URL.
pub fn query_param(name: &str) -> Option<String> {
    let search = window().ok()?.location().search().ok()?;
    UrlSearchParams::new_with_str(&search).ok()?.get(name)
}
