//! Browser bindings for the Arabic in 40 Days course site.
//!
//! `start` runs when the module is instantiated and wires every page component once the
//! DOM is ready. Components whose markup is missing stay disabled. The `arabic40_*`
//! exports are the JS-facing API used by inline page scripts.
use arabic40_core::pagination::DayPaginator;
use arabic40_core::{Day, LanguageCode, ResolveOutcome};
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{error, info};
use wasm_bindgen::prelude::*;

mod animation;
mod cards;
mod dom;
mod errors;
mod grid;
mod language;
mod logging;
mod site;
mod storage;
mod video;

pub use errors::{SiteWasmError, WasmResult};
use site::Site;

thread_local! {
    static SITE: RefCell<Option<Rc<Site>>> = const { RefCell::new(None) };
}

fn current_site() -> Result<Rc<Site>, SiteWasmError> {
    SITE.with(|s| s.borrow().clone())
        .ok_or_else(|| SiteWasmError::ConfigurationError("site not initialized yet".into()))
}

fn boot() -> Result<(), SiteWasmError> {
    let doc = dom::document()?;
    let config = site::page_config(&doc);
    logging::init(config.tracing_level());

    let site = Rc::new(Site::new(doc, config)?);
    SITE.with(|s| *s.borrow_mut() = Some(site.clone()));

    let lang = site.init_language();
    site.render_grid();
    cards::init_language_cards(&site);
    animation::init_scroll_animations(site.document());
    site.init_pagination();
    animation::init_micro_interactions(site.document());
    site.init_toggles();
    site.start_video_loader();

    info!(%lang, "site ready");
    Ok(())
}

fn boot_or_log() {
    if let Err(e) = boot() {
        error!(error = %e, "site boot failed");
        web_sys::console::error_1(&JsValue::from(e));
    }
}

#[wasm_bindgen(start)]
pub fn start() -> WasmResult<()> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let doc = dom::document()?;
    if doc.ready_state() == "loading" {
        dom::on(&doc, "DOMContentLoaded", |_| boot_or_log());
    } else {
        boot_or_log();
    }
    Ok(())
}

/// Show the video for `day`. Before the mapping has loaded the request is queued.
#[wasm_bindgen]
pub fn arabic40_load_video(day: i32) -> WasmResult<String> {
    let site = current_site()?;
    let day = i64::from(day);
    let day = Day::from_number(day).ok_or(SiteWasmError::from(arabic40_core::Error::InvalidDay(day)))?;
    let outcome = match site.load_video(day) {
        Some(ResolveOutcome::Queued) => "queued".to_string(),
        Some(ResolveOutcome::Embedded(url)) => url,
        Some(ResolveOutcome::Fallback) | None => "fallback".to_string(),
    };
    Ok(outcome)
}

/// Apply `code` as the page language and persist it.
#[wasm_bindgen]
pub fn arabic40_set_language(code: String) -> WasmResult<()> {
    current_site()?.set_language(&LanguageCode::new(code));
    Ok(())
}

/// Log `message` and show the localized error banner.
#[wasm_bindgen]
pub fn arabic40_handle_error(message: String) -> WasmResult<()> {
    Ok(current_site()?.handle_error(&message)?)
}

/// Set the progress bars and labels; returns the label.
#[wasm_bindgen]
pub fn arabic40_update_progress(day: i32) -> WasmResult<String> {
    Ok(current_site()?.update_progress(day).label())
}

/// Long date for a JS timestamp in the document language.
#[wasm_bindgen]
pub fn arabic40_format_date(ms: f64) -> WasmResult<String> {
    let date = js_sys::Date::new(&JsValue::from_f64(ms));
    let naive = chrono::NaiveDate::from_ymd_opt(date.get_full_year() as i32, date.get_month() + 1, date.get_date())
        .ok_or_else(|| SiteWasmError::SerializationError(format!("invalid timestamp {ms}")))?;
    let lang = dom::document().map(|doc| language::document_language(&doc)).unwrap_or_default();
    Ok(arabic40_core::notice::format_long_date(naive, &lang))
}

#[derive(Serialize)]
struct DayLinkJs {
    day: u32,
    href: String,
    tooltip: &'static str,
}

/// Links of grid page `page` (clamped) as `{ day, href, tooltip }` objects.
#[wasm_bindgen]
pub fn arabic40_day_page(page: u32, lang: String) -> WasmResult<JsValue> {
    let day_page = current_site().map(|s| s.config().day_page.clone()).unwrap_or_else(|_| "day.html".into());
    let mut paginator = DayPaginator::new(day_page);
    paginator.set_cursor(page);
    let links: Vec<DayLinkJs> = paginator
        .render(&LanguageCode::new(lang))
        .links
        .into_iter()
        .map(|l| DayLinkJs { day: l.day, href: l.href, tooltip: l.tooltip })
        .collect();
    serde_wasm_bindgen::to_value(&links).map_err(|e| SiteWasmError::SerializationError(e.to_string()).into())
}
