//! Day grid rendering and pagination controls.

use crate::dom;
use arabic40_core::cards::rewrite_day_href;
use arabic40_core::pagination::{DayPage, RangeDisplay, DAY_LINK_CLASSES, GRID_FLASH_CLASS, GRID_FLASH_MS};
use arabic40_core::progress::{ProgressSurface, PROGRESS_FILL_SELECTOR, PROGRESS_LABEL_SELECTOR};
use arabic40_core::{GridSurface, LanguageCode};
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlAnchorElement, HtmlElement};

pub const GRID_SELECTOR: &str = ".day-grid";
pub const PREV_ID: &str = "prevDays";
pub const NEXT_ID: &str = "nextDays";
const RANGE_START_ID: &str = "dayRangeStart";
const RANGE_END_ID: &str = "dayRangeEnd";
const STATUS_ICON_HTML: &str = r#"<i class="fas fa-circle" style="color: var(--warning-color);"></i>"#;

/// `.progress-fill` bars and `.progress-container p` labels.
pub struct DomProgress {
    doc: Document,
}

impl DomProgress {
    pub fn new(doc: &Document) -> Self {
        Self { doc: doc.clone() }
    }
}

impl ProgressSurface for DomProgress {
    fn set_fill_width(&mut self, css: &str) {
        for fill in dom::query_all::<HtmlElement>(&self.doc, PROGRESS_FILL_SELECTOR) {
            dom::set_style(&fill, "width", css);
        }
    }

    fn set_label(&mut self, text: &str) {
        for label in dom::query_all::<Element>(&self.doc, PROGRESS_LABEL_SELECTOR) {
            label.set_text_content(Some(text));
        }
    }
}

struct DomRange {
    start: HtmlElement,
    end: HtmlElement,
}

impl RangeDisplay for DomRange {
    fn show_range(&mut self, start: u32, end: u32) {
        self.start.set_text_content(Some(&start.to_string()));
        self.end.set_text_content(Some(&end.to_string()));
    }
}

/// The `.day-grid` container plus its optional range display.
pub struct DomGrid {
    doc: Document,
    container: HtmlElement,
    range: Option<DomRange>,
    progress: DomProgress,
}

impl DomGrid {
    /// `None` when the page has no day grid.
    pub fn find(doc: &Document) -> Option<Self> {
        let container = dom::query::<HtmlElement>(doc, GRID_SELECTOR)?;
        let range = match (dom::by_id(doc, RANGE_START_ID), dom::by_id(doc, RANGE_END_ID)) {
            (Some(start), Some(end)) => Some(DomRange { start, end }),
            _ => None,
        };
        Some(Self { doc: doc.clone(), container, range, progress: DomProgress::new(doc) })
    }

    fn build_link(&self, link: &arabic40_core::pagination::DayLink) -> Option<HtmlAnchorElement> {
        let a = self.doc.create_element("a").ok()?.dyn_into::<HtmlAnchorElement>().ok()?;
        a.set_href(&link.href);
        a.set_class_name(DAY_LINK_CLASSES);
        dom::set_style(&a, "animation-delay", &link.delay_css());
        a.set_title(link.tooltip);

        let number = self.doc.create_element("div").ok()?;
        number.set_class_name("day-number");
        number.set_text_content(Some(&link.day.to_string()));

        let status = self.doc.create_element("div").ok()?;
        status.set_class_name("day-status");
        status.set_inner_html(STATUS_ICON_HTML);

        a.append_child(&number).ok()?;
        a.append_child(&status).ok()?;
        Some(a)
    }

    /// Point every rendered link at `link_code`, keeping its day.
    pub fn rewrite_links(&self, day_page: &str, link_code: &LanguageCode) {
        for a in dom::query_all::<HtmlAnchorElement>(&self.doc, ".day-grid a") {
            let day = a
                .query_selector(".day-number")
                .ok()
                .flatten()
                .and_then(|n| n.text_content())
                .unwrap_or_default();
            a.set_href(&rewrite_day_href(day_page, &day, link_code));
        }
    }
}

impl ProgressSurface for DomGrid {
    fn set_fill_width(&mut self, css: &str) {
        self.progress.set_fill_width(css);
    }

    fn set_label(&mut self, text: &str) {
        self.progress.set_label(text);
    }
}

impl GridSurface for DomGrid {
    fn replace_links(&mut self, page: &DayPage) {
        self.container.set_inner_html("");
        for link in &page.links {
            if let Some(a) = self.build_link(link) {
                let _ = self.container.append_child(&a);
            }
        }
    }

    fn range_display(&mut self) -> Option<&mut dyn RangeDisplay> {
        self.range.as_mut().map(|r| r as &mut dyn RangeDisplay)
    }

    fn flash(&mut self) {
        let _ = self.container.class_list().add_1(GRID_FLASH_CLASS);
        let container = self.container.clone();
        Timeout::new(GRID_FLASH_MS, move || {
            let _ = container.class_list().remove_1(GRID_FLASH_CLASS);
        })
        .forget();
    }
}
