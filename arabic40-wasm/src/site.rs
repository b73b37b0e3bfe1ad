//! Page-wide state shared by every event handler.

use crate::dom;
use crate::errors::SiteWasmError;
use crate::grid::{DomGrid, DomProgress, NEXT_ID, PREV_ID};
use crate::language::{document_language, DomLanguage};
use crate::storage::LocalStorage;
use crate::video::{fetch_mapping, DomVideo};
use arabic40_core::i18n::I18n;
use arabic40_core::notice::{ErrorBanner, ERROR_BANNER_CLASSES, ERROR_BANNER_PARENT};
use arabic40_core::progress::{update_progress, Progress};
use arabic40_core::types::{DAY_PARAM, LANG_PARAM};
use arabic40_core::{Day, DayGrid, LanguageCode, LanguagePreference, ResolveOutcome, SiteConfig, VideoLoader};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, error, info, warn};
use web_sys::{Document, Element, HtmlElement};

/// `<meta name="arabic40-config" content="{...}">` overrides the built-in defaults.
const CONFIG_META_SELECTOR: &str = r#"meta[name="arabic40-config"]"#;

pub struct Site {
    doc: Document,
    config: SiteConfig,
    i18n: I18n,
    language: RefCell<LanguagePreference<LocalStorage>>,
    language_dom: RefCell<DomLanguage>,
    grid: RefCell<DayGrid>,
    grid_dom: RefCell<Option<DomGrid>>,
    progress: RefCell<DomProgress>,
    video: RefCell<VideoLoader>,
    video_dom: RefCell<Option<DomVideo>>,
}

/// Site configuration for `doc`: defaults, then the meta override if it parses.
pub fn page_config(doc: &Document) -> SiteConfig {
    let Some(content) = dom::query::<Element>(doc, CONFIG_META_SELECTOR).and_then(|m| m.get_attribute("content")) else {
        return SiteConfig::default();
    };
    match SiteConfig::from_json_str(&content) {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!(error = %e, "ignoring invalid arabic40-config meta");
            SiteConfig::default()
        }
    }
}

impl Site {
    pub fn new(doc: Document, config: SiteConfig) -> Result<Self, SiteWasmError> {
        let i18n = I18n::builtin()?;
        let language = LanguagePreference::new(LocalStorage::open(), &config);
        let grid = DayGrid::new(config.day_page.clone(), language.link_language());
        Ok(Self {
            language_dom: RefCell::new(DomLanguage::new(&doc)),
            grid_dom: RefCell::new(DomGrid::find(&doc)),
            progress: RefCell::new(DomProgress::new(&doc)),
            video: RefCell::new(VideoLoader::new(config.embed_base.clone())),
            video_dom: RefCell::new(DomVideo::find(&doc)),
            language: RefCell::new(language),
            grid: RefCell::new(grid),
            i18n,
            config,
            doc,
        })
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// URL parameter, then stored preference, then the default.
    pub fn init_language(&self) -> LanguageCode {
        let url_lang = dom::query_param(LANG_PARAM);
        let code = self.language.borrow_mut().initialize(url_lang.as_deref(), &mut *self.language_dom.borrow_mut());
        self.grid.borrow_mut().set_link_language(self.language.borrow().link_language());
        code
    }

    pub fn set_language(&self, code: &LanguageCode) {
        self.language.borrow_mut().apply(code, &mut *self.language_dom.borrow_mut());
    }

    /// Code written into day links; rewrites the links already rendered.
    pub fn set_link_language(&self, code: LanguageCode) {
        if let Some(grid_dom) = self.grid_dom.borrow().as_ref() {
            grid_dom.rewrite_links(&self.config.day_page, &code);
        }
        self.grid.borrow_mut().set_link_language(code);
    }

    pub fn render_grid(&self) {
        if let Some(grid_dom) = self.grid_dom.borrow_mut().as_mut() {
            let page = self.grid.borrow().render(grid_dom);
            debug!(start = page.start, end = page.end, "day grid rendered");
        }
    }

    /// Prev/next buttons; skipped when either is absent.
    pub fn init_pagination(self: &Rc<Self>) {
        let (Some(prev), Some(next)) =
            (dom::by_id::<HtmlElement>(&self.doc, PREV_ID), dom::by_id::<HtmlElement>(&self.doc, NEXT_ID))
        else {
            debug!("no pagination controls");
            return;
        };
        for (button, forward) in [(prev, false), (next, true)] {
            let site = self.clone();
            dom::on(&button, "click", move |_| site.step_page(forward));
        }
    }

    fn step_page(&self, forward: bool) {
        let mut grid_dom = self.grid_dom.borrow_mut();
        let Some(surface) = grid_dom.as_mut() else { return };
        let mut grid = self.grid.borrow_mut();
        let moved = if forward { grid.next(surface) } else { grid.prev(surface) };
        if moved {
            debug!(page = grid.paginator().cursor(), "page changed");
        }
    }

    /// `.language-btn` clicks apply the toggle's code and rewrite `?lang=`.
    pub fn init_toggles(self: &Rc<Self>) {
        let toggles = self.language_dom.borrow().toggles().to_vec();
        for toggle in toggles {
            let site = self.clone();
            let el = toggle.clone();
            dom::on(&toggle, "click", move |_| {
                let Some(code) = el.get_attribute("data-lang") else {
                    debug!("language toggle without data-lang");
                    return;
                };
                site.language
                    .borrow_mut()
                    .select_toggle(&LanguageCode::new(code), &mut *site.language_dom.borrow_mut());
            });
        }
    }

    /// Fetch the mapping in the background, then show `?day=` and any queued requests.
    pub fn start_video_loader(self: &Rc<Self>) {
        if self.video_dom.borrow().is_none() {
            return;
        }
        self.video.borrow_mut().begin();
        let site = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let mapping = fetch_mapping(&site.config.videos_url)
                .await
                .map_err(|e| arabic40_core::Error::video_load(e.to_string()));
            let initial = Day::parse_param(dom::query_param(DAY_PARAM).as_deref());
            let mut video_dom = site.video_dom.borrow_mut();
            let Some(display) = video_dom.as_mut() else { return };
            let outcomes = site.video.borrow_mut().complete(mapping, initial, display);
            info!(resolved = outcomes.len(), "video mapping processed");
        });
    }

    /// Show `day`'s video; queued until the mapping arrives.
    pub fn load_video(&self, day: Day) -> Option<ResolveOutcome> {
        let mut video_dom = self.video_dom.borrow_mut();
        let Some(display) = video_dom.as_mut() else {
            warn!(%day, "no video player on this page");
            return None;
        };
        Some(self.video.borrow_mut().resolve(day, display))
    }

    pub fn update_progress(&self, day: i32) -> Progress {
        update_progress(day, &mut *self.progress.borrow_mut())
    }

    /// Log `message` and prepend a localized banner to `<main>`.
    pub fn handle_error(&self, message: &str) -> Result<(), SiteWasmError> {
        error!(%message, "site error");
        let banner = ErrorBanner::for_language(&document_language(&self.doc), &self.i18n);
        let Some(main) = dom::query::<Element>(&self.doc, ERROR_BANNER_PARENT) else {
            return Err(SiteWasmError::MissingElement(ERROR_BANNER_PARENT.into()));
        };
        let container = self.doc.create_element("div").map_err(|_| SiteWasmError::DomError("createElement".into()))?;
        container.set_class_name(ERROR_BANNER_CLASSES);
        container.set_inner_html(&banner.inner_html());
        main.insert_before(&container, main.first_child().as_ref())
            .map_err(|_| SiteWasmError::DomError("insertBefore".into()))?;
        Ok(())
    }
}
