//! Core of the "Arabic in 40 Days" course site.
//!
//! Everything here is host-independent: the browser bindings implement the small
//! surface traits (`LanguageSurface`, `GridSurface`, `VideoDisplay`, ...) over the DOM,
//! and tests implement them over plain structs.

pub mod animation;
pub mod cards;
pub mod config;
pub mod curriculum;
pub mod error;
pub mod i18n;
pub mod language;
pub mod notice;
pub mod pagination;
pub mod phrases;
pub mod progress;
pub mod types;
pub mod video;

pub use config::SiteConfig;
pub use error::{Error, Result};
pub use language::{LanguagePreference, LanguageSurface, MemoryStore, PreferenceStore};
pub use pagination::{DayGrid, DayPage, DayPaginator, GridSurface, TopicBucket};
pub use types::{Day, LanguageCode, DAYS_PER_PAGE, MAX_PAGE, TOTAL_DAYS};
pub use video::{ResolveOutcome, VideoDisplay, VideoLoader, VideoMapping};
