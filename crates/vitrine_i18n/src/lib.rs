//! Vitrine internationalization (i18n)
//!
//! Goals:
//! - A typed [`Language`] / [`Direction`] pair whose layout direction is
//!   derived from the language, never stored independently
//! - Browser-locale detection with a stored-preference override
//! - Flat JSON translation catalogs loaded from per-language assets
//! - A small key-value [`PreferenceStore`] that survives reloads

mod catalog;
mod error;
mod language;
mod locale;
mod prefs;

pub use catalog::Catalog;
pub use error::{CatalogError, PrefsError};
pub use language::{Direction, Language, LanguagePreference};
pub use locale::{detect_language, normalize_locale};
pub use prefs::{
    JsonFilePrefs, MemoryPrefs, PreferenceStore, PREFERRED_DIRECTION, PREFERRED_LANGUAGE,
};
