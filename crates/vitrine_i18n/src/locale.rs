//! Browser-locale normalization and initial language detection

use crate::language::Language;

/// Normalize locale identifiers to a canonical-ish form for matching.
///
/// - Converts `_` to `-` (some platforms report `en_US`).
/// - Trims whitespace and lowercases.
pub fn normalize_locale(s: &str) -> String {
    s.trim().replace('_', "-").to_ascii_lowercase()
}

/// Languages whose primary subtag selects the Arabic-family page.
const RTL_FAMILY_SUBTAGS: &[&str] = &["ar", "he", "fa"];

/// Decide the initial language from the stored preference and the
/// browser-reported locale tag.
///
/// The stored preference wins when it parses. Otherwise the locale
/// selects Arabic when its primary subtag is in the Arabic/Hebrew/
/// Persian family, or when any subtag is exactly `ar` (covers tags
/// like `en-ar` reported by misconfigured clients). English is the
/// default. Pure function of its two inputs; no I/O.
pub fn detect_language(stored: Option<&str>, browser_locale: &str) -> Language {
    if let Some(code) = stored {
        if let Some(lang) = Language::from_code(code) {
            return lang;
        }
    }

    let locale = normalize_locale(browser_locale);
    let mut subtags = locale.split('-');
    let primary = subtags.next().unwrap_or("");
    if RTL_FAMILY_SUBTAGS.contains(&primary) || subtags.any(|s| s == "ar") {
        Language::Ar
    } else {
        Language::En
    }
}
