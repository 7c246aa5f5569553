//! Localization controller
//!
//! Owns the active language/direction pair and renders it onto the
//! document: `lang`/`dir` attributes, inline text and placeholder
//! variants, and the toggle label. Every switch persists the choice
//! and announces it to assistive technology.

use std::time::Instant;

use tracing::debug;
use vitrine_a11y::Announcer;
use vitrine_dom::Document;
use vitrine_i18n::{
    detect_language, Direction, Language, LanguagePreference, PreferenceStore,
    PREFERRED_DIRECTION, PREFERRED_LANGUAGE,
};

use crate::bindings::PageBindings;

fn variant_attr(language: Language) -> &'static str {
    match language {
        Language::En => "data-en",
        Language::Ar => "data-ar",
    }
}

fn placeholder_attr(language: Language) -> &'static str {
    match language {
        Language::En => "data-en-placeholder",
        Language::Ar => "data-ar-placeholder",
    }
}

pub(crate) fn language_changed(language: Language) -> &'static str {
    match language {
        Language::En => "Language changed to English",
        Language::Ar => "تم تغيير اللغة إلى العربية",
    }
}

/// Detects, switches, and renders the page language.
pub struct LocalizationController<P: PreferenceStore> {
    prefs: P,
    preference: LanguagePreference,
}

impl<P: PreferenceStore> LocalizationController<P> {
    /// Decide the initial language from the stored preference and the
    /// browser-reported locale. Pure; rendering happens in
    /// [`LocalizationController::initialize`].
    pub fn new(prefs: P, browser_locale: &str) -> Self {
        let language = detect_language(prefs.get(PREFERRED_LANGUAGE).as_deref(), browser_locale);
        Self {
            prefs,
            preference: LanguagePreference::of(language),
        }
    }

    pub fn language(&self) -> Language {
        self.preference.language()
    }

    pub fn direction(&self) -> Direction {
        self.preference.direction()
    }

    /// Render the detected language onto a freshly loaded page.
    pub fn initialize(
        &mut self,
        doc: &mut Document,
        bindings: &PageBindings,
        announcer: &mut Announcer,
    ) {
        self.switch_language(self.language(), doc, bindings, announcer);
    }

    /// Switch to `language`: derive direction, rewrite `lang`/`dir`,
    /// re-render inline variants and placeholders, update the toggle
    /// label, persist, and announce. Calling twice with the same
    /// language renders the same state again; nothing diverges.
    pub fn switch_language(
        &mut self,
        language: Language,
        doc: &mut Document,
        bindings: &PageBindings,
        announcer: &mut Announcer,
    ) {
        self.preference = LanguagePreference::of(language);
        let code = language.code();
        let dir = self.preference.direction().attr_value();
        debug!("switch_language: {code} ({dir})");

        doc.set_attr(bindings.html_root, "lang", code);
        doc.set_attr(bindings.html_root, "dir", dir);
        doc.set_attr(doc.body(), "dir", dir);

        render_text_variants(doc, language);
        render_placeholders(doc, language);

        if let Some(lang_text) = bindings.lang_text {
            doc.set_text(lang_text, language.toggled().native_name());
        }

        self.prefs.set(PREFERRED_LANGUAGE, code);
        self.prefs.set(PREFERRED_DIRECTION, dir);

        announcer.announce(doc, language_changed(language), Instant::now());
    }

    /// Switch to the other language. Applying twice restores the
    /// original preference.
    pub fn toggle_language(
        &mut self,
        doc: &mut Document,
        bindings: &PageBindings,
        announcer: &mut Announcer,
    ) {
        self.switch_language(self.language().toggled(), doc, bindings, announcer);
    }
}

/// Rewrite the text of every element carrying variants for both
/// languages. An element missing the active language's variant keeps
/// its prior text; this path never falls back to raw keys.
fn render_text_variants(doc: &mut Document, language: Language) {
    let attr = variant_attr(language);
    for node in doc.query_attr("data-en") {
        if doc.attr(node, "data-ar").is_none() {
            continue;
        }
        if let Some(text) = doc.attr(node, attr).map(str::to_string) {
            doc.set_text(node, text);
        }
    }
}

fn render_placeholders(doc: &mut Document, language: Language) {
    let attr = placeholder_attr(language);
    for node in doc.query_attr(attr) {
        if let Some(value) = doc.attr(node, attr).map(str::to_string) {
            doc.set_placeholder(node, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use vitrine_dom::element;
    use vitrine_i18n::MemoryPrefs;

    fn page() -> (Document, PageBindings) {
        let mut doc = Document::new();
        doc.set_id(doc.root(), "html-root");
        let toggle = doc.append(doc.body(), element("button").id("language-toggle"));
        doc.append(toggle, element("span").id("lang-text").text("العربية"));
        doc.append(
            doc.body(),
            element("h1")
                .attr("data-en", "Welcome")
                .attr("data-ar", "أهلاً وسهلاً")
                .text("Welcome"),
        );
        doc.append(
            doc.body(),
            element("input")
                .attr("data-en-placeholder", "Your name")
                .attr("data-ar-placeholder", "اسمك")
                .placeholder("Your name"),
        );
        let bindings = PageBindings::resolve(&doc);
        (doc, bindings)
    }

    #[test]
    fn test_switch_renders_language_and_direction() {
        let (mut doc, bindings) = page();
        let mut announcer = Announcer::new();
        let mut controller = LocalizationController::new(MemoryPrefs::new(), "en-US");

        controller.switch_language(Language::Ar, &mut doc, &bindings, &mut announcer);

        assert_eq!(doc.attr(doc.root(), "lang"), Some("ar"));
        assert_eq!(doc.attr(doc.root(), "dir"), Some("rtl"));
        assert_eq!(doc.attr(doc.body(), "dir"), Some("rtl"));
        let heading = doc.query_attr("data-en")[0];
        assert_eq!(doc.text(heading), "أهلاً وسهلاً");
        let input = doc.query_attr("data-en-placeholder")[0];
        assert_eq!(doc.placeholder(input), Some("اسمك"));
        let lang_text = bindings.lang_text.unwrap();
        assert_eq!(doc.text(lang_text), "English");
    }

    #[test]
    fn test_switch_is_idempotent() {
        let (mut doc, bindings) = page();
        let mut announcer = Announcer::new();
        let mut controller = LocalizationController::new(MemoryPrefs::new(), "en-US");

        controller.switch_language(Language::Ar, &mut doc, &bindings, &mut announcer);
        let lang = doc.attr(doc.root(), "lang").map(str::to_string);
        let dir = doc.attr(doc.root(), "dir").map(str::to_string);
        let heading = doc.query_attr("data-en")[0];
        let text = doc.text(heading).to_string();

        controller.switch_language(Language::Ar, &mut doc, &bindings, &mut announcer);
        assert_eq!(doc.attr(doc.root(), "lang").map(str::to_string), lang);
        assert_eq!(doc.attr(doc.root(), "dir").map(str::to_string), dir);
        assert_eq!(doc.text(heading), text);
    }

    #[test]
    fn test_toggle_twice_restores_preference() {
        let (mut doc, bindings) = page();
        let mut announcer = Announcer::new();
        let mut controller = LocalizationController::new(MemoryPrefs::new(), "en-US");
        assert_eq!(controller.language(), Language::En);

        controller.toggle_language(&mut doc, &bindings, &mut announcer);
        assert_eq!(controller.language(), Language::Ar);
        assert_eq!(controller.direction(), Direction::Rtl);

        controller.toggle_language(&mut doc, &bindings, &mut announcer);
        assert_eq!(controller.language(), Language::En);
        assert_eq!(controller.direction(), Direction::Ltr);
    }

    #[test]
    fn test_switch_persists_preference() {
        let (mut doc, bindings) = page();
        let mut announcer = Announcer::new();
        let mut prefs = MemoryPrefs::new();
        // Seed so the reread below proves an overwrite, not a default.
        prefs.set(PREFERRED_LANGUAGE, "en");
        let mut controller = LocalizationController::new(prefs, "en-US");

        controller.switch_language(Language::Ar, &mut doc, &bindings, &mut announcer);

        assert_eq!(controller.prefs.get(PREFERRED_LANGUAGE).as_deref(), Some("ar"));
        assert_eq!(controller.prefs.get(PREFERRED_DIRECTION).as_deref(), Some("rtl"));
    }

    #[test]
    fn test_missing_variant_keeps_prior_text() {
        let mut doc = Document::new();
        doc.set_id(doc.root(), "html-root");
        // data-en only: not a translatable pair, text stays put.
        let solo = doc.append(
            doc.body(),
            element("p").attr("data-en", "English only").text("original"),
        );
        let bindings = PageBindings::resolve(&doc);
        let mut announcer = Announcer::new();
        let mut controller = LocalizationController::new(MemoryPrefs::new(), "en-US");

        controller.switch_language(Language::Ar, &mut doc, &bindings, &mut announcer);
        assert_eq!(doc.text(solo), "original");
    }

    #[test]
    fn test_stored_preference_beats_browser_locale() {
        let mut prefs = MemoryPrefs::new();
        prefs.set(PREFERRED_LANGUAGE, "ar");
        let controller = LocalizationController::new(prefs, "en-US");
        assert_eq!(controller.language(), Language::Ar);
    }
}
