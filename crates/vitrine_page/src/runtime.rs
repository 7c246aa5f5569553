//! Page runtime
//!
//! Owns the document and every controller, and routes page events to
//! them. Construction mirrors page-ready: accessibility enhancement,
//! bindings resolution, localization init (detect, switch, render),
//! then form attachment.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use tracing::{debug, warn};
use vitrine_a11y::{enhance, Announcer};
use vitrine_dom::{Document, Event, EventType};
use vitrine_forms::{SubmissionState, SubmitBackend};
use vitrine_i18n::{Catalog, Direction, JsonFilePrefs, Language, PreferenceStore};
use vitrine_notify::ToastStack;

use crate::bindings::PageBindings;
use crate::localization::LocalizationController;
use crate::newsletter::NewsletterController;
use crate::{scroll, translate};

/// The whole interactive page.
pub struct PageRuntime<P: PreferenceStore, B: SubmitBackend> {
    doc: Document,
    bindings: PageBindings,
    localization: LocalizationController<P>,
    newsletter: NewsletterController<B>,
    announcer: Announcer,
    toasts: ToastStack,
    alerts: Vec<String>,
}

impl<P: PreferenceStore, B: SubmitBackend> PageRuntime<P, B> {
    pub fn new(mut doc: Document, prefs: P, backend: B, browser_locale: &str) -> Self {
        enhance(&mut doc);
        let bindings = PageBindings::resolve(&doc);

        let mut announcer = Announcer::new();
        let mut localization = LocalizationController::new(prefs, browser_locale);
        localization.initialize(&mut doc, &bindings, &mut announcer);

        let mut newsletter = NewsletterController::new(backend);
        newsletter.attach(&doc, &bindings);

        Self {
            doc,
            bindings,
            localization,
            newsletter,
            announcer,
            toasts: ToastStack::new(),
            alerts: Vec::new(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    pub fn bindings(&self) -> &PageBindings {
        &self.bindings
    }

    pub fn language(&self) -> Language {
        self.localization.language()
    }

    pub fn direction(&self) -> Direction {
        self.localization.direction()
    }

    pub fn submission_state(&self) -> SubmissionState {
        self.newsletter.submission_state()
    }

    /// Alerts raised since the last drain, oldest first. A headless
    /// runtime cannot block; the host shell presents these modally.
    pub fn drain_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }

    pub fn active_toasts(&self) -> usize {
        self.toasts.active()
    }

    pub fn pending_announcements(&self) -> usize {
        self.announcer.pending_count()
    }

    /// Apply a translation catalog to the `data-translate` nodes.
    pub fn apply_catalog(&mut self, catalog: &Catalog) {
        translate::apply_catalog(&mut self.doc, catalog);
    }

    /// Load and apply the catalog for the active language. A missing or
    /// corrupt asset is logged and the page keeps its current copy.
    pub fn load_translations(&mut self, locales_root: &Path) {
        let language = self.language();
        match translate::apply_from_dir(&mut self.doc, locales_root, language) {
            Ok(count) => debug!("applied {count} translations"),
            Err(e) => warn!("error loading translations: {e}"),
        }
    }

    pub fn switch_language(&mut self, language: Language) {
        self.localization
            .switch_language(language, &mut self.doc, &self.bindings, &mut self.announcer);
    }

    pub fn toggle_language(&mut self) {
        self.localization
            .toggle_language(&mut self.doc, &self.bindings, &mut self.announcer);
    }

    /// Route one page event. Submit suppresses any default handling by
    /// construction: nothing here navigates.
    pub async fn dispatch(&mut self, event: Event) {
        match event.event_type {
            EventType::Click => {
                if self.bindings.language_toggle == Some(event.target) {
                    self.toggle_language();
                } else {
                    scroll::activate_anchor(&mut self.doc, event.target);
                }
            }
            EventType::Blur => {
                let language = self.language();
                if self.bindings.first_name == Some(event.target) {
                    self.newsletter
                        .validate_name_field(&mut self.doc, &self.bindings, language);
                } else if self.bindings.email == Some(event.target) {
                    self.newsletter
                        .validate_email_field(&mut self.doc, &self.bindings, language);
                }
            }
            EventType::Input => {
                let language = self.language();
                self.newsletter
                    .handle_input(&mut self.doc, &self.bindings, language, event.target);
            }
            EventType::Submit => {
                if self.bindings.newsletter_form == Some(event.target) {
                    let language = self.language();
                    self.newsletter
                        .handle_submit(
                            &mut self.doc,
                            &self.bindings,
                            language,
                            &mut self.toasts,
                            &mut self.alerts,
                        )
                        .await;
                }
            }
        }
    }

    /// Advance fire-and-forget timers: announcement removal and toast
    /// fade/removal.
    pub fn tick(&mut self, now: Instant) {
        self.announcer.sweep(&mut self.doc, now);
        self.toasts.sweep(&mut self.doc, now);
    }
}

impl<B: SubmitBackend> PageRuntime<JsonFilePrefs, B> {
    /// Construct with durable, file-backed preferences at `prefs_path`.
    pub fn with_file_prefs(
        doc: Document,
        prefs_path: impl Into<PathBuf>,
        backend: B,
        browser_locale: &str,
    ) -> anyhow::Result<Self> {
        let prefs = JsonFilePrefs::open(prefs_path).context("opening preference store")?;
        Ok(Self::new(doc, prefs, backend, browser_locale))
    }
}
