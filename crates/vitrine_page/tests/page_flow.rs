//! End-to-end page behavior: localization, newsletter signup, and
//! navigation driven through the event-dispatch surface.

use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;
use vitrine_dom::{element, Document, Event};
use vitrine_forms::{
    DeliveryError, SimulatedBackend, SubmissionState, SubmitBackend, Subscription,
};
use vitrine_i18n::{Language, MemoryPrefs, PreferenceStore};
use vitrine_page::PageRuntime;

fn trace_init() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

struct FailingBackend;

impl SubmitBackend for FailingBackend {
    async fn deliver(&self, _subscription: &Subscription) -> Result<(), DeliveryError> {
        Err(DeliveryError::Network("connection reset".to_string()))
    }
}

/// A representative marketing page: nav anchors, translatable copy,
/// and the newsletter form.
fn marketing_page() -> Document {
    let mut doc = Document::new();
    doc.set_id(doc.root(), "html-root");
    doc.set_attr(doc.root(), "lang", "en");
    doc.set_attr(doc.root(), "dir", "ltr");

    let nav = doc.append(doc.body(), element("nav"));
    doc.append(nav, element("a").attr("href", "#features").text("Features"));
    let toggle = doc.append(nav, element("button").id("language-toggle"));
    doc.append(toggle, element("span").id("lang-text").text("العربية"));

    doc.append(
        doc.body(),
        element("h1")
            .attr("data-en", "Technology that moves the world")
            .attr("data-ar", "تقنية تحرك العالم")
            .text("Technology that moves the world"),
    );

    let features = doc.append(
        doc.body(),
        element("section").id("features").offset_top(640.0),
    );
    doc.append(features, element("h2").id("features-title").text("Features"));
    doc.append(
        features,
        element("p").attr("data-translate", "features.lead").text("Fast."),
    );

    let form = doc.append(doc.body(), element("form").id("newsletter-form"));
    let name_group = doc.append(form, element("div"));
    doc.append(
        name_group,
        element("label").id("firstName-label").attr("for", "firstName"),
    );
    doc.append(
        name_group,
        element("input")
            .id("firstName")
            .attr("data-en-placeholder", "First name")
            .attr("data-ar-placeholder", "الاسم الأول")
            .placeholder("First name"),
    );
    let email_group = doc.append(form, element("div"));
    doc.append(
        email_group,
        element("label").id("email-label").attr("for", "email"),
    );
    doc.append(email_group, element("input").id("email"));
    doc.append(
        form,
        element("input").id("updates-consent").attr("type", "checkbox"),
    );
    doc.append(
        form,
        element("button").attr("type", "submit").text("Subscribe"),
    );

    doc
}

fn runtime_with(
    browser_locale: &str,
) -> PageRuntime<MemoryPrefs, SimulatedBackend> {
    PageRuntime::new(
        marketing_page(),
        MemoryPrefs::new(),
        SimulatedBackend::new(),
        browser_locale,
    )
}

fn fill_form<P: PreferenceStore, B: SubmitBackend>(
    runtime: &mut PageRuntime<P, B>,
    name: &str,
    email: &str,
    consent: bool,
) {
    let first_name = runtime.bindings().first_name.unwrap();
    let email_input = runtime.bindings().email.unwrap();
    let consent_box = runtime.bindings().consent.unwrap();
    let doc = runtime.document_mut();
    doc.set_value(first_name, name);
    doc.set_value(email_input, email);
    doc.set_checked(consent_box, consent);
}

#[tokio::test(start_paused = true)]
async fn arabic_browser_locale_renders_rtl_page() {
    let runtime = runtime_with("ar-SA");
    let doc = runtime.document();

    assert_eq!(runtime.language(), Language::Ar);
    assert_eq!(doc.attr(doc.root(), "lang"), Some("ar"));
    assert_eq!(doc.attr(doc.root(), "dir"), Some("rtl"));
    assert_eq!(doc.attr(doc.body(), "dir"), Some("rtl"));

    let heading = doc.query_attr("data-en")[0];
    assert_eq!(doc.text(heading), "تقنية تحرك العالم");
    let name_input = runtime.bindings().first_name.unwrap();
    assert_eq!(doc.placeholder(name_input), Some("الاسم الأول"));
    let lang_text = runtime.bindings().lang_text.unwrap();
    assert_eq!(doc.text(lang_text), "English");
}

#[tokio::test(start_paused = true)]
async fn toggle_round_trips_and_announces() {
    let mut runtime = runtime_with("en-US");
    let toggle = runtime.bindings().language_toggle.unwrap();

    runtime.dispatch(Event::click(toggle)).await;
    assert_eq!(runtime.language(), Language::Ar);
    assert!(runtime.pending_announcements() > 0);

    runtime.dispatch(Event::click(toggle)).await;
    assert_eq!(runtime.language(), Language::En);
    let doc = runtime.document();
    assert_eq!(doc.attr(doc.root(), "dir"), Some("ltr"));
    let lang_text = runtime.bindings().lang_text.unwrap();
    assert_eq!(doc.text(lang_text), "العربية");

    // Announcement nodes drain once their second has passed.
    runtime.tick(Instant::now() + Duration::from_secs(2));
    assert_eq!(runtime.pending_announcements(), 0);
}

#[tokio::test(start_paused = true)]
async fn language_preference_survives_reload() {
    let dir = tempfile::tempdir().unwrap();
    let prefs_path = dir.path().join("prefs.json");

    let mut runtime = PageRuntime::with_file_prefs(
        marketing_page(),
        &prefs_path,
        SimulatedBackend::new(),
        "en-US",
    )
    .unwrap();
    let toggle = runtime.bindings().language_toggle.unwrap();
    runtime.dispatch(Event::click(toggle)).await;
    assert_eq!(runtime.language(), Language::Ar);
    drop(runtime);

    // A fresh page load with the same store comes back Arabic even
    // though the browser still reports English.
    let reloaded = PageRuntime::with_file_prefs(
        marketing_page(),
        &prefs_path,
        SimulatedBackend::new(),
        "en-US",
    )
    .unwrap();
    assert_eq!(reloaded.language(), Language::Ar);
    let doc = reloaded.document();
    assert_eq!(doc.attr(doc.root(), "dir"), Some("rtl"));
}

#[tokio::test(start_paused = true)]
async fn newsletter_happy_path() {
    trace_init();
    let mut runtime = runtime_with("en-US");
    fill_form(&mut runtime, "Jo", "jo@example.com", true);

    let form = runtime.bindings().newsletter_form.unwrap();
    runtime.dispatch(Event::submit(form)).await;

    assert_eq!(runtime.submission_state(), SubmissionState::Succeeded);
    assert_eq!(runtime.active_toasts(), 1);
    assert!(runtime.drain_alerts().is_empty());

    let button = runtime.bindings().submit_button.unwrap();
    let doc = runtime.document();
    assert!(!doc.is_disabled(button));
    assert_eq!(doc.text(button), "Subscribe");
    assert_eq!(doc.value(runtime.bindings().first_name.unwrap()), "");

    // The success toast fades and leaves on its own schedule.
    runtime.tick(Instant::now() + Duration::from_secs(6));
    assert_eq!(runtime.active_toasts(), 0);
}

#[tokio::test(start_paused = true)]
async fn consent_gate_fires_even_with_invalid_fields() {
    let mut runtime = runtime_with("en-US");
    fill_form(&mut runtime, "A1", "nope", false);

    let form = runtime.bindings().newsletter_form.unwrap();
    runtime.dispatch(Event::submit(form)).await;

    let alerts = runtime.drain_alerts();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0], "Please agree to receive updates.");
    assert_eq!(runtime.document().focused(), runtime.bindings().consent);
    assert_eq!(runtime.submission_state(), SubmissionState::Idle);
    assert_eq!(runtime.active_toasts(), 0);
}

#[tokio::test(start_paused = true)]
async fn failed_delivery_keeps_values_for_retry() {
    trace_init();
    let mut runtime = PageRuntime::new(
        marketing_page(),
        MemoryPrefs::new(),
        FailingBackend,
        "en-US",
    );
    fill_form(&mut runtime, "Jo", "jo@example.com", true);

    let form = runtime.bindings().newsletter_form.unwrap();
    runtime.dispatch(Event::submit(form)).await;

    assert_eq!(runtime.submission_state(), SubmissionState::Failed);
    assert_eq!(runtime.active_toasts(), 1);
    let doc = runtime.document();
    assert_eq!(doc.value(runtime.bindings().first_name.unwrap()), "Jo");
    assert_eq!(doc.value(runtime.bindings().email.unwrap()), "jo@example.com");
    assert!(doc.is_checked(runtime.bindings().consent.unwrap()));
    let button = runtime.bindings().submit_button.unwrap();
    assert!(!doc.is_disabled(button));
    assert_eq!(doc.text(button), "Subscribe");
}

#[tokio::test(start_paused = true)]
async fn blur_renders_localized_feedback() {
    let mut runtime = runtime_with("ar-SA");
    let name_input = runtime.bindings().first_name.unwrap();
    runtime.document_mut().set_value(name_input, "A1");

    runtime.dispatch(Event::blur(name_input)).await;

    let doc = runtime.document();
    assert!(doc.has_class(name_input, "is-invalid"));
    let parent = doc.parent(name_input).unwrap();
    let feedback = doc
        .children(parent)
        .iter()
        .copied()
        .find(|n| doc.has_class(*n, "invalid-feedback"))
        .unwrap();
    assert!(!doc.is_hidden(feedback));
    assert_eq!(doc.text(feedback), "يرجى إدخال اسم صحيح (حرفان على الأقل)");
}

#[tokio::test(start_paused = true)]
async fn anchor_click_scrolls_under_the_fixed_header() {
    let mut runtime = runtime_with("en-US");
    let anchor = runtime
        .document()
        .query_attr("href")
        .into_iter()
        .next()
        .unwrap();

    runtime.dispatch(Event::click(anchor)).await;
    assert_eq!(runtime.document().scroll_y(), 560.0);
}

#[tokio::test(start_paused = true)]
async fn catalog_application_falls_back_to_raw_keys() {
    let dir = tempfile::tempdir().unwrap();
    let en = dir.path().join("en");
    std::fs::create_dir_all(&en).unwrap();
    std::fs::write(
        en.join("translations.json"),
        r#"{"features.lead": "Fast, everywhere."}"#,
    )
    .unwrap();

    let mut runtime = runtime_with("en-US");
    runtime.load_translations(dir.path());
    let lead = runtime.document().query_attr("data-translate")[0];
    assert_eq!(runtime.document().text(lead), "Fast, everywhere.");

    // A catalog without the key shows the key itself.
    runtime.apply_catalog(&vitrine_i18n::Catalog::new());
    assert_eq!(runtime.document().text(lead), "features.lead");
}

#[tokio::test(start_paused = true)]
async fn missing_translation_assets_leave_page_intact() {
    let dir = tempfile::tempdir().unwrap();
    let mut runtime = runtime_with("en-US");

    runtime.load_translations(dir.path());

    let lead = runtime.document().query_attr("data-translate")[0];
    assert_eq!(runtime.document().text(lead), "Fast.");
}

#[tokio::test(start_paused = true)]
async fn construction_applies_accessibility_pass() {
    let runtime = runtime_with("en-US");
    let doc = runtime.document();

    let name_input = runtime.bindings().first_name.unwrap();
    assert_eq!(doc.attr(name_input, "aria-labelledby"), Some("firstName-label"));

    let features = doc.get_by_id("features").unwrap();
    assert_eq!(doc.attr(features, "role"), Some("region"));
    assert_eq!(doc.attr(features, "aria-labelledby"), Some("features-title"));

    let toggle = runtime.bindings().language_toggle.unwrap();
    assert_eq!(doc.attr(toggle, "tabindex"), Some("0"));
}
