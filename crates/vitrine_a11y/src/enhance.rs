//! Markup enhancement pass
//!
//! Runs once at page-ready and patches common authoring gaps. Missing
//! structure is logged and skipped; this pass must never fail the page.

use tracing::warn;
use vitrine_dom::Document;

const FORM_FIELD_TAGS: &[&str] = &["input", "textarea", "select"];
const INTERACTIVE_TAGS: &[&str] = &["a", "button"];

/// Apply accessibility attributes across the document:
///
/// - form fields gain `aria-labelledby` pointing at the `label` whose
///   `for` names them
/// - interactive elements gain `tabindex="0"` so keyboard activation
///   reaches them
/// - `section` elements become `role="region"` landmarks labelled by
///   their heading
pub fn enhance(doc: &mut Document) {
    associate_labels(doc);
    enable_keyboard_activation(doc);
    tag_landmarks(doc);
}

fn associate_labels(doc: &mut Document) {
    for &tag in FORM_FIELD_TAGS {
        for field in doc.query_tag(tag) {
            let Some(field_id) = doc.get(field).and_then(|el| el.id().map(str::to_string)) else {
                continue;
            };
            let label = doc.query_tag("label").into_iter().find(|l| {
                doc.attr(*l, "for").is_some_and(|f| f == field_id)
            });
            match label {
                Some(label) => {
                    if let Some(label_id) = doc.get(label).and_then(|el| el.id().map(str::to_string))
                    {
                        doc.set_attr(field, "aria-labelledby", label_id);
                    }
                }
                None => warn!("no label found for field with id: {field_id}"),
            }
        }
    }
}

fn enable_keyboard_activation(doc: &mut Document) {
    let mut targets = Vec::new();
    for &tag in INTERACTIVE_TAGS {
        targets.extend(doc.query_tag(tag));
    }
    targets.extend(doc.query_attr("tabindex"));
    targets.sort();
    targets.dedup();
    for node in targets {
        doc.set_attr(node, "tabindex", "0");
    }
}

fn tag_landmarks(doc: &mut Document) {
    for section in doc.query_tag("section") {
        doc.set_attr(section, "role", "region");
        let heading = doc
            .children(section)
            .iter()
            .copied()
            .find(|c| doc.get(*c).is_some_and(|el| el.tag() == "h2"));
        if let Some(heading) = heading {
            if let Some(heading_id) = doc.get(heading).and_then(|el| el.id().map(str::to_string)) {
                doc.set_attr(section, "aria-labelledby", heading_id);
            }
        }
    }
}
