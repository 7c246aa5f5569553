//! Bound page elements
//!
//! The runtime never hunts for elements mid-operation: everything it
//! touches is resolved once, here. A missing element leaves its slot
//! `None` and the behavior that needs it becomes a silent no-op.

use vitrine_dom::{Document, NodeId};

/// The well-known elements of the marketing page.
#[derive(Clone, Copy, Debug)]
pub struct PageBindings {
    /// The document root carrying `lang`/`dir`. Falls back to the tree
    /// root when no element claims the id.
    pub html_root: NodeId,
    pub language_toggle: Option<NodeId>,
    /// The label inside the toggle naming the *other* language.
    pub lang_text: Option<NodeId>,
    pub newsletter_form: Option<NodeId>,
    pub first_name: Option<NodeId>,
    pub email: Option<NodeId>,
    pub consent: Option<NodeId>,
    /// The form's submit button, found inside the form subtree.
    pub submit_button: Option<NodeId>,
}

impl PageBindings {
    pub fn resolve(doc: &Document) -> Self {
        let newsletter_form = doc.get_by_id("newsletter-form");
        let submit_button = newsletter_form.and_then(|form| {
            doc.descendants(form).into_iter().find(|n| {
                doc.get(*n)
                    .is_some_and(|el| el.tag() == "button" && el.attr("type") == Some("submit"))
            })
        });
        Self {
            html_root: doc.get_by_id("html-root").unwrap_or_else(|| doc.root()),
            language_toggle: doc.get_by_id("language-toggle"),
            lang_text: doc.get_by_id("lang-text"),
            newsletter_form,
            first_name: doc.get_by_id("firstName"),
            email: doc.get_by_id("email"),
            consent: doc.get_by_id("updates-consent"),
            submit_button,
        }
    }
}
