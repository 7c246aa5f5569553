//! Vitrine page runtime
//!
//! Wires the document model, localization, accessibility, forms, and
//! notifications into one page:
//!
//! - [`PageBindings`]: the well-known elements, resolved once
//! - [`LocalizationController`]: detects, switches, and renders the
//!   active language and layout direction
//! - [`NewsletterController`]: field validation, the consent gate, and
//!   the asynchronous signup submission
//! - [`PageRuntime`]: owns all of the above and routes page events
//!
//! The host shell builds a [`vitrine_dom::Document`], constructs a
//! runtime, and forwards events; everything else is internal.

mod bindings;
mod localization;
mod newsletter;
mod runtime;
mod scroll;
mod translate;

pub use bindings::PageBindings;
pub use localization::LocalizationController;
pub use newsletter::NewsletterController;
pub use runtime::PageRuntime;
pub use scroll::{scroll_to_href, HEADER_OFFSET};
pub use translate::apply_catalog;
