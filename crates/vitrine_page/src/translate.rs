//! Catalog-driven translation
//!
//! The second localization path: page body copy keyed by
//! `data-translate` attributes, filled from a per-language JSON
//! catalog. Unlike the inline-variant path, a missing key renders the
//! raw key so the gap is visible instead of silently stale.

use std::path::Path;

use vitrine_dom::Document;
use vitrine_i18n::{Catalog, CatalogError, Language};

/// Substitute the text of every node carrying a `data-translate` key.
pub fn apply_catalog(doc: &mut Document, catalog: &Catalog) {
    for node in doc.query_attr("data-translate") {
        let Some(key) = doc.attr(node, "data-translate").map(str::to_string) else {
            continue;
        };
        let text = catalog.get_or_key(&key).to_string();
        doc.set_text(node, text);
    }
}

/// Load the catalog for `language` from `locales_root` and apply it.
/// Returns how many entries the catalog carried.
pub fn apply_from_dir(
    doc: &mut Document,
    locales_root: &Path,
    language: Language,
) -> Result<usize, CatalogError> {
    let catalog = Catalog::load_dir(locales_root, language)?;
    apply_catalog(doc, &catalog);
    Ok(catalog.len())
}
