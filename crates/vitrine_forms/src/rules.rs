//! Validation rules
//!
//! Two fixed rules cover the newsletter form. Both are UX hints: the
//! email check asserts shape (`local@domain.tld`), not deliverability.

use std::sync::OnceLock;

use regex::Regex;
use vitrine_i18n::Language;

use crate::messages;

/// Minimal "local-part@domain.tld" shape: one `@`, a dot after it,
/// no whitespace anywhere.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

fn email_regex() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

/// Outcome of validating one field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldVerdict {
    pub is_valid: bool,
    /// The language-specific message to show when invalid.
    pub message: String,
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c.is_whitespace() || ('\u{0600}'..='\u{06FF}').contains(&c)
}

/// Valid iff the trimmed value has at least two characters, all of them
/// ASCII letters, whitespace, or within the Arabic Unicode block.
pub fn validate_name(value: &str, language: Language) -> FieldVerdict {
    let trimmed = value.trim();
    let is_valid = trimmed.chars().count() >= 2 && trimmed.chars().all(is_name_char);
    FieldVerdict {
        is_valid,
        message: messages::name_invalid(language).to_string(),
    }
}

/// Valid iff the trimmed value matches the minimal email shape.
pub fn validate_email(value: &str, language: Language) -> FieldVerdict {
    let trimmed = value.trim();
    let is_valid = email_regex().is_match(trimmed);
    FieldVerdict {
        is_valid,
        message: messages::email_invalid(language).to_string(),
    }
}
