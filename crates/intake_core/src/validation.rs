//! Client-side rules for the intake form. Every field is checked on every
//! call so the form can show all problems at once.

use std::sync::LazyLock;

use regex::Regex;
use shared::domain::{Field, FieldErrors, FormFields};

pub const NAME_REQUIRED: &str = "Please enter your name.";
pub const PHONE_REQUIRED: &str = "Please enter your phone number.";
pub const PHONE_INVALID: &str = "Please enter a valid 10-digit Indian mobile number.";
pub const MESSAGE_REQUIRED: &str = "Please share what you are experiencing.";
pub const MESSAGE_TOO_SHORT: &str = "Please provide a bit more detail (at least 10 characters).";

pub const MIN_MESSAGE_LEN: usize = 10;

static INDIAN_MOBILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[6-9][0-9]{9}$").expect("static mobile number pattern"));

pub fn validate(fields: &FormFields) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for field in Field::ALL {
        if let Some(message) = check_field(field, fields.get(field)) {
            errors.insert(field, message);
        }
    }
    errors
}

pub fn check_field(field: Field, value: &str) -> Option<&'static str> {
    match field {
        Field::Name => check_name(value),
        Field::Phone => check_phone(value),
        Field::Message => check_message(value),
    }
}

/// Whitespace as browsers trim it: Unicode `White_Space` plus the byte order
/// mark, without NEL (U+0085).
fn is_form_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

pub fn trim_form_value(value: &str) -> &str {
    value.trim_matches(is_form_whitespace)
}

/// Length in UTF-16 code units, the unit browser form limits count in.
pub fn form_value_len(value: &str) -> usize {
    value.encode_utf16().count()
}

fn check_name(value: &str) -> Option<&'static str> {
    trim_form_value(value).is_empty().then_some(NAME_REQUIRED)
}

fn check_phone(value: &str) -> Option<&'static str> {
    if trim_form_value(value).is_empty() {
        return Some(PHONE_REQUIRED);
    }
    if !INDIAN_MOBILE.is_match(&strip_phone_separators(value)) {
        return Some(PHONE_INVALID);
    }
    None
}

fn check_message(value: &str) -> Option<&'static str> {
    let trimmed = trim_form_value(value);
    if trimmed.is_empty() {
        Some(MESSAGE_REQUIRED)
    } else if form_value_len(trimmed) < MIN_MESSAGE_LEN {
        Some(MESSAGE_TOO_SHORT)
    } else {
        None
    }
}

/// Drops hyphens and spaces only; anything else stays and fails the pattern.
pub fn strip_phone_separators(value: &str) -> String {
    value.chars().filter(|c| *c != '-' && *c != ' ').collect()
}

#[cfg(test)]
#[path = "tests/validation_tests.rs"]
mod tests;
