use super::*;

fn fields(name: &str, phone: &str, message: &str) -> FormFields {
    FormFields {
        name: name.to_string(),
        phone: phone.to_string(),
        message: message.to_string(),
    }
}

fn valid_fields() -> FormFields {
    fields("Asha", "9123456789", "I've been feeling anxious lately.")
}

#[test]
fn accepts_complete_form() {
    assert!(validate(&valid_fields()).is_empty());
}

#[test]
fn empty_form_reports_every_field() {
    let errors = validate(&FormFields::default());
    assert_eq!(errors.len(), 3);
    assert_eq!(errors.get(Field::Name), Some(NAME_REQUIRED));
    assert_eq!(errors.get(Field::Phone), Some(PHONE_REQUIRED));
    assert_eq!(errors.get(Field::Message), Some(MESSAGE_REQUIRED));
}

#[test]
fn whitespace_only_counts_as_empty() {
    let errors = validate(&fields("   ", " \t ", "\n  "));
    assert_eq!(errors.get(Field::Name), Some(NAME_REQUIRED));
    assert_eq!(errors.get(Field::Phone), Some(PHONE_REQUIRED));
    assert_eq!(errors.get(Field::Message), Some(MESSAGE_REQUIRED));
}

#[test]
fn phone_numbers_follow_indian_mobile_rules() {
    assert_eq!(check_field(Field::Phone, "9876543210"), None);
    assert_eq!(check_field(Field::Phone, "5876543210"), Some(PHONE_INVALID));
    assert_eq!(check_field(Field::Phone, "987-654-3210"), None);
    assert_eq!(check_field(Field::Phone, "98765 43210"), None);
    assert_eq!(check_field(Field::Phone, "98765432"), Some(PHONE_INVALID));
    assert_eq!(check_field(Field::Phone, "98765432101"), Some(PHONE_INVALID));
    assert_eq!(check_field(Field::Phone, "1234567890"), Some(PHONE_INVALID));
}

#[test]
fn phone_rejects_other_separators_and_prefixes() {
    assert_eq!(check_field(Field::Phone, "+919876543210"), Some(PHONE_INVALID));
    assert_eq!(check_field(Field::Phone, "(987)6543210"), Some(PHONE_INVALID));
    assert_eq!(check_field(Field::Phone, "987.654.3210"), Some(PHONE_INVALID));
}

#[test]
fn phone_rejects_non_ascii_digits() {
    // Devanagari digits are Unicode decimal digits but not accepted.
    assert_eq!(check_field(Field::Phone, "९८७६५४३२१०"), Some(PHONE_INVALID));
}

#[test]
fn strips_only_hyphens_and_spaces() {
    assert_eq!(strip_phone_separators(" 98-76 5-43210 "), "9876543210");
    assert_eq!(strip_phone_separators("98.76"), "98.76");
}

#[test]
fn message_needs_ten_characters_after_trim() {
    assert_eq!(check_field(Field::Message, "short"), Some(MESSAGE_TOO_SHORT));
    assert_eq!(check_field(Field::Message, "this is long enough"), None);
    assert_eq!(check_field(Field::Message, "   123456789   "), Some(MESSAGE_TOO_SHORT));
    assert_eq!(check_field(Field::Message, "1234567890"), None);
}

#[test]
fn message_length_counts_utf16_units() {
    // Each emoji is a surrogate pair, so five of them reach the minimum.
    assert_eq!(check_field(Field::Message, "😀😀😀😀😀"), None);
    assert_eq!(check_field(Field::Message, "😀😀😀😀"), Some(MESSAGE_TOO_SHORT));
    assert_eq!(form_value_len("😀😀😀😀😀"), MIN_MESSAGE_LEN);

    let nine_units = "म".repeat(9);
    assert_eq!(check_field(Field::Message, &nine_units), Some(MESSAGE_TOO_SHORT));
    assert_eq!(check_field(Field::Message, &"म".repeat(10)), None);
}

#[test]
fn byte_order_mark_counts_as_whitespace() {
    assert_eq!(check_field(Field::Name, "\u{feff}"), Some(NAME_REQUIRED));
    assert_eq!(check_field(Field::Phone, "\u{feff} "), Some(PHONE_REQUIRED));
    assert_eq!(
        check_field(Field::Message, "\u{feff}123456789\u{feff}"),
        Some(MESSAGE_TOO_SHORT)
    );
    assert_eq!(trim_form_value("\u{feff} Asha\u{3000}"), "Asha");
}

#[test]
fn next_line_is_not_trimmed() {
    assert_eq!(trim_form_value("\u{85}Asha"), "\u{85}Asha");
    assert_eq!(check_field(Field::Name, "\u{85}"), None);
}

#[test]
fn fields_are_checked_independently() {
    let errors = validate(&fields("Asha", "5876543210", "short"));
    assert!(!errors.contains(Field::Name));
    assert_eq!(errors.get(Field::Phone), Some(PHONE_INVALID));
    assert_eq!(errors.get(Field::Message), Some(MESSAGE_TOO_SHORT));
}
