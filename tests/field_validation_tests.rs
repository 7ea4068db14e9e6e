//! On-demand field validation by content category
use sstextfield::validation::{ContentCategory, is_blank, is_valid, is_valid_email};

#[test]
fn test_email_blank_and_malformed() {
    let verdict = is_valid("", ContentCategory::Email);
    assert!(!verdict.is_valid);
    assert_eq!(verdict.error_message.as_deref(), Some("Please enter your e-mail"));

    let verdict = is_valid("   ", ContentCategory::Email);
    assert_eq!(verdict.error_message.as_deref(), Some("Please enter your e-mail"));

    let verdict = is_valid("not-an-email", ContentCategory::Email);
    assert!(!verdict.is_valid);
    assert_eq!(verdict.error_message.as_deref(), Some("Please enter valid e-mail"));
}

#[test]
fn test_email_valid() {
    let verdict = is_valid("a@b.com", ContentCategory::Email);
    assert!(verdict.is_valid);
    assert_eq!(verdict.error_message, None);
    assert!(!verdict.shows_error());
}

#[test]
fn test_name_checks_emptiness_not_blankness() {
    let verdict = is_valid("", ContentCategory::Name);
    assert!(!verdict.is_valid);
    assert!(verdict.shows_error());
    assert_eq!(verdict.message_or("Mandatory"), "Mandatory");

    assert!(is_valid("   ", ContentCategory::Name).is_valid);
}

#[test]
fn test_other_categories() {
    for category in [
        ContentCategory::Username,
        ContentCategory::Password,
        ContentCategory::PhoneNumber,
        ContentCategory::Unspecified,
    ] {
        assert!(!is_valid("", category).is_valid);
        // content is not inspected beyond emptiness
        assert!(is_valid("x", category).is_valid);
    }
}

#[test]
fn test_validation_is_idempotent() {
    for (text, category) in [
        ("", ContentCategory::Email),
        ("bad@", ContentCategory::Email),
        ("ok@example.com", ContentCategory::Email),
        ("", ContentCategory::Password),
        ("Ada", ContentCategory::Name),
    ] {
        assert_eq!(is_valid(text, category), is_valid(text, category));
    }
}

#[test]
fn test_helpers() {
    assert!(is_blank(" \t "));
    assert!(!is_valid_email("   "));
    assert!(is_valid_email("x.y%z@mail-server.example.io"));
    assert!(!is_valid_email("x@y@z.com"));
}

#[test]
fn test_email_line_break_is_content_not_blank() {
    assert!(!is_blank("\n"));
    let verdict = is_valid("\n", ContentCategory::Email);
    assert!(!verdict.is_valid);
    assert_eq!(verdict.error_message.as_deref(), Some("Please enter valid e-mail"));

    let verdict = is_valid(" \t ", ContentCategory::Email);
    assert_eq!(verdict.error_message.as_deref(), Some("Please enter your e-mail"));
}
