/*!
 * Tests for digit-run sanitization
 */

use pdfbabel::sanitize::{sanitize_text, DIGIT_PLACEHOLDER};

/// Every maximal digit run is replaced by the placeholder
#[test]
fn test_sanitizeText_withMixedContent_shouldReplaceEveryDigitRun() {
    assert_eq!(
        sanitize_text("Ticket 48151 escalated to 62342 on floor 3"),
        "Ticket xxxx escalated to xxxx on floor xxxx"
    );
    assert_eq!(sanitize_text("12345"), "xxxx");
    assert_eq!(sanitize_text("1"), "xxxx");
}

/// Non-digit characters pass through untouched
#[test]
fn test_sanitizeText_withoutDigits_shouldReturnInputUnchanged() {
    let input = "No numbers here, just words and punctuation!";
    assert_eq!(sanitize_text(input), input);
}

/// Applying the sanitizer twice yields the same result as applying it once
#[test]
fn test_sanitizeText_reapplied_shouldBeIdempotent() {
    let inputs = [
        "Case 12345 opened",
        "INC0007 closed 2024-01-02 13:45",
        "",
        "xxxx already sanitized",
        "edge9",
    ];
    for input in inputs {
        let once = sanitize_text(input);
        assert_eq!(sanitize_text(&once), once, "not idempotent for {:?}", input);
    }
}

/// The worked example from the document workflow: three page texts joined
/// with spaces sanitize to the expected string
#[test]
fn test_sanitizeText_withThreePageExample_shouldMatchExpected() {
    let joined = ["Case 12345 opened", "Follow up", "Closed on 2024"].join(" ");
    assert_eq!(
        sanitize_text(&joined),
        "Case xxxx opened Follow up Closed on xxxx"
    );
}

/// The placeholder itself must never contain digits, or re-sanitizing
/// would corrupt it
#[test]
fn test_placeholder_shouldBeNonNumeric() {
    assert_eq!(DIGIT_PLACEHOLDER.len(), 4);
    assert!(DIGIT_PLACEHOLDER.chars().all(|c| c.is_ascii_alphabetic()));
}
