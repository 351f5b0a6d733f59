/*!
 * Text sanitization applied before any text leaves the process.
 *
 * Documents handled here routinely carry ticket numbers, case identifiers
 * and dates. Every maximal run of decimal digits is collapsed to a fixed
 * alphabetic placeholder so that none of them reach the remote translation
 * service.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// Placeholder substituted for every digit run. Alphabetic on purpose:
/// a numeric placeholder would itself be rewritten on a second pass.
pub const DIGIT_PLACEHOLDER: &str = "xxxx";

static DIGIT_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+").expect("digit run pattern is valid"));

/// Replace every maximal run of decimal digits with [`DIGIT_PLACEHOLDER`].
///
/// Non-digit characters pass through unchanged. The function is pure and
/// idempotent: applying it twice yields the same result as applying it once.
pub fn sanitize_text(text: &str) -> String {
    DIGIT_RUN.replace_all(text, DIGIT_PLACEHOLDER).into_owned()
}
