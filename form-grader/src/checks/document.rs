//! Raw-text checks that run before the document is parsed.

use crate::report::CheckResult;

const DOCTYPE_PREFIX: &str = "<!doctype html>";

/// Whether the text starts with an HTML5 doctype, ignoring case and any
/// surrounding whitespace or byte-order mark.
#[must_use]
pub fn has_doctype(raw: &str) -> bool {
    let trimmed = raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    trimmed
        .get(..DOCTYPE_PREFIX.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(DOCTYPE_PREFIX))
}

pub fn check_doctype(raw: &str) -> CheckResult {
    if has_doctype(raw) {
        CheckResult::pass("DOCTYPE Declaration")
    } else {
        CheckResult::fail(
            "DOCTYPE Declaration",
            "HTML file must start with <!DOCTYPE html>",
        )
    }
}
