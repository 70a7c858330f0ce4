//! Form-wide structural checks: label association and tab order.
//!
//! Both look at the whole form rather than individual fields, so they can
//! pass or fail independently of the per-field checks.

use std::collections::HashSet;
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use super::compile;
use crate::checklist::{EXPECTED_TAB_ORDER, MIN_ASSOCIATED_LABELS};
use crate::report::CheckResult;

static LABEL_FOR: LazyLock<Selector> = LazyLock::new(|| compile("label[for]"));
static WITH_ID: LazyLock<Selector> = LazyLock::new(|| compile("[id]"));
static WITH_TABINDEX: LazyLock<Selector> = LazyLock::new(|| compile("[tabindex]"));

/// Every `label[for]` inside the form must name an id present somewhere in
/// the document, and there must be at least [`MIN_ASSOCIATED_LABELS`] of them.
/// An empty `for` never resolves.
pub fn check_label_association(document: &Html, form: ElementRef<'_>) -> CheckResult {
    let ids: HashSet<&str> = document
        .select(&WITH_ID)
        .filter_map(|el| el.value().id())
        .collect();

    let targets: Vec<&str> = form
        .select(&LABEL_FOR)
        .filter_map(|el| el.value().attr("for"))
        .collect();

    if !targets.iter().all(|t| !t.is_empty() && ids.contains(t)) {
        return CheckResult::fail(
            "Label-Input Association",
            "Some labels do not have corresponding inputs",
        );
    }
    if targets.len() < MIN_ASSOCIATED_LABELS {
        return CheckResult::fail(
            "Label Count",
            format!(
                "Should have at least {MIN_ASSOCIATED_LABELS} labels (first name, last name, email, password, confirm password)"
            ),
        );
    }

    CheckResult::pass("All Labels Associated with Inputs")
}

/// All tabindex values inside the form, sorted, must be exactly 1 through 7.
/// Duplicates, gaps, extras and unparsable values all fail.
pub fn check_tab_order(form: ElementRef<'_>) -> CheckResult {
    let values: Option<Vec<i64>> = form
        .select(&WITH_TABINDEX)
        .map(|el| el.value().attr("tabindex").and_then(parse_tab_index))
        .collect();

    let in_order = values.is_some_and(|mut values| {
        values.sort_unstable();
        values == EXPECTED_TAB_ORDER
    });

    if in_order {
        CheckResult::pass("Tabindex Order - Sequential and Logical (1-7)")
    } else {
        CheckResult::fail(
            "Tabindex Order",
            "Tabindex values should be sequential: 1, 2, 3, 4, 5, 6, 7",
        )
    }
}

/// Parse the leading integer of a tabindex value: optional leading
/// whitespace and sign, then decimal digits, or hex digits after a `0x`
/// prefix. Anything after the digits is ignored; no digits at all yields
/// `None`.
#[must_use]
pub fn parse_tab_index(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let (radix, rest) = match rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
        Some(hex) => (16, hex),
        None => (10, rest),
    };
    let end = rest
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(rest.len());
    let value = i64::from_str_radix(&rest[..end], radix).ok()?;
    Some(if negative { -value } else { value })
}
