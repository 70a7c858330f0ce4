//! Form element lookup and form-level attributes.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use super::compile;
use crate::checklist::{FORM_ACTION, FORM_METHOD};
use crate::report::CheckResult;

static FORM: LazyLock<Selector> = LazyLock::new(|| compile("form"));

pub const FORM_TAG: &str = "Form Tag";

/// First `<form>` element in document order.
pub fn find_form(document: &Html) -> Option<ElementRef<'_>> {
    document.select(&FORM).next()
}

pub fn missing_form() -> CheckResult {
    CheckResult::fail(FORM_TAG, "<form> tag not found in <body>")
}

/// `action` must be `#`; `method`, when given, must be POST in any case.
/// An empty `method` counts as absent.
pub fn check_form_attributes(form: ElementRef<'_>) -> CheckResult {
    let element = form.value();

    if element.attr("action") != Some(FORM_ACTION) {
        return CheckResult::fail(
            "Form Action",
            format!("action attribute should be \"{FORM_ACTION}\""),
        );
    }

    if let Some(method) = element.attr("method")
        && !method.is_empty()
        && !method.eq_ignore_ascii_case(FORM_METHOD)
    {
        return CheckResult::fail(
            "Form Method",
            format!("method attribute should be \"{FORM_METHOD}\""),
        );
    }

    CheckResult::pass(format!(
        "Form Attributes (action=\"{FORM_ACTION}\", method=\"{FORM_METHOD}\")"
    ))
}
