use std::sync::LazyLock;

use scraper::{Html, Selector};

use super::compile;
use crate::checklist::ButtonRequirement;
use crate::report::CheckResult;

static BUTTON: LazyLock<Selector> = LazyLock::new(|| compile("button[type]"));

/// The first `<button>` of the required type must carry the expected access
/// key, then the expected tabindex. The `type` value matches in any case.
pub fn check_button(document: &Html, button: &ButtonRequirement) -> CheckResult {
    let title = button.title;
    let Some(found) = document
        .select(&BUTTON)
        .find(|el| {
            el.value()
                .attr("type")
                .is_some_and(|t| t.eq_ignore_ascii_case(button.button_type))
        })
    else {
        return CheckResult::fail(title, format!("{title} not found"));
    };

    let element = found.value();
    if element.attr("accesskey") != Some(button.access_key) {
        return CheckResult::fail(
            format!("{title} Accesskey"),
            format!("{title} should have accesskey=\"{}\"", button.access_key),
        );
    }
    if element.attr("tabindex") != Some(button.tab_index) {
        return CheckResult::fail(
            format!("{title} Tabindex"),
            format!("{title} should have tabindex=\"{}\"", button.tab_index),
        );
    }

    CheckResult::pass(format!(
        "{title} (type=\"{}\", accesskey=\"{}\", tabindex=\"{}\")",
        button.button_type, button.access_key, button.tab_index
    ))
}
