//! Per-field input and label checks.

use std::sync::LazyLock;

use scraper::node::Element;
use scraper::{Html, Selector};

use super::compile;
use crate::checklist::FieldRequirement;
use crate::report::CheckResult;

static INPUT: LazyLock<Selector> = LazyLock::new(|| compile("input"));
static LABEL_FOR: LazyLock<Selector> = LazyLock::new(|| compile("label[for]"));

/// Look up the field's `<input>` by id anywhere in the document.
///
/// Yields one failure when the input is missing, otherwise a pass for its
/// presence followed by the attribute check.
pub fn check_input(document: &Html, field: &FieldRequirement) -> Vec<CheckResult> {
    let Some(input) = document
        .select(&INPUT)
        .find(|el| el.value().id() == Some(field.id))
    else {
        return vec![CheckResult::fail(
            format!("{} Input", field.title),
            format!("Input field with id=\"{}\" not found", field.id),
        )];
    };

    vec![
        CheckResult::pass(format!("{} Input - found", field.title)),
        check_input_attributes(input.value(), field),
    ]
}

/// Reports only the first unmet expectation, in the order
/// type, name, tabindex, pattern, required.
fn check_input_attributes(input: &Element, field: &FieldRequirement) -> CheckResult {
    let title = field.title;

    if input.attr("type") != Some(field.input_type) {
        return CheckResult::fail(
            format!("{title} Type"),
            format!("type should be \"{}\"", field.input_type),
        );
    }
    if input.attr("name") != Some(field.id) {
        return CheckResult::fail(
            format!("{title} Name Attribute"),
            format!("name should be \"{}\"", field.id),
        );
    }
    if input.attr("tabindex") != Some(field.tab_index) {
        return CheckResult::fail(
            format!("{title} Tabindex"),
            format!("tabindex should be \"{}\"", field.tab_index),
        );
    }
    if field.needs_pattern && input.attr("pattern").is_none_or(str::is_empty) {
        return CheckResult::fail(format!("{title} Pattern"), "should have pattern attribute");
    }
    if input.attr("required").is_none() {
        return CheckResult::fail(format!("{title} Required"), "should have required attribute");
    }

    let pattern = if field.needs_pattern { "pattern, " } else { "" };
    CheckResult::pass(format!(
        "{title} Attributes (type=\"{}\", name, tabindex=\"{}\", {pattern}required)",
        field.input_type, field.tab_index
    ))
}

/// The first label pointing at the field must carry its access key.
/// Runs regardless of whether the input itself exists.
pub fn check_label(document: &Html, field: &FieldRequirement) -> CheckResult {
    let title = field.title;
    let Some(label) = document
        .select(&LABEL_FOR)
        .find(|el| el.value().attr("for") == Some(field.id))
    else {
        return CheckResult::fail(
            format!("{title} Label"),
            format!("Label for {} not found", field.id),
        );
    };

    if label.value().attr("accesskey") == Some(field.access_key) {
        CheckResult::pass(format!(
            "{title} Label with accesskey=\"{}\"",
            field.access_key
        ))
    } else {
        CheckResult::fail(
            format!("{title} Accesskey"),
            format!("Label should have accesskey=\"{}\"", field.access_key),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::FIELDS;

    const PASSWORD: FieldRequirement = FIELDS[3];
    const EMAIL: FieldRequirement = FIELDS[2];

    fn names(results: &[CheckResult]) -> Vec<&str> {
        results.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_input_ok() {
        let document = Html::parse_document(
            r#"<input type="email" id="email" name="email" tabindex="3" required>"#,
        );
        let results = check_input(&document, &EMAIL);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.passed), "got: {results:?}");
        assert_eq!(
            results[1].name,
            "Email Attributes (type=\"email\", name, tabindex=\"3\", required)"
        );
    }

    #[test]
    fn test_input_missing_skips_attributes() {
        let document = Html::parse_document(r#"<input type="text" id="emails">"#);
        let results = check_input(&document, &EMAIL);
        assert_eq!(names(&results), vec!["Email Input"]);
        assert_eq!(
            results[0].reason.as_deref(),
            Some("Input field with id=\"email\" not found")
        );
    }

    #[test]
    fn test_input_id_on_other_element_is_not_an_input() {
        let document = Html::parse_document(r#"<textarea id="email" name="email"></textarea>"#);
        let results = check_input(&document, &EMAIL);
        assert_eq!(names(&results), vec!["Email Input"]);
    }

    #[test]
    fn test_first_unmet_attribute_wins() {
        // wrong type and missing required: only the type is reported
        let document =
            Html::parse_document(r#"<input type="text" id="email" name="email" tabindex="3">"#);
        let results = check_input(&document, &EMAIL);
        assert_eq!(names(&results), vec!["Email Input - found", "Email Type"]);
    }

    #[test]
    fn test_missing_required() {
        let document =
            Html::parse_document(r#"<input type="email" id="email" name="email" tabindex="3">"#);
        let results = check_input(&document, &EMAIL);
        assert_eq!(results[1].name, "Email Required");
        assert_eq!(
            results[1].reason.as_deref(),
            Some("should have required attribute")
        );
    }

    #[test]
    fn test_tabindex_compared_as_text() {
        let document = Html::parse_document(
            r#"<input type="email" id="email" name="email" tabindex="03" required>"#,
        );
        let results = check_input(&document, &EMAIL);
        assert_eq!(results[1].name, "Email Tabindex");
    }

    #[test]
    fn test_password_pattern_must_be_non_empty() {
        let document = Html::parse_document(
            r#"<input type="password" id="password" name="password" tabindex="4" pattern="" required>"#,
        );
        let results = check_input(&document, &PASSWORD);
        assert_eq!(results[1].name, "Password Pattern");

        let document = Html::parse_document(
            r#"<input type="password" id="password" name="password" tabindex="4" pattern=".{8,}" required>"#,
        );
        let results = check_input(&document, &PASSWORD);
        assert!(results[1].passed, "got: {results:?}");
        assert!(results[1].name.contains("pattern, required"));
    }

    #[test]
    fn test_label_ok() {
        let document = Html::parse_document(r#"<label for="email" accesskey="e">Email</label>"#);
        let result = check_label(&document, &EMAIL);
        assert!(result.passed);
        assert_eq!(result.name, "Email Label with accesskey=\"e\"");
    }

    #[test]
    fn test_label_wrong_accesskey() {
        let document = Html::parse_document(r#"<label for="email" accesskey="m">Email</label>"#);
        let result = check_label(&document, &EMAIL);
        assert_eq!(result.name, "Email Accesskey");
    }

    #[test]
    fn test_label_missing() {
        let document = Html::parse_document(r#"<label accesskey="e">Email</label>"#);
        let result = check_label(&document, &EMAIL);
        assert_eq!(result.name, "Email Label");
        assert_eq!(result.reason.as_deref(), Some("Label for email not found"));
    }

    #[test]
    fn test_first_matching_label_is_used() {
        let document = Html::parse_document(
            r#"<label for="email">Email</label><label for="email" accesskey="e">Again</label>"#,
        );
        let result = check_label(&document, &EMAIL);
        assert_eq!(result.name, "Email Accesskey");
    }
}
