//! The checklist, executed in a fixed order over one parsed document.
//!
//! Every check only reads attributes from the tree. The run stops early only
//! when no `<form>` element exists; every other failure is recorded and the
//! remaining checks still run.

pub mod buttons;
pub mod document;
pub mod fields;
pub mod form;
pub mod structure;

use scraper::{Html, Selector};

use crate::checklist::{FIELDS, RESET_BUTTON, SUBMIT_BUTTON};
use crate::report::{CheckResult, ValidationRun};

/// Compile a selector literal for a `LazyLock` static.
fn compile(css: &str) -> Selector {
    match Selector::parse(css) {
        Ok(selector) => selector,
        Err(err) => panic!("Invalid selector '{css}': {err}"),
    }
}

/// Run every document-level check against raw HTML text, appending to `run`.
pub fn check_document(raw: &str, run: &mut ValidationRun) {
    run.record(document::check_doctype(raw));

    let parsed = Html::parse_document(raw);
    let Some(form) = form::find_form(&parsed) else {
        run.abort(form::missing_form());
        return;
    };
    run.record(CheckResult::pass(form::FORM_TAG));
    run.record(form::check_form_attributes(form));

    for field in &FIELDS {
        for result in fields::check_input(&parsed, field) {
            run.record(result);
        }
        run.record(fields::check_label(&parsed, field));
    }

    run.record(buttons::check_button(&parsed, &SUBMIT_BUTTON));
    run.record(buttons::check_button(&parsed, &RESET_BUTTON));

    run.record(structure::check_label_association(&parsed, form));
    run.record(structure::check_tab_order(form));
}
