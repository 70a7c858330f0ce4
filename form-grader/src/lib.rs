//! # form-grader
//!
//! Checklist grader for an accessible HTML user registration form.
//!
//! The crate separates **loading** the document (bounded file read, see
//! [`SourceConfig`]) from the **checklist** itself, which runs over the text
//! of one document and records an ordered list of named pass/fail results.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use form_grader::{grade_file, output, SourceConfig};
//!
//! let run = grade_file(&SourceConfig::for_path("index.html")).unwrap();
//! output::write_human(&run, &mut std::io::stdout()).unwrap();
//! std::process::exit(run.exit_code());
//! ```

pub mod checklist;
mod checks;
mod config;
mod error;
pub mod output;
mod report;
mod source;

pub use config::{DEFAULT_DOCUMENT, DEFAULT_MAX_FILE_SIZE, SourceConfig};
pub use error::DocumentError;
pub use report::{CheckResult, ValidationRun};

use source::{display_name, read_document};

/// Grade the document at `source.path`.
///
/// A missing, unreadable, oversized or non-UTF-8 document is not an error:
/// it is recorded as the failed, fatal `File Existence` check and the run is
/// returned aborted.
///
/// # Errors
///
/// Returns an error if `source.path` is empty.
pub fn grade_file(source: &SourceConfig) -> anyhow::Result<ValidationRun> {
    if source.path.as_os_str().is_empty() {
        anyhow::bail!("No document path provided");
    }

    let mut run = ValidationRun::new();
    match read_document(&source.path, source.max_file_size) {
        Ok(raw) => {
            run.record(CheckResult::pass(format!(
                "File Existence - {} found",
                display_name(&source.path)
            )));
            checks::check_document(&raw, &mut run);
        }
        Err(err) => {
            tracing::warn!(document = %err.path().display(), error = %err, "document could not be loaded");
            run.abort(CheckResult::fail("File Existence", err.to_string()));
        }
    }

    tracing::info!(
        document = %source.path.display(),
        total = run.total(),
        passed = run.passed(),
        failed = run.failed(),
        "grading finished"
    );
    Ok(run)
}

/// Grade already-loaded HTML text, starting from the doctype check.
#[must_use]
pub fn grade_html(raw: &str) -> ValidationRun {
    let mut run = ValidationRun::new();
    checks::check_document(raw, &mut run);
    run
}
