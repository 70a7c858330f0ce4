//! Report formatting for validation runs.
//!
//! Provides JSON and human-readable formatters for [`ValidationRun`]. The
//! human format colors its lines through `colored`; whether ANSI codes are
//! actually emitted is decided by the caller via `colored::control`.

use std::io::Write;

use colored::Colorize;

use crate::checklist::REPORT_TITLE;
use crate::report::{CheckResult, ValidationRun};

const PASS_MARK: &str = "\u{2713}";
const FAIL_MARK: &str = "\u{2717}";

/// Format a `ValidationRun` as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(run: &ValidationRun, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(run)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Format a `ValidationRun` as the line-oriented console report.
///
/// One line per check, failures followed by an indented reason, then the
/// summary block.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(run: &ValidationRun, writer: &mut dyn Write) -> anyhow::Result<()> {
    write_banner(REPORT_TITLE, writer)?;
    writeln!(writer)?;

    for result in &run.results {
        write_result(result, writer)?;
    }

    write_summary(run, writer)
}

fn write_banner(title: &str, writer: &mut dyn Write) -> anyhow::Result<()> {
    let rule = "=".repeat(33);
    writeln!(writer)?;
    writeln!(writer, "{}", rule.cyan())?;
    writeln!(writer, "{}", title.cyan())?;
    writeln!(writer, "{}", rule.cyan())?;
    Ok(())
}

fn write_result(result: &CheckResult, writer: &mut dyn Write) -> anyhow::Result<()> {
    if result.passed {
        writeln!(writer, "{}", format!("{PASS_MARK} {}", result.name).green())?;
        return Ok(());
    }

    writeln!(writer, "{}", format!("{FAIL_MARK} {}", result.name).red())?;
    if let Some(reason) = &result.reason {
        writeln!(writer, "{}", format!("  Reason: {reason}").yellow())?;
    }
    Ok(())
}

fn write_summary(run: &ValidationRun, writer: &mut dyn Write) -> anyhow::Result<()> {
    write_banner("Test Summary", writer)?;
    writeln!(writer, "Total Tests: {}", run.total())?;
    writeln!(writer, "{}", format!("Passed: {}", run.passed()).green())?;

    let failed = format!("Failed: {}", run.failed());
    if run.ok() {
        writeln!(writer, "{failed}")?;
        writeln!(writer)?;
        writeln!(
            writer,
            "{}",
            "\u{1f389} All tests passed! Great job on accessibility!".green()
        )?;
    } else {
        writeln!(writer, "{}", failed.red())?;
        writeln!(writer)?;
        writeln!(
            writer,
            "{}",
            "\u{26a0}\u{fe0f}  Some tests failed. Please review the errors above.".yellow()
        )?;
    }
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(run: &ValidationRun) -> String {
        let mut buf = Vec::new();
        write_human(run, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_human_lists_results_in_order() {
        let mut run = ValidationRun::new();
        run.record(CheckResult::pass("Form Tag"));
        run.record(CheckResult::fail("Email Required", "should have required attribute"));

        let out = render(&run);
        let pass_at = out.find("\u{2713} Form Tag").unwrap();
        let fail_at = out.find("\u{2717} Email Required").unwrap();
        let reason_at = out.find("  Reason: should have required attribute").unwrap();
        assert!(pass_at < fail_at && fail_at < reason_at, "got:\n{out}");
        assert!(out.contains(REPORT_TITLE));
    }

    #[test]
    fn test_human_summary_success() {
        let mut run = ValidationRun::new();
        run.record(CheckResult::pass("Form Tag"));

        let out = render(&run);
        assert!(out.contains("Total Tests: 1"));
        assert!(out.contains("Passed: 1"));
        assert!(out.contains("Failed: 0"));
        assert!(out.contains("All tests passed!"));
        assert!(!out.contains("Some tests failed"));
    }

    #[test]
    fn test_human_summary_failure() {
        let mut run = ValidationRun::new();
        run.abort(CheckResult::fail("File Existence", "index.html file not found"));

        let out = render(&run);
        assert!(out.contains("Failed: 1"));
        assert!(out.contains("Some tests failed. Please review the errors above."));
        assert!(!out.contains("All tests passed!"));
    }

    #[test]
    fn test_json_output() {
        let mut run = ValidationRun::new();
        run.record(CheckResult::pass("Form Tag"));

        let mut buf = Vec::new();
        write_json(&run, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["ok"], true);
        assert_eq!(value["results"][0]["passed"], true);
    }
}
