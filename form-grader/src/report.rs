//! Validation run types.

use serde::Serialize;

/// Outcome of a single named check.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct CheckResult {
    /// Display name of the check. Passing and failing results of the same
    /// check may carry different names.
    pub name: String,
    /// Whether the expectation was met.
    pub passed: bool,
    /// Human-readable explanation, present on failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl CheckResult {
    /// A passing result.
    #[must_use]
    pub fn pass(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: true,
            reason: None,
        }
    }

    /// A failing result with the reason shown under it.
    #[must_use]
    pub fn fail(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: false,
            reason: Some(reason.into()),
        }
    }
}

/// Result of grading one document.
///
/// Results are kept in execution order. `aborted` is set when a fatal check
/// (missing document, missing form) stopped the run early.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct ValidationRun {
    pub results: Vec<CheckResult>,
    pub aborted: bool,
}

impl ValidationRun {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a result.
    pub fn record(&mut self, result: CheckResult) {
        tracing::debug!(check = %result.name, passed = result.passed, "check evaluated");
        self.results.push(result);
    }

    /// Append a failure and stop the run.
    pub fn abort(&mut self, result: CheckResult) {
        tracing::warn!(check = %result.name, "fatal check failed, aborting run");
        self.record(result);
        self.aborted = true;
    }

    /// Number of checks recorded.
    #[must_use]
    pub fn total(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    /// Whether every recorded check passed.
    #[must_use]
    pub fn ok(&self) -> bool {
        self.failed() == 0
    }

    /// Process exit status for this run: 0 when nothing failed, 1 otherwise.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        i32::from(!self.ok())
    }

    /// Iterator over the failed results.
    pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
        self.results.iter().filter(|r| !r.passed)
    }
}

impl Serialize for ValidationRun {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("ValidationRun", 7)?;
        state.serialize_field("total", &self.total())?;
        state.serialize_field("passed", &self.passed())?;
        state.serialize_field("failed", &self.failed())?;
        state.serialize_field("ok", &self.ok())?;
        state.serialize_field("aborted", &self.aborted)?;
        state.serialize_field("exit_code", &self.exit_code())?;
        state.serialize_field("results", &self.results)?;
        state.end()
    }
}
