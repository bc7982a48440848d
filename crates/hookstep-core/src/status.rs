//! Test step result status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a single execution of a test step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TestStepResultStatus {
    /// Status not reported.
    #[default]
    Unknown,
    /// Step ran and passed.
    Passed,
    /// Step was skipped.
    Skipped,
    /// Step is pending implementation.
    Pending,
    /// No definition matched the step.
    Undefined,
    /// More than one definition matched the step.
    Ambiguous,
    /// Step ran and failed.
    Failed,
}

impl TestStepResultStatus {
    /// Returns true only for [`TestStepResultStatus::Failed`].
    ///
    /// `Ambiguous` and `Undefined` are problems too, but they are not
    /// reported as a failed hook.
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }

    /// Wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::Passed => "PASSED",
            Self::Skipped => "SKIPPED",
            Self::Pending => "PENDING",
            Self::Undefined => "UNDEFINED",
            Self::Ambiguous => "AMBIGUOUS",
            Self::Failed => "FAILED",
        }
    }
}

impl fmt::Display for TestStepResultStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
