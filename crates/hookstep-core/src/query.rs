//! Read-only access to report data.

use crate::{ExecutionResult, HookDescriptor, HookId, StepId};

/// Lookup of report data by identifier.
///
/// Implementations are read-only and side-effect free. Absence is part of
/// the contract, not an error.
pub trait ReportQuery: Send + Sync {
    /// Results recorded for a step, oldest first. Empty when none were recorded.
    fn test_step_results(&self, step_id: &StepId) -> Vec<ExecutionResult>;

    /// The hook definition with this id, if the report has one.
    fn hook(&self, hook_id: &HookId) -> Option<HookDescriptor>;
}
