//! In-memory report data.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{CoreError, ExecutionResult, HookDescriptor, HookId, ReportQuery, Step, StepId};

/// A fixed, in-memory report.
///
/// Serialized form:
///
/// ```json
/// {
///   "testSteps": [{ "id": "123", "hookId": "456" }],
///   "testStepResults": { "123": [{ "status": "FAILED" }] },
///   "hooks": [{ "id": "456", "sourceReference": { "uri": "hooks.js" } }]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InMemoryReport {
    #[serde(default)]
    test_steps: Vec<Step>,

    #[serde(default)]
    test_step_results: HashMap<StepId, Vec<ExecutionResult>>,

    #[serde(default)]
    hooks: Vec<HookDescriptor>,
}

impl InMemoryReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a report from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        serde_json::from_str(json).map_err(|e| CoreError::Serialization(e.to_string()))
    }

    /// Read and parse a report file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let report = Self::from_json(&json)?;
        debug!(
            path = %path.display(),
            steps = report.test_steps.len(),
            hooks = report.hooks.len(),
            "Loaded report"
        );
        Ok(report)
    }

    /// Builder method to add a step.
    pub fn with_step(mut self, step: Step) -> Self {
        self.test_steps.push(step);
        self
    }

    /// Builder method to record a result for a step. Results keep insertion order.
    pub fn with_result(mut self, step_id: impl Into<StepId>, result: ExecutionResult) -> Self {
        self.test_step_results
            .entry(step_id.into())
            .or_default()
            .push(result);
        self
    }

    /// Builder method to add a hook definition.
    pub fn with_hook(mut self, hook: HookDescriptor) -> Self {
        self.hooks.push(hook);
        self
    }

    /// All steps, in report order.
    pub fn steps(&self) -> &[Step] {
        &self.test_steps
    }

    /// Get a step by id.
    pub fn step(&self, step_id: &StepId) -> Option<&Step> {
        self.test_steps.iter().find(|s| &s.id == step_id)
    }

    /// Get a step by id, failing if the report does not contain it.
    pub fn require_step(&self, step_id: &StepId) -> Result<&Step, CoreError> {
        self.step(step_id)
            .ok_or_else(|| CoreError::StepNotFound(step_id.to_string()))
    }
}

impl ReportQuery for InMemoryReport {
    fn test_step_results(&self, step_id: &StepId) -> Vec<ExecutionResult> {
        self.test_step_results
            .get(step_id)
            .cloned()
            .unwrap_or_default()
    }

    fn hook(&self, hook_id: &HookId) -> Option<HookDescriptor> {
        self.hooks.iter().find(|h| &h.id == hook_id).cloned()
    }
}
