//! Resolution of a hook step into its display status and label.

use serde::Serialize;
use tracing::debug;

use crate::{format_failure_label, select_status, ReportQuery, Step};

/// What the presentation layer needs to show a hook step.
///
/// `text` is set if and only if the step failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedLabel {
    failed: bool,
    text: Option<String>,
}

impl ResolvedLabel {
    /// A step that did not fail.
    pub fn ok() -> Self {
        Self {
            failed: false,
            text: None,
        }
    }

    /// A failed step with its label.
    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            failed: true,
            text: Some(text.into()),
        }
    }

    /// Whether the step failed.
    pub fn is_failed(&self) -> bool {
        self.failed
    }

    /// The label, present only for failed steps.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

/// Resolve a hook step against report data.
///
/// Never fails: an empty result list counts as not failed, and a missing or
/// unusable hook definition yields the unknown-location label.
pub fn resolve<Q>(query: &Q, step: &Step) -> ResolvedLabel
where
    Q: ReportQuery + ?Sized,
{
    let results = query.test_step_results(&step.id);
    let status = select_status(&results);
    debug!(
        step_id = %step.id,
        results = results.len(),
        status = ?status,
        "Selected hook step status"
    );

    if !status.is_some_and(|s| s.is_failed()) {
        return ResolvedLabel::ok();
    }

    let hook = query.hook(&step.hook_id);
    if hook.is_none() {
        debug!(hook_id = %step.hook_id, "Hook not found in report");
    }
    ResolvedLabel::failure(format_failure_label(hook.as_ref()))
}
