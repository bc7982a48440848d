//! Picks the result that decides a step's status.
//!
//! A step can be executed more than once (retries). Later results always
//! override earlier ones, whatever their status.

use crate::{ExecutionResult, TestStepResultStatus};

/// The authoritative result: the last one recorded.
pub fn latest_result(results: &[ExecutionResult]) -> Option<&ExecutionResult> {
    results.last()
}

/// Status of the last recorded result, or `None` when nothing was recorded.
pub fn select_status(results: &[ExecutionResult]) -> Option<TestStepResultStatus> {
    latest_result(results).map(|result| result.status)
}
