//! Hookstep Core
//!
//! Resolves whether a hook step in a test report failed and, when it did,
//! the label telling the reader where the hook is defined.
//!
//! This crate has no dependencies on:
//! - Rendering/layout
//! - Report transport or storage
//!
//! Report data is reached through the [`ReportQuery`] trait; callers supply
//! their own implementation or use [`InMemoryReport`].

pub mod error;
pub mod ids;
pub mod label;
pub mod model;
pub mod query;
pub mod report;
pub mod resolve;
pub mod select;
pub mod status;

// Re-export commonly used types
pub use error::CoreError;
pub use ids::{HookId, StepId};
pub use label::{format_failure_label, HookLocation};
pub use model::{
    Duration, ExecutionResult, FileLocation, HookDescriptor, MethodReference, SourceReference,
    Step,
};
pub use query::ReportQuery;
pub use report::InMemoryReport;
pub use resolve::{resolve, ResolvedLabel};
pub use select::{latest_result, select_status};
pub use status::TestStepResultStatus;
