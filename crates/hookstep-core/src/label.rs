//! Failure labels for hook steps.
//!
//! Location priority is file, then method, then unknown. A hook name, when
//! present, is shown in addition to the location, never instead of it.

use std::fmt;

use tracing::trace;

use crate::{HookDescriptor, SourceReference};

/// Text used when the hook's location cannot be determined.
pub const UNKNOWN_LOCATION: &str = "Unknown location";

/// Where a hook is defined, borrowed from its descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookLocation<'a> {
    /// `<uri>` or `<uri>:<line>`.
    File { uri: &'a str, line: Option<u32> },
    /// `<class_name>.<method_name>`.
    Method {
        class_name: &'a str,
        method_name: &'a str,
    },
    Unknown,
}

impl<'a> HookLocation<'a> {
    /// Resolve the location of `hook`.
    ///
    /// An empty `uri`, class name or method name makes the reference
    /// unusable and yields [`HookLocation::Unknown`].
    pub fn of(hook: &'a HookDescriptor) -> Self {
        match &hook.source_reference {
            Some(SourceReference::File(file)) if !file.uri.is_empty() => HookLocation::File {
                uri: &file.uri,
                line: file.usable_line(),
            },
            Some(SourceReference::Method(method))
                if !method.class_name.is_empty() && !method.method_name.is_empty() =>
            {
                HookLocation::Method {
                    class_name: &method.class_name,
                    method_name: &method.method_name,
                }
            }
            Some(reference) => {
                trace!(hook_id = %hook.id, ?reference, "Unusable hook source reference");
                HookLocation::Unknown
            }
            None => HookLocation::Unknown,
        }
    }
}

impl fmt::Display for HookLocation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HookLocation::File { uri, line: Some(line) } => write!(f, "{}:{}", uri, line),
            HookLocation::File { uri, line: None } => f.write_str(uri),
            HookLocation::Method {
                class_name,
                method_name,
            } => write!(f, "{}.{}", class_name, method_name),
            HookLocation::Unknown => f.write_str(UNKNOWN_LOCATION),
        }
    }
}

/// Build the label shown for a failed hook step.
///
/// `None` means the hook could not be found; the label then falls back to
/// the unknown location.
pub fn format_failure_label(hook: Option<&HookDescriptor>) -> String {
    let Some(hook) = hook else {
        return format!("Hook failed: {}", HookLocation::Unknown);
    };

    let location = HookLocation::of(hook);
    match hook.display_name() {
        Some(name) => format!("Hook \"{}\" failed: {}", name, location),
        None => format!("Hook failed: {}", location),
    }
}
