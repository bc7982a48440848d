//! Report data types: steps, execution results and hook descriptors.

use crate::{HookId, StepId, TestStepResultStatus};
use serde::{Deserialize, Serialize};

/// A hook step in a test case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// Unique step identifier.
    pub id: StepId,

    /// Hook this step invokes. The descriptor is owned by the report.
    pub hook_id: HookId,
}

impl Step {
    /// Create a new Step.
    pub fn new(id: impl Into<StepId>, hook_id: impl Into<HookId>) -> Self {
        Self {
            id: id.into(),
            hook_id: hook_id.into(),
        }
    }
}

/// Elapsed time as recorded in the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Duration {
    pub seconds: i64,
    pub nanos: i32,
}

impl Duration {
    /// Create a new Duration.
    pub fn new(seconds: i64, nanos: i32) -> Self {
        Self { seconds, nanos }
    }

    /// Convert to [`std::time::Duration`]. Negative components clamp to zero.
    pub fn to_std(self) -> std::time::Duration {
        let seconds = u64::try_from(self.seconds).unwrap_or(0);
        let nanos = u32::try_from(self.nanos).unwrap_or(0);
        std::time::Duration::from_secs(seconds)
            .saturating_add(std::time::Duration::from_nanos(u64::from(nanos)))
    }
}

/// One recorded outcome of running a step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResult {
    /// Outcome status.
    pub status: TestStepResultStatus,

    /// Free-text message, usually the error for failed steps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// How long the execution took.
    #[serde(default)]
    pub duration: Duration,
}

impl ExecutionResult {
    /// Create a new ExecutionResult with zero duration and no message.
    pub fn new(status: TestStepResultStatus) -> Self {
        Self {
            status,
            message: None,
            duration: Duration::default(),
        }
    }

    /// Builder method to set the message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Builder method to set the duration.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

/// Static metadata about a hook definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookDescriptor {
    /// Unique hook identifier.
    pub id: HookId,

    /// Human-readable hook name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Where the hook is defined.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_reference: Option<SourceReference>,
}

impl HookDescriptor {
    /// Create a new HookDescriptor without name or source reference.
    pub fn new(id: impl Into<HookId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            source_reference: None,
        }
    }

    /// Builder method to set the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder method to set the source reference.
    pub fn with_source_reference(mut self, source_reference: SourceReference) -> Self {
        self.source_reference = Some(source_reference);
        self
    }

    /// The name to display, if any. Empty names are treated as absent.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}

/// Where a hook is defined in source.
///
/// On the wire this is an object with optional `uri`/`location` and
/// `javaMethod` members. Decoding keeps a single variant: a file location
/// (requires a `uri`) wins over a method reference, and anything else is
/// [`SourceReference::Empty`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WireSourceReference", into = "WireSourceReference")]
pub enum SourceReference {
    /// A file, optionally with a position.
    File(FileLocation),
    /// A method on a class, for platforms without file locations.
    Method(MethodReference),
    /// Present but carrying nothing usable.
    Empty,
}

impl SourceReference {
    /// Shorthand for a file reference.
    pub fn file(uri: impl Into<String>, line: Option<u32>) -> Self {
        Self::File(FileLocation {
            uri: uri.into(),
            line,
            column: None,
        })
    }

    /// Shorthand for a method reference without parameter types.
    pub fn method(class_name: impl Into<String>, method_name: impl Into<String>) -> Self {
        Self::Method(MethodReference {
            class_name: class_name.into(),
            method_name: method_name.into(),
            parameter_types: Vec::new(),
        })
    }
}

/// A position in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLocation {
    pub uri: String,
    pub line: Option<u32>,
    pub column: Option<u32>,
}

impl FileLocation {
    /// The line, unless it is absent or zero.
    pub fn usable_line(&self) -> Option<u32> {
        self.line.filter(|line| *line > 0)
    }
}

/// A method on a class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodReference {
    pub class_name: String,
    pub method_name: String,
    pub parameter_types: Vec<String>,
}

// Every wire member is optional and nullable. Unusable values decode as absent.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireSourceReference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    uri: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    location: Option<WireLocation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    java_method: Option<WireMethodReference>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct WireLocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    line: Option<serde_json::Number>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    column: Option<serde_json::Number>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireMethodReference {
    #[serde(default)]
    class_name: Option<String>,

    #[serde(default)]
    method_name: Option<String>,

    #[serde(default)]
    method_parameter_types: Option<Vec<String>>,
}

/// Non-negative integers that fit in a `u32`; anything else is no position.
fn position(number: Option<serde_json::Number>) -> Option<u32> {
    number
        .and_then(|n| n.as_u64())
        .and_then(|n| u32::try_from(n).ok())
}

impl From<WireMethodReference> for MethodReference {
    fn from(wire: WireMethodReference) -> Self {
        Self {
            class_name: wire.class_name.unwrap_or_default(),
            method_name: wire.method_name.unwrap_or_default(),
            parameter_types: wire.method_parameter_types.unwrap_or_default(),
        }
    }
}

impl From<MethodReference> for WireMethodReference {
    fn from(method: MethodReference) -> Self {
        Self {
            class_name: Some(method.class_name),
            method_name: Some(method.method_name),
            method_parameter_types: Some(method.parameter_types),
        }
    }
}

impl From<WireSourceReference> for SourceReference {
    fn from(wire: WireSourceReference) -> Self {
        let location = wire.location.unwrap_or_default();
        match (wire.uri, wire.java_method) {
            (Some(uri), _) if !uri.is_empty() => SourceReference::File(FileLocation {
                uri,
                line: position(location.line),
                column: position(location.column),
            }),
            (_, Some(method)) => SourceReference::Method(method.into()),
            _ => SourceReference::Empty,
        }
    }
}

impl From<SourceReference> for WireSourceReference {
    fn from(reference: SourceReference) -> Self {
        match reference {
            SourceReference::File(file) => WireSourceReference {
                uri: Some(file.uri),
                location: (file.line.is_some() || file.column.is_some()).then(|| WireLocation {
                    line: file.line.map(serde_json::Number::from),
                    column: file.column.map(serde_json::Number::from),
                }),
                java_method: None,
            },
            SourceReference::Method(method) => WireSourceReference {
                java_method: Some(method.into()),
                ..Default::default()
            },
            SourceReference::Empty => WireSourceReference::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> SourceReference {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_decode_file_location() {
        let reference = decode(
            r#"{"uri": "features/support/hooks.js", "location": {"line": 4, "column": 6}}"#,
        );
        assert_eq!(
            reference,
            SourceReference::File(FileLocation {
                uri: "features/support/hooks.js".to_string(),
                line: Some(4),
                column: Some(6),
            })
        );
    }

    #[test]
    fn test_decode_java_method() {
        let reference = decode(
            r#"{"javaMethod": {"className": "MyHooks", "methodName": "doSetup", "methodParameterTypes": ["int"]}}"#,
        );
        match reference {
            SourceReference::Method(method) => {
                assert_eq!(method.class_name, "MyHooks");
                assert_eq!(method.method_name, "doSetup");
                assert_eq!(method.parameter_types, vec!["int".to_string()]);
            }
            other => panic!("expected method reference, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_empty_object() {
        assert_eq!(decode("{}"), SourceReference::Empty);
    }

    #[test]
    fn test_decode_prefers_file_over_method() {
        let reference = decode(
            r#"{"uri": "hooks.rb", "javaMethod": {"className": "MyHooks", "methodName": "doSetup"}}"#,
        );
        assert_eq!(reference, SourceReference::file("hooks.rb", None));
    }

    #[test]
    fn test_decode_empty_uri_falls_through_to_method() {
        let reference = decode(
            r#"{"uri": "", "javaMethod": {"className": "MyHooks", "methodName": "doSetup"}}"#,
        );
        assert_eq!(reference, SourceReference::method("MyHooks", "doSetup"));
    }

    #[test]
    fn test_encode_file_location() {
        let json = serde_json::to_value(SourceReference::file("hooks.js", Some(4))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"uri": "hooks.js", "location": {"line": 4}})
        );
    }

    #[test]
    fn test_decode_null_class_name() {
        let reference = decode(
            r#"{"javaMethod": {"className": null, "methodName": "doSetup", "methodParameterTypes": null}}"#,
        );
        assert_eq!(reference, SourceReference::method("", "doSetup"));
    }

    #[test]
    fn test_decode_unusable_line() {
        for location in [
            r#"{"line": -1}"#,
            r#"{"line": 4.5}"#,
            r#"{"line": 99999999999}"#,
            r#"{"line": null, "column": -3}"#,
        ] {
            let json = format!(r#"{{"uri": "hooks.js", "location": {}}}"#, location);
            assert_eq!(
                decode(&json),
                SourceReference::file("hooks.js", None),
                "location {location}"
            );
        }
    }

    #[test]
    fn test_encode_column_without_line() {
        let reference = SourceReference::File(FileLocation {
            uri: "hooks.js".to_string(),
            line: None,
            column: Some(6),
        });
        let json = serde_json::to_value(&reference).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"uri": "hooks.js", "location": {"column": 6}})
        );
        assert_eq!(serde_json::from_value::<SourceReference>(json).unwrap(), reference);
    }

    #[test]
    fn test_encode_method_reference() {
        let json = serde_json::to_value(SourceReference::method("MyHooks", "doSetup")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"javaMethod": {
                "className": "MyHooks",
                "methodName": "doSetup",
                "methodParameterTypes": []
            }})
        );
    }

    #[test]
    fn test_hook_descriptor_without_source_reference() {
        let hook: HookDescriptor = serde_json::from_str(r#"{"id": "456"}"#).unwrap();
        assert_eq!(hook.id, HookId::new("456"));
        assert!(hook.name.is_none());
        assert!(hook.source_reference.is_none());
    }

    #[test]
    fn test_display_name_ignores_empty() {
        let hook = HookDescriptor::new("456").with_name("");
        assert_eq!(hook.display_name(), None);

        let hook = HookDescriptor::new("456").with_name("fancy hook!");
        assert_eq!(hook.display_name(), Some("fancy hook!"));
    }

    #[test]
    fn test_usable_line_skips_zero() {
        let file = FileLocation {
            uri: "hooks.js".to_string(),
            line: Some(0),
            column: Some(3),
        };
        assert_eq!(file.usable_line(), None);
    }

    #[test]
    fn test_duration_to_std() {
        assert_eq!(
            Duration::new(1, 500).to_std(),
            std::time::Duration::new(1, 500)
        );
        assert_eq!(Duration::new(-1, -5).to_std(), std::time::Duration::ZERO);
    }

    #[test]
    fn test_execution_result_with_duration() {
        let result = ExecutionResult::new(TestStepResultStatus::Passed)
            .with_duration(Duration::new(1, 250));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": "PASSED", "duration": {"seconds": 1, "nanos": 250}})
        );
        assert_eq!(result.duration.to_std(), std::time::Duration::new(1, 250));
    }

    #[test]
    fn test_execution_result_defaults() {
        let result: ExecutionResult = serde_json::from_str(r#"{"status": "FAILED"}"#).unwrap();
        assert_eq!(result, ExecutionResult::new(TestStepResultStatus::Failed));
    }
}
