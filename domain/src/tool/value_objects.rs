//! Tool domain value objects
//!
//! Argument kinds and schemas, resolved credentials, and the immutable
//! outputs of aggregation ([`AvailableToolsSnapshot`], [`ToolDiagnostic`]).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use super::error::ToolBuildError;
use super::kind::ToolKind;
use super::traits::{Tool, ToolInstance};

/// Named construction arguments supplied by a caller
pub type ToolArguments = HashMap<String, Value>;

/// Expected kind of a construction argument
///
/// Only the top-level kind is checked; list elements and mapping values
/// are not validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgumentType {
    Text,
    Integer,
    Boolean,
    List,
    Mapping,
}

impl ArgumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArgumentType::Text => "text",
            ArgumentType::Integer => "integer",
            ArgumentType::Boolean => "boolean",
            ArgumentType::List => "list",
            ArgumentType::Mapping => "mapping",
        }
    }
}

impl std::fmt::Display for ArgumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Observed kind of a supplied argument value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Null,
    Text,
    Integer,
    Float,
    Boolean,
    List,
    Mapping,
}

impl ValueKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Number(n) if n.is_i64() || n.is_u64() => ValueKind::Integer,
            Value::Number(_) => ValueKind::Float,
            Value::String(_) => ValueKind::Text,
            Value::Array(_) => ValueKind::List,
            Value::Object(_) => ValueKind::Mapping,
        }
    }

    /// Exact kind match; no coercion between kinds
    pub fn satisfies(&self, expected: ArgumentType) -> bool {
        matches!(
            (self, expected),
            (ValueKind::Text, ArgumentType::Text)
                | (ValueKind::Integer, ArgumentType::Integer)
                | (ValueKind::Boolean, ArgumentType::Boolean)
                | (ValueKind::List, ArgumentType::List)
                | (ValueKind::Mapping, ArgumentType::Mapping)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Text => "text",
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::Boolean => "boolean",
            ValueKind::List => "list",
            ValueKind::Mapping => "mapping",
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single declared construction argument
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub expected: ArgumentType,
}

/// Ordered schema of construction arguments
///
/// Declaration order is the validation order, so the first mismatch
/// reported is always the first declared one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentSchema {
    arguments: Vec<ArgumentSpec>,
}

impl ArgumentSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an argument (builder pattern). Redeclaring a name replaces its type.
    pub fn with(mut self, name: impl Into<String>, expected: ArgumentType) -> Self {
        let name = name.into();
        match self.arguments.iter_mut().find(|a| a.name == name) {
            Some(existing) => existing.expected = expected,
            None => self.arguments.push(ArgumentSpec { name, expected }),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<ArgumentType> {
        self.arguments
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.expected)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ArgumentSpec> {
        self.arguments.iter()
    }

    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    /// Check supplied arguments against the schema.
    ///
    /// Returns only the declared, non-null arguments. Undeclared names are
    /// dropped and `null` counts as omission.
    pub fn validate(
        &self,
        tool: ToolKind,
        args: &ToolArguments,
    ) -> Result<ToolArguments, ToolBuildError> {
        let mut validated = ToolArguments::with_capacity(self.arguments.len());

        for spec in &self.arguments {
            let Some(value) = args.get(&spec.name) else {
                continue;
            };

            let actual = ValueKind::of(value);
            if actual == ValueKind::Null {
                continue;
            }
            if !actual.satisfies(spec.expected) {
                return Err(ToolBuildError::InvalidArgumentType {
                    tool,
                    argument: spec.name.clone(),
                    expected: spec.expected,
                    actual,
                });
            }

            validated.insert(spec.name.clone(), value.clone());
        }

        Ok(validated)
    }
}

/// Credentials resolved from the environment, in declaration order
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    entries: Vec<(String, String)>,
}

impl Credentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Credentials keyed the way tool constructors receive them
    /// (`GITHUB_TOKEN` becomes `github_token`).
    pub fn as_arguments(&self) -> ToolArguments {
        self.entries
            .iter()
            .map(|(n, v)| (n.to_lowercase(), Value::String(v.clone())))
            .collect()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(n, _)| (n, "<redacted>")))
            .finish()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for Credentials {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut credentials = Credentials::new();
        for (name, value) in iter {
            credentials.insert(name, value);
        }
        credentials
    }
}

/// Why a tool was left out of an [`AvailableToolsSnapshot`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolDiagnostic {
    pub tool: ToolKind,
    pub error: ToolBuildError,
}

impl ToolDiagnostic {
    pub fn new(tool: ToolKind, error: ToolBuildError) -> Self {
        Self { tool, error }
    }
}

impl std::fmt::Display for ToolDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} skipped ({}): {}", self.tool, self.error.category(), self.error)
    }
}

/// Tools that could be built at a point in time
///
/// `tool_names` and `tool_instances` are index-aligned and follow catalog
/// order. A snapshot is never mutated after construction.
#[derive(Debug, Default)]
pub struct AvailableToolsSnapshot {
    tool_names: Vec<ToolKind>,
    tool_instances: Vec<ToolInstance>,
}

impl AvailableToolsSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = (ToolKind, ToolInstance)>) -> Self {
        let (tool_names, tool_instances): (Vec<ToolKind>, Vec<ToolInstance>) =
            pairs.into_iter().unzip();
        Self {
            tool_names,
            tool_instances,
        }
    }

    pub fn tool_names(&self) -> &[ToolKind] {
        &self.tool_names
    }

    pub fn tool_instances(&self) -> &[ToolInstance] {
        &self.tool_instances
    }

    pub fn len(&self) -> usize {
        self.tool_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tool_names.is_empty()
    }

    pub fn contains(&self, kind: ToolKind) -> bool {
        self.tool_names.contains(&kind)
    }

    pub fn get(&self, kind: ToolKind) -> Option<&dyn Tool> {
        self.tool_names
            .iter()
            .position(|k| *k == kind)
            .map(|i| self.tool_instances[i].as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (ToolKind, &dyn Tool)> {
        self.tool_names
            .iter()
            .copied()
            .zip(self.tool_instances.iter().map(|t| t.as_ref()))
    }

    pub fn into_instances(self) -> Vec<ToolInstance> {
        self.tool_instances
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(value: Value) -> ToolArguments {
        match value {
            Value::Object(map) => map.into_iter().collect(),
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_value_kind_of() {
        assert_eq!(ValueKind::of(&json!("x")), ValueKind::Text);
        assert_eq!(ValueKind::of(&json!(3)), ValueKind::Integer);
        assert_eq!(ValueKind::of(&json!(-3)), ValueKind::Integer);
        assert_eq!(ValueKind::of(&json!(3.5)), ValueKind::Float);
        assert_eq!(ValueKind::of(&json!(true)), ValueKind::Boolean);
        assert_eq!(ValueKind::of(&json!([1])), ValueKind::List);
        assert_eq!(ValueKind::of(&json!({"a": 1})), ValueKind::Mapping);
        assert_eq!(ValueKind::of(&Value::Null), ValueKind::Null);
    }

    #[test]
    fn test_no_coercion_between_kinds() {
        assert!(!ValueKind::Boolean.satisfies(ArgumentType::Integer));
        assert!(!ValueKind::Float.satisfies(ArgumentType::Integer));
        assert!(!ValueKind::Integer.satisfies(ArgumentType::Text));
        assert!(ValueKind::Integer.satisfies(ArgumentType::Integer));
    }

    #[test]
    fn test_validate_rejects_wrong_kind() {
        let schema = ArgumentSchema::new().with("file_path", ArgumentType::Text);
        let err = schema
            .validate(ToolKind::FileReadTool, &args(json!({"file_path": 123})))
            .unwrap_err();

        assert_eq!(
            err,
            ToolBuildError::InvalidArgumentType {
                tool: ToolKind::FileReadTool,
                argument: "file_path".to_string(),
                expected: ArgumentType::Text,
                actual: ValueKind::Integer,
            }
        );
    }

    #[test]
    fn test_validate_stops_at_first_declared_mismatch() {
        let schema = ArgumentSchema::new()
            .with("limit", ArgumentType::Integer)
            .with("cache", ArgumentType::Boolean);
        let err = schema
            .validate(
                ToolKind::SpiderTool,
                &args(json!({"cache": "yes", "limit": "ten"})),
            )
            .unwrap_err();

        assert!(matches!(
            err,
            ToolBuildError::InvalidArgumentType { ref argument, .. } if argument == "limit"
        ));
    }

    #[test]
    fn test_validate_drops_undeclared_and_null() {
        let schema = ArgumentSchema::new()
            .with("url", ArgumentType::Text)
            .with("query", ArgumentType::Text);
        let validated = schema
            .validate(
                ToolKind::FirecrawlSearchTool,
                &args(json!({"url": "https://example.com", "query": null, "extra": 1})),
            )
            .unwrap();

        assert_eq!(validated.len(), 1);
        assert_eq!(validated["url"], json!("https://example.com"));
    }

    #[test]
    fn test_schema_redeclare_replaces_type() {
        let schema = ArgumentSchema::new()
            .with("n", ArgumentType::Text)
            .with("n", ArgumentType::Integer);
        assert_eq!(schema.len(), 1);
        assert_eq!(schema.get("n"), Some(ArgumentType::Integer));
    }

    #[test]
    fn test_credentials_debug_is_redacted() {
        let credentials: Credentials = [("EXA_API_KEY", "secret-value")].into_iter().collect();
        let debug = format!("{:?}", credentials);
        assert!(debug.contains("EXA_API_KEY"));
        assert!(!debug.contains("secret-value"));
    }

    #[test]
    fn test_credentials_as_arguments_lowercases_names() {
        let credentials: Credentials = [("GITHUB_TOKEN", "t")].into_iter().collect();
        let arguments = credentials.as_arguments();
        assert_eq!(arguments["github_token"], json!("t"));
    }
}
