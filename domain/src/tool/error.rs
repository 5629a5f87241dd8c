//! Tool construction errors
//!
//! [`ToolBuildError`] is the full rejection taxonomy of the factory. Every
//! failure to produce a tool instance is exactly one of its four variants;
//! there is no catch-all.

use thiserror::Error;

use super::kind::ToolKind;
use super::value_objects::{ArgumentType, ValueKind};

/// Error raised by a tool's own constructor
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    /// A construction argument with no usable default was not supplied
    #[error("missing required argument '{0}'")]
    MissingArgument(String),

    /// None of a set of alternative arguments was supplied
    #[error("expected at least one of: {}", .0.join(", "))]
    MissingAnyArgument(Vec<String>),

    /// An argument had the right kind but an unusable value
    #[error("invalid value for '{name}': {reason}")]
    InvalidValue { name: String, reason: String },

    /// The constructor panicked
    #[error("constructor panicked: {0}")]
    Panicked(String),

    #[error("{0}")]
    Other(String),
}

/// Rejection returned by the tool factory
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolBuildError {
    /// No descriptor is registered for the identifier
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// A required credential is absent from the environment
    #[error("{tool} tool cannot be initialized: missing {credential}")]
    MissingCredential { tool: ToolKind, credential: String },

    /// A supplied argument has the wrong kind
    #[error(
        "Invalid type for argument '{argument}' of {tool}: expected {expected}, got {actual}"
    )]
    InvalidArgumentType {
        tool: ToolKind,
        argument: String,
        expected: ArgumentType,
        actual: ValueKind,
    },

    /// The tool's own constructor rejected the configuration
    #[error("{tool} construction failed: {source}")]
    ConstructionFailed {
        tool: ToolKind,
        #[source]
        source: ConstructionError,
    },
}

impl ToolBuildError {
    /// Stable label for logs and machine-readable output
    pub fn category(&self) -> &'static str {
        match self {
            ToolBuildError::UnknownTool(_) => "unknown_tool",
            ToolBuildError::MissingCredential { .. } => "missing_credential",
            ToolBuildError::InvalidArgumentType { .. } => "invalid_argument_type",
            ToolBuildError::ConstructionFailed { .. } => "construction_failed",
        }
    }

    /// The tool this error refers to, when it names a registered kind
    pub fn tool(&self) -> Option<ToolKind> {
        match self {
            ToolBuildError::UnknownTool(_) => None,
            ToolBuildError::MissingCredential { tool, .. }
            | ToolBuildError::InvalidArgumentType { tool, .. }
            | ToolBuildError::ConstructionFailed { tool, .. } => Some(*tool),
        }
    }

    pub fn is_missing_credential(&self) -> bool {
        matches!(self, ToolBuildError::MissingCredential { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_display() {
        let err = ToolBuildError::MissingCredential {
            tool: ToolKind::ExaSearchTool,
            credential: "EXA_API_KEY".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "exa_search_tool tool cannot be initialized: missing EXA_API_KEY"
        );
        assert_eq!(err.category(), "missing_credential");
        assert!(err.is_missing_credential());
    }

    #[test]
    fn test_invalid_argument_display() {
        let err = ToolBuildError::InvalidArgumentType {
            tool: ToolKind::FileReadTool,
            argument: "file_path".to_string(),
            expected: ArgumentType::Text,
            actual: ValueKind::Integer,
        };
        assert!(err.to_string().contains("expected text, got integer"));
        assert_eq!(err.tool(), Some(ToolKind::FileReadTool));
    }

    #[test]
    fn test_construction_failed_keeps_source() {
        use std::error::Error as _;

        let err = ToolBuildError::ConstructionFailed {
            tool: ToolKind::Nl2sqlTool,
            source: ConstructionError::MissingArgument("db_uri".to_string()),
        };
        assert!(err.to_string().contains("missing required argument 'db_uri'"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_unknown_tool_has_no_kind() {
        let err = ToolBuildError::UnknownTool("nope".to_string());
        assert_eq!(err.tool(), None);
        assert_eq!(err.category(), "unknown_tool");
    }

    #[test]
    fn test_missing_any_argument_lists_alternatives() {
        let err = ConstructionError::MissingAnyArgument(vec!["app".into(), "action".into()]);
        assert_eq!(err.to_string(), "expected at least one of: app, action");
    }
}
