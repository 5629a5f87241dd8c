//! `--arg KEY=VALUE` parsing

use humanoid_domain::ToolArguments;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ArgumentParseError {
    #[error("expected KEY=VALUE, got '{0}'")]
    MissingSeparator(String),

    #[error("argument name must not be empty")]
    EmptyKey,
}

/// Split `KEY=VALUE` at the first `=`.
///
/// The value is read as JSON when it parses (`5`, `true`, `["a"]`, `null`)
/// and kept as text otherwise, so `path=README.md` needs no quoting.
pub fn parse_argument(raw: &str) -> Result<(String, Value), ArgumentParseError> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| ArgumentParseError::MissingSeparator(raw.to_string()))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(ArgumentParseError::EmptyKey);
    }

    let value =
        serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

/// Collect parsed pairs into an argument bag. Later duplicates win.
pub fn into_tool_arguments(pairs: Vec<(String, Value)>) -> ToolArguments {
    pairs.into_iter().collect()
}
