//! JSONL file writer for tool diagnostics.
//!
//! Each [`ToolDiagnostic`] is serialized as a single JSON line with a
//! `type` field and `timestamp`, appended to the file via a buffered writer.

use humanoid_application::ToolDiagnosticsSink;
use humanoid_domain::{ToolBuildError, ToolDiagnostic};
use serde_json::{Value, json};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// JSONL diagnostics logger that writes one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes on `Drop`.
pub struct JsonlDiagnosticsLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlDiagnosticsLogger {
    /// Create a new logger writing to the given path.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    /// Returns `None` if the file cannot be created.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create diagnostics log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match File::create(path) {
            Ok(f) => f,
            Err(e) => {
                warn!(
                    "Could not create diagnostics log file {}: {}",
                    path.display(),
                    e
                );
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Variant-specific fields of a build error
fn error_fields(error: &ToolBuildError) -> Value {
    match error {
        ToolBuildError::UnknownTool(name) => json!({ "name": name }),
        ToolBuildError::MissingCredential { credential, .. } => {
            json!({ "credential": credential })
        }
        ToolBuildError::InvalidArgumentType {
            argument,
            expected,
            actual,
            ..
        } => json!({
            "argument": argument,
            "expected": expected,
            "actual": actual,
        }),
        ToolBuildError::ConstructionFailed { source, .. } => {
            json!({ "reason": source.to_string() })
        }
    }
}

impl ToolDiagnosticsSink for JsonlDiagnosticsLogger {
    fn record(&self, diagnostic: &ToolDiagnostic) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let record = json!({
            "type": "tool_unavailable",
            "timestamp": timestamp,
            "tool": diagnostic.tool,
            "category": diagnostic.error.category(),
            "message": diagnostic.error.to_string(),
            "details": error_fields(&diagnostic.error),
        });

        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlDiagnosticsLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use humanoid_domain::{ArgumentType, ConstructionError, ToolKind, ValueKind};
    use std::io::Read;

    fn read_lines(path: &Path) -> Vec<Value> {
        let mut content = String::new();
        File::open(path)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        content
            .trim()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_jsonl_logger_writes_valid_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tools.diagnostics.jsonl");
        let logger = JsonlDiagnosticsLogger::new(&path).unwrap();

        logger.record(&ToolDiagnostic::new(
            ToolKind::ExaSearchTool,
            ToolBuildError::MissingCredential {
                tool: ToolKind::ExaSearchTool,
                credential: "EXA_API_KEY".to_string(),
            },
        ));
        logger.record(&ToolDiagnostic::new(
            ToolKind::PgSearchTool,
            ToolBuildError::ConstructionFailed {
                tool: ToolKind::PgSearchTool,
                source: ConstructionError::MissingArgument("db_uri".to_string()),
            },
        ));

        // Flush
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        for line in &lines {
            assert_eq!(line["type"], "tool_unavailable");
            assert!(line.get("timestamp").is_some());
        }

        assert_eq!(lines[0]["tool"], "exa_search_tool");
        assert_eq!(lines[0]["category"], "missing_credential");
        assert_eq!(lines[0]["details"]["credential"], "EXA_API_KEY");

        assert_eq!(lines[1]["tool"], "pg_search_tool");
        assert_eq!(
            lines[1]["details"]["reason"],
            "missing required argument 'db_uri'"
        );
    }

    #[test]
    fn test_invalid_argument_details() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("diag.jsonl");
        let logger = JsonlDiagnosticsLogger::new(&path).unwrap();
        assert_eq!(logger.path(), path.as_path());

        logger.record(&ToolDiagnostic::new(
            ToolKind::FileReadTool,
            ToolBuildError::InvalidArgumentType {
                tool: ToolKind::FileReadTool,
                argument: "file_path".to_string(),
                expected: ArgumentType::Text,
                actual: ValueKind::Integer,
            },
        ));
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines[0]["details"]["expected"], "text");
        assert_eq!(lines[0]["details"]["actual"], "integer");
    }

    #[test]
    fn test_jsonl_logger_returns_none_for_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened as a file
        assert!(JsonlDiagnosticsLogger::new(dir.path()).is_none());
    }
}
