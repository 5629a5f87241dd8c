//! JSON output formatter

use crate::output::formatter::{CrewCheckReport, OutputFormatter};
use humanoid_application::ResolveCrewToolsError;
use humanoid_domain::{
    AvailableToolsSnapshot, ConfigIssue, Severity, Tool, ToolBuildError, ToolCatalog,
    ToolDescriptor, ToolDiagnostic,
};
use serde_json::{Value, json};

/// Formats command results as pretty-printed JSON
pub struct JsonFormatter;

fn render(value: Value) -> String {
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
}

fn descriptor_json(descriptor: &ToolDescriptor) -> Value {
    json!({
        "name": descriptor.kind,
        "description": descriptor.description,
        "credentials": descriptor.required_credentials,
        "arguments": descriptor.argument_schema.iter().collect::<Vec<_>>(),
    })
}

fn error_json(error: &ToolBuildError) -> Value {
    json!({
        "category": error.category(),
        "message": error.to_string(),
    })
}

fn issue_json(issue: &ConfigIssue) -> Value {
    let severity = match issue.severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
    };
    json!({ "severity": severity, "message": issue.message })
}

impl OutputFormatter for JsonFormatter {
    fn format_catalog(&self, catalog: &ToolCatalog) -> String {
        render(Value::Array(
            catalog.descriptors().map(descriptor_json).collect(),
        ))
    }

    fn format_descriptor(&self, descriptor: &ToolDescriptor) -> String {
        render(descriptor_json(descriptor))
    }

    fn format_available(
        &self,
        snapshot: &AvailableToolsSnapshot,
        diagnostics: &[ToolDiagnostic],
    ) -> String {
        let unavailable = diagnostics
            .iter()
            .map(|d| {
                let mut entry = error_json(&d.error);
                entry["tool"] = json!(d.tool);
                entry
            })
            .collect::<Vec<_>>();

        render(json!({
            "tool_names": snapshot.tool_names(),
            "unavailable": unavailable,
        }))
    }

    fn format_built(&self, tool: &dyn Tool) -> String {
        render(json!({
            "built": true,
            "tool": tool.kind(),
            "name": tool.name(),
            "description": tool.description(),
        }))
    }

    fn format_build_error(&self, requested: &str, error: &ToolBuildError) -> String {
        let mut value = error_json(error);
        value["built"] = json!(false);
        value["tool"] = json!(requested);
        render(value)
    }

    fn format_crew_check(&self, report: &CrewCheckReport<'_>) -> String {
        let tools = match report.tools {
            None => Value::Null,
            Some(Ok(resolved)) => Value::Array(
                resolved
                    .tasks
                    .iter()
                    .map(|task| {
                        json!({
                            "task_index": task.task_index,
                            "agent": task.agent_id,
                            "tools": task.tools.iter().map(|t| t.kind()).collect::<Vec<_>>(),
                        })
                    })
                    .collect(),
            ),
            Some(Err(error)) => {
                let mut value = json!({ "error": error.to_string() });
                if let ResolveCrewToolsError::ToolUnavailable { source, .. } = error {
                    value["category"] = json!(source.category());
                }
                value
            }
        };

        render(json!({
            "path": report.path,
            "ok": report.is_ok(),
            "issues": report.issues.iter().map(issue_json).collect::<Vec<_>>(),
            "tools": tools,
        }))
    }
}
