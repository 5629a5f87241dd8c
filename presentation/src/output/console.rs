//! Console output formatter

use crate::output::formatter::{CrewCheckReport, OutputFormatter};
use colored::Colorize;
use humanoid_domain::{
    AvailableToolsSnapshot, ConfigIssue, Severity, Tool, ToolBuildError, ToolCatalog,
    ToolDescriptor, ToolDiagnostic,
};

/// Formats command results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    fn header(title: &str) -> String {
        format!("{}\n", format!("=== {} ===", title).cyan().bold())
    }

    fn credentials_line(descriptor: &ToolDescriptor) -> String {
        if descriptor.required_credentials.is_empty() {
            "none".dimmed().to_string()
        } else {
            descriptor.required_credentials.join(", ")
        }
    }

    fn issue_line(issue: &ConfigIssue) -> String {
        match issue.severity {
            Severity::Error => format!("  {} {}\n", "error:".red().bold(), issue.message),
            Severity::Warning => format!("  {} {}\n", "warning:".yellow().bold(), issue.message),
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_catalog(&self, catalog: &ToolCatalog) -> String {
        let mut output = Self::header(&format!("Tool Catalog ({} tools)", catalog.len()));

        for descriptor in catalog.descriptors() {
            output.push_str(&format!(
                "\n{}  {}\n",
                descriptor.kind.as_str().yellow().bold(),
                descriptor.description
            ));
            output.push_str(&format!(
                "  {} {}\n",
                "credentials:".dimmed(),
                Self::credentials_line(descriptor)
            ));
            if !descriptor.argument_schema.is_empty() {
                output.push_str(&format!(
                    "  {} {}\n",
                    "arguments:".dimmed(),
                    descriptor.argument_schema.len()
                ));
            }
        }

        output
    }

    fn format_descriptor(&self, descriptor: &ToolDescriptor) -> String {
        let mut output = Self::header(descriptor.kind.as_str());

        output.push_str(&format!("\n{}\n\n", descriptor.description));
        output.push_str(&format!(
            "{} {}\n",
            "Credentials:".cyan().bold(),
            Self::credentials_line(descriptor)
        ));

        output.push_str(&format!("{}", "Arguments:".cyan().bold()));
        if descriptor.argument_schema.is_empty() {
            output.push_str(&format!(" {}\n", "none".dimmed()));
        } else {
            output.push('\n');
            for spec in descriptor.argument_schema.iter() {
                output.push_str(&format!("  {:<28} {}\n", spec.name, spec.expected));
            }
        }

        output
    }

    fn format_available(
        &self,
        snapshot: &AvailableToolsSnapshot,
        diagnostics: &[ToolDiagnostic],
    ) -> String {
        let mut output = Self::header(&format!(
            "Available Tools ({}/{})",
            snapshot.len(),
            snapshot.len() + diagnostics.len()
        ));

        for (kind, _) in snapshot.iter() {
            output.push_str(&format!("  {} {}\n", "+".green().bold(), kind));
        }

        if !diagnostics.is_empty() {
            output.push_str(&format!("\n{}\n", "Unavailable:".yellow().bold()));
            for diagnostic in diagnostics {
                output.push_str(&format!(
                    "  {} {} {}\n",
                    "-".red().bold(),
                    diagnostic.tool,
                    format!("({})", diagnostic.error).dimmed()
                ));
            }
        }

        output
    }

    fn format_built(&self, tool: &dyn Tool) -> String {
        format!(
            "{} {}\n  {}\n",
            "Built".green().bold(),
            tool.name().bold(),
            tool.description()
        )
    }

    fn format_build_error(&self, requested: &str, error: &ToolBuildError) -> String {
        format!(
            "{} {} {}\n  {}\n",
            "Cannot build".red().bold(),
            requested.bold(),
            format!("[{}]", error.category()).dimmed(),
            error
        )
    }

    fn format_crew_check(&self, report: &CrewCheckReport<'_>) -> String {
        let mut output = Self::header(&format!("Crew Check: {}", report.path.display()));

        if !report.issues.is_empty() {
            output.push('\n');
            for issue in report.issues {
                output.push_str(&Self::issue_line(issue));
            }
        }

        match report.tools {
            None => {
                output.push_str(&format!(
                    "\n{}\n",
                    "Tool resolution skipped because of errors above".dimmed()
                ));
            }
            Some(Ok(resolved)) => {
                output.push('\n');
                for task in &resolved.tasks {
                    let names = task
                        .tools
                        .iter()
                        .map(|t| t.name().to_string())
                        .collect::<Vec<_>>();
                    output.push_str(&format!(
                        "  tasks[{}] ({}): {}\n",
                        task.task_index,
                        task.agent_id,
                        if names.is_empty() {
                            "no tools".dimmed().to_string()
                        } else {
                            names.join(", ")
                        }
                    ));
                }
            }
            Some(Err(error)) => {
                output.push_str(&format!("\n  {} {}\n", "error:".red().bold(), error));
            }
        }

        let verdict = if report.is_ok() {
            "OK".green().bold()
        } else {
            "FAILED".red().bold()
        };
        output.push_str(&format!("\n{}\n", verdict));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use humanoid_application::{ResolveCrewToolsError, ResolvedCrewTools};
    use humanoid_domain::{
        ArgumentType, ConfigIssueCode, ConstructionError, Credentials, ToolArguments,
        ToolInstance, ToolKind,
    };
    use std::path::Path;

    fn descriptor(kind: ToolKind) -> ToolDescriptor {
        ToolDescriptor::new(
            kind,
            "Scrape a website",
            |_: &Credentials, _: &ToolArguments| -> Result<ToolInstance, ConstructionError> {
                Err(ConstructionError::Other("unused".to_string()))
            },
        )
    }

    #[test]
    fn test_descriptor_lists_credentials_and_arguments() {
        let output = ConsoleFormatter.format_descriptor(
            &descriptor(ToolKind::FirecrawlScrapeWebsiteTool)
                .with_credential("FIRECRAWL_API_KEY")
                .with_argument("url", ArgumentType::Text),
        );

        assert!(output.contains("firecrawl_scrape_website_tool"));
        assert!(output.contains("FIRECRAWL_API_KEY"));
        assert!(output.contains("url"));
        assert!(output.contains("text"));
    }

    #[test]
    fn test_available_counts_unavailable_tools() {
        let diagnostics = vec![ToolDiagnostic::new(
            ToolKind::SpiderTool,
            ToolBuildError::MissingCredential {
                tool: ToolKind::SpiderTool,
                credential: "SPIDER_API_KEY".to_string(),
            },
        )];

        let output =
            ConsoleFormatter.format_available(&AvailableToolsSnapshot::empty(), &diagnostics);
        assert!(output.contains("(0/1)"));
        assert!(output.contains("spider_tool"));
        assert!(output.contains("SPIDER_API_KEY"));
    }

    #[test]
    fn test_crew_check_verdict() {
        let issues = vec![ConfigIssue {
            severity: Severity::Error,
            code: ConfigIssueCode::UnknownAgent {
                task_index: 0,
                agent_id: "ghost".to_string(),
            },
            message: "tasks[0]: references unknown agent 'ghost'".to_string(),
        }];
        let report = CrewCheckReport {
            path: Path::new("crew.json"),
            issues: &issues,
            tools: None,
        };
        let output = ConsoleFormatter.format_crew_check(&report);
        assert!(output.contains("ghost"));
        assert!(output.contains("FAILED"));

        let resolved: Result<ResolvedCrewTools, ResolveCrewToolsError> =
            Ok(ResolvedCrewTools::default());
        let report = CrewCheckReport {
            path: Path::new("crew.json"),
            issues: &[],
            tools: Some(&resolved),
        };
        assert!(report.is_ok());
        assert!(ConsoleFormatter.format_crew_check(&report).contains("OK"));
    }
}
