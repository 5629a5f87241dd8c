//! Output formatter trait

use humanoid_application::{ResolveCrewToolsError, ResolvedCrewTools};
use humanoid_domain::{
    AvailableToolsSnapshot, ConfigIssue, Tool, ToolBuildError, ToolCatalog, ToolDescriptor,
    ToolDiagnostic,
};
use std::path::Path;

/// Everything `crew check` found out about one crew file
#[derive(Debug)]
pub struct CrewCheckReport<'a> {
    pub path: &'a Path,
    pub issues: &'a [ConfigIssue],
    /// `None` when validation errors prevented tool resolution
    pub tools: Option<&'a Result<ResolvedCrewTools, ResolveCrewToolsError>>,
}

impl CrewCheckReport<'_> {
    /// No error-level issue and every task's tools were built
    pub fn is_ok(&self) -> bool {
        !self.issues.iter().any(ConfigIssue::is_error)
            && matches!(self.tools, Some(Ok(_)))
    }
}

/// Trait for formatting command results
pub trait OutputFormatter {
    /// Every catalog entry, in catalog order
    fn format_catalog(&self, catalog: &ToolCatalog) -> String;

    /// One catalog entry in full
    fn format_descriptor(&self, descriptor: &ToolDescriptor) -> String;

    /// Available tools plus the reason each other tool was left out
    fn format_available(
        &self,
        snapshot: &AvailableToolsSnapshot,
        diagnostics: &[ToolDiagnostic],
    ) -> String;

    /// A successfully built tool
    fn format_built(&self, tool: &dyn Tool) -> String;

    /// Why a requested tool could not be built
    fn format_build_error(&self, requested: &str, error: &ToolBuildError) -> String;

    fn format_crew_check(&self, report: &CrewCheckReport<'_>) -> String;
}
