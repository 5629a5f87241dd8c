//! Application layer for humanoid
//!
//! This crate contains use cases and port definitions for the tool registry.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    credentials::{CredentialResolver, NoCredentials, StaticCredentials},
    tool_diagnostics::{
        CollectingDiagnostics, CompositeDiagnosticsSink, NoDiagnostics, ToolDiagnosticsSink,
    },
};
pub use use_cases::build_tool::ToolFactory;
pub use use_cases::collect_available::CollectAvailableToolsUseCase;
pub use use_cases::resolve_crew_tools::{
    ResolveCrewToolsError, ResolveCrewToolsUseCase, ResolvedCrewTools, ResolvedTaskTools,
};
