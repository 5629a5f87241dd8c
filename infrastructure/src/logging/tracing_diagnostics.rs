//! Tool diagnostics as `tracing` events.

use humanoid_application::ToolDiagnosticsSink;
use humanoid_domain::ToolDiagnostic;
use tracing::warn;

/// Emits one warn-level event per excluded tool, with the tool and error
/// category as structured fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl ToolDiagnosticsSink for TracingDiagnostics {
    fn record(&self, diagnostic: &ToolDiagnostic) {
        warn!(
            tool = %diagnostic.tool,
            category = diagnostic.error.category(),
            "Error while initializing tool: {}",
            diagnostic.error
        );
    }
}
