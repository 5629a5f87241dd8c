//! Port for tool diagnostics.
//!
//! Defines the [`ToolDiagnosticsSink`] trait that receives one
//! [`ToolDiagnostic`] for every tool the aggregator could not build.
//!
//! Diagnostics never influence control flow: the aggregator records them and
//! moves on. They exist so that callers (and tests) can see *why* a tool is
//! missing from a snapshot.

use humanoid_domain::ToolDiagnostic;
use std::sync::{Arc, Mutex};

/// Port for recording why a tool was excluded from a snapshot.
///
/// The `record` method is synchronous and non-fallible; sink failures are
/// the sink's own business.
pub trait ToolDiagnosticsSink: Send + Sync {
    fn record(&self, diagnostic: &ToolDiagnostic);
}

/// No-op implementation for when diagnostics are not needed.
pub struct NoDiagnostics;

impl ToolDiagnosticsSink for NoDiagnostics {
    fn record(&self, _diagnostic: &ToolDiagnostic) {}
}

/// Keeps every diagnostic in memory, in the order received.
#[derive(Debug, Default)]
pub struct CollectingDiagnostics {
    diagnostics: Mutex<Vec<ToolDiagnostic>>,
}

impl CollectingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far
    pub fn diagnostics(&self) -> Vec<ToolDiagnostic> {
        self.diagnostics
            .lock()
            .map(|d| d.clone())
            .unwrap_or_default()
    }

    /// Remove and return everything recorded so far
    pub fn take(&self) -> Vec<ToolDiagnostic> {
        self.diagnostics
            .lock()
            .map(|mut d| std::mem::take(&mut *d))
            .unwrap_or_default()
    }
}

impl ToolDiagnosticsSink for CollectingDiagnostics {
    fn record(&self, diagnostic: &ToolDiagnostic) {
        if let Ok(mut diagnostics) = self.diagnostics.lock() {
            diagnostics.push(diagnostic.clone());
        }
    }
}

/// A sink that forwards every diagnostic to multiple inner sinks.
///
/// ```text
/// CollectAvailableToolsUseCase
///            |
///   +--------+---------+----------------------+
///   |                  |                      |
/// TracingDiagnostics  JsonlDiagnosticsLogger  CollectingDiagnostics
/// ```
#[derive(Default)]
pub struct CompositeDiagnosticsSink {
    delegates: Vec<Arc<dyn ToolDiagnosticsSink>>,
}

impl CompositeDiagnosticsSink {
    pub fn new(delegates: Vec<Arc<dyn ToolDiagnosticsSink>>) -> Self {
        Self { delegates }
    }

    pub fn with(mut self, sink: Arc<dyn ToolDiagnosticsSink>) -> Self {
        self.delegates.push(sink);
        self
    }
}

impl ToolDiagnosticsSink for CompositeDiagnosticsSink {
    fn record(&self, diagnostic: &ToolDiagnostic) {
        for d in &self.delegates {
            d.record(diagnostic);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use humanoid_domain::{ToolBuildError, ToolKind};

    fn diagnostic(tool: ToolKind) -> ToolDiagnostic {
        ToolDiagnostic::new(
            tool,
            ToolBuildError::MissingCredential {
                tool,
                credential: "EXA_API_KEY".to_string(),
            },
        )
    }

    #[test]
    fn test_collecting_keeps_order() {
        let sink = CollectingDiagnostics::new();
        sink.record(&diagnostic(ToolKind::ExaSearchTool));
        sink.record(&diagnostic(ToolKind::SpiderTool));

        let recorded = sink.diagnostics();
        assert_eq!(recorded.len(), 2);
        assert_eq!(recorded[0].tool, ToolKind::ExaSearchTool);
        assert_eq!(recorded[1].tool, ToolKind::SpiderTool);
    }

    #[test]
    fn test_take_drains() {
        let sink = CollectingDiagnostics::new();
        sink.record(&diagnostic(ToolKind::ExaSearchTool));
        assert_eq!(sink.take().len(), 1);
        assert!(sink.diagnostics().is_empty());
    }

    #[test]
    fn test_composite_fans_out() {
        let first = Arc::new(CollectingDiagnostics::new());
        let second = Arc::new(CollectingDiagnostics::new());
        let delegates: Vec<Arc<dyn ToolDiagnosticsSink>> = vec![first.clone(), second.clone()];
        let composite = CompositeDiagnosticsSink::new(delegates).with(Arc::new(NoDiagnostics));

        composite.record(&diagnostic(ToolKind::Browserbase));

        assert_eq!(first.diagnostics().len(), 1);
        assert_eq!(second.diagnostics().len(), 1);
    }
}
