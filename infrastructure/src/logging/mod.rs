//! Logging infrastructure: tool diagnostics sinks.
//!
//! Provides [`TracingDiagnostics`], which reports excluded tools through
//! `tracing`, and [`JsonlDiagnosticsLogger`], a JSONL file writer. Both
//! implement the [`ToolDiagnosticsSink`](humanoid_application::ToolDiagnosticsSink) port.

mod jsonl_diagnostics;
mod tracing_diagnostics;

pub use jsonl_diagnostics::JsonlDiagnosticsLogger;
pub use tracing_diagnostics::TracingDiagnostics;
