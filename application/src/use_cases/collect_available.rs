//! Collect available tools use case
//!
//! Attempts to build every catalog entry with an empty argument bag and
//! returns the ones that succeed as an [`AvailableToolsSnapshot`]. This is the
//! "what can I use right now" view for the current environment.
//!
//! # Contract
//!
//! - Entries are attempted in catalog order and the snapshot keeps that order.
//! - Every failure goes to the [`ToolDiagnosticsSink`] and the tool is left
//!   out. No failure is ever returned to the caller.
//! - A fresh snapshot is built on every call; credentials may have changed.
//!
//! Tools whose constructors need an argument with no safe default (a
//! database URI, for instance) are still attempted and simply end up in the
//! diagnostics.

use crate::ports::tool_diagnostics::{NoDiagnostics, ToolDiagnosticsSink};
use crate::use_cases::build_tool::ToolFactory;
use humanoid_domain::{
    AvailableToolsSnapshot, ConstructionError, ToolArguments, ToolBuildError, ToolDiagnostic,
    ToolInstance, ToolKind,
};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{debug, info};

/// Use case for building every tool that the current environment allows.
pub struct CollectAvailableToolsUseCase {
    factory: ToolFactory,
    diagnostics: Arc<dyn ToolDiagnosticsSink>,
}

impl CollectAvailableToolsUseCase {
    pub fn new(factory: ToolFactory) -> Self {
        Self {
            factory,
            diagnostics: Arc::new(NoDiagnostics),
        }
    }

    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn ToolDiagnosticsSink>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Build all catalog entries one after another.
    ///
    /// A constructor that panics is reported as `ConstructionFailed` and
    /// the remaining entries are still attempted.
    pub fn execute(&self) -> AvailableToolsSnapshot {
        let empty = ToolArguments::new();
        let identifiers = self.factory.catalog().list_identifiers();
        let total = identifiers.len();

        let available = identifiers
            .into_iter()
            .filter_map(|kind| self.accept(kind, self.build_guarded(kind, &empty)))
            .collect::<Vec<_>>();

        let snapshot = AvailableToolsSnapshot::from_pairs(available);
        info!(available = snapshot.len(), total, "Collected available tools");
        snapshot
    }

    /// Build all catalog entries on the blocking thread pool, one task per
    /// identifier.
    ///
    /// Produces the same snapshot and the same diagnostics, in the same
    /// order, as [`execute`](Self::execute). A constructor that panics is
    /// reported as `ConstructionFailed`.
    pub async fn execute_concurrent(&self) -> AvailableToolsSnapshot {
        let identifiers = self.factory.catalog().list_identifiers();
        let total = identifiers.len();

        let handles = identifiers
            .into_iter()
            .map(|kind| {
                let factory = self.factory.clone();
                let handle = tokio::task::spawn_blocking(move || {
                    factory.build(kind, &ToolArguments::new())
                });
                (kind, handle)
            })
            .collect::<Vec<_>>();

        // Awaiting in spawn order keeps catalog order for both outputs.
        let mut available = Vec::with_capacity(total);
        for (kind, handle) in handles {
            let result = handle.await.unwrap_or_else(|e| {
                let message = match e.try_into_panic() {
                    Ok(payload) => panic_message(payload.as_ref()),
                    Err(e) => e.to_string(),
                };
                Err(panicked(kind, message))
            });
            if let Some(pair) = self.accept(kind, result) {
                available.push(pair);
            }
        }

        let snapshot = AvailableToolsSnapshot::from_pairs(available);
        info!(available = snapshot.len(), total, "Collected available tools");
        snapshot
    }

    fn build_guarded(
        &self,
        kind: ToolKind,
        args: &ToolArguments,
    ) -> Result<ToolInstance, ToolBuildError> {
        panic::catch_unwind(AssertUnwindSafe(|| self.factory.build(kind, args)))
            .unwrap_or_else(|payload| Err(panicked(kind, panic_message(payload.as_ref()))))
    }

    fn accept(
        &self,
        kind: ToolKind,
        result: Result<ToolInstance, ToolBuildError>,
    ) -> Option<(ToolKind, ToolInstance)> {
        match result {
            Ok(instance) => Some((kind, instance)),
            Err(error) => {
                debug!(tool = %kind, category = error.category(), "Tool unavailable");
                self.diagnostics.record(&ToolDiagnostic::new(kind, error));
                None
            }
        }
    }
}

fn panicked(kind: ToolKind, message: String) -> ToolBuildError {
    ToolBuildError::ConstructionFailed {
        tool: kind,
        source: ConstructionError::Panicked(message),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
