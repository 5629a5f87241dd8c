//! Infrastructure layer for humanoid
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the built-in tool catalog, the process
//! environment as a credential source, diagnostics sinks and
//! configuration file loading.

pub mod config;
pub mod environment;
pub mod logging;
pub mod tools;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileOutputConfig, FileToolsConfig};
pub use environment::ProcessEnvironment;
pub use logging::{JsonlDiagnosticsLogger, TracingDiagnostics};
pub use tools::{
    ArgumentRequirement, ConfiguredTool, ConfiguredToolConstructor, builtin_catalog,
    shared_catalog,
};
