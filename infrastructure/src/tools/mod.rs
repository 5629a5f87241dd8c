//! Built-in tool catalog and constructors
//!
//! This module provides the concrete catalog the application ships with:
//!
//! - `catalog`: one descriptor per [`ToolKind`](humanoid_domain::ToolKind),
//!   plus the process-wide shared instance
//! - `configured`: the constructor every built-in descriptor delegates to,
//!   and the [`ConfiguredTool`] instances it produces

mod catalog;
mod configured;

pub use catalog::{builtin_catalog, shared_catalog};
pub use configured::{ArgumentRequirement, ConfiguredTool, ConfiguredToolConstructor};
