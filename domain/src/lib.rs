//! Domain layer for humanoid
//!
//! This crate contains the tool registry's entities and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Tool Catalog
//!
//! A closed set of tool kinds ([`ToolKind`]), each declared once by a
//! [`ToolDescriptor`]: the credentials it needs, the kinds of the arguments it
//! accepts, and the constructor that builds it.
//!
//! ## Crew Configuration
//!
//! The structured description of agents and tasks that names tools by their
//! identifier ([`CrewConfig`]).

pub mod config;
pub mod crew;
pub mod tool;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use crew::{AgentConfig, AgentReference, CrewConfig, CrewSettings, InputConfig, TaskConfig};
pub use tool::{
    entities::{ToolCatalog, ToolDescriptor},
    error::{ConstructionError, ToolBuildError},
    kind::ToolKind,
    traits::{Tool, ToolConstructor, ToolInstance},
    value_objects::{
        ArgumentSchema, ArgumentSpec, ArgumentType, AvailableToolsSnapshot, Credentials,
        ToolArguments, ToolDiagnostic, ValueKind,
    },
};
