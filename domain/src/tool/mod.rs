//! Tool domain module
//!
//! This module defines the **tool registry**: which tool kinds exist, what
//! each one needs before it can be constructed, and the validated shapes
//! that flow between the catalog, the factory and the aggregator.
//!
//! # Overview
//!
//! ```text
//! ┌──────────────┐    ┌────────────────┐    ┌──────────────┐
//! │ ToolCatalog  │───▶│ ToolDescriptor │───▶│ ToolInstance │
//! │ (registry)   │    │ (declaration)  │    │ (opaque)     │
//! └──────────────┘    └───────┬────────┘    └──────────────┘
//!                             │
//!                             ├─ required_credentials: ["EXA_API_KEY"]
//!                             ├─ argument_schema:      {"file_path": text}
//!                             └─ constructor:          ToolConstructor
//! ```
//!
//! Adding a tool is a data change: register another [`ToolDescriptor`].
//! The validation routine is the same for every kind.
//!
//! # Validation Order
//!
//! | Step | Check | Rejection |
//! |------|-------|-----------|
//! | 1 | Descriptor lookup | `UnknownTool` |
//! | 2 | Required credentials, declared order, first missing only | `MissingCredential` |
//! | 3 | Supplied argument kinds, declared order, first mismatch only | `InvalidArgumentType` |
//! | 4 | Delegated constructor | `ConstructionFailed` |
//!
//! Steps 2 and 3 live in the application layer's `ToolFactory`, which owns
//! the environment port. Everything here is pure and performs no I/O.
//!
//! # Key Types
//!
//! - [`ToolKind`]: closed set of tool identifiers
//! - [`ToolCatalog`]: ordered kind → descriptor table
//! - [`ToolDescriptor`]: credentials, argument schema and constructor of one kind
//! - [`ArgumentSchema`](value_objects::ArgumentSchema): declared argument kinds
//! - [`AvailableToolsSnapshot`](value_objects::AvailableToolsSnapshot): result of aggregation
//! - [`ToolBuildError`]: the four-way rejection taxonomy

pub mod entities;
pub mod error;
pub mod kind;
pub mod traits;
pub mod value_objects;

pub use entities::{ToolCatalog, ToolDescriptor};
pub use error::{ConstructionError, ToolBuildError};
pub use kind::ToolKind;
pub use traits::{Tool, ToolConstructor, ToolInstance};
pub use value_objects::{
    ArgumentSchema, ArgumentSpec, ArgumentType, AvailableToolsSnapshot, Credentials,
    ToolArguments, ToolDiagnostic, ValueKind,
};
