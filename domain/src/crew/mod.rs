//! Crew configuration
//!
//! A crew configuration is the structured document produced by the
//! natural-language step: agents, the tasks they perform, and the tools each
//! task needs by name. This module only models and checks it; running a crew
//! belongs to the execution engine.

pub mod entities;

pub use entities::{AgentConfig, AgentReference, CrewConfig, CrewSettings, InputConfig, TaskConfig};
