//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod build_tool;
pub mod collect_available;
pub mod resolve_crew_tools;
