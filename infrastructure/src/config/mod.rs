//! Configuration file loading for humanoid
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `HUMANOID_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./humanoid.toml` or `./.humanoid.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/humanoid/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{FileConfig, FileOutputConfig, FileToolsConfig};
pub use loader::ConfigLoader;
