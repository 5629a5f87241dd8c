//! CLI command definitions

use super::arguments::parse_argument;
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Value;
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, colored text
    Text,
    /// JSON output
    Json,
}

impl From<humanoid_domain::OutputFormat> for OutputFormat {
    fn from(format: humanoid_domain::OutputFormat) -> Self {
        match format {
            humanoid_domain::OutputFormat::Text => OutputFormat::Text,
            humanoid_domain::OutputFormat::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for humanoid
#[derive(Parser, Debug)]
#[command(name = "humanoid")]
#[command(author, version, about = "Tool registry for crew-based agents")]
#[command(long_about = r#"
Humanoid knows every tool a crew agent can be given, which environment
variables each one needs, and which arguments it accepts.

Tools are built on demand from the current environment. A tool whose
credentials are not set is left out of `tools available` and the reason is
reported instead.

Configuration files are loaded from (in priority order):
1. HUMANOID_* environment variables
2. --config <path>     Explicit config file
3. ./humanoid.toml     Project-level config
4. ~/.config/humanoid/config.toml   Global config

Nested keys use `__` in environment variables; lists may be comma-separated:
  HUMANOID_TOOLS__DISABLED=vision_tool,code_interpreter

Example:
  humanoid tools available
  humanoid tools build file_read_tool --arg file_path=README.md
  humanoid crew check crew.json
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (overrides [output].format)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Inspect and build tools
    #[command(subcommand)]
    Tools(ToolsCommand),

    /// Work with crew configuration files
    #[command(subcommand)]
    Crew(CrewCommand),
}

#[derive(Subcommand, Debug)]
pub enum ToolsCommand {
    /// List every tool in the catalog
    List,

    /// Show the credentials and arguments of one tool
    Describe {
        /// Tool identifier, e.g. `file_read_tool`
        tool: String,
    },

    /// Build every tool the current environment allows
    Available {
        /// Build tools in parallel (overrides [tools].concurrent)
        #[arg(long)]
        concurrent: bool,
    },

    /// Build a single tool
    Build {
        /// Tool identifier, e.g. `file_read_tool`
        tool: String,

        /// Construction argument; the value is parsed as JSON when it can be,
        /// otherwise taken as text (can be specified multiple times)
        #[arg(long = "arg", value_name = "KEY=VALUE", value_parser = parse_argument)]
        args: Vec<(String, Value)>,
    },
}

#[derive(Subcommand, Debug)]
pub enum CrewCommand {
    /// Validate a crew configuration and build every tool its tasks use
    Check {
        /// Path to the crew JSON file
        file: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_build_with_arguments() {
        let cli = Cli::try_parse_from([
            "humanoid",
            "tools",
            "build",
            "serper_dev_tool",
            "--arg",
            "n_results=5",
            "--arg",
            "country=us",
        ])
        .unwrap();

        match cli.command {
            Some(Command::Tools(ToolsCommand::Build { tool, args })) => {
                assert_eq!(tool, "serper_dev_tool");
                assert_eq!(
                    args,
                    vec![
                        ("n_results".to_string(), json!(5)),
                        ("country".to_string(), json!("us")),
                    ]
                );
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "humanoid",
            "tools",
            "available",
            "--concurrent",
            "-vv",
            "-o",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert!(matches!(
            cli.command,
            Some(Command::Tools(ToolsCommand::Available { concurrent: true }))
        ));
    }

    #[test]
    fn test_malformed_argument_is_rejected() {
        let result = Cli::try_parse_from(["humanoid", "tools", "build", "x", "--arg", "novalue"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_show_config_without_subcommand() {
        let cli = Cli::try_parse_from(["humanoid", "--show-config"]).unwrap();
        assert!(cli.show_config);
        assert!(cli.command.is_none());
    }
}
