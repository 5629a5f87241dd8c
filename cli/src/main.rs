//! CLI entrypoint for humanoid
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use humanoid_application::{
    CollectAvailableToolsUseCase, CollectingDiagnostics, CompositeDiagnosticsSink,
    ResolveCrewToolsUseCase, ToolDiagnosticsSink, ToolFactory,
};
use humanoid_domain::{ConfigIssue, CrewConfig};
use humanoid_infrastructure::{
    ConfigLoader, FileConfig, JsonlDiagnosticsLogger, ProcessEnvironment, TracingDiagnostics,
    shared_catalog,
};
use humanoid_presentation::{
    Cli, Command, CrewCheckReport, CrewCommand, OutputFormat, OutputFormatter, ToolsCommand,
    formatter_for, into_tool_arguments, set_color_enabled,
};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(ExitCode::SUCCESS);
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };
    for issue in config.validate() {
        warn!("{}", issue);
    }

    set_color_enabled(config.output.color);
    let format = cli
        .output
        .or(config.output.format.map(OutputFormat::from))
        .unwrap_or(OutputFormat::Text);
    let formatter = formatter_for(format);

    let Some(command) = cli.command else {
        bail!("No command given. Run `humanoid --help` for usage.");
    };

    // === Dependency Injection ===
    let catalog = Arc::new(config.tools.apply(&shared_catalog()));
    info!(tools = catalog.len(), "Tool catalog ready");
    let factory = ToolFactory::new(catalog, Arc::new(ProcessEnvironment));

    match command {
        Command::Tools(ToolsCommand::List) => {
            println!("{}", formatter.format_catalog(factory.catalog()));
        }
        Command::Tools(ToolsCommand::Describe { tool }) => {
            let descriptor = factory.catalog().lookup_name(&tool)?;
            println!("{}", formatter.format_descriptor(descriptor));
        }
        Command::Tools(ToolsCommand::Available { concurrent }) => {
            available(factory, &config, concurrent, formatter.as_ref()).await;
        }
        Command::Tools(ToolsCommand::Build { tool, args }) => {
            match factory.build_by_name(&tool, &into_tool_arguments(args)) {
                Ok(instance) => println!("{}", formatter.format_built(instance.as_ref())),
                Err(error) => {
                    println!("{}", formatter.format_build_error(&tool, &error));
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Command::Crew(CrewCommand::Check { file }) => {
            if !crew_check(factory, &file, formatter.as_ref())? {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

async fn available(
    factory: ToolFactory,
    config: &FileConfig,
    concurrent: bool,
    formatter: &dyn OutputFormatter,
) {
    let collected = Arc::new(CollectingDiagnostics::new());
    let mut sinks: Vec<Arc<dyn ToolDiagnosticsSink>> =
        vec![Arc::new(TracingDiagnostics), collected.clone()];
    if let Some(logger) = config
        .tools
        .diagnostics_log_path()
        .and_then(JsonlDiagnosticsLogger::new)
    {
        info!("Writing tool diagnostics to {}", logger.path().display());
        sinks.push(Arc::new(logger));
    }

    let use_case = CollectAvailableToolsUseCase::new(factory)
        .with_diagnostics(Arc::new(CompositeDiagnosticsSink::new(sinks)));

    let snapshot = if concurrent || config.tools.concurrent {
        use_case.execute_concurrent().await
    } else {
        use_case.execute()
    };

    println!(
        "{}",
        formatter.format_available(&snapshot, &collected.take())
    );
}

fn crew_check(factory: ToolFactory, path: &Path, formatter: &dyn OutputFormatter) -> Result<bool> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read crew file {}", path.display()))?;
    let crew: CrewConfig = serde_json::from_str(&content)
        .with_context(|| format!("Invalid crew file {}", path.display()))?;

    let issues = crew.validate();
    let tools = if issues.iter().any(ConfigIssue::is_error) {
        None
    } else {
        Some(ResolveCrewToolsUseCase::new(factory).execute(&crew))
    };

    let report = CrewCheckReport {
        path,
        issues: &issues,
        tools: tools.as_ref(),
    };
    println!("{}", formatter.format_crew_check(&report));

    Ok(report.is_ok())
}
