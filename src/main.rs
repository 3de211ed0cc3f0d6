//! design-system-mcp: MCP server for a UI design-system catalog
//!
//! Serves design tokens, component specs and pattern guidance to AI
//! assistants, and generates CSS, Tailwind classes and markup skeletons
//! from them.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

use design_system_mcp::catalog::{CatalogStore, DirectoryScreenshots, DirectorySource};
use design_system_mcp::config::{self, Config};
use design_system_mcp::mcp::server::McpServer;
use design_system_mcp::mcp::tools::ToolContext;

/// MCP server for a UI design-system catalog.
///
/// Serves design tokens, component specs and pattern guidance, and
/// generates CSS, Tailwind classes and markup skeletons from them.
#[derive(Parser, Debug)]
#[command(name = "design-system-mcp")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(value_name = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease logging verbosity (only show errors)
    #[arg(short, long)]
    quiet: bool,
}

/// Determines the log level from CLI arguments.
#[allow(clippy::match_same_arms)] // Explicit "warn" arm for clarity
fn get_log_level(verbose: u8, quiet: bool, config_level: &str) -> Level {
    if quiet {
        return Level::ERROR;
    }

    match verbose {
        0 => match config_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::WARN,
        },
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialises the tracing subscriber for logging.
fn init_tracing(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Builds the tool context described by the configuration.
fn build_context(cfg: &Config) -> Result<ToolContext, String> {
    let store = match &cfg.catalog_path {
        Some(path) => CatalogStore::new(DirectorySource::new(path)),
        None => CatalogStore::embedded(),
    };

    info!(source = %store.source_description(), "Loading catalog");
    store.preload().map_err(|e| e.to_string())?;

    let defaults = cfg.generation.defaults().map_err(|e| e.to_string())?;
    let mut context = ToolContext::new(store).with_defaults(defaults);

    if let Some(path) = &cfg.screenshots_path {
        info!(path = %path.display(), "Serving screenshots");
        context = context.with_screenshots(DirectoryScreenshots::new(path));
    }

    Ok(context)
}

/// Entry point for the design-system-mcp server.
fn main() -> ExitCode {
    let args = Args::parse();

    // Load configuration
    let config_path = args.config.as_deref();
    let cfg = match config::load_config(config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            if config_path.is_none() {
                if let Some(default_path) = config::default_config_path() {
                    eprintln!("\nConfig read from: {}", default_path.display());
                    eprintln!("See config/example-config.json for the format");
                }
            }
            return ExitCode::FAILURE;
        }
    };

    // Initialise logging
    let log_level = get_log_level(args.verbose, args.quiet, &cfg.logging.level);
    init_tracing(log_level);

    eprintln!(
        "design-system-mcp {}  Copyright (C) 2026  The Embedded Society",
        env!("CARGO_PKG_VERSION")
    );
    eprintln!("This program comes with ABSOLUTELY NO WARRANTY.");
    eprintln!("This is free software, licensed under GPL-3.0-or-later.");
    eprintln!("Source: {}", env!("CARGO_PKG_REPOSITORY"));
    eprintln!();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting design-system-mcp server"
    );

    let context = match build_context(&cfg) {
        Ok(context) => context,
        Err(e) => {
            error!(error = %e, "Catalog failed to load");
            return ExitCode::FAILURE;
        }
    };

    let mut server = McpServer::new(context);

    info!("MCP server ready, waiting for client connection...");

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!(error = %e, "Failed to create Tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(server.run()) {
        Ok(()) => {
            info!("Server shut down gracefully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Server error");
            ExitCode::FAILURE
        }
    }
}
