//! artha.bot backend entry point.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use artha_bot::api::{create_router, ApiDoc, AppState};
use artha_bot::config::Config;
use artha_bot::metrics;
use artha_bot::utils::{bind_listener, shutdown_signal};
use utoipa::OpenApi;

/// artha.bot ML robotics platform backend.
#[derive(Parser, Debug)]
#[command(name = "artha-bot")]
#[command(about = "Health/status API and frontend host for the artha.bot platform")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    serve: ServeArgs,
}

/// Overrides for the environment configuration.
#[derive(clap::Args, Debug, Default)]
struct ServeArgs {
    /// HTTP server port (overrides PORT).
    #[arg(short, long)]
    port: Option<u16>,

    /// Pre-built frontend directory (overrides STATIC_DIR).
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve(ServeArgs),

    /// Check configuration validity.
    CheckConfig,

    /// Print the OpenAPI document as JSON.
    Openapi,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration before logging so LOG_JSON/RUST_LOG apply
    let config = Config::load();

    // Initialize logging
    let (log_level, log_json) = match &config {
        Ok(c) => (c.rust_log.as_str(), c.log_json),
        Err(_) => ("info", false),
    };
    init_logging(args.verbose, log_level, log_json);

    let config = config.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(&config),
        Some(Command::Openapi) => cmd_openapi(),
        Some(Command::Serve(serve)) => cmd_serve(config, serve).await,
        None => cmd_serve(config, args.serve).await,
    }
}

fn init_logging(verbose: bool, level: &str, json: bool) {
    let filter = if verbose {
        EnvFilter::new("artha_bot=debug,info")
    } else {
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

/// Check configuration validity.
fn cmd_check_config(config: &Config) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("ARTHA.BOT - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Environment: {}", config.environment);
    println!("  Bind Address: {}", config.bind_addr());
    println!("  Static Dir: {}", config.static_dir.display());
    match config.static_root() {
        Some(root) if root.has_index() => println!("  Frontend: built"),
        Some(_) => println!("  Frontend: NOT BUILT (index.html missing)"),
        None => println!("  Frontend: disabled (directory missing, API only)"),
    }
    println!("  API Docs: {}", if config.api_docs { "Enabled" } else { "Disabled" });
    match config.metrics_addr() {
        Some(addr) => println!("  Metrics: {}", addr),
        None => println!("  Metrics: Disabled"),
    }
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Print the OpenAPI document.
fn cmd_openapi() -> anyhow::Result<()> {
    println!("{}", ApiDoc::openapi().to_pretty_json()?);
    Ok(())
}

/// Run the HTTP server until a shutdown signal arrives.
async fn cmd_serve(mut config: Config, overrides: ServeArgs) -> anyhow::Result<()> {
    // Override with CLI args if provided
    if let Some(port) = overrides.port {
        config.port = port;
    }
    if let Some(static_dir) = overrides.static_dir {
        config.static_dir = static_dir;
    }

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
    }

    // Initialize metrics
    metrics::init_metrics();
    if let Some(addr) = config.metrics_addr() {
        metrics::install_exporter(addr)?;
    }

    info!("Environment: {}", config.environment);
    let state = AppState::from_config(&config);
    if state.static_root.is_none() {
        warn!(
            "Static directory {} not found, serving API only",
            config.static_dir.display()
        );
    }
    if state.api_docs {
        info!("API docs available at /docs");
    }

    // Start HTTP server
    let listener = bind_listener(config.bind_addr()).await?;

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP server stopped");
    Ok(())
}
