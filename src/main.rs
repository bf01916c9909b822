//! Hello World status service entry point.

use std::net::SocketAddr;

use clap::{Parser, Subcommand};
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use hello_status::api::{self, AppState};
use hello_status::config::Config;
use hello_status::status::{Metadata, StatusReporter};

/// Hello World status service.
#[derive(Parser, Debug)]
#[command(name = "hello-status")]
#[command(about = "Greeting, application info and health probe with process uptime")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// HTTP server port (overrides PORT).
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP service (default).
    Serve {
        /// HTTP server port (overrides PORT).
        #[arg(short, long)]
        port: Option<u16>,

        /// Directory of the dashboard bundle (overrides STATIC_DIR).
        #[arg(long)]
        static_dir: Option<String>,
    },

    /// Check configuration validity.
    CheckConfig,

    /// Print the application info document and exit.
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration before logging so RUST_LOG from .env applies
    let config = Config::load();

    // Initialize logging
    let verbose = args.verbose || config.as_ref().map(|c| c.verbose).unwrap_or(false);
    let filter = if verbose {
        EnvFilter::new("hello_status=debug,tower_http=debug,info")
    } else {
        let fallback = config
            .as_ref()
            .map(|c| c.rust_log.clone())
            .unwrap_or_else(|_| "info".to_string());
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let config = config.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(&config),
        Some(Command::Status) => cmd_status(&config),
        Some(Command::Serve { port, static_dir }) => {
            let mut config = config;
            if let Some(dir) = static_dir {
                config.static_dir = dir;
            }
            cmd_serve(config, port.or(args.port)).await
        }
        None => cmd_serve(config, args.port).await,
    }
}

/// Check configuration validity.
fn cmd_check_config(config: &Config) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("HELLO STATUS - CONFIGURATION CHECK");
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
    println!("  Version: {}", config.app_version);
    println!("  Mission: {}", config.mission().unwrap_or("(none)"));
    println!("  Port: {}", config.port);
    println!("  Static Dir: {}", config.static_dir);
    println!("  Log Level: {}", config.rust_log);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Print the info document as JSON.
fn cmd_status(config: &Config) -> anyhow::Result<()> {
    config.validate()?;
    let reporter = StatusReporter::new(Metadata::from_config(config));
    println!("{}", reporter.info_json()?);
    Ok(())
}

/// Run the HTTP service until shutdown.
async fn cmd_serve(mut config: Config, port_override: Option<u16>) -> anyhow::Result<()> {
    if let Some(port) = port_override {
        config.port = port;
    }

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
    }

    // Start time is captured here, once, for the life of the process
    let reporter = StatusReporter::new(Metadata::from_config(&config));
    info!("Version: {}", reporter.metadata().version);

    let mut app_state = AppState::new(reporter);
    match config.dashboard_dir() {
        Some(dir) => app_state = app_state.with_static_dir(dir),
        None => warn!(
            "Static directory {} not found, dashboard will not be served",
            config.static_dir
        ),
    }

    info!("Starting server on http://localhost:{}", config.port);
    if app_state.static_dir.is_some() {
        info!("Dashboard available at http://localhost:{}", config.port);
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    api::serve(addr, app_state).await?;
    Ok(())
}
