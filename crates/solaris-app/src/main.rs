//! Solaris application binary - composition root.
//!
//! Ties together all Solaris crates into a single executable:
//! 1. Parse CLI arguments and load configuration from TOML
//! 2. Initialize logging
//! 3. Open the SQLite catalog, run migrations and seed reference data
//! 4. Build the chat orchestrator
//! 5. Serve the axum REST API, or chat on the console with `--console`

mod cli;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use solaris_api::routes;
use solaris_api::state::AppState;
use solaris_chat::{ChatOrchestrator, START_COMMAND};
use solaris_core::config::SolarisConfig;
use solaris_storage::{seed_if_empty, CatalogRepository, Database};

use cli::CliArgs;

/// Session key of the single console user.
const CONSOLE_USER: &str = "console";

/// Expand ~ to home directory in a path string.
fn resolve_data_dir(data_dir: &str) -> PathBuf {
    if let Some(rest) = data_dir
        .strip_prefix("~/")
        .or_else(|| data_dir.strip_prefix("~\\"))
    {
        let home = cli::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(rest)
    } else {
        PathBuf::from(data_dir)
    }
}

/// Read stdin lines as chat turns and print each reply.
async fn console_loop(orchestrator: Arc<ChatOrchestrator>) -> Result<(), Box<dyn std::error::Error>> {
    let greeting = orchestrator.start(CONSOLE_USER)?;
    println!("{}\n", greeting.text);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match orchestrator.handle_message(CONSOLE_USER, &line) {
            Ok(reply) => println!("{}\n", reply.text),
            Err(e) => tracing::warn!(error = %e, "Message rejected"),
        }
    }

    tracing::info!("Console input closed");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config is read before tracing so the file's log level can apply.
    let config_file = args.resolve_config_path();
    let loaded = SolarisConfig::load(&config_file);
    let mut config = loaded.as_ref().cloned().unwrap_or_default();

    // Tracing: RUST_LOG > --log-level > config.
    let level = args
        .resolve_log_level()
        .unwrap_or_else(|| config.general.log_level.clone());
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&level)),
        )
        .init();

    tracing::info!("Starting Solaris v{}", env!("CARGO_PKG_VERSION"));
    match &loaded {
        Ok(_) => tracing::info!(path = %config_file.display(), "Configuration loaded"),
        Err(e) => tracing::warn!(
            path = %config_file.display(),
            error = %e,
            "Failed to load config, using defaults"
        ),
    }

    if let Some(dir) = args.resolve_data_dir() {
        config.general.data_dir = dir;
    }
    config.server.port = args.resolve_port(config.server.port);

    // Storage.
    let data_dir = resolve_data_dir(&config.general.data_dir);
    let db_path = data_dir.join(&config.storage.db_file);
    let db = Arc::new(Database::new(&db_path)?);
    tracing::info!(path = %db_path.display(), "Catalog database ready");

    if config.storage.seed_if_empty && seed_if_empty(&db)? {
        tracing::info!("Empty catalog populated with reference data");
    }

    // Chat engine.
    let gateway = Arc::new(CatalogRepository::new(db));
    let orchestrator = Arc::new(ChatOrchestrator::new(gateway, config.chat.clone()));

    if args.console {
        tracing::info!(user = CONSOLE_USER, "Console mode, type {} to reset", START_COMMAND);
        return console_loop(orchestrator).await;
    }

    // === API server ===

    let state = AppState::new(orchestrator, config.server.clone());
    if let Err(e) = routes::start_server(&config.server, state).await {
        tracing::error!(
            addr = %format!("{}:{}", config.server.host, config.server.port),
            error = %e,
            "API server failed"
        );
        return Err(e.into());
    }

    Ok(())
}
