use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info, warn};

use user_api::{build_router, AppState};
use user_core::services::{BackupService, UserService};
use user_infrastructure::{FileBackupRepository, JsonFileUserRepository};
use user_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize telemetry
    user_shared::telemetry::init_telemetry(&config.log)?;

    info!("{} starting...", config.app.name);

    // Load the persisted store
    let storage = &config.storage;
    let user_repo = Arc::new(JsonFileUserRepository::new(&storage.data_file));
    let users = match UserService::load(user_repo).await {
        Ok(users) => users,
        Err(e) => {
            error!("Failed to load {}: {}", storage.data_file.display(), e);
            std::process::exit(1);
        }
    };
    if users.recovered_from_corrupt() {
        warn!("Serving from an empty store; {} will be overwritten on the next write", storage.data_file.display());
    }
    info!("Current user count: {}", users.count().await);
    info!("Data file: {}", storage.data_file.display());

    let backups = BackupService::new(Arc::new(FileBackupRepository::new(
        &storage.data_file,
        &storage.backup_dir,
        storage.backup_prefix.clone(),
    )));

    // Build router
    let app = build_router(AppState::new(users, backups));

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
}
