use ypg_server::{AppState, build_router, logger};
use ypg_session::{FileStorage, Latency, MockBackend, SessionMirror, SessionStore};
use ypg_store::PortalStore;

use std::error::Error;
use std::sync::Arc;

use chrono::Utc;
use log::{error, info};
use tokio::net::TcpListener;
use ypg_core::{Identity, MemberRecord};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = ypg_config::Config::load()?;
    config.validate()?;

    // Ensure log directory exists before the logger opens the file
    let log_file_path = config.log_file_path()?;
    if let Some(ref path) = log_file_path
        && let Some(dir) = path.parent()
    {
        std::fs::create_dir_all(dir)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting ypg-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Durable session mirror
    let storage_path = config.storage_path()?;
    info!("Session storage: {}", storage_path.display());
    let storage = FileStorage::open(storage_path)?;

    let backend = MockBackend::new(Latency::new(config.session.latency()));
    let session = SessionStore::hydrate(SessionMirror::new(Arc::new(storage)), Arc::new(backend))?;

    // A restored student joins the member list if the fixtures lack them
    let store = PortalStore::seeded();
    let current = session.current().await;
    if let Some(student) = current.as_ref().and_then(Identity::as_student)
        && store.members.find_by_id(&student.id).await.is_none()
    {
        store
            .members
            .upsert(MemberRecord::from_student(student, Utc::now().date_naive()))
            .await;
    }

    let app = build_router(AppState::new(session, store));

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {actual_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => error!("Failed to listen for SIGINT: {e}"),
    }
}
