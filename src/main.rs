// Main entry point - Dependency injection and server setup
use std::sync::Arc;

use celltower_dashboard::application::dashboard_service::DashboardService;
use celltower_dashboard::application::fleet_repository::FleetRepository;
use celltower_dashboard::domain::navigation::Navigation;
use celltower_dashboard::infrastructure::config::load_app_config;
use celltower_dashboard::infrastructure::fleet_store::InMemoryFleetStore;
use celltower_dashboard::presentation::app_state::AppState;
use celltower_dashboard::presentation::routes::router;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_app_config()?;

    // Create repository (infrastructure layer)
    let store = match &config.dashboard.dataset {
        Some(path) => {
            tracing::info!("Loading fleet dataset from {}", path.display());
            InMemoryFleetStore::from_path(path)?
        }
        None => InMemoryFleetStore::bundled()?,
    };
    let repository: Arc<dyn FleetRepository> = Arc::new(store);

    // Create services (application layer)
    let dashboard_service = DashboardService::new(repository, config.dashboard.due_soon_days);

    // Create application state
    let state = Arc::new(AppState {
        dashboard_service,
        navigation: Navigation::sidebar(),
    });

    // Build router (presentation layer)
    let app = router(state);

    // Start server
    let addr = config.server.bind_addr()?;
    tracing::info!("Starting celltower-dashboard on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;

    Ok(())
}
