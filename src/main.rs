//! Focus Timer - A state-managed HTTP daemon for focus/break sessions
//! 
//! This is the main entry point for the focus-timer application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use focus_timer::{
    config::Config,
    state::AppState,
    api::create_router,
    tasks::completion_notifier_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("focus_timer={},tower_http=info", config.log_level()))
        .init();

    let session_config = config.session_config()?;

    info!("Starting focus-timer server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, focus={}min, break={}min",
          config.host, config.port, config.focus_minutes, config.break_minutes);

    // Create application state with a fresh idle session
    let state = Arc::new(AppState::new(config.port, config.host.clone(), session_config));

    // Start the completion notifier background task
    let notifier_state = Arc::clone(&state);
    tokio::spawn(async move {
        completion_notifier_task(notifier_state).await;
    });

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET    /session           - Current session state and progress");
    info!("  POST   /session/start     - Start the idle phase");
    info!("  POST   /session/pause     - Pause or resume");
    info!("  POST   /session/stop      - Stop and rewind the current phase");
    info!("  POST   /session/reset     - Back to an idle focus phase");
    info!("  GET    /settings          - Phase durations");
    info!("  PUT    /settings          - Stage new durations for the next start");
    info!("  GET    /focus/sites       - Focus preferences");
    info!("  POST   /focus/sites       - Add a blocked site");
    info!("  DELETE /focus/sites/:site - Remove a blocked site");
    info!("  PUT    /focus/sound       - Toggle the completion chime");
    info!("  GET    /health            - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
