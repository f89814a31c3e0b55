//! HTTP API module
//! 
//! This module contains all HTTP endpoint handlers and response structures.

pub mod error;
pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

pub use error::ApiError;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/session", get(status_handler))
        .route("/session/start", post(start_handler))
        .route("/session/pause", post(pause_handler))
        .route("/session/stop", post(stop_handler))
        .route("/session/reset", post(reset_handler))
        .route("/settings", get(get_settings_handler).put(put_settings_handler))
        .route("/focus/sites", get(get_preferences_handler).post(add_site_handler))
        .route("/focus/sites/:site", delete(remove_site_handler))
        .route("/focus/sound", put(sound_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
