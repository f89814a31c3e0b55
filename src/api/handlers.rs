//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::{Path, State},
    response::Json,
};
use tracing::info;

use crate::state::{AppState, Command, SessionConfig};
use super::{
    error::ApiError,
    responses::{
        CommandResponse, HealthResponse, PreferencesResponse, SettingsBody, SettingsResponse,
        SiteRequest, SoundRequest, StatusResponse,
    },
};

type ApiResult<T> = Result<Json<T>, ApiError>;

/// Apply a command and wrap the outcome
fn run_command(state: &AppState, command: Command) -> ApiResult<CommandResponse> {
    let (transition, session) = state.apply_command(command)?;
    Ok(Json(CommandResponse::new(command, transition, session)))
}

/// Handle POST /session/start - Start the idle phase
pub async fn start_handler(State(state): State<Arc<AppState>>) -> ApiResult<CommandResponse> {
    run_command(&state, Command::Start)
}

/// Handle POST /session/pause - Toggle between running and paused
pub async fn pause_handler(State(state): State<Arc<AppState>>) -> ApiResult<CommandResponse> {
    run_command(&state, Command::Pause)
}

/// Handle POST /session/stop - Stop and rewind the current phase
pub async fn stop_handler(State(state): State<Arc<AppState>>) -> ApiResult<CommandResponse> {
    run_command(&state, Command::Stop)
}

/// Handle POST /session/reset - Back to an idle focus phase
pub async fn reset_handler(State(state): State<Arc<AppState>>) -> ApiResult<CommandResponse> {
    run_command(&state, Command::Reset)
}

/// Handle GET /session - Return current session and server status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> ApiResult<StatusResponse> {
    let session = state.get_snapshot()?;
    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        session,
        sound_enabled: state.sound_enabled(),
        prompt: state.prompt.to_string(),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /settings - Return phase durations
pub async fn get_settings_handler(State(state): State<Arc<AppState>>) -> ApiResult<SettingsResponse> {
    let session = state.get_snapshot()?;
    Ok(Json(SettingsResponse::from_snapshot(&session)))
}

/// Handle PUT /settings - Stage new phase durations for the next start
pub async fn put_settings_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SettingsBody>,
) -> ApiResult<SettingsResponse> {
    let config = SessionConfig::from_minutes(body.focus_minutes, body.break_minutes)?;
    let session = state.update_settings(config)?;

    info!(
        "Settings updated: focus={}min, break={}min",
        body.focus_minutes, body.break_minutes
    );
    Ok(Json(SettingsResponse::from_snapshot(&session)))
}

/// Handle GET /focus/sites - Return focus preferences
pub async fn get_preferences_handler(
    State(state): State<Arc<AppState>>,
) -> ApiResult<PreferencesResponse> {
    let preferences = state.get_preferences()?;
    Ok(Json(PreferencesResponse::new(false, preferences)))
}

/// Handle POST /focus/sites - Add a site to the blocked list
pub async fn add_site_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SiteRequest>,
) -> ApiResult<PreferencesResponse> {
    let (added, preferences) =
        state.update_preferences("add-site", |prefs| prefs.add_site(&body.site))?;

    if added {
        info!("Blocked site added: {}", body.site.trim());
    }
    Ok(Json(PreferencesResponse::new(added, preferences)))
}

/// Handle DELETE /focus/sites/:site - Remove a site from the blocked list
pub async fn remove_site_handler(
    State(state): State<Arc<AppState>>,
    Path(site): Path<String>,
) -> ApiResult<PreferencesResponse> {
    let (removed, preferences) =
        state.update_preferences("remove-site", |prefs| Ok(prefs.remove_site(&site)))?;
    Ok(Json(PreferencesResponse::new(removed, preferences)))
}

/// Handle PUT /focus/sound - Enable or disable the completion chime
pub async fn sound_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SoundRequest>,
) -> ApiResult<PreferencesResponse> {
    let preferences = state.set_sound(body.enabled)?;
    Ok(Json(PreferencesResponse::new(true, preferences)))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
