//! API request and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::{Command, FocusPreferences, SessionConfig, SessionSnapshot, Transition};

/// Response to a session command
#[derive(Debug, Clone, Serialize)]
pub struct CommandResponse {
    /// "applied" or "ignored"
    pub status: String,
    pub command: Command,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub session: SessionSnapshot,
}

impl CommandResponse {
    /// Create a response describing how the command was handled
    pub fn new(command: Command, transition: Transition, session: SessionSnapshot) -> Self {
        let (status, message) = match transition {
            Transition::Applied { from, to } => (
                "applied",
                format!("Session {} ({} -> {})", command.as_str(), from, to),
            ),
            Transition::Ignored => (
                "ignored",
                format!("{} has no effect while {}", command.as_str(), session.activity),
            ),
        };

        Self {
            status: status.to_string(),
            command,
            message,
            timestamp: Utc::now(),
            session,
        }
    }
}

/// Status response with session and server information
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub session: SessionSnapshot,
    pub sound_enabled: bool,
    pub prompt: String,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Phase durations in whole minutes, as edited on the settings screen
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SettingsBody {
    pub focus_minutes: u64,
    pub break_minutes: u64,
}

impl SettingsBody {
    /// Convert a config, rounding seconds down to whole minutes
    pub fn from_config(config: &SessionConfig) -> Self {
        Self {
            focus_minutes: config.focus_duration_seconds() / 60,
            break_minutes: config.break_duration_seconds() / 60,
        }
    }
}

/// Settings currently in effect and any change waiting for the next start
#[derive(Debug, Clone, Serialize)]
pub struct SettingsResponse {
    pub minutes: SettingsBody,
    pub active: SessionConfig,
    pub staged: Option<SessionConfig>,
    /// `staged` in the minutes form accepted by `PUT /settings`
    pub staged_minutes: Option<SettingsBody>,
    pub timestamp: DateTime<Utc>,
}

impl SettingsResponse {
    pub fn from_snapshot(snapshot: &SessionSnapshot) -> Self {
        Self {
            minutes: SettingsBody::from_config(&snapshot.config),
            active: snapshot.config,
            staged: snapshot.staged_config,
            staged_minutes: snapshot.staged_config.as_ref().map(SettingsBody::from_config),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteRequest {
    pub site: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SoundRequest {
    pub enabled: bool,
}

/// Preferences response after a change
#[derive(Debug, Clone, Serialize)]
pub struct PreferencesResponse {
    /// Whether the request changed anything
    pub changed: bool,
    pub preferences: FocusPreferences,
    pub timestamp: DateTime<Utc>,
}

impl PreferencesResponse {
    pub fn new(changed: bool, preferences: FocusPreferences) -> Self {
        Self {
            changed,
            preferences,
            timestamp: Utc::now(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
