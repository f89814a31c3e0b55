//! Main application state management

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tracing::{info, warn};

use super::{
    focus_session::{Command, SessionSnapshot, Transition},
    FocusPreferences, FocusTimer, SessionConfig,
};
use crate::{
    error::{FocusError, Result},
    utils::{format::format_uptime, prompts::random_prompt},
};

/// Application state shared by the HTTP handlers and background tasks
#[derive(Debug)]
pub struct AppState {
    /// The one active focus session
    pub timer: Arc<FocusTimer>,
    /// Sound toggle and blocked sites
    pub preferences: Arc<Mutex<FocusPreferences>>,
    /// Prompt chosen at startup
    pub prompt: &'static str,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
}

impl AppState {
    /// Create a new AppState with a fresh idle session
    pub fn new(port: u16, host: String, config: SessionConfig) -> Self {
        Self::with_timer(port, host, FocusTimer::new(config))
    }

    /// Create a new AppState around an existing session handle
    pub fn with_timer(port: u16, host: String, timer: Arc<FocusTimer>) -> Self {
        Self {
            timer,
            preferences: Arc::new(Mutex::new(FocusPreferences::new())),
            prompt: random_prompt(),
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
        }
    }

    /// Apply a session command and record it as the last action if it took effect
    pub fn apply_command(&self, command: Command) -> Result<(Transition, SessionSnapshot)> {
        let (transition, snapshot) = self.timer.apply(command)?;

        if transition.is_applied() {
            self.record_action(command.as_str());
        }

        Ok((transition, snapshot))
    }

    /// Stage new durations for the next start
    pub fn update_settings(&self, config: SessionConfig) -> Result<SessionSnapshot> {
        let snapshot = self.timer.update_config(config)?;
        self.record_action("settings");
        Ok(snapshot)
    }

    /// Get current session snapshot
    pub fn get_snapshot(&self) -> Result<SessionSnapshot> {
        self.timer.snapshot()
    }

    /// Get current preferences
    pub fn get_preferences(&self) -> Result<FocusPreferences> {
        self.preferences
            .lock()
            .map(|prefs| prefs.clone())
            .map_err(|_| FocusError::LockPoisoned("preferences"))
    }

    /// Update preferences and record the action
    pub fn update_preferences<T, F>(&self, action: &str, updater: F) -> Result<(T, FocusPreferences)>
    where
        F: FnOnce(&mut FocusPreferences) -> Result<T>,
    {
        let mut prefs = self
            .preferences
            .lock()
            .map_err(|_| FocusError::LockPoisoned("preferences"))?;

        let outcome = updater(&mut *prefs)?;
        let new_prefs = prefs.clone();
        drop(prefs); // Release the lock early

        self.record_action(action);
        Ok((outcome, new_prefs))
    }

    /// Toggle the completion chime
    pub fn set_sound(&self, enabled: bool) -> Result<FocusPreferences> {
        info!("Setting sound to: {}", enabled);
        self.update_preferences(if enabled { "sound-on" } else { "sound-off" }, |prefs| {
            prefs.sound_enabled = enabled;
            Ok(())
        })
        .map(|(_, prefs)| prefs)
    }

    /// Whether the completion chime is on
    pub fn sound_enabled(&self) -> bool {
        match self.preferences.lock() {
            Ok(prefs) => prefs.sound_enabled,
            Err(e) => {
                warn!("Failed to lock preferences, treating sound as disabled: {}", e);
                false
            }
        }
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        format_uptime(self.start_time.elapsed())
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }

    fn record_action(&self, action: &str) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
    }
}
