//! State management module
//! 
//! This module contains the focus session state machine, the owned session
//! handle that drives it, and the application state shared with the API.

pub mod session_config;
pub mod session_state;
pub mod focus_session;
pub mod focus_timer;
pub mod preferences;
pub mod app_state;

// Re-export main types
pub use session_config::SessionConfig;
pub use session_state::{Activity, Phase, SessionState};
pub use focus_session::{Command, FocusSession, SessionSnapshot, TickOutcome, Transition};
pub use focus_timer::{FocusTimer, PhaseCompleted};
pub use preferences::FocusPreferences;
pub use app_state::AppState;
