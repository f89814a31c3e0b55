//! Focus Timer - A state-managed HTTP daemon for focus/break sessions
//! 
//! This library provides the focus session state machine, the tick driver
//! that counts a running phase down, and the HTTP surface that controls it.

pub mod config;
pub mod error;
pub mod state;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::FocusError;
pub use state::{AppState, FocusSession, FocusTimer, SessionConfig};
pub use api::create_router;
pub use utils::signals::shutdown_signal;
