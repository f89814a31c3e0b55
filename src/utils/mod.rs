//! Utility functions module
//! 
//! This module contains utility functions used throughout the application.

pub mod format;
pub mod prompts;
pub mod signals;

// Re-export main functions
pub use format::{format_clock, format_hours_minutes, format_uptime};
pub use signals::shutdown_signal;
