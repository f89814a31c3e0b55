//! Background tasks module
//! 
//! This module contains the session tick driver and the tasks that react to
//! session events alongside the HTTP server.

pub mod tick_driver;
pub mod completion_notifier;

// Re-export main items
pub use tick_driver::{TickDriver, TICK_PERIOD};
pub use completion_notifier::completion_notifier_task;
