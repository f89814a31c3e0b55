//! Configuration and CLI argument handling

use clap::Parser;

use crate::{error::Result, state::SessionConfig};

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "focus-timer")]
#[command(about = "A state-managed HTTP daemon driving a focus/break session timer")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Focus phase duration in minutes
    #[arg(short, long = "focus", default_value = "25")]
    pub focus_minutes: u64,

    /// Break phase duration in minutes
    #[arg(short, long = "break", default_value = "5")]
    pub break_minutes: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Phase durations, rejecting zero-minute phases
    pub fn session_config(&self) -> Result<SessionConfig> {
        SessionConfig::from_minutes(self.focus_minutes, self.break_minutes)
    }
}
