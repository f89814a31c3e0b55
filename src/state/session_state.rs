//! Session state structure and its phase/activity enums

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which timed interval is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Focus,
    Break,
}

impl Phase {
    /// The phase that follows this one in a session cycle
    pub fn next(self) -> Self {
        match self {
            Phase::Focus => Phase::Break,
            Phase::Break => Phase::Focus,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Focus => "focus",
            Phase::Break => "break",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the current phase's countdown is moving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activity {
    Idle,
    Running,
    Paused,
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Activity::Idle => "idle",
            Activity::Running => "running",
            Activity::Paused => "paused",
        };
        f.write_str(s)
    }
}

/// Mutable state of a single focus session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub phase: Phase,
    pub remaining_seconds: u64,
    /// Tick driver is armed
    pub is_running: bool,
    /// Only meaningful while `is_running`
    pub is_paused: bool,
    /// Full focus+break cycles finished
    pub completed_focus_sessions: u32,
}

impl SessionState {
    /// Create the initial state: Focus phase, idle, full focus duration left
    pub fn new(focus_duration_seconds: u64) -> Self {
        Self {
            phase: Phase::Focus,
            remaining_seconds: focus_duration_seconds,
            is_running: false,
            is_paused: false,
            completed_focus_sessions: 0,
        }
    }

    /// Collapse the two flags into the activity enum
    pub fn activity(&self) -> Activity {
        match (self.is_running, self.is_paused) {
            (false, _) => Activity::Idle,
            (true, false) => Activity::Running,
            (true, true) => Activity::Paused,
        }
    }

    /// Heading shown above the timer, e.g. "Break Time • Session 3"
    pub fn label(&self) -> String {
        let base = match self.phase {
            Phase::Focus => "Focus Session",
            Phase::Break => "Break Time",
        };

        if self.completed_focus_sessions > 0 {
            format!("{} • Session {}", base, self.completed_focus_sessions + 1)
        } else {
            base.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_idle_focus() {
        let state = SessionState::new(1500);
        assert_eq!(state.phase, Phase::Focus);
        assert_eq!(state.remaining_seconds, 1500);
        assert_eq!(state.activity(), Activity::Idle);
        assert_eq!(state.completed_focus_sessions, 0);
    }

    #[test]
    fn paused_flag_without_running_is_idle() {
        let mut state = SessionState::new(10);
        state.is_paused = true;
        assert_eq!(state.activity(), Activity::Idle);
    }

    #[test]
    fn label_counts_the_upcoming_session() {
        let mut state = SessionState::new(10);
        assert_eq!(state.label(), "Focus Session");

        state.phase = Phase::Break;
        state.completed_focus_sessions = 2;
        assert_eq!(state.label(), "Break Time • Session 3");
    }

    #[test]
    fn phases_alternate() {
        assert_eq!(Phase::Focus.next(), Phase::Break);
        assert_eq!(Phase::Break.next(), Phase::Focus);
    }
}
