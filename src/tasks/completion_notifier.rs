//! Phase completion notifier background task

use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info, warn};

use crate::state::{AppState, Phase, PhaseCompleted};

/// Background task that announces each phase completion.
///
/// Stands in for the sound/notification hook: a chime is logged when sound is
/// enabled, otherwise the completion is only traced at debug level.
pub async fn completion_notifier_task(state: Arc<AppState>) {
    info!("Starting completion notifier task");

    let mut completed_rx = state.timer.subscribe_completions();

    loop {
        match completed_rx.recv().await {
            Ok(event) => {
                if state.sound_enabled() {
                    info!("🔔 {}", announcement(&event));
                } else {
                    debug!("Sound disabled, silent completion: {}", announcement(&event));
                }
            }
            Err(RecvError::Lagged(skipped)) => {
                warn!("Completion notifier lagged, skipped {} events", skipped);
            }
            Err(RecvError::Closed) => {
                info!("Session closed, completion notifier exiting");
                break;
            }
        }
    }
}

/// Text announced for a completion
pub fn announcement(event: &PhaseCompleted) -> String {
    match event.completed_phase {
        Phase::Focus => "Focus session complete. Time for a break.".to_string(),
        Phase::Break => format!(
            "Break over. {} session{} completed, start the next when ready.",
            event.completed_focus_sessions,
            if event.completed_focus_sessions == 1 { "" } else { "s" }
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn announcement_mentions_session_count_after_break() {
        let event = PhaseCompleted {
            completed_phase: Phase::Break,
            next_phase: Phase::Focus,
            completed_focus_sessions: 2,
            at: Utc::now(),
        };
        assert_eq!(
            announcement(&event),
            "Break over. 2 sessions completed, start the next when ready."
        );
    }

    #[test]
    fn announcement_after_focus() {
        let event = PhaseCompleted {
            completed_phase: Phase::Focus,
            next_phase: Phase::Break,
            completed_focus_sessions: 0,
            at: Utc::now(),
        };
        assert!(announcement(&event).starts_with("Focus session complete"));
    }
}
