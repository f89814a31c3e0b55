//! Focus/break session state machine
//!
//! [`FocusSession`] is a plain value with no clock and no I/O: commands and
//! ticks are applied synchronously and each call reports what happened. The
//! tick source and the channels live in [`super::FocusTimer`].
//!
//! Every phase completion drops the session back to idle. The next phase only
//! starts when the user issues `Start` again; this holds for both the
//! Focus→Break and the Break→Focus transition.

use serde::{Deserialize, Serialize};

use super::{Activity, Phase, SessionConfig, SessionState};
use crate::utils::format::{format_clock, format_hours_minutes};

/// User commands accepted by a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Command {
    Start,
    /// Toggles between running and paused
    Pause,
    Stop,
    Reset,
}

impl Command {
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Pause => "pause",
            Command::Stop => "stop",
            Command::Reset => "reset",
        }
    }
}

/// Outcome of applying a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Applied { from: Activity, to: Activity },
    /// Precondition not met; state untouched
    Ignored,
}

impl Transition {
    pub fn is_applied(&self) -> bool {
        matches!(self, Transition::Applied { .. })
    }
}

/// Describes a phase that just ran out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Completion {
    pub completed_phase: Phase,
    pub next_phase: Phase,
    pub completed_focus_sessions: u32,
}

/// Outcome of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running, tick discarded
    Ignored,
    /// One second consumed, phase still in progress
    Counted { remaining_seconds: u64 },
    /// The phase ran out and the session moved to the next phase, idle
    Completed(Completion),
}

/// Derived, display-ready view of a session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    #[serde(flatten)]
    pub state: SessionState,
    pub activity: Activity,
    pub phase_duration_seconds: u64,
    pub progress_percent: f64,
    pub clock: String,
    pub label: String,
    /// Focus time banked by completed cycles
    pub total_focus_seconds: u64,
    /// `total_focus_seconds` as `Xh Ym`
    pub total_focus_time: String,
    pub config: SessionConfig,
    /// Settings waiting for the next start
    pub staged_config: Option<SessionConfig>,
}

/// Single focus session: phase, countdown and completed-cycle count
#[derive(Debug, Clone)]
pub struct FocusSession {
    /// Durations in effect for the current phase run
    config: SessionConfig,
    staged: Option<SessionConfig>,
    state: SessionState,
}

impl FocusSession {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            staged: None,
            state: SessionState::new(config.focus_duration_seconds()),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    pub fn staged_config(&self) -> Option<SessionConfig> {
        self.staged
    }

    pub fn activity(&self) -> Activity {
        self.state.activity()
    }

    pub fn is_running(&self) -> bool {
        self.activity() == Activity::Running
    }

    /// Full duration of the current phase under the config in effect
    pub fn phase_duration(&self) -> u64 {
        duration_of(&self.config, self.state.phase)
    }

    /// Elapsed fraction of the current phase, 0.0 to 100.0
    pub fn progress_percent(&self) -> f64 {
        let total = self.phase_duration();
        let elapsed = total.saturating_sub(self.state.remaining_seconds);
        100.0 * elapsed as f64 / total as f64
    }

    /// Focus time of all completed cycles, at the focus duration in effect
    pub fn total_focus_seconds(&self) -> u64 {
        u64::from(self.state.completed_focus_sessions)
            .saturating_mul(self.config.focus_duration_seconds())
    }

    /// Stage new durations. They are adopted at the next `Start`, never
    /// mid-phase.
    pub fn update_config(&mut self, config: SessionConfig) {
        if config == self.config {
            self.staged = None;
        } else {
            self.staged = Some(config);
        }
    }

    /// Apply a user command
    pub fn apply(&mut self, command: Command) -> Transition {
        match command {
            Command::Start => self.start(),
            Command::Pause => self.toggle_pause(),
            Command::Stop => self.stop(),
            Command::Reset => self.reset(),
        }
    }

    /// Idle → Running, adopting any staged config
    pub fn start(&mut self) -> Transition {
        let from = self.activity();
        if from != Activity::Idle {
            return Transition::Ignored;
        }

        if let Some(config) = self.staged.take() {
            self.config = config;
        }
        // Idle always holds a full phase; re-derive it in case the durations changed
        self.state.remaining_seconds = self.phase_duration();
        self.state.is_running = true;
        self.state.is_paused = false;

        self.transition_from(from)
    }

    /// Running ↔ Paused
    pub fn toggle_pause(&mut self) -> Transition {
        let from = self.activity();
        match from {
            Activity::Running => self.state.is_paused = true,
            Activity::Paused => self.state.is_paused = false,
            Activity::Idle => return Transition::Ignored,
        }

        self.transition_from(from)
    }

    /// Running/Paused → Idle with the current phase rewound
    pub fn stop(&mut self) -> Transition {
        let from = self.activity();
        if from == Activity::Idle {
            return Transition::Ignored;
        }

        self.go_idle();
        self.state.remaining_seconds = self.phase_duration();

        self.transition_from(from)
    }

    /// Any → Idle Focus with the full focus duration
    pub fn reset(&mut self) -> Transition {
        let from = self.activity();

        self.go_idle();
        self.state.phase = Phase::Focus;
        self.state.remaining_seconds = self.config.focus_duration_seconds();

        self.transition_from(from)
    }

    /// Advance the countdown by one second.
    ///
    /// Reaching zero completes the phase within the same call, so a zero
    /// remaining time is never observable while running.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_running() {
            return TickOutcome::Ignored;
        }

        self.state.remaining_seconds = self.state.remaining_seconds.saturating_sub(1);
        if self.state.remaining_seconds > 0 {
            return TickOutcome::Counted {
                remaining_seconds: self.state.remaining_seconds,
            };
        }

        TickOutcome::Completed(self.complete_phase())
    }

    /// Build the display view of the current state
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            state: self.state.clone(),
            activity: self.activity(),
            phase_duration_seconds: self.phase_duration(),
            progress_percent: self.progress_percent(),
            clock: format_clock(self.state.remaining_seconds),
            label: self.state.label(),
            total_focus_seconds: self.total_focus_seconds(),
            total_focus_time: format_hours_minutes(self.total_focus_seconds()),
            config: self.config,
            staged_config: self.staged,
        }
    }

    fn complete_phase(&mut self) -> Completion {
        let completed_phase = self.state.phase;
        if completed_phase == Phase::Break {
            self.state.completed_focus_sessions += 1;
        }

        self.go_idle();
        self.state.phase = completed_phase.next();
        self.state.remaining_seconds = self.phase_duration();

        Completion {
            completed_phase,
            next_phase: self.state.phase,
            completed_focus_sessions: self.state.completed_focus_sessions,
        }
    }

    fn go_idle(&mut self) {
        self.state.is_running = false;
        self.state.is_paused = false;
    }

    fn transition_from(&self, from: Activity) -> Transition {
        Transition::Applied {
            from,
            to: self.activity(),
        }
    }
}

impl Default for FocusSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

fn duration_of(config: &SessionConfig, phase: Phase) -> u64 {
    match phase {
        Phase::Focus => config.focus_duration_seconds(),
        Phase::Break => config.break_duration_seconds(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn session(focus: u64, brk: u64) -> FocusSession {
        FocusSession::new(SessionConfig::new(focus, brk).unwrap())
    }

    fn tick_n(session: &mut FocusSession, n: u64) -> Vec<Completion> {
        (0..n)
            .filter_map(|_| match session.tick() {
                TickOutcome::Completed(c) => Some(c),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn full_cycle_with_default_durations() {
        let mut s = FocusSession::default();

        assert!(s.start().is_applied());
        let completions = tick_n(&mut s, 1500);
        assert_eq!(completions.len(), 1);
        assert_eq!(s.state().phase, Phase::Break);
        assert_eq!(s.state().remaining_seconds, 300);
        assert_eq!(s.activity(), Activity::Idle);
        assert_eq!(s.state().completed_focus_sessions, 0);

        assert!(s.start().is_applied());
        let completions = tick_n(&mut s, 300);
        assert_eq!(
            completions,
            vec![Completion {
                completed_phase: Phase::Break,
                next_phase: Phase::Focus,
                completed_focus_sessions: 1,
            }]
        );
        assert_eq!(s.state().phase, Phase::Focus);
        assert_eq!(s.state().remaining_seconds, 1500);
        assert_eq!(s.activity(), Activity::Idle);
        assert_eq!(s.state().completed_focus_sessions, 1);
    }

    #[test]
    fn completion_does_not_auto_start_next_phase() {
        let mut s = session(2, 1);
        s.start();
        tick_n(&mut s, 2);
        assert_eq!(s.activity(), Activity::Idle);

        // Further ticks do nothing until the user starts the break
        tick_n(&mut s, 10);
        assert_eq!(s.state().remaining_seconds, 1);
        assert_eq!(s.state().phase, Phase::Break);
    }

    #[test]
    fn ticks_while_paused_are_ignored() {
        let mut s = FocusSession::default();
        s.start();
        tick_n(&mut s, 10);
        assert_eq!(s.state().remaining_seconds, 1490);

        assert!(s.toggle_pause().is_applied());
        for _ in 0..100 {
            assert_eq!(s.tick(), TickOutcome::Ignored);
        }
        assert_eq!(s.state().remaining_seconds, 1490);
        assert_eq!(s.activity(), Activity::Paused);
    }

    #[test]
    fn pause_toggles_without_touching_remaining() {
        let mut s = session(100, 10);
        s.start();
        tick_n(&mut s, 3);

        for i in 0..21 {
            let expected = if i % 2 == 0 { Activity::Paused } else { Activity::Running };
            assert_matches!(s.toggle_pause(), Transition::Applied { to, .. } if to == expected);
            assert_eq!(s.state().remaining_seconds, 97);
        }
        assert_eq!(s.activity(), Activity::Paused);
    }

    #[test]
    fn idle_rejects_pause_and_stop() {
        let mut s = FocusSession::default();
        let before = s.state().clone();
        assert_eq!(s.toggle_pause(), Transition::Ignored);
        assert_eq!(s.stop(), Transition::Ignored);
        assert_eq!(s.state(), &before);
        assert!(!s.state().is_paused);
    }

    #[test]
    fn start_is_ignored_unless_idle() {
        let mut s = session(100, 10);
        s.start();
        tick_n(&mut s, 5);
        assert_eq!(s.start(), Transition::Ignored);
        assert_eq!(s.state().remaining_seconds, 95);

        s.toggle_pause();
        assert_eq!(s.start(), Transition::Ignored);
        assert_eq!(s.activity(), Activity::Paused);
    }

    #[test]
    fn stop_rewinds_current_phase_only() {
        let mut s = session(10, 5);
        s.start();
        tick_n(&mut s, 10);
        s.start();
        tick_n(&mut s, 2);
        assert_eq!(s.state().remaining_seconds, 3);

        assert_matches!(
            s.stop(),
            Transition::Applied { from: Activity::Running, to: Activity::Idle }
        );
        assert_eq!(s.state().phase, Phase::Break);
        assert_eq!(s.state().remaining_seconds, 5);

        s.start();
        s.toggle_pause();
        assert_matches!(s.stop(), Transition::Applied { from: Activity::Paused, .. });
        assert!(!s.state().is_paused);
        assert!(!s.state().is_running);
    }

    #[test]
    fn reset_from_any_state() {
        let mut s = session(10, 5);
        assert!(s.reset().is_applied());
        assert_eq!(s.state(), &SessionState::new(10));

        s.start();
        tick_n(&mut s, 10);
        s.start();
        tick_n(&mut s, 1);
        s.toggle_pause();
        s.reset();

        assert_eq!(s.state().phase, Phase::Focus);
        assert_eq!(s.state().remaining_seconds, 10);
        assert_eq!(s.activity(), Activity::Idle);
    }

    #[test]
    fn progress_is_monotonic_and_restarts_each_phase() {
        let mut s = session(8, 4);
        assert_eq!(s.progress_percent(), 0.0);

        s.start();
        let mut last = s.progress_percent();
        for _ in 0..7 {
            s.tick();
            let now = s.progress_percent();
            assert!(now >= last);
            last = now;
        }
        assert_eq!(last, 87.5);

        s.tick();
        assert_eq!(s.state().phase, Phase::Break);
        assert_eq!(s.progress_percent(), 0.0);

        s.start();
        s.tick();
        assert_eq!(s.progress_percent(), 25.0);
    }

    #[test]
    fn staged_config_applies_on_next_start() {
        let mut s = session(10, 5);
        s.start();
        tick_n(&mut s, 4);

        s.update_config(SessionConfig::new(20, 8).unwrap());
        assert_eq!(s.phase_duration(), 10);
        assert_eq!(s.state().remaining_seconds, 6);

        tick_n(&mut s, 6);
        // Break bounds still come from the config the run started with
        assert_eq!(s.state().phase, Phase::Break);
        assert_eq!(s.state().remaining_seconds, 5);

        s.start();
        assert_eq!(s.state().remaining_seconds, 8);
        assert_eq!(s.staged_config(), None);
        assert_eq!(s.config().focus_duration_seconds(), 20);
    }

    #[test]
    fn staging_the_current_config_clears_pending_change() {
        let mut s = session(10, 5);
        s.update_config(SessionConfig::new(30, 5).unwrap());
        assert!(s.staged_config().is_some());
        s.update_config(SessionConfig::new(10, 5).unwrap());
        assert_eq!(s.staged_config(), None);
    }

    #[test]
    fn one_second_phase_completes_on_first_tick() {
        let mut s = session(1, 1);
        s.start();
        assert_matches!(
            s.tick(),
            TickOutcome::Completed(Completion { completed_phase: Phase::Focus, .. })
        );
        assert_eq!(s.state().remaining_seconds, 1);
    }

    #[test]
    fn total_focus_time_accumulates_per_cycle() {
        let mut s = FocusSession::default();
        assert_eq!(s.snapshot().total_focus_time, "0h 0m");

        for _ in 0..2 {
            s.start();
            tick_n(&mut s, 1500);
            // A finished focus phase alone does not count
            assert_eq!(s.state().phase, Phase::Break);
            s.start();
            tick_n(&mut s, 300);
        }

        let snap = s.snapshot();
        assert_eq!(snap.state.completed_focus_sessions, 2);
        assert_eq!(snap.total_focus_seconds, 3000);
        assert_eq!(snap.total_focus_time, "0h 50m");
    }

    #[test]
    fn total_focus_time_after_one_long_cycle() {
        let mut s = session(5400, 1);
        s.start();
        tick_n(&mut s, 5400);
        assert_eq!(s.total_focus_seconds(), 0);
        s.start();
        tick_n(&mut s, 1);

        let snap = s.snapshot();
        assert_eq!(snap.total_focus_seconds, 5400);
        assert_eq!(snap.total_focus_time, "1h 30m");
    }

    #[test]
    fn snapshot_reflects_state() {
        let mut s = FocusSession::default();
        s.start();
        tick_n(&mut s, 61);

        let snap = s.snapshot();
        assert_eq!(snap.clock, "23:59");
        assert_eq!(snap.activity, Activity::Running);
        assert_eq!(snap.phase_duration_seconds, 1500);
        assert_eq!(snap.label, "Focus Session");
    }
}
