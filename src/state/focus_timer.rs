//! Owned session handle: serializes commands and ticks, owns the tick driver

use std::{
    sync::{Arc, Mutex, MutexGuard, Weak},
    time::Duration,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::{broadcast, watch};
use tracing::{debug, error, info};

use super::{
    focus_session::{Command, Completion, FocusSession, SessionSnapshot, TickOutcome, Transition},
    Phase, SessionConfig,
};
use crate::{
    error::{FocusError, Result},
    tasks::tick_driver::{TickDriver, TICK_PERIOD},
};

/// Fired exactly once per phase completion
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhaseCompleted {
    pub completed_phase: Phase,
    pub next_phase: Phase,
    pub completed_focus_sessions: u32,
    pub at: DateTime<Utc>,
}

impl From<Completion> for PhaseCompleted {
    fn from(c: Completion) -> Self {
        Self {
            completed_phase: c.completed_phase,
            next_phase: c.next_phase,
            completed_focus_sessions: c.completed_focus_sessions,
            at: Utc::now(),
        }
    }
}

#[derive(Debug)]
struct TimerInner {
    session: FocusSession,
    driver: Option<TickDriver>,
    /// Bumped every time a driver is armed
    generation: u64,
}

/// A focus session plus its tick driver and notification channels.
///
/// Always handed out as `Arc<FocusTimer>`; the driver only holds a weak
/// reference, so dropping the last handle stops the countdown.
#[derive(Debug)]
pub struct FocusTimer {
    inner: Mutex<TimerInner>,
    tick_period: Duration,
    snapshot_tx: watch::Sender<SessionSnapshot>,
    completed_tx: broadcast::Sender<PhaseCompleted>,
    self_ref: Weak<FocusTimer>,
}

impl FocusTimer {
    /// Create a session ticking once per second
    pub fn new(config: SessionConfig) -> Arc<Self> {
        Self::with_tick_period(config, TICK_PERIOD)
    }

    /// Create a session with a custom tick period
    pub fn with_tick_period(config: SessionConfig, tick_period: Duration) -> Arc<Self> {
        let session = FocusSession::new(config);
        let (snapshot_tx, _) = watch::channel(session.snapshot());
        let (completed_tx, _) = broadcast::channel(16);

        Arc::new_cyclic(|self_ref| Self {
            inner: Mutex::new(TimerInner {
                session,
                driver: None,
                generation: 0,
            }),
            tick_period,
            snapshot_tx,
            completed_tx,
            self_ref: self_ref.clone(),
        })
    }

    /// Apply a user command and return the resulting snapshot
    pub fn apply(&self, command: Command) -> Result<(Transition, SessionSnapshot)> {
        let mut inner = self.lock()?;

        let transition = inner.session.apply(command);
        match transition {
            Transition::Applied { from, to } => {
                info!("Session {}: {} -> {}", command.as_str(), from, to);
            }
            Transition::Ignored => {
                debug!(
                    "Ignoring {} while {}",
                    command.as_str(),
                    inner.session.activity()
                );
            }
        }

        self.sync_driver(&mut inner);
        let snapshot = self.publish(&inner);
        Ok((transition, snapshot))
    }

    /// Stage new phase durations for the next start
    pub fn update_config(&self, config: SessionConfig) -> Result<SessionSnapshot> {
        let mut inner = self.lock()?;

        info!(
            "Staging session config: focus={}s, break={}s",
            config.focus_duration_seconds(),
            config.break_duration_seconds()
        );
        inner.session.update_config(config);

        Ok(self.publish(&inner))
    }

    /// Current display view
    pub fn snapshot(&self) -> Result<SessionSnapshot> {
        self.lock().map(|inner| inner.session.snapshot())
    }

    /// Whether a tick driver is currently armed
    pub fn driver_armed(&self) -> Result<bool> {
        self.lock().map(|inner| inner.driver.is_some())
    }

    /// Receiver that observes every state change
    pub fn watch_snapshots(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Receiver for phase completion events
    pub fn subscribe_completions(&self) -> broadcast::Receiver<PhaseCompleted> {
        self.completed_tx.subscribe()
    }

    /// Apply one tick from the driver armed with `generation`.
    ///
    /// Returns whether that driver should keep ticking.
    pub(crate) fn tick_from(&self, generation: u64) -> bool {
        let mut inner = match self.lock() {
            Ok(inner) => inner,
            Err(e) => {
                error!("Tick dropped: {}", e);
                return false;
            }
        };

        if inner.driver.is_none() || inner.generation != generation {
            debug!("Discarding tick from stale driver (generation {})", generation);
            return false;
        }

        match inner.session.tick() {
            TickOutcome::Ignored => {
                inner.driver = None;
                false
            }
            TickOutcome::Counted { remaining_seconds } => {
                debug!("Tick: {}s remaining", remaining_seconds);
                self.publish(&inner);
                true
            }
            TickOutcome::Completed(completion) => {
                info!(
                    "{} phase complete, {} ready to start ({} sessions completed)",
                    completion.completed_phase,
                    completion.next_phase,
                    completion.completed_focus_sessions
                );
                // Drops our own handle; the loop exits on the returned false
                inner.driver = None;
                self.publish(&inner);

                if self.completed_tx.send(completion.into()).is_err() {
                    debug!("No listeners for phase completion");
                }
                false
            }
        }
    }

    /// Arm or disarm the driver to match the session's activity
    fn sync_driver(&self, inner: &mut TimerInner) {
        let running = inner.session.is_running();

        if running && inner.driver.is_none() {
            inner.generation += 1;
            inner.driver = Some(TickDriver::arm(
                self.self_ref.clone(),
                inner.generation,
                self.tick_period,
            ));
        } else if !running {
            inner.driver = None;
        }
    }

    fn publish(&self, inner: &TimerInner) -> SessionSnapshot {
        let snapshot = inner.session.snapshot();
        self.snapshot_tx.send_replace(snapshot.clone());
        snapshot
    }

    fn lock(&self) -> Result<MutexGuard<'_, TimerInner>> {
        self.inner
            .lock()
            .map_err(|_| FocusError::LockPoisoned("session"))
    }
}
