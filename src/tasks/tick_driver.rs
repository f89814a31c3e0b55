//! One-second tick source for a running session

use std::{sync::Weak, time::Duration};
use tokio::{
    task::JoinHandle,
    time::{interval_at, Instant},
};
use tracing::debug;

use crate::state::FocusTimer;

/// Default tick period
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Handle to an armed tick task.
///
/// The task is aborted when the handle is dropped. Each driver carries the
/// generation it was armed with; the session discards ticks whose generation
/// no longer matches, so a tick that fired just before disarming is lost
/// rather than applied.
#[derive(Debug)]
pub struct TickDriver {
    generation: u64,
    handle: JoinHandle<()>,
}

impl TickDriver {
    /// Spawn the tick task. Must be called from within a tokio runtime.
    pub fn arm(timer: Weak<FocusTimer>, generation: u64, period: Duration) -> Self {
        debug!("Arming tick driver (generation {})", generation);
        let handle = tokio::spawn(tick_loop(timer, generation, period));
        Self { generation, handle }
    }
}

impl Drop for TickDriver {
    fn drop(&mut self) {
        debug!("Disarming tick driver (generation {})", self.generation);
        self.handle.abort();
    }
}

async fn tick_loop(timer: Weak<FocusTimer>, generation: u64, period: Duration) {
    // First tick lands one full period after arming
    let mut interval = interval_at(Instant::now() + period, period);

    loop {
        interval.tick().await;

        let Some(session) = timer.upgrade() else {
            debug!("Session dropped, tick driver exiting");
            break;
        };

        if !session.tick_from(generation) {
            break;
        }
    }
}
