use std::sync::Arc;

use chrono::{DateTime, Local};
use today_core::CLOCK_CADENCE;
use today_logging::{today_debug, today_warn};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// Source of the current time, swappable in tests.
pub type NowFn = Arc<dyn Fn() -> DateTime<Local> + Send + Sync>;

/// Handle to the clock ticker task. Knows nothing about data refresh.
pub struct ClockHandle {
    now_rx: watch::Receiver<DateTime<Local>>,
    shutdown: CancellationToken,
    task: JoinHandle<()>,
}

impl ClockHandle {
    pub fn subscribe(&self) -> watch::Receiver<DateTime<Local>> {
        self.now_rx.clone()
    }

    pub fn now(&self) -> DateTime<Local> {
        *self.now_rx.borrow()
    }

    pub async fn shutdown(self) {
        self.shutdown.cancel();
        if let Err(err) = self.task.await {
            today_warn!("clock task ended abnormally: {}", err);
        }
    }
}

/// Publishes `now()` immediately and then once every [`CLOCK_CADENCE`].
pub fn spawn_clock(now: NowFn) -> ClockHandle {
    let (now_tx, now_rx) = watch::channel(now());
    let shutdown = CancellationToken::new();
    let cancelled = shutdown.clone();

    let task = tokio::spawn(async move {
        let mut ticker = time::interval_at(Instant::now() + CLOCK_CADENCE, CLOCK_CADENCE);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            tokio::select! {
                _ = cancelled.cancelled() => break,
                _ = ticker.tick() => {
                    let value = now();
                    today_debug!("clock tick {}", value);
                    now_tx.send_replace(value);
                }
            }
        }
    });

    ClockHandle {
        now_rx,
        shutdown,
        task,
    }
}
