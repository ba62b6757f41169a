use std::sync::Arc;
use std::time::Duration;

use today_core::{update, Effect, Generation, Msg, RefreshState, RequestState};
use today_logging::{today_debug, today_info, today_warn};
use tokio::sync::{mpsc, watch};
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::{self, Instant, Interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::Fetcher;

/// Periodic refresh cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshInterval {
    Every(Duration),
    Disabled,
}

impl RefreshInterval {
    /// `None` and zero both disable periodic refresh.
    pub fn from_millis(millis: Option<u64>) -> Self {
        match millis {
            Some(0) | None => RefreshInterval::Disabled,
            Some(millis) => RefreshInterval::Every(Duration::from_millis(millis)),
        }
    }

    fn ticker(self) -> Option<Interval> {
        match self {
            RefreshInterval::Every(period) => {
                // First tick one full period after start; mount already fetched.
                let mut ticker = time::interval_at(Instant::now() + period, period);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
                Some(ticker)
            }
            RefreshInterval::Disabled => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RefreshConfig<O> {
    pub initial_options: O,
    pub interval: RefreshInterval,
}

enum Command<O> {
    SetOptions(O),
    Trigger(O),
}

type Published<F> = RequestState<<F as Fetcher>::Output, <F as Fetcher>::Error>;
type State<F> =
    RefreshState<<F as Fetcher>::Options, <F as Fetcher>::Output, <F as Fetcher>::Error>;
type Settlement<F> = (
    Generation,
    Result<<F as Fetcher>::Output, <F as Fetcher>::Error>,
);

/// Handle to a running refresh controller task.
///
/// The task writes every settled outcome; the handle only ever writes
/// `Loading`, from [`trigger`](Self::trigger). Readers observe the state
/// through [`subscribe`](Self::subscribe).
pub struct RefreshHandle<F: Fetcher> {
    cmd_tx: mpsc::UnboundedSender<Command<F::Options>>,
    state_tx: Arc<watch::Sender<Published<F>>>,
    state_rx: watch::Receiver<Published<F>>,
    shutdown: CancellationToken,
    task: JoinHandle<()>,
}

impl<F: Fetcher> RefreshHandle<F> {
    /// Supplies options from outside. Fetches only if they differ
    /// structurally from the options used last.
    pub fn set_options(&self, options: F::Options) {
        let _ = self.cmd_tx.send(Command::SetOptions(options));
    }

    /// Fetches with `options` right away, superseding anything in flight.
    /// The state reads `Loading` as soon as this returns.
    pub fn trigger(&self, options: F::Options) {
        if self.cmd_tx.is_closed() {
            return;
        }
        // Published before enqueueing so the task's outcome always lands after it.
        self.state_tx.send_replace(RequestState::Loading);
        let _ = self.cmd_tx.send(Command::Trigger(options));
    }

    pub fn subscribe(&self) -> watch::Receiver<Published<F>> {
        self.state_rx.clone()
    }

    pub fn current(&self) -> Published<F> {
        self.state_rx.borrow().clone()
    }

    /// Stops the interval, aborts in-flight fetches and waits for the task.
    /// The last published state stays readable by existing subscribers.
    pub async fn shutdown(self) {
        self.shutdown.cancel();
        if let Err(err) = self.task.await {
            today_warn!("refresh task ended abnormally: {}", err);
        }
    }
}

/// Spawns the controller on the current tokio runtime. The first fetch is
/// issued immediately with `config.initial_options`.
pub fn spawn_refresh<F>(fetcher: Arc<F>, config: RefreshConfig<F::Options>) -> RefreshHandle<F>
where
    F: Fetcher + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
    let (state_tx, state_rx) = watch::channel(RequestState::Loading);
    let state_tx = Arc::new(state_tx);
    let shutdown = CancellationToken::new();

    let task = tokio::spawn(run(
        fetcher,
        config,
        cmd_rx,
        Arc::clone(&state_tx),
        shutdown.clone(),
    ));

    RefreshHandle {
        cmd_tx,
        state_tx,
        state_rx,
        shutdown,
        task,
    }
}

async fn run<F>(
    fetcher: Arc<F>,
    config: RefreshConfig<F::Options>,
    mut cmd_rx: mpsc::UnboundedReceiver<Command<F::Options>>,
    state_tx: Arc<watch::Sender<Published<F>>>,
    shutdown: CancellationToken,
) where
    F: Fetcher + 'static,
{
    let mut in_flight: JoinSet<Settlement<F>> = JoinSet::new();
    let mut ticker = config.interval.ticker();
    today_info!(
        "refresh controller started options={:?} interval={:?}",
        config.initial_options,
        config.interval
    );

    let mut state = RefreshState::new(config.initial_options);
    state = dispatch(state, Msg::Mounted, &fetcher, &mut in_flight, &state_tx);

    loop {
        tokio::select! {
            _ = shutdown.cancelled() => break,
            command = cmd_rx.recv() => {
                let msg = match command {
                    Some(Command::SetOptions(options)) => Msg::OptionsSupplied(options),
                    Some(Command::Trigger(options)) => Msg::Trigger(options),
                    None => break,
                };
                state = dispatch(state, msg, &fetcher, &mut in_flight, &state_tx);
            }
            Some(joined) = in_flight.join_next() => match joined {
                Ok((generation, outcome)) => {
                    if generation == state.generation() {
                        today_debug!("generation {} settled ok={}", generation, outcome.is_ok());
                    } else {
                        today_debug!(
                            "dropping stale response from generation {} (latest {})",
                            generation,
                            state.generation()
                        );
                    }
                    let msg = Msg::Settled { generation, outcome };
                    state = dispatch(state, msg, &fetcher, &mut in_flight, &state_tx);
                }
                Err(err) => today_warn!("fetch task failed: {}", err),
            },
            _ = next_tick(&mut ticker) => {
                state = dispatch(state, Msg::IntervalElapsed, &fetcher, &mut in_flight, &state_tx);
            }
        }
    }

    // Dropping the ticker stops periodic triggers; aborted fetches never report back.
    drop(ticker);
    in_flight.abort_all();
    let state = dispatch(state, Msg::TornDown, &fetcher, &mut in_flight, &state_tx);
    today_info!(
        "refresh controller stopped after {} triggers",
        state.trigger_count()
    );
}

fn dispatch<F>(
    state: State<F>,
    msg: Msg<F::Options, F::Output, F::Error>,
    fetcher: &Arc<F>,
    in_flight: &mut JoinSet<Settlement<F>>,
    state_tx: &watch::Sender<Published<F>>,
) -> State<F>
where
    F: Fetcher + 'static,
{
    let (mut state, effects) = update(state, msg);

    // Publish before any fetch is started, so readers see `Loading` first.
    if state.consume_dirty() {
        let next = state.request();
        // `trigger` on the handle may already have published this `Loading`.
        state_tx.send_if_modified(|current| {
            if current.is_loading() && next.is_loading() {
                return false;
            }
            *current = next.clone();
            true
        });
    }

    for effect in effects {
        match effect {
            Effect::Fetch {
                generation,
                options,
            } => {
                today_info!("Fetch generation={} options={:?}", generation, options);
                let fetcher = Arc::clone(fetcher);
                in_flight.spawn(async move {
                    let outcome = fetcher.fetch(&options).await;
                    (generation, outcome)
                });
            }
        }
    }

    state
}

async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(ticker) => {
            ticker.tick().await;
        }
        None => std::future::pending().await,
    }
}
