use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use pretty_assertions::assert_eq;
use today_core::{DegreeType, RequestState, Status, WeatherOptions};
use today_engine::{spawn_refresh, Fetcher, RefreshConfig, RefreshInterval};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(today_logging::initialize_for_tests);
}

/// Answers with the search string after a delay picked from the search.
/// `"offline"` fails with `"network down"`.
#[derive(Default)]
struct ScriptedFetcher {
    calls: AtomicUsize,
    seen: Mutex<Vec<WeatherOptions>>,
}

impl ScriptedFetcher {
    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn seen(&self) -> Vec<WeatherOptions> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Fetcher for ScriptedFetcher {
    type Options = WeatherOptions;
    type Output = String;
    type Error = String;

    async fn fetch(&self, options: &WeatherOptions) -> Result<String, String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(options.clone());

        let delay = match options.search.as_str() {
            "slow" => Duration::from_millis(500),
            _ => Duration::from_millis(10),
        };
        tokio::time::sleep(delay).await;

        if options.search == "offline" {
            Err("network down".to_string())
        } else {
            Ok(format!("{} {}", options.search, options.degree_type))
        }
    }
}

fn config(search: &str, interval: RefreshInterval) -> RefreshConfig<WeatherOptions> {
    RefreshConfig {
        initial_options: WeatherOptions::new(search, DegreeType::C),
        interval,
    }
}

fn settle_time() -> Duration {
    Duration::from_millis(50)
}

#[tokio::test(start_paused = true)]
async fn mount_fetches_and_publishes_result() {
    init_logging();
    let fetcher = Arc::new(ScriptedFetcher::default());
    let handle = spawn_refresh(fetcher.clone(), config("Paris", RefreshInterval::Disabled));

    assert_eq!(handle.current().status(), Status::Loading);
    tokio::time::sleep(settle_time()).await;

    assert_eq!(handle.current(), RequestState::Complete("Paris C".to_string()));
    assert_eq!(fetcher.calls(), 1);
    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn failure_is_captured_into_state() {
    init_logging();
    let fetcher = Arc::new(ScriptedFetcher::default());
    let handle = spawn_refresh(fetcher.clone(), config("offline", RefreshInterval::Disabled));
    tokio::time::sleep(settle_time()).await;

    let state = handle.current();
    assert_eq!(state.status(), Status::Error);
    assert_eq!(state.error().map(String::as_str), Some("network down"));
    assert!(state.data().is_none());
    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn trigger_publishes_loading_before_result() {
    init_logging();
    let fetcher = Arc::new(ScriptedFetcher::default());
    let handle = spawn_refresh(fetcher.clone(), config("Paris", RefreshInterval::Disabled));
    let mut rx = handle.subscribe();
    tokio::time::sleep(settle_time()).await;
    rx.borrow_and_update();

    handle.trigger(WeatherOptions::new("slow", DegreeType::F));
    rx.changed().await.unwrap();
    assert_eq!(*rx.borrow_and_update(), RequestState::Loading);

    rx.changed().await.unwrap();
    assert_eq!(*rx.borrow(), RequestState::Complete("slow F".to_string()));
    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn trigger_reads_loading_without_yielding() {
    init_logging();
    let fetcher = Arc::new(ScriptedFetcher::default());
    let handle = spawn_refresh(fetcher.clone(), config("Paris", RefreshInterval::Disabled));
    tokio::time::sleep(settle_time()).await;
    assert_eq!(handle.current(), RequestState::Complete("Paris C".to_string()));

    handle.trigger(WeatherOptions::new("Lyon", DegreeType::C));
    assert_eq!(handle.current().status(), Status::Loading);

    tokio::time::sleep(settle_time()).await;
    assert_eq!(handle.current(), RequestState::Complete("Lyon C".to_string()));
    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn equal_options_are_gated_and_changes_fetch_once() {
    init_logging();
    let fetcher = Arc::new(ScriptedFetcher::default());
    let handle = spawn_refresh(fetcher.clone(), config("Paris", RefreshInterval::Disabled));
    tokio::time::sleep(settle_time()).await;

    handle.set_options(WeatherOptions::new("Paris", DegreeType::C));
    tokio::time::sleep(settle_time()).await;
    assert_eq!(fetcher.calls(), 1);

    handle.set_options(WeatherOptions::new("Paris", DegreeType::F));
    tokio::time::sleep(settle_time()).await;
    assert_eq!(fetcher.calls(), 2);
    assert_eq!(handle.current(), RequestState::Complete("Paris F".to_string()));
    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn interval_fires_once_per_period_with_latest_options() {
    init_logging();
    let fetcher = Arc::new(ScriptedFetcher::default());
    let interval = RefreshInterval::Every(Duration::from_millis(1_000));
    let handle = spawn_refresh(fetcher.clone(), config("Paris", interval));

    tokio::time::sleep(Duration::from_millis(500)).await;
    handle.set_options(WeatherOptions::new("Lyon", DegreeType::C));
    tokio::time::sleep(Duration::from_millis(3_000)).await;

    // Mount, option change, then ticks at 1s, 2s and 3s.
    assert_eq!(fetcher.calls(), 5);
    let seen = fetcher.seen();
    assert!(seen[2..]
        .iter()
        .all(|options| options == &WeatherOptions::new("Lyon", DegreeType::C)));
    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn disabled_interval_never_refreshes() {
    init_logging();
    let fetcher = Arc::new(ScriptedFetcher::default());
    let handle = spawn_refresh(fetcher.clone(), config("Paris", RefreshInterval::from_millis(None)));

    tokio::time::sleep(Duration::from_secs(3_600)).await;

    assert_eq!(fetcher.calls(), 1);
    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn slower_earlier_response_does_not_overwrite_newer_one() {
    init_logging();
    let fetcher = Arc::new(ScriptedFetcher::default());
    let handle = spawn_refresh(fetcher.clone(), config("slow", RefreshInterval::Disabled));

    tokio::time::sleep(Duration::from_millis(5)).await;
    handle.trigger(WeatherOptions::new("fast", DegreeType::C));

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(handle.current(), RequestState::Complete("fast C".to_string()));

    // Let the slow mount fetch resolve; it must be dropped.
    tokio::time::sleep(Duration::from_secs(1)).await;
    assert_eq!(fetcher.calls(), 2);
    assert_eq!(handle.current(), RequestState::Complete("fast C".to_string()));
    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn shutdown_discards_in_flight_result_and_stops_interval() {
    init_logging();
    let fetcher = Arc::new(ScriptedFetcher::default());
    let interval = RefreshInterval::Every(Duration::from_millis(1_000));
    let handle = spawn_refresh(fetcher.clone(), config("slow", interval));
    let rx = handle.subscribe();

    tokio::time::sleep(Duration::from_millis(100)).await;
    handle.shutdown().await;
    tokio::time::sleep(Duration::from_secs(10)).await;

    assert_eq!(*rx.borrow(), RequestState::Loading);
    assert_eq!(fetcher.calls(), 1);
}
