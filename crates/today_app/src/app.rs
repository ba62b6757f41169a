use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::Local;
use today_core::{FontCycle, TodayViewModel};
use today_engine::{spawn_clock, spawn_refresh, NowFn, RefreshConfig, WeatherProvider};
use today_logging::{today_error, today_info, today_trace, today_warn};

use crate::config::{self, AppConfig};
use crate::ui::art::FigletArt;
use crate::ui::render::render;
use crate::ui::sink::{RenderSink, TerminalSink};

/// Runs the widget until Ctrl-C on a single-threaded runtime. The refresh
/// controller and the clock are separate tasks feeding one render loop.
pub fn run(config_path: PathBuf, config: AppConfig) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run_widget(config_path, config))
}

async fn run_widget(config_path: PathBuf, config: AppConfig) -> anyhow::Result<()> {
    let provider = Arc::new(WeatherProvider::new(config.provider_settings()));
    let weather = spawn_refresh(
        provider,
        RefreshConfig {
            initial_options: config.options(),
            interval: config.refresh_interval(),
        },
    );
    let now: NowFn = Arc::new(Local::now);
    let clock = spawn_clock(now);

    let art = FigletArt::new(config.font_dir.clone());
    let fonts = FontCycle::new();
    let mut geometry = config.geometry;
    let mut weather_rx = weather.subscribe();
    let mut clock_rx = clock.subscribe();
    let mut reload = ReloadSignal::new()?;
    let mut sink = TerminalSink::open()?;

    loop {
        let view = TodayViewModel::build(
            &*clock_rx.borrow_and_update(),
            &fonts,
            &*weather_rx.borrow_and_update(),
        );
        today_trace!(
            "render time={} weather={:?}",
            view.time,
            view.weather.status
        );
        if let Err(err) = sink.present(&render(geometry, &view, &art)) {
            today_error!("Render failed: {}", err);
            break;
        }

        tokio::select! {
            result = tokio::signal::ctrl_c() => {
                if let Err(err) = result {
                    today_warn!("Ctrl-C handler failed: {}", err);
                }
                break;
            }
            changed = weather_rx.changed() => {
                if changed.is_err() {
                    break;
                }
            }
            changed = clock_rx.changed() => {
                if changed.is_err() {
                    break;
                }
            }
            Some(()) = reload.recv() => match config::load(&config_path) {
                Ok(next) => {
                    today_info!("Reloaded config, options={:?}", next.options());
                    geometry = next.geometry;
                    weather.set_options(next.options());
                }
                Err(err) => today_warn!("Config reload failed: {}", err),
            },
        }
    }

    weather.shutdown().await;
    clock.shutdown().await;
    drop(sink);
    today_info!("Widget torn down");
    Ok(())
}

/// SIGHUP re-reads the config file; other platforms never reload.
#[cfg(unix)]
struct ReloadSignal(tokio::signal::unix::Signal);

#[cfg(unix)]
impl ReloadSignal {
    fn new() -> io::Result<Self> {
        use tokio::signal::unix::{signal, SignalKind};
        Ok(Self(signal(SignalKind::hangup())?))
    }

    async fn recv(&mut self) -> Option<()> {
        self.0.recv().await
    }
}

#[cfg(not(unix))]
struct ReloadSignal;

#[cfg(not(unix))]
impl ReloadSignal {
    fn new() -> io::Result<Self> {
        Ok(Self)
    }

    async fn recv(&mut self) -> Option<()> {
        std::future::pending().await
    }
}
