mod app;
mod config;
mod logging;
mod ui;

use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let destination = std::env::var(logging::LOG_ENV).ok();
    logging::initialize(logging::LogDestination::from_setting(destination.as_deref()));

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(config::DEFAULT_CONFIG_PATH));
    let config = config::load(&config_path)?;

    app::run(config_path, config)
}
