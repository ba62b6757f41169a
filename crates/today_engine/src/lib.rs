//! Today engine: async effect execution for the refresh controller and clock.
mod clock;
mod controller;
mod fetch;
mod provider;
mod types;

pub use clock::{spawn_clock, ClockHandle, NowFn};
pub use controller::{spawn_refresh, RefreshConfig, RefreshHandle, RefreshInterval};
pub use fetch::Fetcher;
pub use provider::{ProviderSettings, WeatherProvider};
pub use types::{FailureKind, FetchError};
