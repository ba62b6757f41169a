//! Today core: pure refresh state machine, formatting and view-model helpers.
mod clock;
mod effect;
mod font;
mod format;
mod msg;
mod options;
mod request;
mod state;
mod update;
mod view_model;
mod weather;

pub use clock::{format_date, format_time, CLOCK_CADENCE};
pub use effect::Effect;
pub use font::{FontCycle, FONTS};
pub use format::{format_request, format_weather, summarize, FormatError, WeatherSummary};
pub use msg::Msg;
pub use options::{DegreeType, WeatherOptions};
pub use request::{RequestState, Status};
pub use state::{Generation, RefreshState};
pub use update::update;
pub use view_model::{TodayViewModel, WeatherLine};
pub use weather::{CurrentConditions, DayForecast, Location, WeatherResult};
