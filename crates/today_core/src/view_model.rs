use std::fmt::Display;

use chrono::{DateTime, TimeZone};

use crate::{
    format_date, format_request, format_time, summarize, FontCycle, RequestState, Status,
    WeatherResult, WeatherSummary,
};

/// The weather line as shown. `text` always comes from [`format_request`];
/// `summary` is kept alongside so the renderer can color its parts.
/// Formatting faults surface as `Status::Error`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherLine {
    pub status: Status,
    pub text: String,
    pub summary: Option<WeatherSummary>,
}

impl WeatherLine {
    pub fn from_request<E: Display>(request: &RequestState<Vec<WeatherResult>, E>) -> Self {
        let summarized: RequestState<WeatherSummary, String> = match request {
            RequestState::Loading => RequestState::Loading,
            RequestState::Error(error) => RequestState::Error(error.to_string()),
            RequestState::Complete(results) => match summarize(results) {
                Ok(summary) => RequestState::Complete(summary),
                Err(err) => RequestState::Error(err.to_string()),
            },
        };

        // Summaries always format, so this only falls back in theory.
        let text = format_request(&summarized, |summary| Ok(summary.to_string()))
            .unwrap_or_else(|err| err.to_string());

        Self {
            status: summarized.status(),
            text,
            summary: summarized.data().cloned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodayViewModel {
    pub date: String,
    pub time: String,
    pub font: &'static str,
    pub weather: WeatherLine,
}

impl TodayViewModel {
    pub fn build<Tz, E>(
        now: &DateTime<Tz>,
        fonts: &FontCycle,
        weather: &RequestState<Vec<WeatherResult>, E>,
    ) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
        E: Display,
    {
        Self {
            date: format_date(now),
            time: format_time(now),
            font: fonts.current(),
            weather: WeatherLine::from_request(weather),
        }
    }
}
