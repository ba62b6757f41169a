use std::fmt;

use thiserror::Error;

use crate::{RequestState, WeatherResult};

/// Result payload did not have the shape the formatter reads.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("weather result is empty")]
    EmptyResult,
    #[error("forecast has {0} entries, need at least 2")]
    MissingForecast(usize),
}

/// The fields shown on the weather line, already extracted from a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherSummary {
    pub unit: String,
    pub temperature: String,
    pub condition: String,
    pub low: String,
    pub high: String,
}

impl fmt::Display for WeatherSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = &self.unit;
        write!(
            f,
            "{}°{unit} and {} ({}°{unit} → {}°{unit})",
            self.temperature, self.condition, self.low, self.high
        )
    }
}

/// Reads the first result entry and the next-period (second) forecast.
pub fn summarize(results: &[WeatherResult]) -> Result<WeatherSummary, FormatError> {
    let first = results.first().ok_or(FormatError::EmptyResult)?;
    let next = first
        .forecast
        .get(1)
        .ok_or(FormatError::MissingForecast(first.forecast.len()))?;

    Ok(WeatherSummary {
        unit: first.location.degreetype.clone(),
        temperature: first.current.temperature.clone(),
        condition: first.current.skytext.clone(),
        low: next.low.clone(),
        high: next.high.clone(),
    })
}

/// `"<temp>°<unit> and <condition> (<low>°<unit> → <high>°<unit>)"`
pub fn format_weather(results: &[WeatherResult]) -> Result<String, FormatError> {
    summarize(results).map(|summary| summary.to_string())
}

/// Maps a request state to its display text. Only the `Complete` arm can
/// fail, and only through `format_data`.
pub fn format_request<T, E, F>(
    state: &RequestState<T, E>,
    format_data: F,
) -> Result<String, FormatError>
where
    E: fmt::Display,
    F: FnOnce(&T) -> Result<String, FormatError>,
{
    match state {
        RequestState::Loading => Ok("Loading...".to_string()),
        RequestState::Error(error) => Ok(format!("Error: {error}")),
        RequestState::Complete(data) => format_data(data),
    }
}
