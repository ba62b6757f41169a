use serde::{Deserialize, Deserializer};

/// One entry of the provider's result collection. Only the fields the widget
/// reads are modelled; everything else in the payload is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeatherResult {
    pub location: Location,
    pub current: CurrentConditions,
    #[serde(default)]
    pub forecast: Vec<DayForecast>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub name: String,
    pub degreetype: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CurrentConditions {
    #[serde(deserialize_with = "text_or_number")]
    pub temperature: String,
    pub skytext: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DayForecast {
    #[serde(deserialize_with = "text_or_number")]
    pub low: String,
    #[serde(deserialize_with = "text_or_number")]
    pub high: String,
}

// Providers disagree on whether readings are JSON strings or numbers.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Reading {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    Ok(match Reading::deserialize(deserializer)? {
        Reading::Text(text) => text,
        Reading::Integer(value) => value.to_string(),
        Reading::Float(value) => value.to_string(),
    })
}
