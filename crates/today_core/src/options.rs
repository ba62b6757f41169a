use std::fmt;

use serde::{Deserialize, Serialize};

/// Temperature unit requested from the weather provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DegreeType {
    #[default]
    F,
    C,
}

impl DegreeType {
    pub fn as_str(self) -> &'static str {
        match self {
            DegreeType::F => "F",
            DegreeType::C => "C",
        }
    }
}

impl fmt::Display for DegreeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query parameters for one weather lookup.
///
/// Equality is by content: two separately built values with the same search
/// and unit compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeatherOptions {
    pub search: String,
    #[serde(rename = "degreeType")]
    pub degree_type: DegreeType,
}

impl WeatherOptions {
    pub fn new(search: impl Into<String>, degree_type: DegreeType) -> Self {
        Self {
            search: search.into(),
            degree_type,
        }
    }
}

impl Default for WeatherOptions {
    fn default() -> Self {
        Self::new("New York City, NY", DegreeType::F)
    }
}
