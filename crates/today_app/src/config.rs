use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use today_core::{DegreeType, WeatherOptions};
use today_engine::{ProviderSettings, RefreshInterval};
use today_logging::{today_info, today_warn};

use crate::ui::layout::Geometry;

pub const DEFAULT_CONFIG_PATH: &str = "./today.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Everything the widget needs, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// `None` disables periodic refresh.
    pub update_interval_ms: Option<u64>,
    pub search: String,
    pub degree_type: DegreeType,
    pub endpoint: String,
    /// Directory holding `<style name>.flf` FIGlet fonts.
    pub font_dir: Option<PathBuf>,
    pub geometry: Geometry,
}

impl Default for AppConfig {
    fn default() -> Self {
        let options = WeatherOptions::default();
        Self {
            update_interval_ms: Some(900_000),
            search: options.search,
            degree_type: options.degree_type,
            endpoint: "http://127.0.0.1:8000/weather".to_string(),
            font_dir: None,
            geometry: Geometry::default(),
        }
    }
}

impl AppConfig {
    pub fn options(&self) -> WeatherOptions {
        WeatherOptions::new(self.search.clone(), self.degree_type)
    }

    pub fn refresh_interval(&self) -> RefreshInterval {
        RefreshInterval::from_millis(self.update_interval_ms)
    }

    pub fn provider_settings(&self) -> ProviderSettings {
        ProviderSettings::new(self.endpoint.clone())
    }
}

/// Reads the RON config at `path`. A missing file yields the defaults.
pub fn load(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            today_warn!("No config at {:?}, using defaults", path);
            return Ok(AppConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let config: AppConfig = ron::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    today_info!("Loaded config from {:?}", path);
    Ok(config)
}
