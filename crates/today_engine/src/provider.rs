use std::time::Duration;

use today_core::{WeatherOptions, WeatherResult};
use today_logging::today_debug;
use url::Url;

use crate::{FailureKind, FetchError, Fetcher};

#[derive(Debug, Clone)]
pub struct ProviderSettings {
    /// Queried as `GET <endpoint>?search=..&degreeType=..`, answering with a
    /// JSON array of weather results.
    pub endpoint: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl ProviderSettings {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// HTTP weather lookup over `reqwest`.
#[derive(Debug, Clone)]
pub struct WeatherProvider {
    settings: ProviderSettings,
}

impl WeatherProvider {
    pub fn new(settings: ProviderSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, FetchError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
    }

    fn query_url(&self, options: &WeatherOptions) -> Result<Url, FetchError> {
        Url::parse_with_params(
            &self.settings.endpoint,
            &[
                ("search", options.search.as_str()),
                ("degreeType", options.degree_type.as_str()),
            ],
        )
        .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))
    }
}

#[async_trait::async_trait]
impl Fetcher for WeatherProvider {
    type Options = WeatherOptions;
    type Output = Vec<WeatherResult>;
    type Error = FetchError;

    async fn fetch(&self, options: &WeatherOptions) -> Result<Vec<WeatherResult>, FetchError> {
        let url = self.query_url(options)?;
        let client = self.build_client()?;
        today_debug!("weather lookup url={}", url);

        let response = client.get(url).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        let results: Vec<WeatherResult> = serde_json::from_slice(&body)
            .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))?;

        if results.is_empty() {
            return Err(FetchError::new(
                FailureKind::Empty,
                format!("no weather found for {:?}", options.search),
            ));
        }
        Ok(results)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
