use async_trait::async_trait;
use rquest::Client;
use url::Url;

use common::config::WeatherConfig;
use common::{Error, Result};

use crate::models::RawWeatherDocument;

/// Seam between the pipeline and the upstream weather provider.
#[async_trait]
pub trait WeatherSource: Send + Sync {
    async fn fetch(&self, city: &str) -> Result<RawWeatherDocument>;
}

pub struct OpenWeatherFetcher {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenWeatherFetcher {
    pub fn new(config: &WeatherConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
        }
    }

    fn request_url(&self, city: &str) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)?;
        url.set_path("/data/2.5/weather");
        url.query_pairs_mut()
            .append_pair("q", city)
            .append_pair("appid", &self.api_key)
            .append_pair("units", "metric");
        Ok(url)
    }
}

#[async_trait]
impl WeatherSource for OpenWeatherFetcher {
    /// One GET against the provider, no retry and no timeout override.
    /// Transport failures propagate as-is; a body that does not match the
    /// expected document shape (including upstream error payloads) is a
    /// malformed document.
    async fn fetch(&self, city: &str) -> Result<RawWeatherDocument> {
        let url = self.request_url(city)?;
        let body = self.client.get(url.as_str()).send().await?.text().await?;

        serde_json::from_str(&body).map_err(|e| {
            Error::MalformedDocument(format!("unexpected weather payload: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetcher() -> OpenWeatherFetcher {
        OpenWeatherFetcher::new(&WeatherConfig {
            api_key: "test-key".to_string(),
            base_url: "http://api.openweathermap.org".to_string(),
        })
    }

    #[test]
    fn request_url_embeds_city_key_and_metric_units() {
        let url = fetcher().request_url("London").unwrap();
        assert_eq!(
            url.as_str(),
            "http://api.openweathermap.org/data/2.5/weather?q=London&appid=test-key&units=metric"
        );
    }

    #[test]
    fn request_url_escapes_city_names_with_spaces() {
        let url = fetcher().request_url("New York").unwrap();
        assert!(url.query().unwrap().contains("q=New+York"));
    }
}
