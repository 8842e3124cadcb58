use config::{Config, ConfigError};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub weather: WeatherConfig,
    pub warehouse: WarehouseConfig,
    pub storage: StorageSettings,
    #[serde(default = "default_api_port")]
    pub api_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    pub api_key: String,
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WarehouseConfig {
    pub project: String,
    pub dataset: String,
    pub table: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageSettings {
    pub endpoint: String,
    pub access_key: String,
    pub secret_key: String,
    #[serde(default = "default_storage_region")]
    pub region: String,
    #[serde(default = "default_warehouse_bucket")]
    pub bucket: String,
}

fn default_weather_base_url() -> String {
    "http://api.openweathermap.org".to_string()
}

fn default_storage_region() -> String {
    "us-east-1".to_string()
}

fn default_warehouse_bucket() -> String {
    "warehouse".to_string()
}

fn default_api_port() -> u16 {
    8080
}

impl Settings {
    pub fn new(path: &str) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(config::Environment::with_prefix("APP").separator("__"));

        // Build the configuration
        let config = builder.build()?;

        // Try to deserialize the entire configuration
        let settings: Settings = config.try_deserialize()?;

        debug!(
            project = %settings.warehouse.project,
            dataset = %settings.warehouse.dataset,
            table = %settings.warehouse.table,
            "Parsed warehouse destination"
        );

        // Required fields must be present before the first request, not
        // discovered deep inside one.
        settings.validate()?;

        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("weather.api_key", &self.weather.api_key),
            ("warehouse.project", &self.warehouse.project),
            ("warehouse.dataset", &self.warehouse.dataset),
            ("warehouse.table", &self.warehouse.table),
        ];

        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Message(format!(
                    "missing required configuration value: {}",
                    key
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> (tempfile::TempDir, String) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ingest.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        (dir, path.to_string_lossy().into_owned())
    }

    #[test]
    fn loads_settings_with_defaults() {
        let (_dir, path) = write_config(
            r#"
            [weather]
            api_key = "secret"

            [warehouse]
            project = "analytics"
            dataset = "weather"
            table = "current"

            [storage]
            endpoint = "http://localhost:9000"
            access_key = "minio"
            secret_key = "minio123"
            "#,
        );

        let settings = Settings::new(&path).unwrap();
        assert_eq!(settings.api_port, 8080);
        assert_eq!(settings.storage.region, "us-east-1");
        assert_eq!(settings.storage.bucket, "warehouse");
        assert_eq!(settings.weather.base_url, "http://api.openweathermap.org");
        assert_eq!(settings.warehouse.table, "current");
    }

    #[test]
    fn rejects_empty_api_key_at_startup() {
        let (_dir, path) = write_config(
            r#"
            [weather]
            api_key = ""

            [warehouse]
            project = "analytics"
            dataset = "weather"
            table = "current"

            [storage]
            endpoint = "http://localhost:9000"
            access_key = "minio"
            secret_key = "minio123"
            "#,
        );

        let err = Settings::new(&path).unwrap_err();
        assert!(err.to_string().contains("weather.api_key"));
    }
}
