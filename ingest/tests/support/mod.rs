#![allow(dead_code)]

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use common::Result;
use ingest::models::WeatherRow;
use ingest::storage::s3::ObjectStorage;

/// Filesystem stand-in for the warehouse bucket: keys become paths under a
/// temporary root.
pub struct DirStorage {
    root: PathBuf,
}

impl DirStorage {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }
}

#[async_trait]
impl ObjectStorage for DirStorage {
    async fn put_object(&self, key: &str, data: &[u8]) -> Result<()> {
        let path = self.root.join(key);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, data).await?;
        Ok(())
    }

    async fn check_file_exists(&self, key: &str) -> Result<bool> {
        Ok(tokio::fs::try_exists(self.root.join(key)).await?)
    }

    fn bucket(&self) -> &str {
        "test-warehouse"
    }
}

pub fn sample_row(name: &str, dt: i64) -> WeatherRow {
    WeatherRow {
        lon: -0.13,
        lat: 51.51,
        weather_id: 800,
        weather_main: "Clear".to_string(),
        weather_description: "clear sky".to_string(),
        weather_icon: "01d".to_string(),
        base: "stations".to_string(),
        temp: 280.32,
        feels_like: 278.35,
        temp_min: 279.15,
        temp_max: 281.15,
        pressure: 1012,
        humidity: 81,
        visibility: 10000,
        wind_speed: 4.1,
        wind_deg: 80,
        clouds_all: 0,
        dt,
        sys_type: 1,
        sys_id: 5091,
        country: "GB".to_string(),
        sunrise: 1485762037,
        sunset: 1485794875,
        timezone: 0,
        id: 2643743,
        name: name.to_string(),
        cod: 200,
    }
}
