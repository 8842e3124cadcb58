use std::sync::Arc;

use common::Result;
use common::config::Settings;
use tracing::info;

use crate::fetcher::{OpenWeatherFetcher, WeatherSource};
use crate::loader::{TableIdentity, WarehouseLoader};
use crate::storage::s3::S3Storage;
use crate::storage::{S3Config, S3Manager};
use crate::transform::flatten;

/// The whole pipeline behind one request: fetch, flatten, load.
pub struct IngestService {
    source: Arc<dyn WeatherSource>,
    loader: WarehouseLoader,
    table: TableIdentity,
}

impl IngestService {
    pub fn new(settings: &Settings) -> Self {
        let s3_manager = S3Manager::new(S3Config::from_settings(&settings.storage));
        let storage = Arc::new(S3Storage::new(&s3_manager, &settings.storage.bucket));

        Self::with_parts(
            Arc::new(OpenWeatherFetcher::new(&settings.weather)),
            WarehouseLoader::new(storage),
            TableIdentity::new(
                &settings.warehouse.project,
                &settings.warehouse.dataset,
                &settings.warehouse.table,
            ),
        )
    }

    /// Wires the service from explicit collaborators. Lets tests swap in a
    /// stub weather source and a local storage backend.
    pub fn with_parts(
        source: Arc<dyn WeatherSource>,
        loader: WarehouseLoader,
        table: TableIdentity,
    ) -> Self {
        Self {
            source,
            loader,
            table,
        }
    }

    /// Runs the pipeline for one city, all-or-nothing: any failure along
    /// the way fails the whole request.
    pub async fn ingest_city(&self, city: &str) -> Result<()> {
        info!(city, "Starting weather ingest");

        let document = self.source.fetch(city).await?;
        let row = flatten(&document)?;
        let batch = vec![row];

        self.loader.ensure_dataset(&self.table).await?;
        self.loader.append_rows(&self.table, &batch).await?;

        info!(
            city,
            table = %self.table.qualified_name(),
            "Weather ingest finished"
        );
        Ok(())
    }
}
