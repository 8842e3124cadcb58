use std::sync::Arc;

use arrow::datatypes::Schema;
use arrow::record_batch::RecordBatch;
use chrono::Utc;
use common::Result;
use parquet::arrow::ArrowWriter;
use parquet::file::properties::WriterProperties;
use tracing::{error, info};

use crate::models::WeatherRow;
use crate::models::schema::to_record_batch;
use crate::storage::s3::ObjectStorage;

/// Datasets are pinned to one location; it is not configurable per call.
pub const DATASET_LOCATION: &str = "us-central1";

/// Addresses the destination table as `project.dataset.table`. Dataset and
/// table are created lazily on first use.
#[derive(Debug, Clone)]
pub struct TableIdentity {
    pub project: String,
    pub dataset: String,
    pub table: String,
}

impl TableIdentity {
    pub fn new(
        project: impl Into<String>,
        dataset: impl Into<String>,
        table: impl Into<String>,
    ) -> Self {
        Self {
            project: project.into(),
            dataset: dataset.into(),
            table: table.into(),
        }
    }

    pub fn dataset_prefix(&self) -> String {
        format!("{}/{}", self.project, self.dataset)
    }

    pub fn table_prefix(&self) -> String {
        format!("{}/{}/{}", self.project, self.dataset, self.table)
    }

    pub fn qualified_name(&self) -> String {
        format!("{}.{}.{}", self.project, self.dataset, self.table)
    }

    fn marker_key(&self) -> String {
        format!("{}/_dataset.json", self.dataset_prefix())
    }
}

/// Fixed load-job settings: every write appends, the table is created on
/// first use, and column types are taken from the batch itself.
#[derive(Debug, Clone)]
pub struct LoadJobConfig {
    pub write_disposition: &'static str,
    pub create_disposition: &'static str,
    pub autodetect: bool,
}

impl Default for LoadJobConfig {
    fn default() -> Self {
        Self {
            write_disposition: "WRITE_APPEND",
            create_disposition: "CREATE_IF_NEEDED",
            autodetect: true,
        }
    }
}

pub struct WarehouseLoader {
    storage: Arc<dyn ObjectStorage>,
    job_config: LoadJobConfig,
}

impl WarehouseLoader {
    pub fn new(storage: Arc<dyn ObjectStorage>) -> Self {
        Self {
            storage,
            job_config: LoadJobConfig::default(),
        }
    }

    /// Creates the dataset container if it is missing. A dataset that
    /// already exists is success; any other storage failure propagates so
    /// a permission or quota problem is not mistaken for a conflict.
    pub async fn ensure_dataset(&self, table: &TableIdentity) -> Result<()> {
        let marker_key = table.marker_key();

        if self.storage.check_file_exists(&marker_key).await? {
            info!(dataset = %table.dataset_prefix(), "Dataset already exists");
            return Ok(());
        }

        let marker = serde_json::json!({
            "dataset": table.dataset_prefix(),
            "location": DATASET_LOCATION,
            "created_at": Utc::now().to_rfc3339(),
        });
        self.storage
            .put_object(&marker_key, &serde_json::to_vec_pretty(&marker)?)
            .await?;

        info!(
            dataset = %table.dataset_prefix(),
            location = DATASET_LOCATION,
            "Created dataset"
        );
        Ok(())
    }

    /// Appends one load batch as an immutable parquet part under the table
    /// prefix and waits for the put to finish. The table springs into
    /// existence with its first part; later parts only ever add rows.
    pub async fn append_rows(&self, table: &TableIdentity, rows: &[WeatherRow]) -> Result<()> {
        let batch = to_record_batch(rows)?;

        if let Err(e) = self.write_part(table, &batch).await {
            error!(
                table = %table.qualified_name(),
                columns = ?column_types(&batch.schema()),
                job_config = ?self.job_config,
                error = %e,
                "Load job failed"
            );
            return Err(e);
        }

        info!(
            table = %table.qualified_name(),
            rows = rows.len(),
            bucket = self.storage.bucket(),
            "Appended rows to warehouse table"
        );
        Ok(())
    }

    async fn write_part(&self, table: &TableIdentity, batch: &RecordBatch) -> Result<()> {
        let mut buffer: Vec<u8> = Vec::new();

        let mut writer = ArrowWriter::try_new(
            &mut buffer,
            batch.schema(),
            Some(WriterProperties::builder().build()),
        )?;
        writer.write(batch)?;
        writer.close()?;

        let timestamp = Utc::now().timestamp_nanos_opt().unwrap_or_default();
        let part_key = format!("{}/part-{}.parquet", table.table_prefix(), timestamp);

        self.storage.put_object(&part_key, &buffer).await
    }
}

fn column_types(schema: &Schema) -> Vec<String> {
    schema
        .fields()
        .iter()
        .map(|f| format!("{}: {}", f.name(), f.data_type()))
        .collect()
}
