mod support;

use std::sync::Arc;

use datafusion::prelude::{ParquetReadOptions, SessionContext};
use ingest::loader::{TableIdentity, WarehouseLoader};
use tempfile::TempDir;

use support::{DirStorage, sample_row};

fn loader_in(dir: &TempDir) -> WarehouseLoader {
    WarehouseLoader::new(Arc::new(DirStorage::new(dir.path())))
}

fn table() -> TableIdentity {
    TableIdentity::new("analytics", "weather", "current")
}

#[tokio::test]
async fn ensure_dataset_creates_marker_once() {
    let dir = TempDir::new().unwrap();
    let loader = loader_in(&dir);
    let table = table();

    loader.ensure_dataset(&table).await.unwrap();
    let marker = dir.path().join("analytics/weather/_dataset.json");
    assert!(marker.exists());
    let first_contents = std::fs::read(&marker).unwrap();

    // Second call is success without rewriting the marker
    loader.ensure_dataset(&table).await.unwrap();
    assert_eq!(std::fs::read(&marker).unwrap(), first_contents);
}

#[tokio::test]
async fn append_twice_adds_exactly_two_rows() {
    let dir = TempDir::new().unwrap();
    let loader = loader_in(&dir);
    let table = table();

    loader.ensure_dataset(&table).await.unwrap();
    loader
        .append_rows(&table, &[sample_row("London", 1485789600)])
        .await
        .unwrap();
    loader
        .append_rows(&table, &[sample_row("Paris", 1485793200)])
        .await
        .unwrap();

    let table_dir = dir.path().join("analytics/weather/current");
    assert_eq!(table_dir.read_dir().unwrap().count(), 2);

    let ctx = SessionContext::new();
    let df = ctx
        .read_parquet(
            table_dir.to_str().unwrap(),
            ParquetReadOptions::default(),
        )
        .await
        .unwrap();
    assert_eq!(df.count().await.unwrap(), 2);
}

#[tokio::test]
async fn appended_parts_keep_the_fixed_column_types() {
    let dir = TempDir::new().unwrap();
    let loader = loader_in(&dir);
    let table = table();

    loader
        .append_rows(&table, &[sample_row("London", 1485789600)])
        .await
        .unwrap();

    let table_dir = dir.path().join("analytics/weather/current");
    let ctx = SessionContext::new();
    let df = ctx
        .read_parquet(
            table_dir.to_str().unwrap(),
            ParquetReadOptions::default(),
        )
        .await
        .unwrap();

    let schema = df.schema();
    assert_eq!(schema.fields().len(), 27);
    assert_eq!(
        schema.field_with_unqualified_name("lon").unwrap().data_type(),
        &datafusion::arrow::datatypes::DataType::Float64
    );
    assert_eq!(
        schema
            .field_with_unqualified_name("humidity")
            .unwrap()
            .data_type(),
        &datafusion::arrow::datatypes::DataType::Int64
    );
    assert_eq!(
        schema
            .field_with_unqualified_name("country")
            .unwrap()
            .data_type(),
        &datafusion::arrow::datatypes::DataType::Utf8
    );
}

#[tokio::test]
async fn empty_batch_fails_before_touching_storage() {
    let dir = TempDir::new().unwrap();
    let loader = loader_in(&dir);
    let table = table();

    assert!(loader.append_rows(&table, &[]).await.is_err());
    assert!(!dir.path().join("analytics/weather/current").exists());
}
