use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use common::{Error, Result};

use super::WeatherRow;

/// The fixed destination schema. Column order matches `WeatherRow` field
/// order; nothing here is nullable because the typed document guarantees
/// every value is present.
pub fn weather_row_schema() -> Schema {
    Schema::new(vec![
        Field::new("lon", DataType::Float64, false),
        Field::new("lat", DataType::Float64, false),
        Field::new("weather_id", DataType::Int64, false),
        Field::new("weather_main", DataType::Utf8, false),
        Field::new("weather_description", DataType::Utf8, false),
        Field::new("weather_icon", DataType::Utf8, false),
        Field::new("base", DataType::Utf8, false),
        Field::new("temp", DataType::Float64, false),
        Field::new("feels_like", DataType::Float64, false),
        Field::new("temp_min", DataType::Float64, false),
        Field::new("temp_max", DataType::Float64, false),
        Field::new("pressure", DataType::Int64, false),
        Field::new("humidity", DataType::Int64, false),
        Field::new("visibility", DataType::Int64, false),
        Field::new("wind_speed", DataType::Float64, false),
        Field::new("wind_deg", DataType::Int64, false),
        Field::new("clouds_all", DataType::Int64, false),
        Field::new("dt", DataType::Int64, false),
        Field::new("sys_type", DataType::Int64, false),
        Field::new("sys_id", DataType::Int64, false),
        Field::new("country", DataType::Utf8, false),
        Field::new("sunrise", DataType::Int64, false),
        Field::new("sunset", DataType::Int64, false),
        Field::new("timezone", DataType::Int64, false),
        Field::new("id", DataType::Int64, false),
        Field::new("name", DataType::Utf8, false),
        Field::new("cod", DataType::Int64, false),
    ])
}

/// Builds one record batch from a load batch of rows. The arrow types are
/// taken from the row data itself, which is what the destination's schema
/// auto-detection sees.
pub fn to_record_batch(rows: &[WeatherRow]) -> Result<RecordBatch> {
    if rows.is_empty() {
        return Err(Error::InvalidInput(
            "cannot build a record batch from an empty load batch".to_string(),
        ));
    }

    let float_col = |get: fn(&WeatherRow) -> f64| -> ArrayRef {
        Arc::new(Float64Array::from_iter_values(rows.iter().map(get)))
    };
    let int_col = |get: fn(&WeatherRow) -> i64| -> ArrayRef {
        Arc::new(Int64Array::from_iter_values(rows.iter().map(get)))
    };
    let string_col = |get: fn(&WeatherRow) -> &str| -> ArrayRef {
        Arc::new(StringArray::from_iter_values(rows.iter().map(get)))
    };

    let columns: Vec<ArrayRef> = vec![
        float_col(|r| r.lon),
        float_col(|r| r.lat),
        int_col(|r| r.weather_id),
        string_col(|r| &r.weather_main),
        string_col(|r| &r.weather_description),
        string_col(|r| &r.weather_icon),
        string_col(|r| &r.base),
        float_col(|r| r.temp),
        float_col(|r| r.feels_like),
        float_col(|r| r.temp_min),
        float_col(|r| r.temp_max),
        int_col(|r| r.pressure),
        int_col(|r| r.humidity),
        int_col(|r| r.visibility),
        float_col(|r| r.wind_speed),
        int_col(|r| r.wind_deg),
        int_col(|r| r.clouds_all),
        int_col(|r| r.dt),
        int_col(|r| r.sys_type),
        int_col(|r| r.sys_id),
        string_col(|r| &r.country),
        int_col(|r| r.sunrise),
        int_col(|r| r.sunset),
        int_col(|r| r.timezone),
        int_col(|r| r.id),
        string_col(|r| &r.name),
        int_col(|r| r.cod),
    ];

    let batch = RecordBatch::try_new(Arc::new(weather_row_schema()), columns)?;
    Ok(batch)
}
