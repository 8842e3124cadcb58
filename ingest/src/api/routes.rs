use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::post};
use tower_http::trace::TraceLayer;

use super::models::{IngestRequest, IngestResponse};
use crate::services::{AppError, IngestService};

/// `POST /` with `{"city": "<name>"}`. Success means the row made it into
/// the warehouse; every failure surfaces through `AppError`.
pub async fn ingest_weather(
    State(service): State<Arc<IngestService>>,
    Json(request): Json<IngestRequest>,
) -> Result<Json<IngestResponse>, AppError> {
    service.ingest_city(&request.city).await?;
    Ok(Json(IngestResponse::success()))
}

// Define all API routes
pub fn routes(service: Arc<IngestService>) -> Router {
    Router::new()
        .route("/", post(ingest_weather))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}
