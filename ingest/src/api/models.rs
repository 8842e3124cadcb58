use serde::{Deserialize, Serialize};

// Request models
#[derive(Debug, Deserialize)]
pub struct IngestRequest {
    pub city: String,
}

// Response models
#[derive(Debug, Serialize)]
pub struct IngestResponse {
    pub status: &'static str,
}

impl IngestResponse {
    pub fn success() -> Self {
        Self { status: "success" }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message),
        }
    }
}
