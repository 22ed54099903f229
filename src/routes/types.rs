use serde::Serialize;

/// Root endpoint response
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
}
