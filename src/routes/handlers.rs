use crate::error::AppResult;
use crate::routes::types::RootResponse;
use axum::response::IntoResponse;
use axum::Json;

/// Root endpoint; reports that the API is up
pub async fn root() -> AppResult<impl IntoResponse> {
    Ok(Json(RootResponse {
        message: "API running".to_string(),
    }))
}
