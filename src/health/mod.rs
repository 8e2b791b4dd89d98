use axum::response::Json;
use serde::{Deserialize, Serialize};


#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct HealthCheckResponse {
    pub error: bool,
}

#[axum::debug_handler]
pub async fn healthcheck() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse { error: false })
}
