use axum::response::IntoResponse;
use axum::Json;
use log::info;
use serde_json::Value;

use crate::error::AppError;
use crate::types::{GestureResponse, HealthResponse};

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

pub async fn process_gesture(
    Json(gesture): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let effect = gesture
        .get("type")
        .ok_or_else(|| anyhow::anyhow!("gesture data has no \"type\""))?
        .clone();
    let parameters = gesture
        .get("parameters")
        .ok_or_else(|| anyhow::anyhow!("gesture data has no \"parameters\""))?
        .clone();

    info!("Processing gesture {}", effect);

    // Echo the payload back until the ML pipeline is wired in
    Ok(Json(GestureResponse {
        processed: true,
        effect,
        parameters,
    }))
}
