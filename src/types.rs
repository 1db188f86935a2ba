use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
pub struct GestureResponse {
    pub processed: bool,
    pub effect: Value,
    pub parameters: Value,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}
