use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct GenerateRequest<'a> {
    pub username: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user_info: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message_id: Option<String>,
}
