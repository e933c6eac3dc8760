use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Message {
    pub id: String,
    pub username: String,
    pub generated_message: String,
    /// Scraped profile data, the shape is owned by the server
    #[serde(default)]
    pub user_info: Value,
    pub created_at: String,
}

impl Message {
    pub fn full_name(&self) -> Option<&str> {
        self.user_info
            .get("fullName")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
    }

    pub fn followers(&self) -> Option<u64> {
        self.user_info.get("followersCount").and_then(Value::as_u64)
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateMessage<'a> {
    pub generated_message: &'a str,
}
