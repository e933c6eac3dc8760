use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct CreditInfo {
    pub credits: i64,
    #[serde(default)]
    pub total_earned: i64,
    #[serde(default)]
    pub total_used: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PaymentPlan {
    pub plan_id: String,
    pub name: String,
    pub description: String,
    pub credits: u64,
    /// In cents
    pub amount: u64,
    pub price_id: String,
}

#[derive(Debug, Serialize)]
pub struct CreateCheckout<'a> {
    pub plan_id: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct CheckoutResponse {
    pub session_id: String,
    pub checkout_url: String,
    #[serde(default)]
    pub plan: Value,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Transaction {
    pub id: String,
    pub amount: u64,
    pub credits: u64,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Subscription {
    #[serde(default, alias = "plan_id", alias = "tier")]
    pub plan: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
