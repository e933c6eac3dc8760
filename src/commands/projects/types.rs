use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub product_info: String,
    pub offer_info: String,
    pub created_at: String,
}

#[derive(Debug, Serialize)]
pub struct CreateProject {
    pub name: String,
    pub product_info: String,
    pub offer_info: String,
}

#[derive(Debug, Serialize, Default, PartialEq, Eq)]
pub struct UpdateProject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer_info: Option<String>,
}

impl UpdateProject {
    /// Blank values mean "leave unchanged".
    pub fn new(
        name: Option<String>,
        product_info: Option<String>,
        offer_info: Option<String>,
    ) -> Self {
        let keep = |value: Option<String>| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            name: keep(name),
            product_info: keep(product_info),
            offer_info: keep(offer_info),
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
