use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::utils::home_path;
use super::Storable;
use crate::config::CONTEXT_STORE_PATH;
use crate::impl_store;

#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct Context {
    pub default_project: Option<String>,
    pub override_api_url: Option<String>,

    #[serde(skip)]
    pub project_override: Option<String>,
}

impl Storable for Context {
    fn path() -> Result<PathBuf> {
        home_path(CONTEXT_STORE_PATH)
    }
}

impl Context {
    /// Project from `--project`, falling back to the saved default.
    pub fn current_project_id(&self) -> Option<String> {
        self.project_override
            .clone()
            .or_else(|| self.default_project.clone())
    }
}

impl_store!(Context);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_current_project_id() {
        let mut ctx = Context::default();
        assert_eq!(ctx.current_project_id(), None);

        ctx.default_project = Some("default".to_string());
        assert_eq!(ctx.current_project_id(), Some("default".to_string()));

        ctx.project_override = Some("override".to_string());
        assert_eq!(ctx.current_project_id(), Some("override".to_string()));
    }

    #[test]
    fn test_override_is_not_persisted() {
        let ctx = Context {
            project_override: Some("override".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_string(&ctx).unwrap();

        assert!(!json.contains("project_override"));
    }
}
