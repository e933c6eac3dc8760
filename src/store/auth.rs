use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::utils::home_path;
use super::Storable;
use crate::commands::auth::types::User;
use crate::config::AUTH_STORE_PATH;
use crate::impl_store;

/// Credentials of the signed in user, kept between invocations.
#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct Auth {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl Storable for Auth {
    fn path() -> Result<PathBuf> {
        home_path(AUTH_STORE_PATH)
    }
}

impl Auth {
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().map_or(false, |t| !t.is_empty())
    }

    pub fn clear(&mut self) {
        self.token = None;
        self.user = None;
    }
}

impl_store!(Auth);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_is_authenticated() {
        let mut auth = Auth::default();
        assert!(!auth.is_authenticated());

        auth.token = Some(String::new());
        assert!(!auth.is_authenticated());

        auth.token = Some("eyJhbGciOi".to_string());
        assert!(auth.is_authenticated());

        auth.clear();
        assert!(!auth.is_authenticated());
        assert!(auth.user.is_none());
    }

    #[test]
    fn test_deserialize_empty_store() {
        let auth: Auth = serde_json::from_str("{}").unwrap();

        assert!(auth.token.is_none());
        assert!(auth.user.is_none());
    }
}
