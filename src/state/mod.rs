pub mod http;

use anyhow::{ensure, Result};

use self::http::HttpClient;
use crate::commands::auth::types::User;
use crate::config::EXEC_NAME;
use crate::store::auth::Auth;
use crate::store::context::Context;
use crate::store::Store;

#[derive(Debug)]
pub struct State {
    pub auth: Auth,
    pub ctx: Context,
    pub http: HttpClient,
    api_url: Option<String>,
    token: Option<String>,
}

pub struct StateOptions {
    pub override_project: Option<String>,
    pub override_token: Option<String>,
    pub override_api_url: Option<String>,
}

impl State {
    pub async fn new(options: StateOptions) -> Result<Self> {
        let auth = Auth::new().await?;
        let mut ctx = Context::new().await?;

        ctx.project_override = options.override_project;

        // env token wins over the stored one
        let token = options
            .override_token
            .filter(|token| !token.is_empty())
            .or_else(|| auth.token.clone());

        let api_url = options
            .override_api_url
            .or_else(|| ctx.override_api_url.clone());

        let http = HttpClient::new(token.clone(), api_url.clone())?;

        Ok(State {
            auth,
            ctx,
            http,
            api_url,
            token,
        })
    }

    /// A session may come from the auth store or from the environment.
    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    /// Makes sure a token is available before running an authorized command.
    pub fn ensure_logged_in(&self) -> Result<()> {
        ensure!(
            self.is_logged_in(),
            "You are not logged in. Please run `{} auth login` first.",
            EXEC_NAME
        );

        Ok(())
    }

    /// Persists a fresh session and rebuilds the http client with it.
    pub async fn login(&mut self, token: String, user: User) -> Result<()> {
        self.http = HttpClient::new(Some(token.clone()), self.api_url.clone())?;
        self.token = Some(token.clone());

        self.auth.token = Some(token);
        self.auth.user = Some(user);
        self.auth.save().await?;

        Ok(())
    }

    /// Forgets the stored credentials, the http client is left unauthorized.
    pub async fn logout(&mut self) -> Result<()> {
        self.http = HttpClient::new(None, self.api_url.clone())?;
        self.token = None;

        self.auth.clear();
        self.auth.save().await?;

        Ok(())
    }

    pub fn api_url(&self) -> &str {
        &self.http.base_url
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn state(token: Option<&str>) -> State {
        let token = token.map(str::to_string);

        State {
            auth: Auth::default(),
            ctx: Context::default(),
            http: HttpClient::new(token.clone(), None).unwrap(),
            api_url: None,
            token,
        }
    }

    #[test]
    fn test_env_token_is_logged_in() {
        // nothing stored, token only given through the environment
        let state = state(Some("eyJ0eXAi"));

        assert!(!state.auth.is_authenticated());
        assert!(state.is_logged_in());
        assert!(state.ensure_logged_in().is_ok());
    }

    #[test]
    fn test_not_logged_in() {
        let state = state(None);

        assert!(!state.is_logged_in());
        assert_eq!(
            state.ensure_logged_in().unwrap_err().to_string(),
            format!("You are not logged in. Please run `{EXEC_NAME} auth login` first.")
        );
    }
}
