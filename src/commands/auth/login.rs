use anyhow::Result;
use clap::Parser;

use super::input_or_prompt;
use super::utils::{login, validate_email};
use crate::state::http::HttpClient;
use crate::state::State;
use crate::store::Store;

#[derive(Debug, Parser)]
#[clap(about = "Login to DMify")]
#[group(skip)]
pub struct Options {
    #[clap(long = "email", help = "Email of the account")]
    pub email: Option<String>,
    #[clap(
        long = "password",
        help = "Password",
        long_help = "Password of the account, prompted for when omitted"
    )]
    pub password: Option<String>,
}

pub async fn handle(options: Options, mut state: State) -> Result<()> {
    let email = input_or_prompt(options.email, "Email")?;
    let email = email.trim();

    validate_email(email)?;

    let password = match options.password {
        Some(password) => password,
        None => dialoguer::Password::new()
            .with_prompt("Password")
            .interact()?,
    };

    // the old token, if any, has nothing to do with this login
    let http = HttpClient::new(None, Some(state.api_url().to_string()))?;

    let response = match login(&http, email, &password).await {
        Ok(response) => response,

        Err(error) => {
            // never keep a stale session around after a failed login
            if state.auth.is_authenticated() {
                state.logout().await?;
            }

            return Err(error);
        }
    };

    let user = response.user.clone();

    // projects belong to the previous account
    if state.auth.user.as_ref().map(|u| &u.id) != Some(&user.id) {
        state.ctx.default_project = None;
        state.ctx.save().await?;
    }

    state.login(response.access_token, user.clone()).await?;

    log::info!("Logged in as `{}` ({})", user.name, user.email);

    Ok(())
}
