use anyhow::{ensure, Result};
use clap::Parser;

use super::input_or_prompt;
use super::utils::{ask_new_password, forgot_password, reset_password, validate_email};
use crate::config::EXEC_NAME;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Request a password reset email")]
#[group(skip)]
pub struct ForgotOptions {
    #[clap(long = "email", help = "Email of the account")]
    pub email: Option<String>,
}

#[derive(Debug, Parser)]
#[clap(about = "Set a new password using the token from the reset email")]
#[group(skip)]
pub struct ResetOptions {
    #[clap(long = "email", help = "Email of the account")]
    pub email: Option<String>,
    #[clap(long = "token", help = "Reset token from the email link")]
    pub token: Option<String>,
}

pub async fn handle_forgot(options: ForgotOptions, state: State) -> Result<()> {
    let email = input_or_prompt(options.email, "Email")?;
    let email = email.trim();

    validate_email(email)?;

    let message = forgot_password(&state.http, email).await?;

    log::info!("{message}");
    log::info!("Then run `{EXEC_NAME} auth reset-password` with the token from the email");

    Ok(())
}

pub async fn handle_reset(options: ResetOptions, state: State) -> Result<()> {
    let email = input_or_prompt(options.email, "Email")?;
    let email = email.trim();

    validate_email(email)?;

    let token = input_or_prompt(options.token, "Reset token")?;
    let token = token.trim();

    ensure!(!token.is_empty(), "Reset token is required");

    let new_password = ask_new_password("New password")?;

    let message = reset_password(&state.http, email, token, &new_password).await?;

    log::info!("{message}");
    log::info!("Please sign in with `{EXEC_NAME} auth login --email {email}`");

    Ok(())
}
