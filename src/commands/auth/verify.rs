use anyhow::{ensure, Result};
use clap::Parser;

use super::input_or_prompt;
use super::utils::{resend_verification, validate_email, verify_email};
use crate::config::EXEC_NAME;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Verify the email address of an account")]
#[group(skip)]
pub struct Options {
    #[clap(long = "email", help = "Email of the account")]
    pub email: Option<String>,
    #[clap(long = "code", help = "Verification code sent by email")]
    pub code: Option<String>,
    #[clap(
        long = "resend",
        help = "Send a new verification code instead",
        conflicts_with = "code"
    )]
    pub resend: bool,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let email = input_or_prompt(options.email, "Email")?;
    let email = email.trim();

    validate_email(email)?;

    if options.resend {
        let message = resend_verification(&state.http, email).await?;

        log::info!("{message}");

        return Ok(());
    }

    match options.code {
        Some(code) => verify(&state, email, &code).await,
        None => verify_interactive(&state, email).await,
    }
}

async fn verify(state: &State, email: &str, code: &str) -> Result<()> {
    let code = code.trim();

    ensure!(!code.is_empty(), "Verification code is required");

    let message = verify_email(&state.http, email, code).await?;

    log::info!("{message}");
    log::info!("Run `{EXEC_NAME} auth login` to sign in");

    Ok(())
}

pub async fn verify_interactive(state: &State, email: &str) -> Result<()> {
    let code = dialoguer::Input::<String>::new()
        .with_prompt(format!("Verification code sent to {email}"))
        .interact_text()?;

    verify(state, email, &code).await
}
