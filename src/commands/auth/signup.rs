use anyhow::{ensure, Result};
use clap::Parser;

use super::input_or_prompt;
use super::utils::{ask_new_password, signup, validate_email, validate_password};
use super::verify::verify_interactive;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Create a new DMify account")]
#[group(skip)]
pub struct Options {
    #[clap(long = "email", help = "Email of the account")]
    pub email: Option<String>,
    #[clap(long = "name", help = "Your name")]
    pub name: Option<String>,
    #[clap(long = "password", help = "Password, prompted for when omitted")]
    pub password: Option<String>,
    #[clap(long = "no-verify", help = "Do not ask for the verification code")]
    pub no_verify: bool,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let email = input_or_prompt(options.email, "Email")?;
    let email = email.trim().to_string();

    validate_email(&email)?;

    let name = input_or_prompt(options.name, "Name")?;
    let name = name.trim().to_string();

    ensure!(!name.is_empty(), "Name is required");

    let password = match options.password {
        Some(password) => {
            validate_password(&password)?;
            password
        }
        None => ask_new_password("Password")?,
    };

    let message = signup(&state.http, &email, &password, &name).await?;

    log::info!("{message}");

    if options.no_verify {
        return Ok(());
    }

    verify_interactive(&state, &email).await
}
