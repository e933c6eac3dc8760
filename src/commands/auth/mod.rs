mod delete_account;
mod login;
mod logout;
mod password;
mod signup;
pub mod types;
pub mod utils;
mod verify;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::state::State;

#[derive(Debug, Subcommand)]
pub enum Commands {
    Login(login::Options),
    Logout(logout::Options),
    #[clap(name = "signup", alias = "register")]
    Signup(signup::Options),
    Verify(verify::Options),
    #[clap(name = "forgot-password")]
    ForgotPassword(password::ForgotOptions),
    #[clap(name = "reset-password")]
    ResetPassword(password::ResetOptions),
    #[clap(name = "delete-account")]
    DeleteAccount(delete_account::Options),
}

#[derive(Debug, Parser)]
#[clap(about = "Authenticate with DMify")]
#[group(skip)]
pub struct Options {
    #[clap(subcommand)]
    pub commands: Commands,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    match options.commands {
        Commands::Login(options) => login::handle(options, state).await,
        Commands::Logout(options) => logout::handle(options, state).await,
        Commands::Signup(options) => signup::handle(options, state).await,
        Commands::Verify(options) => verify::handle(options, state).await,
        Commands::ForgotPassword(options) => password::handle_forgot(options, state).await,
        Commands::ResetPassword(options) => password::handle_reset(options, state).await,
        Commands::DeleteAccount(options) => delete_account::handle(options, state).await,
    }
}

/// Takes the flag value or asks for it.
pub(crate) fn input_or_prompt(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => Ok(dialoguer::Input::<String>::new()
            .with_prompt(prompt)
            .interact_text()?),
    }
}
