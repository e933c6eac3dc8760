#![warn(clippy::pedantic)]

use anyhow::Result;
use clap::Parser;
use dmify_cli::commands::handle_command;
use dmify_cli::config::{API_URL_ENV, TOKEN_ENV};
use dmify_cli::state::http::types::should_forget_session;
use dmify_cli::state::{State, StateOptions};
use dmify_cli::store::auth::Auth;
use dmify_cli::store::Store;
use dmify_cli::{utils, CLI};

#[tokio::main]
async fn main() {
    // setup panic hook
    utils::set_hook();

    let cli = CLI::parse();

    utils::logs(cli.verbose);

    if let Err(error) = run(cli).await {
        // a rejected token is useless, drop it like a fresh start
        if should_forget_session(&error) {
            if let Err(error) = forget_session().await {
                log::debug!("Failed to clear the stored session: {error}");
            }
        }

        log::error!("{error}");
        utils::clean_term();
        std::process::exit(1);
    }

    utils::clean_term();
}

async fn run(cli: CLI) -> Result<()> {
    let state = State::new(StateOptions {
        override_project: cli.project,
        override_token: std::env::var(TOKEN_ENV).ok(),
        override_api_url: std::env::var(API_URL_ENV).ok(),
    })
    .await?;

    handle_command(cli.commands, state).await
}

async fn forget_session() -> Result<()> {
    let mut auth = Auth::new().await?;

    auth.clear();
    auth.save().await?;

    Ok(())
}
