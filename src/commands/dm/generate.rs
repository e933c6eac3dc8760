use anyhow::Result;
use clap::Parser;

use super::utils::{generate_dm, normalize_username};
use crate::commands::auth::input_or_prompt;
use crate::commands::payments::utils::{ensure_credits, get_credits};
use crate::commands::projects::utils::resolve_project;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Generate a DM for an Instagram user and wait for it")]
#[group(skip)]
pub struct Options {
    #[clap(help = "Instagram username, with or without @")]
    pub username: Option<String>,
    #[clap(short, long, help = "Print only the message text")]
    pub raw: bool,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let username = input_or_prompt(options.username, "Instagram username")?;
    let username = normalize_username(&username)?;

    let (project, credits) = tokio::try_join!(
        resolve_project(&state, None),
        get_credits(&state.http)
    )?;

    ensure_credits(&credits)?;

    log::info!("Generating a DM for @{username} in `{}`", project.name);

    let response = generate_dm(&state.http, &project.id, &username).await?;

    let message = response.message.unwrap_or_default();

    if options.raw {
        print!("{message}");

        return Ok(());
    }

    println!("\n{}\n", message.trim_end());

    if let Some(id) = response.message_id {
        log::info!("DM generated successfully! Saved as `{id}`");
    } else {
        log::info!("DM generated successfully!");
    }

    Ok(())
}
