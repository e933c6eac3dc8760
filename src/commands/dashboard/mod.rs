use anyhow::Result;
use clap::Parser;
use console::style;
use futures_util::future::try_join3;

use crate::commands::messages::utils::{format_messages, get_all_messages};
use crate::commands::payments::utils::get_credits;
use crate::commands::projects::utils::get_all_projects;
use crate::config::EXEC_NAME;
use crate::state::State;

const RECENT_MESSAGES: usize = 5;

#[derive(Debug, Parser)]
#[clap(about = "Overview of your projects, messages and credits")]
#[group(skip)]
pub struct Options {}

pub async fn handle(_options: Options, state: State) -> Result<()> {
    let (projects, messages, credits) = try_join3(
        get_all_projects(&state.http),
        get_all_messages(&state.http),
        get_credits(&state.http),
    )
    .await?;

    if let Some(user) = &state.auth.user {
        println!("Welcome back, {}!\n", style(&user.name).bold());
    }

    println!("Credits available\t{}", credits.credits);
    println!("Projects\t\t{}", projects.len());
    println!("Messages generated\t{}", messages.len());
    println!("Credits used\t\t{}", credits.total_used);

    if credits.credits <= 0 {
        println!();
        log::warn!("You are out of credits, buy more with `{EXEC_NAME} payments checkout`");
    }

    if !messages.is_empty() {
        let recent = messages.iter().take(RECENT_MESSAGES).collect::<Vec<_>>();

        println!("\n{}", style("Recent messages").bold());
        println!("{}", format_messages(&recent, true).join("\n"));
    }

    Ok(())
}
