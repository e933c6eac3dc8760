use anyhow::Result;
use clap::Parser;

use super::utils::{filter_messages, format_messages, get_all_messages, get_project_messages};
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "List generated messages")]
#[group(skip)]
pub struct Options {
    #[clap(
        help = "ID of the project, messages of every project are listed when omitted",
        long_help = "ID of the project, messages of every project are listed when omitted (the global `--project` flag is honored too)"
    )]
    pub project: Option<String>,
    #[clap(short, long, help = "Only show messages whose username or text contains this")]
    pub search: Option<String>,
    #[clap(short, long, help = "Only print the IDs of the messages")]
    pub quiet: bool,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let messages = match options.project.or_else(|| state.ctx.project_override.clone()) {
        Some(project_id) => get_project_messages(&state.http, &project_id).await?,
        None => get_all_messages(&state.http).await?,
    };

    let query = options.search.unwrap_or_default();
    let filtered = filter_messages(&messages, &query);

    if options.quiet {
        let ids = filtered
            .iter()
            .map(|m| m.id.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        println!("{ids}");

        return Ok(());
    }

    if filtered.is_empty() {
        if query.is_empty() {
            log::info!("No messages yet");
        } else {
            log::info!("No messages found matching `{query}`");
        }

        return Ok(());
    }

    println!("{}", format_messages(&filtered, true).join("\n"));

    if !query.is_empty() {
        log::info!(
            "Showing {} of {} messages",
            filtered.len(),
            messages.len()
        );
    }

    Ok(())
}
