use anyhow::Result;
use clap::Parser;

use super::utils::{format_history, get_history};
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "List your past payments")]
#[group(skip)]
pub struct Options {
    #[clap(short, long, help = "Only print the IDs of the payments")]
    pub quiet: bool,
}

pub async fn handle(options: &Options, state: &State) -> Result<()> {
    let history = get_history(&state.http).await?;

    if options.quiet {
        let ids = history
            .iter()
            .map(|t| t.id.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        println!("{ids}");
    } else if history.is_empty() {
        log::info!("No payments yet");
    } else {
        println!("{}", format_history(&history, true).join("\n"));
    }

    Ok(())
}
