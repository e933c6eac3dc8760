use anyhow::Result;
use clap::Parser;

use super::utils::{format_credits, get_credits};
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Show your credit balance")]
#[group(skip)]
pub struct Options {
    #[clap(short, long, help = "Only print the number of available credits")]
    pub quiet: bool,
}

pub async fn handle(options: &Options, state: &State) -> Result<()> {
    let credits = get_credits(&state.http).await?;

    if options.quiet {
        println!("{}", credits.credits);
    } else {
        println!("{}", format_credits(&credits));
    }

    Ok(())
}
