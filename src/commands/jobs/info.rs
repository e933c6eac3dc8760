use anyhow::Result;
use clap::Parser;

use super::utils::{format_job, get_job};
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Show the status of a job")]
#[group(skip)]
pub struct Options {
    #[clap(help = "ID of the job")]
    pub job: String,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let job = get_job(&state.http, &options.job).await?;

    println!("{}", format_job(&job));

    Ok(())
}
