use anyhow::Result;
use clap::Parser;

use super::utils::{format_project, resolve_project};
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Show the details of a project")]
#[group(skip)]
pub struct Options {
    #[clap(help = "ID of the project")]
    pub project: Option<String>,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let project = resolve_project(&state, options.project).await?;

    println!("{}", format_project(&project));

    Ok(())
}
