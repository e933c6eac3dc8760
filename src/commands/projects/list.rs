use anyhow::Result;
use clap::Parser;

use super::utils::{format_projects, get_all_projects};
use crate::config::EXEC_NAME;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "List all projects")]
#[group(skip)]
pub struct Options {
    #[clap(short, long, help = "Only print the IDs of the projects")]
    pub quiet: bool,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let projects = get_all_projects(&state.http).await?;

    if options.quiet {
        let ids = projects
            .iter()
            .map(|p| p.id.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        println!("{ids}");

        return Ok(());
    }

    if projects.is_empty() {
        log::info!("No projects yet, create one with `{EXEC_NAME} projects new`");

        return Ok(());
    }

    let projects_fmt = format_projects(&projects, &state.ctx.default_project, true);

    println!("{}", projects_fmt.join("\n"));

    Ok(())
}
