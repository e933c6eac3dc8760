use anyhow::Result;
use clap::Parser;

use super::utils::{format_jobs, get_project_jobs};
use crate::commands::projects::utils::resolve_project;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "List the generation jobs of a project")]
#[group(skip)]
pub struct Options {
    #[clap(help = "ID of the project")]
    pub project: Option<String>,
    #[clap(short, long, help = "Only show pending and processing jobs")]
    pub active: bool,
    #[clap(short, long, help = "Only print the IDs of the jobs")]
    pub quiet: bool,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let project = resolve_project(&state, options.project).await?;

    let jobs = get_project_jobs(&state.http, &project.id)
        .await?
        .into_iter()
        .filter(|job| !options.active || job.is_active())
        .collect::<Vec<_>>();

    if options.quiet {
        let ids = jobs
            .iter()
            .map(|j| j.id.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        println!("{ids}");
    } else if jobs.is_empty() {
        log::info!("No jobs for `{}`", project.name);
    } else {
        println!("{}", format_jobs(&jobs, true).join("\n"));
    }

    Ok(())
}
