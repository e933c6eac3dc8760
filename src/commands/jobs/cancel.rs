use anyhow::{ensure, Result};
use clap::Parser;

use super::utils::{cancel_job, get_job};
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Cancel queued jobs")]
#[group(skip)]
pub struct Options {
    #[clap(name = "jobs", help = "IDs of the jobs", required = true)]
    pub jobs: Vec<String>,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let mut cancelled = 0;

    for job_id in &options.jobs {
        let result = async {
            let job = get_job(&state.http, job_id).await?;

            ensure!(
                job.is_active(),
                "Job `{job_id}` for @{} is already {}",
                job.username,
                job.status
            );

            cancel_job(&state.http, job_id).await
        }
        .await;

        match result {
            Ok(()) => {
                log::info!("Cancelled job `{job_id}`");
                cancelled += 1;
            }
            Err(error) => log::error!("Failed to cancel job `{job_id}`: {error}"),
        }
    }

    log::info!("Cancelled {cancelled}/{} jobs", options.jobs.len());

    Ok(())
}
