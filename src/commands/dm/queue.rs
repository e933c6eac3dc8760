use anyhow::{ensure, Result};
use clap::Parser;

use super::utils::{normalize_username, queue_dm};
use crate::commands::jobs::watch::watch_project;
use crate::commands::payments::utils::{ensure_credits, get_credits};
use crate::commands::projects::utils::resolve_project;
use crate::config::EXEC_NAME;
use crate::state::http::types::ApiError;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Queue DMs to be generated in the background")]
#[group(skip)]
pub struct Options {
    #[clap(name = "usernames", help = "Instagram usernames, with or without @", required = true)]
    pub usernames: Vec<String>,
    #[clap(short, long, help = "Follow the jobs until they are done")]
    pub watch: bool,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let usernames = options
        .usernames
        .iter()
        .map(|username| normalize_username(username))
        .collect::<Result<Vec<_>>>()?;

    let (project, credits) = tokio::try_join!(
        resolve_project(&state, None),
        get_credits(&state.http)
    )?;

    ensure_credits(&credits)?;

    if (credits.credits as usize) < usernames.len() {
        log::warn!(
            "Only {} credits left, some of the {} jobs will fail",
            credits.credits,
            usernames.len()
        );
    }

    let mut queued = vec![];

    for username in &usernames {
        match queue_dm(&state.http, &project.id, username).await {
            Ok(job) => {
                log::info!("Queued @{username} as job `{}` ({})", job.id, job.status);
                queued.push(job);
            }
            // no point in trying the remaining usernames
            Err(error)
                if matches!(
                    error.downcast_ref::<ApiError>(),
                    Some(ApiError::Unauthorized | ApiError::InsufficientCredits)
                ) =>
            {
                return Err(error);
            }

            Err(error) => log::error!("Failed to queue @{username}: {error}"),
        }
    }

    ensure!(!queued.is_empty(), "No job was queued");

    log::info!("Queued {}/{} jobs", queued.len(), usernames.len());

    if options.watch {
        return watch_project(&state, &project, &queued, true).await;
    }

    log::info!("Follow them with `{EXEC_NAME} jobs watch {}`", project.id);

    Ok(())
}
