use anyhow::Result;
use clap::Parser;
use tokio::sync::mpsc;
use tokio::time::{interval, MissedTickBehavior};

use super::types::DmJob;
use super::utils::{format_change, get_project_jobs, JobTracker};
use crate::commands::messages::utils::{format_message, get_project_messages};
use crate::commands::payments::utils::get_credits;
use crate::commands::projects::types::Project;
use crate::commands::projects::utils::resolve_project;
use crate::config::JOB_POLL_INTERVAL;
use crate::state::http::types::should_forget_session;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Follow the jobs of a project and print messages as they are generated")]
#[group(skip)]
pub struct Options {
    #[clap(help = "ID of the project")]
    pub project: Option<String>,
    #[clap(long = "until-idle", help = "Stop once no job is pending or processing")]
    pub until_idle: bool,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let project = resolve_project(&state, options.project).await?;

    watch_project(&state, &project, &[], options.until_idle).await
}

/// Polls the jobs and credits of a project on a fixed interval until Ctrl-C
/// (or until idle). Messages are refetched once per poll in which at least
/// one job completed. `known` jobs are compared from the very first poll.
pub async fn watch_project(
    state: &State,
    project: &Project,
    known: &[DmJob],
    until_idle: bool,
) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<()>();

    ctrlc::set_handler(move || {
        tx.send(()).ok();
    })?;

    log::info!(
        "Watching jobs of `{}`, press Ctrl-C to stop",
        project.name
    );

    let mut ticker = interval(JOB_POLL_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut tracker = JobTracker::new();
    tracker.seed(known);
    let mut last_credits = None;

    loop {
        tokio::select! {
            _ = rx.recv() => {
                log::info!("Stopped watching");
                break;
            }

            _ = ticker.tick() => {}
        }

        let polled = tokio::try_join!(
            get_project_jobs(&state.http, &project.id),
            get_credits(&state.http)
        );

        let (jobs, credits) = match polled {
            Ok(polled) => polled,

            Err(error) => {
                poll_failed(error)?;
                continue;
            }
        };

        let diff = tracker.update(&jobs);

        for change in &diff.changes {
            log::info!("{}", format_change(change));
        }

        if diff.should_refetch_messages() {
            match get_project_messages(&state.http, &project.id).await {
                Ok(messages) => {
                    for job in &diff.completed {
                        // the server sorts messages newest first
                        if let Some(message) = messages.iter().find(|m| m.username == job.username) {
                            println!("{}\n", format_message(message));
                        }
                    }
                }

                Err(error) => log::warn!("Failed to refresh messages: {error}"),
            }
        }

        if last_credits != Some(credits.credits) {
            log::info!("{} credits left", credits.credits);
            last_credits = Some(credits.credits);
        }

        if until_idle && tracker.active_count() == 0 {
            log::info!("No active jobs left");
            break;
        }
    }

    Ok(())
}

/// A failed poll is skipped, unless the session is gone.
fn poll_failed(error: anyhow::Error) -> Result<()> {
    if should_forget_session(&error) {
        return Err(error);
    }

    log::warn!("Failed to refresh jobs: {error}");

    Ok(())
}

#[cfg(test)]
mod test {
    use reqwest::StatusCode;

    use super::*;
    use crate::state::http::types::ApiError;

    #[test]
    fn test_poll_failed() {
        assert!(poll_failed(ApiError::Unauthorized.into()).is_err());

        assert!(poll_failed(ApiError::InsufficientCredits.into()).is_ok());
        assert!(poll_failed(
            ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, None, true).into()
        )
        .is_ok());
        assert!(poll_failed(anyhow::anyhow!("connection reset")).is_ok());
    }
}
