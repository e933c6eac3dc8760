use anyhow::{anyhow, Result};
use clap::Parser;

use super::utils::{delete_project, resolve_project};
use crate::state::State;
use crate::store::Store;

#[derive(Debug, Parser)]
#[clap(about = "Delete a project and its messages")]
#[group(skip)]
pub struct Options {
    #[clap(help = "ID of the project")]
    pub project: Option<String>,
    #[clap(short = 'f', long = "force", help = "Skip confirmation")]
    force: bool,
}

pub async fn handle(options: Options, mut state: State) -> Result<()> {
    let project = resolve_project(&state, options.project).await?;

    if !options.force {
        let confirmed = dialoguer::Confirm::new()
            .with_prompt(format!(
                "Are you sure you want to delete project `{}` ({})? All of its messages will be lost",
                project.name, project.id
            ))
            .default(false)
            .interact_opt()?
            .ok_or_else(|| anyhow!("Aborted"))?;

        if !confirmed {
            return Err(anyhow!("Aborted"));
        }
    }

    delete_project(&state.http, &project.id).await?;

    if state.ctx.default_project.as_deref() == Some(project.id.as_str()) {
        state.ctx.default_project = None;
        state.ctx.save().await?;
    }

    log::info!("Project `{}` ({}) deleted", project.name, project.id);

    Ok(())
}
