use anyhow::Result;
use clap::Parser;

use super::types::UpdateProject;
use super::utils::{format_project, resolve_project, update_project};
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Update a project")]
#[group(skip)]
pub struct Options {
    #[clap(help = "ID of the project")]
    pub project: Option<String>,
    #[clap(long = "name", help = "New name")]
    pub name: Option<String>,
    #[clap(long = "product", help = "New product or service description")]
    pub product_info: Option<String>,
    #[clap(long = "offer", help = "New offer description")]
    pub offer_info: Option<String>,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let project = resolve_project(&state, options.project).await?;

    let mut update = UpdateProject::new(options.name, options.product_info, options.offer_info);

    // nothing passed as flags, edit interactively starting from the current values
    if update.is_empty() {
        let edit = |prompt: &str, current: &str| -> Result<String> {
            Ok(dialoguer::Input::<String>::new()
                .with_prompt(prompt)
                .with_initial_text(current)
                .interact_text()?)
        };

        let name = edit("Name", &project.name)?;
        let product_info = edit("Product/Service", &project.product_info)?;
        let offer_info = edit("Offer", &project.offer_info)?;

        update = UpdateProject::new(
            Some(name).filter(|v| v != &project.name),
            Some(product_info).filter(|v| v != &project.product_info),
            Some(offer_info).filter(|v| v != &project.offer_info),
        );

        if update.is_empty() {
            log::info!("Nothing was changed");

            return Ok(());
        }
    }

    let project = update_project(&state.http, &project.id, &update).await?;

    log::info!("Updated project {}", format_project(&project));

    Ok(())
}
