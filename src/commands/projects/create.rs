use anyhow::Result;
use clap::Parser;

use super::types::CreateProject;
use super::utils::{create_project, format_project};
use crate::state::State;
use crate::store::Store;

#[derive(Debug, Parser)]
#[clap(about = "Create a new project")]
#[group(skip)]
pub struct Options {
    #[clap(help = "Name of the project")]
    name: Option<String>,
    #[clap(long = "product", help = "What you are selling")]
    product_info: Option<String>,
    #[clap(long = "offer", help = "The offer pitched in the messages")]
    offer_info: Option<String>,
    #[clap(short, long, help = "Set as default project")]
    default: bool,
}

fn ask(value: Option<String>, prompt: &str, field: &'static str) -> Result<String> {
    if let Some(value) = value {
        return Ok(value);
    }

    Ok(dialoguer::Input::<String>::new()
        .with_prompt(prompt)
        .validate_with(move |input: &String| -> Result<(), String> {
            if input.trim().is_empty() {
                Err(format!("{field} cannot be empty"))
            } else {
                Ok(())
            }
        })
        .interact_text()?)
}

pub async fn handle(options: Options, mut state: State) -> Result<()> {
    let project = CreateProject {
        name: ask(options.name, "Name of the project", "Project name")?,
        product_info: ask(
            options.product_info,
            "Describe your product or service",
            "Product info",
        )?,
        offer_info: ask(options.offer_info, "Describe your offer", "Offer info")?,
    };

    let project = create_project(&state.http, &project).await?;

    if options.default {
        state.ctx.default_project = Some(project.id.clone());
        state.ctx.save().await?;
    }

    log::info!("Created project {}", format_project(&project));

    Ok(())
}
