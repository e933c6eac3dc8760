use anyhow::Result;
use clap::Parser;

use super::utils::{get_message, update_message};
use crate::commands::projects::utils::resolve_project;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Edit the text of a generated message")]
#[group(skip)]
pub struct Options {
    #[clap(help = "ID of the message")]
    pub message: String,
    #[clap(
        short,
        long,
        help = "New text of the message, opens your editor when omitted"
    )]
    pub text: Option<String>,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let project = resolve_project(&state, None).await?;

    let text = match options.text {
        Some(text) => text,

        None => {
            let message = get_message(&state.http, &project.id, &options.message).await?;

            match dialoguer::Editor::new().edit(&message.generated_message)? {
                Some(text) if text.trim_end() != message.generated_message.trim_end() => text,

                _ => {
                    log::info!("Nothing was changed");

                    return Ok(());
                }
            }
        }
    };

    update_message(&state.http, &project.id, &options.message, text.trim_end()).await?;

    log::info!("Updated message `{}`", options.message);

    Ok(())
}
