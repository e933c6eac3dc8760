use anyhow::Result;
use clap::Parser;

use super::utils::{format_message, get_message};
use crate::commands::projects::utils::resolve_project;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Show a generated message")]
#[group(skip)]
pub struct Options {
    #[clap(help = "ID of the message")]
    pub message: String,
    #[clap(
        short,
        long,
        help = "Print only the message text, handy for piping into a clipboard tool"
    )]
    pub raw: bool,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let project = resolve_project(&state, None).await?;

    let message = get_message(&state.http, &project.id, &options.message).await?;

    if options.raw {
        print!("{}", message.generated_message);
    } else {
        println!("{}", format_message(&message));
    }

    Ok(())
}
