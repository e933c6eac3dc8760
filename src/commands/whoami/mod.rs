use anyhow::Result;
use clap::Parser;

use crate::commands::auth::utils::get_me;
use crate::state::State;
use crate::store::Store;
use crate::utils::format_timestamp;

#[derive(Debug, Parser)]
#[clap(about = "Get information about the current user")]
#[group(skip)]
pub struct Options {}

pub async fn handle(_options: Options, mut state: State) -> Result<()> {
    let user = get_me(&state.http).await?;

    // keep the stored copy in sync with the server
    if state.auth.user.as_ref() != Some(&user) {
        state.auth.user = Some(user.clone());
        state.auth.save().await?;
    }

    println!("You are logged in as `{}` ({})", user.name, user.email);
    println!("Member since {}", format_timestamp(&user.created_at));

    if let Some(project) = state.ctx.current_project_id() {
        println!("Project: {project}");
    }

    Ok(())
}
