use anyhow::Result;
use clap::Parser;

use super::utils::logout;
use crate::config::EXEC_NAME;
use crate::state::State;
use crate::store::Store;

#[derive(Debug, Parser)]
#[clap(about = "Logout the current user")]
#[group(skip)]
pub struct Options {}

pub async fn handle(_options: Options, mut state: State) -> Result<()> {
    if !state.is_logged_in() {
        log::warn!(
            "You are not logged in. Please run `{} auth login` first.",
            EXEC_NAME
        );

        return Ok(());
    }

    // the server has nothing to revoke, local state is cleared either way
    if let Err(error) = logout(&state.http).await {
        log::debug!("Logout request failed: {error}");
    }

    state.logout().await?;

    state.ctx.default_project = None;
    state.ctx.save().await?;

    log::info!("You have been logged out");

    Ok(())
}
