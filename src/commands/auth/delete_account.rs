use anyhow::{anyhow, ensure, Result};
use clap::Parser;

use super::utils::delete_account;
use crate::state::State;
use crate::store::Store;

#[derive(Debug, Parser)]
#[clap(about = "Delete your account, data is removed after 30 days")]
#[group(skip)]
pub struct Options {
    #[clap(short = 'f', long = "force", help = "Skip confirmation")]
    force: bool,
}

pub async fn handle(options: Options, mut state: State) -> Result<()> {
    state.ensure_logged_in()?;

    if !options.force {
        let email = state
            .auth
            .user
            .as_ref()
            .map(|user| user.email.clone())
            .ok_or_else(|| anyhow!("No user stored, please login again"))?;

        let confirm = dialoguer::Input::<String>::new()
            .with_prompt(format!("Type `{email}` to confirm the deletion"))
            .interact_text()?;

        ensure!(confirm.trim() == email, "Aborted");
    }

    let message = delete_account(&state.http).await?;

    state.logout().await?;

    state.ctx.default_project = None;
    state.ctx.save().await?;

    log::info!("{message}");

    Ok(())
}
