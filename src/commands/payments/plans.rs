use anyhow::Result;
use clap::Parser;

use super::utils::{format_credits, format_plans, get_credits, get_plans};
use crate::config::EXEC_NAME;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "List the credit plans available for purchase")]
#[group(skip)]
pub struct Options {}

pub async fn handle(_options: &Options, state: &State) -> Result<()> {
    // plans are public, the balance needs a session
    let (plans, credits) = if state.http.is_authorized() {
        let (plans, credits) =
            tokio::try_join!(get_plans(&state.http), get_credits(&state.http))?;

        (plans, Some(credits))
    } else {
        (get_plans(&state.http).await?, None)
    };

    println!("{}", format_plans(&plans, true).join("\n"));
    println!();

    match credits {
        Some(credits) => {
            log::info!("{}", format_credits(&credits));
            log::info!("Purchase a plan with `{EXEC_NAME} payments checkout <ID>`");
        }

        None => log::info!("Login with `{EXEC_NAME} auth login` to purchase a plan"),
    }

    Ok(())
}
