use anyhow::{anyhow, ensure, Result};
use clap::Parser;

use super::utils::{create_checkout, format_plans, get_plans};
use crate::config::EXEC_NAME;
use crate::state::State;
use crate::utils::urlify;

#[derive(Debug, Parser)]
#[clap(about = "Buy credits, opens the payment page in your browser")]
#[group(skip)]
pub struct Options {
    #[clap(help = "ID of the plan to purchase")]
    pub plan: Option<String>,
    #[clap(long = "no-browser", help = "Only print the payment link")]
    pub no_browser: bool,
}

pub async fn handle(options: &Options, state: &State) -> Result<()> {
    let plans = get_plans(&state.http).await?;

    ensure!(!plans.is_empty(), "No plans are available right now");

    let plan = match &options.plan {
        Some(id) => plans
            .iter()
            .find(|plan| &plan.plan_id == id)
            .ok_or_else(|| anyhow!("Invalid plan `{id}`, run `{EXEC_NAME} payments plans`"))?,

        None => {
            let plans_fmt = format_plans(&plans, false);

            let idx = dialoguer::Select::new()
                .with_prompt("Select a plan")
                .items(&plans_fmt)
                .default(0)
                .interact_opt()?
                .ok_or_else(|| anyhow!("No plan selected"))?;

            &plans[idx]
        }
    };

    let checkout = create_checkout(&state.http, &plan.plan_id).await?;

    log::debug!("Created checkout session {}", checkout.session_id);

    if options.no_browser || webbrowser::open(&checkout.checkout_url).is_err() {
        log::info!(
            "Complete your purchase of `{}` at {}",
            plan.name,
            urlify(&checkout.checkout_url)
        );
    } else {
        log::info!("Opened the payment page for `{}` in your browser", plan.name);
    }

    log::info!("Credits are added once the payment completes, check with `{EXEC_NAME} payments credits`");

    Ok(())
}
