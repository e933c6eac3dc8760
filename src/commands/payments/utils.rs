use std::io::Write;

use anyhow::{anyhow, Result};
use tabwriter::TabWriter;

use super::types::{
    CheckoutResponse, CreateCheckout, CreditInfo, PaymentPlan, Subscription, Transaction,
};
use crate::state::http::types::ApiError;
use crate::state::http::HttpClient;
use crate::utils::{capitalize, format_timestamp};

pub async fn get_plans(http: &HttpClient) -> Result<Vec<PaymentPlan>> {
    let data = http
        .request::<Vec<PaymentPlan>>("GET", "/payments/plans", None)
        .await?
        .ok_or_else(|| anyhow!("Error while parsing response"))?;

    Ok(data)
}

pub async fn get_credits(http: &HttpClient) -> Result<CreditInfo> {
    let data = http
        .request::<CreditInfo>("GET", "/payments/credits", None)
        .await?
        .ok_or_else(|| anyhow!("Error while parsing response"))?;

    Ok(data)
}

pub async fn get_history(http: &HttpClient) -> Result<Vec<Transaction>> {
    let data = http
        .request::<Vec<Transaction>>("GET", "/payments/history", None)
        .await?
        .ok_or_else(|| anyhow!("Error while parsing response"))?;

    Ok(data)
}

pub async fn get_subscription(http: &HttpClient) -> Result<Subscription> {
    let data = http
        .request::<Subscription>("GET", "/payments/subscription", None)
        .await?
        .unwrap_or_default();

    Ok(data)
}

pub async fn create_checkout(http: &HttpClient, plan_id: &str) -> Result<CheckoutResponse> {
    let data = http
        .request::<CheckoutResponse>(
            "POST",
            "/payments/create-checkout",
            Some((
                serde_json::to_vec(&CreateCheckout { plan_id })?.into(),
                "application/json",
            )),
        )
        .await?
        .ok_or_else(|| anyhow!("Error while parsing response"))?;

    Ok(data)
}

/// Every generated message costs a credit, refuse before hitting the server.
pub fn ensure_credits(credits: &CreditInfo) -> Result<()> {
    if credits.credits <= 0 {
        return Err(ApiError::InsufficientCredits.into());
    }

    Ok(())
}

pub fn format_price(amount: u64) -> String {
    format!("${:.2}", amount as f64 / 100.0)
}

pub fn format_price_per_credit(amount: u64, credits: u64) -> String {
    if credits == 0 {
        return "-".to_string();
    }

    format!("${:.3} per message", amount as f64 / credits as f64 / 100.0)
}

pub fn format_credits(credits: &CreditInfo) -> String {
    format!(
        "{} credits available ({} purchased, {} used)",
        credits.credits, credits.total_earned, credits.total_used
    )
}

pub fn format_plans(plans: &[PaymentPlan], title: bool) -> Vec<String> {
    let mut tw = TabWriter::new(vec![]);

    if title {
        writeln!(&mut tw, "ID\tNAME\tMESSAGES\tPRICE\tPER MESSAGE").unwrap();
    }

    for plan in plans {
        writeln!(
            &mut tw,
            "{}\t{}\t{}\t{}\t{}",
            plan.plan_id,
            plan.name,
            plan.credits,
            format_price(plan.amount),
            format_price_per_credit(plan.amount, plan.credits),
        )
        .unwrap();
    }

    String::from_utf8(tw.into_inner().unwrap())
        .unwrap()
        .lines()
        .map(std::string::ToString::to_string)
        .collect()
}

pub fn format_history(transactions: &[Transaction], title: bool) -> Vec<String> {
    let mut tw = TabWriter::new(vec![]);

    if title {
        writeln!(&mut tw, "ID\tAMOUNT\tCREDITS\tSTATUS\tCREATED").unwrap();
    }

    for transaction in transactions {
        writeln!(
            &mut tw,
            "{}\t{}\t{}\t{}\t{}",
            transaction.id,
            format_price(transaction.amount),
            transaction.credits,
            capitalize(&transaction.status),
            format_timestamp(&transaction.created_at),
        )
        .unwrap();
    }

    String::from_utf8(tw.into_inner().unwrap())
        .unwrap()
        .lines()
        .map(std::string::ToString::to_string)
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(1900), "$19.00");
        assert_eq!(format_price(4999), "$49.99");
        assert_eq!(format_price(5), "$0.05");
    }

    #[test]
    fn test_format_price_per_credit() {
        assert_eq!(format_price_per_credit(1900, 100), "$0.190 per message");
        assert_eq!(format_price_per_credit(7900, 1500), "$0.053 per message");
        assert_eq!(format_price_per_credit(1900, 0), "-");
    }

    #[test]
    fn test_ensure_credits() {
        let mut credits = CreditInfo {
            credits: 0,
            total_earned: 100,
            total_used: 100,
        };

        let error = ensure_credits(&credits).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<ApiError>(),
            Some(ApiError::InsufficientCredits)
        ));

        credits.credits = 1;
        assert!(ensure_credits(&credits).is_ok());
    }

    #[test]
    fn test_subscription_extra_fields() {
        let subscription: Subscription = serde_json::from_str(
            r#"{"plan_id": "plan_2", "status": "active", "renews_at": "2024-04-01"}"#,
        )
        .unwrap();

        assert_eq!(subscription.plan.as_deref(), Some("plan_2"));
        assert_eq!(subscription.status.as_deref(), Some("active"));
        assert_eq!(subscription.extra["renews_at"], "2024-04-01");
    }
}
