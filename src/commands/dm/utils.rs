use anyhow::{anyhow, bail, ensure, Result};

use super::types::{GenerateRequest, GenerateResponse};
use crate::commands::jobs::types::DmJob;
use crate::config::GENERATE_TIMEOUT;
use crate::state::http::HttpClient;

/// `@jane.doe ` -> `jane.doe`
pub fn normalize_username(username: &str) -> Result<String> {
    let username = username.trim().trim_start_matches('@').trim();

    ensure!(!username.is_empty(), "Please enter a username");
    ensure!(
        !username.contains(char::is_whitespace),
        "Invalid username `{username}`"
    );

    Ok(username.to_string())
}

/// Generates a message right away, this blocks until the server is done.
pub async fn generate_dm(
    http: &HttpClient,
    project_id: &str,
    username: &str,
) -> Result<GenerateResponse> {
    let response = http
        .request_with_timeout::<GenerateResponse>(
            "POST",
            &format!("/scrape/projects/{project_id}/generate"),
            Some((
                serde_json::to_vec(&GenerateRequest { username })?.into(),
                "application/json",
            )),
            GENERATE_TIMEOUT,
        )
        .await?
        .ok_or_else(|| anyhow!("Error while parsing response"))?;

    if !response.success {
        bail!(
            "{}",
            response
                .error
                .as_deref()
                .unwrap_or("Failed to generate DM")
        );
    }

    Ok(response)
}

pub async fn queue_dm(http: &HttpClient, project_id: &str, username: &str) -> Result<DmJob> {
    let job = http
        .request::<DmJob>(
            "POST",
            &format!("/scrape/projects/{project_id}/queue"),
            Some((
                serde_json::to_vec(&GenerateRequest { username })?.into(),
                "application/json",
            )),
        )
        .await?
        .ok_or_else(|| anyhow!("Error while parsing response"))?;

    Ok(job)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_normalize_username() {
        assert_eq!(normalize_username("elonmusk").unwrap(), "elonmusk");
        assert_eq!(normalize_username("@jane.doe").unwrap(), "jane.doe");
        assert_eq!(normalize_username("  @@coffee_lab \n").unwrap(), "coffee_lab");

        assert_eq!(
            normalize_username(" @ ").unwrap_err().to_string(),
            "Please enter a username"
        );
        assert!(normalize_username("jane doe").is_err());
    }

    #[test]
    fn test_failed_generation_response() {
        let response: GenerateResponse = serde_json::from_str(
            r#"{"success": false, "message": null, "user_info": null, "error": "Profile is private", "message_id": null}"#,
        )
        .unwrap();

        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("Profile is private"));
    }
}
