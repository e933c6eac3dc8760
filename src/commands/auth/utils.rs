use anyhow::{anyhow, bail, ensure, Result};
use serde::Serialize;

use super::types::{
    EmailRequest, LoginRequest, LoginResponse, MessageResponse, ResetPasswordRequest,
    SignupRequest, User, VerifyEmailRequest,
};
use crate::state::http::HttpClient;

pub const MIN_PASSWORD_LENGTH: usize = 8;

pub fn validate_email(email: &str) -> Result<()> {
    let email = email.trim();

    ensure!(!email.is_empty(), "Email is required");

    // something@domain.tld
    let valid = !email.contains(char::is_whitespace)
        && email.split_once('@').map_or(false, |(local, domain)| {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .rsplit_once('.')
                    .map_or(false, |(host, tld)| !host.is_empty() && !tld.is_empty())
        });

    ensure!(valid, "Please enter a valid email address");

    Ok(())
}

pub fn validate_password(password: &str) -> Result<()> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        bail!("Password must be at least {MIN_PASSWORD_LENGTH} characters long");
    }

    if !password.chars().any(|c| c.is_ascii_alphabetic()) {
        bail!("Password must contain at least one letter");
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        bail!("Password must contain at least one number");
    }

    Ok(())
}

fn json<T: Serialize>(body: &T) -> Result<Option<(reqwest::Body, &'static str)>> {
    Ok(Some((serde_json::to_vec(body)?.into(), "application/json")))
}

async fn post_for_message<T: Serialize>(http: &HttpClient, path: &str, body: &T) -> Result<String> {
    let response = http
        .request::<MessageResponse>("POST", path, json(body)?)
        .await?
        .ok_or_else(|| anyhow!("Error while parsing response"))?;

    Ok(response.message)
}

pub async fn signup(http: &HttpClient, email: &str, password: &str, name: &str) -> Result<String> {
    post_for_message(
        http,
        "/auth/signup",
        &SignupRequest {
            email,
            password,
            name,
        },
    )
    .await
}

pub async fn verify_email(http: &HttpClient, email: &str, code: &str) -> Result<String> {
    post_for_message(http, "/auth/verify-email", &VerifyEmailRequest { email, code }).await
}

pub async fn resend_verification(http: &HttpClient, email: &str) -> Result<String> {
    post_for_message(http, "/auth/resend-verification", &EmailRequest { email }).await
}

pub async fn forgot_password(http: &HttpClient, email: &str) -> Result<String> {
    post_for_message(http, "/auth/forgot-password", &EmailRequest { email }).await
}

pub async fn reset_password(
    http: &HttpClient,
    email: &str,
    token: &str,
    new_password: &str,
) -> Result<String> {
    post_for_message(
        http,
        "/auth/reset-password",
        &ResetPasswordRequest {
            email,
            token,
            new_password,
        },
    )
    .await
}

pub async fn login(http: &HttpClient, email: &str, password: &str) -> Result<LoginResponse> {
    http.request::<LoginResponse>("POST", "/auth/login", json(&LoginRequest { email, password })?)
        .await?
        .ok_or_else(|| anyhow!("Error while parsing login response"))
}

pub async fn logout(http: &HttpClient) -> Result<()> {
    http.request::<MessageResponse>("POST", "/auth/logout", None)
        .await?;

    Ok(())
}

pub async fn get_me(http: &HttpClient) -> Result<User> {
    http.request::<User>("GET", "/auth/me", None)
        .await?
        .ok_or_else(|| anyhow!("Error while parsing response"))
}

pub async fn delete_account(http: &HttpClient) -> Result<String> {
    let response = http
        .request::<MessageResponse>("DELETE", "/auth/delete-account", None)
        .await?
        .ok_or_else(|| anyhow!("Error while parsing response"))?;

    Ok(response.message)
}

/// Prompts for a password twice, validating the rules the server enforces.
pub fn ask_new_password(prompt: &str) -> Result<String> {
    let password = dialoguer::Password::new()
        .with_prompt(prompt)
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()?;

    validate_password(&password)?;

    Ok(password)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_validate_password() {
        assert!(validate_password("hunter22").is_ok());
        assert!(validate_password("correct horse 9").is_ok());

        assert_eq!(
            validate_password("abc123").unwrap_err().to_string(),
            "Password must be at least 8 characters long"
        );
        assert_eq!(
            validate_password("12345678").unwrap_err().to_string(),
            "Password must contain at least one letter"
        );
        assert_eq!(
            validate_password("password").unwrap_err().to_string(),
            "Password must contain at least one number"
        );
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("me@example.com").is_ok());
        assert!(validate_email(" jane.doe@mail.example.co ").is_ok());

        assert_eq!(
            validate_email("   ").unwrap_err().to_string(),
            "Email is required"
        );
        assert!(validate_email("").is_err());

        for email in [
            "me",
            "me@example",
            "@example.com",
            "me@.com",
            "me@example.",
            "me@@example.com",
            "me@exa@mple.com",
            "me @example.com",
        ] {
            assert_eq!(
                validate_email(email).unwrap_err().to_string(),
                "Please enter a valid email address",
                "{email}"
            );
        }
    }

    #[test]
    fn test_login_response() {
        let response: LoginResponse = serde_json::from_str(
            r#"{
                "access_token": "eyJ0eXAi",
                "token_type": "bearer",
                "user": {
                    "id": "65f0",
                    "email": "me@example.com",
                    "name": "Me",
                    "created_at": "2024-03-01T12:30:15.123456"
                }
            }"#,
        )
        .unwrap();

        assert_eq!(response.access_token, "eyJ0eXAi");
        assert_eq!(response.user.email, "me@example.com");
    }
}
