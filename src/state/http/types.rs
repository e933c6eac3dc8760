use std::fmt;

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

use crate::config::EXEC_NAME;

#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub detail: Option<Value>,
}

impl ErrorResponse {
    /// The server answers with either a plain string or a list of
    /// validation errors, each carrying a `msg`.
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::String(message) => Some(message.clone()),

            Value::Array(errors) => {
                let messages = errors
                    .iter()
                    .filter_map(|error| error.get("msg").and_then(Value::as_str))
                    .collect::<Vec<_>>();

                if messages.is_empty() {
                    None
                } else {
                    Some(messages.join(", "))
                }
            }

            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    /// The token is missing, expired or revoked
    Unauthorized,
    InsufficientCredits,
    Status {
        status: StatusCode,
        detail: Option<String>,
    },
}

impl ApiError {
    /// A 401 only means the session is gone when a token was sent, otherwise
    /// it is a plain rejection (wrong password and such).
    pub fn from_status(status: StatusCode, detail: Option<String>, authorized: bool) -> Self {
        match status {
            StatusCode::UNAUTHORIZED if authorized => Self::Unauthorized,
            StatusCode::PAYMENT_REQUIRED => Self::InsufficientCredits,
            status => Self::Status { status, detail },
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthorized => write!(
                f,
                "Your session has expired. Please run `{EXEC_NAME} auth login` again."
            ),

            Self::InsufficientCredits => write!(
                f,
                "Insufficient credits. Purchase more with `{EXEC_NAME} payments checkout`."
            ),

            Self::Status {
                detail: Some(detail),
                ..
            } => write!(f, "{detail}"),

            Self::Status { status, .. } => write!(f, "Error: HTTP {status}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Whether an error means the stored token was rejected and has to be dropped.
pub fn should_forget_session(error: &anyhow::Error) -> bool {
    matches!(error.downcast_ref::<ApiError>(), Some(ApiError::Unauthorized))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_status() {
        assert!(matches!(
            ApiError::from_status(StatusCode::UNAUTHORIZED, Some("Could not validate".into()), true),
            ApiError::Unauthorized
        ));
        assert!(matches!(
            ApiError::from_status(
                StatusCode::UNAUTHORIZED,
                Some("Incorrect email or password".into()),
                false
            ),
            ApiError::Status {
                status: StatusCode::UNAUTHORIZED,
                ..
            }
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::PAYMENT_REQUIRED, None, true),
            ApiError::InsufficientCredits
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::NOT_FOUND, None, true),
            ApiError::Status {
                status: StatusCode::NOT_FOUND,
                detail: None
            }
        ));
    }

    #[test]
    fn test_should_forget_session() {
        let error = ApiError::from_status(StatusCode::UNAUTHORIZED, None, true);
        assert!(should_forget_session(&error.into()));

        // wrong credentials on login are not an expired session
        let error = ApiError::from_status(StatusCode::UNAUTHORIZED, None, false);
        assert!(!should_forget_session(&error.into()));

        let error = ApiError::from_status(StatusCode::PAYMENT_REQUIRED, None, true);
        assert!(!should_forget_session(&error.into()));

        let error =
            anyhow::Error::from(ApiError::Unauthorized).context("Failed to list projects");
        assert!(should_forget_session(&error));

        assert!(!should_forget_session(&anyhow::anyhow!("Project not found")));
    }

    #[test]
    fn test_display() {
        let error = ApiError::from_status(
            StatusCode::BAD_REQUEST,
            Some("Email already registered".to_string()),
            false,
        );
        assert_eq!(error.to_string(), "Email already registered");

        let error = ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, None, true);
        assert_eq!(error.to_string(), "Error: HTTP 500 Internal Server Error");

        assert!(ApiError::InsufficientCredits
            .to_string()
            .starts_with("Insufficient credits"));
    }

    #[test]
    fn test_error_response_message() {
        let body: ErrorResponse =
            serde_json::from_str(r#"{"detail": "Project not found"}"#).unwrap();
        assert_eq!(body.message(), Some("Project not found".to_string()));

        let body: ErrorResponse = serde_json::from_str(
            r#"{"detail": [{"loc": ["body", "email"], "msg": "value is not a valid email address"}, {"msg": "field required"}]}"#,
        )
        .unwrap();
        assert_eq!(
            body.message(),
            Some("value is not a valid email address, field required".to_string())
        );

        let body: ErrorResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(body.message(), None);
    }
}
