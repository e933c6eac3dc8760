use std::time::Duration;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(not(windows))]
pub const EXEC_NAME: &str = "dmify";
#[cfg(windows)]
pub const EXEC_NAME: &str = "dmify.exe";

pub const DEFAULT_API_URL: &str = "https://dmify-app.onrender.com";

pub const TOKEN_ENV: &str = "DMIFY_TOKEN";
pub const API_URL_ENV: &str = "DMIFY_API_URL";

/// Stores live under `~/.dmify`
pub const AUTH_STORE_PATH: &str = ".dmify/auth.json";
pub const CONTEXT_STORE_PATH: &str = ".dmify/context.json";

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
// generation scrapes the profile and calls the model before answering
pub const GENERATE_TIMEOUT: Duration = Duration::from_secs(60);

pub const JOB_POLL_INTERVAL: Duration = Duration::from_millis(3000);
