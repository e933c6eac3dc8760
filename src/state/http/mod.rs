pub mod types;

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client as AsyncClient, StatusCode};

use self::types::{ApiError, ErrorResponse};
use crate::config::{DEFAULT_API_URL, REQUEST_TIMEOUT, VERSION};

#[derive(Debug, Clone)]
pub struct HttpClient {
    pub client: AsyncClient,
    pub base_url: String,
    pub headers: HeaderMap,
    pub ua: String,
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token.trim())
}

impl HttpClient {
    pub fn new(token: Option<String>, api_url: Option<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();

        headers.insert("accept", HeaderValue::from_static("application/json"));

        if let Some(token) = token {
            let mut value = HeaderValue::from_str(&bearer(&token))
                .context("Stored token contains invalid characters")?;
            value.set_sensitive(true);

            headers.insert("authorization", value);
        }

        let ua = format!(
            "dmify_cli/{VERSION} on {}",
            sys_info::os_type().unwrap_or_else(|_| "unknown".to_string())
        );

        let base_url = api_url
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            client: AsyncClient::builder()
                .user_agent(ua.clone())
                .default_headers(headers.clone())
                .timeout(REQUEST_TIMEOUT)
                .build()?,
            base_url,
            headers,
            ua,
        })
    }

    pub fn is_authorized(&self) -> bool {
        self.headers.contains_key("authorization")
    }

    pub async fn handle_response<T>(&self, response: reqwest::Response) -> Result<Option<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = match response.status() {
            StatusCode::NO_CONTENT => return Ok(None),
            status => {
                if !status.is_success() {
                    return Err(self.handle_error(response, status).await.into());
                }

                response
            }
        };

        response
            .json::<T>()
            .await
            .map(Some)
            .map_err(|e| anyhow!(e))
    }

    async fn handle_error(&self, response: reqwest::Response, status: StatusCode) -> ApiError {
        let detail = match response.json::<ErrorResponse>().await {
            Ok(body) => body.message(),
            Err(err) => {
                log::debug!("Error deserialize message: {:#?}", err);

                None
            }
        };

        ApiError::from_status(status, detail, self.is_authorized())
    }

    fn build(
        &self,
        method: &str,
        path: &str,
        data: Option<(reqwest::Body, &str)>,
        timeout: Option<Duration>,
    ) -> Result<reqwest::Request> {
        let mut request = self
            .client
            .request(method.parse()?, format!("{}{}", self.base_url, path));

        log::debug!("request: {} {} {:?}", method, path, data);

        if let Some((body, content_type)) = data {
            request = request.header("content-type", content_type);

            // show body in debug mode / when developing
            #[cfg(debug_assertions)]
            {
                if let Some(bytes) = body.as_bytes() {
                    log::debug!("request body: {}", String::from_utf8_lossy(bytes));
                }
            }

            request = request.body(body);
        }

        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        Ok(request.build()?)
    }

    async fn execute(&self, request: reqwest::Request) -> Result<reqwest::Response> {
        #[cfg(debug_assertions)]
        let now = tokio::time::Instant::now();

        let response = self.client.execute(request).await?;

        #[cfg(debug_assertions)]
        log::debug!("response in: {:#?}", now.elapsed());

        Ok(response)
    }

    pub async fn request<T>(
        &self,
        method: &str,
        path: &str,
        data: Option<(reqwest::Body, &str)>,
    ) -> Result<Option<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        let request = self.build(method, path, data, None)?;
        let response = self.execute(request).await?;

        self.handle_response(response).await
    }

    /// Same as [`HttpClient::request`] but overrides the client wide timeout.
    pub async fn request_with_timeout<T>(
        &self,
        method: &str,
        path: &str,
        data: Option<(reqwest::Body, &str)>,
        timeout: Duration,
    ) -> Result<Option<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        let request = self.build(method, path, data, Some(timeout))?;
        let response = self.execute(request).await?;

        self.handle_response(response).await
    }

    /// Downloads a non JSON body, used for file exports.
    pub async fn request_bytes(&self, method: &str, path: &str) -> Result<Vec<u8>> {
        let request = self.build(method, path, None, None)?;
        let response = self.execute(request).await?;

        let status = response.status();

        if !status.is_success() {
            return Err(self.handle_error(response, status).await.into());
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_bearer() {
        assert_eq!(bearer("abc.def"), "Bearer abc.def");
        assert_eq!(bearer(" abc.def\n"), "Bearer abc.def");
    }

    #[test]
    fn test_new_client() {
        let http = HttpClient::new(None, Some("http://localhost:8000/".to_string())).unwrap();
        assert_eq!(http.base_url, "http://localhost:8000");
        assert!(!http.is_authorized());

        let http = HttpClient::new(Some("token".to_string()), None).unwrap();
        assert_eq!(http.base_url, DEFAULT_API_URL);
        assert!(http.is_authorized());
        assert_eq!(http.headers["authorization"], "Bearer token");
    }

    #[test]
    fn test_invalid_token() {
        assert!(HttpClient::new(Some("bad\ntoken\u{7f}".to_string()), None).is_err());
    }
}
