use std::time::Duration;

use log::debug;
use reqwest::{Client, Response, header};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::get_settings;
use crate::error::ApiError;

const USER_AGENT: &str = concat!("rpki-validator-ui/", env!("CARGO_PKG_VERSION"));

/// Shared HTTP client bound to one validator base url.
///
/// `reqwest::Client` pools connections internally, so clones are cheap and
/// every screen gets its own copy.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let base_url = parse_base_url(base_url)?;
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|source| ApiError::Request {
                url: base_url.to_string(),
                source,
            })?;

        Ok(Self { base_url, http })
    }

    /// Builds a client from the current settings.
    pub fn from_settings() -> Result<Self, ApiError> {
        let settings = get_settings();
        Self::new(
            &settings.config.api_url,
            Duration::from_secs(settings.config.request_timeout_secs),
        )
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|source| ApiError::InvalidUrl {
                url: format!("{}{}", self.base_url, path),
                source,
            })
    }

    pub async fn get(&self, url: Url, query: &[(&str, String)]) -> Result<Response, ApiError> {
        debug!("GET {} {:?}", url, query);
        self.http
            .get(url.clone())
            .query(query)
            .send()
            .await
            .map_err(|source| ApiError::Request {
                url: url.to_string(),
                source,
            })
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.url(path)?;
        let res = self.get(url, query).await?;
        let (url, body) = read_success_body(res).await?;
        parse_json_body(&url, &body)
    }
}

/// Base urls are treated as directories so relative joins keep their path.
fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let trimmed = raw.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };
    Url::parse(&with_slash).map_err(|source| ApiError::InvalidUrl {
        url: raw.to_string(),
        source,
    })
}

/// Returns `(url, body)` for a 2xx response, `ApiError::Status` otherwise.
pub async fn read_success_body(res: Response) -> Result<(String, String), ApiError> {
    let url = res.url().to_string();
    let status = res.status();
    let body = res.text().await.map_err(|source| ApiError::Request {
        url: url.clone(),
        source,
    })?;

    if !status.is_success() {
        return Err(ApiError::Status { url, status, body });
    }
    Ok((url, body))
}

pub fn parse_json_body<T: DeserializeOwned>(url: &str, body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|source| ApiError::Decode {
        url: url.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_paths_below_base_path() {
        let client = ApiClient::new("http://localhost:8080/validator", Duration::from_secs(5))
            .expect("client");
        let url = client.url("/api/roas").expect("url");
        assert_eq!(url.as_str(), "http://localhost:8080/validator/api/roas");
    }

    #[test]
    fn rejects_relative_base_url() {
        let result = ApiClient::new("localhost", Duration::from_secs(5));
        assert!(matches!(result, Err(ApiError::InvalidUrl { .. })));
    }
}
