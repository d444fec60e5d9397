//! HTTP client for the admin panel REST API.

use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use url::Url;

use crate::{errors::extract_message, query::Query, Error};

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the admin panel REST API.
///
/// Holds one pooled `reqwest::Client`; every call builds its own URL and
/// parses its own response, so a `Client` can be shared across concurrent
/// requests.
pub struct Client {
    /// Base URL for the API, without a trailing slash.
    base_api_url: String,
    /// Bearer token sent with every request, if any.
    token: Option<String>,
    http: reqwest::Client,
}

impl Client {
    /// Creates a client pointing at `base_url` with the default timeout.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        Ok(Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
            token: None,
            http,
        })
    }

    /// Attaches a bearer token to every subsequent request.
    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, path: &str) -> Result<Url, Error> {
        Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })
    }

    async fn send(
        &self,
        method: reqwest::Method,
        url: Url,
        body: Option<Value>,
    ) -> Result<String, Error> {
        let mut req = self
            .http
            .request(method.clone(), url.clone())
            .header("accept", "application/json, text/plain, */*");
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        if let Some(body) = body {
            req = req.json(&body);
        }
        tracing::debug!("{} {}", method, url);
        let resp = req.send().await.map_err(|e| {
            tracing::error!("Failed to {} resource: {}", method, e);
            Error::RequestFailed
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                message: extract_message(&body),
                body: snippet,
            });
        }

        Ok(body)
    }

    fn parse<T: DeserializeOwned>(body: &str) -> Result<T, Error> {
        serde_json::from_str::<T>(body).map_err(|e| {
            let snippet = truncate_body(body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::Parse(e.to_string())
        })
    }

    /// GETs `path` with an optional typed query and parses the body as `T`.
    pub async fn get<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(path)?;
        let url = match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        };
        let body = self.send(reqwest::Method::GET, url, None).await?;
        Self::parse(&body)
    }

    /// GETs `path` with a pre-built query string and returns the body as raw JSON.
    ///
    /// This is the transport capability list normalization runs on: the shape
    /// of the payload is not assumed.
    pub async fn get_raw(&self, path: &str, query_string: &str) -> Result<Value, Error> {
        let mut url = self.get_url(path)?;
        if !query_string.is_empty() {
            url.set_query(Some(query_string));
        }
        let body = self.send(reqwest::Method::GET, url, None).await?;
        Self::parse(&body)
    }

    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<Value, Error> {
        self.write(reqwest::Method::POST, path, body).await
    }

    pub async fn put<B: Serialize>(&self, path: &str, body: &B) -> Result<Value, Error> {
        self.write(reqwest::Method::PUT, path, body).await
    }

    pub async fn patch<B: Serialize>(&self, path: &str, body: &B) -> Result<Value, Error> {
        self.write(reqwest::Method::PATCH, path, body).await
    }

    /// DELETEs `path`. An empty success body (e.g. 204) yields `Value::Null`.
    pub async fn delete(&self, path: &str) -> Result<Value, Error> {
        let url = self.get_url(path)?;
        let body = self.send(reqwest::Method::DELETE, url, None).await?;
        parse_optional(&body)
    }

    async fn write<B: Serialize>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: &B,
    ) -> Result<Value, Error> {
        let url = self.get_url(path)?;
        let json = serde_json::to_value(body).map_err(|e| Error::Parse(e.to_string()))?;
        let body = self.send(method, url, Some(json)).await?;
        parse_optional(&body)
    }
}

fn parse_optional(body: &str) -> Result<Value, Error> {
    if body.trim().is_empty() {
        Ok(Value::Null)
    } else {
        Client::parse(body)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_char_boundaries() {
        let body = "é".repeat(1500);
        let out = truncate_body(&body);
        assert!(out.ends_with("...[truncated]"));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = Client::new("http://localhost:8000/api/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000/api");
        assert_eq!(
            client.get_url("/media/").unwrap().as_str(),
            "http://localhost:8000/api/media/"
        );
    }
}
