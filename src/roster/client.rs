//! Outbound access to the user list. The page only sees [`UserSource`], so the
//! network can be replaced in tests by anything that yields users.

use crate::roster::{error::FetchError, user::User};
use anyhow::{anyhow, Result};
use reqwest::Client;
use std::{future::Future, time::Duration};
use tracing::{debug, info_span, Instrument};
use url::Url;

/// Maximum number of error body characters kept for diagnostics.
const MAX_ERROR_CHARS: usize = 200;

/// Something that can produce the user list, one request per call.
pub trait UserSource {
    fn fetch_users(&self) -> impl Future<Output = Result<Vec<User>, FetchError>> + Send;
}

/// Fetches users with a `GET` against a fixed endpoint.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    endpoint: Url,
}

impl HttpSource {
    /// # Errors
    /// Returns an error if `endpoint` is not an `http`/`https` URL with a host, or the
    /// HTTP client cannot be built.
    pub fn new(user_agent: &str, endpoint: &str, timeout: Option<Duration>) -> Result<Self> {
        let endpoint = endpoint_url(endpoint)?;

        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn send(&self) -> Result<Vec<User>, FetchError> {
        let response = self.client.get(self.endpoint.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Http {
                status: status.as_u16(),
                body: sanitize_body(&body),
            });
        }

        let users: Vec<User> = response.json().await?;

        debug!("fetched {} users", users.len());

        Ok(users)
    }
}

impl UserSource for HttpSource {
    async fn fetch_users(&self) -> Result<Vec<User>, FetchError> {
        let span = info_span!(
            "roster.fetch_users",
            http.method = "GET",
            url = %self.endpoint
        );

        self.send().instrument(span).await
    }
}

/// # Errors
/// Returns an error if `url` cannot be parsed, has no host, or uses an unsupported scheme.
pub fn endpoint_url(url: &str) -> Result<Url> {
    let url = Url::parse(url.trim())?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => return Err(anyhow!("Error parsing URL: unsupported scheme {scheme}")),
    }

    if url.host().is_none() {
        return Err(anyhow!("Error parsing URL: no host specified"));
    }

    debug!("endpoint URL: {}", url);

    Ok(url)
}

fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
