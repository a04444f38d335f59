//! Public client surface + builder.
//! Defaults (UA, base URL, timeouts) live in `constants`.

mod constants;

use crate::core::EzError;
use constants::{DEFAULT_BASE_BIO, DEFAULT_CONNECT_TIMEOUT, DEFAULT_TIMEOUT, USER_AGENT};
use reqwest::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue};
use std::time::Duration;
use url::Url;

/// Thin wrapper that holds a configured HTTP client and the profile base URL.
///
/// Cloning is cheap: the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct EzClient {
    http: Client,
    base_bio: Url,
}

impl Default for EzClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl EzClient {
    /// Create a new builder.
    pub fn builder() -> EzClientBuilder {
        EzClientBuilder::default()
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// The base URL profile pages are resolved against.
    pub fn base_bio(&self) -> &Url {
        &self.base_bio
    }

    /// Builds the profile page URL for `username`.
    ///
    /// The username is appended as one path segment; the url crate percent-encodes
    /// characters that are not valid in a segment, nothing else is touched.
    ///
    /// # Errors
    ///
    /// Returns `EzError::InvalidInput` if the configured base URL cannot carry a path.
    pub fn profile_url(&self, username: &str) -> Result<Url, EzError> {
        let mut url = self.base_bio.clone();
        url.path_segments_mut()
            .map_err(|()| {
                EzError::InvalidInput(format!("base URL cannot be a base: {}", self.base_bio))
            })?
            .pop_if_empty()
            .push(username);
        Ok(url)
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct EzClientBuilder {
    user_agent: Option<String>,
    base_bio: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    custom_client: Option<Client>,
}

impl EzClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the profile base (e.g., `https://e-z.bio/`).
    pub fn base_bio(mut self, url: Url) -> Self {
        self.base_bio = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: 30 seconds.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: 10 seconds.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Use a pre-configured `reqwest::Client`.
    ///
    /// The UA, header and timeout settings of this builder are ignored in that case;
    /// configure them on the supplied client instead.
    pub fn custom_client(mut self, client: Client) -> Self {
        self.custom_client = Some(client);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the default base URL fails to parse or the HTTP client
    /// cannot be constructed.
    pub fn build(self) -> Result<EzClient, EzError> {
        let base_bio = match self.base_bio {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_BIO)?,
        };

        let http = match self.custom_client {
            Some(c) => c,
            None => {
                let mut headers = HeaderMap::new();
                headers.insert(
                    ACCEPT,
                    HeaderValue::from_static(
                        "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
                    ),
                );
                headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));

                reqwest::Client::builder()
                    .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
                    .default_headers(headers)
                    .cookie_store(true)
                    .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
                    .connect_timeout(self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT))
                    .build()?
            }
        };

        Ok(EzClient { http, base_bio })
    }
}
