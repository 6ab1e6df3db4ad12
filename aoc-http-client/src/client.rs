//! AOC HTTP client implementation

use crate::error::AocError;
use crate::parser;
use reqwest::header::{COOKIE, HeaderValue};
use tracing::debug;
use zeroize::Zeroize;

const DEFAULT_BASE_URL: &str = "https://adventofcode.com";
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Result of session verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionInfo {
    /// User ID if session is valid, None otherwise
    pub user_id: Option<u64>,
}

impl SessionInfo {
    pub fn is_valid(&self) -> bool {
        self.user_id.is_some()
    }
}

/// Blocking client for adventofcode.com
///
/// ```no_run
/// use aoc_http_client::AocClient;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = AocClient::new()?;
/// let input = client.get_input(2023, 1, "your_session_cookie")?;
/// println!("{}", input.lines().count());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct AocClient {
    client: reqwest::blocking::Client,
    base_url: reqwest::Url,
}

impl AocClient {
    /// Client for the public site with the default transport settings
    ///
    /// # Errors
    ///
    /// Returns `AocError::ClientInit` if the HTTP client cannot be initialized.
    pub fn new() -> Result<Self, AocError> {
        Self::builder().build()
    }

    pub fn builder() -> AocClientBuilder {
        AocClientBuilder::new()
    }

    /// Sensitive `session=...` header; the formatted copy is wiped afterwards
    fn cookie_header(session: &str) -> Result<HeaderValue, AocError> {
        let mut cookie = format!("session={}", session.trim());
        let header = HeaderValue::from_str(&cookie);
        cookie.zeroize();

        let mut header = header.map_err(|_| AocError::InvalidSession)?;
        header.set_sensitive(true);
        Ok(header)
    }

    fn url(&self, segments: &[&str]) -> Result<reqwest::Url, AocError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AocError::ClientInit("Cannot modify base URL path".to_string()))?
            .clear()
            .extend(segments);
        Ok(url)
    }

    /// Check whether a session cookie is logged in
    ///
    /// The settings page answers 200 for a live session and redirects
    /// otherwise. Any non-success status is reported as an invalid session,
    /// not as an error.
    ///
    /// # Returns
    ///
    /// * `Ok(SessionInfo { user_id: Some(id) })` - Session is valid with user ID
    /// * `Ok(SessionInfo { user_id: None })` - Session is invalid
    /// * `Err` - Network error or malformed cookie
    pub fn verify_session(&self, session: &str) -> Result<SessionInfo, AocError> {
        let cookie = Self::cookie_header(session)?;
        let url = self.url(&["settings"])?;

        let response = self.client.get(url).header(COOKIE, cookie).send()?;
        debug!(status = %response.status(), "session check");

        if !response.status().is_success() {
            return Ok(SessionInfo { user_id: None });
        }

        let html = response.text().map_err(|_| AocError::Encoding)?;
        Ok(SessionInfo {
            user_id: parser::extract_user_id(&html),
        })
    }

    /// Download the personal puzzle input for a year and day
    ///
    /// # Errors
    ///
    /// * `AocError::Request` - Network error
    /// * `AocError::InvalidStatus` - HTTP error (404 while the puzzle is still locked)
    /// * `AocError::Encoding` - Response is not valid UTF-8
    pub fn get_input(&self, year: u16, day: u8, session: &str) -> Result<String, AocError> {
        let cookie = Self::cookie_header(session)?;
        let url = self.url(&[&year.to_string(), "day", &day.to_string(), "input"])?;

        debug!(%url, "fetching input");
        let response = self.client.get(url).header(COOKIE, cookie).send()?;

        if !response.status().is_success() {
            return Err(AocError::InvalidStatus {
                status: response.status(),
            });
        }

        response.text().map_err(|_| AocError::Encoding)
    }
}

/// Builder for an [`AocClient`]
///
/// The redirect policy is always forced to `Policy::none()`, whatever
/// transport builder is supplied.
///
/// ```no_run
/// use aoc_http_client::AocClient;
/// use std::time::Duration;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = AocClient::builder()
///     .base_url("http://localhost:1234")?
///     .client_builder(reqwest::blocking::Client::builder().timeout(Duration::from_secs(10)))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct AocClientBuilder {
    base_url: Option<reqwest::Url>,
    client_builder: Option<reqwest::blocking::ClientBuilder>,
}

impl AocClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            client_builder: None,
        }
    }

    /// Point the client at another host, e.g. a mock server
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn base_url(mut self, url: impl reqwest::IntoUrl) -> Result<Self, AocError> {
        self.base_url = Some(url.into_url()?);
        Ok(self)
    }

    /// Replace the transport configuration (timeouts, proxies, ...)
    pub fn client_builder(mut self, builder: reqwest::blocking::ClientBuilder) -> Self {
        self.client_builder = Some(builder);
        self
    }

    pub fn build(self) -> Result<AocClient, AocError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => reqwest::Url::parse(DEFAULT_BASE_URL)
                .map_err(|e| AocError::ClientInit(e.to_string()))?,
        };

        let builder = self
            .client_builder
            .unwrap_or_else(|| reqwest::blocking::Client::builder().use_rustls_tls());

        let client = builder
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| AocError::ClientInit(e.to_string()))?;

        Ok(AocClient { client, base_url })
    }
}

impl Default for AocClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
