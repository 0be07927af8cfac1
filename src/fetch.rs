//! Page fetching with politeness delay and exponential backoff retry.
//!
//! This module owns every network concern of the scraper. Callers get one
//! signal: a parsed document or nothing. No fetch error escapes past this
//! boundary, so a dead category page can never abort the rest of a run.
//!
//! # Architecture
//!
//! - [`FetchPage`]: trait seam for page retrieval, so the site adapter can be
//!   driven by a canned document source in tests
//! - [`Fetcher`]: the live implementation over a shared `reqwest` client
//!
//! # Retry strategy
//!
//! - Fixed politeness delay (2 s) before every request
//! - Up to 3 retries on transient statuses (429, 500, 502, 503, 504)
//! - Exponential backoff starting at 1 second, capped at 30 seconds
//! - Random jitter (0-250 ms) added to each delay
//! - 403 is never retried: it means the site is blocking us, and hammering
//!   it would only make that worse

use rand::{rng, Rng};
use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CACHE_CONTROL, CONNECTION, DNT,
    UPGRADE_INSECURE_REQUESTS, USER_AGENT,
};
use reqwest::{Client, StatusCode};
use scraper::Html;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, instrument, warn};
use url::Url;

/// Trait for retrieving and parsing a page.
///
/// Absence is the sole failure signal: implementations log their own
/// diagnostics and return `None` on any failure.
pub trait FetchPage {
    /// Fetch `url` and return the parsed document, or `None` on failure.
    async fn fetch(&self, url: &str) -> Option<Html>;
}

/// Live page fetcher over a shared HTTP client.
///
/// The client carries a realistic browser header set and a bounded request
/// timeout; each `fetch` call applies the politeness delay and the retry
/// policy described at the module level.
pub struct Fetcher {
    client: Client,
    request_delay: Duration,
    max_retries: usize,
    base_delay: Duration,
    max_delay: Duration,
}

impl Fetcher {
    /// Build a fetcher with the default politeness and retry settings.
    pub fn new() -> Self {
        let client = Client::builder()
            .default_headers(browser_headers())
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            request_delay: Duration::from_secs(2),
            max_retries: 3,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(30),
        }
    }

    /// Backoff delay for the given 1-based retry attempt, with jitter.
    fn backoff_delay(&self, attempt: usize) -> Duration {
        let mut delay = self.base_delay.saturating_mul(1 << (attempt - 1));
        if delay > self.max_delay {
            delay = self.max_delay;
        }
        let jitter_ms: u64 = rng().random_range(0..=250);
        delay + Duration::from_millis(jitter_ms)
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchPage for Fetcher {
    #[instrument(level = "info", skip(self))]
    async fn fetch(&self, url: &str) -> Option<Html> {
        let target = match normalize_url(url) {
            Ok(target) => target,
            Err(e) => {
                warn!(url, error = %e, "invalid URL; skipping");
                return None;
            }
        };

        // Throttle before every request to reduce rate-limiting risk.
        sleep(self.request_delay).await;

        let mut attempt = 0usize;
        loop {
            let response = match self.client.get(target.clone()).send().await {
                Ok(response) => response,
                Err(e) => {
                    warn!(%target, error = %e, "error fetching page");
                    return None;
                }
            };

            let status = response.status();
            if status.is_success() {
                let body = match response.text().await {
                    Ok(body) => body,
                    Err(e) => {
                        warn!(%target, error = %e, "error reading response body");
                        return None;
                    }
                };
                debug!(%target, bytes = body.len(), "fetched page");
                return Some(Html::parse_document(&body));
            }

            if status == StatusCode::FORBIDDEN {
                warn!(%target, "access denied (403); site may have bot protection");
                return None;
            }

            if is_retryable(status) && attempt < self.max_retries {
                attempt += 1;
                let delay = self.backoff_delay(attempt);
                warn!(
                    %target,
                    %status,
                    attempt,
                    max = self.max_retries,
                    ?delay,
                    "transient HTTP error; backing off"
                );
                sleep(delay).await;
                continue;
            }

            warn!(%target, %status, "HTTP error fetching page");
            return None;
        }
    }
}

/// Statuses worth retrying: rate limiting and transient server errors.
fn is_retryable(status: StatusCode) -> bool {
    matches!(status.as_u16(), 429 | 500 | 502 | 503 | 504)
}

/// Qualify a bare domain/path with `https://` when no scheme is present.
fn normalize_url(raw: &str) -> Result<Url, url::ParseError> {
    if raw.starts_with("http://") || raw.starts_with("https://") {
        Url::parse(raw)
    } else {
        Url::parse(&format!("https://{raw}"))
    }
}

/// Header set mimicking a desktop browser session.
fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        USER_AGENT,
        HeaderValue::from_static(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
             (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
        ),
    );
    headers.insert(
        ACCEPT,
        HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
        ),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));
    headers.insert(DNT, HeaderValue::from_static("1"));
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));
    headers.insert(
        HeaderName::from_static("sec-fetch-dest"),
        HeaderValue::from_static("document"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-mode"),
        HeaderValue::from_static("navigate"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-site"),
        HeaderValue::from_static("none"),
    );
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("max-age=0"));
    headers
}
