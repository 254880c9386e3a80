//! Forum API client
//!
//! Talks to the imageboard backend over HTTP with per-request timeouts and
//! bounded linear-backoff retries, and memoizes successful GET responses in
//! an in-memory [`ResponseCache`]. The cache sits between the typed
//! operations and the request layer: a miss always falls through to a real
//! request, a failed request is never stored, and every data-mutating
//! operation invalidates exactly the keys whose data it affects.
//!
//! Resource keys follow a naming convention the invalidation logic depends
//! on: `"boards"`, `"threads_<board>"`, `"thread_<board>_<id>"`.
//!
//! Concurrent callers requesting the same uncached resource each issue their
//! own request; in-flight requests are not deduplicated by key.

use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use crate::cache::ResponseCache;
use crate::config::{
    ClientConfig, MAX_POST_LEN, MAX_THREAD_TITLE_LEN, MIN_POST_LEN, MIN_THREAD_TITLE_LEN,
};
use crate::data::{Board, Created, NewPost, NewThread, ServerTime, ThreadDetail, ThreadSummary};

/// Cache key for the board list
const BOARDS_KEY: &str = "boards";

/// Errors surfaced by the request layer
///
/// Every variant carries the endpoint it is attributed to, except input
/// validation which fails before an endpoint is ever contacted. The cache
/// itself raises no errors; absence there is silent.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Backend answered with a non-success status
    #[error("HTTP {status} from {endpoint}")]
    Status {
        status: StatusCode,
        endpoint: String,
    },

    /// The request did not complete within the configured timeout
    #[error("request to {endpoint} timed out")]
    Timeout { endpoint: String },

    /// Connection-level failure
    #[error("request to {endpoint} failed: {source}")]
    Network {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not the JSON we expected
    #[error("unexpected response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// Input rejected client-side, before any network traffic
    #[error("{0}")]
    InvalidInput(String),
}

impl ApiError {
    /// The endpoint this failure is attributed to, if any.
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            ApiError::Status { endpoint, .. }
            | ApiError::Timeout { endpoint }
            | ApiError::Network { endpoint, .. }
            | ApiError::Decode { endpoint, .. } => Some(endpoint),
            ApiError::InvalidInput(_) => None,
        }
    }

    fn from_reqwest(endpoint: &str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            ApiError::Timeout {
                endpoint: endpoint.to_string(),
            }
        } else {
            ApiError::Network {
                endpoint: endpoint.to_string(),
                source,
            }
        }
    }

    fn decode(endpoint: &str, source: serde_json::Error) -> Self {
        ApiError::Decode {
            endpoint: endpoint.to_string(),
            source,
        }
    }
}

/// Client for the imageboard backend
///
/// Owns the HTTP connection pool and one response cache per client instance;
/// there is no ambient shared state, so creating, clearing and dropping the
/// cache follows the client's lifecycle.
#[derive(Debug)]
pub struct ForumClient {
    /// HTTP client for making requests
    http: Client,
    /// Timeouts, retry policy, cache sizing
    config: ClientConfig,
    /// Memoized GET responses, keyed by resource
    cache: ResponseCache<Value>,
}

impl ForumClient {
    /// Creates a client from the given configuration.
    pub fn new(config: ClientConfig) -> Self {
        let cache = ResponseCache::new(config.cache.max_size, config.cache.ttl);
        Self {
            http: Client::new(),
            config,
            cache,
        }
    }

    /// Creates a client with default settings against a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::new(ClientConfig {
            base_url: base_url.into(),
            ..ClientConfig::default()
        })
    }

    // -- Read operations --

    /// Fetches the board list (`GET /boards`), cached under `"boards"`.
    pub async fn boards(&mut self) -> Result<Vec<Board>, ApiError> {
        self.cached_get(BOARDS_KEY, "/boards").await
    }

    /// Fetches the thread list of a board (`GET /{board}/threads`).
    pub async fn threads(&mut self, board: &str) -> Result<Vec<ThreadSummary>, ApiError> {
        validate_board_name(board)?;
        let endpoint = format!("/{}/threads", board);
        self.cached_get(&threads_key(board), &endpoint).await
    }

    /// Fetches a single thread with its posts (`GET /{board}/thread/{id}`).
    pub async fn thread(&mut self, board: &str, thread_id: u64) -> Result<ThreadDetail, ApiError> {
        validate_board_name(board)?;
        let endpoint = format!("/{}/thread/{}", board, thread_id);
        self.cached_get(&thread_key(board, thread_id), &endpoint)
            .await
    }

    /// Fetches the backend's clock (`GET /time`). Never cached.
    pub async fn server_time(&self) -> Result<ServerTime, ApiError> {
        let value = self.request_with_retry(Method::GET, "/time", None).await?;
        serde_json::from_value(value).map_err(|e| ApiError::decode("/time", e))
    }

    // -- Mutations --

    /// Creates a board (`POST /create_board/{name}`) and invalidates the
    /// cached board list.
    pub async fn create_board(&mut self, name: &str) -> Result<Created, ApiError> {
        validate_board_name(name)?;
        let endpoint = format!("/create_board/{}", name);
        let body = serde_json::json!({ "name": name });

        let value = self
            .request_with_retry(Method::POST, &endpoint, Some(&body))
            .await?;
        self.invalidate_after_board_create();
        serde_json::from_value(value).map_err(|e| ApiError::decode(&endpoint, e))
    }

    /// Creates a thread (`POST /{board}/create_thread`) and invalidates the
    /// board's cached thread list.
    pub async fn create_thread(
        &mut self,
        board: &str,
        thread: &NewThread,
    ) -> Result<Created, ApiError> {
        validate_board_name(board)?;
        validate_thread_title(&thread.title)?;
        let endpoint = format!("/{}/create_thread", board);
        let body = serde_json::json!({ "title": thread.title, "message": thread.message });

        let value = self
            .request_with_retry(Method::POST, &endpoint, Some(&body))
            .await?;
        self.invalidate_after_thread_create(board);
        serde_json::from_value(value).map_err(|e| ApiError::decode(&endpoint, e))
    }

    /// Creates a post (`POST /{board}/{thread}/create_post`) and invalidates
    /// both the cached thread and the board's cached thread list.
    pub async fn create_post(
        &mut self,
        board: &str,
        thread_id: u64,
        post: &NewPost,
    ) -> Result<Created, ApiError> {
        validate_board_name(board)?;
        validate_post_content(&post.content)?;
        let endpoint = format!("/{}/{}/create_post", board, thread_id);
        let body = serde_json::json!({ "content": post.content });

        let value = self
            .request_with_retry(Method::POST, &endpoint, Some(&body))
            .await?;
        self.invalidate_after_post_create(board, thread_id);
        serde_json::from_value(value).map_err(|e| ApiError::decode(&endpoint, e))
    }

    // -- Cache management --

    /// Drops every cached response; the next reads go back to the network.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Number of responses currently cached.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    fn invalidate_after_board_create(&mut self) {
        self.cache.invalidate(BOARDS_KEY);
    }

    fn invalidate_after_thread_create(&mut self, board: &str) {
        self.cache.invalidate(&threads_key(board));
    }

    fn invalidate_after_post_create(&mut self, board: &str, thread_id: u64) {
        self.cache.invalidate(&thread_key(board, thread_id));
        self.cache.invalidate(&threads_key(board));
    }

    // -- Request layer --

    /// Read-through lookup: serves `key` from the cache when fresh,
    /// otherwise fetches `endpoint` and stores the decoded payload.
    async fn cached_get<T: DeserializeOwned>(
        &mut self,
        key: &str,
        endpoint: &str,
    ) -> Result<T, ApiError> {
        if self.config.cache.enabled {
            if let Some(value) = self.cache.get(key) {
                debug!(key, "cache hit");
                return serde_json::from_value(value).map_err(|e| ApiError::decode(endpoint, e));
            }
            debug!(key, "cache miss");
        }

        let value = self.request_with_retry(Method::GET, endpoint, None).await?;
        let payload = serde_json::from_value(value.clone())
            .map_err(|e| ApiError::decode(endpoint, e))?;

        // Only a fully decoded success makes it into the cache.
        if self.config.cache.enabled {
            self.cache.put(key, value);
        }
        Ok(payload)
    }

    /// Issues a request, retrying up to the configured attempt count with a
    /// linearly growing delay between attempts. The last error propagates
    /// untouched.
    async fn request_with_retry(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let attempts = self.config.retry_attempts.max(1);
        let mut attempt = 1;

        loop {
            match self.request(method.clone(), endpoint, body).await {
                Ok(value) => return Ok(value),
                Err(err) if attempt < attempts => {
                    let delay = retry_backoff(self.config.retry_delay, attempt);
                    warn!(endpoint, attempt, delay_ms = delay.as_millis() as u64, %err,
                        "request failed, retrying");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// One HTTP round-trip with the configured timeout.
    async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.config.base_url, endpoint);
        debug!(%method, endpoint, "api request");

        let mut request = self
            .http
            .request(method, &url)
            .timeout(self.config.timeout);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::from_reqwest(endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                endpoint: endpoint.to_string(),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| ApiError::from_reqwest(endpoint, e))?;
        let value = serde_json::from_str(&text).map_err(|e| ApiError::decode(endpoint, e))?;

        debug!(endpoint, "api response ok");
        Ok(value)
    }
}

/// Delay before the retry following `attempt` (1-based): linear backoff.
fn retry_backoff(base: Duration, attempt: u32) -> Duration {
    base * attempt
}

/// Cache key for a board's thread list.
fn threads_key(board: &str) -> String {
    format!("threads_{}", board)
}

/// Cache key for a single thread.
fn thread_key(board: &str, thread_id: u64) -> String {
    format!("thread_{}_{}", board, thread_id)
}

/// Board names appear in URL paths, so only a conservative character set is
/// accepted.
fn validate_board_name(name: &str) -> Result<(), ApiError> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid {
        return Err(ApiError::InvalidInput(
            "invalid board name: only letters, numbers, hyphens and underscores are allowed"
                .to_string(),
        ));
    }
    Ok(())
}

fn validate_thread_title(title: &str) -> Result<(), ApiError> {
    if title.chars().count() < MIN_THREAD_TITLE_LEN {
        return Err(ApiError::InvalidInput("thread title is required".to_string()));
    }
    if title.chars().count() > MAX_THREAD_TITLE_LEN {
        return Err(ApiError::InvalidInput(format!(
            "thread title must be at most {} characters",
            MAX_THREAD_TITLE_LEN
        )));
    }
    Ok(())
}

fn validate_post_content(content: &str) -> Result<(), ApiError> {
    if content.chars().count() < MIN_POST_LEN {
        return Err(ApiError::InvalidInput("post content is required".to_string()));
    }
    if content.chars().count() > MAX_POST_LEN {
        return Err(ApiError::InvalidInput(format!(
            "post content must be at most {} characters",
            MAX_POST_LEN
        )));
    }
    Ok(())
}
