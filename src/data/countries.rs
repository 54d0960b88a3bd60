//! flagcdn.com country code client
//!
//! Fetches the country code list from flagcdn.com, serves lookups through a
//! disk cache so repeated queries do not re-hit the upstream, and derives
//! flag image URLs without any network traffic.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use super::CountryCodeMap;
use crate::cache::CacheManager;

/// Base URL for flagcdn.com, serving both the code list and flag images
const FLAGCDN_BASE_URL: &str = "https://flagcdn.com";

/// Cache key under which the country code map is stored
const COUNTRY_CODES_CACHE_KEY: &str = "flagcdn:country_codes";

/// Time-to-live for the cached country code map in minutes
const CACHE_TTL_MINUTES: u64 = 1440;

/// Timeout applied to each upstream request
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Default flag image width in pixels
const DEFAULT_FLAG_WIDTH: u32 = 16;

/// Default flag image height in pixels
const DEFAULT_FLAG_HEIGHT: u32 = 12;

/// Errors that can occur when fetching the country code list
#[derive(Debug, Error)]
pub enum CountryCodeError {
    /// Connection failure, timeout, or non-2xx status from the upstream
    #[error("HTTP request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// Response body was not a JSON object mapping codes to names
    #[error("Malformed upstream response: {0}")]
    MalformedResponse(String),

    /// Any other failure while reading the response body
    #[error("Unexpected fetch failure: {0}")]
    Unexpected(String),
}

/// Client for country code lookups backed by flagcdn.com
///
/// Holds an HTTP client, an optional cache manager, and the upstream base
/// URL. Without a cache manager every lookup fetches from the upstream; with
/// one, the code list is fetched at most once per TTL window.
#[derive(Debug, Clone)]
pub struct CountryCodeClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Cache manager for persisting the code list
    cache_manager: Option<CacheManager>,
    /// Base URL for the upstream (allows override for testing)
    base_url: String,
}

impl CountryCodeClient {
    /// Creates a new client with the default cache location
    pub fn new() -> Self {
        Self {
            http_client: Client::new(),
            cache_manager: CacheManager::new(),
            base_url: FLAGCDN_BASE_URL.to_string(),
        }
    }

    /// Creates a new client with a custom cache manager
    pub fn with_cache(cache_manager: CacheManager) -> Self {
        Self {
            http_client: Client::new(),
            cache_manager: Some(cache_manager),
            base_url: FLAGCDN_BASE_URL.to_string(),
        }
    }

    /// Creates a new client that never touches the cache
    pub fn without_cache() -> Self {
        Self {
            http_client: Client::new(),
            cache_manager: None,
            base_url: FLAGCDN_BASE_URL.to_string(),
        }
    }

    /// Overrides the upstream base URL (for testing against a local server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Returns the country code map, serving from cache when fresh
    ///
    /// On a cache miss the list is fetched from the upstream; a non-empty
    /// result is cached for 24 hours and returned. Fetch failures are logged
    /// and surfaced as an empty map, and nothing is cached on failure, so the
    /// next call retries the fetch instead of waiting out a TTL.
    pub async fn country_codes(&self) -> CountryCodeMap {
        if let Some(ref cache_manager) = self.cache_manager {
            if let Some(codes) = cache_manager.get::<CountryCodeMap>(COUNTRY_CODES_CACHE_KEY) {
                debug!("country codes served from cache");
                return codes;
            }
        }

        match self.fetch_from_upstream().await {
            Ok(codes) => {
                if !codes.is_empty() {
                    if let Some(ref cache_manager) = self.cache_manager {
                        if let Err(e) =
                            cache_manager.put(COUNTRY_CODES_CACHE_KEY, &codes, CACHE_TTL_MINUTES)
                        {
                            warn!("failed to cache country codes: {e}");
                        }
                    }
                }
                codes
            }
            Err(e) => {
                warn!("country code fetch failed: {e}");
                CountryCodeMap::new()
            }
        }
    }

    /// Checks whether a two-letter country code is known to the upstream
    ///
    /// The code is lowercased before lookup. An unreachable upstream with an
    /// empty cache makes every code invalid until the next successful fetch.
    pub async fn is_valid_code(&self, code: &str) -> bool {
        let code = code.to_lowercase();
        self.country_codes().await.contains_key(&code)
    }

    /// Looks up the country name for a code
    ///
    /// The code is lowercased before lookup. Returns `None` for codes absent
    /// from the map.
    pub async fn country_name(&self, code: &str) -> Option<String> {
        let code = code.to_lowercase();
        self.country_codes().await.get(&code).cloned()
    }

    /// Returns the flag image URL for a code at the default 16x12 size
    pub fn flag_url(&self, code: &str) -> String {
        self.flag_url_sized(code, DEFAULT_FLAG_WIDTH, DEFAULT_FLAG_HEIGHT)
    }

    /// Returns the flag image URL for a code at the given size
    ///
    /// Pure string formatting: no cache or network interaction, and no
    /// failure mode. Validity of the code is the caller's concern.
    pub fn flag_url_sized(&self, code: &str, width: u32, height: u32) -> String {
        format!(
            "{}/{}x{}/{}.png",
            self.base_url,
            width,
            height,
            code.to_lowercase()
        )
    }

    /// Fetches the code list from the upstream
    ///
    /// Issues a single GET with a fixed timeout; no retries. Retrying is the
    /// caller's concern via the cache's natural re-fetch on expiry.
    async fn fetch_from_upstream(&self) -> Result<CountryCodeMap, CountryCodeError> {
        let url = format!("{}/en/codes.json", self.base_url);
        debug!("fetching country codes from {url}");

        let response = self
            .http_client
            .get(&url)
            .timeout(FETCH_TIMEOUT)
            .send()
            .await
            .map_err(CountryCodeError::Transport)?
            .error_for_status()
            .map_err(CountryCodeError::Transport)?;

        let body = response
            .text()
            .await
            .map_err(|e| CountryCodeError::Unexpected(e.to_string()))?;

        parse_codes(&body)
    }
}

impl Default for CountryCodeClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses the upstream body into a code map, lowercasing every key
///
/// The top-level JSON value must be an object with string values; anything
/// else is a malformed response.
fn parse_codes(body: &str) -> Result<CountryCodeMap, CountryCodeError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| CountryCodeError::MalformedResponse(format!("invalid JSON: {e}")))?;

    let object = match value {
        Value::Object(object) => object,
        other => {
            return Err(CountryCodeError::MalformedResponse(format!(
                "expected a JSON object, got {}",
                json_type_name(&other)
            )))
        }
    };

    let mut codes = CountryCodeMap::with_capacity(object.len());
    for (code, name) in object {
        let name = name.as_str().ok_or_else(|| {
            CountryCodeError::MalformedResponse(format!("value for '{code}' is not a string"))
        })?;
        codes.insert(code.to_lowercase(), name.to_string());
    }

    Ok(codes)
}

/// Describes a JSON value's type for error messages
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
