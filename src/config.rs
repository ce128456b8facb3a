//! Synchronizer timing and endpoint configuration.
//!
//! Defaults match the server's contract. A page can override the poll
//! interval and the stream path through its query string, e.g.
//! `/?poll_ms=750&stream=%2Fevents`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const UPDATE_PATH: &str = "/update";
pub const DEFAULT_STREAM_PATH: &str = "/stream";

pub const DEFAULT_POLL_INTERVAL_MS: u32 = 1000;
pub const MIN_POLL_INTERVAL_MS: u32 = 500;
pub const MAX_POLL_INTERVAL_MS: u32 = 1000;

/// Delay before reopening the stream after a completed response.
pub const STREAM_RECONNECT_MS: u32 = 1000;
/// Delay before reopening the stream after a transport error.
pub const STREAM_ERROR_RETRY_MS: u32 = 5000;

/// Distance from the bottom (px) still treated as "at bottom".
pub const BOTTOM_TOLERANCE_PX: f64 = 10.0;
/// Gap between the scroll affordance and the transcript's bottom edge.
pub const AFFORDANCE_OFFSET_PX: f64 = 20.0;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    pub poll_interval_ms: u32,
    pub stream_path: String,
    pub stream_reconnect_ms: u32,
    pub stream_error_retry_ms: u32,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            stream_path: DEFAULT_STREAM_PATH.to_owned(),
            stream_reconnect_ms: STREAM_RECONNECT_MS,
            stream_error_retry_ms: STREAM_ERROR_RETRY_MS,
        }
    }
}

impl SyncConfig {
    /// Build config from a URL query string.
    ///
    /// Recognized keys:
    /// - `poll_ms`: poll interval, clamped to 500..=1000
    /// - `stream`: absolute path of the push subscription endpoint
    ///
    /// Keys and values are percent-decoded. Unknown keys are ignored. A
    /// recognized key with an unusable value keeps its default and is
    /// reported in the returned error list; the other keys still apply.
    pub fn from_query(query: &str) -> (Self, Vec<ConfigError>) {
        let mut config = Self::default();
        let mut errors = Vec::new();
        let query = query.strip_prefix('?').unwrap_or(query);

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            let applied = match key.as_ref() {
                "poll_ms" => parse_poll_interval(&value).map(|ms| config.poll_interval_ms = ms),
                "stream" => parse_stream_path(&value).map(|path| config.stream_path = path),
                _ => Ok(()),
            };
            if let Err(e) = applied {
                errors.push(e);
            }
        }

        (config, errors)
    }

    /// Read config from the current page location. Invalid keys are logged
    /// and left at their defaults.
    pub fn from_location() -> Self {
        #[cfg(feature = "csr")]
        {
            let search = web_sys::window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            let (config, errors) = Self::from_query(&search);
            for e in errors {
                leptos::logging::warn!("ignoring page config: {e}");
            }
            config
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }
}

fn parse_poll_interval(raw: &str) -> Result<u32, ConfigError> {
    raw.parse::<u32>()
        .map(|ms| ms.clamp(MIN_POLL_INTERVAL_MS, MAX_POLL_INTERVAL_MS))
        .map_err(|_| invalid("poll_ms", raw))
}

fn parse_stream_path(raw: &str) -> Result<String, ConfigError> {
    if raw.starts_with('/') && !raw.contains(char::is_whitespace) {
        Ok(raw.to_owned())
    } else {
        Err(invalid("stream", raw))
    }
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue { key: key.to_owned(), value: value.to_owned() }
}
