//! Error type definitions.
//!
//! Build-time configuration failures are fatal and surface as
//! [`ConfigError`]. Everything on the dispatch side follows the telemetry
//! policy: fails silently, logs, returns. The only dispatch error callers
//! can observe is [`TrackerWaitError`], and ignoring it is fine.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for option resolution failures.
///
/// Raised synchronously during the build; there is no runtime recovery
/// path because script injection without a website identifier is
/// meaningless.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No website identifier in explicit options or the environment.
    #[error(
        "no website ID found; set PUBLIC_ENTROLYTICS_WEBSITE_ID (or VITE_ENTROLYTICS_WEBSITE_ID) \
         or pass one explicitly"
    )]
    MissingWebsiteId,

    /// The configured host is not an absolute http(s) URL.
    #[error("invalid collection host {host:?}; expected an absolute http(s) URL")]
    InvalidHost {
        /// The rejected host value.
        host: String,
    },
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// The tracker never appeared within the configured wait policy.
#[derive(Error, Debug)]
pub enum TrackerWaitError {
    /// Polling was exhausted without the tracker being installed.
    #[error("tracker did not appear after {attempts} re-checks (~{waited_ms} ms)")]
    Timeout {
        /// Number of re-checks performed after the initial one.
        attempts: usize,
        /// Approximate total time spent polling, in milliseconds.
        waited_ms: u64,
    },
}

/// Transport failure on a collect POST.
///
/// Never propagated out of the dispatcher; caught, logged, and dropped.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The HTTP request failed or returned an error status.
    #[error("collect request failed: {0}")]
    Http(#[from] ReqwestError),
}
