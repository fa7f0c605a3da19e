//! Configuration types.
//!
//! This module defines the resolved tracking options, the caller-supplied
//! overrides they are resolved from, and the environment view consumed
//! during resolution.

use std::collections::HashMap;

use crate::config::constants::{DEFAULT_HOST, ENV_DEV_FLAG};

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Resolved tracking configuration.
///
/// Constructed once per build invocation by [`resolve`](crate::config::resolve)
/// from explicit overrides, environment variables, and fixed defaults, in
/// that order of precedence. Immutable once resolved.
///
/// # Examples
///
/// ```
/// use entrolytics::TrackingOptions;
///
/// let mut options = TrackingOptions::new("ws-1234");
/// options.use_edge_runtime = false;
/// assert_eq!(options.host, "https://app.entrolytics.io");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TrackingOptions {
    /// Website identifier. Required; resolution fails when empty.
    pub website_id: String,

    /// Base URL of the collection host.
    pub host: String,

    /// Let the remote script track page views automatically.
    pub auto_track: bool,

    /// Track clicks on links leaving the site.
    pub track_outbound_links: bool,

    /// Track file download clicks.
    pub track_file_downloads: bool,

    /// Honor the browser Do Not Track setting.
    pub respect_dnt: bool,

    /// Hostnames tracking is limited to. `None` tracks everywhere.
    pub domains: Option<Vec<String>>,

    /// Reference the edge-runtime script path instead of the standard one.
    pub use_edge_runtime: bool,

    /// Optional label attached to every event.
    pub tag: Option<String>,

    /// Strip the query string from tracked URLs.
    pub exclude_search: bool,

    /// Strip the fragment from tracked URLs.
    pub exclude_hash: bool,
}

impl TrackingOptions {
    /// Creates options for `website_id` with every other field at its
    /// documented default.
    pub fn new(website_id: impl Into<String>) -> Self {
        Self {
            website_id: website_id.into(),
            host: DEFAULT_HOST.to_string(),
            auto_track: true,
            track_outbound_links: true,
            track_file_downloads: false,
            respect_dnt: false,
            domains: None,
            use_edge_runtime: true,
            tag: None,
            exclude_search: false,
            exclude_hash: false,
        }
    }
}

/// Explicit caller-supplied options.
///
/// Every field is optional; `None` defers to the environment and then to
/// the documented default. `Default` overrides nothing.
#[derive(Debug, Clone, Default)]
pub struct OptionOverrides {
    /// Website identifier.
    pub website_id: Option<String>,
    /// Collection host base URL.
    pub host: Option<String>,
    /// Automatic page-view tracking.
    pub auto_track: Option<bool>,
    /// Outbound link tracking.
    pub track_outbound_links: Option<bool>,
    /// File download tracking.
    pub track_file_downloads: Option<bool>,
    /// Do Not Track handling.
    pub respect_dnt: Option<bool>,
    /// Hostname allow-list.
    pub domains: Option<Vec<String>>,
    /// Edge-runtime script selection.
    pub use_edge_runtime: Option<bool>,
    /// Event label.
    pub tag: Option<String>,
    /// Query-string stripping.
    pub exclude_search: Option<bool>,
    /// Fragment stripping.
    pub exclude_hash: Option<bool>,
}

/// Environment view used during option resolution.
///
/// Holds the variables resolution may read plus the development-mode
/// flag. [`Environment::from_process`] snapshots the process environment;
/// tests build one from pairs so resolution never reads ambient state.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    vars: HashMap<String, String>,
    /// Whether this is a development build. Gates the warning logged when
    /// resolution fails for a missing website identifier.
    pub dev: bool,
}

impl Environment {
    /// Snapshots the process environment.
    ///
    /// The development flag is taken from `ENTROLYTICS_DEV` (`1` or
    /// `true`); hosts embedding the crate can set [`Environment::dev`]
    /// directly instead.
    pub fn from_process() -> Self {
        let vars: HashMap<String, String> = std::env::vars().collect();
        let dev = vars
            .get(ENV_DEV_FLAG)
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        Self { vars, dev }
    }

    /// Builds an environment from explicit pairs.
    pub fn from_vars<K, V>(pairs: impl IntoIterator<Item = (K, V)>, dev: bool) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            dev,
        }
    }

    /// Returns the variable's value, treating empty strings as unset.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}
