//! Configuration constants.

use std::time::Duration;

/// Default collection host used when no host is configured explicitly or
/// through the environment.
pub const DEFAULT_HOST: &str = "https://app.entrolytics.io";

/// Primary environment variable holding the website identifier.
pub const ENV_WEBSITE_ID: &str = "PUBLIC_ENTROLYTICS_WEBSITE_ID";

/// Build-tool-prefixed fallback for the website identifier.
pub const ENV_WEBSITE_ID_FALLBACK: &str = "VITE_ENTROLYTICS_WEBSITE_ID";

/// Primary environment variable holding the collection host.
pub const ENV_HOST: &str = "PUBLIC_ENTROLYTICS_HOST";

/// Build-tool-prefixed fallback for the collection host.
pub const ENV_HOST_FALLBACK: &str = "VITE_ENTROLYTICS_HOST";

/// Environment variable marking a development build (`1` or `true`).
pub const ENV_DEV_FLAG: &str = "ENTROLYTICS_DEV";

/// Script path served by the edge runtime (the default).
pub const EDGE_SCRIPT_PATH: &str = "/script-edge.js";

/// Script path served by the standard runtime.
pub const STANDARD_SCRIPT_PATH: &str = "/script.js";

/// Name of the global the config snippet assigns on `window`.
pub const CONFIG_GLOBAL: &str = "__entrolytics";

/// Collection endpoint for web-vital payloads, relative to the host.
pub const VITALS_ENDPOINT: &str = "/api/collect/vitals";

/// Collection endpoint for form-interaction payloads, relative to the host.
pub const FORMS_ENDPOINT: &str = "/api/collect/forms";

/// Interval between tracker presence re-checks.
pub const TRACKER_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Re-checks performed after the initial one before giving up on the
/// tracker (50 x 100ms, roughly five seconds).
pub const TRACKER_POLL_MAX_ATTEMPTS: usize = 50;

/// Request timeout for collect POSTs.
pub const COLLECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Fragment injected at the page-load position when auto-tracking is on,
/// so client-side route transitions still record a page view.
pub const PAGE_VIEW_FRAGMENT: &str =
    "<script>window.entrolytics && window.entrolytics.track();</script>";
