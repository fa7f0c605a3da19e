//! entrolytics: build-time tracking-script injection and client event dispatch
//!
//! Two independent components:
//!
//! - The **option resolver and tag builder** merge explicit options with
//!   environment-derived defaults and render the `<script>` tag plus the
//!   inline configuration snippet a site generator injects into every
//!   page.
//! - The **event dispatcher** forwards structured events to the injected
//!   tracker once it appears, and POSTs web-vital and form-interaction
//!   payloads straight to the collection endpoints.
//!
//! Dispatch is best-effort telemetry: every operation fails silently,
//! logs, and returns, so analytics can never break the host page.
//!
//! # Example
//!
//! ```no_run
//! use entrolytics::{
//!     resolve, Dispatcher, Environment, OptionOverrides, RuntimeConfig,
//! };
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let options = resolve(OptionOverrides::default(), &Environment::from_process())?;
//! let dispatcher = Dispatcher::new(Some(RuntimeConfig::from_options(&options)))?;
//!
//! // Fire-and-forget: spawn the future and move on.
//! let d = dispatcher.clone();
//! tokio::spawn(async move { d.track_event("signup", None).await });
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! The dispatcher requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling its functions within an async
//! context.

#![warn(missing_docs)]

pub mod config;
mod dispatch;
mod error;
mod forms;
pub mod initialization;
mod inject;
pub mod tag;
pub mod vitals;

// Re-export public API
pub use config::{resolve, Environment, LogFormat, OptionOverrides, TrackingOptions};
pub use dispatch::{
    CollectTransport, Dispatcher, EventData, FormEvent, FormEventPayload, HttpCollectTransport,
    RuntimeConfig, Tracker, TrackerSlot, WaitPolicy, WebVitalPayload,
};
pub use error::{ConfigError, InitializationError, TrackerWaitError, TransportError};
pub use forms::FormTracker;
pub use inject::{install, InjectHooks};
pub use tag::{build_config_snippet, build_script_tag, normalize_host};
pub use vitals::{MetricKind, VitalCallback, VitalSample, VitalsProvider};
