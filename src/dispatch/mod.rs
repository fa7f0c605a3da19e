//! Client event dispatcher.
//!
//! Bridges page-level code to (a) the injected [`Tracker`] capability,
//! which appears asynchronously in a [`TrackerSlot`], and (b) the remote
//! collection endpoints for payload kinds the tracker does not handle
//! (web vitals, form interactions).
//!
//! Every operation here is best-effort telemetry: failures are logged and
//! swallowed, never raised to the caller. Callers wanting fire-and-forget
//! delivery `tokio::spawn` the returned futures; the spawned task keeps
//! delivering after the caller moves on.

mod collect;
mod events;
mod payload;
mod tracker;

pub use collect::{CollectTransport, HttpCollectTransport};
pub use payload::{FormEvent, FormEventPayload, WebVitalPayload};
pub use tracker::{EventData, Tracker, TrackerSlot};

use std::sync::Arc;
use std::time::Duration;

use log::{error, warn};
use serde::Serialize;
use tokio_retry::strategy::FixedInterval;
use tokio_retry::Retry;

use crate::config::{
    TrackingOptions, FORMS_ENDPOINT, TRACKER_POLL_INTERVAL, TRACKER_POLL_MAX_ATTEMPTS,
    VITALS_ENDPOINT,
};
use crate::error::{InitializationError, TrackerWaitError};
use crate::initialization::init_client;
use crate::tag::normalize_host;
use payload::CollectEnvelope;

/// Runtime configuration consumed by the dispatcher.
///
/// The same two fields the Resolver's config snippet assigns on the page;
/// here it is passed in explicitly instead of read from ambient state.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeConfig {
    /// Website identifier attached to every collect payload.
    pub website_id: String,
    /// Normalized collection host base URL.
    pub host: String,
}

impl RuntimeConfig {
    /// Derives the runtime configuration from resolved options.
    pub fn from_options(options: &TrackingOptions) -> Self {
        Self {
            website_id: options.website_id.clone(),
            host: normalize_host(&options.host).to_string(),
        }
    }
}

/// Retry policy for the tracker presence poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitPolicy {
    /// Delay between re-checks.
    pub interval: Duration,
    /// Re-checks performed after the initial one before giving up.
    pub max_attempts: usize,
}

impl Default for WaitPolicy {
    fn default() -> Self {
        Self {
            interval: TRACKER_POLL_INTERVAL,
            max_attempts: TRACKER_POLL_MAX_ATTEMPTS,
        }
    }
}

struct DispatcherInner {
    config: Option<RuntimeConfig>,
    tracker: TrackerSlot,
    transport: Arc<dyn CollectTransport>,
    wait: WaitPolicy,
}

/// Cheaply cloneable dispatcher handle.
///
/// Constructed once per page context and cloned into whatever needs to
/// report events; clones share the tracker slot and transport.
#[derive(Clone)]
pub struct Dispatcher {
    inner: Arc<DispatcherInner>,
}

impl Dispatcher {
    /// Creates a dispatcher with the default transport and wait policy.
    ///
    /// `config` is `None` when the page carries no runtime configuration;
    /// collect operations then log a warning and drop their payloads.
    ///
    /// # Errors
    ///
    /// Returns [`InitializationError::HttpClientError`] if the HTTP
    /// client cannot be built.
    pub fn new(config: Option<RuntimeConfig>) -> Result<Self, InitializationError> {
        let transport = Arc::new(HttpCollectTransport::new(init_client()?));
        Ok(Self::with_parts(config, transport, WaitPolicy::default()))
    }

    /// Full dependency-injection constructor.
    pub fn with_parts(
        config: Option<RuntimeConfig>,
        transport: Arc<dyn CollectTransport>,
        wait: WaitPolicy,
    ) -> Self {
        Self {
            inner: Arc::new(DispatcherInner {
                config,
                tracker: TrackerSlot::new(),
                transport,
                wait,
            }),
        }
    }

    /// Returns the slot the host installs the tracker into.
    pub fn tracker_slot(&self) -> TrackerSlot {
        self.inner.tracker.clone()
    }

    /// Waits for the tracker to appear in the slot.
    ///
    /// Checks immediately, then re-checks on the policy interval until
    /// the tracker is installed or the attempt budget runs out.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerWaitError::Timeout`] when the slot stays empty.
    pub async fn wait_for_tracker(&self) -> Result<Arc<dyn Tracker>, TrackerWaitError> {
        let policy = self.inner.wait;
        let strategy = FixedInterval::new(policy.interval).take(policy.max_attempts);
        let slot = self.inner.tracker.clone();
        Retry::spawn(strategy, move || {
            let slot = slot.clone();
            async move { slot.get().ok_or(()) }
        })
        .await
        .map_err(|()| TrackerWaitError::Timeout {
            attempts: policy.max_attempts,
            waited_ms: policy.interval.as_millis() as u64 * policy.max_attempts as u64,
        })
    }

    /// Sends a web-vital measurement to the collection endpoint.
    ///
    /// Fails silently: without runtime configuration the payload is
    /// dropped with a warning, and transport failures are logged and
    /// swallowed.
    pub async fn track_vital(&self, vital: WebVitalPayload) {
        let Some(config) = &self.inner.config else {
            warn!(
                "runtime config missing; dropping web vital {}",
                vital.metric
            );
            return;
        };
        let url = format!("{}{}", config.host, VITALS_ENDPOINT);
        self.post_collect(
            &url,
            &CollectEnvelope {
                website_id: &config.website_id,
                payload: &vital,
            },
        )
        .await;
    }

    /// Sends a form-interaction event to the collection endpoint.
    ///
    /// Same fails-silently contract as [`Dispatcher::track_vital`].
    pub async fn track_form_event(&self, event: FormEventPayload) {
        let Some(config) = &self.inner.config else {
            warn!(
                "runtime config missing; dropping form event for {}",
                event.form_id
            );
            return;
        };
        let url = format!("{}{}", config.host, FORMS_ENDPOINT);
        self.post_collect(
            &url,
            &CollectEnvelope {
                website_id: &config.website_id,
                payload: &event,
            },
        )
        .await;
    }

    async fn post_collect<T: Serialize>(&self, url: &str, envelope: &CollectEnvelope<'_, T>) {
        let body = match serde_json::to_value(envelope) {
            Ok(body) => body,
            Err(e) => {
                error!("failed to serialize collect payload: {e}");
                return;
            }
        };
        if let Err(e) = self.inner.transport.post_json(url, body).await {
            error!("collect POST to {url} failed: {e}");
        }
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("config", &self.inner.config)
            .field("tracker", &self.inner.tracker)
            .field("wait", &self.inner.wait)
            .finish()
    }
}
