//! Delegating event operations.
//!
//! Each operation waits for the injected tracker and hands it one merged
//! payload. When the tracker never appears the event is logged and
//! dropped; nothing is raised to the caller.

use log::warn;
use serde_json::{json, Value};

use super::tracker::EventData;
use super::Dispatcher;

/// Event name used for outbound link clicks.
const OUTBOUND_LINK_EVENT: &str = "outbound_link";

impl Dispatcher {
    /// Records a named event with optional data.
    pub async fn track_event(&self, name: &str, data: Option<EventData>) {
        match self.wait_for_tracker().await {
            Ok(tracker) => tracker.track(Some(name), data.as_ref()),
            Err(e) => warn!("dropping event {name:?}: {e}"),
        }
    }

    /// Records a revenue event.
    ///
    /// Merges `revenue` and `currency` (default `USD`) into `data`; the
    /// merged values win on key collision.
    pub async fn track_revenue(
        &self,
        name: &str,
        amount: f64,
        currency: Option<&str>,
        data: Option<EventData>,
    ) {
        let mut payload = data.unwrap_or_default();
        payload.insert("revenue".into(), json!(amount));
        payload.insert("currency".into(), json!(currency.unwrap_or("USD")));
        self.track_event(name, Some(payload)).await;
    }

    /// Records a click on a link leaving the site.
    pub async fn track_outbound_link(&self, url: &str, data: Option<EventData>) {
        let mut payload = data.unwrap_or_default();
        payload.insert("url".into(), Value::String(url.to_string()));
        self.track_event(OUTBOUND_LINK_EVENT, Some(payload)).await;
    }

    /// Attaches identity data to the current session.
    pub async fn identify(&self, data: EventData) {
        match self.wait_for_tracker().await {
            Ok(tracker) => tracker.identify(&data),
            Err(e) => warn!("dropping identify call: {e}"),
        }
    }

    /// Identifies the visitor by id, merging optional traits.
    pub async fn identify_user(&self, id: &str, traits: Option<EventData>) {
        let mut data = traits.unwrap_or_default();
        data.insert("id".into(), Value::String(id.to_string()));
        self.identify(data).await;
    }

    /// Records a page view, optionally overriding URL and referrer.
    ///
    /// A nameless tracker call is a page view by convention.
    pub async fn track_page_view(&self, url: Option<&str>, referrer: Option<&str>) {
        let mut data = EventData::new();
        if let Some(url) = url {
            data.insert("url".into(), Value::String(url.to_string()));
        }
        if let Some(referrer) = referrer {
            data.insert("referrer".into(), Value::String(referrer.to_string()));
        }
        let data = (!data.is_empty()).then_some(data);
        match self.wait_for_tracker().await {
            Ok(tracker) => tracker.track(None, data.as_ref()),
            Err(e) => warn!("dropping page view: {e}"),
        }
    }
}
