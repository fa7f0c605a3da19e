//! Shared test doubles for the integration suites.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use entrolytics::{
    CollectTransport, Dispatcher, EventData, RuntimeConfig, Tracker, TransportError, WaitPolicy,
};

/// A tracker double that records every delegated call.
#[derive(Debug, Default)]
pub struct RecordingTracker {
    pub tracks: Mutex<Vec<(Option<String>, Option<EventData>)>>,
    pub identifies: Mutex<Vec<EventData>>,
}

impl Tracker for RecordingTracker {
    fn track(&self, name: Option<&str>, data: Option<&EventData>) {
        self.tracks
            .lock()
            .unwrap()
            .push((name.map(str::to_string), data.cloned()));
    }

    fn identify(&self, data: &EventData) {
        self.identifies.lock().unwrap().push(data.clone());
    }
}

/// A transport double that records every POST instead of sending it.
#[derive(Default)]
pub struct RecordingTransport {
    pub posts: Mutex<Vec<(String, Value)>>,
}

impl RecordingTransport {
    pub fn bodies(&self) -> Vec<Value> {
        self.posts
            .lock()
            .unwrap()
            .iter()
            .map(|(_, body)| body.clone())
            .collect()
    }
}

#[async_trait]
impl CollectTransport for RecordingTransport {
    async fn post_json(&self, url: &str, body: Value) -> Result<(), TransportError> {
        self.posts.lock().unwrap().push((url.to_string(), body));
        Ok(())
    }
}

/// Runtime configuration pointing at a test host.
pub fn test_config() -> RuntimeConfig {
    RuntimeConfig {
        website_id: "ws-test".into(),
        host: "https://stats.example.com".into(),
    }
}

/// A wait policy short enough for tests.
pub fn quick_wait() -> WaitPolicy {
    WaitPolicy {
        interval: Duration::from_millis(5),
        max_attempts: 10,
    }
}

/// A dispatcher wired to a recording transport.
pub fn recording_dispatcher() -> (Dispatcher, Arc<RecordingTransport>) {
    let transport = Arc::new(RecordingTransport::default());
    let dispatcher = Dispatcher::with_parts(
        Some(test_config()),
        Arc::clone(&transport) as Arc<dyn CollectTransport>,
        quick_wait(),
    );
    (dispatcher, transport)
}
