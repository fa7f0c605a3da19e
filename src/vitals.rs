//! Web-vital metric registration.
//!
//! The performance-metric library is an external producer behind the
//! [`VitalsProvider`] seam. When it is unavailable, automatic collection
//! degrades to a no-op; manual [`Dispatcher::track_vital`] calls keep
//! working either way.

use log::info;
use serde_json::Value;
use strum::IntoEnumIterator;
use strum_macros::EnumIter as EnumIterMacro;

use crate::dispatch::{Dispatcher, WebVitalPayload};

/// The five tracked page-performance metric kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum MetricKind {
    /// Largest contentful paint.
    Lcp,
    /// Interaction to next paint.
    Inp,
    /// Cumulative layout shift.
    Cls,
    /// First contentful paint.
    Fcp,
    /// Time to first byte.
    Ttfb,
}

impl MetricKind {
    /// The metric label used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::Lcp => "LCP",
            MetricKind::Inp => "INP",
            MetricKind::Cls => "CLS",
            MetricKind::Fcp => "FCP",
            MetricKind::Ttfb => "TTFB",
        }
    }
}

impl std::fmt::Display for MetricKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One measurement delivered by the metric producer.
#[derive(Debug, Clone)]
pub struct VitalSample {
    /// Measured value.
    pub value: f64,
    /// Rating bucket, when the producer reports one.
    pub rating: Option<String>,
    /// Change since the previous report.
    pub delta: Option<f64>,
    /// Producer-assigned measurement identifier.
    pub id: Option<String>,
    /// Navigation type the measurement belongs to.
    pub navigation_type: Option<String>,
    /// Producer attribution detail.
    pub attribution: Option<Value>,
}

/// Callback invoked per measurement of a subscribed metric kind.
pub type VitalCallback = Box<dyn Fn(VitalSample) + Send + Sync>;

/// External performance-metric producer.
pub trait VitalsProvider {
    /// Registers `callback` to receive measurements of `kind`.
    fn subscribe(&self, kind: MetricKind, callback: VitalCallback);
}

impl WebVitalPayload {
    /// Builds the wire payload for one measurement.
    pub fn from_sample(kind: MetricKind, sample: VitalSample) -> Self {
        Self {
            metric: kind.as_str().to_string(),
            value: sample.value,
            rating: sample.rating,
            delta: sample.delta,
            id: sample.id,
            navigation_type: sample.navigation_type,
            attribution: sample.attribution,
        }
    }
}

impl Dispatcher {
    /// Registers a forwarding callback for every metric kind.
    ///
    /// `None` means the metric library could not be loaded; collection
    /// degrades silently to a no-op. Must be called from within a Tokio
    /// runtime: each measurement is forwarded on a spawned task so the
    /// producer's callback never blocks on delivery.
    pub fn init_web_vitals(&self, provider: Option<&dyn VitalsProvider>) {
        let Some(provider) = provider else {
            info!("web vitals producer unavailable; automatic collection disabled");
            return;
        };

        for kind in MetricKind::iter() {
            let dispatcher = self.clone();
            provider.subscribe(
                kind,
                Box::new(move |sample| {
                    let dispatcher = dispatcher.clone();
                    let payload = WebVitalPayload::from_sample(kind, sample);
                    tokio::spawn(async move { dispatcher.track_vital(payload).await });
                }),
            );
        }
    }
}
