//! Collect payload types.
//!
//! Transient wire records POSTed to the collection endpoints; camelCase
//! on the wire, never persisted locally. The dispatcher wraps each one in
//! an envelope carrying the website identifier.

use serde::Serialize;
use serde_json::Value;

/// A page-performance metric measurement.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebVitalPayload {
    /// Metric kind label, e.g. `LCP`.
    pub metric: String,
    /// Measured value.
    pub value: f64,
    /// Rating bucket reported by the producer (`good`, `needs-improvement`, `poor`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    /// Change since the previous report of this metric.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta: Option<f64>,
    /// Producer-assigned measurement identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Navigation type the measurement belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigation_type: Option<String>,
    /// Producer attribution detail, passed through opaquely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribution: Option<Value>,
}

/// Kind of form interaction being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormEvent {
    /// Session start.
    Start,
    /// A field gained focus.
    FieldFocus,
    /// A field lost focus.
    FieldBlur,
    /// A field failed validation.
    FieldError,
    /// The form was submitted.
    Submit,
    /// The visitor left without submitting.
    Abandon,
}

/// A form-interaction event.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormEventPayload {
    /// Form element identifier.
    pub form_id: String,
    /// Human-readable form name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_name: Option<String>,
    /// Interaction kind.
    pub event: FormEvent,
    /// Field name, for field-level events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Field input type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,
    /// Field position within the form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_index: Option<u32>,
    /// Milliseconds since the session started.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_ms: Option<u64>,
    /// Milliseconds since the field's last recorded focus.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_elapsed_ms: Option<u64>,
    /// Validation error message, for `field_error`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Whether the submit succeeded, for `submit`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
}

impl FormEventPayload {
    /// A payload for `event` with every optional field empty.
    pub fn new(form_id: impl Into<String>, form_name: Option<&str>, event: FormEvent) -> Self {
        Self {
            form_id: form_id.into(),
            form_name: form_name.map(str::to_string),
            event,
            field: None,
            field_type: None,
            field_index: None,
            elapsed_ms: None,
            field_elapsed_ms: None,
            error: None,
            success: None,
        }
    }
}

/// Wire envelope adding the website identifier to a collect payload.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CollectEnvelope<'a, T: Serialize> {
    pub website_id: &'a str,
    #[serde(flatten)]
    pub payload: &'a T,
}
