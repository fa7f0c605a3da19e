//! Per-form tracking session.
//!
//! A [`FormTracker`] accumulates interaction timings for one form across
//! one page visit: a session start timestamp plus the most recent focus
//! time per field. Submit is the terminal transition back to the initial
//! state; abandon intentionally is not, so a later submit still reports
//! the full elapsed time.

use std::collections::HashMap;
use std::time::Instant;

use crate::dispatch::{Dispatcher, FormEvent, FormEventPayload};

/// Mutable per-form tracking session.
///
/// Created by [`Dispatcher::form_tracker`]; owned by one caller, mutated
/// only through its own methods. Emission goes through the dispatcher's
/// collect path and therefore inherits its fails-silently contract.
#[derive(Debug)]
pub struct FormTracker {
    dispatcher: Dispatcher,
    form_id: String,
    form_name: Option<String>,
    started: Option<Instant>,
    fields: HashMap<String, Instant>,
}

impl Dispatcher {
    /// Creates a tracking session for the form identified by `form_id`.
    pub fn form_tracker(&self, form_id: impl Into<String>, form_name: Option<&str>) -> FormTracker {
        FormTracker {
            dispatcher: self.clone(),
            form_id: form_id.into(),
            form_name: form_name.map(str::to_string),
            started: None,
            fields: HashMap::new(),
        }
    }
}

impl FormTracker {
    /// Records the session start time and emits a `start` event.
    pub async fn track_start(&mut self) {
        self.started = Some(Instant::now());
        let payload = self.payload(FormEvent::Start);
        self.dispatcher.track_form_event(payload).await;
    }

    /// Records a field gaining focus.
    ///
    /// Starts the session first (emitting `start`) when no start has
    /// been recorded yet; the field's focus time overwrites any earlier
    /// one.
    pub async fn track_field_focus(
        &mut self,
        field: &str,
        field_type: Option<&str>,
        index: Option<u32>,
    ) {
        if self.started.is_none() {
            self.track_start().await;
        }
        self.fields.insert(field.to_string(), Instant::now());

        let mut payload = self.field_payload(FormEvent::FieldFocus, field, field_type, index);
        payload.elapsed_ms = self.session_elapsed_ms();
        self.dispatcher.track_form_event(payload).await;
    }

    /// Records a field losing focus.
    ///
    /// Reports the time since the field's last focus (absent when the
    /// field was never focused) and the time since session start (absent
    /// when the session never started). Leaves the focus entry in place.
    pub async fn track_field_blur(
        &mut self,
        field: &str,
        field_type: Option<&str>,
        index: Option<u32>,
    ) {
        let mut payload = self.field_payload(FormEvent::FieldBlur, field, field_type, index);
        payload.field_elapsed_ms = self
            .fields
            .get(field)
            .map(|focused| focused.elapsed().as_millis() as u64);
        payload.elapsed_ms = self.session_elapsed_ms();
        self.dispatcher.track_form_event(payload).await;
    }

    /// Records a field validation error. Timing state is untouched.
    pub async fn track_field_error(
        &mut self,
        field: &str,
        message: &str,
        field_type: Option<&str>,
        index: Option<u32>,
    ) {
        let mut payload = self.field_payload(FormEvent::FieldError, field, field_type, index);
        payload.error = Some(message.to_string());
        payload.elapsed_ms = self.session_elapsed_ms();
        self.dispatcher.track_form_event(payload).await;
    }

    /// Records the submit and resets the session to its initial state.
    pub async fn track_submit(&mut self, success: bool) {
        let mut payload = self.payload(FormEvent::Submit);
        payload.elapsed_ms = self.session_elapsed_ms();
        payload.success = Some(success);
        self.dispatcher.track_form_event(payload).await;

        self.started = None;
        self.fields.clear();
    }

    /// Records an abandon. Session state is kept as-is.
    pub async fn track_abandon(&mut self) {
        let mut payload = self.payload(FormEvent::Abandon);
        payload.elapsed_ms = self.session_elapsed_ms();
        self.dispatcher.track_form_event(payload).await;
    }

    /// Whether a session start has been recorded.
    pub fn is_started(&self) -> bool {
        self.started.is_some()
    }

    /// Number of fields with a recorded focus time.
    pub fn tracked_field_count(&self) -> usize {
        self.fields.len()
    }

    fn session_elapsed_ms(&self) -> Option<u64> {
        self.started
            .map(|started| started.elapsed().as_millis() as u64)
    }

    fn payload(&self, event: FormEvent) -> FormEventPayload {
        FormEventPayload::new(self.form_id.clone(), self.form_name.as_deref(), event)
    }

    fn field_payload(
        &self,
        event: FormEvent,
        field: &str,
        field_type: Option<&str>,
        index: Option<u32>,
    ) -> FormEventPayload {
        let mut payload = self.payload(event);
        payload.field = Some(field.to_string());
        payload.field_type = field_type.map(str::to_string);
        payload.field_index = index;
        payload
    }
}
