// Explicit registration of submit listeners per form id.
//
// Responsibilities
// - Route a submit event to the listener bound to its form id.
// - Binding a listener has no side effects; nothing runs until an event is dispatched.

use crate::modules::registration::use_cases::submit_registration::event::SubmitEvent;
use crate::modules::registration::use_cases::submit_registration::outcome::SubmissionOutcome;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

#[async_trait]
pub trait SubmitListener: Send + Sync {
    async fn on_submit(&self, event: &mut SubmitEvent) -> SubmissionOutcome;
}

#[derive(Default, Clone)]
pub struct FormBindings {
    listeners: HashMap<String, Arc<dyn SubmitListener>>,
}

impl FormBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `listener` to submissions of `form_id`, replacing any previous listener.
    pub fn bind(&mut self, form_id: impl Into<String>, listener: Arc<dyn SubmitListener>) {
        let form_id = form_id.into();
        tracing::debug!(%form_id, "submit listener bound");
        self.listeners.insert(form_id, listener);
    }

    pub fn is_bound(&self, form_id: &str) -> bool {
        self.listeners.contains_key(form_id)
    }

    /// Runs the listener bound to the event's form, or returns `None` when there is none.
    pub async fn dispatch(&self, event: &mut SubmitEvent) -> Option<SubmissionOutcome> {
        let Some(listener) = self.listeners.get(&event.form_id) else {
            tracing::warn!(form_id = %event.form_id, "submit event for unbound form");
            return None;
        };
        Some(listener.on_submit(event).await)
    }
}
