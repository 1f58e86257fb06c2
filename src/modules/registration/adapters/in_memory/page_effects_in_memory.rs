use crate::modules::registration::use_cases::submit_registration::ports::PageEffects;
use std::sync::{Mutex, PoisonError};

/// Records alerts and navigations instead of showing them.
#[derive(Debug, Default)]
pub struct InMemoryPageEffects {
    alerts: Mutex<Vec<String>>,
    navigations: Mutex<Vec<String>>,
}

impl InMemoryPageEffects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl PageEffects for InMemoryPageEffects {
    fn alert(&self, notice: &str) {
        self.alerts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notice.to_string());
    }

    fn navigate(&self, path: &str) {
        self.navigations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(path.to_string());
    }
}
