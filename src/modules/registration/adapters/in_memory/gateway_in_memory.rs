// In memory implementation of the RegistrationGateway port.
//
// Purpose
// - Support handler tests and local development without a running endpoint.
//
// Responsibilities
// - Record every request it receives.
// - Answer with a scripted body, or fail as unreachable while offline.

use crate::modules::registration::core::request::RegistrationRequest;
use crate::modules::registration::core::response::RegistrationResponse;
use crate::modules::registration::use_cases::submit_registration::ports::{
    GatewayError, RegistrationGateway,
};
use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::Mutex;

pub struct InMemoryRegistrationGateway {
    requests: Mutex<Vec<RegistrationRequest>>,
    body: Vec<u8>,
    offline: bool,
    delay_ms: u64,
}

impl Default for InMemoryRegistrationGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRegistrationGateway {
    /// A gateway that accepts every registration.
    pub fn new() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            body: br#"{"success":true}"#.to_vec(),
            offline: false,
            delay_ms: 0,
        }
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    pub fn replying(self, response: &RegistrationResponse) -> Self {
        let body = serde_json::to_vec(response).unwrap_or_default();
        self.with_body(body)
    }

    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    pub async fn requests(&self) -> Vec<RegistrationRequest> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl RegistrationGateway for InMemoryRegistrationGateway {
    async fn post_registration(&self, request: &RegistrationRequest) -> Result<Vec<u8>, GatewayError> {
        if self.offline {
            return Err(GatewayError::Unreachable("registration gateway offline".into()));
        }
        self.requests.lock().await.push(request.clone());
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
        Ok(self.body.clone())
    }
}
