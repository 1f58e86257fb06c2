// Ports the submission handler needs from the page and the network.
//
// Purpose
// - Replace global page lookups with injected collaborators so the handler runs in isolation.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits in the adapters layer.

use crate::modules::registration::core::form::FieldId;
use crate::modules::registration::core::request::RegistrationRequest;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("form field `{0}` is missing")]
    MissingField(FieldId),
}

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid registration endpoint {0}")]
    InvalidEndpoint(String),

    #[error("registration endpoint unreachable: {0}")]
    Unreachable(String),

    #[error("failed to read registration response: {0}")]
    Body(String),
}

pub trait FormDataProvider: Send + Sync {
    fn field(&self, id: FieldId) -> Result<String, FormError>;
}

#[async_trait]
pub trait RegistrationGateway: Send + Sync {
    /// Posts the request and returns the raw response body, whatever the status code.
    async fn post_registration(&self, request: &RegistrationRequest) -> Result<Vec<u8>, GatewayError>;
}

pub trait PageEffects: Send + Sync {
    fn alert(&self, notice: &str);
    fn navigate(&self, path: &str);
}
