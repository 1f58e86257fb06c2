use crate::modules::registration::core::response::ResponseError;
use crate::modules::registration::use_cases::submit_registration::ports::{FormError, GatewayError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Transport(#[from] GatewayError),

    #[error(transparent)]
    MalformedResponse(#[from] ResponseError),
}

/// What the handler did for one submit event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Registered,
    Rejected { notice: String },
    Failed { notice: String },
}
