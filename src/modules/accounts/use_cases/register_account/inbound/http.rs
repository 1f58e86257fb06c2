use axum::{
    Form, Json,
    extract::{FromRequest, Request, State},
    http::{StatusCode, header::CONTENT_TYPE},
    response::IntoResponse,
};

use crate::modules::accounts::core::ports::AccountStoreError;
use crate::modules::accounts::use_cases::register_account::handler::ApplicationError;
use crate::modules::registration::core::request::RegistrationRequest;
use crate::modules::registration::core::response::RegistrationResponse;
use crate::shell::state::AppState;

pub const REGISTERED_MESSAGE: &str = "Registration successful.";
pub const EMAIL_TAKEN_MESSAGE: &str = "Email already registered";
pub const INVALID_PAYLOAD_MESSAGE: &str = "Invalid registration payload";
pub const FAILED_MESSAGE: &str = "Registration failed. Please try again.";

pub async fn handle(State(state): State<AppState>, request: Request) -> impl IntoResponse {
    let body = match read_body(request).await {
        Ok(b) => b,
        Err(rejection) => {
            tracing::warn!(%rejection, "registration payload rejected");
            return reply(
                StatusCode::UNPROCESSABLE_ENTITY,
                RegistrationResponse::rejected(INVALID_PAYLOAD_MESSAGE),
            );
        }
    };

    match state.register_account.handle(body.into()).await {
        Ok(_) => reply(
            StatusCode::CREATED,
            RegistrationResponse::Accepted {
                message: Some(REGISTERED_MESSAGE.into()),
            },
        ),
        Err(ApplicationError::Store(AccountStoreError::EmailTaken(_))) => reply(
            StatusCode::CONFLICT,
            RegistrationResponse::rejected(EMAIL_TAKEN_MESSAGE),
        ),
        Err(error) => {
            tracing::error!(%error, "account registration failed");
            reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                RegistrationResponse::rejected(FAILED_MESSAGE),
            )
        }
    }
}

/// Reads a JSON body, or a urlencoded one when the page posts the form itself.
async fn read_body(request: Request) -> Result<RegistrationRequest, String> {
    let form_encoded = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/x-www-form-urlencoded"));

    if form_encoded {
        let Form(body) = Form::<RegistrationRequest>::from_request(request, &())
            .await
            .map_err(|r| r.body_text())?;
        Ok(body)
    } else {
        let Json(body) = Json::<RegistrationRequest>::from_request(request, &())
            .await
            .map_err(|r| r.body_text())?;
        Ok(body)
    }
}

fn reply(status: StatusCode, response: RegistrationResponse) -> axum::response::Response {
    (status, Json(response)).into_response()
}
