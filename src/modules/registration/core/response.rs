use serde::{Deserialize, Serialize};
use serde_json::error::Category;
use thiserror::Error;

/// Outcome the server reports for a registration attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RegistrationResponseBody", into = "RegistrationResponseBody")]
pub enum RegistrationResponse {
    Accepted { message: Option<String> },
    Rejected { message: Option<String> },
}

/// Wire shape: `{"success": bool, "message": string?}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationResponseBody {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResponseError {
    #[error("response body is not json: {0}")]
    NotJson(String),

    #[error("response body does not match the registration schema: {0}")]
    Schema(String),
}

impl RegistrationResponse {
    pub fn accepted() -> Self {
        Self::Accepted { message: None }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: Some(message.into()),
        }
    }

    pub fn from_slice(body: &[u8]) -> Result<Self, ResponseError> {
        serde_json::from_slice(body).map_err(|e| match e.classify() {
            Category::Data => ResponseError::Schema(e.to_string()),
            Category::Io | Category::Syntax | Category::Eof => ResponseError::NotJson(e.to_string()),
        })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Accepted { message } | Self::Rejected { message } => message.as_deref(),
        }
    }
}

impl From<RegistrationResponseBody> for RegistrationResponse {
    fn from(body: RegistrationResponseBody) -> Self {
        if body.success {
            Self::Accepted {
                message: body.message,
            }
        } else {
            Self::Rejected {
                message: body.message,
            }
        }
    }
}

impl From<RegistrationResponse> for RegistrationResponseBody {
    fn from(response: RegistrationResponse) -> Self {
        match response {
            RegistrationResponse::Accepted { message } => Self {
                success: true,
                message,
            },
            RegistrationResponse::Rejected { message } => Self {
                success: false,
                message,
            },
        }
    }
}

#[cfg(test)]
mod registration_response_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(r#"{"success":true}"#, RegistrationResponse::accepted())]
    #[case(
        r#"{"success":true,"message":"welcome"}"#,
        RegistrationResponse::Accepted { message: Some("welcome".into()) }
    )]
    #[case(r#"{"success":false,"message":"Email taken"}"#, RegistrationResponse::rejected("Email taken"))]
    #[case(r#"{"success":false}"#, RegistrationResponse::Rejected { message: None })]
    #[case(r#"{"success":false,"message":null}"#, RegistrationResponse::Rejected { message: None })]
    #[case(r#"{"success":false,"message":""}"#, RegistrationResponse::rejected(""))]
    #[case(r#"{"success":true,"extra":1}"#, RegistrationResponse::accepted())]
    fn it_should_decode_well_formed_bodies(#[case] body: &str, #[case] expected: RegistrationResponse) {
        assert_eq!(RegistrationResponse::from_slice(body.as_bytes()), Ok(expected));
    }

    #[rstest]
    #[case("<html>Internal Server Error</html>")]
    #[case("")]
    #[case(r#"{"success":tr"#)]
    fn it_should_reject_bodies_that_are_not_json(#[case] body: &str) {
        let result = RegistrationResponse::from_slice(body.as_bytes());
        assert!(matches!(result, Err(ResponseError::NotJson(_))));
    }

    #[rstest]
    #[case(r#"{"message":"no flag"}"#)]
    #[case(r#"{"success":"yes"}"#)]
    #[case(r#"{"success":1}"#)]
    #[case(r#"{"success":false,"message":42}"#)]
    #[case(r#""just text""#)]
    #[case(r#"null"#)]
    fn it_should_reject_bodies_that_do_not_match_the_schema(#[case] body: &str) {
        let result = RegistrationResponse::from_slice(body.as_bytes());
        assert!(matches!(result, Err(ResponseError::Schema(_))));
    }

    #[rstest]
    fn it_should_encode_to_the_wire_shape() {
        let accepted = serde_json::to_string(&RegistrationResponse::accepted()).unwrap();
        assert_eq!(accepted, r#"{"success":true}"#);
        let rejected = serde_json::to_string(&RegistrationResponse::rejected("Email taken")).unwrap();
        assert_eq!(rejected, r#"{"success":false,"message":"Email taken"}"#);
    }

    #[rstest]
    fn it_should_expose_the_flag_and_message() {
        let rejected = RegistrationResponse::rejected("Email taken");
        assert!(!rejected.is_success());
        assert_eq!(rejected.message(), Some("Email taken"));
        assert!(RegistrationResponse::accepted().is_success());
        assert_eq!(RegistrationResponse::accepted().message(), None);
    }
}
