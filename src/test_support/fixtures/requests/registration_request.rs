// Shared test fixture for RegistrationRequest.
// Only compiled for tests, exposed as `crate::test_support::fixtures`.

use crate::modules::registration::core::request::RegistrationRequest;
use std::fs;

pub struct RegistrationRequestBuilder {
    inner: RegistrationRequest,
}

impl Default for RegistrationRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RegistrationRequestBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/test_support/fixtures/requests/json/registration_request.json")
                .unwrap();
        Self {
            inner: serde_json::from_str(&json_str).unwrap(),
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn password(mut self, v: impl Into<String>) -> Self {
        self.inner.password = v.into();
        self
    }

    pub fn build(self) -> RegistrationRequest {
        self.inner
    }
}

#[cfg(test)]
mod registration_request_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = RegistrationRequestBuilder::default().build();
        assert_eq!(built.name, "Ravi Kumar");
        assert_eq!(built.email, "ravi.kumar@example.com");
        assert_eq!(built.password, "harvest-2024");
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = RegistrationRequestBuilder::new()
            .name("A")
            .email("a@x.com")
            .password("p")
            .build();
        assert_eq!(custom, RegistrationRequest::new("A", "a@x.com", "p"));
    }
}
