use crate::modules::registration::core::form::FieldId;
use crate::modules::registration::core::request::RegistrationRequest;
use crate::modules::registration::use_cases::submit_registration::ports::{FormDataProvider, FormError};
use std::collections::HashMap;

/// Form values held in memory, standing in for the page inputs.
#[derive(Debug, Default, Clone)]
pub struct InMemoryFormFields {
    values: HashMap<FieldId, String>,
}

impl InMemoryFormFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_request(request: &RegistrationRequest) -> Self {
        Self::new()
            .with(FieldId::Name, request.name.clone())
            .with(FieldId::Email, request.email.clone())
            .with(FieldId::Password, request.password.clone())
    }

    pub fn with(mut self, id: FieldId, value: impl Into<String>) -> Self {
        self.values.insert(id, value.into());
        self
    }

    pub fn without(mut self, id: FieldId) -> Self {
        self.values.remove(&id);
        self
    }
}

impl FormDataProvider for InMemoryFormFields {
    fn field(&self, id: FieldId) -> Result<String, FormError> {
        self.values
            .get(&id)
            .cloned()
            .ok_or(FormError::MissingField(id))
    }
}

#[cfg(test)]
mod in_memory_form_fields_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_read_back_the_values_it_was_given() {
        let form = InMemoryFormFields::from_request(&RegistrationRequest::new("A", "a@x.com", "p"));
        assert_eq!(form.field(FieldId::Name), Ok("A".to_string()));
        assert_eq!(form.field(FieldId::Email), Ok("a@x.com".to_string()));
        assert_eq!(form.field(FieldId::Password), Ok("p".to_string()));
    }

    #[rstest]
    fn it_should_keep_empty_values_as_present() {
        let form = InMemoryFormFields::new().with(FieldId::Name, "");
        assert_eq!(form.field(FieldId::Name), Ok(String::new()));
    }

    #[rstest]
    fn it_should_report_a_missing_field() {
        let form = InMemoryFormFields::new().with(FieldId::Name, "A");
        assert_eq!(
            form.field(FieldId::Password),
            Err(FormError::MissingField(FieldId::Password))
        );
    }
}
