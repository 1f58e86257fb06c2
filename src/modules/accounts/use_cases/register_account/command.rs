use crate::modules::registration::core::request::RegistrationRequest;

/// Command to open a new account. The password is plaintext until the handler hashes it.
#[derive(Clone, PartialEq, Eq)]
pub struct RegisterAccount {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl From<RegistrationRequest> for RegisterAccount {
    fn from(request: RegistrationRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            password: request.password,
        }
    }
}

impl std::fmt::Debug for RegisterAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterAccount")
            .field("name", &self.name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}
