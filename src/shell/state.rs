use crate::modules::accounts::adapters::in_memory::in_memory_accounts::InMemoryAccounts;
use crate::modules::accounts::use_cases::register_account::handler::RegisterAccountHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub register_account: Arc<RegisterAccountHandler<InMemoryAccounts>>,
}

impl AppState {
    pub fn new(register_account: RegisterAccountHandler<InMemoryAccounts>) -> Self {
        Self {
            register_account: Arc::new(register_account),
        }
    }

    /// Accounts kept in process memory, hashed with the default Argon2 parameters.
    pub fn in_memory() -> Self {
        Self::new(RegisterAccountHandler::new(Arc::new(InMemoryAccounts::new())))
    }
}
