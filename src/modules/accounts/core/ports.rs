// Ports the account use cases need from storage.
//
// Boundaries
// - No concrete storage here. Adapters implement these traits in the adapters layer.

use crate::modules::accounts::core::account::Account;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountStoreError {
    #[error("email already registered: {0}")]
    EmailTaken(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Stores a new account. Emails are unique.
    async fn insert(&self, account: Account) -> Result<(), AccountStoreError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountStoreError>;
}
