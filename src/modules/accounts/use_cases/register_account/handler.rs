use crate::modules::accounts::core::account::Account;
use crate::modules::accounts::core::ports::{AccountRepository, AccountStoreError};
use crate::modules::accounts::use_cases::register_account::command::RegisterAccount;
use argon2::password_hash::SaltString;
use argon2::password_hash::rand_core::OsRng;
use argon2::{Argon2, PasswordHasher};
use chrono::Utc;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] AccountStoreError),

    #[error("password hashing failed: {0}")]
    Hashing(String),
}

pub struct RegisterAccountHandler<TAccounts>
where
    TAccounts: AccountRepository + 'static,
{
    accounts: Arc<TAccounts>,
    hasher: Argon2<'static>,
}

impl<TAccounts> RegisterAccountHandler<TAccounts>
where
    TAccounts: AccountRepository + 'static,
{
    pub fn new(accounts: Arc<TAccounts>) -> Self {
        Self::with_hasher(accounts, Argon2::default())
    }

    pub fn with_hasher(accounts: Arc<TAccounts>, hasher: Argon2<'static>) -> Self {
        Self { accounts, hasher }
    }

    pub async fn handle(&self, command: RegisterAccount) -> Result<Account, ApplicationError> {
        if self.accounts.find_by_email(&command.email).await?.is_some() {
            return Err(AccountStoreError::EmailTaken(command.email).into());
        }

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = self
            .hasher
            .hash_password(command.password.as_bytes(), &salt)
            .map_err(|e| ApplicationError::Hashing(e.to_string()))?
            .to_string();

        let account = Account {
            id: Uuid::now_v7(),
            name: command.name,
            email: command.email,
            password_hash,
            created_at: Utc::now(),
        };
        self.accounts.insert(account.clone()).await?;

        tracing::info!(account_id = %account.id, email = %account.email, "account registered");
        Ok(account)
    }
}

#[cfg(test)]
mod register_account_handler_tests {
    use super::*;
    use crate::modules::accounts::adapters::in_memory::in_memory_accounts::InMemoryAccounts;
    use crate::test_support::fixtures::requests::registration_request::RegistrationRequestBuilder;
    use crate::test_support::fixtures::hashing::fast_hasher;
    use argon2::{PasswordHash, PasswordVerifier};
    use rstest::{fixture, rstest};

    #[fixture]
    fn command() -> RegisterAccount {
        RegistrationRequestBuilder::new().build().into()
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_store_the_account_with_a_hashed_password(command: RegisterAccount) {
        let accounts = Arc::new(InMemoryAccounts::new());
        let handler = RegisterAccountHandler::with_hasher(accounts.clone(), fast_hasher());

        let account = handler.handle(command.clone()).await.expect("handle failed");

        assert_eq!(account.name, command.name);
        assert_eq!(account.email, command.email);
        assert_ne!(account.password_hash, command.password);
        let parsed = PasswordHash::new(&account.password_hash).unwrap();
        assert!(
            Argon2::default()
                .verify_password(command.password.as_bytes(), &parsed)
                .is_ok()
        );
        let stored = accounts.find_by_email(&command.email).await.unwrap();
        assert_eq!(stored, Some(account));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_refuse_an_email_that_is_already_registered(command: RegisterAccount) {
        let handler =
            RegisterAccountHandler::with_hasher(Arc::new(InMemoryAccounts::new()), fast_hasher());
        handler
            .handle(command.clone())
            .await
            .expect("first handle failed");

        let result = handler.handle(command.clone()).await;

        assert!(matches!(
            result,
            Err(ApplicationError::Store(AccountStoreError::EmailTaken(email))) if email == command.email
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_account_store_is_offline(command: RegisterAccount) {
        let mut accounts = InMemoryAccounts::new();
        accounts.toggle_offline();
        let handler = RegisterAccountHandler::with_hasher(Arc::new(accounts), fast_hasher());

        let result = handler.handle(command).await;

        assert_eq!(
            result.unwrap_err().to_string(),
            ApplicationError::Store(AccountStoreError::Backend("Account store offline".into()))
                .to_string()
        );
    }
}
