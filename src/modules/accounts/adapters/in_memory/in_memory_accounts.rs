// In memory implementation of the AccountRepository port.
//
// Responsibilities
// - Keep accounts keyed by email and refuse a second account for the same email.

use crate::modules::accounts::core::account::Account;
use crate::modules::accounts::core::ports::{AccountRepository, AccountStoreError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryAccounts {
    inner: RwLock<HashMap<String, Account>>,
    offline: bool,
}

impl InMemoryAccounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    fn ensure_online(&self) -> Result<(), AccountStoreError> {
        if self.offline {
            return Err(AccountStoreError::Backend("Account store offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccounts {
    async fn insert(&self, account: Account) -> Result<(), AccountStoreError> {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;
        match guard.entry(account.email.clone()) {
            Entry::Occupied(_) => Err(AccountStoreError::EmailTaken(account.email)),
            Entry::Vacant(slot) => {
                slot.insert(account);
                Ok(())
            }
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountStoreError> {
        self.ensure_online()?;
        Ok(self.inner.read().await.get(email).cloned())
    }
}

#[cfg(test)]
mod in_memory_accounts_tests {
    use super::*;
    use chrono::Utc;
    use rstest::{fixture, rstest};
    use uuid::Uuid;

    #[fixture]
    fn account() -> Account {
        Account {
            id: Uuid::now_v7(),
            name: "Ravi Kumar".into(),
            email: "ravi.kumar@example.com".into(),
            password_hash: "$argon2id$stub".into(),
            created_at: Utc::now(),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_insert_and_find_an_account(account: Account) {
        let store = InMemoryAccounts::new();
        store.insert(account.clone()).await.expect("insert failed");

        let found = store.find_by_email(&account.email).await.expect("find failed");

        assert_eq!(found, Some(account));
        assert_eq!(store.len().await, 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_refuse_a_second_account_with_the_same_email(account: Account) {
        let store = InMemoryAccounts::new();
        store.insert(account.clone()).await.expect("insert failed");

        let second = Account {
            id: Uuid::now_v7(),
            name: "Someone Else".into(),
            ..account.clone()
        };
        let result = store.insert(second).await;

        assert_eq!(result, Err(AccountStoreError::EmailTaken(account.email)));
        assert_eq!(store.len().await, 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_while_offline(account: Account) {
        let mut store = InMemoryAccounts::new();
        store.toggle_offline();

        assert!(matches!(
            store.insert(account.clone()).await,
            Err(AccountStoreError::Backend(_))
        ));
        assert!(matches!(
            store.find_by_email(&account.email).await,
            Err(AccountStoreError::Backend(_))
        ));
    }
}
