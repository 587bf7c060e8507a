use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use anyhow::{bail, Result};
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::AccountStore;
use crate::models::{Account, UpdateAccountInput};

/// In-memory implementation of [`AccountStore`].
///
/// Stands in for the real engine in tests and local development. Ids come
/// from an atomic sequence so concurrent creates never collide, and the
/// write lock serializes updates to a record, which is the lost-update
/// guarantee the real engine owes the model.
pub struct InMemoryAccountStore {
    accounts: RwLock<HashMap<i64, Account>>,
    next_id: AtomicI64,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryAccountStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn create(&self, mut account: Account) -> Result<Account> {
        if account.is_persisted() {
            warn!(
                account_id = account.account_id(),
                "refusing to create a record that already has an id"
            );
            bail!("account already has an assigned id");
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        account.assign_id(id);

        let mut accounts = self.accounts.write().await;
        accounts.insert(id, account.clone());
        debug!(account_id = id, user_id = account.user_id(), "account created");

        Ok(account)
    }

    async fn find_by_id(&self, account_id: i64) -> Result<Option<Account>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(&account_id).cloned())
    }

    async fn find_by_user(&self, user_id: i64) -> Result<Vec<Account>> {
        let accounts = self.accounts.read().await;
        let mut owned: Vec<Account> = accounts
            .values()
            .filter(|account| account.user_id() == user_id)
            .cloned()
            .collect();
        owned.sort_by_key(|account| account.account_id());
        Ok(owned)
    }

    async fn update(&self, account_id: i64, input: &UpdateAccountInput) -> Result<Account> {
        let mut accounts = self.accounts.write().await;
        let account = match accounts.get_mut(&account_id) {
            Some(account) => account,
            None => bail!("account {} not found", account_id),
        };

        account.apply_update(input);
        debug!(account_id, "account updated");

        Ok(account.clone())
    }

    async fn delete(&self, account_id: i64) -> Result<bool> {
        let mut accounts = self.accounts.write().await;
        let removed = accounts.remove(&account_id).is_some();
        debug!(account_id, removed, "account deleted");
        Ok(removed)
    }
}
