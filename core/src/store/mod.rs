// Storage-engine contract for account records
//
// The engine itself (schema, pooling, transactions) lives outside this
// crate; this module pins down the shape it must implement and ships an
// in-memory stand-in for tests and local development.

pub mod memory;

pub use memory::InMemoryAccountStore;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::{Account, UpdateAccountInput};

/// What the external storage engine must provide for account records.
///
/// Identity assignment happens here and nowhere else: `create` takes an
/// unpersisted record and returns it with its permanent unique
/// `account_id`. Engine failures (connectivity, uniqueness, not-found)
/// surface as the engine's own errors and are not translated by the model.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Persist a new record, assigning its permanent unique id.
    async fn create(&self, account: Account) -> Result<Account>;

    /// Fetch a record by id.
    async fn find_by_id(&self, account_id: i64) -> Result<Option<Account>>;

    /// All records owned by a user, in creation order.
    async fn find_by_user(&self, user_id: i64) -> Result<Vec<Account>>;

    /// Patch the non-identity fields of an existing record.
    async fn update(&self, account_id: i64, input: &UpdateAccountInput) -> Result<Account>;

    /// Delete a record. Returns whether anything was removed.
    async fn delete(&self, account_id: i64) -> Result<bool>;
}
