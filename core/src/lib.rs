// Core domain layer for Finora
// Defines the account-link record, its integrity invariants, and the
// contract the storage engine implements for it.

pub mod errors;
pub mod models;
pub mod store;

// Re-export commonly used items
pub use errors::ValidationError;
pub use models::{Account, CreateAccountInput, UpdateAccountInput};
pub use store::{AccountStore, InMemoryAccountStore};
