use thiserror::Error;

/// The only failure the model itself can produce.
///
/// Errors raised by the external storage engine (uniqueness violations,
/// connectivity, not-found) surface through that engine's own error type
/// and are never translated into this one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("user_id is required")]
    MissingUserId,
    #[error("user_id must be a positive identifier, got {0}")]
    InvalidUserId(i64),
}
