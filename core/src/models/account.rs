use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::ValidationError;

/// One user's link to an external financial account.
///
/// `account_id` stays `None` until the storage engine durably creates the
/// record and assigns its identity; from then on the id never changes.
/// Fields are private so nothing outside the constructors and
/// [`Account::assign_id`] can touch `account_id` or `user_id`.
///
/// The record never holds a raw account number. The only account-number
/// material it can carry is `account_no_hash`, a one-way hash produced
/// upstream, so anything handed an `Account` cannot recover the number.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawAccount")]
pub struct Account {
    account_id: Option<i64>,
    user_id: i64,
    institution: Option<String>,
    account_no_hash: Option<String>,
    currency: Option<String>,
    nickname: Option<String>,
}

/// Input for linking a new account.
///
/// `user_id` is `Option` so an absent field survives deserialization and is
/// rejected by [`Account::create`] instead of failing at parse time. The
/// `validator` attributes express the same invariant for callers that
/// validate request bodies before touching the model.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAccountInput {
    #[validate(required, range(min = 1, message = "user_id must be positive"))]
    pub user_id: Option<i64>,
    pub institution: Option<String>,
    pub account_no_hash: Option<String>,
    pub currency: Option<String>,
    pub nickname: Option<String>,
}

/// Partial update for the non-identity fields. `Some` replaces the field,
/// `None` leaves it unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAccountInput {
    pub institution: Option<String>,
    pub account_no_hash: Option<String>,
    pub currency: Option<String>,
    pub nickname: Option<String>,
}

impl Account {
    /// Build a new, not-yet-persisted record.
    ///
    /// The only invariant checked at the model level is ownership:
    /// `user_id` must be present and positive. The textual fields accept
    /// arbitrary strings; format and length rules belong to the service
    /// layer.
    pub fn create(input: CreateAccountInput) -> Result<Self, ValidationError> {
        let user_id = check_user_id(input.user_id)?;
        Ok(Self {
            account_id: None,
            user_id,
            institution: input.institution,
            account_no_hash: input.account_no_hash,
            currency: input.currency,
            nickname: input.nickname,
        })
    }

    /// Rebuild a record the storage engine already persisted, e.g. from a
    /// fetched row. The ownership invariant is re-checked so a corrupt row
    /// cannot re-enter the domain.
    pub fn persisted(
        account_id: i64,
        user_id: i64,
        institution: Option<String>,
        account_no_hash: Option<String>,
        currency: Option<String>,
        nickname: Option<String>,
    ) -> Result<Self, ValidationError> {
        let user_id = check_user_id(Some(user_id))?;
        Ok(Self {
            account_id: Some(account_id),
            user_id,
            institution,
            account_no_hash,
            currency,
            nickname,
        })
    }

    pub fn account_id(&self) -> Option<i64> {
        self.account_id
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn institution(&self) -> Option<&str> {
        self.institution.as_deref()
    }

    pub fn account_no_hash(&self) -> Option<&str> {
        self.account_no_hash.as_deref()
    }

    pub fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    pub fn nickname(&self) -> Option<&str> {
        self.nickname.as_deref()
    }

    pub fn is_persisted(&self) -> bool {
        self.account_id.is_some()
    }

    pub fn set_institution(&mut self, institution: Option<String>) {
        self.institution = institution;
    }

    /// Replace the stored hash, e.g. when the owner re-links the account.
    pub fn set_account_no_hash(&mut self, account_no_hash: Option<String>) {
        self.account_no_hash = account_no_hash;
    }

    pub fn set_currency(&mut self, currency: Option<String>) {
        self.currency = currency;
    }

    pub fn set_nickname(&mut self, nickname: Option<String>) {
        self.nickname = nickname;
    }

    /// One-way identity assignment, reserved for the storage engine.
    ///
    /// Returns `true` when the id was taken, `false` when the record
    /// already carries one; the existing id is kept in that case. No other
    /// field is touched either way.
    pub fn assign_id(&mut self, account_id: i64) -> bool {
        if self.account_id.is_some() {
            return false;
        }
        self.account_id = Some(account_id);
        true
    }

    /// Apply a partial update: `Some` replaces, `None` preserves. Identity
    /// fields are not part of the input and cannot change here.
    pub fn apply_update(&mut self, input: &UpdateAccountInput) {
        if let Some(institution) = &input.institution {
            self.institution = Some(institution.clone());
        }
        if let Some(account_no_hash) = &input.account_no_hash {
            self.account_no_hash = Some(account_no_hash.clone());
        }
        if let Some(currency) = &input.currency {
            self.currency = Some(currency.clone());
        }
        if let Some(nickname) = &input.nickname {
            self.nickname = Some(nickname.clone());
        }
    }
}

/// Identity equality: two records are the same account only when both carry
/// an engine-assigned id and the ids match. Records without an id have no
/// identity yet and compare unequal to everything, themselves included,
/// which is why `Eq` is not implemented.
impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        match (self.account_id, other.account_id) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

fn check_user_id(user_id: Option<i64>) -> Result<i64, ValidationError> {
    match user_id {
        None => Err(ValidationError::MissingUserId),
        Some(id) if id <= 0 => Err(ValidationError::InvalidUserId(id)),
        Some(id) => Ok(id),
    }
}

/// Wire shape for deserializing an `Account`. Routing serde through
/// `TryFrom` keeps the ownership invariant intact for records rehydrated
/// from caches or queues, not just ones built via the constructors.
#[derive(Deserialize)]
struct RawAccount {
    account_id: Option<i64>,
    user_id: Option<i64>,
    institution: Option<String>,
    account_no_hash: Option<String>,
    currency: Option<String>,
    nickname: Option<String>,
}

impl TryFrom<RawAccount> for Account {
    type Error = ValidationError;

    fn try_from(raw: RawAccount) -> Result<Self, Self::Error> {
        let user_id = check_user_id(raw.user_id)?;
        Ok(Self {
            account_id: raw.account_id,
            user_id,
            institution: raw.institution,
            account_no_hash: raw.account_no_hash,
            currency: raw.currency,
            nickname: raw.nickname,
        })
    }
}
