#![allow(async_fn_in_trait)]

use chrono::{DateTime, Utc};
use uuid::Uuid;

use referral_domain::sales_code::SalesCode;

use crate::domain::types::{IssuedToken, User};
use crate::error::AccountsServiceError;

/// Repository for user accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AccountsServiceError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AccountsServiceError>;

    async fn email_exists(&self, email: &str) -> Result<bool, AccountsServiceError>;

    async fn phone_exists(&self, phone: &str) -> Result<bool, AccountsServiceError>;

    /// Insert a new user. A unique-key clash on email or phone is reported as
    /// a validation error on that field.
    async fn create(&self, user: &User) -> Result<(), AccountsServiceError>;

    /// Mark the phone verified if `phone` + `code` match an unverified user.
    /// Clears the code in the same write. Returns `false` when nothing matched.
    async fn verify_phone(
        &self,
        phone: &str,
        code: &str,
        verified_at: DateTime<Utc>,
    ) -> Result<bool, AccountsServiceError>;
}

/// Source of sales codes. Every call returns a code strictly greater than any
/// previously returned one; values are never handed out twice.
pub trait SalesCodeAllocator: Send + Sync {
    async fn next(&self) -> Result<SalesCode, AccountsServiceError>;
}

/// One-way password hashing.
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> Result<String, AccountsServiceError>;

    /// `false` on mismatch or on an unparseable stored hash.
    async fn verify(
        &self,
        password: &str,
        password_hash: &str,
    ) -> Result<bool, AccountsServiceError>;
}

/// Out-of-band delivery of a phone verification code.
pub trait VerificationCodeSender: Send + Sync {
    async fn send(&self, phone: &str, code: &str) -> Result<(), AccountsServiceError>;
}

/// Bearer token minting and validation.
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, user_id: Uuid) -> Result<IssuedToken, AccountsServiceError>;

    /// Returns the user id the token was issued for.
    fn validate(&self, token: &str) -> Result<Uuid, AccountsServiceError>;
}
