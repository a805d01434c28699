use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use referral_domain::sales_code::SalesCode;
use referral_domain::user::Gender;

/// Registered account.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: String,
    pub verification_code: Option<String>,
    pub phone_verified_at: Option<DateTime<Utc>>,
    pub birthdate: NaiveDate,
    pub gender: Gender,
    pub address: String,
    pub unique_code: String,
    pub sales_code: SalesCode,
    pub device_label: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn is_phone_verified(&self) -> bool {
        self.phone_verified_at.is_some()
    }
}

/// Bearer token handed to a client after register or login.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    /// Expiry as seconds since the UNIX epoch.
    pub expires_at: u64,
}

/// Phone verification code length in characters.
pub const VERIFICATION_CODE_LEN: usize = 6;

/// Prefix of the registration-time unique code (`SL` + unix seconds + suffix).
pub const UNIQUE_CODE_PREFIX: &str = "SL";

/// Random suffix length of the unique code.
pub const UNIQUE_CODE_SUFFIX_LEN: usize = 4;

/// Accepted birthdate format.
pub const BIRTHDATE_FORMAT: &str = "%Y-%m-%d";

/// Argon2id hash of a throwaway password. Login verifies against it when the
/// email is unknown so both failure paths cost one verification.
pub const DUMMY_PASSWORD_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$0l0ijmg9KX9SwUOvpbVvTUwCmWjBCMyVoN8hkgSG1Io";
