use sea_orm::DatabaseConnection;

use crate::infra::db::{DbSalesCodeAllocator, DbUserRepository};
use crate::infra::password::Argon2PasswordHasher;
use crate::infra::sms::LogCodeSender;
use crate::infra::token::JwtTokenIssuer;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: String,
    pub token_ttl_secs: u64,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn sales_code_allocator(&self) -> DbSalesCodeAllocator {
        DbSalesCodeAllocator {
            db: self.db.clone(),
        }
    }

    pub fn password_hasher(&self) -> Argon2PasswordHasher {
        Argon2PasswordHasher
    }

    pub fn code_sender(&self) -> LogCodeSender {
        LogCodeSender
    }

    pub fn token_issuer(&self) -> JwtTokenIssuer {
        JwtTokenIssuer {
            secret: self.jwt_secret.clone(),
            ttl_secs: self.token_ttl_secs,
        }
    }
}
