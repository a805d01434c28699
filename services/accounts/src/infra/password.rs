use anyhow::{Context, anyhow};
use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString, rand_core::OsRng,
    },
};

use crate::domain::repository::PasswordHasher;
use crate::error::AccountsServiceError;

/// Argon2id with default parameters and a fresh random salt per hash.
/// Both operations run on the blocking pool.
#[derive(Clone, Copy, Default)]
pub struct Argon2PasswordHasher;

fn hash_blocking(password: &str) -> Result<String, AccountsServiceError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow!("hash password: {e}"))?;
    Ok(hash.to_string())
}

fn verify_blocking(password: &str, password_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(password_hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> Result<String, AccountsServiceError> {
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || hash_blocking(&password))
            .await
            .context("join password hashing")?
    }

    async fn verify(
        &self,
        password: &str,
        password_hash: &str,
    ) -> Result<bool, AccountsServiceError> {
        let password = password.to_owned();
        let password_hash = password_hash.to_owned();
        let matched =
            tokio::task::spawn_blocking(move || verify_blocking(&password, &password_hash))
                .await
                .context("join password verification")?;
        Ok(matched)
    }
}
