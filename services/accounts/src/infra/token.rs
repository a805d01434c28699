use anyhow::Context as _;
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::repository::TokenIssuer;
use crate::domain::types::IssuedToken;
use crate::error::AccountsServiceError;

/// JWT claims of a session token.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    /// User ID (UUID string).
    pub sub: String,
    /// Expiration timestamp (seconds since UNIX epoch).
    pub exp: u64,
}

/// HS256 session tokens signed with the service secret.
#[derive(Clone)]
pub struct JwtTokenIssuer {
    pub secret: String,
    pub ttl_secs: u64,
}

fn now_secs() -> u64 {
    u64::try_from(Utc::now().timestamp()).unwrap_or_default()
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, user_id: Uuid) -> Result<IssuedToken, AccountsServiceError> {
        let exp = now_secs() + self.ttl_secs;
        let claims = TokenClaims {
            sub: user_id.to_string(),
            exp,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .context("encode session token")?;
        Ok(IssuedToken {
            token,
            expires_at: exp,
        })
    }

    fn validate(&self, token: &str) -> Result<Uuid, AccountsServiceError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.required_spec_claims.clear();
        validation.set_required_spec_claims(&["exp", "sub"]);

        let data = decode::<TokenClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map_err(|_| AccountsServiceError::InvalidToken)?;

        data.claims
            .sub
            .parse::<Uuid>()
            .map_err(|_| AccountsServiceError::InvalidToken)
    }
}
