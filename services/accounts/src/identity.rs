//! Bearer-token identity extractor.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use uuid::Uuid;

use crate::domain::repository::TokenIssuer;
use crate::error::AccountsServiceError;
use crate::state::AppState;

/// Caller identity taken from `Authorization: Bearer <token>`.
///
/// Rejects with 401 `INVALID_TOKEN` when the header is absent, is not a
/// bearer credential, or carries a token that fails validation.
#[derive(Debug, Clone)]
pub struct BearerIdentity {
    pub user_id: Uuid,
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    let value = parts.headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

impl FromRequestParts<AppState> for BearerIdentity {
    type Rejection = AccountsServiceError;

    // Validate synchronously so the returned future borrows nothing from `parts`.
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let result = bearer_token(parts)
            .ok_or(AccountsServiceError::InvalidToken)
            .and_then(|token| state.token_issuer().validate(token))
            .map(|user_id| Self { user_id });

        async move { result }
    }
}
