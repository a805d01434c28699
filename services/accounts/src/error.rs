use std::collections::BTreeMap;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Field-level validation messages, keyed by request field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Takes every field `other` reports, replacing any messages already held for it.
    pub fn overlay(&mut self, other: FieldErrors) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `Ok(())` when no field failed, otherwise a validation error carrying `self`.
    pub fn into_result(self) -> Result<(), AccountsServiceError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(AccountsServiceError::Validation(self))
        }
    }
}

impl From<validator::ValidationErrors> for FieldErrors {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut out = Self::default();
        for (field, errs) in errors.field_errors() {
            for err in errs {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("The {field} field is invalid."));
                out.add(field.to_string(), message);
            }
        }
        out
    }
}

/// Accounts service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum AccountsServiceError {
    #[error("the given data was invalid")]
    Validation(FieldErrors),
    #[error("malformed request body")]
    MalformedBody,
    #[error("incorrect email or password")]
    InvalidCredentials,
    #[error("phone number not verified")]
    PhoneNotVerified,
    #[error("invalid verification code")]
    InvalidVerificationCode,
    #[error("invalid token")]
    InvalidToken,
    #[error("user not found")]
    UserNotFound,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl AccountsServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION",
            Self::MalformedBody => "MALFORMED_BODY",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::PhoneNotVerified => "PHONE_NOT_VERIFIED",
            Self::InvalidVerificationCode => "INVALID_VERIFICATION_CODE",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::Internal(_) => "INTERNAL",
        }
    }

    /// Single-field validation failure.
    pub fn invalid_field(field: &str, message: &str) -> Self {
        let mut errors = FieldErrors::default();
        errors.add(field, message);
        Self::Validation(errors)
    }
}

impl From<JsonRejection> for AccountsServiceError {
    fn from(_: JsonRejection) -> Self {
        Self::MalformedBody
    }
}

impl IntoResponse for AccountsServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Validation(_) | Self::MalformedBody | Self::InvalidVerificationCode => {
                StatusCode::BAD_REQUEST
            }
            Self::InvalidCredentials | Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::PhoneNotVerified => StatusCode::FORBIDDEN,
            Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // 4xx are expected client outcomes and already visible in the trace layer.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = ?e, kind = "INTERNAL", "internal error");
        }
        // Validation failures answer with the bare `{field: [messages]}` map.
        if let Self::Validation(errors) = self {
            return (status, axum::Json(errors)).into_response();
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
