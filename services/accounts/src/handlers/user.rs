use axum::{Json, extract::State};
use serde::Serialize;

use referral_domain::user::Gender;

use crate::domain::types::User;
use crate::error::AccountsServiceError;
use crate::identity::BearerIdentity;
use crate::state::AppState;
use crate::usecase::user::GetUserUseCase;

/// Public view of a user. Never carries the password hash or the pending
/// verification code.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(serialize_with = "referral_core::serde::to_rfc3339_ms_opt")]
    pub phone_verified_at: Option<chrono::DateTime<chrono::Utc>>,
    pub birthdate: chrono::NaiveDate,
    pub gender: Gender,
    pub address: String,
    pub unique_code: String,
    pub sales_code: String,
    pub device_label: String,
    #[serde(serialize_with = "referral_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "referral_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
            phone: user.phone,
            phone_verified_at: user.phone_verified_at,
            birthdate: user.birthdate,
            gender: user.gender,
            address: user.address,
            unique_code: user.unique_code,
            sales_code: user.sales_code.to_string(),
            device_label: user.device_label,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

// ── GET /user ────────────────────────────────────────────────────────────────

pub async fn get_user(
    identity: BearerIdentity,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, AccountsServiceError> {
    let usecase = GetUserUseCase {
        users: state.user_repo(),
    };
    let user = usecase.execute(identity.user_id).await?;
    Ok(Json(user.into()))
}
