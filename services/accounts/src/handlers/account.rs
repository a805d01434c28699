use axum::{
    Json,
    extract::State,
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode, header::USER_AGENT},
    response::IntoResponse,
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AccountsServiceError, FieldErrors};
use crate::handlers::user::UserResponse;
use crate::state::AppState;
use crate::usecase::login::{LoginInput, LoginUseCase};
use crate::usecase::register::{RegisterInput, RegisterUseCase};
use crate::usecase::verify_phone::{VerifyPhoneInput, VerifyPhoneUseCase};

pub const X_ACCESS_TOKEN_EXPIRES: &str = "x-access-token-expires";

fn token_expires_header(exp: u64) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static(X_ACCESS_TOKEN_EXPIRES),
        HeaderValue::from(exp),
    )
}

/// A JSON string passes through; `null` counts as absent; any other value is
/// recorded against `field`.
fn string_field(errors: &mut FieldErrors, field: &str, value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s),
        None | Some(Value::Null) => None,
        Some(_) => {
            errors.add(field, format!("The {field} must be a string."));
            None
        }
    }
}

// ── POST /register ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: Option<Value>,
    pub email: Option<Value>,
    pub password: Option<Value>,
    pub phone: Option<Value>,
    pub birthdate: Option<Value>,
    pub gender: Option<Value>,
    pub address: Option<Value>,
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub user: UserResponse,
    pub token: String,
    pub kode_unik: String,
    pub kode_sales: String,
}

pub async fn register(
    State(state): State<AppState>,
    headers: HeaderMap,
    WithRejection(Json(body), _): WithRejection<Json<RegisterRequest>, AccountsServiceError>,
) -> Result<impl IntoResponse, AccountsServiceError> {
    let user_agent = headers
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    let usecase = RegisterUseCase {
        users: state.user_repo(),
        sales_codes: state.sales_code_allocator(),
        hasher: state.password_hasher(),
        tokens: state.token_issuer(),
        codes: state.code_sender(),
    };
    let mut type_errors = FieldErrors::default();
    let input = RegisterInput {
        name: string_field(&mut type_errors, "name", body.name),
        email: string_field(&mut type_errors, "email", body.email),
        password: string_field(&mut type_errors, "password", body.password),
        phone: string_field(&mut type_errors, "phone", body.phone),
        birthdate: string_field(&mut type_errors, "birthdate", body.birthdate),
        gender: string_field(&mut type_errors, "gender", body.gender),
        address: string_field(&mut type_errors, "address", body.address),
        user_agent,
        type_errors,
    };
    let out = usecase.execute(input).await?;

    let body = RegisterResponse {
        kode_unik: out.user.unique_code.clone(),
        kode_sales: out.user.sales_code.to_string(),
        user: out.user.into(),
        token: out.token.token,
    };

    let mut headers = HeaderMap::new();
    let (name, value) = token_expires_header(out.token.expires_at);
    headers.insert(name, value);

    Ok((StatusCode::OK, headers, Json(body)))
}

// ── POST /login ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: Option<Value>,
    pub password: Option<Value>,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub user: UserResponse,
    pub token: String,
}

pub async fn login(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<LoginRequest>, AccountsServiceError>,
) -> Result<impl IntoResponse, AccountsServiceError> {
    let usecase = LoginUseCase {
        users: state.user_repo(),
        hasher: state.password_hasher(),
        tokens: state.token_issuer(),
    };
    let mut type_errors = FieldErrors::default();
    let input = LoginInput {
        email: string_field(&mut type_errors, "email", body.email),
        password: string_field(&mut type_errors, "password", body.password),
        type_errors,
    };
    let out = usecase.execute(input).await?;

    let mut headers = HeaderMap::new();
    let (name, value) = token_expires_header(out.token.expires_at);
    headers.insert(name, value);

    let body = LoginResponse {
        user: out.user.into(),
        token: out.token.token,
    };
    Ok((StatusCode::OK, headers, Json(body)))
}

// ── POST /verify-phone ────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct VerifyPhoneRequest {
    pub phone: Option<Value>,
    pub verification_code: Option<Value>,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

pub async fn verify_phone(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<VerifyPhoneRequest>, AccountsServiceError>,
) -> Result<Json<MessageResponse>, AccountsServiceError> {
    let usecase = VerifyPhoneUseCase {
        users: state.user_repo(),
    };
    let mut type_errors = FieldErrors::default();
    let input = VerifyPhoneInput {
        phone: string_field(&mut type_errors, "phone", body.phone),
        verification_code: string_field(
            &mut type_errors,
            "verification_code",
            body.verification_code,
        ),
        type_errors,
    };
    usecase.execute(input).await?;
    Ok(Json(MessageResponse {
        message: "Phone verified successfully.",
    }))
}
