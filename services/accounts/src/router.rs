use axum::{
    Router,
    routing::{get, post},
};

use referral_core::health::{healthz, readyz};
use referral_core::middleware::{propagate_request_id_layer, request_id_layer, trace_layer};

use crate::handlers::{
    account::{login, register, verify_phone},
    user::get_user,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Accounts
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/verify-phone", post(verify_phone))
        // Session
        .route("/user", get(get_user))
        .with_state(state)
        // Outermost last: the id is set before tracing sees the request.
        .layer(propagate_request_id_layer())
        .layer(trace_layer())
        .layer(request_id_layer())
}
