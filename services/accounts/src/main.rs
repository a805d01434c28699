use sea_orm::Database;
use tracing::info;

use referral_accounts::config::AccountsConfig;
use referral_accounts::router::build_router;
use referral_accounts::state::AppState;
use referral_core::config::Config;
use referral_core::tracing::init_tracing;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = AccountsConfig::from_env().expect("invalid accounts configuration");

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        jwt_secret: config.jwt_secret,
        token_ttl_secs: config.token_ttl_secs,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.accounts_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("accounts service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
