use serde::Deserialize;

use referral_core::config::Config;

/// Accounts service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct AccountsConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// HMAC secret for signing bearer tokens. Env var: `JWT_SECRET`.
    pub jwt_secret: String,
    /// TCP port to listen on (default 3114). Env var: `ACCOUNTS_PORT`.
    #[serde(default = "default_accounts_port")]
    pub accounts_port: u16,
    /// Bearer token lifetime in seconds (default 4 hours). Env var: `TOKEN_TTL_SECS`.
    #[serde(default = "default_token_ttl_secs")]
    pub token_ttl_secs: u64,
}

impl Config for AccountsConfig {}

fn default_accounts_port() -> u16 {
    3114
}

fn default_token_ttl_secs() -> u64 {
    14400
}
