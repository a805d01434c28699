//! Ambient building blocks shared by referral services.
//!
//! Configuration loading, tracing setup, health handlers, request-id
//! middleware and serde helpers. Nothing in here knows about accounts.

pub mod config;
pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
