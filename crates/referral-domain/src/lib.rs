//! Domain types shared by referral services.
//!
//! Pure types only, no framework dependencies. Import in `usecase/` and
//! `domain/` layers.

pub mod device;
pub mod sales_code;
pub mod user;
