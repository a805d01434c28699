pub mod users;

/// PostgreSQL sequence backing sales-code allocation.
pub const SALES_CODE_SEQUENCE: &str = "sales_code_seq";
