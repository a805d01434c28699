pub mod login;
pub mod register;
pub mod user;
pub mod verify_phone;

/// Trim a text input; blank values count as absent.
fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

/// Passwords are taken verbatim; only the empty string counts as absent.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
