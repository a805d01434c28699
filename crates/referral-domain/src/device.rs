//! Device label derived from a `User-Agent` header.

/// Label recorded when the user agent carries no parenthesized section.
pub const UNKNOWN_DEVICE: &str = "Unknown Device";

/// Return the text between the first `(` and the first `)` after it.
///
/// Falls back to [`UNKNOWN_DEVICE`] when the header is absent or has no such
/// pair. An empty pair `()` is a match and yields an empty label.
///
/// ```
/// use referral_domain::device::device_label;
///
/// assert_eq!(
///     device_label(Some("Mozilla/5.0 (Windows NT 10.0; Win64)")),
///     "Windows NT 10.0; Win64"
/// );
/// assert_eq!(device_label(Some("curl/8.5.0")), "Unknown Device");
/// assert_eq!(device_label(None), "Unknown Device");
/// ```
pub fn device_label(user_agent: Option<&str>) -> String {
    user_agent
        .and_then(first_parenthesized)
        .unwrap_or(UNKNOWN_DEVICE)
        .to_owned()
}

fn first_parenthesized(s: &str) -> Option<&str> {
    let open = s.find('(')?;
    let rest = &s[open + 1..];
    let close = rest.find(')')?;
    Some(&rest[..close])
}
