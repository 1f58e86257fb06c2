pub const REGISTERED_NOTICE: &str = "Registration successful. Please login.";
pub const SERVER_ERROR_NOTICE: &str = "Server error. Please try again.";
pub const REJECTED_FALLBACK_NOTICE: &str = "Registration failed. Please try again.";

/// Where the page goes after a successful registration.
pub const LOGIN_PATH: &str = "/";

/// Text shown for a rejection. An absent and an empty message read the same to the user.
pub fn rejection_notice(message: Option<&str>) -> &str {
    match message {
        Some(m) if !m.is_empty() => m,
        _ => REJECTED_FALLBACK_NOTICE,
    }
}
