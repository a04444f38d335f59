//! Username input helpers: accept `@name` and profile URLs, optional strict validation.

use crate::EzError;

const PROFILE_URL_PREFIX: &str = "https://e-z.bio/";

/// Reduces user input to a bare username.
///
/// Accepts `alice`, `@alice`, and `https://e-z.bio/alice[/...]`. Surrounding
/// whitespace is trimmed. A bare username is returned unchanged apart from that.
///
/// # Errors
///
/// Returns `EzError::InvalidInput` for a profile URL without a username segment.
pub fn normalize_input(input: &str) -> Result<String, EzError> {
    let trimmed = input.trim();

    if let Some(rest) = trimmed.strip_prefix(PROFILE_URL_PREFIX) {
        let segment = rest.split(['/', '?', '#']).next().unwrap_or_default();
        if segment.is_empty() {
            return Err(EzError::InvalidInput("Invalid e-z.bio URL".into()));
        }
        return Ok(segment.to_string());
    }

    Ok(trimmed.strip_prefix('@').unwrap_or(trimmed).trim().to_string())
}

/// True when `username` is non-empty and only uses ASCII letters, digits, `_`, `-` or `.`.
pub fn is_valid_username(username: &str) -> bool {
    !username.is_empty()
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}
