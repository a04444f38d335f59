//! Centralized constants for default endpoints, UA and timeouts.

use std::time::Duration;

/// Default desktop UA to avoid trivial bot blocking.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// e-z.bio profile base (username is appended as a single path segment).
pub(crate) const DEFAULT_BASE_BIO: &str = "https://e-z.bio/";

/// Overall request timeout applied unless the builder overrides it.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connect timeout applied unless the builder overrides it.
pub(crate) const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
