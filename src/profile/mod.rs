//! Profile extraction: fetch an e-z.bio page and normalize its bio record.
//!
//! Internals are split into:
//! - `scrape`:  HTML fetch + `__NEXT_DATA__` lookup + JSON parse
//! - `wire`:    serde mapping of the embedded payload and the bio → record conversion
//! - `outcome`: the two-kind error and the serialized result
//! - `input`:   username normalization / validation helpers
//! - `debug`:   optional debug dump helpers (only with the `debug-dumps` feature)

mod input;
mod model;
mod outcome;
mod scrape;
mod wire;

#[cfg(feature = "debug-dumps")]
pub(crate) mod debug;

use crate::{EzClient, EzError};

pub use input::{is_valid_username, normalize_input};
pub use model::{
    CustomLink, Features, Presence, ProfileMedia, ProfileRecord, Social, Song, Theme,
};
pub use outcome::{ExtractError, Extraction};
pub use scrape::{extract_next_data, parse_profile};
pub use wire::BioNode;

/// Loads the profile for a given username.
///
/// # Errors
///
/// Returns `EzError::NotFound` if the page has no `__NEXT_DATA__` element, and any
/// other `EzError` if the request fails, the status is not 2xx, or the payload
/// does not contain a well-typed `props.pageProps.bio` record.
pub async fn load_profile(client: &EzClient, username: &str) -> Result<ProfileRecord, EzError> {
    scrape::load_from_scrape(client, username).await
}

/// Extracts the profile for `username`, folding every failure into the result.
///
/// Yields the record, `{"error": "User not found"}`, or `{"error": <message>}`.
pub async fn extract(client: &EzClient, username: &str) -> Extraction {
    let res = load_profile(client, username)
        .await
        .map_err(ExtractError::from);
    if let Err(e) = &res {
        tracing::debug!(username, error = %e, "profile extraction failed");
    }
    Extraction::from(res)
}
