//! Fetch the profile HTML and extract the `__NEXT_DATA__` bio record.

use scraper::{Html, Selector};

use crate::{EzClient, EzError};

#[cfg(feature = "debug-dumps")]
use crate::profile::debug::{debug_dump_extracted_json, debug_dump_html};

use super::ProfileRecord;
use super::wire::NextData;

/// CSS selector for the Next.js server-state payload.
const NEXT_DATA_SELECTOR: &str = "script#__NEXT_DATA__";

pub(crate) async fn load_from_scrape(
    client: &EzClient,
    username: &str,
) -> Result<ProfileRecord, EzError> {
    let url = client.profile_url(username)?;
    tracing::debug!(%url, "fetching profile page");

    let resp = client.http().get(url.clone()).send().await?;
    let status = resp.status();
    tracing::debug!(status = status.as_u16(), "profile page responded");
    if !status.is_success() {
        return Err(EzError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }
    let body = crate::core::net::get_text(resp, "profile_html", username, "html").await?;

    #[cfg(feature = "debug-dumps")]
    {
        if std::env::var("EZ_DEBUG").ok().as_deref() == Some("1") {
            let _ = debug_dump_html(username, &body);
        }
    }

    let Some(json_str) = extract_next_data(&body) else {
        tracing::debug!(bytes = body.len(), "no __NEXT_DATA__ element in page");
        return Err(EzError::NotFound);
    };

    #[cfg(feature = "debug-dumps")]
    {
        if std::env::var("EZ_DEBUG").ok().as_deref() == Some("1") {
            let _ = debug_dump_extracted_json(username, &json_str);
        }
    }

    parse_profile(username, &json_str)
}

/// Returns the text content of the page's `<script id="__NEXT_DATA__">` element, if any.
///
/// Only the first matching element is considered.
pub fn extract_next_data(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(NEXT_DATA_SELECTOR).ok()?;
    let text: String = document.select(&selector).next()?.text().collect();
    tracing::trace!(bytes = text.len(), "found __NEXT_DATA__ element");
    Some(text)
}

/// Parses a `__NEXT_DATA__` document and maps `props.pageProps.bio` into a [`ProfileRecord`].
///
/// # Errors
///
/// Returns `EzError::Json` if the text is not JSON, the `props.pageProps.bio` path
/// is missing, or a bio field has the wrong type.
pub fn parse_profile(username: &str, next_data: &str) -> Result<ProfileRecord, EzError> {
    let data: NextData = serde_json::from_str(next_data)?;
    Ok(ProfileRecord::from_bio(username, data.props.page_props.bio))
}
