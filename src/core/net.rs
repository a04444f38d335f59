#[cfg(feature = "test-mode")]
use std::env;

/// Read the response body as text.
/// In `test-mode`, if `EZ_RECORD=1`, the body is saved as a fixture via `core::fixtures`.
pub(crate) async fn get_text(
    resp: reqwest::Response,
    _endpoint: &str,
    _username: &str,
    _ext: &str,
) -> Result<String, reqwest::Error> {
    let text = resp.text().await?;
    tracing::trace!(bytes = text.len(), "read response body");

    #[cfg(feature = "test-mode")]
    {
        if env::var("EZ_RECORD").ok().as_deref() == Some("1")
            && let Err(e) = crate::core::fixtures::record_fixture(_endpoint, _username, _ext, &text)
        {
            tracing::warn!("EZ_RECORD: failed to write fixture for {_username}: {e}");
        }
    }

    Ok(text)
}
