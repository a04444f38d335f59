//! Debug dump helpers for development / troubleshooting.
//! Enabled with the `debug-dumps` feature and `EZ_DEBUG=1`.

use serde_json::Value;
use std::io::Write;
use std::path::PathBuf;

fn dump_path(username: &str, suffix: &str) -> PathBuf {
    let safe: String = username
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    std::env::temp_dir().join(format!("ezbio_rs-profile-{safe}-{suffix}"))
}

pub fn debug_dump_extracted_json(username: &str, json: &str) -> std::io::Result<()> {
    let path = dump_path(username, "next-data.json");
    let mut f = std::fs::File::create(&path)?;

    if let Ok(val) = serde_json::from_str::<Value>(json)
        && let Ok(pretty) = serde_json::to_string_pretty(&val)
    {
        f.write_all(pretty.as_bytes())?;
        tracing::debug!("wrote pretty-printed __NEXT_DATA__ to {}", path.display());
        return Ok(());
    }

    f.write_all(json.as_bytes())?;
    tracing::debug!("wrote raw __NEXT_DATA__ to {}", path.display());
    Ok(())
}

pub fn debug_dump_html(username: &str, html: &str) -> std::io::Result<()> {
    let path = dump_path(username, "page.html");
    std::fs::write(&path, html)?;
    tracing::debug!(bytes = html.len(), "wrote profile HTML to {}", path.display());
    Ok(())
}
