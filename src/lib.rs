//! ezbio-rs: fetch an e-z.bio profile and normalize it into a stable record.
//!
//! The page is fetched with a browser-like client, the Next.js `__NEXT_DATA__`
//! payload is pulled out of the HTML, and `props.pageProps.bio` is mapped into a
//! [`ProfileRecord`] whose every field has a documented default.
//!
//! ```no_run
//! # async fn run() {
//! let client = ezbio_rs::EzClient::default();
//! let out = ezbio_rs::profile::extract(&client, "alice").await;
//! println!("{}", out.to_json());
//! # }
//! ```

pub mod core;
pub mod profile;

pub use crate::core::{EzClient, EzClientBuilder, EzError};
pub use profile::{ExtractError, Extraction, ProfileRecord};
