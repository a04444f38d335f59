use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Normalized profile for one e-z.bio user.
///
/// Every field is always present in the serialized form; values missing upstream
/// carry the defaults documented on each field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    /// Echo of the requested username.
    pub username: String,
    /// Display name. Defaults to `username`.
    pub name: String,
    /// Page view counter. Defaults to 0.
    pub views: i64,
    pub description: String,
    pub title: String,
    pub ranks: Vec<String>,
    pub presence: Presence,
    pub profile: ProfileMedia,
    pub socials: Vec<Social>,
    pub custom_links: Vec<CustomLink>,
    pub songs: Vec<Song>,
    pub theme: Theme,
    pub features: Features,
}

/// Discord presence mirrored on the profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Presence {
    /// Defaults to `"offline"`.
    pub status: String,
    pub custom_status: Option<String>,
    pub platform: Map<String, Value>,
    pub discord_badges: Vec<Value>,
    pub discord_tag: Option<String>,
}

impl Default for Presence {
    fn default() -> Self {
        Self {
            status: "offline".to_string(),
            custom_status: None,
            platform: Map::new(),
            discord_badges: Vec::new(),
            discord_tag: None,
        }
    }
}

/// Media assets: avatar, banner, page background.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileMedia {
    pub pfp_url: String,
    pub banner_url: String,
    pub background_url: String,
    /// e.g. `"image"` or `"video"`, empty when unknown.
    pub background_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Social {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomLink {
    pub name: String,
    pub url: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub name: String,
    pub url: String,
}

/// Page colors and font, passed through as the site stores them (usually hex strings).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    pub text_color: String,
    pub background_color: String,
    pub icon_color: String,
    pub font: String,
}

/// Display toggles. All default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct Features {
    pub animated_title: bool,
    pub presence_enabled: bool,
    pub show_views: bool,
    pub show_badges: bool,
    pub typewriter: bool,
    pub glow: bool,
}
