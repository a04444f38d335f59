//! Serde mapping for the `__NEXT_DATA__` payload and the bio → [`ProfileRecord`] conversion.
//!
//! Only the path `props.pageProps.bio` is required. Every field of the bio itself is
//! optional: absent keys and explicit `null`s both fall back to the record defaults.

use serde::Deserialize;
use serde_json::{Map, Value};

use super::model::{
    CustomLink, Features, Presence, ProfileMedia, ProfileRecord, Social, Song, Theme,
};

/* --------- Minimal serde mapping for the Next.js data blob --------- */

#[derive(Deserialize)]
pub(crate) struct NextData {
    pub(crate) props: Props,
}

#[derive(Deserialize)]
pub(crate) struct Props {
    #[serde(rename = "pageProps")]
    pub(crate) page_props: PageProps,
}

#[derive(Deserialize)]
pub(crate) struct PageProps {
    pub(crate) bio: BioNode,
}

/// The raw bio record as embedded by the site.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BioNode {
    name: Option<String>,
    views: Option<i64>,
    description: Option<String>,
    title: Option<String>,
    ranks: Option<Vec<String>>,

    bio_presence: Option<PresenceNode>,

    pfp: Option<MediaNode>,
    banner: Option<MediaNode>,
    background: Option<MediaNode>,

    socials: Option<Vec<SocialNode>>,
    #[serde(rename = "customLinks")]
    custom_links: Option<Vec<CustomLinkNode>>,
    songs: Option<Vec<SongNode>>,

    primarycolor: Option<String>,
    secondarycolor: Option<String>,
    accentcolor: Option<String>,
    textcolor: Option<String>,
    backgroundcolor: Option<String>,
    iconcolor: Option<String>,
    font: Option<String>,

    #[serde(rename = "animatedTitle")]
    animated_title: Option<bool>,
    presence: Option<bool>,
    #[serde(rename = "showViews")]
    show_views: Option<bool>,
    #[serde(rename = "showBadges")]
    show_badges: Option<bool>,
    typewriter: Option<bool>,
    glow: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct PresenceNode {
    status: Option<String>,
    #[serde(rename = "customStatus")]
    custom_status: Option<String>,
    platform: Option<Map<String, Value>>,
    badges: Option<Vec<Value>>,
    tag: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct MediaNode {
    url: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct SocialNode {
    name: Option<String>,
    url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct CustomLinkNode {
    name: Option<String>,
    url: Option<String>,
    icon: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct SongNode {
    name: Option<String>,
    url: Option<String>,
}

/* --------- bio → ProfileRecord --------- */

impl ProfileRecord {
    /// Maps a raw bio record into the normalized shape.
    ///
    /// Total: never fails, every missing or null field gets its default.
    pub fn from_bio(username: &str, bio: BioNode) -> Self {
        let presence = bio.bio_presence.unwrap_or_default();
        let pfp = bio.pfp.unwrap_or_default();
        let banner = bio.banner.unwrap_or_default();
        let background = bio.background.unwrap_or_default();
        let fallback = Presence::default();

        Self {
            username: username.to_string(),
            name: bio.name.unwrap_or_else(|| username.to_string()),
            views: bio.views.unwrap_or_default(),
            description: bio.description.unwrap_or_default(),
            title: bio.title.unwrap_or_default(),
            ranks: bio.ranks.unwrap_or_default(),
            presence: Presence {
                status: presence.status.unwrap_or(fallback.status),
                custom_status: presence.custom_status,
                platform: presence.platform.unwrap_or_default(),
                discord_badges: presence.badges.unwrap_or_default(),
                discord_tag: presence.tag,
            },
            profile: ProfileMedia {
                pfp_url: pfp.url.unwrap_or_default(),
                banner_url: banner.url.unwrap_or_default(),
                background_url: background.url.unwrap_or_default(),
                background_type: background.kind.unwrap_or_default(),
            },
            socials: bio
                .socials
                .unwrap_or_default()
                .into_iter()
                .map(|s| Social {
                    name: s.name.unwrap_or_default(),
                    url: s.url.unwrap_or_default(),
                })
                .collect(),
            custom_links: bio
                .custom_links
                .unwrap_or_default()
                .into_iter()
                .map(|l| CustomLink {
                    name: l.name.unwrap_or_default(),
                    url: l.url.unwrap_or_default(),
                    icon: l.icon.unwrap_or_default(),
                })
                .collect(),
            songs: bio
                .songs
                .unwrap_or_default()
                .into_iter()
                .map(|s| Song {
                    name: s.name.unwrap_or_default(),
                    url: s.url.unwrap_or_default(),
                })
                .collect(),
            theme: Theme {
                primary_color: bio.primarycolor.unwrap_or_default(),
                secondary_color: bio.secondarycolor.unwrap_or_default(),
                accent_color: bio.accentcolor.unwrap_or_default(),
                text_color: bio.textcolor.unwrap_or_default(),
                background_color: bio.backgroundcolor.unwrap_or_default(),
                icon_color: bio.iconcolor.unwrap_or_default(),
                font: bio.font.unwrap_or_default(),
            },
            features: Features {
                animated_title: bio.animated_title.unwrap_or_default(),
                presence_enabled: bio.presence.unwrap_or_default(),
                show_views: bio.show_views.unwrap_or_default(),
                show_badges: bio.show_badges.unwrap_or_default(),
                typewriter: bio.typewriter.unwrap_or_default(),
                glow: bio.glow.unwrap_or_default(),
            },
        }
    }
}
