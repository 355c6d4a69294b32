//! Organization social links
//!
//! Channels are emitted in the order given. Profile URLs come from the
//! brand's `[social]` table; a channel without one is skipped.

use tracing::debug;

use crate::brand::Brand;
use crate::model::{AccentColor, SocialChannel, SocialDisplay};
use crate::sanitize::{escape_html, sanitize_url};

use super::contact::{link, SEPARATOR};

/// Fixed per-channel presentation
struct ChannelMeta {
    label: &'static str,
    icon: &'static str,
}

fn meta(channel: SocialChannel) -> ChannelMeta {
    match channel {
        SocialChannel::Twitter => ChannelMeta {
            label: "X",
            icon: "\u{1D54F}",
        },
        SocialChannel::Linkedin => ChannelMeta {
            label: "LinkedIn",
            icon: "in",
        },
        SocialChannel::Facebook => ChannelMeta {
            label: "Facebook",
            icon: "f",
        },
        SocialChannel::Instagram => ChannelMeta {
            label: "Instagram",
            icon: "IG",
        },
    }
}

/// Channels paired with their sanitized company profile URL, order kept
fn resolved<'a>(
    channels: &'a [SocialChannel],
    brand: &'a Brand,
) -> impl Iterator<Item = (SocialChannel, String)> + 'a {
    channels.iter().filter_map(move |&channel| {
        let url = brand.profile_url(channel).and_then(sanitize_url);
        if url.is_none() {
            debug!(channel = channel.id(), "no profile configured, skipping");
        }
        url.map(|url| (channel, url))
    })
}

/// Square accent-colored icon links with no separators
pub fn icon_links(channels: &[SocialChannel], accent: &AccentColor, brand: &Brand) -> String {
    resolved(channels, brand)
        .map(|(channel, url)| {
            let meta = meta(channel);
            format!(
                r#"<a href="{}" class="sig-link" title="{}" style="display: inline-block; margin: 0 4px; width: 24px; height: 24px; background: {}; color: {}; text-align: center; line-height: 24px; text-decoration: none; border-radius: 4px; font-size: 12px; font-weight: 600;">{}</a>"#,
                escape_html(&url),
                meta.label,
                accent,
                accent.contrast_text(),
                meta.icon
            )
        })
        .collect()
}

/// Social row for the given channels, or an empty string when none resolve
pub fn generate_social_links(
    channels: &[SocialChannel],
    display: SocialDisplay,
    accent: &AccentColor,
    brand: &Brand,
) -> String {
    let links = match display {
        SocialDisplay::Text => resolved(channels, brand)
            .map(|(channel, url)| link(&url, meta(channel).label, accent))
            .collect::<Vec<_>>()
            .join(SEPARATOR),
        SocialDisplay::Icon => icon_links(channels, accent, brand),
    };
    if links.is_empty() {
        return String::new();
    }
    format!(
        r#"<div class="sig-social" style="margin-top: 8px; font-size: 12px;">
                {links}
            </div>"#
    )
}

/// Same as [`generate_social_links`] for untyped ids; unknown ids are ignored
pub fn social_links_from_ids<S: AsRef<str>>(
    ids: &[S],
    display: SocialDisplay,
    accent: &AccentColor,
    brand: &Brand,
) -> String {
    let channels = SocialChannel::parse_ids(ids);
    generate_social_links(&channels, display, accent, brand)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_links_keep_caller_order() {
        let html = generate_social_links(
            &[SocialChannel::Instagram, SocialChannel::Twitter],
            SocialDisplay::Text,
            &AccentColor::default(),
            &Brand::default(),
        );
        let instagram = html.find("https://www.instagram.com/zoho/").unwrap();
        let twitter = html.find("https://x.com/Zoho").unwrap();
        assert!(instagram < twitter);
        assert!(html.contains(">Instagram</a>"));
        assert_eq!(html.matches("sig-separator").count(), 1);
    }

    #[test]
    fn test_icon_links_use_contrast_text() {
        let yellow = AccentColor::parse("#F9B21D").unwrap();
        let html = generate_social_links(
            &[SocialChannel::Linkedin],
            SocialDisplay::Icon,
            &yellow,
            &Brand::default(),
        );
        assert!(html.contains("background: #F9B21D; color: #333333;"));
        assert!(html.contains(">in</a>"));
        assert!(!html.contains("sig-separator"));
    }

    #[test]
    fn test_empty_channels_yield_nothing() {
        let html = generate_social_links(
            &[],
            SocialDisplay::Text,
            &AccentColor::default(),
            &Brand::default(),
        );
        assert_eq!(html, "");
    }

    #[test]
    fn test_unknown_ids_ignored() {
        let html = social_links_from_ids(
            &["myspace", "facebook"],
            SocialDisplay::Text,
            &AccentColor::default(),
            &Brand::default(),
        );
        assert!(html.contains("https://www.facebook.com/zoho"));
        assert!(!html.contains("myspace"));
    }

    #[test]
    fn test_unconfigured_channel_skipped() {
        let mut brand = Brand::default();
        brand.social.remove("twitter");
        let html = generate_social_links(
            &[SocialChannel::Twitter, SocialChannel::Facebook],
            SocialDisplay::Text,
            &AccentColor::default(),
            &brand,
        );
        assert!(!html.contains("x.com"));
        assert!(html.contains("facebook.com"));
    }
}
