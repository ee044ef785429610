/// A card on the social showcase page. Links go out; nothing is embedded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SocialChannel {
    pub platform: &'static str,
    pub handle: &'static str,
    pub blurb: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
}

pub static CHANNELS: &[SocialChannel] = &[
    SocialChannel {
        platform: "Instagram",
        handle: "@dailysunrise",
        blurb: "One photo of first light every day, from readers around the world.",
        url: "https://instagram.com/dailysunrise",
        icon: "📷",
    },
    SocialChannel {
        platform: "YouTube",
        handle: "Daily Sunrise",
        blurb: "Slow, unhurried films about morning rituals. No jump cuts before 8am.",
        url: "https://youtube.com/@dailysunrise",
        icon: "▶️",
    },
    SocialChannel {
        platform: "Pinterest",
        handle: "dailysunrise",
        blurb: "Breakfast tables, reading corners and other small stages for a good morning.",
        url: "https://pinterest.com/dailysunrise",
        icon: "📌",
    },
    SocialChannel {
        platform: "TikTok",
        handle: "@dailysunrise",
        blurb: "Sixty-second rituals. The rare corner of the feed that wants you to put the phone down.",
        url: "https://tiktok.com/@dailysunrise",
        icon: "🎵",
    },
    SocialChannel {
        platform: "X",
        handle: "@dailysunrise",
        blurb: "Short notes on sleep, light and coffee. Posted after sunrise, never before.",
        url: "https://x.com/dailysunrise",
        icon: "💬",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels_complete() {
        assert!(!CHANNELS.is_empty());
        for channel in CHANNELS {
            assert!(channel.url.starts_with("https://"));
            assert!(!channel.handle.is_empty());
            assert!(!channel.blurb.is_empty());
        }
    }
}
