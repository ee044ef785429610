use chrono::NaiveDate;

/// A journal entry. Content lives in the binary; there is no CMS behind
/// the site.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlogPost {
    pub slug: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub date: NaiveDate,
    pub reading_minutes: u32,
    pub body: &'static [&'static str],
}

impl BlogPost {
    pub fn formatted_date(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }
}

const fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(d) => d,
        None => panic!("invalid blog post date"),
    }
}

/// Newest first.
pub static POSTS: &[BlogPost] = &[
    BlogPost {
        slug: "a-gentler-alarm",
        title: "A Gentler Alarm: Waking Without the Jolt",
        excerpt: "The default alarm sound is engineered to startle. Here is what happened when we spent two weeks waking up to light instead.",
        date: date(2025, 7, 28),
        reading_minutes: 4,
        body: &[
            "Most alarm tones are built to cut through sleep like a fire drill. That works, in the sense that you are no longer asleep. It also works in the sense that your heart rate spikes before your feet touch the floor.",
            "For two weeks we swapped the siren for a sunrise lamp and a quiet chime set ten minutes later. The lamp starts as a dim ember and brightens slowly; most mornings we were already half awake before the chime ever played.",
            "The surprise was not waking up easier. It was how different the first thirty minutes felt when they did not start with adrenaline. Coffee tasted like a pleasure instead of a treatment.",
            "If you try one thing from this letter, try this: put the harsh alarm behind the gentle one as a backup, not in front of it. You will be surprised how rarely the backup fires.",
        ],
    },
    BlogPost {
        slug: "five-minute-sunrise-journal",
        title: "The Five-Minute Sunrise Journal",
        excerpt: "Three prompts, one page, five minutes. A journaling practice small enough to survive a busy week.",
        date: date(2025, 7, 14),
        reading_minutes: 3,
        body: &[
            "Journaling advice usually fails by asking too much. Morning pages are wonderful until the first morning you have eleven minutes and a toddler.",
            "Our version is three prompts: one thing you noticed yesterday, one thing you are looking forward to, one thing you can let go of today. One page, no rereading, no editing.",
            "The point is not the archive. The point is the two quiet minutes of attention before the day starts asking questions. The notebook is just a place to put them.",
        ],
    },
    BlogPost {
        slug: "phones-before-coffee",
        title: "Why We Stopped Checking Our Phones Before Coffee",
        excerpt: "An experiment in keeping the first twenty minutes of the day offline, and what it did to the rest of it.",
        date: date(2025, 6, 30),
        reading_minutes: 5,
        body: &[
            "The phone is not evil. It is simply very good at replacing whatever you were about to do with whatever it would like you to do. At 6:40 in the morning, that trade is rarely in your favor.",
            "We ran a house rule for a month: nobody unlocks a phone until there is a warm mug on the table. Not a digital detox, just a queue. The messages are all still there at 7:05.",
            "The first week itched. By the third week the itch had moved: reaching for the phone first thing started to feel like answering someone else's doorbell.",
            "What filled the gap was nothing dramatic. Looking out the window. Talking. The kind of unproductive ten minutes that the rest of the day quietly runs on.",
            "We kept the rule. Not because screens are bad, but because mornings are short, and they were the only part of the day we were giving away first and living second.",
        ],
    },
    BlogPost {
        slug: "slow-breakfasts",
        title: "Slow Breakfasts, Fast Mornings",
        excerpt: "You do not need an hour. You need a bowl you can assemble half asleep and a table you actually sit down at.",
        date: date(2025, 6, 9),
        reading_minutes: 4,
        body: &[
            "A slow breakfast is a state of mind, not a duration. Ten minutes of sitting down with food beats forty minutes of eating over the sink while reading email.",
            "The trick is removing decisions, not adding recipes. We keep a default: oats soaked the night before, whatever fruit is around, and the same two mugs. Nobody negotiates with the default before 7am.",
            "Set the table the night before if you can. It is a small act of hospitality toward the person you will be tomorrow, and it works embarrassingly well.",
        ],
    },
    BlogPost {
        slug: "light-movement-first-hour",
        title: "Light, Movement, and the First Hour",
        excerpt: "Two inputs your body is waiting for every morning, and the simplest possible way to provide them.",
        date: date(2025, 5, 26),
        reading_minutes: 6,
        body: &[
            "Your circadian clock takes its cue from bright light early in the day. Indoor light mostly does not count; even an overcast sky is an order of magnitude brighter than your kitchen.",
            "The protocol is almost insultingly simple: get outside within an hour of waking, for about ten minutes, and move a little while you are there. A walk to the corner and back counts. Watering the balcony plants counts.",
            "We are wary of morning routines that read like a part-time job. This is not one of them. It is a lap around the block, and it pays the rest of the day back with interest.",
            "On the darkest winter weeks, a bright lamp at the breakfast table is a reasonable stand-in. It is not the sun. It is still far better than the glow of a screen.",
        ],
    },
    BlogPost {
        slug: "evening-serves-morning",
        title: "Building an Evening That Serves Your Morning",
        excerpt: "The last hour of the day decides the first one. A short list of trades worth making before bed.",
        date: date(2025, 5, 5),
        reading_minutes: 5,
        body: &[
            "Every morning practice we have ever written about gets easier or harder depending on what happened the night before. The evening is where mornings are actually built.",
            "The useful trades are small. Laying out tomorrow's clothes ends one morning negotiation. A kitchen reset means you walk into a kind room instead of a to-do list. A charging spot outside the bedroom settles the phone question before it is asked.",
            "None of this is discipline. It is choreography: arranging the scenery so the first scene of tomorrow plays itself.",
        ],
    },
];

/// First `n` posts, newest first. Saturates at the end of the list.
pub fn recent(n: usize) -> &'static [BlogPost] {
    &POSTS[..n.min(POSTS.len())]
}

pub fn find(slug: &str) -> Option<&'static BlogPost> {
    POSTS.iter().find(|post| post.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_slugs_unique_and_nonempty() {
        let slugs: HashSet<_> = POSTS.iter().map(|p| p.slug).collect();
        assert_eq!(slugs.len(), POSTS.len());
        assert!(POSTS.iter().all(|p| !p.slug.is_empty()));
    }

    #[test]
    fn test_posts_newest_first() {
        for pair in POSTS.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
    }

    #[test]
    fn test_find_by_slug() {
        let post = find("phones-before-coffee").unwrap();
        assert_eq!(post.title, "Why We Stopped Checking Our Phones Before Coffee");
        assert!(find("not-a-post").is_none());
    }

    #[test]
    fn test_recent_slice() {
        assert_eq!(recent(3).len(), 3);
        assert_eq!(recent(3)[0].slug, POSTS[0].slug);
        assert_eq!(recent(100).len(), POSTS.len());
        assert!(recent(0).is_empty());
    }

    #[test]
    fn test_posts_have_bodies() {
        assert!(POSTS.iter().all(|p| !p.body.is_empty()));
        assert!(POSTS.iter().all(|p| p.reading_minutes > 0));
    }
}
