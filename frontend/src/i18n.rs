use crate::story::zones::Zone;

/// Languages the site ships translated bundles for. Resolved once at app
/// mount from the browser locale and handed out read-only through context;
/// nothing mutates it for the rest of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Es,
    De,
}

impl Locale {
    /// Parses a BCP 47 tag ("es-MX", "de", "en-GB"...) down to a supported
    /// locale via its primary subtag. Anything unknown falls back to English.
    pub fn from_tag(tag: &str) -> Locale {
        let primary = tag
            .split(|c| c == '-' || c == '_')
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();
        match primary.as_str() {
            "es" => Locale::Es,
            "de" => Locale::De,
            _ => Locale::En,
        }
    }

    /// Reads `navigator.language`. Missing window/navigator language (e.g.
    /// during tests) resolves to English.
    pub fn detect() -> Locale {
        web_sys::window()
            .and_then(|w| w.navigator().language())
            .map(|tag| Locale::from_tag(&tag))
            .unwrap_or_default()
    }
}

/// The translated UI strings. One static instance per locale; pages pull
/// the bundle for the context locale instead of looking strings up by key.
pub struct Strings {
    pub nav_about: &'static str,
    pub nav_philosophy: &'static str,
    pub nav_blog: &'static str,
    pub nav_social: &'static str,
    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,
    pub hero_cta: &'static str,
    pub story_heading: &'static str,
    pub story_hint: &'static str,
    pub recent_posts_heading: &'static str,
    pub read_more: &'static str,
    pub newsletter_heading: &'static str,
    pub newsletter_blurb: &'static str,
    pub newsletter_placeholder: &'static str,
    pub newsletter_button: &'static str,
    pub newsletter_sending: &'static str,
    pub newsletter_done: &'static str,
    pub newsletter_invalid: &'static str,
    pub newsletter_failed: &'static str,
    pub footer_tagline: &'static str,
}

static EN: Strings = Strings {
    nav_about: "About",
    nav_philosophy: "Philosophy",
    nav_blog: "Journal",
    nav_social: "Social",
    hero_title: "Mornings worth waking up for",
    hero_subtitle: "Daily Sunrise is a short letter about slow mornings, small rituals and the first hour of the day.",
    hero_cta: "Read the journal",
    story_heading: "How a morning grows",
    story_hint: "Keep scrolling",
    recent_posts_heading: "From the journal",
    read_more: "Read more",
    newsletter_heading: "Get the sunrise letter",
    newsletter_blurb: "One short email every Sunday. No ads, no noise, unsubscribe whenever.",
    newsletter_placeholder: "you@example.com",
    newsletter_button: "Subscribe",
    newsletter_sending: "Subscribing...",
    newsletter_done: "You're on the list. See you Sunday!",
    newsletter_invalid: "Please enter an email address first.",
    newsletter_failed: "Something went wrong, please try again.",
    footer_tagline: "Written at first light.",
};

static ES: Strings = Strings {
    nav_about: "Nosotros",
    nav_philosophy: "Filosofía",
    nav_blog: "Diario",
    nav_social: "Redes",
    hero_title: "Mañanas que valen la pena",
    hero_subtitle: "Daily Sunrise es una carta breve sobre mañanas lentas, pequeños rituales y la primera hora del día.",
    hero_cta: "Leer el diario",
    story_heading: "Cómo crece una mañana",
    story_hint: "Sigue bajando",
    recent_posts_heading: "Del diario",
    read_more: "Leer más",
    newsletter_heading: "Recibe la carta del amanecer",
    newsletter_blurb: "Un correo corto cada domingo. Sin anuncios, sin ruido, date de baja cuando quieras.",
    newsletter_placeholder: "tu@ejemplo.com",
    newsletter_button: "Suscribirme",
    newsletter_sending: "Suscribiendo...",
    newsletter_done: "Ya estás en la lista. ¡Hasta el domingo!",
    newsletter_invalid: "Primero escribe un correo electrónico.",
    newsletter_failed: "Algo salió mal, inténtalo de nuevo.",
    footer_tagline: "Escrito con la primera luz.",
};

static DE: Strings = Strings {
    nav_about: "Über uns",
    nav_philosophy: "Philosophie",
    nav_blog: "Journal",
    nav_social: "Social",
    hero_title: "Morgen, für die sich das Aufstehen lohnt",
    hero_subtitle: "Daily Sunrise ist ein kurzer Brief über langsame Morgen, kleine Rituale und die erste Stunde des Tages.",
    hero_cta: "Journal lesen",
    story_heading: "Wie ein Morgen wächst",
    story_hint: "Weiterscrollen",
    recent_posts_heading: "Aus dem Journal",
    read_more: "Weiterlesen",
    newsletter_heading: "Den Sonnenaufgangsbrief erhalten",
    newsletter_blurb: "Eine kurze E-Mail jeden Sonntag. Keine Werbung, kein Lärm, jederzeit abbestellbar.",
    newsletter_placeholder: "du@beispiel.de",
    newsletter_button: "Abonnieren",
    newsletter_sending: "Wird eingetragen...",
    newsletter_done: "Du stehst auf der Liste. Bis Sonntag!",
    newsletter_invalid: "Bitte zuerst eine E-Mail-Adresse eingeben.",
    newsletter_failed: "Etwas ist schiefgelaufen, bitte erneut versuchen.",
    footer_tagline: "Geschrieben beim ersten Licht.",
};

pub fn strings(locale: Locale) -> &'static Strings {
    match locale {
        Locale::En => &EN,
        Locale::Es => &ES,
        Locale::De => &DE,
    }
}

/// Title and description shown while a zone is in focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneCopy {
    pub title: &'static str,
    pub description: &'static str,
}

/// The zone catalog. The double match is exhaustive over both enums, so a
/// locale missing one of the five entries fails to compile.
pub fn zone_copy(locale: Locale, zone: Zone) -> ZoneCopy {
    match locale {
        Locale::En => match zone {
            Zone::Roots => ZoneCopy {
                title: "Roots",
                description: "Every good morning starts the night before. Rest is the soil the whole day grows from.",
            },
            Zone::Trunk => ZoneCopy {
                title: "Trunk",
                description: "A steady wake-up time is the trunk of the practice. Boring, sturdy, and quietly load-bearing.",
            },
            Zone::Branches => ZoneCopy {
                title: "Branches",
                description: "From one steady routine, habits branch out: a glass of water, a page in the journal, a short walk.",
            },
            Zone::Leaves => ZoneCopy {
                title: "Leaves",
                description: "The small joys are the leaves. They come and go with the seasons, and that is fine.",
            },
            Zone::Crown => ZoneCopy {
                title: "Crown",
                description: "Then the sun clears the crown, and the first hour belongs to you before it belongs to anyone else.",
            },
        },
        Locale::Es => match zone {
            Zone::Roots => ZoneCopy {
                title: "Raíces",
                description: "Toda buena mañana empieza la noche anterior. El descanso es la tierra de la que crece el día.",
            },
            Zone::Trunk => ZoneCopy {
                title: "Tronco",
                description: "Despertar a una hora constante es el tronco de la práctica. Aburrido, firme y esencial.",
            },
            Zone::Branches => ZoneCopy {
                title: "Ramas",
                description: "De una rutina estable brotan los hábitos: un vaso de agua, una página del diario, un paseo corto.",
            },
            Zone::Leaves => ZoneCopy {
                title: "Hojas",
                description: "Las pequeñas alegrías son las hojas. Van y vienen con las estaciones, y está bien así.",
            },
            Zone::Crown => ZoneCopy {
                title: "Copa",
                description: "Entonces el sol asoma sobre la copa, y la primera hora es tuya antes que de nadie más.",
            },
        },
        Locale::De => match zone {
            Zone::Roots => ZoneCopy {
                title: "Wurzeln",
                description: "Jeder gute Morgen beginnt am Abend davor. Schlaf ist der Boden, aus dem der Tag wächst.",
            },
            Zone::Trunk => ZoneCopy {
                title: "Stamm",
                description: "Eine feste Aufwachzeit ist der Stamm der Praxis. Langweilig, stabil und tragend.",
            },
            Zone::Branches => ZoneCopy {
                title: "Äste",
                description: "Aus einer festen Routine verzweigen sich Gewohnheiten: ein Glas Wasser, eine Seite im Journal, ein kurzer Spaziergang.",
            },
            Zone::Leaves => ZoneCopy {
                title: "Blätter",
                description: "Die kleinen Freuden sind die Blätter. Sie kommen und gehen mit den Jahreszeiten, und das ist in Ordnung.",
            },
            Zone::Crown => ZoneCopy {
                title: "Krone",
                description: "Dann steigt die Sonne über die Krone, und die erste Stunde gehört dir, bevor sie jemand anderem gehört.",
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_from_tag() {
        assert_eq!(Locale::from_tag("en-US"), Locale::En);
        assert_eq!(Locale::from_tag("es"), Locale::Es);
        assert_eq!(Locale::from_tag("es-MX"), Locale::Es);
        assert_eq!(Locale::from_tag("de_AT"), Locale::De);
        assert_eq!(Locale::from_tag("DE-CH"), Locale::De);
        assert_eq!(Locale::from_tag("fr-FR"), Locale::En);
        assert_eq!(Locale::from_tag(""), Locale::En);
    }

    #[test]
    fn test_zone_copy_nonempty_for_all_locales() {
        for locale in [Locale::En, Locale::Es, Locale::De] {
            for zone in Zone::ALL {
                let copy = zone_copy(locale, zone);
                assert!(!copy.title.is_empty());
                assert!(!copy.description.is_empty());
            }
        }
    }

    #[test]
    fn test_zone_titles_unique_per_locale() {
        for locale in [Locale::En, Locale::Es, Locale::De] {
            let titles: std::collections::HashSet<_> =
                Zone::ALL.iter().map(|z| zone_copy(locale, *z).title).collect();
            assert_eq!(titles.len(), Zone::ALL.len());
        }
    }
}
