//! Bible translations and the spoken names that select them

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translation {
    /// Short identifier, also the data file stem
    pub id: &'static str,
    pub name: &'static str,
    /// Lowercase phrases that select this translation
    pub aliases: &'static [&'static str],
}

pub static TRANSLATIONS: [Translation; 11] = [
    Translation {
        id: "kjv",
        name: "King James Version",
        aliases: &["king james version", "king james", "kjv", "authorized version", "authorised version"],
    },
    Translation {
        id: "kjv_strongs",
        name: "KJV w/ Strongs",
        aliases: &["kjv with strongs", "king james with strongs", "strongs"],
    },
    Translation {
        id: "kjvpce",
        name: "KJV (Pure Cambridge)",
        aliases: &["pure cambridge edition", "pure cambridge", "kjvpce"],
    },
    Translation {
        id: "asv",
        name: "American Standard Version",
        aliases: &["american standard version", "american standard", "asv"],
    },
    Translation {
        id: "asvs",
        name: "ASV (1901)",
        aliases: &["asv 1901", "asvs"],
    },
    Translation {
        id: "bishops",
        name: "Bishops Bible (1568)",
        aliases: &["bishops bible", "bishops"],
    },
    Translation {
        id: "coverdale",
        name: "Coverdale Bible (1535)",
        aliases: &["coverdale"],
    },
    Translation {
        id: "geneva",
        name: "Geneva Bible (1599)",
        aliases: &["geneva"],
    },
    Translation {
        id: "net",
        name: "New English Translation",
        aliases: &["new english translation", "net bible"],
    },
    Translation {
        id: "tyndale",
        name: "Tyndale Bible (1526)",
        aliases: &["tyndale"],
    },
    Translation {
        id: "web",
        name: "World English Bible",
        aliases: &["world english bible", "world english"],
    },
];

pub fn lookup_translation(id: &str) -> Option<&'static Translation> {
    let id = id.trim().to_lowercase();
    TRANSLATIONS.iter().find(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_aliases_are_unique() {
        let mut seen = HashSet::new();
        for translation in TRANSLATIONS.iter() {
            for alias in translation.aliases {
                assert!(seen.insert(*alias), "duplicate alias {}", alias);
            }
        }
    }

    #[test]
    fn test_lookup_translation() {
        assert_eq!(lookup_translation("KJV").unwrap().name, "King James Version");
        assert!(lookup_translation("niv").is_none());
    }
}
