//! Curated verse subset for semantic search (KJV text)

use serde::Serialize;
use voice_bible_core::VerseReference;
use voice_bible_text_processing::parse_reference;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CuratedVerse {
    pub reference: &'static str,
    pub text: &'static str,
}

impl CuratedVerse {
    pub fn verse_reference(&self) -> Option<VerseReference> {
        parse_reference(self.reference)
    }
}

pub static POPULAR_VERSES: [CuratedVerse; 13] = [
    CuratedVerse {
        reference: "John 11:35",
        text: "Jesus wept.",
    },
    CuratedVerse {
        reference: "John 3:16",
        text: "For God so loved the world, that he gave his only begotten Son, that whosoever believeth in him should not perish, but have everlasting life.",
    },
    CuratedVerse {
        reference: "Philippians 4:13",
        text: "I can do all things through Christ which strengtheneth me.",
    },
    CuratedVerse {
        reference: "Psalm 23:1",
        text: "The Lord is my shepherd; I shall not want.",
    },
    CuratedVerse {
        reference: "Genesis 1:1",
        text: "In the beginning God created the heaven and the earth.",
    },
    CuratedVerse {
        reference: "Jeremiah 29:11",
        text: "For I know the thoughts that I think toward you, saith the Lord, thoughts of peace, and not of evil, to give you an expected end.",
    },
    CuratedVerse {
        reference: "Romans 8:28",
        text: "And we know that all things work together for good to them that love God, to them who are the called according to his purpose.",
    },
    CuratedVerse {
        reference: "Ephesians 2:8",
        text: "For by grace are ye saved through faith; and that not of yourselves: it is the gift of God.",
    },
    CuratedVerse {
        reference: "Proverbs 3:5",
        text: "Trust in the Lord with all thine heart; and lean not unto thine own understanding.",
    },
    CuratedVerse {
        reference: "Revelation 22:20",
        text: "He which testifieth these things saith, Surely I come quickly. Amen. Even so, come, Lord Jesus.",
    },
    CuratedVerse {
        reference: "1 Corinthians 13:4",
        text: "Charity suffereth long, and is kind; charity envieth not; charity vaunteth not itself, is not puffed up.",
    },
    CuratedVerse {
        reference: "Matthew 5:14",
        text: "Ye are the light of the world. A city that is set on an hill cannot be hid.",
    },
    CuratedVerse {
        reference: "Isaiah 53:5",
        text: "But he was wounded for our transgressions, he was bruised for our iniquities: the chastisement of our peace was upon him; and with his stripes we are healed.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_reference_parses() {
        for verse in POPULAR_VERSES.iter() {
            let reference = verse.verse_reference();
            assert!(reference.is_some(), "{} did not parse", verse.reference);
        }
        assert_eq!(
            POPULAR_VERSES[3].verse_reference(),
            Some(VerseReference::new("Psalms", 23, 1))
        );
    }
}
