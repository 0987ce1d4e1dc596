//! Book names, abbreviations and chapter counts (Protestant canon, 66 books)

use serde::Serialize;

/// A book of the Bible with its spoken/written abbreviations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BookDescriptor {
    /// Canonical name, the stable identifier
    pub name: &'static str,
    /// Lowercase abbreviations, possibly multi-word ("first john")
    pub abbreviations: &'static [&'static str],
    pub chapter_count: u32,
}

impl BookDescriptor {
    /// Number of words in the canonical name
    pub fn name_word_count(&self) -> usize {
        self.name.split_whitespace().count()
    }

    /// Canonical name followed by every abbreviation, all lowercase
    pub fn identifiers(&self) -> impl Iterator<Item = String> + '_ {
        std::iter::once(self.name.to_lowercase())
            .chain(self.abbreviations.iter().map(|a| a.to_string()))
    }
}

const fn book(
    name: &'static str,
    abbreviations: &'static [&'static str],
    chapter_count: u32,
) -> BookDescriptor {
    BookDescriptor {
        name,
        abbreviations,
        chapter_count,
    }
}

pub static BOOKS: [BookDescriptor; 66] = [
    book("Genesis", &["gen", "ge", "gn"], 50),
    book("Exodus", &["exod", "ex", "exo"], 40),
    book("Leviticus", &["lev", "le", "lv"], 27),
    book("Numbers", &["num", "nu", "nm", "nb"], 36),
    book("Deuteronomy", &["deut", "de", "dt"], 34),
    book("Joshua", &["josh", "jos", "jsh"], 24),
    book("Judges", &["judg", "jdg", "jg", "jdgs"], 21),
    book("Ruth", &["rth", "ru"], 4),
    book("1 Samuel", &["1sam", "1sa", "1s", "first samuel"], 31),
    book("2 Samuel", &["2sam", "2sa", "2s", "second samuel"], 24),
    book("1 Kings", &["1kgs", "1ki", "1k", "first kings"], 22),
    book("2 Kings", &["2kgs", "2ki", "2k", "second kings"], 25),
    book("1 Chronicles", &["1chr", "1ch", "first chronicles"], 29),
    book("2 Chronicles", &["2chr", "2ch", "second chronicles"], 36),
    book("Ezra", &["ezr", "ez"], 10),
    book("Nehemiah", &["neh", "ne"], 13),
    book("Esther", &["esth", "est", "es"], 10),
    book("Job", &["jb"], 42),
    book("Psalms", &["ps", "psa", "psm", "pss", "psalm"], 150),
    book("Proverbs", &["prov", "pro", "prv", "pr"], 31),
    book("Ecclesiastes", &["eccl", "ecc", "ec", "qoh"], 12),
    book("Song of Solomon", &["song", "sos", "so", "songs", "song of songs"], 8),
    book("Isaiah", &["isa", "is"], 66),
    book("Jeremiah", &["jer", "je", "jr"], 52),
    book("Lamentations", &["lam", "la"], 5),
    book("Ezekiel", &["ezek", "eze", "ezk"], 48),
    book("Daniel", &["dan", "da", "dn"], 12),
    book("Hosea", &["hos", "ho"], 14),
    book("Joel", &["joe", "jl"], 3),
    book("Amos", &["amo", "am"], 9),
    book("Obadiah", &["obad", "ob"], 1),
    book("Jonah", &["jon", "jnh"], 4),
    book("Micah", &["mic", "mc"], 7),
    book("Nahum", &["nah", "na"], 3),
    book("Habakkuk", &["hab", "hb"], 3),
    book("Zephaniah", &["zeph", "zep", "zp"], 3),
    book("Haggai", &["hag", "hg"], 2),
    book("Zechariah", &["zech", "zec", "zc"], 14),
    book("Malachi", &["mal", "ml"], 4),
    book("Matthew", &["matt", "mt", "mat"], 28),
    book("Mark", &["mrk", "mk", "mr"], 16),
    book("Luke", &["luk", "lk"], 24),
    book("John", &["joh", "jn", "jhn"], 21),
    book("Acts", &["act", "ac"], 28),
    book("Romans", &["rom", "ro", "rm"], 16),
    book("1 Corinthians", &["1cor", "1co", "first corinthians", "1 corinthians"], 16),
    book("2 Corinthians", &["2cor", "2co", "second corinthians", "2 corinthians"], 13),
    book("Galatians", &["gal", "ga"], 6),
    book("Ephesians", &["eph", "ephes"], 6),
    book("Philippians", &["phil", "php", "pp"], 4),
    book("Colossians", &["col", "co"], 4),
    book("1 Thessalonians", &["1thess", "1th", "first thessalonians", "1 thessalonians"], 5),
    book("2 Thessalonians", &["2thess", "2th", "second thessalonians", "2 thessalonians"], 3),
    book("1 Timothy", &["1tim", "1ti", "first timothy", "1 timothy"], 6),
    book("2 Timothy", &["2tim", "2ti", "second timothy", "2 timothy"], 4),
    book("Titus", &["tit", "ti"], 3),
    book("Philemon", &["phlm", "phm", "pm"], 1),
    book("Hebrews", &["heb"], 13),
    book("James", &["jas", "jm"], 5),
    book("1 Peter", &["1pet", "1pe", "1pt", "first peter", "1 peter"], 5),
    book("2 Peter", &["2pet", "2pe", "2pt", "second peter", "2 peter"], 3),
    book("1 John", &["1john", "1jn", "1jo", "first john", "1 john"], 5),
    book("2 John", &["2john", "2jn", "2jo", "second john", "2 john"], 1),
    book("3 John", &["3john", "3jn", "3jo", "third john", "3 john"], 1),
    book("Jude", &["jud", "jd"], 1),
    book("Revelation", &["rev", "re", "rv", "revelations"], 22),
];

/// Look up a book by canonical name or abbreviation (case-insensitive)
pub fn lookup_book(name: &str) -> Option<&'static BookDescriptor> {
    let needle = name.trim().to_lowercase();
    BOOKS
        .iter()
        .find(|book| book.identifiers().any(|id| id == needle))
}
