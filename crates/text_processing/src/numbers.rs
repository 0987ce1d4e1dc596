//! Spoken number normalization
//!
//! Converts digit strings, English number words, hyphenated or spaced
//! compounds ("twenty-three", "forty one") and ordinals ("first", "1st")
//! into integers.

use once_cell::sync::Lazy;
use regex::Regex;

static DIGIT_ORDINAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)(?:st|nd|rd|th)$").unwrap());

/// Number-word table lookup (lowercase input)
fn lookup(word: &str) -> Option<u32> {
    match word {
        "one" => Some(1),
        "two" => Some(2),
        "three" => Some(3),
        "four" => Some(4),
        "five" => Some(5),
        "six" => Some(6),
        "seven" => Some(7),
        "eight" => Some(8),
        "nine" => Some(9),
        "ten" => Some(10),
        "eleven" => Some(11),
        "twelve" => Some(12),
        "thirteen" => Some(13),
        "fourteen" => Some(14),
        "fifteen" => Some(15),
        "sixteen" => Some(16),
        "seventeen" => Some(17),
        "eighteen" => Some(18),
        "nineteen" => Some(19),
        "twenty" => Some(20),
        "twenty-one" => Some(21),
        "twenty-two" => Some(22),
        "twenty-three" => Some(23),
        "twenty-four" => Some(24),
        "twenty-five" => Some(25),
        "twenty-six" => Some(26),
        "twenty-seven" => Some(27),
        "twenty-eight" => Some(28),
        "twenty-nine" => Some(29),
        "thirty" => Some(30),
        "thirty-one" => Some(31),
        "thirty-two" => Some(32),
        "thirty-three" => Some(33),
        "thirty-four" => Some(34),
        "thirty-five" => Some(35),
        "thirty-six" => Some(36),
        "thirty-seven" => Some(37),
        "thirty-eight" => Some(38),
        "thirty-nine" => Some(39),
        "forty" => Some(40),
        "fifty" => Some(50),
        "sixty" => Some(60),
        "seventy" => Some(70),
        "eighty" => Some(80),
        "ninety" => Some(90),
        "hundred" | "one hundred" => Some(100),

        // Ordinals
        "first" => Some(1),
        "second" => Some(2),
        "third" => Some(3),

        _ => None,
    }
}

/// Convert a single token (or a two-word compound) to an integer.
///
/// Returns `None` for anything that is not a number; callers treat that as
/// non-numeric rather than an error.
///
/// # Examples
///
/// ```
/// use voice_bible_text_processing::numbers::word_to_number;
/// assert_eq!(word_to_number("twenty-three"), Some(23));
/// assert_eq!(word_to_number("forty one"), Some(41));
/// assert_eq!(word_to_number("16"), Some(16));
/// assert_eq!(word_to_number("xyz"), None);
/// ```
pub fn word_to_number(token: &str) -> Option<u32> {
    let token = token.trim().to_lowercase();
    if token.is_empty() {
        return None;
    }

    if let Ok(n) = token.parse::<u32>() {
        return Some(n);
    }

    if let Some(n) = lookup(&token) {
        return Some(n);
    }

    if let Some(caps) = DIGIT_ORDINAL.captures(&token) {
        return caps[1].parse().ok();
    }

    let parts: Vec<&str> = token
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|p| !p.is_empty())
        .collect();
    if let [tens, ones] = parts.as_slice() {
        let tens = lookup(tens)?;
        let ones = lookup(ones)?;
        if tens >= 20 && tens < 100 && tens % 10 == 0 && (1..=9).contains(&ones) {
            return Some(tens + ones);
        }
    }

    None
}

/// Ordinal words usable as numbered-book prefixes, mapped to their digit
pub fn ordinal_prefix(token: &str) -> Option<u32> {
    match token.trim().to_lowercase().as_str() {
        "first" | "1st" => Some(1),
        "second" | "2nd" => Some(2),
        "third" | "3rd" => Some(3),
        _ => None,
    }
}

/// True for "first", "1st", "fourth", "21st" and the like
pub fn is_ordinal(token: &str) -> bool {
    let token = token.trim().to_lowercase();
    ordinal_prefix(&token).is_some()
        || DIGIT_ORDINAL.is_match(&token)
        || matches!(
            token.as_str(),
            "fourth" | "fifth" | "sixth" | "seventh" | "eighth" | "ninth" | "tenth"
        )
}

#[derive(Debug, Clone, Copy)]
struct NumberToken {
    value: u32,
    spoken: bool,
}

/// Resolve a token sequence to numbers, merging spoken groups.
///
/// Speech engines deliver "twenty eight" as two tokens; this folds a tens word
/// followed by 1–9 into one number, and `<1-9> hundred [rest]` into hundreds.
/// Digit literals are never merged. Unresolvable tokens are skipped.
pub fn collect_numbers<S: AsRef<str>>(tokens: &[S]) -> Vec<u32> {
    let resolved: Vec<NumberToken> = tokens
        .iter()
        .filter_map(|t| {
            let t = t.as_ref();
            word_to_number(t).map(|value| NumberToken {
                value,
                spoken: !t.chars().all(|c| c.is_ascii_digit()),
            })
        })
        .collect();

    let mut numbers = Vec::new();
    let mut i = 0;
    while i < resolved.len() {
        let (value, next) = take_group(&resolved, i);
        numbers.push(value);
        i = next;
    }
    numbers
}

fn take_group(tokens: &[NumberToken], start: usize) -> (u32, usize) {
    let first = tokens[start];
    if !first.spoken {
        return (first.value, start + 1);
    }

    let spoken_at = |i: usize| tokens.get(i).filter(|t| t.spoken).map(|t| t.value);

    let mut value = first.value;
    let mut next = start + 1;

    if (1..=9).contains(&value) && spoken_at(next) == Some(100) {
        value *= 100;
        next += 1;
    }

    if value >= 100 && value % 100 == 0 {
        if let Some(rest) = spoken_at(next).filter(|v| (1..100).contains(v)) {
            let (rest, after) = tens_and_ones(tokens, next, rest);
            return (value + rest, after);
        }
        return (value, next);
    }

    tens_and_ones(tokens, start, value)
}

fn tens_and_ones(tokens: &[NumberToken], at: usize, value: u32) -> (u32, usize) {
    let is_tens = value >= 20 && value < 100 && value % 10 == 0;
    match tokens.get(at + 1) {
        Some(ones) if is_tens && ones.spoken && (1..=9).contains(&ones.value) => {
            (value + ones.value, at + 2)
        },
        _ => (value, at + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_numbers() {
        assert_eq!(word_to_number("one"), Some(1));
        assert_eq!(word_to_number("Sixteen"), Some(16));
        assert_eq!(word_to_number("forty"), Some(40));
        assert_eq!(word_to_number("hundred"), Some(100));
        assert_eq!(word_to_number("one hundred"), Some(100));
    }

    #[test]
    fn test_compounds() {
        assert_eq!(word_to_number("twenty-three"), Some(23));
        assert_eq!(word_to_number("forty one"), Some(41));
        assert_eq!(word_to_number("ninety-nine"), Some(99));
        // Only tens >= 20 combine with 1-9
        assert_eq!(word_to_number("ten five"), None);
        assert_eq!(word_to_number("twenty twenty"), None);
        assert_eq!(word_to_number("twenty three four"), None);
    }

    #[test]
    fn test_digits_and_ordinals() {
        assert_eq!(word_to_number("150"), Some(150));
        assert_eq!(word_to_number("first"), Some(1));
        assert_eq!(word_to_number("third"), Some(3));
        assert_eq!(word_to_number("1st"), Some(1));
        assert_eq!(word_to_number("22nd"), Some(22));
    }

    #[test]
    fn test_unknown() {
        assert_eq!(word_to_number("xyz"), None);
        assert_eq!(word_to_number(""), None);
        assert_eq!(word_to_number("3:16"), None);
        assert_eq!(word_to_number("-4"), None);
    }

    #[test]
    fn test_ordinals() {
        assert_eq!(ordinal_prefix("First"), Some(1));
        assert_eq!(ordinal_prefix("2nd"), Some(2));
        assert_eq!(ordinal_prefix("fourth"), None);
        assert!(is_ordinal("fourth"));
        assert!(is_ordinal("21st"));
        assert!(!is_ordinal("john"));
    }

    #[test]
    fn test_collect_merges_spoken_groups() {
        assert_eq!(collect_numbers(&["eight", "twenty", "eight"]), vec![8, 28]);
        assert_eq!(collect_numbers(&["twenty", "three"]), vec![23]);
        assert_eq!(collect_numbers(&["three", "sixteen"]), vec![3, 16]);
        assert_eq!(
            collect_numbers(&["one", "hundred", "nineteen", "one", "hundred", "five"]),
            vec![119, 105]
        );
        assert_eq!(collect_numbers(&["one", "hundred", "twenty", "one"]), vec![121]);
    }

    #[test]
    fn test_collect_keeps_digits_separate() {
        assert_eq!(collect_numbers(&["20", "8"]), vec![20, 8]);
        assert_eq!(collect_numbers(&["twenty", "8"]), vec![20, 8]);
        assert_eq!(collect_numbers(&["chapter", "3", "verse", "16"]), vec![3, 16]);
    }
}
