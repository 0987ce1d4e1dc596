//! Complex-query heuristic
//!
//! Questions, pastoral requests and navigation phrases are better served by a
//! question-answering collaborator than by reference parsing or search.

use once_cell::sync::Lazy;
use regex::Regex;

static COMPLEX_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // Interrogatives and requests for explanation
        r"^(?:where|what|who|when|why|how|which|tell me|explain|describe)",
        r"did (?:jesus|god|paul|david|moses|peter|abraham)",
        r"does the bible say",
        r"what.*mean",
        r"difference between",
        r"compare",
        r"should i read",
        // Pastoral
        r"help me with",
        r"pray(?:er|ing)?\s+(?:for|about)",
        r"struggling with",
        r"going through",
        r"feeling\s+(?:sad|anxious|scared|alone|lost|angry|depressed)",
        // Navigation relative to the current passage
        r"next chapter",
        r"go back",
        r"read more",
        r"continue",
        r"previous",
    ]
    .iter()
    .map(|p| Regex::new(&format!("(?i){}", p)).unwrap())
    .collect()
});

/// True when the utterance needs reasoning rather than lookup
pub fn is_complex_query(text: &str) -> bool {
    let query = text.trim().to_lowercase();
    if query.is_empty() {
        return false;
    }
    COMPLEX_PATTERNS.iter().any(|p| p.is_match(&query))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_questions() {
        assert!(is_complex_query("Where did Jesus walk on water?"));
        assert!(is_complex_query("  why do we fast"));
        assert!(is_complex_query("tell me the story of ruth"));
        assert!(is_complex_query("Did Moses see the promised land"));
        assert!(is_complex_query("what does selah mean"));
        assert!(is_complex_query("difference between grace and mercy"));
    }

    #[test]
    fn test_pastoral() {
        assert!(is_complex_query("I'm feeling anxious tonight"));
        assert!(is_complex_query("can you help me with my anger"));
        assert!(is_complex_query("a prayer for my mother"));
        assert!(is_complex_query("pray about work"));
        assert!(is_complex_query("I'm going through a divorce"));
    }

    #[test]
    fn test_navigation() {
        assert!(is_complex_query("next chapter"));
        assert!(is_complex_query("go back"));
        assert!(is_complex_query("Previous"));
    }

    #[test]
    fn test_direct_requests_are_simple() {
        assert!(!is_complex_query("John 3:16"));
        assert!(!is_complex_query("romans eight twenty eight"));
        assert!(!is_complex_query("verses about love"));
        assert!(!is_complex_query("jesus wept"));
        assert!(!is_complex_query(""));
    }
}
