//! Fixed phrase patterns used by the question checks
//!
//! All patterns are case-insensitive and compiled once on first use.

use regex::Regex;
use std::sync::LazyLock;

/// Absolute quantifiers and high-certainty modal words, whole-word
static EXTREME_LANGUAGE: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(
            r"(?i)\b(always|never|all|none|completely|entirely|absolutely|totally|every|no one|everyone|everything|nothing)\b",
        )
        .unwrap(),
        Regex::new(
            r"(?i)\b(must|should|will|cannot|can't|won't|definitely|certainly|obviously|clearly)\b",
        )
        .unwrap(),
    ]
});

/// Stem phrasing that points the reader straight at the passage
static DIRECT_QUOTE: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)according to the passage",
        r"(?i)the passage states",
        r"(?i)the author says",
        r"(?i)as mentioned in the passage",
        r"(?i)the text indicates",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Stem phrasing that asks for reasoning beyond recall
static INFERENCE_INDICATOR: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)suggests?",
        r"(?i)implies?",
        r"(?i)attitude.*can be.*characterized",
        r"(?i)assumes?.*following",
        r"(?i)primary method",
        r"(?i)most likely",
        r"(?i)would probably",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static NEGATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(not|no|never|none|neither|cannot|shouldn't|wouldn't)\b").unwrap()
});

/// Whether `text` contains absolute or high-certainty wording
pub fn has_extreme_language(text: &str) -> bool {
    EXTREME_LANGUAGE.iter().any(|re| re.is_match(text))
}

/// Whether `text` explicitly cites the passage
pub fn has_direct_quote(text: &str) -> bool {
    DIRECT_QUOTE.iter().any(|re| re.is_match(text))
}

/// Whether `text` contains an inference-indicator phrase
pub fn has_inference_indicator(text: &str) -> bool {
    INFERENCE_INDICATOR.iter().any(|re| re.is_match(text))
}

/// Whether `text` contains a negation word
pub fn has_negation(text: &str) -> bool {
    NEGATION.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extreme_language_whole_words() {
        assert!(has_extreme_language("This is ALWAYS true"));
        assert!(has_extreme_language("no one disagrees"));
        assert!(has_extreme_language("it can't be helped"));
        assert!(has_extreme_language("Clearly the author errs"));

        // Substrings of longer words do not count
        assert!(!has_extreme_language("the tallest building"));
        assert!(!has_extreme_language("a nevertheless cautious view"));
        assert!(!has_extreme_language("willing participants"));
    }

    #[test]
    fn test_every_direct_quote_phrase() {
        let cases = [
            "According to the passage, what changed?",
            "The passage states that reform is what?",
            "The author says reform is what?",
            "As mentioned in the passage, reform is what?",
            "The text indicates what about reform?",
        ];
        for text in cases {
            assert!(has_direct_quote(text), "{}", text);
        }
    }

    #[test]
    fn test_direct_quote_any_case() {
        assert!(has_direct_quote("According To The Passage, what happened?"));
        assert!(has_direct_quote("what does the text indicates mean"));
        assert!(!has_direct_quote("The author implies that"));
    }

    #[test]
    fn test_inference_indicators() {
        assert!(has_inference_indicator("the passage suggest that"));
        assert!(has_inference_indicator("which of the following is most likely"));
        assert!(has_inference_indicator(
            "the author's attitude toward reform can best be characterized as"
        ));
        assert!(has_inference_indicator("the argument assumes which of the following?"));
        assert!(has_inference_indicator("the author's primary method of argument"));
        assert!(!has_inference_indicator("what year did the treaty end?"));
    }

    #[test]
    fn test_every_negation_word() {
        let cases = [
            ("It is not so", true),
            ("There is no answer", true),
            ("It never ends", true),
            ("None of these", true),
            ("Neither view holds", true),
            ("Reform cannot wait", true),
            ("We shouldn't act", true),
            ("They wouldn't agree", true),
            ("Nonetheless it holds", false),
            ("A cannotation", false),
        ];
        for (text, expected) in cases {
            assert_eq!(has_negation(text), expected, "{}", text);
        }
    }

    #[test]
    fn test_negation() {
        assert!(has_negation("It is not the case"));
        assert!(has_negation("we shouldn't conclude"));
        assert!(!has_negation("notable and nominal"));
    }

    #[test]
    fn test_repeated_calls_agree() {
        let text = "everything changes";
        assert_eq!(has_extreme_language(text), has_extreme_language(text));
        assert!(has_extreme_language(text));
    }
}
