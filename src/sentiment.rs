//! Keyword-lexicon sentiment classification for social posts
//!
//! Classification is a pure function over two fixed keyword sets. Each
//! keyword counts once when present in the lowercased text; the score is
//! the normalized hit balance `(p - n) / (p + n)` in [-1, 1].

use serde::{Deserialize, Serialize};

/// Terms (and emoji) that indicate bullish sentiment in crypto posts
const POSITIVE_KEYWORDS: &[&str] = &[
    "bullish", "moon", "pump", "buy", "hodl", "strong", "good", "great", "profit", "gains",
    "\u{1F680}", // rocket
    "\u{1F4C8}", // chart increasing
    "\u{1F48E}", // gem stone
    "\u{1F525}", // fire
];

/// Terms (and emoji) that indicate bearish sentiment in crypto posts
const NEGATIVE_KEYWORDS: &[&str] = &[
    "bearish", "dump", "sell", "crash", "drop", "weak", "bad", "loss", "scam", "rug",
    "\u{1F4C9}", // chart decreasing
    "\u{1F4A9}", // pile of poo
    "\u{26A0}\u{FE0F}", // warning sign
];

/// Label thresholds: a score within ±0.1 of zero stays neutral
const POSITIVE_THRESHOLD: f64 = 0.1;
const NEGATIVE_THRESHOLD: f64 = -0.1;

/// Sentiment label for one post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

/// Classify a text into a sentiment label and a score in [-1, 1].
///
/// Deterministic and stateless: the same text always yields the same
/// result. Texts with no lexicon hits are neutral with score 0.
pub fn classify(text: &str) -> (Sentiment, f64) {
    let lower = text.to_lowercase();

    let positive_hits = POSITIVE_KEYWORDS
        .iter()
        .filter(|k| lower.contains(*k))
        .count();
    let negative_hits = NEGATIVE_KEYWORDS
        .iter()
        .filter(|k| lower.contains(*k))
        .count();

    let total = positive_hits + negative_hits;
    if total == 0 {
        return (Sentiment::Neutral, 0.0);
    }

    let score = (positive_hits as f64 - negative_hits as f64) / total as f64;
    let sentiment = if score > POSITIVE_THRESHOLD {
        Sentiment::Positive
    } else if score < NEGATIVE_THRESHOLD {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    };

    (sentiment, score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_hits_is_neutral() {
        let (sentiment, score) = classify("the weather is fine today");
        assert_eq!(sentiment, Sentiment::Neutral);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_three_positive_one_negative() {
        // moon + pump + gains vs dump -> (3 - 1) / 4 = 0.5
        let (sentiment, score) = classify("MOON incoming, pump and gains after the dump");
        assert_eq!(sentiment, Sentiment::Positive);
        assert_eq!(score, 0.5);
    }

    #[test]
    fn test_negative_text() {
        let (sentiment, score) = classify("total scam, rug pulled, crash");
        assert_eq!(sentiment, Sentiment::Negative);
        assert_eq!(score, -1.0);
    }

    #[test]
    fn test_balanced_hits_stay_neutral() {
        // One positive, one negative -> score 0 within the neutral band
        let (sentiment, score) = classify("good token, bad timing");
        assert_eq!(sentiment, Sentiment::Neutral);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_emoji_hits_count() {
        let (sentiment, score) = classify("\u{1F680}\u{1F680} to the top");
        assert_eq!(sentiment, Sentiment::Positive);
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("BULLISH"), classify("bullish"));
    }

    #[test]
    fn test_deterministic_and_bounded() {
        let samples = [
            "",
            "moon",
            "dump dump dump",
            "good great strong weak bad loss",
            "\u{1F4C9} \u{1F525}",
        ];
        for text in samples {
            let first = classify(text);
            let second = classify(text);
            assert_eq!(first, second);
            assert!(first.1 >= -1.0 && first.1 <= 1.0);
        }
    }
}
