// Tone classification of a finished sonnet.
//
// The raw text is split on whitespace; each token is lowercased and
// stripped of leading/trailing punctuation, then looked up in both word
// lists. A positive hit adds one, a negative hit subtracts one, and a word
// on both lists does both. The sign of the sum picks a `ToneProfile`.

use poetry_slam_lang::ToneLexicon;
use serde::Serialize;

use crate::sonnet::Sonnet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ToneProfile {
    Positive,
    Negative,
    Neutral,
}

impl ToneProfile {
    pub fn from_tone(tone: i64) -> Self {
        match tone.signum() {
            1 => ToneProfile::Positive,
            -1 => ToneProfile::Negative,
            _ => ToneProfile::Neutral,
        }
    }
}

/// Net tone of arbitrary text.
pub fn classify_text(text: &str, lexicon: &ToneLexicon) -> i64 {
    let mut tone = 0;
    for token in text.split_whitespace() {
        let word = token
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        if word.is_empty() {
            continue;
        }
        if lexicon.is_positive(&word) {
            tone += 1;
        }
        if lexicon.is_negative(&word) {
            tone -= 1;
        }
    }
    tone
}

pub fn classify_tone(sonnet: &Sonnet, lexicon: &ToneLexicon) -> i64 {
    classify_text(&sonnet.raw_text(), lexicon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sonnet::tests::sonnet_with_ends;

    fn lexicon() -> ToneLexicon {
        ToneLexicon::new(["love", "rose", "sweet"], ["death", "bloom", "cold"])
    }

    #[test]
    fn test_positive_and_negative_cancel() {
        assert_eq!(classify_text("rose bloom", &lexicon()), 0);
    }

    #[test]
    fn test_sign_of_tone() {
        assert_eq!(classify_text("love, sweet love", &lexicon()), 3);
        assert_eq!(classify_text("cold death,", &lexicon()), -2);
        assert_eq!(classify_text("the summer day", &lexicon()), 0);
    }

    #[test]
    fn test_tokens_are_cleaned() {
        assert_eq!(classify_text("Love! 'rose' DEATH.", &lexicon()), 1);
    }

    #[test]
    fn test_word_on_both_lists_counts_both_ways() {
        let both = ToneLexicon::new(["tender"], ["tender", "grief"]);
        assert_eq!(classify_text("tender", &both), 0);
        assert_eq!(classify_text("tender grief", &both), -1);
    }

    #[test]
    fn test_classify_sonnet_reads_raw_text() {
        let mut ends = ["day"; 14];
        ends[0] = "love";
        ends[1] = "rose";
        ends[2] = "cold";
        assert_eq!(classify_tone(&sonnet_with_ends(ends), &lexicon()), 1);
    }

    #[test]
    fn test_profile_from_tone() {
        assert_eq!(ToneProfile::from_tone(4), ToneProfile::Positive);
        assert_eq!(ToneProfile::from_tone(-1), ToneProfile::Negative);
        assert_eq!(ToneProfile::from_tone(0), ToneProfile::Neutral);
    }
}
