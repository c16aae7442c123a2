// Syllable estimation from spelling.
//
// A deterministic vowel-group heuristic, not a dictionary lookup: every
// corpus word gets its syllable count from here exactly once, and the line
// generator spends its 10-syllable budget with these numbers. The counts
// are "heuristic-consistent", so tests assert what the rules produce, not
// what a pronouncing dictionary would say.
//
// Rules, applied to the lowercased word:
// 1. +1 if the first character is a vowel (`a e i o u`).
// 2. For every later character: +1 if it is a vowel (`a e i o u`, or a
//    non-initial `y`) and the previous character is neither a vowel nor `y`.
// 3. -1 if the word ends in `e` (silent e).
// 4. `le` ending: see `LeSuffixRule`.
// 5. Floor at 1.

use serde::{Deserialize, Serialize};

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// How the `-le` ending is treated after the silent-e correction.
///
/// The historical heuristic compared the *last character* against the
/// two-character string `"le"`, so the add-back never fired. `Legacy`
/// keeps that behavior so counts match the classic generator; `Corrected`
/// performs the two-character suffix check it was evidently meant to do
/// ("table" -> 2 instead of 1).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeSuffixRule {
    #[default]
    Legacy,
    Corrected,
}

/// Heuristic syllable counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyllableEstimator {
    pub le_suffix: LeSuffixRule,
}

impl SyllableEstimator {
    pub fn new(le_suffix: LeSuffixRule) -> Self {
        SyllableEstimator { le_suffix }
    }

    /// Estimate the number of syllables in `word`. Never returns 0.
    pub fn estimate(&self, word: &str) -> u32 {
        let chars: Vec<char> = word.to_lowercase().chars().collect();
        let Some(&first) = chars.first() else {
            return 1;
        };

        let mut count: i32 = 0;
        if is_vowel(first) {
            count += 1;
        }
        for pair in chars.windows(2) {
            let (prev, cur) = (pair[0], pair[1]);
            if (is_vowel(cur) || cur == 'y') && !is_vowel(prev) && prev != 'y' {
                count += 1;
            }
        }

        if chars.last() == Some(&'e') {
            count -= 1;
        }
        if self.le_suffix == LeSuffixRule::Corrected && chars.ends_with(&['l', 'e']) {
            count += 1;
        }

        count.max(1) as u32
    }
}

fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}
