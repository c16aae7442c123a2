// Rhyme and meter oracles: a CMU-format pronouncing dictionary plus
// spelling-based fallbacks for words the dictionary does not know.
//
// Dictionary format (the CMU Pronouncing Dictionary's plain-text layout):
//
//     ;;; comment
//     LOVE  L AH1 V
//     READ  R IY1 D
//     READ(1)  R EH1 D
//
// Rhyme: two words rhyme when, for some pair of their pronunciations, the
// phonemes from the last stressed vowel to the end match (stress digits
// ignored, `ER0` read as `R`). A pronunciation without a stressed vowel
// uses its last vowel. Tails are computed once per entry while parsing;
// the generator asks for thousands of rhyme checks per line.
//
// Meter: each line of rendered text is reduced to a stress string, one
// digit per syllable (primary or secondary stress -> `1`, unstressed ->
// `0`), taken from the first pronunciation of each word. The string is
// then cut into 2-character feet. A trailing odd syllable becomes a
// 1-character token.

use std::path::Path;

use rustc_hash::FxHashMap;

use crate::LangError;
use crate::oracle::{MeterOracle, RhymeOracle, Scansion};
use crate::syllables::SyllableEstimator;

/// Monosyllables that are scanned as unstressed when no dictionary entry
/// says otherwise.
const UNSTRESSED_MONOSYLLABLES: &[&str] = &[
    "a", "an", "the", "of", "to", "in", "on", "at", "by", "for", "from", "with",
    "and", "or", "but", "nor", "as", "than", "that", "if", "so", "is", "am",
    "are", "was", "be", "my", "thy", "his", "her", "its", "our", "your",
    "their", "me", "thee", "it", "i", "he", "we", "doth", "hath", "shall",
];

/// Phoneme-level pronunciation lookup.
#[derive(Debug, Clone, Default)]
pub struct PronouncingDictionary {
    entries: FxHashMap<String, Vec<Vec<String>>>,
    tails: FxHashMap<String, Vec<Vec<String>>>,
    fallback_rhyme: SpellingRhymer,
    fallback_meter: SpellingScansion,
}

impl PronouncingDictionary {
    /// Parse CMU-format text. Blank lines and `;;;` comments are skipped;
    /// a word with no phonemes is an error.
    pub fn parse(text: &str, estimator: SyllableEstimator) -> Result<Self, LangError> {
        let mut entries: FxHashMap<String, Vec<Vec<String>>> = FxHashMap::default();

        for (idx, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(";;;") {
                continue;
            }
            let mut parts = line.split_whitespace();
            let Some(head) = parts.next() else {
                continue;
            };
            let phonemes: Vec<String> = parts.map(str::to_string).collect();
            if phonemes.is_empty() {
                return Err(LangError::InvalidDictionaryLine { line: idx + 1 });
            }
            // Alternates are spelled WORD(1), WORD(2), ...
            let word = match head.find('(') {
                Some(paren) if head.ends_with(')') => &head[..paren],
                _ => head,
            };
            entries.entry(word.to_lowercase()).or_default().push(phonemes);
        }

        let tails = entries
            .iter()
            .map(|(word, pronunciations)| {
                let tails = pronunciations.iter().map(|p| rhyme_tail(p)).collect();
                (word.clone(), tails)
            })
            .collect();

        Ok(PronouncingDictionary {
            entries,
            tails,
            fallback_rhyme: SpellingRhymer,
            fallback_meter: SpellingScansion::new(estimator),
        })
    }

    pub fn load(path: &Path, estimator: SyllableEstimator) -> Result<Self, LangError> {
        let text = std::fs::read_to_string(path).map_err(|source| LangError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        PronouncingDictionary::parse(&text, estimator)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All known pronunciations of a word.
    pub fn pronunciations(&self, word: &str) -> Option<&[Vec<String>]> {
        self.entries.get(&word.to_lowercase()).map(Vec::as_slice)
    }

    /// Rhyme tails of every pronunciation of a word, in entry order.
    pub fn rhyme_tails(&self, word: &str) -> Option<&[Vec<String>]> {
        self.tails.get(&word.to_lowercase()).map(Vec::as_slice)
    }

    /// Stress string for one word, from its first pronunciation.
    pub fn word_stress(&self, word: &str) -> String {
        match self.pronunciations(word).and_then(|p| p.first()) {
            Some(phonemes) => phonemes
                .iter()
                .filter_map(|ph| ph.chars().last().filter(char::is_ascii_digit))
                .map(|d| if d == '0' { '0' } else { '1' })
                .collect(),
            None => self.fallback_meter.word_stress(word),
        }
    }
}

impl RhymeOracle for PronouncingDictionary {
    fn rhymes(&self, a: &str, b: &str) -> bool {
        let (Some(ta), Some(tb)) = (self.rhyme_tails(a), self.rhyme_tails(b)) else {
            return self.fallback_rhyme.rhymes(a, b);
        };
        ta.iter()
            .any(|x| !x.is_empty() && tb.iter().any(|y| y == x))
    }
}

impl MeterOracle for PronouncingDictionary {
    fn scan(&self, text: &str) -> Scansion {
        scan_lines(text, |word| self.word_stress(word))
    }
}

/// Phonemes from the last stressed vowel onward, stress digits stripped.
fn rhyme_tail(phonemes: &[String]) -> Vec<String> {
    let normalized: Vec<String> = phonemes
        .iter()
        .map(|ph| if ph == "ER0" { "R".to_string() } else { ph.clone() })
        .collect();
    let is_vowel = |ph: &String| ph.chars().last().is_some_and(|c| c.is_ascii_digit());
    let is_stressed = |ph: &String| is_vowel(ph) && !ph.ends_with('0');

    let start = normalized
        .iter()
        .rposition(is_stressed)
        .or_else(|| normalized.iter().rposition(is_vowel));
    match start {
        Some(start) => normalized[start..]
            .iter()
            .map(|ph| ph.trim_end_matches(|c: char| c.is_ascii_digit()).to_string())
            .collect(),
        None => Vec::new(),
    }
}

/// Split rendered text into lines of cleaned words and scan each line.
fn scan_lines(text: &str, stress_of: impl Fn(&str) -> String) -> Scansion {
    text.lines()
        .map(|line| {
            let stresses: String = line
                .split_whitespace()
                .map(clean_word)
                .filter(|w| !w.is_empty())
                .map(|w| stress_of(&w))
                .collect();
            into_feet(&stresses)
        })
        .filter(|feet| !feet.is_empty())
        .collect()
}

fn clean_word(token: &str) -> String {
    token
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}

fn into_feet(stresses: &str) -> Vec<String> {
    let chars: Vec<char> = stresses.chars().collect();
    chars.chunks(2).map(|foot| foot.iter().collect()).collect()
}

/// Spelling-based rhyme: the final vowel group plus everything after it.
///
/// A silent final `e` after a consonant is skipped when locating the vowel
/// group, so "love" and "above" share the tail "ove".
#[derive(Debug, Clone, Copy, Default)]
pub struct SpellingRhymer;

impl SpellingRhymer {
    pub fn tail(word: &str) -> String {
        let chars: Vec<char> = word.to_lowercase().chars().filter(|c| c.is_alphabetic()).collect();
        let is_vowel = |i: usize| {
            let c = chars[i];
            matches!(c, 'a' | 'e' | 'i' | 'o' | 'u') || (c == 'y' && i > 0)
        };

        let mut search_end = chars.len();
        if search_end > 2 && chars[search_end - 1] == 'e' && !is_vowel(search_end - 2) {
            search_end -= 1;
        }
        let Some(mut start) = (0..search_end).rev().find(|&i| is_vowel(i)) else {
            return String::new();
        };
        while start > 0 && is_vowel(start - 1) {
            start -= 1;
        }
        chars[start..].iter().collect()
    }
}

impl RhymeOracle for SpellingRhymer {
    fn rhymes(&self, a: &str, b: &str) -> bool {
        let tail = SpellingRhymer::tail(a);
        !tail.is_empty() && tail == SpellingRhymer::tail(b)
    }
}

/// Spelling-based scansion: function-word monosyllables unstressed, other
/// monosyllables stressed, longer words stressed on the first syllable.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpellingScansion {
    estimator: SyllableEstimator,
}

impl SpellingScansion {
    pub fn new(estimator: SyllableEstimator) -> Self {
        SpellingScansion { estimator }
    }

    pub fn word_stress(&self, word: &str) -> String {
        let syllables = self.estimator.estimate(word) as usize;
        if syllables == 1 {
            let unstressed = UNSTRESSED_MONOSYLLABLES.contains(&word.to_lowercase().as_str());
            return if unstressed { "0" } else { "1" }.to_string();
        }
        let mut stress = String::with_capacity(syllables);
        stress.push('1');
        stress.extend(std::iter::repeat_n('0', syllables - 1));
        stress
    }
}

impl MeterOracle for SpellingScansion {
    fn scan(&self, text: &str) -> Scansion {
        scan_lines(text, |word| self.word_stress(word))
    }
}
