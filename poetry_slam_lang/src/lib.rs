// Lexical layer for the Poetry Slam sonnet generator.
//
// Turns source text into the tagged, syllable-counted corpus the generator
// samples from, and defines the linguistic oracles the generator and
// scorer consult. No generation logic lives here.
//
// Architecture:
// - `types.rs`: `Word` and `PosTag`
// - `syllables.rs`: `SyllableEstimator`, the vowel-group syllable heuristic
// - `corpus.rs`: corpus tokenization, the immutable `Corpus`, the cyclic `Cursor`
// - `oracle.rs`: `PartOfSpeechOracle` / `RhymeOracle` / `MeterOracle` traits
//   and the memoizing tagger wrapper
// - `tagger.rs`: built-in closed-class + suffix tagger with JSON overrides
// - `pronounce.rs`: CMU-format pronouncing dictionary (rhyme + meter) and
//   spelling-based fallbacks
// - `tone.rs`: positive/negative tone word lists
// - `lib.rs` (this file): `LangError` and the embedded default data
//
// The default inspiring set and tone lists are embedded at compile time
// from `data/` with `include_str!`, so the generator runs with no files.
//
// Determinism constraint: nothing here may consume randomness except
// through `poetry_slam_prng::SlamRng`, and iteration over hash containers
// must never influence output order.

pub mod corpus;
pub mod oracle;
pub mod pronounce;
pub mod syllables;
pub mod tagger;
pub mod tone;
pub mod types;

pub use corpus::{Corpus, Cursor};
pub use oracle::{MemoTagger, MeterOracle, PartOfSpeechOracle, RhymeOracle, Scansion};
pub use pronounce::{PronouncingDictionary, SpellingRhymer, SpellingScansion};
pub use syllables::{LeSuffixRule, SyllableEstimator};
pub use tagger::{HeuristicTagger, TagLexicon};
pub use tone::ToneLexicon;
pub use types::{PosTag, Word};

use std::path::PathBuf;

/// Errors raised while loading corpus, lexicon, tag, or dictionary data.
#[derive(Debug, thiserror::Error)]
pub enum LangError {
    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("corpus {source_name} contains no words")]
    EmptyCorpus { source_name: String },
    #[error("tone lexicon {source_name} contains no words")]
    EmptyLexicon { source_name: String },
    #[error("invalid tag lexicon: {0}")]
    InvalidTagLexicon(serde_json::Error),
    #[error("pronouncing dictionary line {line} has a word but no phonemes")]
    InvalidDictionaryLine { line: usize },
}

/// Text of the embedded inspiring set.
pub const DEFAULT_CORPUS: &str = include_str!("../../data/sonnets.txt");
const DEFAULT_POSITIVES: &str = include_str!("../../data/positives.txt");
const DEFAULT_NEGATIVES: &str = include_str!("../../data/negatives.txt");

/// Build the embedded inspiring set with the given tagger and estimator.
pub fn default_corpus(
    tagger: &dyn PartOfSpeechOracle,
    estimator: SyllableEstimator,
) -> Result<Corpus, LangError> {
    Corpus::from_text(DEFAULT_CORPUS, "embedded sonnets.txt", tagger, estimator)
}

/// Load the embedded tone word lists.
///
/// Panics if the embedded lists are empty (should never happen in a
/// released build).
pub fn default_tone_lexicon() -> ToneLexicon {
    ToneLexicon::from_lists(
        DEFAULT_POSITIVES,
        "embedded positives.txt",
        DEFAULT_NEGATIVES,
        "embedded negatives.txt",
    )
    .expect("embedded tone lists are empty")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_corpus_loads() {
        let corpus = default_corpus(&HeuristicTagger::default(), SyllableEstimator::default()).unwrap();
        assert!(
            corpus.len() >= 500,
            "Expected >= 500 words, got {}",
            corpus.len()
        );
        assert!(corpus.words().iter().all(|w| w.syllables >= 1));
        assert!(corpus.words().iter().all(|w| w.text == w.text.to_lowercase()));
    }

    #[test]
    fn test_default_corpus_has_one_syllable_words_for_every_budget() {
        let corpus = default_corpus(&HeuristicTagger::default(), SyllableEstimator::default()).unwrap();
        let monosyllables = corpus.words().iter().filter(|w| w.syllables == 1).count();
        assert!(monosyllables > corpus.len() / 2);
    }

    #[test]
    fn test_default_tone_lexicon_loads() {
        let lexicon = default_tone_lexicon();
        let (pos, neg) = lexicon.sizes();
        assert!(pos >= 30 && neg >= 30, "got {pos} positives, {neg} negatives");
        assert!(lexicon.is_positive("love"));
        assert!(lexicon.is_negative("death"));
    }

    #[test]
    fn test_error_messages_name_the_source() {
        let err = LangError::EmptyCorpus { source_name: "sonnets.txt".to_string() };
        assert_eq!(err.to_string(), "corpus sonnets.txt contains no words");
    }
}
