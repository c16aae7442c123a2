// Core lexical types: part-of-speech tags and corpus words.
//
// `Word` is the unit every other part of the workspace trades in: the corpus
// is a `Vec<Word>`, a sonnet line is a `Vec<Word>`, and the scorer reads the
// syllable counts straight off the words. A word is immutable once built;
// its syllable count is computed exactly once, from its text, when the
// corpus is constructed (see `syllables.rs`), and its tag comes from the
// memoized tagger during the same build (see `oracle.rs`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A grammatical tag as produced by a `PartOfSpeechOracle`.
///
/// Tags are opaque strings (the built-in tagger emits Penn Treebank style
/// tags such as `NN`, `VBD`, `PRP$`); the generator only ever compares
/// them for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PosTag(String);

impl PosTag {
    pub fn new(tag: impl Into<String>) -> Self {
        PosTag(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PosTag {
    fn from(tag: &str) -> Self {
        PosTag::new(tag)
    }
}

/// A word from the inspiring corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    /// Lowercased text with trailing punctuation stripped.
    pub text: String,
    /// Heuristic syllable count, always >= 1.
    pub syllables: u32,
    /// Grammatical tag for the word taken out of context.
    pub pos: PosTag,
}

impl Word {
    pub fn new(text: impl Into<String>, syllables: u32, pos: PosTag) -> Self {
        Word {
            text: text.into(),
            syllables,
            pos,
        }
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} : {} : {} syllables",
            self.text, self.pos, self.syllables
        )
    }
}
