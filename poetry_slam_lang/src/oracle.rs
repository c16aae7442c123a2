// Linguistic oracle seams: part-of-speech tagging, rhyme testing, scansion.
//
// The generator and scorer treat all three as black boxes behind these
// traits. Built-in implementations live in `tagger.rs` (tagging) and
// `pronounce.rs` (rhyme + meter); tests usually pass closures, which get
// the traits through the blanket impls below.
//
// Rhyme and meter oracles are `Sync` because the selector may generate
// and score candidate sonnets on rayon workers. Tagging happens only while
// the corpus is built (single-threaded), so the tagger trait carries no
// such bound.

use std::cell::RefCell;

use rustc_hash::FxHashMap;

use crate::types::PosTag;

/// Assigns a grammatical tag to a single word taken out of context.
pub trait PartOfSpeechOracle {
    fn tag(&self, word: &str) -> PosTag;
}

impl<F> PartOfSpeechOracle for F
where
    F: Fn(&str) -> PosTag,
{
    fn tag(&self, word: &str) -> PosTag {
        self(word)
    }
}

/// Decides whether two words rhyme.
pub trait RhymeOracle: Sync {
    fn rhymes(&self, a: &str, b: &str) -> bool;
}

impl<F> RhymeOracle for F
where
    F: Fn(&str, &str) -> bool + Sync,
{
    fn rhymes(&self, a: &str, b: &str) -> bool {
        self(a, b)
    }
}

/// Per-line stress tokens, one 2-character token (`"01"`, `"10"`, ...) per foot.
pub type Scansion = Vec<Vec<String>>;

/// Scans rendered sonnet text into per-line metrical feet.
pub trait MeterOracle: Sync {
    fn scan(&self, text: &str) -> Scansion;
}

impl<F> MeterOracle for F
where
    F: Fn(&str) -> Scansion + Sync,
{
    fn scan(&self, text: &str) -> Scansion {
        self(text)
    }
}

/// Memoizing wrapper around a tagger, keyed by word text.
///
/// Scoped to one corpus build: the table is dropped with the wrapper.
pub struct MemoTagger<'a> {
    inner: &'a dyn PartOfSpeechOracle,
    cache: RefCell<FxHashMap<String, PosTag>>,
}

impl<'a> MemoTagger<'a> {
    pub fn new(inner: &'a dyn PartOfSpeechOracle) -> Self {
        MemoTagger {
            inner,
            cache: RefCell::new(FxHashMap::default()),
        }
    }

    /// Number of distinct words tagged so far.
    pub fn cached(&self) -> usize {
        self.cache.borrow().len()
    }
}

impl PartOfSpeechOracle for MemoTagger<'_> {
    fn tag(&self, word: &str) -> PosTag {
        if let Some(tag) = self.cache.borrow().get(word) {
            return tag.clone();
        }
        let tag = self.inner.tag(word);
        self.cache.borrow_mut().insert(word.to_string(), tag.clone());
        tag
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_closures_are_oracles() {
        let rhymer = |a: &str, b: &str| a.ends_with('y') && b.ends_with('y');
        assert!(RhymeOracle::rhymes(&rhymer, "day", "may"));
        assert!(!RhymeOracle::rhymes(&rhymer, "day", "night"));

        let scanner = |text: &str| text.lines().map(|_| vec!["01".to_string()]).collect::<Scansion>();
        assert_eq!(scanner.scan("a\nb").len(), 2);
    }

    #[test]
    fn test_memo_tagger_calls_inner_once_per_word() {
        let calls = Cell::new(0);
        let inner = |_: &str| {
            calls.set(calls.get() + 1);
            PosTag::from("NN")
        };
        let memo = MemoTagger::new(&inner);
        for _ in 0..5 {
            assert_eq!(memo.tag("rose"), PosTag::from("NN"));
        }
        memo.tag("thorn");
        assert_eq!(calls.get(), 2);
        assert_eq!(memo.cached(), 2);
    }
}
