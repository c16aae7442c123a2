// The inspiring corpus and the cyclic traversal cursor.
//
// The corpus is an ordered `Vec<Word>` built once per run from plain text
// (lines of whitespace-separated tokens) and never mutated afterwards, so
// it can be shared freely across candidate generators, including across
// rayon worker threads.
//
// Traversal state lives in `Cursor`, a small `Copy` value owned by exactly
// one sonnet generation. Advancing returns a new cursor rather than
// mutating shared state; the generator threads it through its loop.
//
// Token normalization: a token whose last character is one of
// `. , : ; ? ! '` loses that character; the remainder is lowercased.
// Tokens that normalize to the empty string (a lone "," for instance) are
// dropped, since an empty word has no text to render or tag.

use std::path::Path;

use poetry_slam_prng::SlamRng;

use crate::LangError;
use crate::oracle::{MemoTagger, PartOfSpeechOracle};
use crate::syllables::SyllableEstimator;
use crate::types::{PosTag, Word};

/// Trailing characters stripped from corpus tokens.
pub const END_CHARS: &[char] = &['.', ',', ':', ';', '?', '!', '\''];

/// Split corpus text into normalized word texts, in order.
pub fn tokenize_corpus(text: &str) -> Vec<String> {
    text.lines()
        .flat_map(str::split_whitespace)
        .filter_map(normalize_token)
        .collect()
}

fn normalize_token(token: &str) -> Option<String> {
    let lowered = token.to_lowercase();
    let trimmed = match lowered.chars().last() {
        Some(c) if END_CHARS.contains(&c) => &lowered[..lowered.len() - c.len_utf8()],
        _ => lowered.as_str(),
    };
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Immutable, ordered sequence of tagged words.
#[derive(Debug, Clone)]
pub struct Corpus {
    words: Vec<Word>,
}

impl Corpus {
    /// Build a corpus from already-constructed words.
    pub fn from_words(words: Vec<Word>) -> Result<Self, LangError> {
        if words.is_empty() {
            return Err(LangError::EmptyCorpus { source_name: "<words>".to_string() });
        }
        Ok(Corpus { words })
    }

    /// Build a corpus from raw text: tokenize, estimate syllables, tag.
    ///
    /// Tagging goes through a `MemoTagger`, so each distinct word text is
    /// handed to the oracle once no matter how often it occurs.
    pub fn from_text(
        text: &str,
        source_name: &str,
        tagger: &dyn PartOfSpeechOracle,
        estimator: SyllableEstimator,
    ) -> Result<Self, LangError> {
        let tokens = tokenize_corpus(text);
        if tokens.is_empty() {
            return Err(LangError::EmptyCorpus { source_name: source_name.to_string() });
        }

        let memo = MemoTagger::new(tagger);
        let words = tokens
            .into_iter()
            .map(|text| {
                let syllables = estimator.estimate(&text);
                let pos = memo.tag(&text);
                Word::new(text, syllables, pos)
            })
            .collect();

        Ok(Corpus { words })
    }

    /// Read and build a corpus from a file. Fails on I/O errors or when the
    /// file yields no words.
    pub fn load(
        path: &Path,
        tagger: &dyn PartOfSpeechOracle,
        estimator: SyllableEstimator,
    ) -> Result<Self, LangError> {
        let text = std::fs::read_to_string(path).map_err(|source| LangError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Corpus::from_text(&text, &path.display().to_string(), tagger, estimator)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a constructed corpus; kept for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// The word under the cursor.
    pub fn at(&self, cursor: Cursor) -> &Word {
        &self.words[cursor.position % self.words.len()]
    }

    /// The tag of the word under the cursor.
    pub fn tag_at(&self, cursor: Cursor) -> &PosTag {
        &self.at(cursor).pos
    }

    /// Draw a uniformly random word.
    pub fn random_word(&self, rng: &mut SlamRng) -> &Word {
        &self.words[rng.index(self.words.len())]
    }
}

/// Position in the corpus, wrapping modulo the corpus length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    position: usize,
}

impl Cursor {
    pub fn new(position: usize) -> Self {
        Cursor { position }
    }

    /// A cursor at a uniformly random corpus position.
    pub fn random(corpus: &Corpus, rng: &mut SlamRng) -> Self {
        Cursor::new(rng.index(corpus.len()))
    }

    pub fn position(self) -> usize {
        self.position
    }

    /// The next position, wrapping to 0 past the end of the corpus.
    #[must_use]
    pub fn advanced(self, corpus: &Corpus) -> Self {
        Cursor::new((self.position + 1) % corpus.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn tag_by_length(word: &str) -> PosTag {
        if word.len() > 3 { PosTag::from("NN") } else { PosTag::from("DT") }
    }

    #[test]
    fn test_tokenize_strips_one_trailing_char_and_lowercases() {
        let tokens = tokenize_corpus("Shall I compare thee to a summer's day?\nThou art more lovely;");
        assert_eq!(
            tokens,
            vec!["shall", "i", "compare", "thee", "to", "a", "summer's", "day", "thou", "art", "more", "lovely"]
        );
    }

    #[test]
    fn test_tokenize_only_strips_last_char() {
        // Only the final character is considered, and only once.
        assert_eq!(tokenize_corpus("end.'"), vec!["end."]);
        assert_eq!(tokenize_corpus("'tis"), vec!["'tis"]);
    }

    #[test]
    fn test_tokenize_drops_bare_punctuation() {
        assert_eq!(tokenize_corpus("love , ! hate"), vec!["love", "hate"]);
    }

    #[test]
    fn test_from_text_estimates_and_tags() {
        let corpus = Corpus::from_text(
            "The beauty of love.",
            "inline",
            &tag_by_length,
            SyllableEstimator::default(),
        )
        .unwrap();
        assert_eq!(corpus.len(), 4);
        let beauty = &corpus.words()[1];
        assert_eq!(beauty.text, "beauty");
        assert_eq!(beauty.syllables, 2);
        assert_eq!(beauty.pos, PosTag::from("NN"));
        assert_eq!(corpus.words()[2].pos, PosTag::from("DT"));
    }

    #[test]
    fn test_from_text_tags_each_distinct_word_once() {
        let calls = Cell::new(0);
        let counting = |word: &str| {
            calls.set(calls.get() + 1);
            tag_by_length(word)
        };
        let corpus = Corpus::from_text(
            "love love love and love",
            "inline",
            &counting,
            SyllableEstimator::default(),
        )
        .unwrap();
        assert_eq!(corpus.len(), 5);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_empty_text_fails_loudly() {
        let err = Corpus::from_text(" \n , \n", "blank.txt", &tag_by_length, SyllableEstimator::default())
            .unwrap_err();
        assert!(matches!(err, LangError::EmptyCorpus { .. }));
        assert!(err.to_string().contains("blank.txt"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Corpus::load(
            Path::new("/definitely/not/here/sonnets.txt"),
            &tag_by_length,
            SyllableEstimator::default(),
        )
        .unwrap_err();
        assert!(matches!(err, LangError::Io { .. }));
    }

    #[test]
    fn test_cursor_wraps() {
        let corpus = Corpus::from_text("a b c", "inline", &tag_by_length, SyllableEstimator::default())
            .unwrap();
        let cursor = Cursor::new(2);
        let next = cursor.advanced(&corpus);
        assert_eq!(next.position(), 0);
        assert_eq!(corpus.at(next).text, "a");
        // The original cursor is untouched.
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_random_cursor_in_range() {
        let corpus = Corpus::from_text("a b c d e", "inline", &tag_by_length, SyllableEstimator::default())
            .unwrap();
        let mut rng = SlamRng::new(11);
        for _ in 0..200 {
            assert!(Cursor::random(&corpus, &mut rng).position() < corpus.len());
        }
    }
}
