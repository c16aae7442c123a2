// Positive/negative tone word lists.
//
// Each list is one word per line with no further parsing beyond trimming
// and lowercasing. The lists are loaded once per run and only read after
// that. A word may appear in both lists; the classifier counts it both ways.

use std::path::Path;

use rustc_hash::FxHashSet;

use crate::LangError;

#[derive(Debug, Clone, Default)]
pub struct ToneLexicon {
    positives: FxHashSet<String>,
    negatives: FxHashSet<String>,
}

impl ToneLexicon {
    pub fn new<P, N>(positives: P, negatives: N) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        N: IntoIterator,
        N::Item: Into<String>,
    {
        ToneLexicon {
            positives: positives.into_iter().map(Into::into).collect(),
            negatives: negatives.into_iter().map(Into::into).collect(),
        }
    }

    /// Build from the text of the two list files. An empty list is an error.
    pub fn from_lists(
        positives: &str,
        positives_name: &str,
        negatives: &str,
        negatives_name: &str,
    ) -> Result<Self, LangError> {
        Ok(ToneLexicon {
            positives: parse_list(positives, positives_name)?,
            negatives: parse_list(negatives, negatives_name)?,
        })
    }

    pub fn load(positives: &Path, negatives: &Path) -> Result<Self, LangError> {
        let read = |path: &Path| {
            std::fs::read_to_string(path).map_err(|source| LangError::Io {
                path: path.to_path_buf(),
                source,
            })
        };
        ToneLexicon::from_lists(
            &read(positives)?,
            &positives.display().to_string(),
            &read(negatives)?,
            &negatives.display().to_string(),
        )
    }

    pub fn is_positive(&self, word: &str) -> bool {
        self.positives.contains(word)
    }

    pub fn is_negative(&self, word: &str) -> bool {
        self.negatives.contains(word)
    }

    /// (positive count, negative count)
    pub fn sizes(&self) -> (usize, usize) {
        (self.positives.len(), self.negatives.len())
    }
}

fn parse_list(text: &str, name: &str) -> Result<FxHashSet<String>, LangError> {
    let words: FxHashSet<String> = text
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.is_empty())
        .collect();
    if words.is_empty() {
        return Err(LangError::EmptyLexicon { source_name: name.to_string() });
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_lists() {
        let lexicon = ToneLexicon::from_lists("joy\nLove\n\n", "pos", "grief\n", "neg").unwrap();
        assert_eq!(lexicon.sizes(), (2, 1));
        assert!(lexicon.is_positive("love"));
        assert!(lexicon.is_negative("grief"));
        assert!(!lexicon.is_negative("joy"));
    }

    #[test]
    fn test_empty_list_fails() {
        let err = ToneLexicon::from_lists("joy\n", "pos", "\n\n", "negatives.txt").unwrap_err();
        assert!(matches!(err, LangError::EmptyLexicon { .. }));
        assert!(err.to_string().contains("negatives.txt"));
    }

    #[test]
    fn test_overlap_allowed() {
        let lexicon = ToneLexicon::new(["bittersweet"], ["bittersweet"]);
        assert!(lexicon.is_positive("bittersweet"));
        assert!(lexicon.is_negative("bittersweet"));
    }
}
