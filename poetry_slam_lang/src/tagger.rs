// Built-in part-of-speech tagger.
//
// A lightweight stand-in for a statistical tagger: a closed-class table for
// the function words that dominate verse (including the archaic forms the
// sonnets lean on: thee, thou, thy, hath, doth), then suffix rules, then a
// noun default. Tags follow Penn Treebank naming.
//
// A `TagLexicon` (JSON object of word -> tag) can override any of this.
// That is how a run plugs in tags produced by an external tagger.

use std::path::Path;

use rustc_hash::FxHashMap;

use crate::LangError;
use crate::oracle::PartOfSpeechOracle;
use crate::types::PosTag;

/// Function words and their tags.
const CLOSED_CLASS: &[(&str, &str)] = &[
    // Determiners
    ("the", "DT"), ("a", "DT"), ("an", "DT"), ("this", "DT"), ("that", "DT"),
    ("these", "DT"), ("those", "DT"), ("each", "DT"), ("every", "DT"),
    ("no", "DT"), ("all", "DT"), ("some", "DT"), ("any", "DT"),
    // Personal pronouns
    ("i", "PRP"), ("me", "PRP"), ("you", "PRP"), ("thou", "PRP"), ("thee", "PRP"),
    ("ye", "PRP"), ("he", "PRP"), ("him", "PRP"), ("she", "PRP"), ("her", "PRP$"),
    ("it", "PRP"), ("we", "PRP"), ("us", "PRP"), ("they", "PRP"), ("them", "PRP"),
    ("myself", "PRP"), ("thyself", "PRP"), ("itself", "PRP"),
    // Possessives
    ("my", "PRP$"), ("mine", "PRP$"), ("thy", "PRP$"), ("thine", "PRP$"),
    ("your", "PRP$"), ("his", "PRP$"), ("its", "PRP$"), ("our", "PRP$"),
    ("their", "PRP$"),
    // Prepositions and subordinators
    ("of", "IN"), ("in", "IN"), ("on", "IN"), ("at", "IN"), ("by", "IN"),
    ("with", "IN"), ("from", "IN"), ("for", "IN"), ("upon", "IN"), ("than", "IN"),
    ("as", "IN"), ("if", "IN"), ("since", "IN"), ("though", "IN"), ("against", "IN"),
    ("within", "IN"), ("without", "IN"), ("through", "IN"), ("like", "IN"),
    ("o'er", "IN"), ("till", "IN"), ("until", "IN"), ("because", "IN"),
    ("to", "TO"),
    // Coordinators
    ("and", "CC"), ("or", "CC"), ("but", "CC"), ("nor", "CC"), ("yet", "CC"),
    // Modals
    ("shall", "MD"), ("will", "MD"), ("can", "MD"), ("may", "MD"), ("must", "MD"),
    ("should", "MD"), ("would", "MD"), ("could", "MD"), ("might", "MD"),
    ("canst", "MD"), ("wilt", "MD"), ("shalt", "MD"), ("mayst", "MD"),
    // Auxiliaries and common verbs
    ("is", "VBZ"), ("are", "VBP"), ("am", "VBP"), ("art", "VBP"), ("was", "VBD"),
    ("were", "VBD"), ("be", "VB"), ("been", "VBN"), ("being", "VBG"),
    ("hath", "VBZ"), ("doth", "VBZ"), ("has", "VBZ"), ("have", "VBP"),
    ("had", "VBD"), ("do", "VBP"), ("does", "VBZ"), ("did", "VBD"),
    ("see", "VB"), ("give", "VB"), ("make", "VB"), ("take", "VB"), ("let", "VB"),
    ("say", "VB"), ("know", "VB"), ("live", "VB"), ("die", "VB"),
    // Adverbs
    ("not", "RB"), ("so", "RB"), ("now", "RB"), ("then", "RB"), ("too", "RB"),
    ("more", "RBR"), ("most", "RBS"), ("ever", "RB"), ("never", "RB"),
    ("still", "RB"), ("here", "RB"), ("there", "RB"), ("thus", "RB"),
    ("even", "RB"), ("once", "RB"), ("again", "RB"),
    // Wh-words
    ("who", "WP"), ("whom", "WP"), ("what", "WP"), ("which", "WDT"),
    ("whose", "WP$"), ("when", "WRB"), ("where", "WRB"), ("why", "WRB"),
    ("how", "WRB"),
    // Odds and ends
    ("o", "UH"), ("oh", "UH"),
];

/// Suffix rules, checked in order; first match wins.
const SUFFIX_RULES: &[(&str, &str)] = &[
    ("'s", "NN"),
    ("ness", "NN"),
    ("ment", "NN"),
    ("tion", "NN"),
    ("ity", "NN"),
    ("ship", "NN"),
    ("hood", "NN"),
    ("ly", "RB"),
    ("ing", "VBG"),
    ("eth", "VBZ"),
    ("est", "JJS"),
    ("ed", "VBD"),
    ("ous", "JJ"),
    ("ful", "JJ"),
    ("less", "JJ"),
    ("ive", "JJ"),
    ("able", "JJ"),
    ("ible", "JJ"),
    ("ss", "NN"),
    ("s", "NNS"),
];

/// Word -> tag overrides loaded from JSON.
#[derive(Debug, Clone, Default)]
pub struct TagLexicon {
    tags: FxHashMap<String, PosTag>,
}

impl TagLexicon {
    /// Parse a JSON object mapping lowercase words to tags.
    pub fn from_json(json: &str) -> Result<Self, LangError> {
        let raw: FxHashMap<String, String> =
            serde_json::from_str(json).map_err(LangError::InvalidTagLexicon)?;
        let tags = raw
            .into_iter()
            .map(|(word, tag)| (word.to_lowercase(), PosTag::new(tag)))
            .collect();
        Ok(TagLexicon { tags })
    }

    pub fn load(path: &Path) -> Result<Self, LangError> {
        let json = std::fs::read_to_string(path).map_err(|source| LangError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        TagLexicon::from_json(&json)
    }

    pub fn get(&self, word: &str) -> Option<&PosTag> {
        self.tags.get(word)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// Closed-class table + suffix rules, with optional lexicon overrides.
#[derive(Debug, Clone)]
pub struct HeuristicTagger {
    closed: FxHashMap<&'static str, &'static str>,
    overrides: TagLexicon,
}

impl Default for HeuristicTagger {
    fn default() -> Self {
        HeuristicTagger::new(TagLexicon::default())
    }
}

impl HeuristicTagger {
    pub fn new(overrides: TagLexicon) -> Self {
        let closed = CLOSED_CLASS.iter().copied().collect();
        HeuristicTagger { closed, overrides }
    }
}

impl PartOfSpeechOracle for HeuristicTagger {
    fn tag(&self, word: &str) -> PosTag {
        let word = word.to_lowercase();
        if let Some(tag) = self.overrides.get(&word) {
            return tag.clone();
        }
        if let Some(tag) = self.closed.get(word.as_str()) {
            return PosTag::from(*tag);
        }
        if word.chars().all(|c| c.is_ascii_digit()) && !word.is_empty() {
            return PosTag::from("CD");
        }
        // Suffix rules need a stem left over, so "is" is not a plural of "i".
        for (suffix, tag) in SUFFIX_RULES {
            if word.len() > suffix.len() + 1 && word.ends_with(suffix) {
                return PosTag::from(*tag);
            }
        }
        PosTag::from("NN")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(word: &str) -> String {
        HeuristicTagger::default().tag(word).as_str().to_string()
    }

    #[test]
    fn test_closed_class_words() {
        assert_eq!(tag("the"), "DT");
        assert_eq!(tag("thy"), "PRP$");
        assert_eq!(tag("Thou"), "PRP");
        assert_eq!(tag("hath"), "VBZ");
        assert_eq!(tag("shall"), "MD");
        assert_eq!(tag("to"), "TO");
    }

    #[test]
    fn test_suffix_rules() {
        assert_eq!(tag("sweetly"), "RB");
        assert_eq!(tag("singing"), "VBG");
        assert_eq!(tag("loved"), "VBD");
        assert_eq!(tag("fairest"), "JJS");
        assert_eq!(tag("roses"), "NNS");
        assert_eq!(tag("glass"), "NN");
        assert_eq!(tag("summer's"), "NN");
        assert_eq!(tag("beauteous"), "JJ");
    }

    #[test]
    fn test_default_is_noun() {
        assert_eq!(tag("rose"), "NN");
        assert_eq!(tag("eye"), "NN");
    }

    #[test]
    fn test_numbers() {
        assert_eq!(tag("14"), "CD");
    }

    #[test]
    fn test_overrides_win() {
        let lexicon = TagLexicon::from_json(r#"{"Rose": "VBD", "the": "XX"}"#).unwrap();
        assert_eq!(lexicon.len(), 2);
        let tagger = HeuristicTagger::new(lexicon);
        assert_eq!(tagger.tag("rose").as_str(), "VBD");
        assert_eq!(tagger.tag("the").as_str(), "XX");
        assert_eq!(tagger.tag("thee").as_str(), "PRP");
    }

    #[test]
    fn test_malformed_lexicon_is_error() {
        let err = TagLexicon::from_json("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, LangError::InvalidTagLexicon(_)));
    }
}
