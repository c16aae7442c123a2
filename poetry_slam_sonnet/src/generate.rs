// Constrained sampling of lines and sonnets.
//
// A sonnet is built line by line. Within a line the generator repeatedly:
// 1. reads the expected tag from the word under the cursor,
// 2. draws uniformly random corpus words until one carries that tag,
// 3. advances the cursor one position (so the *next* expected tag follows
//    corpus order, not the sampled word),
// 4. keeps the word if its syllables fit the remaining budget.
// It stops when the budget is exactly spent. Every draw, tag-rejected or
// not, counts against `max_draws_per_line`; running out is
// `SlamError::GenerationExhausted` rather than a hang.
//
// The cursor starts at a random corpus position once per sonnet and is
// threaded through all fourteen lines, so part-of-speech continuity
// carries across line breaks.
//
// Lines with a rhyme partner (see `sonnet::rhyme_partner`) then get their
// last word reconsidered: kept if it already rhymes with the partner's last
// word, otherwise replaced by the first random corpus word (any tag) that
// rhymes and has the same syllable count, within `rhyme_attempts` draws.
// If none turns up, the last same-sized draw is kept anyway (or the
// original word, if no draw was the right size), which lowers the rhyme
// score but keeps the line at its syllable budget.

use poetry_slam_lang::{Corpus, Cursor, RhymeOracle, Word};
use poetry_slam_prng::SlamRng;
use tracing::{debug, warn};

use crate::config::SlamConfig;
use crate::error::SlamError;
use crate::sonnet::{LINE_COUNT, Line, Sonnet, rhyme_partner};

/// How a rhyme-constrained line's last word was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RhymeOutcome {
    /// The sampled last word already rhymed.
    Kept,
    /// A rhyming replacement was found after this many draws.
    Replaced { attempts: u32 },
    /// No rhyme found; a non-rhyming word of the right size stays.
    Exhausted,
}

/// Generates sonnets from a shared, read-only corpus.
///
/// Holds no mutable state: each `generate` call owns its cursor and
/// borrows its RNG, so one generator can serve many threads.
pub struct SonnetGenerator<'a> {
    corpus: &'a Corpus,
    rhymer: &'a dyn RhymeOracle,
    syllables_per_line: u32,
    rhyme_attempts: u32,
    max_draws_per_line: u32,
}

impl<'a> SonnetGenerator<'a> {
    pub fn new(corpus: &'a Corpus, rhymer: &'a dyn RhymeOracle, config: &SlamConfig) -> Self {
        SonnetGenerator {
            corpus,
            rhymer,
            syllables_per_line: config.syllables_per_line,
            rhyme_attempts: config.rhyme_attempts,
            max_draws_per_line: config.max_draws_per_line,
        }
    }

    /// Build one complete sonnet.
    pub fn generate(&self, rng: &mut SlamRng) -> Result<Sonnet, SlamError> {
        let mut cursor = Cursor::random(self.corpus, rng);
        let mut lines: [Line; LINE_COUNT] = std::array::from_fn(|_| Line::new(Vec::new()));

        for index in 0..LINE_COUNT {
            let (line, next) = self.build_line(index, cursor, rng)?;
            cursor = next;

            let line = match rhyme_partner(index).and_then(|p| lines[p].last_word()) {
                Some(partner) => {
                    let partner = partner.text.clone();
                    let (line, outcome) = self.rhyme_line(line, &partner, rng);
                    debug!(line = index, %partner, ?outcome, "rhyme settled");
                    if outcome == RhymeOutcome::Exhausted {
                        warn!(line = index, %partner, attempts = self.rhyme_attempts, "no rhyme found");
                    }
                    line
                }
                None => line,
            };
            lines[index] = line;
        }

        Ok(Sonnet::new(lines))
    }

    /// Build one line of exactly `syllables_per_line` syllables starting at
    /// `cursor`. Returns the line and the advanced cursor.
    pub fn build_line(
        &self,
        index: usize,
        mut cursor: Cursor,
        rng: &mut SlamRng,
    ) -> Result<(Line, Cursor), SlamError> {
        let mut words: Vec<Word> = Vec::new();
        let mut budget = self.syllables_per_line;
        let mut draws: u32 = 0;

        while budget > 0 {
            let expected = self.corpus.tag_at(cursor);
            let word = loop {
                if draws >= self.max_draws_per_line {
                    return Err(SlamError::GenerationExhausted { line: index, attempts: draws });
                }
                draws += 1;
                let candidate = self.corpus.random_word(rng);
                if candidate.pos == *expected {
                    break candidate;
                }
            };

            cursor = cursor.advanced(self.corpus);

            if word.syllables <= budget {
                budget -= word.syllables;
                words.push(word.clone());
            }
        }

        debug!(line = index, draws, words = words.len(), "line built");
        Ok((Line::new(words), cursor))
    }

    /// Make the line's last word rhyme with `partner` if possible.
    pub fn rhyme_line(&self, line: Line, partner: &str, rng: &mut SlamRng) -> (Line, RhymeOutcome) {
        let mut words = line.into_words();
        let Some(removed) = words.pop() else {
            return (Line::new(words), RhymeOutcome::Exhausted);
        };

        if self.rhymer.rhymes(partner, &removed.text) {
            words.push(removed);
            return (Line::new(words), RhymeOutcome::Kept);
        }

        let mut fallback: Option<&Word> = None;
        for attempt in 1..=self.rhyme_attempts {
            let candidate = self.corpus.random_word(rng);
            if candidate.syllables != removed.syllables {
                continue;
            }
            if self.rhymer.rhymes(partner, &candidate.text) {
                words.push(candidate.clone());
                return (Line::new(words), RhymeOutcome::Replaced { attempts: attempt });
            }
            fallback = Some(candidate);
        }

        words.push(fallback.cloned().unwrap_or(removed));
        (Line::new(words), RhymeOutcome::Exhausted)
    }
}
