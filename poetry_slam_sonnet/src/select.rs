// Candidate generation and best-of-N selection.
//
// The selector forks one RNG per candidate from the run RNG before any
// generation starts, so candidate i sees the same random stream whether
// candidates are generated one after another or on the rayon pool. Results
// are collected in candidate order and scored sequentially; the winner is
// therefore a pure function of the seed and the config.
//
// The winner is the first candidate whose total strictly exceeds every
// earlier best, starting from a baseline of 0. A run where nothing scores
// above 0 is `SlamError::NoQualifyingSonnet`. Candidates that fail to
// generate are logged and skipped; only when every candidate fails is the
// last failure returned.

use poetry_slam_prng::SlamRng;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::config::SlamConfig;
use crate::error::SlamError;
use crate::generate::SonnetGenerator;
use crate::scoring::{ScoreBreakdown, Scorer};
use crate::sonnet::Sonnet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredSonnet {
    pub sonnet: Sonnet,
    pub score: ScoreBreakdown,
}

/// The outcome of one selection run.
#[derive(Debug, Clone)]
pub struct Selection {
    pub winner: ScoredSonnet,
    /// Scores of every candidate that generated, in candidate order.
    pub candidates: Vec<ScoreBreakdown>,
}

/// Highest strictly-positive total; ties go to the earlier candidate.
pub fn pick_winner(scored: impl IntoIterator<Item = ScoredSonnet>) -> Option<ScoredSonnet> {
    let mut best: Option<ScoredSonnet> = None;
    let mut best_total = 0;
    for candidate in scored {
        if candidate.score.total > best_total {
            best_total = candidate.score.total;
            best = Some(candidate);
        }
    }
    best
}

pub struct Selector<'a> {
    generator: SonnetGenerator<'a>,
    scorer: Scorer<'a>,
    candidate_count: usize,
    parallel: bool,
}

impl<'a> Selector<'a> {
    pub fn new(generator: SonnetGenerator<'a>, scorer: Scorer<'a>, config: &SlamConfig) -> Self {
        Selector {
            generator,
            scorer,
            candidate_count: config.candidate_count,
            parallel: config.parallel,
        }
    }

    /// Generate the candidates, score them, and keep the best.
    pub fn run(&self, rng: &mut SlamRng) -> Result<Selection, SlamError> {
        let forks: Vec<SlamRng> = (0..self.candidate_count).map(|_| rng.fork()).collect();
        let generate = |mut fork: SlamRng| self.generator.generate(&mut fork);
        let results: Vec<Result<Sonnet, SlamError>> = if self.parallel {
            forks.into_par_iter().map(generate).collect()
        } else {
            forks.into_iter().map(generate).collect()
        };

        let mut scored = Vec::with_capacity(results.len());
        let mut last_error = None;
        for (index, result) in results.into_iter().enumerate() {
            match result {
                Ok(sonnet) => {
                    let score = self.scorer.score(&sonnet);
                    debug!(
                        candidate = index,
                        total = score.total,
                        rhyme = score.rhyme,
                        syllable = score.syllable,
                        meter = score.meter,
                        "candidate scored"
                    );
                    scored.push(ScoredSonnet { sonnet, score });
                }
                Err(err) => {
                    warn!(candidate = index, error = %err, "candidate failed");
                    last_error = Some(err);
                }
            }
        }

        if let (true, Some(err)) = (scored.is_empty(), last_error) {
            return Err(err);
        }

        let candidates: Vec<ScoreBreakdown> = scored.iter().map(|s| s.score).collect();
        let winner = pick_winner(scored).ok_or(SlamError::NoQualifyingSonnet {
            candidates: self.candidate_count,
        })?;
        info!(
            total = winner.score.total,
            candidates = candidates.len(),
            "winner selected"
        );
        Ok(Selection { winner, candidates })
    }
}
