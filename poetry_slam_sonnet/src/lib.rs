// Poetry Slam sonnet engine
//
// Generates Shakespearean sonnets by constrained random sampling from a
// tagged inspiring corpus, scores each candidate on rhyme, syllable and
// meter fit, keeps the best of N, and classifies its tone to pick a
// speaking voice.
//
// Architecture:
// - sonnet.rs: `Line`, `Sonnet`, the ABAB CDCD EFEF GG scheme, rendering
// - generate.rs: part-of-speech constrained line sampling + rhyme repair
// - scoring.rs: rhyme / syllable / meter scores and the percentage report
// - select.rs: per-candidate RNG forks, optional rayon fan-out, winner pick
// - tone.rs: positive/negative word count over the raw text
// - voice.rs: `Speaker` trait and the external speech program
// - config.rs: `SlamConfig`, every tunable number, loaded from JSON
// - error.rs: `SlamError`
//
// The engine is deterministic given a seed: all randomness flows from one
// `SlamRng`, forked once per candidate, and the oracles are pure.

pub mod config;
pub mod error;
pub mod generate;
pub mod scoring;
pub mod select;
pub mod sonnet;
pub mod tone;
pub mod voice;

pub use config::SlamConfig;
pub use error::SlamError;
pub use generate::SonnetGenerator;
pub use scoring::{ScoreBreakdown, ScoreReport, Scorer};
pub use select::{ScoredSonnet, Selection, Selector};
pub use sonnet::{Line, Sonnet};
pub use tone::{ToneProfile, classify_tone};
pub use voice::{SpeechCommand, Speaker};

/// Heading printed above the winning sonnet.
pub const TITLE: &str = "SONNET CLV";
