// Error type for the sonnet engine.
//
// Loading failures from the lexical layer are wrapped, not flattened, so
// the binary can report the offending path. Generation exhaustion and the
// "nothing qualified" outcome are ordinary variants: the caller decides
// whether to retry with another seed.

use poetry_slam_lang::LangError;

#[derive(Debug, thiserror::Error)]
pub enum SlamError {
    #[error(transparent)]
    Lang(#[from] LangError),

    #[error("config is not valid JSON: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("could not read config {path}: {source}")]
    ConfigIo {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    /// No corpus word satisfied the tag + syllable-budget constraint within
    /// the configured number of draws.
    #[error("line {line}: no fitting word after {attempts} draws")]
    GenerationExhausted { line: usize, attempts: u32 },

    /// Every candidate scored at or below zero (or failed to generate).
    #[error("no qualifying sonnet among {candidates} candidates")]
    NoQualifyingSonnet { candidates: usize },

    #[error("voice playback with {voice:?} failed: {reason}")]
    Playback { voice: String, reason: String },
}
