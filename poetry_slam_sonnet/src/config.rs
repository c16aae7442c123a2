// Data-driven run configuration.
//
// Every tunable number the engine uses lives in `SlamConfig`, loaded from
// JSON (or defaulted). Missing fields fall back to the defaults below, so
// a config file only needs to name what it changes:
//
//     { "candidate_count": 25, "parallel": true }
//
// The defaults reproduce the classic generator: 10-syllable lines, ten
// candidates, 10,000 rhyme resamples, and the legacy `-le` syllable rule.
// `max_draws_per_line` has no classic counterpart (the old loop was
// unbounded); it turns a livelock into `SlamError::GenerationExhausted`.

use std::path::Path;

use poetry_slam_lang::LeSuffixRule;
use serde::{Deserialize, Serialize};

use crate::error::SlamError;

/// Denominators for the percentage score report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Rhyme pairs in the scheme.
    pub rhyme_max: u32,
    /// Syllable display maximum (14 lines x 10 syllables).
    pub syllable_max: u32,
    /// Nominal meter maximum (14 lines x 5 iambic feet).
    pub meter_max: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            rhyme_max: 7,
            syllable_max: 140,
            meter_max: 70,
        }
    }
}

/// Speech voices chosen by the sonnet's tone.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceConfig {
    pub positive: String,
    pub negative: String,
    pub neutral: String,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        VoiceConfig {
            positive: "Vicki".to_string(),
            negative: "Bad News".to_string(),
            neutral: "Samantha".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlamConfig {
    /// Exact syllable total of every line.
    pub syllables_per_line: u32,
    /// Candidate sonnets generated per run.
    pub candidate_count: usize,
    /// Random end-word draws when looking for a rhyme.
    pub rhyme_attempts: u32,
    /// Corpus draws allowed while building a single line.
    pub max_draws_per_line: u32,
    /// Generate candidates on the rayon pool.
    pub parallel: bool,
    /// Treatment of the `-le` ending in syllable estimation.
    pub le_suffix_rule: LeSuffixRule,
    pub report: ReportConfig,
    pub voices: VoiceConfig,
    /// Program invoked for playback as `<program> -v <voice> <text>`.
    pub speech_program: String,
}

impl Default for SlamConfig {
    fn default() -> Self {
        SlamConfig {
            syllables_per_line: 10,
            candidate_count: 10,
            rhyme_attempts: 10_000,
            max_draws_per_line: 200_000,
            parallel: false,
            le_suffix_rule: LeSuffixRule::Legacy,
            report: ReportConfig::default(),
            voices: VoiceConfig::default(),
            speech_program: "say".to_string(),
        }
    }
}

impl SlamConfig {
    /// Parse and validate a config from JSON.
    pub fn from_json(json: &str) -> Result<Self, SlamError> {
        let config: SlamConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, SlamError> {
        let json = std::fs::read_to_string(path).map_err(|source| SlamError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        SlamConfig::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), SlamError> {
        if self.syllables_per_line == 0 {
            return Err(SlamError::InvalidConfig("syllables_per_line must be > 0".into()));
        }
        if self.candidate_count == 0 {
            return Err(SlamError::InvalidConfig("candidate_count must be > 0".into()));
        }
        if self.max_draws_per_line == 0 {
            return Err(SlamError::InvalidConfig("max_draws_per_line must be > 0".into()));
        }
        let report = &self.report;
        if report.rhyme_max == 0 || report.syllable_max == 0 || report.meter_max == 0 {
            return Err(SlamError::InvalidConfig("report maxima must be > 0".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_generator() {
        let config = SlamConfig::default();
        assert_eq!(config.syllables_per_line, 10);
        assert_eq!(config.candidate_count, 10);
        assert_eq!(config.rhyme_attempts, 10_000);
        assert_eq!(config.le_suffix_rule, LeSuffixRule::Legacy);
        assert_eq!(config.report, ReportConfig { rhyme_max: 7, syllable_max: 140, meter_max: 70 });
        assert_eq!(config.voices.negative, "Bad News");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SlamConfig::from_json(
            r#"{"candidate_count": 3, "voices": {"neutral": "Alex"}, "le_suffix_rule": "corrected"}"#,
        )
        .unwrap();
        assert_eq!(config.candidate_count, 3);
        assert_eq!(config.voices.neutral, "Alex");
        assert_eq!(config.voices.positive, "Vicki");
        assert_eq!(config.le_suffix_rule, LeSuffixRule::Corrected);
        assert_eq!(config.syllables_per_line, 10);
    }

    #[test]
    fn test_roundtrip() {
        let config = SlamConfig { parallel: true, ..SlamConfig::default() };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(SlamConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = SlamConfig::from_json(r#"{"candidate_count": 0}"#).unwrap_err();
        assert!(matches!(err, SlamError::InvalidConfig(_)));
        let err = SlamConfig::from_json(r#"{"report": {"meter_max": 0}}"#).unwrap_err();
        assert!(matches!(err, SlamError::InvalidConfig(_)));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = SlamConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, SlamError::ConfigParse(_)));
    }
}
