// Scoring: rhyme, syllable and meter evaluation of a finished sonnet.
//
// Three independent axes, summed raw into `total`:
// - rhyme (0-7): one point per scheme pair the rhyme oracle accepts.
// - syllable (<= 0): minus the absolute deviation from the per-line budget,
//   summed over lines. Generated sonnets always score 0 here; the axis is
//   kept as a regression check on the generator.
// - meter (0-~70): the display text goes through the meter oracle, and
//   every foot equal to "01" (an iamb) earns a point.
//
// The scales differ (the meter axis dominates). The selector only compares
// totals against each other, so the raw sum is used as-is.
//
// `ScoreReport` turns a breakdown into the three printed percentages.

use std::fmt;

use poetry_slam_lang::{MeterOracle, RhymeOracle};
use serde::Serialize;

use crate::config::ReportConfig;
use crate::sonnet::{RHYME_PAIRS, Sonnet};

/// The unstressed-stressed foot.
pub const IAMB: &str = "01";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub total: i64,
    pub rhyme: u32,
    pub syllable: i64,
    pub meter: u32,
}

impl ScoreBreakdown {
    pub fn new(rhyme: u32, syllable: i64, meter: u32) -> Self {
        ScoreBreakdown {
            total: i64::from(rhyme) + syllable + i64::from(meter),
            rhyme,
            syllable,
            meter,
        }
    }
}

/// Scores sonnets with a fixed pair of oracles.
pub struct Scorer<'a> {
    rhymer: &'a dyn RhymeOracle,
    meter: &'a dyn MeterOracle,
    syllables_per_line: u32,
}

impl<'a> Scorer<'a> {
    pub fn new(rhymer: &'a dyn RhymeOracle, meter: &'a dyn MeterOracle, syllables_per_line: u32) -> Self {
        Scorer {
            rhymer,
            meter,
            syllables_per_line,
        }
    }

    pub fn score(&self, sonnet: &Sonnet) -> ScoreBreakdown {
        ScoreBreakdown::new(
            self.rhyme_score(sonnet),
            self.syllable_score(sonnet),
            self.meter_score(sonnet),
        )
    }

    pub fn rhyme_score(&self, sonnet: &Sonnet) -> u32 {
        let ends = sonnet.end_words();
        RHYME_PAIRS
            .iter()
            .filter(|&&(earlier, later)| self.rhymer.rhymes(ends[earlier], ends[later]))
            .count() as u32
    }

    pub fn syllable_score(&self, sonnet: &Sonnet) -> i64 {
        let budget = i64::from(self.syllables_per_line);
        -sonnet
            .lines()
            .iter()
            .map(|line| (budget - i64::from(line.syllables())).abs())
            .sum::<i64>()
    }

    pub fn meter_score(&self, sonnet: &Sonnet) -> u32 {
        self.meter
            .scan(&sonnet.display_text())
            .iter()
            .flatten()
            .filter(|foot| foot.as_str() == IAMB)
            .count() as u32
    }
}

/// Percentages shown to the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreReport {
    pub rhyme_pct: i64,
    pub syllable_pct: i64,
    pub meter_pct: i64,
}

impl ScoreReport {
    pub fn new(score: &ScoreBreakdown, report: &ReportConfig) -> Self {
        let syllable_display = i64::from(report.syllable_max) - score.syllable.abs();
        ScoreReport {
            rhyme_pct: percent(i64::from(score.rhyme), report.rhyme_max),
            syllable_pct: percent(syllable_display, report.syllable_max),
            meter_pct: percent(i64::from(score.meter), report.meter_max),
        }
    }
}

fn percent(value: i64, max: u32) -> i64 {
    (value as f64 / f64::from(max) * 100.0).round() as i64
}

impl fmt::Display for ScoreReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rhyme Score: {}%", self.rhyme_pct)?;
        writeln!(f, "Syllable Score: {}%", self.syllable_pct)?;
        write!(f, "Meter Score: {}%", self.meter_pct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sonnet::tests::{sonnet_with_ends, word};
    use crate::sonnet::{LINE_COUNT, Line};
    use poetry_slam_lang::Scansion;

    const ENDS: [&str; LINE_COUNT] = [
        "day", "night", "may", "light", "rose", "thee", "close", "see", "cold", "sun",
        "old", "done", "art", "part",
    ];

    fn always(_: &str, _: &str) -> bool {
        true
    }

    fn never(_: &str, _: &str) -> bool {
        false
    }

    fn no_feet(_: &str) -> Scansion {
        Vec::new()
    }

    /// Five iambs on every non-empty line.
    fn perfect_iambs(text: &str) -> Scansion {
        text.lines()
            .map(|_| vec![IAMB.to_string(); 5])
            .collect()
    }

    #[test]
    fn test_rhyme_score_max_with_agreeing_oracle() {
        let scorer = Scorer::new(&always, &no_feet, 10);
        assert_eq!(scorer.rhyme_score(&sonnet_with_ends(ENDS)), 7);
    }

    #[test]
    fn test_rhyme_score_checks_scheme_pairs() {
        let spelling = |a: &str, b: &str| poetry_slam_lang::SpellingRhymer.rhymes(a, b);
        let scorer = Scorer::new(&spelling, &no_feet, 10);
        // Every pair but sun/done shares a spelling tail.
        assert_eq!(scorer.rhyme_score(&sonnet_with_ends(ENDS)), 6);
        let scorer = Scorer::new(&never, &no_feet, 10);
        assert_eq!(scorer.rhyme_score(&sonnet_with_ends(ENDS)), 0);
    }

    #[test]
    fn test_rhyme_oracle_sees_earlier_word_first() {
        let ordered = |a: &str, b: &str| a == "day" && b == "may";
        let scorer = Scorer::new(&ordered, &no_feet, 10);
        assert_eq!(scorer.rhyme_score(&sonnet_with_ends(ENDS)), 1);
    }

    #[test]
    fn test_syllable_score_zero_for_exact_lines() {
        let scorer = Scorer::new(&never, &no_feet, 10);
        assert_eq!(scorer.syllable_score(&sonnet_with_ends(ENDS)), 0);
    }

    #[test]
    fn test_syllable_score_penalizes_deviation() {
        let mut lines: Vec<Line> = sonnet_with_ends(ENDS).lines().to_vec();
        lines[0] = Line::new(vec![word("love", 1)]); // 9 short
        lines[5] = Line::new(vec![word("eternal", 3); 4]); // 2 over
        let sonnet = Sonnet::try_from(lines).unwrap();
        let scorer = Scorer::new(&never, &no_feet, 10);
        assert_eq!(scorer.syllable_score(&sonnet), -11);
    }

    #[test]
    fn test_meter_counts_only_iambs() {
        let mixed = |_: &str| -> Scansion {
            vec![
                vec!["01".to_string(), "10".to_string(), "01".to_string()],
                vec!["11".to_string(), "0".to_string()],
            ]
        };
        let scorer = Scorer::new(&never, &mixed, 10);
        assert_eq!(scorer.meter_score(&sonnet_with_ends(ENDS)), 2);
    }

    #[test]
    fn test_meter_scans_display_text() {
        let scorer = Scorer::new(&never, &perfect_iambs, 10);
        assert_eq!(scorer.meter_score(&sonnet_with_ends(ENDS)), 70);
    }

    #[test]
    fn test_total_is_raw_sum() {
        let scorer = Scorer::new(&always, &perfect_iambs, 10);
        let score = scorer.score(&sonnet_with_ends(ENDS));
        assert_eq!(score, ScoreBreakdown { total: 77, rhyme: 7, syllable: 0, meter: 70 });
    }

    #[test]
    fn test_report_percentages() {
        let report = ScoreReport::new(
            &ScoreBreakdown::new(5, -7, 35),
            &ReportConfig::default(),
        );
        assert_eq!(report, ScoreReport { rhyme_pct: 71, syllable_pct: 95, meter_pct: 50 });
        assert_eq!(
            report.to_string(),
            "Rhyme Score: 71%\nSyllable Score: 95%\nMeter Score: 50%"
        );
    }
}
