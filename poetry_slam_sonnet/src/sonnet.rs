// Lines, sonnets, the rhyme scheme, and text rendering.
//
// A `Sonnet` holds exactly fourteen `Line`s (enforced by the array type).
// Both are immutable once the generator hands them over; scoring, tone
// classification and printing only read them.
//
// Two renderings exist:
// - display text: one line per row, first word capitalized, rows 1-13 end
//   with ",\n", row 14 ends with ".\n". This is what gets printed and what
//   the meter oracle scans.
// - raw text: a single row, each line's last word followed by ",", lines
//   separated by a space, no capitalization. This is what gets spoken and
//   what the tone classifier reads. An odd number of single quotes gets a
//   closing quote appended so downstream tools see balanced quoting.

use poetry_slam_lang::Word;

/// Lines per sonnet.
pub const LINE_COUNT: usize = 14;

/// ABAB CDCD EFEF GG as (earlier line, later line) pairs, 0-based.
pub const RHYME_PAIRS: [(usize, usize); 7] =
    [(0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 13)];

/// The earlier line whose last word `line` must rhyme with, if any.
pub fn rhyme_partner(line: usize) -> Option<usize> {
    RHYME_PAIRS
        .iter()
        .find(|&&(_, later)| later == line)
        .map(|&(earlier, _)| earlier)
}

/// An ordered run of words. Generated lines sum to the syllable budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    words: Vec<Word>,
}

impl Line {
    pub fn new(words: Vec<Word>) -> Self {
        Line { words }
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn into_words(self) -> Vec<Word> {
        self.words
    }

    pub fn syllables(&self) -> u32 {
        self.words.iter().map(|w| w.syllables).sum()
    }

    pub fn last_word(&self) -> Option<&Word> {
        self.words.last()
    }

    /// Words joined by spaces, first word capitalized.
    fn display(&self) -> String {
        let mut out = String::new();
        for (i, word) in self.words.iter().enumerate() {
            if i == 0 {
                out.push_str(&capitalize(&word.text));
            } else {
                out.push(' ');
                out.push_str(&word.text);
            }
        }
        out
    }

    fn raw(&self) -> String {
        self.words
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sonnet {
    lines: [Line; LINE_COUNT],
}

impl Sonnet {
    pub fn new(lines: [Line; LINE_COUNT]) -> Self {
        Sonnet { lines }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Last word of each line, in order. Empty lines yield "".
    pub fn end_words(&self) -> Vec<&str> {
        self.lines
            .iter()
            .map(|l| l.last_word().map_or("", |w| w.text.as_str()))
            .collect()
    }

    /// Printable form: fourteen rows, commas after rows 1-13, a period to finish.
    pub fn display_text(&self) -> String {
        let mut out = String::new();
        for (i, line) in self.lines.iter().enumerate() {
            out.push_str(&line.display());
            out.push_str(if i + 1 == LINE_COUNT { ".\n" } else { ",\n" });
        }
        out
    }

    /// Single-row form for speech and tone analysis.
    pub fn raw_text(&self) -> String {
        let mut out = self
            .lines
            .iter()
            .map(|l| format!("{},", l.raw()))
            .collect::<Vec<_>>()
            .join(" ");
        if out.matches('\'').count() % 2 != 0 {
            out.push('\'');
        }
        out
    }
}

impl TryFrom<Vec<Line>> for Sonnet {
    type Error = Vec<Line>;

    fn try_from(lines: Vec<Line>) -> Result<Self, Self::Error> {
        lines.try_into().map(Sonnet::new)
    }
}

/// Capitalize the first character of a string.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => {
            let upper: String = c.to_uppercase().collect();
            format!("{}{}", upper, chars.as_str())
        }
    }
}
