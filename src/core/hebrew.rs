// src/core/hebrew.rs
use crate::core::tables::{reduced, LetterValueTable};
use crate::core::types::{Computation, GematriaResult, HebrewLetter, LetterBreakdownEntry, Metric};
use tracing::{debug, trace};
use unicode_normalization::UnicodeNormalization;

/// Standard (finals = regular) and Mispar Katan gematria over Hebrew text.
#[derive(Debug, Clone)]
pub struct HebrewGematriaEngine {
    table: LetterValueTable,
}

/// Whitespace plus the ASCII information separators (U+001C..=U+001F),
/// which also delimit words.
fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Number of separator-delimited tokens in `text`.
pub fn word_count(text: &str) -> usize {
    text.split(is_word_separator).filter(|t| !t.is_empty()).count()
}

impl Default for HebrewGematriaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl HebrewGematriaEngine {
    pub fn new() -> Self {
        Self { table: LetterValueTable::hebrew() }
    }

    /// Computes `Standard`, `Mispar Katan`, `Letters` and `Words` for `text`.
    ///
    /// The text is NFKD-decomposed first so vowel points, dagesh and
    /// presentation forms fall away from their base letters; anything that
    /// is still not a Hebrew letter is skipped. `Words` counts the
    /// [`word_count`] tokens of the raw input, whether or not they hold Hebrew letters.
    pub fn compute(&self, text: &str) -> Computation {
        let words = word_count(text) as u64;

        let mut breakdown = Vec::new();
        let mut skipped = 0usize;
        for c in text.nfkd() {
            match self.table.value_of(c) {
                Some(value) => breakdown.push(HebrewLetter { letter: c, value, small: reduced(value) }),
                None => skipped += 1,
            }
        }
        trace!(skipped, "hebrew: non-letter characters dropped");

        let standard: u64 = breakdown.iter().map(|l| l.value as u64).sum();
        let katan: u64 = breakdown.iter().map(|l| l.small as u64).sum();

        let mut totals = GematriaResult::new();
        totals.insert(Metric::Standard, standard);
        totals.insert(Metric::MisparKatan, katan);
        totals.insert(Metric::Letters, breakdown.len() as u64);
        totals.insert(Metric::Words, words);

        debug!(scheme = "hebrew", letters = breakdown.len(), words, standard, "gematria computed");

        Computation {
            totals,
            breakdown: breakdown.into_iter().map(LetterBreakdownEntry::Hebrew).collect(),
        }
    }
}
