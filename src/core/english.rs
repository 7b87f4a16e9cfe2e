// src/core/english.rs
use crate::core::tables::LetterValueTable;
use crate::core::types::{Computation, EnglishLetter, GematriaResult, LetterBreakdownEntry, Metric};
use tracing::debug;

/// Ordinal, reduction and their reversed counterparts over Latin letters.
#[derive(Debug, Clone)]
pub struct EnglishGematriaEngine {
    ordinal: LetterValueTable,
    reduction: LetterValueTable,
    reverse_ordinal: LetterValueTable,
    reverse_reduction: LetterValueTable,
}

impl Default for EnglishGematriaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl EnglishGematriaEngine {
    pub fn new() -> Self {
        Self {
            ordinal: LetterValueTable::english_ordinal(),
            reduction: LetterValueTable::english_reduction(),
            reverse_ordinal: LetterValueTable::english_reverse_ordinal(),
            reverse_reduction: LetterValueTable::english_reverse_reduction(),
        }
    }

    /// Lowercases `c` and keeps it only if it folds to a single `a..=z`.
    fn fold(&self, c: char) -> Option<char> {
        let mut lower = c.to_lowercase();
        match (lower.next(), lower.next()) {
            (Some(l), None) if self.ordinal.contains(l) => Some(l),
            _ => None,
        }
    }

    fn letter(&self, c: char) -> Option<EnglishLetter> {
        Some(EnglishLetter {
            letter: c.to_ascii_uppercase(),
            ordinal: self.ordinal.value_of(c)?,
            reduction: self.reduction.value_of(c)?,
            rev_ordinal: self.reverse_ordinal.value_of(c)?,
            rev_reduction: self.reverse_reduction.value_of(c)?,
        })
    }

    /// Computes the four English sums. Text with no Latin letters yields an
    /// empty result map rather than zeros.
    pub fn compute(&self, text: &str) -> Computation {
        let letters: Vec<EnglishLetter> = text
            .chars()
            .filter_map(|c| self.fold(c))
            .filter_map(|c| self.letter(c))
            .collect();

        if letters.is_empty() {
            debug!(scheme = "english", "no latin letters");
            return Computation::default();
        }

        let sum = |f: fn(&EnglishLetter) -> u32| letters.iter().map(|l| f(l) as u64).sum::<u64>();
        let mut totals = GematriaResult::new();
        totals.insert(Metric::EnglishOrdinal, sum(|l| l.ordinal));
        totals.insert(Metric::FullReduction, sum(|l| l.reduction));
        totals.insert(Metric::ReverseOrdinal, sum(|l| l.rev_ordinal));
        totals.insert(Metric::ReverseReduction, sum(|l| l.rev_reduction));

        debug!(
            scheme = "english",
            letters = letters.len(),
            ordinal = totals.get(Metric::EnglishOrdinal),
            "gematria computed"
        );

        Computation {
            totals,
            breakdown: letters.into_iter().map(LetterBreakdownEntry::English).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abc() {
        let out = EnglishGematriaEngine::new().compute("abc");
        assert_eq!(out.totals.get(Metric::EnglishOrdinal), Some(6));
        assert_eq!(out.totals.get(Metric::FullReduction), Some(6));
        assert_eq!(out.totals.get(Metric::ReverseOrdinal), Some(75));
        // 26, 25, 24 reduce to 8, 7, 6
        assert_eq!(out.totals.get(Metric::ReverseReduction), Some(21));
        assert_eq!(out.breakdown.len(), 3);
    }

    #[test]
    fn digits_only_is_empty() {
        let out = EnglishGematriaEngine::new().compute("123");
        assert!(out.totals.is_empty());
        assert!(out.breakdown.is_empty());
    }

    #[test]
    fn empty_text_is_empty() {
        assert_eq!(EnglishGematriaEngine::new().compute(""), Computation::default());
    }

    #[test]
    fn hebrew_text_is_ignored() {
        let out = EnglishGematriaEngine::new().compute("שלום");
        assert!(out.totals.is_empty());
    }

    #[test]
    fn case_insensitive_with_uppercase_breakdown() {
        let engine = EnglishGematriaEngine::new();
        let out = engine.compute("Hello, World!");
        assert_eq!(out.totals, engine.compute("helloworld").totals);
        assert_eq!(out.totals.get(Metric::EnglishOrdinal), Some(124));
        let letters: String = out.breakdown.iter().map(|e| e.letter()).collect();
        assert_eq!(letters, "HELLOWORLD");
    }

    #[test]
    fn breakdown_carries_all_four_values() {
        let out = EnglishGematriaEngine::new().compute("z");
        assert_eq!(
            out.breakdown,
            vec![LetterBreakdownEntry::English(EnglishLetter {
                letter: 'Z',
                ordinal: 26,
                reduction: 8,
                rev_ordinal: 1,
                rev_reduction: 1,
            })]
        );
    }

    #[test]
    fn kelvin_sign_folds_to_k() {
        let out = EnglishGematriaEngine::new().compute("\u{212A}");
        assert_eq!(out.totals.get(Metric::EnglishOrdinal), Some(11));
    }

    #[test]
    fn accented_letters_are_dropped() {
        let out = EnglishGematriaEngine::new().compute("café");
        assert_eq!(out.totals.get(Metric::EnglishOrdinal), Some(3 + 1 + 6));
    }
}
