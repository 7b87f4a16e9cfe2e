// src/core/types.rs
use crate::error::GematriaError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Which letter-value scheme a calculation runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    #[default]
    Hebrew,
    English,
}

impl Scheme {
    /// Key used in share queries and JSON (`hebrew` / `english`).
    pub fn key(&self) -> &'static str {
        match self {
            Scheme::Hebrew => "hebrew",
            Scheme::English => "english",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Scheme::Hebrew => "Hebrew",
            Scheme::English => "English",
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Scheme::Hebrew)
    }

    /// Text direction hint for hosts rendering this scheme (`rtl` / `ltr`).
    pub fn direction(&self) -> &'static str {
        if self.is_rtl() {
            "rtl"
        } else {
            "ltr"
        }
    }

    /// Metrics this scheme reports, in display order.
    pub fn metrics(&self) -> &'static [Metric] {
        match self {
            Scheme::Hebrew => &[
                Metric::Standard,
                Metric::MisparKatan,
                Metric::Letters,
                Metric::Words,
            ],
            Scheme::English => &[
                Metric::EnglishOrdinal,
                Metric::FullReduction,
                Metric::ReverseOrdinal,
                Metric::ReverseReduction,
            ],
        }
    }

    /// The headline value recorded in the recent-results log.
    pub fn primary_metric(&self) -> Metric {
        match self {
            Scheme::Hebrew => Metric::Standard,
            Scheme::English => Metric::EnglishOrdinal,
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Scheme {
    type Err = GematriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hebrew" | "he" => Ok(Scheme::Hebrew),
            "english" | "en" => Ok(Scheme::English),
            _ => Err(GematriaError::UnknownScheme(s.to_string())),
        }
    }
}

/// A named total in a [`GematriaResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Metric {
    #[serde(rename = "Standard")]
    Standard,
    #[serde(rename = "Mispar Katan")]
    MisparKatan,
    #[serde(rename = "Letters")]
    Letters,
    #[serde(rename = "Words")]
    Words,
    #[serde(rename = "English Ordinal")]
    EnglishOrdinal,
    #[serde(rename = "Full Reduction")]
    FullReduction,
    #[serde(rename = "Reverse Ordinal")]
    ReverseOrdinal,
    #[serde(rename = "Reverse Reduction")]
    ReverseReduction,
}

impl Metric {
    /// Exact key of this metric in a result map.
    pub fn key(&self) -> &'static str {
        match self {
            Metric::Standard => "Standard",
            Metric::MisparKatan => "Mispar Katan",
            Metric::Letters => "Letters",
            Metric::Words => "Words",
            Metric::EnglishOrdinal => "English Ordinal",
            Metric::FullReduction => "Full Reduction",
            Metric::ReverseOrdinal => "Reverse Ordinal",
            Metric::ReverseReduction => "Reverse Reduction",
        }
    }

    /// Human-facing label for result cards.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Standard => "Standard (Ragil)",
            Metric::Letters => "Letter Count",
            Metric::Words => "Word Count",
            Metric::ReverseReduction => "Rev. Reduction",
            other => other.key(),
        }
    }
}

/// Totals produced by one computation, keyed by metric.
/// Created fresh per call and never shared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GematriaResult {
    totals: BTreeMap<Metric, u64>,
}

impl GematriaResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, metric: Metric, value: u64) {
        self.totals.insert(metric, value);
    }

    pub fn get(&self, metric: Metric) -> Option<u64> {
        self.totals.get(&metric).copied()
    }

    /// Value of the scheme's primary metric, or 0 when the result lacks it.
    pub fn primary_value(&self, scheme: Scheme) -> u64 {
        self.get(scheme.primary_metric()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Metric, u64)> + '_ {
        self.totals.iter().map(|(m, v)| (*m, *v))
    }
}

/// One recognized Hebrew letter and its values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HebrewLetter {
    pub letter: char,
    pub value: u32,
    pub small: u32,
}

/// One recognized English letter (uppercased for display) and its four values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnglishLetter {
    pub letter: char,
    pub ordinal: u32,
    pub reduction: u32,
    #[serde(rename = "revOrdinal")]
    pub rev_ordinal: u32,
    #[serde(rename = "revReduction")]
    pub rev_reduction: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LetterBreakdownEntry {
    Hebrew(HebrewLetter),
    English(EnglishLetter),
}

impl LetterBreakdownEntry {
    pub fn letter(&self) -> char {
        match self {
            LetterBreakdownEntry::Hebrew(h) => h.letter,
            LetterBreakdownEntry::English(e) => e.letter,
        }
    }
}

/// The output of a single engine run: totals plus the per-letter breakdown
/// in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Computation {
    pub totals: GematriaResult,
    pub breakdown: Vec<LetterBreakdownEntry>,
}

/// Everything a front end needs to render and reproduce one calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub scheme: Scheme,
    /// `rtl` for Hebrew, `ltr` for English.
    pub direction: &'static str,
    pub text: String,
    pub char_count: usize,
    pub totals: GematriaResult,
    pub breakdown: Vec<LetterBreakdownEntry>,
    /// Query string that reproduces this calculation.
    pub share: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_parses_keys_and_aliases() {
        assert_eq!("hebrew".parse::<Scheme>().unwrap(), Scheme::Hebrew);
        assert_eq!(" English ".parse::<Scheme>().unwrap(), Scheme::English);
        assert_eq!("en".parse::<Scheme>().unwrap(), Scheme::English);
        assert_eq!("HE".parse::<Scheme>().unwrap(), Scheme::Hebrew);
        assert!(matches!(
            "latin".parse::<Scheme>(),
            Err(GematriaError::UnknownScheme(s)) if s == "latin"
        ));
    }

    #[test]
    fn hebrew_reads_right_to_left() {
        assert!(Scheme::Hebrew.is_rtl());
        assert!(!Scheme::English.is_rtl());
        assert_eq!(Scheme::Hebrew.direction(), "rtl");
        assert_eq!(Scheme::English.direction(), "ltr");
    }

    #[test]
    fn result_serializes_with_metric_keys() {
        let mut result = GematriaResult::new();
        result.insert(Metric::MisparKatan, 16);
        result.insert(Metric::Standard, 376);
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"Standard":376,"Mispar Katan":16}"#);
    }

    #[test]
    fn primary_value_defaults_to_zero() {
        let result = GematriaResult::new();
        assert_eq!(result.primary_value(Scheme::English), 0);
        assert_eq!(result.primary_value(Scheme::Hebrew), 0);
    }

    #[test]
    fn labels_follow_result_cards() {
        assert_eq!(Metric::Standard.label(), "Standard (Ragil)");
        assert_eq!(Metric::ReverseReduction.label(), "Rev. Reduction");
        assert_eq!(Metric::FullReduction.label(), "Full Reduction");
    }

    #[test]
    fn english_breakdown_uses_camel_case_keys() {
        let entry = LetterBreakdownEntry::English(EnglishLetter {
            letter: 'A',
            ordinal: 1,
            reduction: 1,
            rev_ordinal: 26,
            rev_reduction: 8,
        });
        let json = serde_json::to_value(entry).unwrap();
        assert_eq!(json["revOrdinal"], 26);
        assert_eq!(json["letter"], "A");
    }
}
