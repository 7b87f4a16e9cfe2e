// src/core/tables.rs
use std::collections::HashMap;

/// Hebrew letters with their standard values. Final forms carry the value
/// of their base letter (finals = regular).
const HEBREW_LETTERS: [(char, u32); 27] = [
    ('א', 1), ('ב', 2), ('ג', 3), ('ד', 4), ('ה', 5), ('ו', 6), ('ז', 7),
    ('ח', 8), ('ט', 9), ('י', 10), ('כ', 20), ('ך', 20), ('ל', 30),
    ('מ', 40), ('ם', 40), ('נ', 50), ('ן', 50), ('ס', 60), ('ע', 70),
    ('פ', 80), ('ף', 80), ('צ', 90), ('ץ', 90), ('ק', 100), ('ר', 200),
    ('ש', 300), ('ת', 400),
];

/// Collapses a positive value to 1..=9 (`((v - 1) mod 9) + 1`).
pub fn reduced(value: u32) -> u32 {
    debug_assert!(value > 0, "reduction is defined for positive values");
    ((value as u64 + 8) % 9 + 1) as u32
}

/// An immutable letter -> value mapping, total over its alphabet.
#[derive(Debug, Clone)]
pub struct LetterValueTable {
    values: HashMap<char, u32>,
}

impl LetterValueTable {
    fn from_pairs(pairs: impl IntoIterator<Item = (char, u32)>) -> Self {
        Self { values: pairs.into_iter().collect() }
    }

    /// Builds a table over `a..=z` from each letter's 1-based ordinal.
    fn latin(value: impl Fn(u32) -> u32) -> Self {
        Self::from_pairs(('a'..='z').zip(1..=26).map(|(c, ord)| (c, value(ord))))
    }

    pub fn hebrew() -> Self {
        Self::from_pairs(HEBREW_LETTERS)
    }

    pub fn english_ordinal() -> Self {
        Self::latin(|ord| ord)
    }

    pub fn english_reduction() -> Self {
        Self::latin(reduced)
    }

    pub fn english_reverse_ordinal() -> Self {
        Self::latin(|ord| 27 - ord)
    }

    pub fn english_reverse_reduction() -> Self {
        Self::latin(|ord| reduced(27 - ord))
    }

    /// Value of `letter`, or `None` when it is outside the alphabet.
    pub fn value_of(&self, letter: char) -> Option<u32> {
        self.values.get(&letter).copied()
    }

    pub fn contains(&self, letter: char) -> bool {
        self.values.contains_key(&letter)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduced_wraps_into_one_to_nine() {
        assert_eq!(reduced(1), 1);
        assert_eq!(reduced(9), 9);
        assert_eq!(reduced(10), 1);
        assert_eq!(reduced(300), 3);
        assert_eq!(reduced(400), 4);
        assert_eq!(reduced(u32::MAX), (u32::MAX - 1) % 9 + 1);
    }

    #[test]
    fn hebrew_finals_share_base_values() {
        let table = LetterValueTable::hebrew();
        assert_eq!(table.len(), 27);
        for (base, fin) in [('כ', 'ך'), ('מ', 'ם'), ('נ', 'ן'), ('פ', 'ף'), ('צ', 'ץ')] {
            assert_eq!(table.value_of(base), table.value_of(fin));
        }
        assert_eq!(table.value_of('ת'), Some(400));
        assert_eq!(table.value_of('a'), None);
        assert!(!table.contains('\u{05B8}'));
    }

    #[test]
    fn english_tables_cover_lowercase_only() {
        let ordinal = LetterValueTable::english_ordinal();
        assert_eq!(ordinal.len(), 26);
        assert_eq!(ordinal.value_of('a'), Some(1));
        assert_eq!(ordinal.value_of('z'), Some(26));
        assert!(!ordinal.contains('A'));
    }

    #[test]
    fn english_reduction_tables_mirror_each_other() {
        let reduction = LetterValueTable::english_reduction();
        let reverse = LetterValueTable::english_reverse_reduction();
        assert_eq!(reduction.value_of('i'), Some(9));
        assert_eq!(reduction.value_of('j'), Some(1));
        assert_eq!(reduction.value_of('z'), Some(8));
        assert_eq!(reverse.value_of('a'), Some(8));
        assert_eq!(reverse.value_of('z'), Some(1));
        assert_eq!(reverse.value_of('r'), Some(9));
    }

    #[test]
    fn reverse_ordinal_is_complement_of_ordinal() {
        let ordinal = LetterValueTable::english_ordinal();
        let reverse = LetterValueTable::english_reverse_ordinal();
        for c in 'a'..='z' {
            assert_eq!(ordinal.value_of(c).unwrap() + reverse.value_of(c).unwrap(), 27);
        }
    }
}
