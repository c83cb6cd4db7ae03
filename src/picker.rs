use crate::entropy::EntropyValue;
use crate::error::{Error, Result};
use crate::generator::Generator;
use crate::random::RandomSource;
use std::collections::HashSet;
use std::ops::RangeInclusive;

const SHIFT_DIGITS: &str = "1!2@3#4$5%6^7&8*9(0)";

/// Ordered, duplicate-free, non-empty set of items to draw from.
#[derive(Debug, Clone)]
pub struct CandidateSet {
    items: Vec<String>,
}

impl CandidateSet {
    /// Deduplicates (first occurrence wins) and drops empty items.
    pub fn new<I, S>(items: I, label: &str) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items = dedup(
            items
                .into_iter()
                .map(Into::<String>::into)
                .filter(|s| !s.is_empty()),
        );

        if items.is_empty() {
            return Err(Error::EmptyCandidateSet(label.to_string()));
        }

        Ok(Self { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn entropy(&self) -> f64 {
        (self.items.len() as f64).log2()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|candidate| candidate == item)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }
}

fn dedup(items: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items.filter(|item| seen.insert(item.clone())).collect()
}

/// Named character sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharSet {
    Upper,
    Lower,
    Digits,
    /// Digits with the symbols on their shifted keys: `!@#$%^&*()`.
    ShiftDigits,
    /// Printable ASCII without letters, digits or space.
    Symbols,
    /// Printable ASCII including space.
    Printable,
    /// Printable ASCII including space, minus uppercase letters.
    PrintableLower,
    LowerDigits,
    Alphanumeric,
    Hex,
}

impl CharSet {
    pub fn name(self) -> &'static str {
        match self {
            CharSet::Upper => "upper",
            CharSet::Lower => "lower",
            CharSet::Digits => "digits",
            CharSet::ShiftDigits => "shift digits",
            CharSet::Symbols => "symbols",
            CharSet::Printable => "printable",
            CharSet::PrintableLower => "printable lower",
            CharSet::LowerDigits => "lower+digits",
            CharSet::Alphanumeric => "alphanumeric",
            CharSet::Hex => "hex",
        }
    }

    fn chars(self) -> Vec<String> {
        match self {
            CharSet::Upper => collect_chars(&['A'..='Z'], &[]),
            CharSet::Lower => collect_chars(&['a'..='z'], &[]),
            CharSet::Digits => collect_chars(&['0'..='9'], &[]),
            CharSet::ShiftDigits => SHIFT_DIGITS.chars().map(String::from).collect(),
            CharSet::Symbols => {
                collect_chars(&['!'..='~'], &['A'..='Z', 'a'..='z', '0'..='9'])
            }
            CharSet::Printable => collect_chars(&[' '..='~'], &[]),
            CharSet::PrintableLower => collect_chars(&[' '..='~'], &['A'..='Z']),
            CharSet::LowerDigits => collect_chars(&['a'..='z', '0'..='9'], &[]),
            CharSet::Alphanumeric => collect_chars(&['A'..='Z', 'a'..='z', '0'..='9'], &[]),
            CharSet::Hex => collect_chars(&['0'..='9', 'a'..='f'], &[]),
        }
    }
}

fn collect_chars(include: &[RangeInclusive<char>], exclude: &[RangeInclusive<char>]) -> Vec<String> {
    let chars = include
        .iter()
        .flat_map(|range| range.clone())
        .filter(|c| !exclude.iter().any(|range| range.contains(c)))
        .map(String::from);
    dedup(chars)
}

/// Uniform single draw from a candidate set.
///
/// Word lists, character ranges and case variants differ only in how the
/// set is built; drawing and entropy accounting are shared.
#[derive(Debug, Clone)]
pub struct Picker {
    candidates: CandidateSet,
    label: String,
}

impl Picker {
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let candidates = CandidateSet::new(words, "word list")?;
        tracing::debug!(words = candidates.len(), "word list picker ready");

        Ok(Self {
            label: format!("words ({})", candidates.len()),
            candidates,
        })
    }

    /// Union of `include` ranges minus every character in `exclude`.
    pub fn from_ranges(
        include: &[RangeInclusive<char>],
        exclude: &[RangeInclusive<char>],
    ) -> Result<Self> {
        let candidates = CandidateSet::new(collect_chars(include, exclude), "character ranges")?;

        Ok(Self {
            label: format!("chars ({})", candidates.len()),
            candidates,
        })
    }

    pub fn preset(set: CharSet) -> Self {
        let candidates = CandidateSet { items: set.chars() };

        Self {
            label: format!("{} ({})", set.name(), candidates.len()),
            candidates,
        }
    }

    /// `{lowercase(s), uppercase(s)}`; a single option when `s` has no case.
    pub fn case_variants(s: &str) -> Self {
        let items = dedup([s.to_lowercase(), s.to_uppercase()].into_iter());

        Self {
            label: format!("case of {:?}", s),
            candidates: CandidateSet { items },
        }
    }

    pub fn candidate_set(&self) -> &CandidateSet {
        &self.candidates
    }
}

impl Generator for Picker {
    fn generate(&self, rng: &mut dyn RandomSource) -> EntropyValue {
        let index = rng.next_index(self.candidates.len());
        let item = self.candidates.items[index].as_str();
        EntropyValue::new(item, self.entropy())
    }

    fn entropy(&self) -> f64 {
        self.candidates.entropy()
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}
