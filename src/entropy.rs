use std::ops::{Add, AddAssign};
use zeroize::Zeroizing;

/// A generated fragment together with the bits of entropy that produced it.
///
/// `bits` is the sum of `log2(candidates)` over every independent draw
/// behind `text`, so concatenation simply adds the two figures.
#[derive(Debug, Clone)]
pub struct EntropyValue {
    text: Zeroizing<String>,
    bits: f64,
}

impl EntropyValue {
    pub fn new(text: impl Into<String>, bits: f64) -> Self {
        debug_assert!(bits >= 0.0, "entropy cannot be negative");
        Self {
            text: Zeroizing::new(text.into()),
            bits,
        }
    }

    /// Fixed text; contributes no entropy.
    pub fn literal(text: impl Into<String>) -> Self {
        Self::new(text, 0.0)
    }

    pub fn empty() -> Self {
        Self::literal(String::new())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn bits(&self) -> f64 {
        self.bits
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Length in characters, not bytes.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn concat(a: &EntropyValue, b: &EntropyValue) -> EntropyValue {
        let mut text = String::with_capacity(a.text.len() + b.text.len());
        text.push_str(&a.text);
        text.push_str(&b.text);
        EntropyValue::new(text, a.bits + b.bits)
    }

    pub fn into_text(self) -> Zeroizing<String> {
        self.text
    }
}

impl Default for EntropyValue {
    fn default() -> Self {
        Self::empty()
    }
}

impl AddAssign<&EntropyValue> for EntropyValue {
    fn add_assign(&mut self, rhs: &EntropyValue) {
        self.text.push_str(&rhs.text);
        self.bits += rhs.bits;
    }
}

impl AddAssign for EntropyValue {
    fn add_assign(&mut self, rhs: EntropyValue) {
        *self += &rhs;
    }
}

impl Add for EntropyValue {
    type Output = EntropyValue;

    fn add(mut self, rhs: EntropyValue) -> EntropyValue {
        self += &rhs;
        self
    }
}
