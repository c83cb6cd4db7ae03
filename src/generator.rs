use crate::entropy::EntropyValue;
use crate::random::RandomSource;
use std::fmt;
use std::sync::Arc;

/// Anything that produces a random fragment with an exact entropy account.
pub trait Generator: Send + Sync {
    /// Draws one fragment. Its bits may exceed [`Generator::entropy`] when a
    /// generator deliberately under-declares (see `Capitalize`).
    fn generate(&self, rng: &mut dyn RandomSource) -> EntropyValue;

    /// Declared minimum bits per [`Generator::generate`] call. Never consumes
    /// randomness.
    fn entropy(&self) -> f64;

    /// Short human-readable summary for diagnostics.
    fn describe(&self) -> String;
}

/// One position in a composition: fixed text or a nested generator.
#[derive(Clone)]
pub enum Slot {
    Literal(String),
    Generated(Arc<dyn Generator>),
}

impl Slot {
    pub fn literal(text: impl Into<String>) -> Self {
        Slot::Literal(text.into())
    }

    pub fn generated(generator: impl Generator + 'static) -> Self {
        Slot::Generated(Arc::new(generator))
    }

    pub fn produce(&self, rng: &mut dyn RandomSource) -> EntropyValue {
        match self {
            Slot::Literal(text) => EntropyValue::literal(text.as_str()),
            Slot::Generated(generator) => generator.generate(rng),
        }
    }

    pub fn entropy(&self) -> f64 {
        match self {
            Slot::Literal(_) => 0.0,
            Slot::Generated(generator) => generator.entropy(),
        }
    }
}

impl fmt::Debug for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Literal(text) => write!(f, "Literal({:?})", text),
            Slot::Generated(generator) => write!(f, "Generated({})", generator.describe()),
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Literal(text) if text.is_empty() => write!(f, "none"),
            Slot::Literal(text) => write!(f, "literal {:?}", text),
            Slot::Generated(generator) => write!(
                f,
                "{} ({:.2} bits)",
                generator.describe(),
                generator.entropy()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::{CharSet, Picker};
    use crate::random::ScriptedSource;

    #[test]
    fn test_literal_slot() {
        let slot = Slot::literal("-");
        let mut rng = ScriptedSource::new(vec![0]);
        let value = slot.produce(&mut rng);
        assert_eq!(value.text(), "-");
        assert_eq!(value.bits(), 0.0);
        assert_eq!(slot.entropy(), 0.0);
    }

    #[test]
    fn test_generated_slot() {
        let slot = Slot::generated(Picker::preset(CharSet::Digits));
        let mut rng = ScriptedSource::new(vec![7]);
        let value = slot.produce(&mut rng);
        assert_eq!(value.text(), "7");
        assert!((value.bits() - 10f64.log2()).abs() < 1e-12);
        assert!((slot.entropy() - 10f64.log2()).abs() < 1e-12);
    }

    #[test]
    fn test_slot_display() {
        assert_eq!(Slot::literal("").to_string(), "none");
        assert_eq!(Slot::literal(" ").to_string(), "literal \" \"");
        assert!(Slot::generated(Picker::preset(CharSet::Digits))
            .to_string()
            .contains("3.32 bits"));
    }
}
