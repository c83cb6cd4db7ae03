use crate::catalog::{self, Scheme};
use crate::entropy::EntropyValue;
use crate::error::{Error, Result};
use crate::generator::Slot;
use crate::random::RandomSource;
use crate::wordlist::WordSource;
use std::collections::VecDeque;
use zeroize::Zeroizing;

/// Largest accepted target. Anything above it would only grow the output
/// without bound.
pub const MAX_TARGET_BITS: f64 = 4096.0;

/// A finished password and how much entropy went into it.
#[derive(Debug)]
pub struct Password {
    pub text: Zeroizing<String>,
    pub bits: f64,
    /// Length in characters.
    pub length: usize,
}

/// Appends generator and separator fragments, alternating, until the
/// accumulated entropy reaches the target.
pub struct PasswordAssembler {
    scheme: Scheme,
    target_bits: f64,
}

impl PasswordAssembler {
    pub fn new(scheme: Scheme, target_bits: f64) -> Result<Self> {
        if !target_bits.is_finite() || target_bits <= 0.0 || target_bits > MAX_TARGET_BITS {
            return Err(Error::InvalidTarget(target_bits));
        }

        // Nothing to accumulate means the loop would never end.
        if scheme.entropy_per_rotation() <= 0.0 {
            return Err(Error::ZeroEntropy(scheme.name.to_string()));
        }

        Ok(Self {
            scheme,
            target_bits,
        })
    }

    pub fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    pub fn target_bits(&self) -> f64 {
        self.target_bits
    }

    pub fn run(&self, rng: &mut dyn RandomSource) -> Password {
        // Popping the front and pushing it to the back makes the first
        // iteration draw from the generator.
        let mut rotation: VecDeque<Slot> = VecDeque::with_capacity(2);
        rotation.push_back(Slot::Generated(self.scheme.generator.clone()));
        rotation.push_back(self.scheme.separator.clone());

        let mut accumulated = EntropyValue::empty();
        let mut iterations = 0usize;

        while accumulated.bits() < self.target_bits {
            let Some(slot) = rotation.pop_front() else {
                break;
            };
            accumulated += slot.produce(rng);
            rotation.push_back(slot);
            iterations += 1;
        }

        tracing::debug!(
            scheme = self.scheme.name,
            iterations,
            target = self.target_bits,
            bits = accumulated.bits(),
            "assembled password"
        );

        let bits = accumulated.bits();
        let length = accumulated.char_len();
        Password {
            text: accumulated.into_text(),
            bits,
            length,
        }
    }
}

/// Looks up `scheme_name`, builds it over `words` and assembles one password
/// of at least `target_bits`.
pub fn generate(
    scheme_name: &str,
    target_bits: f64,
    words: &dyn WordSource,
    rng: &mut dyn RandomSource,
) -> Result<Password> {
    let scheme = catalog::lookup(scheme_name)?.build(words)?;
    let assembler = PasswordAssembler::new(scheme, target_bits)?;
    Ok(assembler.run(rng))
}
