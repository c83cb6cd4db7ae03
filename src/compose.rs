use crate::entropy::EntropyValue;
use crate::generator::{Generator, Slot};
use crate::picker::Picker;
use crate::random::RandomSource;
use std::sync::Arc;

/// Concatenates the output of several generators.
///
/// The separator is drawn afresh between each pair of non-empty fragments.
/// Declared entropy covers the parts only; separator bits show up in the
/// generated value but are not promised by [`Generator::entropy`].
pub struct Append {
    parts: Vec<Arc<dyn Generator>>,
    separator: Slot,
}

impl Append {
    pub fn new(parts: Vec<Arc<dyn Generator>>, separator: Slot) -> Self {
        Self { parts, separator }
    }
}

impl Generator for Append {
    fn generate(&self, rng: &mut dyn RandomSource) -> EntropyValue {
        let mut output = EntropyValue::empty();

        for part in &self.parts {
            let fragment = part.generate(rng);
            if !fragment.is_empty() && !output.is_empty() {
                output += self.separator.produce(rng);
            }
            output += fragment;
        }

        output
    }

    fn entropy(&self) -> f64 {
        self.parts.iter().map(|part| part.entropy()).sum()
    }

    fn describe(&self) -> String {
        let parts: Vec<String> = self.parts.iter().map(|part| part.describe()).collect();
        parts.join(" + ")
    }
}

/// Randomizes the case of the first and last characters of a fragment.
///
/// The case draws add bits to each generated value, but
/// [`Generator::entropy`] reports the inner figure unchanged: the extra
/// bits are a bonus, not part of the declared minimum.
pub struct Capitalize {
    inner: Arc<dyn Generator>,
}

impl Capitalize {
    pub fn new(inner: Arc<dyn Generator>) -> Self {
        Self { inner }
    }
}

fn draw_case(c: char, rng: &mut dyn RandomSource) -> EntropyValue {
    Picker::case_variants(&c.to_string()).generate(rng)
}

impl Generator for Capitalize {
    fn generate(&self, rng: &mut dyn RandomSource) -> EntropyValue {
        let fragment = self.inner.generate(rng);

        let caseless = fragment.text().to_lowercase() == fragment.text().to_uppercase();
        if caseless {
            return fragment;
        }

        let chars: Vec<char> = fragment.text().chars().collect();
        match chars.as_slice() {
            [only] => {
                let case = draw_case(*only, rng);
                EntropyValue::new(case.text(), fragment.bits() + case.bits())
            }
            [first, middle @ .., last] => {
                let head = draw_case(*first, rng);
                let tail = draw_case(*last, rng);

                let mut text = String::with_capacity(fragment.text().len() + 4);
                text.push_str(head.text());
                text.extend(middle.iter());
                text.push_str(tail.text());

                EntropyValue::new(text, fragment.bits() + head.bits() + tail.bits())
            }
            [] => fragment,
        }
    }

    fn entropy(&self) -> f64 {
        self.inner.entropy()
    }

    fn describe(&self) -> String {
        format!("capitalized {}", self.inner.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::CharSet;
    use crate::random::{ChaChaSource, ScriptedSource};

    fn words(list: &[&str]) -> Arc<dyn Generator> {
        Arc::new(Picker::from_words(list.iter().copied()).unwrap())
    }

    fn digits() -> Arc<dyn Generator> {
        Arc::new(Picker::preset(CharSet::Digits))
    }

    #[test]
    fn test_append_concatenates_in_order() {
        let append = Append::new(vec![words(&["horse"]), digits()], Slot::literal("-"));
        let mut rng = ScriptedSource::new(vec![0, 4]);
        let value = append.generate(&mut rng);
        assert_eq!(value.text(), "horse-4");
        assert!((value.bits() - 10f64.log2()).abs() < 1e-12);
    }

    #[test]
    fn test_append_entropy_excludes_separator() {
        let separator = Slot::Generated(digits());
        let append = Append::new(vec![words(&["a", "b"]), words(&["c", "d"])], separator);
        assert_eq!(append.entropy(), 2.0);

        let mut rng = ChaChaSource::from_key(&[1u8; 32]);
        let value = append.generate(&mut rng);
        assert_eq!(value.char_len(), 3);
        assert!((value.bits() - (2.0 + 10f64.log2())).abs() < 1e-12);
    }

    #[test]
    fn test_append_skips_separator_around_empty() {
        struct Blank;
        impl Generator for Blank {
            fn generate(&self, _rng: &mut dyn RandomSource) -> EntropyValue {
                EntropyValue::empty()
            }
            fn entropy(&self) -> f64 {
                0.0
            }
            fn describe(&self) -> String {
                "blank".to_string()
            }
        }

        let blank: Arc<dyn Generator> = Arc::new(Blank);
        let append = Append::new(
            vec![
                blank.clone(),
                words(&["cat"]),
                blank.clone(),
                words(&["dog"]),
                blank,
            ],
            Slot::literal(" "),
        );
        let mut rng = ScriptedSource::new(vec![0]);
        assert_eq!(append.generate(&mut rng).text(), "cat dog");
    }

    #[test]
    fn test_append_empty_parts() {
        let append = Append::new(Vec::new(), Slot::literal("-"));
        let mut rng = ScriptedSource::new(vec![0]);
        let value = append.generate(&mut rng);
        assert!(value.is_empty());
        assert_eq!(append.entropy(), 0.0);
    }

    #[test]
    fn test_capitalize_first_and_last_only() {
        let capitalize = Capitalize::new(words(&["staple"]));
        // head -> upper, tail -> upper
        let mut rng = ScriptedSource::new(vec![0, 1, 1]);
        let value = capitalize.generate(&mut rng);
        assert_eq!(value.text(), "StaplE");
        assert_eq!(value.bits(), 2.0);

        let mut rng = ScriptedSource::new(vec![0, 0, 1]);
        assert_eq!(capitalize.generate(&mut rng).text(), "staplE");
    }

    #[test]
    fn test_capitalize_declared_entropy_is_inner() {
        let inner = words(&["cat", "dog", "emu", "yak"]);
        let capitalize = Capitalize::new(inner.clone());
        assert_eq!(capitalize.entropy(), inner.entropy());

        let mut rng = ChaChaSource::from_key(&[2u8; 32]);
        let value = capitalize.generate(&mut rng);
        assert_eq!(value.bits(), 4.0);
        assert!(value.bits() > capitalize.entropy());
    }

    #[test]
    fn test_capitalize_caseless_unchanged() {
        let capitalize = Capitalize::new(words(&["42", "--"]));
        let mut rng = ChaChaSource::from_key(&[4u8; 32]);
        for _ in 0..20 {
            let value = capitalize.generate(&mut rng);
            assert!(value.text() == "42" || value.text() == "--");
            assert_eq!(value.bits(), 1.0);
        }
    }

    #[test]
    fn test_capitalize_mixed_tail() {
        let capitalize = Capitalize::new(words(&["r2"]));
        let mut rng = ScriptedSource::new(vec![0, 1]);
        let value = capitalize.generate(&mut rng);
        assert_eq!(value.text(), "R2");
        assert_eq!(value.bits(), 1.0);
    }

    #[test]
    fn test_capitalize_single_letter_balanced() {
        let capitalize = Capitalize::new(words(&["a"]));
        let mut rng = ChaChaSource::from_key(&[8u8; 32]);
        let trials = 10_000;

        let mut upper = 0;
        for _ in 0..trials {
            let value = capitalize.generate(&mut rng);
            assert_eq!(value.bits(), 1.0);
            match value.text() {
                "A" => upper += 1,
                "a" => {}
                other => panic!("unexpected variant {:?}", other),
            }
        }

        // Five standard deviations either side of trials / 2.
        let deviation = (upper as f64 - trials as f64 / 2.0).abs();
        assert!(deviation < 250.0, "upper-case count {} is unbalanced", upper);
    }

    #[test]
    fn test_capitalize_describe() {
        let capitalize = Capitalize::new(words(&["cat", "dog"]));
        assert_eq!(capitalize.describe(), "capitalized words (2)");
    }
}
