use crate::compose::{Append, Capitalize};
use crate::error::{Error, Result};
use crate::generator::{Generator, Slot};
use crate::picker::{CharSet, Picker};
use crate::wordlist::WordSource;
use std::sync::Arc;

/// How a scheme's generator is put together.
#[derive(Debug, Clone, Copy)]
pub enum Part {
    Words,
    CapitalizedWords,
    Chars(CharSet),
    /// Concatenation of parts joined by a literal.
    Append(&'static [Part], &'static str),
}

impl Part {
    fn uses_words(self) -> bool {
        match self {
            Part::Words | Part::CapitalizedWords => true,
            Part::Chars(_) => false,
            Part::Append(parts, _) => parts.iter().any(|part| part.uses_words()),
        }
    }
}

/// What goes between two generator fragments.
#[derive(Debug, Clone, Copy)]
pub enum Sep {
    Literal(&'static str),
    Chars(CharSet),
}

#[derive(Debug)]
pub struct SchemeDef {
    pub name: &'static str,
    pub description: &'static str,
    pub generator: Part,
    pub separator: Sep,
}

pub static SCHEMES: &[SchemeDef] = &[
    SchemeDef {
        name: "words",
        description: "words separated by spaces",
        generator: Part::Words,
        separator: Sep::Literal(" "),
    },
    SchemeDef {
        name: "words_numbers",
        description: "words separated by random digits",
        generator: Part::Words,
        separator: Sep::Chars(CharSet::Digits),
    },
    SchemeDef {
        name: "words_shiftnumbers",
        description: "words separated by random digits or !@#$%^&*()",
        generator: Part::Words,
        separator: Sep::Chars(CharSet::ShiftDigits),
    },
    SchemeDef {
        name: "words_cases",
        description: "words with random first/last letter case, separated by spaces",
        generator: Part::CapitalizedWords,
        separator: Sep::Literal(" "),
    },
    SchemeDef {
        name: "words_cases_numbers",
        description: "words with random first/last letter case, separated by random digits",
        generator: Part::CapitalizedWords,
        separator: Sep::Chars(CharSet::Digits),
    },
    SchemeDef {
        name: "words_cases_shiftnumbers",
        description: "words with random first/last letter case, separated by digits or !@#$%^&*()",
        generator: Part::CapitalizedWords,
        separator: Sep::Chars(CharSet::ShiftDigits),
    },
    SchemeDef {
        name: "word_digit",
        description: "words each followed by a digit, separated by spaces",
        generator: Part::Append(&[Part::Words, Part::Chars(CharSet::Digits)], ""),
        separator: Sep::Literal(" "),
    },
    SchemeDef {
        name: "ascii",
        description: "printable ASCII characters including space",
        generator: Part::Chars(CharSet::Printable),
        separator: Sep::Literal(""),
    },
    SchemeDef {
        name: "ascii_lower",
        description: "printable ASCII characters without uppercase letters",
        generator: Part::Chars(CharSet::PrintableLower),
        separator: Sep::Literal(""),
    },
    SchemeDef {
        name: "lower_number",
        description: "lowercase letters and digits",
        generator: Part::Chars(CharSet::LowerDigits),
        separator: Sep::Literal(""),
    },
    SchemeDef {
        name: "alnum",
        description: "letters and digits",
        generator: Part::Chars(CharSet::Alphanumeric),
        separator: Sep::Literal(""),
    },
    SchemeDef {
        name: "hex",
        description: "lowercase hexadecimal digits",
        generator: Part::Chars(CharSet::Hex),
        separator: Sep::Literal(""),
    },
    SchemeDef {
        name: "pin",
        description: "decimal digits",
        generator: Part::Chars(CharSet::Digits),
        separator: Sep::Literal(""),
    },
];

pub fn lookup(name: &str) -> Result<&'static SchemeDef> {
    SCHEMES
        .iter()
        .find(|scheme| scheme.name == name)
        .ok_or_else(|| Error::UnknownScheme(name.to_string()))
}

/// A scheme with its generators instantiated.
pub struct Scheme {
    pub name: &'static str,
    pub generator: Arc<dyn Generator>,
    pub separator: Slot,
}

impl Scheme {
    /// Declared bits for one generator fragment followed by one separator.
    pub fn entropy_per_rotation(&self) -> f64 {
        self.generator.entropy() + self.separator.entropy()
    }
}

impl SchemeDef {
    pub fn uses_words(&self) -> bool {
        self.generator.uses_words()
    }

    /// Instantiates the scheme. `words` is only read when a part needs it.
    pub fn build(&self, words: &dyn WordSource) -> Result<Scheme> {
        let mut builder = Builder {
            words,
            word_picker: None,
        };

        let generator = builder.part(self.generator)?;
        let separator = match self.separator {
            Sep::Literal(text) => Slot::literal(text),
            Sep::Chars(set) => Slot::generated(Picker::preset(set)),
        };

        tracing::debug!(
            scheme = self.name,
            generator = %generator.describe(),
            separator = %separator,
            "built scheme"
        );

        Ok(Scheme {
            name: self.name,
            generator,
            separator,
        })
    }
}

struct Builder<'a> {
    words: &'a dyn WordSource,
    word_picker: Option<Arc<dyn Generator>>,
}

impl Builder<'_> {
    fn word_picker(&mut self) -> Result<Arc<dyn Generator>> {
        if let Some(picker) = &self.word_picker {
            return Ok(Arc::clone(picker));
        }

        let words = self.words.words()?;
        let picker: Arc<dyn Generator> = Arc::new(Picker::from_words(words.iter().cloned())?);
        self.word_picker = Some(Arc::clone(&picker));
        Ok(picker)
    }

    fn part(&mut self, part: Part) -> Result<Arc<dyn Generator>> {
        let generator: Arc<dyn Generator> = match part {
            Part::Words => self.word_picker()?,
            Part::CapitalizedWords => Arc::new(Capitalize::new(self.word_picker()?)),
            Part::Chars(set) => Arc::new(Picker::preset(set)),
            Part::Append(parts, separator) => {
                let parts = parts
                    .iter()
                    .map(|part| self.part(*part))
                    .collect::<Result<Vec<_>>>()?;
                Arc::new(Append::new(parts, Slot::literal(separator)))
            }
        };
        Ok(generator)
    }
}
