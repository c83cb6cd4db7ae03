pub mod assembler;
pub mod catalog;
pub mod compose;
pub mod entropy;
pub mod error;
pub mod generator;
pub mod picker;
pub mod random;
pub mod wordlist;

pub use assembler::{generate, Password, PasswordAssembler, MAX_TARGET_BITS};
pub use catalog::{lookup, Scheme, SchemeDef, SCHEMES};
pub use entropy::EntropyValue;
pub use error::{Error, Result};
pub use generator::{Generator, Slot};
pub use picker::{CandidateSet, CharSet, Picker};
pub use random::{ChaChaSource, RandomSource};
pub use wordlist::{WordFile, WordSource, DEFAULT_WORDLIST};
