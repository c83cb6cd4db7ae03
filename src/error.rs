use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown scheme \"{0}\" (use --list to see available schemes)")]
    UnknownScheme(String),

    #[error("target entropy must be above 0 and at most 4096 bits, got {0}")]
    InvalidTarget(f64),

    #[error("candidate set for {0} is empty")]
    EmptyCandidateSet(String),

    /// The generator and separator declare zero bits together, so the
    /// target could never be reached. Bonus bits a generator produces without
    /// declaring them do not count: a one-word list under `words_cases` is
    /// rejected even though its case draws yield bits.
    #[error("scheme \"{0}\" yields no entropy per rotation")]
    ZeroEntropy(String),

    #[error("failed to read word list {}", path.display())]
    WordList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The operating system CSPRNG could not be read. Never recovered from.
    #[error("secure random source unavailable: {0}")]
    RandomnessUnavailable(String),
}

impl Error {
    /// Caller-supplied settings are at fault; retrying cannot help.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, Error::RandomnessUnavailable(_))
    }
}
