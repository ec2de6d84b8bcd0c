use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong before a session gets going.
///
/// Once the TUI is up, keystrokes and ticks never fail; only startup
/// (config, vocabulary) and the terminal itself can.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("built-in vocabulary `{name}` is missing or malformed")]
    BuiltinVocabulary { name: String },

    #[error("vocabulary has {found} unique words, at least {required} are needed")]
    VocabularyTooSmall { found: usize, required: usize },

    #[error("unsupported word count {0}, expected one of 10, 25, 50")]
    InvalidMode(usize),

    #[error("countdown must last at least one second")]
    InvalidDuration,

    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] std::io::Error),
}
