use thiserror::Error;

/// Errors raised at the edges of the simulator: loading words, checking
/// inputs and reading configuration. The guessing loop itself never fails.
#[derive(Debug, Error)]
pub enum Error {
    #[error("word list is empty")]
    EmptyCorpus,

    #[error("invalid word {word:?}: {reason}")]
    InvalidWord { word: String, reason: &'static str },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
