use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("expected {expected} words on input, found {found}")]
    MissingWord { expected: usize, found: usize },

    #[error("unknown comparison unit `{0}` (expected `chars` or `bytes`)")]
    InvalidUnit(String),
}

pub type Result<T> = std::result::Result<T, Error>;
