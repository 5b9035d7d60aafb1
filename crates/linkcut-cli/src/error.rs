use linkcut_shortener::ShortenerError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("input ended before {0} was entered")]
    UnexpectedEof(&'static str),
    #[error("unknown menu choice '{0}', expected 1, 2 or 3")]
    UnknownChoice(String),
    #[error(transparent)]
    Shortener(#[from] ShortenerError),
}
