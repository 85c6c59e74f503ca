use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("reader error: {0}")]
    Reader(#[from] gaia_reader_core::ReaderError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;
