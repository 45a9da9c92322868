use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}
