use thiserror::Error;

#[derive(Error, Debug)]
pub enum PointBuyError {
    #[error("{0}")]
    InvalidConfig(String),

    #[error("incompatible arguments: only one of -c, -g, and -l accepted at a time")]
    ConflictingModes,

    #[error("Input closed before a valid selection was made")]
    InputClosed,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PointBuyError>;
