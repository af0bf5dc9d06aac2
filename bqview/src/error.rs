/*!
Error type for bqview
*/

use thiserror::Error;

#[derive(Error, Debug)]
/// Bqview error
pub enum Error {
    /// Invalid format
    #[error("{0} doesn't have the right format")]
    InvalidFormat(String),
    /// Not found
    #[error("{0} not found")]
    NotFound(String),
    /// Already exists
    #[error("{0} already exists")]
    AlreadyExists(String),
    /// Serde json
    #[error(transparent)]
    JSONSerde(#[from] serde_json::Error),
    /// Url parse
    #[error(transparent)]
    Url(#[from] url::ParseError),
    /// Io error
    #[error(transparent)]
    IO(#[from] std::io::Error),
    /// External error
    #[error(transparent)]
    External(#[from] Box<dyn std::error::Error + Send + Sync>),
}
