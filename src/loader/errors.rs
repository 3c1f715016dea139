use crate::serial::Error as SerialError;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
    #[error("failed to open port {path}: {source}")]
    PortOpen { path: String, source: SerialError },

    #[error("failed to open source file {path}: {source}")]
    FileOpen { path: String, source: std::io::Error },

    #[error("failed to read source file: {0}")]
    FileRead(#[source] std::io::Error),

    #[error(transparent)]
    Transfer(#[from] SerialError),

    #[error("device sent invalid utf-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    #[error("failed to echo device response: {0}")]
    Echo(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
