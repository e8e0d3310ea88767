use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Amount error: {0}")]
    AmountError(String),
    #[error("Format error: {0}")]
    FormatError(String),
    #[error("RPC error in {method}: {message}")]
    RpcError { method: String, message: String },
    #[error("Unknown method: {0}")]
    UnknownMethod(String),
    #[error("No synchronous variant named {0}")]
    NoSyncVariant(String),
}

pub type Result<T> = std::result::Result<T, CliError>;
