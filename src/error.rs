#[derive(Debug, thiserror::Error)]
pub enum SectorscopeError {
    #[error("no data to export")]
    EmptyExport,

    #[error("unknown mode: {0}")]
    UnknownMode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SectorscopeError>;
