use thiserror::Error;

#[derive(Debug, Error)]
pub enum LabelError {
    #[error("invalid color: {0}")]
    Color(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
