use thiserror::Error;

/// Unified error type for barswap
#[derive(Error, Debug)]
pub enum BarSwapError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Frame dropped: event loop is gone")]
    FrameDropped,
}

pub type BarSwapResult<T> = Result<T, BarSwapError>;
