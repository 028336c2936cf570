use thiserror::Error;

/// Errors the demo application can hit. The widget itself is infallible;
/// everything here is terminal I/O.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
