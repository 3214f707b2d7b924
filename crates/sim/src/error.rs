/// Errors raised by the host harness.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("Invalid store URL: {0}")]
    InvalidUrl(String),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Protocol error: {0}")]
    ProtocolError(String),

    #[error("Timeout waiting for {0}")]
    Timeout(&'static str),

    #[error("Encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
