#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Malformed or type-mismatched RPC payload. Decoding never yields a
    /// partial record.
    #[error("invalid chain data: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
