pub mod error;
pub mod metrics;
pub mod rpc;
pub mod types;

#[cfg(test)]
mod test_util;

pub use error::CoreError;
pub use metrics::BlockMetric;
pub use types::{Block, Transaction};

/// Decode a raw RPC payload into one of the typed records.
///
/// Unknown JSON fields are ignored and absent fields take their type's
/// default value, mirroring how zcashd omits optional keys. A payload that
/// is not valid JSON, or that carries the wrong type for a known field,
/// fails with [`CoreError::Decode`].
pub fn from_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T, CoreError> {
    Ok(serde_json::from_slice(bytes)?)
}
