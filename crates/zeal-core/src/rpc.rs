//! RPC-specific types that do not belong to the shared domain model.
//!
//! Verbose blocks and their transactions are represented directly as
//! [`Block`](crate::types::Block) / [`Transaction`](crate::types::Transaction)
//! from `crate::types`; this module only defines structures that are
//! specific to other RPC methods.

use serde::{Deserialize, Serialize};

// ==============================================================================
// Chain Info
// ==============================================================================

/// Chain state snapshot from `getblockchaininfo`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainInfo {
    pub chain: String,
    pub blocks: u64,
    pub headers: u64,
    #[serde(rename = "bestblockhash")]
    pub best_block_hash: String,
    pub difficulty: f64,
    /// Conceptually in `[0, 1]`; reported as-is.
    #[serde(rename = "verificationprogress")]
    pub verification_progress: f64,
    pub size_on_disk: f64,
    #[serde(rename = "softforks")]
    pub soft_forks: Vec<SoftFork>,
}

/// One consensus-rule activation descriptor.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SoftFork {
    pub id: String,
    pub version: i32,
}
