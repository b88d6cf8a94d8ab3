//! Per-block summary metrics.
//!
//! [`BlockMetric`] flattens one verbose block into the row shape consumed by
//! downstream reporting: transaction counts by shielding class plus the
//! running shielded-pool totals.

use serde::{Deserialize, Serialize};

use crate::types::Block;

/// Summary statistics for one block.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockMetric {
    pub height: u64,
    #[serde(rename = "number_of_transactions")]
    pub transactions: u64,
    pub sapling_value_pool: f64,
    pub sprout_value_pool: f64,
    pub size: u64,
    pub time: i64,
    #[serde(rename = "number_of_transparent_transactions")]
    pub transparent: u64,
    #[serde(rename = "number_of_shielded_transactions")]
    pub shielded: u64,
    #[serde(rename = "number_of_mixed_transactions")]
    pub mixed: u64,
}

impl BlockMetric {
    /// Summarize one block.
    ///
    /// Each class counter tallies the transactions satisfying its predicate.
    /// The predicates overlap, so the three counters are independent tallies
    /// rather than a partition of `transactions`.
    pub fn for_block(block: &Block) -> Self {
        warn_on_duplicate_pools(block);

        let mut transparent = 0;
        let mut shielded = 0;
        let mut mixed = 0;
        for tx in &block.tx {
            if tx.is_transparent() {
                transparent += 1;
            }
            if tx.is_shielded() {
                shielded += 1;
            }
            if tx.is_mixed() {
                mixed += 1;
            }
        }

        Self {
            height: block.height,
            transactions: block.tx.len() as u64,
            sapling_value_pool: block.sapling_value_pool(),
            sprout_value_pool: block.sprout_value_pool(),
            size: block.size,
            time: block.time,
            transparent,
            shielded,
            mixed,
        }
    }
}

// The pool accessors take the first entry per id; repeated ids are worth a
// warning since they indicate a malformed node response.
fn warn_on_duplicate_pools(block: &Block) {
    for (i, pool) in block.value_pools.iter().enumerate() {
        if block.value_pools[..i].iter().any(|p| p.id == pool.id) {
            tracing::warn!(
                height = block.height,
                pool = %pool.id,
                "duplicate value pool entry ignored, first one wins"
            );
        }
    }
}
