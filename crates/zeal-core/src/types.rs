//! Domain types for the zcashd verbose block model.
//!
//! Contains the block and transaction records decoded from `getblock`
//! (verbosity 2) responses, the shielded value pool records, and the
//! transparent/shielded/mixed classification predicates.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use crate::error::CoreError;

// ==============================================================================
// Block
// ==============================================================================

/// A mined block with fully decoded transactions.
///
/// `previous_block_hash` / `next_block_hash` are lookup keys into whatever
/// store the caller keeps; they are never resolved to in-memory links.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Block {
    pub hash: String,
    pub confirmations: i64,
    pub size: u64,
    pub height: u64,
    pub version: i32,
    /// Transactions in chain order.
    pub tx: Vec<Transaction>,
    pub time: i64,
    pub difficulty: f64,
    #[serde(rename = "previousblockhash")]
    pub previous_block_hash: String,
    #[serde(rename = "nextblockhash")]
    pub next_block_hash: String,
    #[serde(rename = "valuePools")]
    pub value_pools: Vec<ValuePool>,
}

impl Block {
    /// Count transactions by the legacy two-bucket split.
    ///
    /// The first counter covers transactions carrying any shielded data
    /// (joinsplits, shielded outputs, or shielded spends); the second covers
    /// the rest. Downstream report files read the buckets as
    /// (transparent, shielded). That labelling is inverted relative to
    /// [`Transaction::is_transparent`] / [`Transaction::is_shielded`] and
    /// is kept as-is so existing consumers keep reading the same columns.
    /// The two counters always sum to `tx.len()`.
    pub fn transaction_types(&self) -> (usize, usize) {
        let mut transparent = 0;
        let mut shielded = 0;
        for tx in &self.tx {
            if !tx.vjoinsplit.is_empty()
                || !tx.shielded_outputs.is_empty()
                || !tx.shielded_spends.is_empty()
            {
                transparent += 1;
            } else {
                shielded += 1;
            }
        }
        (transparent, shielded)
    }

    /// Running chain-wide total of the sapling pool, `0.0` when the block
    /// reports no sapling entry.
    pub fn sapling_value_pool(&self) -> f64 {
        self.value_pool("sapling")
    }

    /// Running chain-wide total of the sprout pool, `0.0` when the block
    /// reports no sprout entry.
    pub fn sprout_value_pool(&self) -> f64 {
        self.value_pool("sprout")
    }

    // Ids match case-sensitively; on duplicates the first entry wins.
    fn value_pool(&self, id: &str) -> f64 {
        self.value_pools
            .iter()
            .find(|pool| pool.id == id)
            .map(|pool| pool.chain_value)
            .unwrap_or(0.0)
    }

    pub fn transaction_count(&self) -> usize {
        self.tx.len()
    }

    /// Serialize the block to 4-space-indented JSON and write it to `path`,
    /// creating or truncating the file. New files are created mode 0644
    /// (owner-writable, world-readable).
    ///
    /// The JSON is produced fully in memory before the filesystem is
    /// touched, so an existing file keeps its prior contents when
    /// serialization fails.
    pub fn write_to_file(&self, path: &Path) -> Result<(), CoreError> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser).map_err(std::io::Error::from)?;

        let mut opts = fs::OpenOptions::new();
        opts.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            opts.mode(0o644);
        }
        let mut file = opts.open(path)?;
        file.write_all(&buf)?;
        tracing::debug!(
            path = %path.display(),
            height = self.height,
            transactions = self.tx.len(),
            "wrote block to file"
        );
        Ok(())
    }
}

// ==============================================================================
// Value Pools
// ==============================================================================

/// Running chain-wide total for one shielded pool (`"sprout"` or
/// `"sapling"`), as reported per block.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValuePool {
    pub id: String,
    pub monitored: bool,
    #[serde(rename = "chainValue")]
    pub chain_value: f64,
    #[serde(rename = "chainValueZat")]
    pub chain_value_zat: f64,
    #[serde(rename = "valueDelta")]
    pub value_delta: f64,
    #[serde(rename = "valueDeltaZat")]
    pub value_delta_zat: f64,
}

// ==============================================================================
// Transaction
// ==============================================================================

/// One transaction within a block.
///
/// Sprout involvement shows up as `vjoinsplit` entries; sapling involvement
/// as a non-zero `value_balance` plus `vShieldedSpend` / `vShieldedOutput`
/// descriptors. The shielded descriptors stay opaque key-value records;
/// classification only ever looks at whether they are present.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Transaction {
    pub hex: String,
    pub txid: String,
    pub version: i32,
    pub locktime: u32,
    // Historical key spelling, preserved for round-trip compatibility.
    #[serde(rename = "expirtheight")]
    pub expiry_height: u32,
    pub vin: Vec<TxIn>,
    pub vout: Vec<TxOut>,
    pub vjoinsplit: Vec<JoinSplit>,
    #[serde(rename = "valueBalance")]
    pub value_balance: f64,
    #[serde(rename = "vShieldedSpend")]
    pub shielded_spends: Vec<serde_json::Map<String, serde_json::Value>>,
    #[serde(rename = "vShieldedOutput")]
    pub shielded_outputs: Vec<serde_json::Map<String, serde_json::Value>>,
}

impl Transaction {
    /// The transaction both spends and creates transparent coins.
    pub fn transparent_in_and_out(&self) -> bool {
        !self.vin.is_empty() && !self.vout.is_empty()
    }

    /// Transparent on both sides with no joinsplits, a zero sapling balance,
    /// and no shielded spends.
    ///
    /// Shielded outputs are not consulted here; callers needing the full
    /// sapling test use [`Transaction::contains_sapling`].
    pub fn is_transparent(&self) -> bool {
        self.transparent_in_and_out()
            && self.vjoinsplit.is_empty()
            && self.value_balance == 0.0
            && self.shielded_spends.is_empty()
    }

    /// The transaction carries sprout joinsplit data.
    pub fn contains_sprout(&self) -> bool {
        !self.vjoinsplit.is_empty()
    }

    /// The transaction carries sapling data: a non-zero shielded balance
    /// delta together with at least one shielded spend or output.
    pub fn contains_sapling(&self) -> bool {
        self.value_balance != 0.0
            && (!self.shielded_spends.is_empty() || !self.shielded_outputs.is_empty())
    }

    /// Shielded data with no transparent in/out pair.
    pub fn is_shielded(&self) -> bool {
        !self.transparent_in_and_out() && (self.contains_sprout() || self.contains_sapling())
    }

    /// Shielded data alongside at least one transparent input or output.
    pub fn is_mixed(&self) -> bool {
        let transparent_in_or_out = !self.vin.is_empty() || !self.vout.is_empty();
        transparent_in_or_out && (self.contains_sprout() || self.contains_sapling())
    }
}

// ==============================================================================
// Transparent Inputs and Outputs
// ==============================================================================

/// A transparent input referencing `txid:vout` of the funding transaction.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TxIn {
    pub txid: String,
    pub vout: u32,
    // The unrenamed and misspelled keys below match the files this crate
    // round-trips with.
    #[serde(rename = "ScriptSig")]
    pub script_sig: ScriptSig,
    #[serde(rename = "sequemce")]
    pub sequence: u32,
}

/// Placeholder until script fields are needed beyond presence.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptSig {}

/// A transparent output.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TxOut {
    #[serde(rename = "Value")]
    pub value: f64,
    #[serde(rename = "N")]
    pub n: u32,
    #[serde(rename = "ScriptPubKey")]
    pub script_pub_key: ScriptPubKey,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptPubKey {
    #[serde(rename = "type")]
    pub kind: String,
    pub addresses: Vec<String>,
}

// ==============================================================================
// Sprout Joinsplits
// ==============================================================================

/// A sprout shielded value transfer. Presence alone signals sprout
/// involvement; the public in/out amounts are kept for reporting.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JoinSplit {
    pub vpub_old: f64,
    pub vpub_new: f64,
}
