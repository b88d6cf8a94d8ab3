//! Shared test helpers for `zeal-core` unit tests.
//!
//! Builder functions for blocks, transactions, and value pools so that
//! tests across modules share a single source of truth for dummy data
//! construction. Override individual fields with struct update syntax
//! when a test needs more than the defaults.

use serde_json::{Map, Value};

use crate::types::{
    Block, JoinSplit, ScriptPubKey, ScriptSig, Transaction, TxIn, TxOut, ValuePool,
};

/// A transparent input spending output 0 of a fixed funding transaction.
pub fn transparent_input() -> TxIn {
    TxIn {
        txid: "ab".repeat(32),
        vout: 0,
        script_sig: ScriptSig {},
        sequence: 0xFFFF_FFFF,
    }
}

/// A transparent output paying `value` coins to a fixed t-address.
pub fn transparent_output(value: f64) -> TxOut {
    TxOut {
        value,
        n: 0,
        script_pub_key: ScriptPubKey {
            kind: "pubkeyhash".into(),
            addresses: vec!["t1KjU2TUgNuWmbyEmyh1SyCohQbQFBv8qvT".into()],
        },
    }
}

pub fn joinsplit(vpub_old: f64, vpub_new: f64) -> JoinSplit {
    JoinSplit { vpub_old, vpub_new }
}

/// One opaque sapling spend/output descriptor. Tests only care about
/// presence, so a single dummy key is enough.
pub fn shielded_descriptor() -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("cv".into(), Value::String("deadbeef".into()));
    map
}

/// Build a sapling-era transaction with the given transparent sides and
/// no shielded data.
pub fn make_tx(vin: Vec<TxIn>, vout: Vec<TxOut>) -> Transaction {
    Transaction {
        hex: String::new(),
        txid: "00".repeat(32),
        version: 4,
        locktime: 0,
        expiry_height: 0,
        vin,
        vout,
        vjoinsplit: Vec::new(),
        value_balance: 0.0,
        shielded_spends: Vec::new(),
        shielded_outputs: Vec::new(),
    }
}

pub fn value_pool(id: &str, chain_value: f64) -> ValuePool {
    ValuePool {
        id: id.into(),
        monitored: true,
        chain_value,
        chain_value_zat: chain_value * 1e8,
        value_delta: 0.0,
        value_delta_zat: 0.0,
    }
}

/// Build a block at a fixed height holding the given transactions and
/// value pool entries.
pub fn make_block(tx: Vec<Transaction>, value_pools: Vec<ValuePool>) -> Block {
    Block {
        hash: "0e".repeat(32),
        confirmations: 10,
        size: 1994,
        height: 570_000,
        version: 4,
        tx,
        time: 1_556_813_963,
        difficulty: 40_918_243.0,
        previous_block_hash: "aa".repeat(32),
        next_block_hash: "bb".repeat(32),
        value_pools,
    }
}
