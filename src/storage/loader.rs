//! Bulk-load path: read a JSON dataset file into transaction records

use crate::core::error::{ScopeResult, StoreError};
use crate::core::transaction::Transaction;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load a dataset from a JSON file holding an array of transactions
///
/// Records violating the `FinalAmount <= TotalAmount` invariant are kept
/// but counted and logged; the engine treats the dataset as-is.
pub fn load_transactions(path: impl AsRef<Path>) -> ScopeResult<Vec<Transaction>> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let file = File::open(path).map_err(|e| StoreError::LoadFailed {
        path: path_str.clone(),
        message: e.to_string(),
    })?;

    let transactions: Vec<Transaction> =
        serde_json::from_reader(BufReader::new(file)).map_err(|e| StoreError::LoadFailed {
            path: path_str.clone(),
            message: e.to_string(),
        })?;

    let violations = transactions
        .iter()
        .filter(|tx| tx.final_amount > tx.total_amount)
        .count();
    if violations > 0 {
        tracing::warn!(
            violations,
            path = %path_str,
            "records with FinalAmount above TotalAmount"
        );
    }

    tracing::info!(count = transactions.len(), path = %path_str, "dataset loaded");
    Ok(transactions)
}
