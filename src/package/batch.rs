//! Running one operation over several packages
//!
//! Items are processed in input order. A recoverable error (see
//! [`PrionError::is_recoverable`]) is recorded and the batch moves on; any
//! other error is recorded and ends the batch, leaving the remaining items
//! unattempted. Degraded updates are successful results and never stop a batch.

use crate::error::{PrionError, Result};

/// Result for a single item of a batch.
#[derive(Debug)]
pub struct BatchEntry<T> {
    /// The name or URL the operation ran on.
    pub item: String,
    pub result: Result<T>,
}

#[derive(Debug)]
pub struct BatchReport<T> {
    pub entries: Vec<BatchEntry<T>>,
    /// Items never attempted because an earlier one failed fatally.
    pub skipped: Vec<String>,
}

impl<T> BatchReport<T> {
    /// Whether every item was attempted and none failed.
    pub fn is_success(&self) -> bool {
        self.skipped.is_empty() && self.entries.iter().all(|entry| entry.result.is_ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &PrionError)> {
        self.entries.iter().filter_map(|entry| match &entry.result {
            Ok(_) => None,
            Err(err) => Some((entry.item.as_str(), err)),
        })
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

}

/// Run `op` over `items` with the batch rules described above.
pub fn run_batch<T, F>(items: &[String], mut op: F) -> BatchReport<T>
where
    F: FnMut(&str) -> Result<T>,
{
    let mut entries = Vec::with_capacity(items.len());
    let mut skipped = Vec::new();

    for (index, item) in items.iter().enumerate() {
        let result = op(item);
        let fatal = matches!(&result, Err(err) if !err.is_recoverable());
        entries.push(BatchEntry {
            item: item.clone(),
            result,
        });
        if fatal {
            skipped = items[index + 1..].to_vec();
            break;
        }
    }

    BatchReport { entries, skipped }
}
