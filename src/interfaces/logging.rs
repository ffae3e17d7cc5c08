use crate::application::store::TransactionStore;
use crate::domain::observer::StoreObserver;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::info;

/// Observer that reports every store change as a `tracing` event.
#[derive(Debug, Default)]
pub struct LoggingObserver {
    updates: AtomicUsize,
}

impl LoggingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of updates received so far.
    pub fn updates(&self) -> usize {
        self.updates.load(Ordering::Relaxed)
    }
}

impl StoreObserver for LoggingObserver {
    fn update(&self, store: &TransactionStore) {
        let seq = self.updates.fetch_add(1, Ordering::Relaxed) + 1;
        let transactions = store.len();
        let matched = store.matched_count();
        match store.total_amount() {
            Some(total) => info!(seq, transactions, matched, %total, "store updated"),
            None => info!(seq, transactions, matched, total = "overflow", "store updated"),
        }
    }
}
