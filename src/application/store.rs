use crate::domain::observer::StoreObserver;
use crate::domain::transaction::Transaction;
use crate::error::{Result, StoreError};
use rust_decimal::Decimal;
use std::fmt;
use std::sync::{Arc, Weak};
use tracing::debug;

/// Observable in-memory model of the expense list.
///
/// Holds the transactions in insertion order, the indices that currently
/// satisfy an externally computed filter, and weak associations to the
/// observers that are told about every change.
///
/// Invariants:
/// * every matched index is `< self.len()`;
/// * adding or removing a transaction clears the matched indices;
/// * an observer is registered at most once.
///
/// The store is not internally synchronized. Share it across threads behind a
/// single `Mutex`.
#[derive(Default)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    matched_filter_indices: Vec<usize>,
    observers: Vec<Weak<dyn StoreObserver>>,
}

impl TransactionStore {
    /// Creates an empty store with no observers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a transaction and invalidates the current filter.
    pub fn add_transaction(&mut self, tx: Transaction) {
        debug!(amount = %tx.amount.value(), category = %tx.category, "adding transaction");
        self.transactions.push(tx);
        self.matched_filter_indices.clear();
        self.state_changed();
    }

    /// Removes the first transaction equal to `tx`.
    ///
    /// The filter is cleared and observers are notified even when no
    /// transaction matched. Returns whether anything was removed.
    pub fn remove_transaction(&mut self, tx: &Transaction) -> bool {
        let removed = match self.transactions.iter().position(|t| t == tx) {
            Some(pos) => {
                self.transactions.remove(pos);
                true
            }
            None => false,
        };
        debug!(removed, "removing transaction");
        self.matched_filter_indices.clear();
        self.state_changed();
        removed
    }

    /// Snapshot of all transactions in insertion order.
    pub fn transactions(&self) -> Vec<Transaction> {
        self.transactions.clone()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Sum of all transaction amounts, or `None` if it does not fit in a
    /// `Decimal`.
    pub fn total_amount(&self) -> Option<Decimal> {
        self.transactions
            .iter()
            .try_fold(Decimal::ZERO, |acc, tx| acc.checked_add(tx.amount.value()))
    }

    /// Replaces the matched filter indices.
    ///
    /// Every index is checked against the current number of transactions
    /// before anything is touched, so a rejected call leaves the store as it
    /// was and notifies nobody.
    pub fn set_matched_filter_indices(&mut self, indices: &[usize]) -> Result<()> {
        let len = self.transactions.len();
        if let Some(bad) = indices.iter().find(|&&index| index >= len) {
            return Err(StoreError::InvalidArgument(format!(
                "matched index {bad} out of range for {len} transactions"
            )));
        }

        debug!(count = indices.len(), "setting matched filter indices");
        self.matched_filter_indices.clear();
        self.matched_filter_indices.extend_from_slice(indices);
        self.state_changed();
        Ok(())
    }

    pub fn matched_filter_indices(&self) -> Vec<usize> {
        self.matched_filter_indices.clone()
    }

    pub fn matched_count(&self) -> usize {
        self.matched_filter_indices.len()
    }

    /// Transactions at the matched indices, in the order the indices were set.
    pub fn matched_transactions(&self) -> Vec<Transaction> {
        self.matched_filter_indices
            .iter()
            .map(|&index| self.transactions[index].clone())
            .collect()
    }

    /// Associates an observer with the store without taking ownership of it.
    ///
    /// Returns `false` if the observer is already registered.
    pub fn register<O: StoreObserver + 'static>(&mut self, observer: &Arc<O>) -> bool {
        let weak: Weak<dyn StoreObserver> = Arc::<O>::downgrade(observer);
        self.prune_observers();
        if self.observers.iter().any(|o| Weak::ptr_eq(o, &weak)) {
            return false;
        }
        self.observers.push(weak);
        true
    }

    /// Drops the association with an observer. Returns `false` if it was not
    /// registered.
    pub fn unregister<O: StoreObserver + 'static>(&mut self, observer: &Arc<O>) -> bool {
        let weak: Weak<dyn StoreObserver> = Arc::<O>::downgrade(observer);
        let before = self.observers.len();
        self.observers.retain(|o| !Weak::ptr_eq(o, &weak));
        self.observers.len() != before
    }

    /// Number of registered observers that are still alive.
    pub fn number_of_listeners(&self) -> usize {
        self.observers.iter().filter(|o| o.strong_count() > 0).count()
    }

    pub fn contains_listener<O: StoreObserver + 'static>(&self, observer: &Arc<O>) -> bool {
        let weak: Weak<dyn StoreObserver> = Arc::<O>::downgrade(observer);
        self.observers.iter().any(|o| Weak::ptr_eq(o, &weak))
    }

    fn prune_observers(&mut self) {
        self.observers.retain(|o| o.strong_count() > 0);
    }

    fn state_changed(&mut self) {
        self.prune_observers();
        let snapshot: Vec<Arc<dyn StoreObserver>> =
            self.observers.iter().filter_map(Weak::upgrade).collect();
        debug!(observers = snapshot.len(), "notifying observers");
        for observer in snapshot {
            observer.update(self);
        }
    }
}

impl fmt::Debug for TransactionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransactionStore")
            .field("transactions", &self.transactions)
            .field("matched_filter_indices", &self.matched_filter_indices)
            .field("observers", &self.number_of_listeners())
            .finish()
    }
}
