use crate::application::store::TransactionStore;

/// Receives a callback after every state change of a [`TransactionStore`].
///
/// The store only keeps a weak association to its observers; whoever created
/// the observer decides how long it lives. Callbacks run synchronously on the
/// mutating call stack and get read-only access to the store.
pub trait StoreObserver: Send + Sync {
    fn update(&self, store: &TransactionStore);
}
