use expense_tracker::application::store::TransactionStore;
use expense_tracker::domain::observer::StoreObserver;
use expense_tracker::domain::transaction::{Category, Transaction};
use expense_tracker::error::StoreError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Default)]
struct CountingObserver {
    updates: AtomicUsize,
    last_len: AtomicUsize,
}

impl StoreObserver for CountingObserver {
    fn update(&self, store: &TransactionStore) {
        self.updates.fetch_add(1, Ordering::SeqCst);
        self.last_len.store(store.len(), Ordering::SeqCst);
    }
}

fn expense(amount: Decimal, category: Category) -> Transaction {
    Transaction::new(amount, category).unwrap()
}

#[test]
fn test_every_mutation_notifies_each_observer_once() {
    let mut store = TransactionStore::new();
    let first = Arc::new(CountingObserver::default());
    let second = Arc::new(CountingObserver::default());
    assert!(store.register(&first));
    assert!(store.register(&second));
    assert!(!store.register(&first));
    assert_eq!(store.number_of_listeners(), 2);

    let lunch = expense(dec!(11.20), Category::Food);
    store.add_transaction(lunch.clone());
    store.add_transaction(expense(dec!(300), Category::Travel));
    store.set_matched_filter_indices(&[0, 1]).unwrap();
    store.remove_transaction(&lunch);
    store.remove_transaction(&lunch);

    for observer in [&first, &second] {
        assert_eq!(observer.updates.load(Ordering::SeqCst), 5);
        assert_eq!(observer.last_len.load(Ordering::SeqCst), 1);
    }
}

#[test]
fn test_failed_validation_does_not_notify() {
    let mut store = TransactionStore::new();
    let observer = Arc::new(CountingObserver::default());
    store.add_transaction(expense(dec!(1), Category::Other));
    store.add_transaction(expense(dec!(2), Category::Other));
    store.set_matched_filter_indices(&[0, 1]).unwrap();
    store.register(&observer);

    let err = store.set_matched_filter_indices(&[0, 5]).unwrap_err();

    assert!(matches!(err, StoreError::InvalidArgument(_)));
    assert_eq!(store.matched_filter_indices(), vec![0, 1]);
    assert_eq!(observer.updates.load(Ordering::SeqCst), 0);
}

#[test]
fn test_store_does_not_keep_observers_alive() {
    let mut store = TransactionStore::new();
    let observer = Arc::new(CountingObserver::default());
    store.register(&observer);
    assert_eq!(Arc::strong_count(&observer), 1);

    drop(observer);
    assert_eq!(store.number_of_listeners(), 0);
    store.add_transaction(expense(dec!(1), Category::Food));
}

#[test]
fn test_store_shared_behind_mutex() {
    let store = Arc::new(Mutex::new(TransactionStore::new()));
    let observer = Arc::new(CountingObserver::default());
    store.lock().unwrap().register(&observer);

    let handles: Vec<_> = (1..=4_i64)
        .map(|i| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                let tx = Transaction::new(Decimal::from(i), Category::Bills).unwrap();
                store.lock().unwrap().add_transaction(tx);
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(store.lock().unwrap().len(), 4);
    assert_eq!(observer.updates.load(Ordering::SeqCst), 4);
}
