use crate::application::store::TransactionStore;
use crate::domain::transaction::Category;
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashSet;
use std::io::Write;

const HEADER: [&str; 4] = ["index", "amount", "category", "matched"];

#[derive(Serialize)]
struct Row {
    index: usize,
    amount: Decimal,
    category: Category,
    matched: bool,
}

/// Writes a snapshot of a `TransactionStore` as CSV.
///
/// Every row carries its position in the store and whether that position is
/// part of the current matched filter indices.
pub struct TransactionWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> TransactionWriter<W> {
    pub fn new(sink: W) -> Self {
        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(sink);
        Self { writer }
    }

    /// Writes every transaction in store order.
    pub fn write_store(&mut self, store: &TransactionStore) -> Result<()> {
        let matched: HashSet<usize> = store.matched_filter_indices().into_iter().collect();
        self.write_rows(store, (0..store.len()).collect(), &matched)
    }

    /// Writes only the matched transactions, in matched-index order.
    pub fn write_matched(&mut self, store: &TransactionStore) -> Result<()> {
        let indices = store.matched_filter_indices();
        let matched: HashSet<usize> = indices.iter().copied().collect();
        self.write_rows(store, indices, &matched)
    }

    fn write_rows(
        &mut self,
        store: &TransactionStore,
        indices: Vec<usize>,
        matched: &HashSet<usize>,
    ) -> Result<()> {
        let transactions = store.transactions();
        self.writer.write_record(HEADER)?;
        for index in indices {
            let tx = &transactions[index];
            self.writer.serialize(Row {
                index,
                amount: tx.amount.value(),
                category: tx.category,
                matched: matched.contains(&index),
            })?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
