use crate::domain::transaction::Transaction;
use crate::error::{Result, StoreError};
use std::io::Read;

/// Streams expenses out of a CSV source whose header names the `amount` and
/// `category` columns, in any order.
///
/// Amounts are validated as they are read and categories are matched
/// case-insensitively. A row that fails either check yields an error for that
/// row only, so the caller decides whether to skip it or stop.
pub struct TransactionReader<R: Read> {
    rows: csv::DeserializeRecordsIntoIter<R, Transaction>,
}

impl<R: Read> TransactionReader<R> {
    /// Reads the header row from `source`; data rows are read as
    /// `transactions()` is iterated.
    pub fn new(source: R) -> Self {
        let rows = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source)
            .into_deserialize();
        Self { rows }
    }

    /// One item per data row, in file order.
    pub fn transactions(self) -> impl Iterator<Item = Result<Transaction>> {
        self.rows.map(|row| row.map_err(StoreError::from))
    }
}
