use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum StoreError {
    #[error("Invalid argument: {0}")]
    #[diagnostic(code(expense_tracker::invalid_argument))]
    InvalidArgument(String),
    #[error("CSV error: {0}")]
    #[diagnostic(code(expense_tracker::csv))]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    #[diagnostic(code(expense_tracker::io))]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
