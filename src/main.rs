use clap::Parser;
use expense_tracker::application::store::TransactionStore;
use expense_tracker::interfaces::csv::transaction_reader::TransactionReader;
use expense_tracker::interfaces::csv::transaction_writer::TransactionWriter;
use expense_tracker::interfaces::logging::LoggingObserver;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input expenses CSV file (`amount, category`)
    input: PathBuf,

    /// Indices of the transactions matched by an external filter, applied after removals
    #[arg(long, value_delimiter = ',')]
    matched: Vec<usize>,

    /// Indices of loaded transactions to remove, resolved before any removal happens
    #[arg(long, value_delimiter = ',')]
    remove: Vec<usize>,

    /// Print only the matched transactions
    #[arg(long)]
    only_matched: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();

    let cli = Cli::parse();

    let observer = Arc::new(LoggingObserver::new());
    let mut store = TransactionStore::new();
    store.register(&observer);

    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = TransactionReader::new(file);
    // `csv_row` counts data rows in the file; store indices skip unreadable rows.
    for (csv_row, tx_result) in reader.transactions().enumerate() {
        match tx_result {
            Ok(tx) => store.add_transaction(tx),
            Err(e) => warn!(csv_row, error = %e, "skipping unreadable transaction"),
        }
    }

    if !cli.remove.is_empty() {
        let loaded = store.transactions();
        for index in cli.remove {
            match loaded.get(index) {
                Some(tx) => {
                    store.remove_transaction(tx);
                }
                None => warn!(index, "no transaction to remove at index"),
            }
        }
    }

    if !cli.matched.is_empty() {
        store.set_matched_filter_indices(&cli.matched)?;
    }

    let stdout = io::stdout();
    let mut writer = TransactionWriter::new(stdout.lock());
    if cli.only_matched {
        writer.write_matched(&store)?;
    } else {
        writer.write_store(&store)?;
    }

    Ok(())
}
