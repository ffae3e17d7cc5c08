use std::io::Write;
use tempfile::NamedTempFile;

/// Writes an `amount, category` CSV with the given rows to a temp file.
pub fn expenses_csv(rows: &[(&str, &str)]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "amount, category").unwrap();
    for (amount, category) in rows {
        writeln!(file, "{amount}, {category}").unwrap();
    }
    file.flush().unwrap();
    file
}
