use std::fs;
use std::path::Path;

use super::RawRow;
use super::error::ReaderError;

/// Read a delimited dataset file into raw rows, header-driven.
///
/// Ragged records are tolerated; short records simply leave trailing
/// fields absent. Row-level validation happens later in the parser.
pub fn read_rows(path: &Path) -> Result<Vec<RawRow>, ReaderError> {
    let file = fs::File::open(path).map_err(|source| ReaderError::OpenFile {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|source| ReaderError::ReadRecord {
            path: path.to_path_buf(),
            source,
        })?
        .clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| ReaderError::ReadRecord {
            path: path.to_path_buf(),
            source,
        })?;
        let mut row = RawRow::new();
        for (field, value) in headers.iter().zip(record.iter()) {
            row.set(field, value);
        }
        rows.push(row);
    }

    tracing::debug!(path = %path.display(), rows = rows.len(), "dataset file read");
    Ok(rows)
}
