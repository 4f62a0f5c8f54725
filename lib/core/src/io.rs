//! CSV ingestion
//!
//! Loads a CSV file into a [`Table`], inferring cell types field by
//! field. The first record is the header; every following record must
//! carry the same number of fields. Quoted fields keep embedded commas,
//! which is how multi-value cells arrive.

use crate::error::{Error, Result};
use crate::table::{Column, Table};
use crate::value::Value;
use std::path::Path;

/// Load a CSV file into a table
///
/// # Errors
/// Returns an error if the file cannot be read, has no header, or
/// contains a record whose field count differs from the header's.
pub fn load_table<P: AsRef<Path>>(path: P) -> Result<Table> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| Error::Csv(format!("failed to open {}: {e}", path.display())))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| Error::Csv(format!("failed to read header: {e}")))?
        .iter()
        .map(str::to_string)
        .collect();

    if headers.is_empty() {
        return Err(Error::EmptyInput(format!(
            "{} has no header record",
            path.display()
        )));
    }

    let mut cells: Vec<Vec<Value>> = vec![Vec::new(); headers.len()];
    let mut line = 2;
    for record in reader.records() {
        let record =
            record.map_err(|e| Error::Csv(format!("failed to read line {line}: {e}")))?;
        if record.len() != headers.len() {
            return Err(Error::RaggedRecord {
                line,
                expected: headers.len(),
                actual: record.len(),
            });
        }
        for (idx, field) in record.iter().enumerate() {
            cells[idx].push(Value::parse(field));
        }
        line += 1;
    }

    let columns = headers
        .into_iter()
        .zip(cells)
        .map(|(name, values)| Column::new(name, values))
        .collect();
    Table::new(columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_typed_table() {
        let mut file = NamedTempFile::new().expect("temp file");
        writeln!(file, "user_id,age,hobbies").expect("write header");
        writeln!(file, "1,25,\"Reading,Chess\"").expect("write row");
        writeln!(file, "2,,Gaming").expect("write row");

        let table = load_table(file.path()).expect("load CSV");

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.column("user_id").unwrap().values()[0], Value::Number(1.0));
        assert_eq!(table.column("age").unwrap().values()[1], Value::Null);
        // Quoted commas stay inside the cell
        assert_eq!(
            table.column("hobbies").unwrap().values()[0],
            Value::Text("Reading,Chess".to_string())
        );
    }

    #[test]
    fn test_load_header_only() {
        let mut file = NamedTempFile::new().expect("temp file");
        writeln!(file, "user_id,age").expect("write header");

        let table = load_table(file.path()).expect("load CSV");
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn test_ragged_record() {
        let mut file = NamedTempFile::new().expect("temp file");
        writeln!(file, "a,b,c").expect("write header");
        writeln!(file, "1,2,3").expect("write row");
        writeln!(file, "4,5").expect("write row");

        let result = load_table(file.path());
        assert!(matches!(
            result,
            Err(Error::RaggedRecord { line: 3, expected: 3, actual: 2 })
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_table("/nonexistent/profiles.csv"),
            Err(Error::Csv(_))
        ));
    }
}
