use crate::models::Customer;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading the customer file
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read customer file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Load customer records from a newline-delimited JSON file
///
/// Each non-empty line is parsed independently as one customer object, in
/// file order. The load is all-or-nothing: the first malformed line (bad
/// JSON, missing field, non-numeric coordinate) aborts with the 1-based line
/// number of the offender and no records are returned. An empty file yields
/// an empty vec. The file handle is closed on every exit path.
pub fn load_customers(path: &Path) -> Result<Vec<Customer>, StoreError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut customers = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let customer: Customer =
            serde_json::from_str(&line).map_err(|source| StoreError::Parse {
                line: index + 1,
                source,
            })?;
        customers.push(customer);
    }

    tracing::debug!("loaded {} customers from {}", customers.len(), path.display());
    Ok(customers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_parses_one_record_per_line() {
        let file = temp_file(concat!(
            r#"{"latitude": "52.986375", "user_id": 12, "name": "Christina McArdle", "longitude": "-6.043701"}"#,
            "\n",
            r#"{"latitude": "51.92893", "user_id": 1, "name": "Alice Cahill", "longitude": "-10.27699"}"#,
            "\n",
        ));

        let customers = load_customers(file.path()).unwrap();

        assert_eq!(customers.len(), 2);
        assert_eq!(customers[0].user_id, 12);
        assert_eq!(customers[1].name, "Alice Cahill");
    }

    #[test]
    fn test_load_skips_blank_lines() {
        let file = temp_file(concat!(
            "\n",
            r#"{"latitude": "53.0", "user_id": 3, "name": "Jack Enright", "longitude": "-6.0"}"#,
            "\n\n   \n",
        ));

        let customers = load_customers(file.path()).unwrap();
        assert_eq!(customers.len(), 1);
    }

    #[test]
    fn test_load_empty_file_yields_empty_vec() {
        let file = temp_file("");
        let customers = load_customers(file.path()).unwrap();
        assert!(customers.is_empty());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = load_customers(Path::new("no/such/customers.json")).unwrap_err();

        match err {
            StoreError::Io(source) => {
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound)
            }
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_bad_json_reports_line_number() {
        let file = temp_file(concat!(
            r#"{"latitude": "53.0", "user_id": 3, "name": "Jack Enright", "longitude": "-6.0"}"#,
            "\n",
            "this is not json\n",
        ));

        let err = load_customers(file.path()).unwrap_err();

        match err {
            StoreError::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_non_numeric_coordinate_is_parse_error() {
        let file = temp_file(
            r#"{"latitude": "not-a-number", "user_id": 3, "name": "Jack Enright", "longitude": "-6.0"}"#,
        );

        let err = load_customers(file.path()).unwrap_err();
        assert!(matches!(err, StoreError::Parse { line: 1, .. }));
    }
}
