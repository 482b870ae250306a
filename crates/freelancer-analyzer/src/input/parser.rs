//! CSV parser with content hashing for provenance.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use sha2::{Digest, Sha256};

use super::source::{DataTable, SourceMetadata};
use crate::error::{AnalyzerError, Result};

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Field delimiter.
    pub delimiter: u8,
    /// Whether the file has a header row.
    pub has_header: bool,
    /// Maximum rows to read (None = all).
    pub max_rows: Option<usize>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_header: true,
            max_rows: None,
        }
    }
}

/// Parses delimited data files into a [`DataTable`].
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a file and return the data table and its provenance metadata.
    ///
    /// Fails with [`AnalyzerError::DataNotFound`] when the path does not
    /// exist, before any read is attempted.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(DataTable, SourceMetadata)> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(AnalyzerError::DataNotFound {
                path: path.to_path_buf(),
            });
        }

        let mut file = File::open(path).map_err(|e| AnalyzerError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut contents = Vec::new();
        file.read_to_end(&mut contents)
            .map_err(|e| AnalyzerError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        tracing::debug!(path = %path.display(), bytes = contents.len(), "parsing data file");

        let table = self.parse_bytes(&contents)?;

        let metadata = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            contents.len() as u64,
            table.row_count(),
            table.column_count(),
        );

        Ok((table, metadata))
    }

    /// Parse raw bytes into a table.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<DataTable> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .has_headers(self.config.has_header)
            .flexible(true)
            .from_reader(bytes);

        let headers: Vec<String> = reader.headers()?.iter().map(|s| s.to_string()).collect();

        if headers.is_empty() {
            return Err(AnalyzerError::EmptyData("No columns found".to_string()));
        }

        let expected_cols = headers.len();
        let mut rows = Vec::new();

        for (row_idx, result) in reader.records().enumerate() {
            if let Some(max) = self.config.max_rows {
                if row_idx >= max {
                    break;
                }
            }

            let record = result?;
            let mut row: Vec<String> = record.iter().map(|s| s.to_string()).collect();

            // Short rows are padded, long rows truncated, so every row
            // matches the header width.
            while row.len() < expected_cols {
                row.push(String::new());
            }
            row.truncate(expected_cols);

            rows.push(row);
        }

        if rows.is_empty() {
            return Err(AnalyzerError::EmptyData("No data rows found".to_string()));
        }

        Ok(DataTable::new(headers, rows))
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv() {
        let parser = Parser::new();
        let data = b"name,age,city\nAlice,30,NYC\nBob,25,LA";
        let table = parser.parse_bytes(data).unwrap();

        assert_eq!(table.headers, vec!["name", "age", "city"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.get(0, 0), Some("Alice"));
        assert_eq!(table.get(1, 1), Some("25"));
    }

    #[test]
    fn test_parse_ragged_rows() {
        let parser = Parser::new();
        let data = b"a,b,c\n1,2\n4,5,6,7";
        let table = parser.parse_bytes(data).unwrap();

        assert_eq!(table.get(0, 2), Some(""));
        assert_eq!(table.rows[1].len(), 3);
    }

    #[test]
    fn test_parse_empty_fails() {
        let parser = Parser::new();
        let err = parser.parse_bytes(b"a,b,c\n").unwrap_err();
        assert!(matches!(err, AnalyzerError::EmptyData(_)));
    }

    #[test]
    fn test_missing_file_is_data_not_found() {
        let parser = Parser::new();
        let err = parser.parse_file("/nonexistent/earnings.csv").unwrap_err();
        assert!(matches!(err, AnalyzerError::DataNotFound { .. }));
    }

    #[test]
    fn test_max_rows_limit() {
        let config = ParserConfig {
            max_rows: Some(1),
            ..Default::default()
        };
        let parser = Parser::with_config(config);
        let table = parser.parse_bytes(b"a,b\n1,2\n3,4\n5,6").unwrap();
        assert_eq!(table.row_count(), 1);
    }
}
