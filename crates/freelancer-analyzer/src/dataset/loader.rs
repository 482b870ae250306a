//! Loading the earnings CSV into a typed [`Dataset`].

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::input::{Parser, ParserConfig};

use super::record::ColumnMap;
use super::Dataset;

/// Loads and validates the freelancer earnings file.
pub struct DataLoader {
    path: PathBuf,
    parser: Parser,
}

impl DataLoader {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            parser: Parser::new(),
        }
    }

    pub fn with_parser_config(path: impl AsRef<Path>, config: ParserConfig) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            parser: Parser::with_config(config),
        }
    }

    /// Load the dataset.
    ///
    /// Fails with `DataNotFound` when the path does not exist,
    /// `DataFormat` when required columns are absent, `EmptyData` when no
    /// data rows are present, and `Parse` on a malformed cell.
    pub fn load(&self) -> Result<Dataset> {
        let (table, source) = self.parser.parse_file(&self.path)?;

        let map = ColumnMap::resolve(&table)?;
        let mut records = Vec::with_capacity(table.row_count());
        for row in 0..table.row_count() {
            records.push(map.record(&table, row)?);
        }

        tracing::info!(
            records = records.len(),
            columns = table.column_count(),
            file = %source.file,
            "dataset loaded"
        );

        Ok(Dataset::new(table, records, source))
    }
}
