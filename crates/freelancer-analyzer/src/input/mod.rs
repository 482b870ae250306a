//! Low-level tabular input: CSV parsing and source provenance.

mod parser;
mod source;

pub use parser::{Parser, ParserConfig};
pub use source::{DataTable, SourceMetadata};
