//! Typed freelancer earnings dataset and its quality reports.

mod loader;
mod record;

pub use loader::DataLoader;
pub use record::{
    ColumnMap, EarningsRecord, CRYPTO_PAYMENT, EXPERT_LEVEL, OPTIONAL_COLUMNS, REQUIRED_COLUMNS,
};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::input::{DataTable, SourceMetadata};
use crate::stats::{NumericSummary, SampleStats};

/// Categorical columns summarized in [`DatasetInfo`].
const CATEGORICAL_COLUMNS: &[&str] = &[
    "Job_Category",
    "Platform",
    "Experience_Level",
    "Client_Region",
    "Payment_Method",
    "Project_Type",
];

/// Numeric columns summarized by [`Dataset::basic_stats`].
const NUMERIC_COLUMNS: &[&str] = &[
    "Job_Completed",
    "Earnings_USD",
    "Hourly_Rate",
    "Job_Success_Rate",
    "Client_Rating",
    "Job_Duration_Days",
    "Rehire_Rate",
    "Marketing_Spend",
];

/// Earnings above this threshold are flagged as anomalous.
const EXTREME_EARNINGS_THRESHOLD: f64 = 10_000.0;

/// A loaded, read-only earnings dataset.
///
/// Holds both the raw table (for column-level introspection) and the
/// typed records (for analysis). Never mutated after loading.
#[derive(Debug, Clone)]
pub struct Dataset {
    table: DataTable,
    records: Vec<EarningsRecord>,
    source: SourceMetadata,
}

/// Structural information about the loaded dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub total_records: usize,
    pub columns: Vec<String>,
    /// Null-token cells per column.
    pub missing_values: IndexMap<String, usize>,
    /// Distinct non-null values per column.
    pub unique_values: IndexMap<String, usize>,
    /// Sorted distinct levels of the known categorical columns.
    pub categorical_levels: IndexMap<String, Vec<String>>,
}

/// Data quality assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityReport {
    pub total_records: usize,
    pub duplicate_freelancer_ids: usize,
    pub records_with_missing_values: usize,
    pub earnings_anomalies: EarningsAnomalies,
    pub rating_anomalies: RatingAnomalies,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EarningsAnomalies {
    pub zero_earnings: usize,
    pub negative_earnings: usize,
    pub extremely_high_earnings: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingAnomalies {
    /// Ratings outside the 1-5 scale.
    pub out_of_range_ratings: usize,
}

impl Dataset {
    pub(crate) fn new(table: DataTable, records: Vec<EarningsRecord>, source: SourceMetadata) -> Self {
        Self {
            table,
            records,
            source,
        }
    }

    pub fn records(&self) -> &[EarningsRecord] {
        &self.records
    }

    pub fn table(&self) -> &DataTable {
        &self.table
    }

    pub fn source(&self) -> &SourceMetadata {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Structural overview of the table.
    pub fn info(&self) -> DatasetInfo {
        let mut missing_values = IndexMap::new();
        let mut unique_values = IndexMap::new();

        for (idx, name) in self.table.headers.iter().enumerate() {
            let mut missing = 0usize;
            let mut distinct = std::collections::HashSet::new();
            for value in self.table.column_values(idx) {
                if DataTable::is_null_value(value) {
                    missing += 1;
                } else {
                    distinct.insert(value.trim());
                }
            }
            missing_values.insert(name.clone(), missing);
            unique_values.insert(name.clone(), distinct.len());
        }

        let mut categorical_levels = IndexMap::new();
        for name in CATEGORICAL_COLUMNS {
            if let Some(idx) = self.table.column_index(name) {
                let mut levels: Vec<String> = self
                    .table
                    .column_values(idx)
                    .filter(|v| !DataTable::is_null_value(v))
                    .map(|v| v.trim().to_string())
                    .collect::<std::collections::HashSet<_>>()
                    .into_iter()
                    .collect();
                levels.sort();
                categorical_levels.insert(name.to_string(), levels);
            }
        }

        DatasetInfo {
            total_records: self.table.row_count(),
            columns: self.table.headers.clone(),
            missing_values,
            unique_values,
            categorical_levels,
        }
    }

    /// Summary statistics for the known numeric columns.
    pub fn basic_stats(&self) -> IndexMap<String, NumericSummary> {
        let mut out = IndexMap::new();
        for name in NUMERIC_COLUMNS {
            if let Some(idx) = self.table.column_index(name) {
                let mut stats = SampleStats::new();
                for value in self.table.column_values(idx) {
                    if DataTable::is_null_value(value) {
                        continue;
                    }
                    if let Ok(v) = value.trim().parse::<f64>() {
                        stats.add(v);
                    }
                }
                out.insert(name.to_string(), stats.summary());
            }
        }
        out
    }

    /// Data quality checks over the typed records and the raw table.
    pub fn quality_report(&self) -> QualityReport {
        let mut seen_ids = std::collections::HashSet::new();
        let mut duplicates = 0usize;
        let mut zero_earnings = 0usize;
        let mut negative_earnings = 0usize;
        let mut extreme_earnings = 0usize;
        let mut out_of_range_ratings = 0usize;

        for record in &self.records {
            if !seen_ids.insert(record.freelancer_id) {
                duplicates += 1;
            }
            if record.earnings_usd == 0.0 {
                zero_earnings += 1;
            }
            if record.earnings_usd < 0.0 {
                negative_earnings += 1;
            }
            if record.earnings_usd > EXTREME_EARNINGS_THRESHOLD {
                extreme_earnings += 1;
            }
            if record.client_rating < 1.0 || record.client_rating > 5.0 {
                out_of_range_ratings += 1;
            }
        }

        let records_with_missing_values = self
            .table
            .rows
            .iter()
            .filter(|row| row.iter().any(|cell| DataTable::is_null_value(cell)))
            .count();

        QualityReport {
            total_records: self.records.len(),
            duplicate_freelancer_ids: duplicates,
            records_with_missing_values,
            earnings_anomalies: EarningsAnomalies {
                zero_earnings,
                negative_earnings,
                extremely_high_earnings: extreme_earnings,
            },
            rating_anomalies: RatingAnomalies {
                out_of_range_ratings,
            },
        }
    }
}
