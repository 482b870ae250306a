//! Typed representation of one freelancer earnings row.

use crate::error::{AnalyzerError, Result};
use crate::input::DataTable;

/// Columns that must be present for a file to be accepted.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "Freelancer_ID",
    "Job_Category",
    "Platform",
    "Experience_Level",
    "Client_Region",
    "Payment_Method",
    "Job_Completed",
    "Earnings_USD",
    "Hourly_Rate",
    "Job_Success_Rate",
    "Client_Rating",
];

/// Optional columns picked up when present.
pub const OPTIONAL_COLUMNS: &[&str] = &[
    "Project_Type",
    "Job_Duration_Days",
    "Rehire_Rate",
    "Marketing_Spend",
];

/// Payment method value that marks cryptocurrency payouts.
pub const CRYPTO_PAYMENT: &str = "Crypto";

/// Experience level value for self-reported experts.
pub const EXPERT_LEVEL: &str = "Expert";

/// One freelancer's row, with numeric columns parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct EarningsRecord {
    pub freelancer_id: u64,
    pub job_category: String,
    pub platform: String,
    pub experience_level: String,
    pub client_region: String,
    pub payment_method: String,
    pub job_completed: u32,
    pub earnings_usd: f64,
    pub hourly_rate: f64,
    pub job_success_rate: f64,
    pub client_rating: f64,
    pub project_type: Option<String>,
    pub job_duration_days: Option<f64>,
    pub rehire_rate: Option<f64>,
    pub marketing_spend: Option<f64>,
}

/// Resolved column positions for one table.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    freelancer_id: usize,
    job_category: usize,
    platform: usize,
    experience_level: usize,
    client_region: usize,
    payment_method: usize,
    job_completed: usize,
    earnings_usd: usize,
    hourly_rate: usize,
    job_success_rate: usize,
    client_rating: usize,
    project_type: Option<usize>,
    job_duration_days: Option<usize>,
    rehire_rate: Option<usize>,
    marketing_spend: Option<usize>,
}

impl ColumnMap {
    /// Resolve column positions, failing when required columns are absent.
    pub fn resolve(table: &DataTable) -> Result<Self> {
        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .filter(|name| table.column_index(name).is_none())
            .copied()
            .collect();

        if !missing.is_empty() {
            return Err(AnalyzerError::DataFormat(format!(
                "Missing required columns: {}",
                missing.join(", ")
            )));
        }

        let index = |name: &str| table.column_index(name).unwrap_or_default();

        Ok(Self {
            freelancer_id: index("Freelancer_ID"),
            job_category: index("Job_Category"),
            platform: index("Platform"),
            experience_level: index("Experience_Level"),
            client_region: index("Client_Region"),
            payment_method: index("Payment_Method"),
            job_completed: index("Job_Completed"),
            earnings_usd: index("Earnings_USD"),
            hourly_rate: index("Hourly_Rate"),
            job_success_rate: index("Job_Success_Rate"),
            client_rating: index("Client_Rating"),
            project_type: table.column_index("Project_Type"),
            job_duration_days: table.column_index("Job_Duration_Days"),
            rehire_rate: table.column_index("Rehire_Rate"),
            marketing_spend: table.column_index("Marketing_Spend"),
        })
    }

    /// Build a typed record from a table row.
    ///
    /// `row` is the zero-based data row index; reported errors use the
    /// one-based data row number.
    pub fn record(&self, table: &DataTable, row: usize) -> Result<EarningsRecord> {
        let cell = |col: usize| table.get(row, col).unwrap_or("");

        Ok(EarningsRecord {
            freelancer_id: parse_cell(cell(self.freelancer_id), row, "Freelancer_ID")?,
            job_category: cell(self.job_category).trim().to_string(),
            platform: cell(self.platform).trim().to_string(),
            experience_level: cell(self.experience_level).trim().to_string(),
            client_region: cell(self.client_region).trim().to_string(),
            payment_method: cell(self.payment_method).trim().to_string(),
            job_completed: parse_cell(cell(self.job_completed), row, "Job_Completed")?,
            earnings_usd: parse_cell(cell(self.earnings_usd), row, "Earnings_USD")?,
            hourly_rate: parse_cell(cell(self.hourly_rate), row, "Hourly_Rate")?,
            job_success_rate: parse_cell(cell(self.job_success_rate), row, "Job_Success_Rate")?,
            client_rating: parse_cell(cell(self.client_rating), row, "Client_Rating")?,
            project_type: optional_string(self.project_type.map(cell)),
            job_duration_days: optional_cell(self.job_duration_days.map(cell), row, "Job_Duration_Days")?,
            rehire_rate: optional_cell(self.rehire_rate.map(cell), row, "Rehire_Rate")?,
            marketing_spend: optional_cell(self.marketing_spend.map(cell), row, "Marketing_Spend")?,
        })
    }
}

fn parse_cell<T: std::str::FromStr>(raw: &str, row: usize, column: &str) -> Result<T> {
    let trimmed = raw.trim();
    if DataTable::is_null_value(trimmed) {
        return Err(AnalyzerError::Parse {
            row: row + 1,
            column: column.to_string(),
            message: "missing value in required column".to_string(),
        });
    }
    trimmed.parse().map_err(|_| AnalyzerError::Parse {
        row: row + 1,
        column: column.to_string(),
        message: format!("cannot parse '{}'", trimmed),
    })
}

fn optional_cell<T: std::str::FromStr>(
    raw: Option<&str>,
    row: usize,
    column: &str,
) -> Result<Option<T>> {
    match raw {
        Some(value) if !DataTable::is_null_value(value) => {
            parse_cell(value, row, column).map(Some)
        }
        _ => Ok(None),
    }
}

fn optional_string(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|v| !DataTable::is_null_value(v))
        .map(str::to_string)
}
