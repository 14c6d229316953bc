//! Error types for report generation.

use thiserror::Error;

/// Result type alias for report operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating a quality report.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Error loading measurement data from CSV.
    #[error("CSV import error at line {line}: {reason}")]
    CsvImport {
        /// Line number where the error occurred (0 for header problems).
        line: usize,
        /// Reason for the failure.
        reason: String,
    },

    /// No measurements were available to plot or score.
    #[error("no measurements to report on")]
    EmptyTable,

    /// Error rendering a chart.
    #[error("Chart error ({chart}): {reason}")]
    Chart {
        /// Output filename of the chart that failed.
        chart: String,
        /// Reason for the failure.
        reason: String,
    },

    /// Error writing report files.
    #[error("Report error: {0}")]
    Report(String),

    /// I/O error wrapper.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
