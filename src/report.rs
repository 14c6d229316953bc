//! JSON report summary written alongside the charts.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::score::Recommendation;

/// Machine-readable summary of a report run.
///
/// Written as `report.json` next to the chart PNGs so downstream tooling can
/// pick up the recommendation without scraping console output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    /// When this report was generated.
    pub generated_at: DateTime<Utc>,

    /// Source CSV the measurements were loaded from.
    pub source: PathBuf,

    /// Number of measurement rows.
    pub row_count: usize,

    /// Chart files written, in render order.
    pub charts: Vec<PathBuf>,

    /// The optimal-bitrate recommendation.
    pub recommendation: Recommendation,
}

impl ReportSummary {
    /// Create a summary stamped with the current time.
    #[must_use]
    pub fn new(
        source: PathBuf,
        row_count: usize,
        charts: Vec<PathBuf>,
        recommendation: Recommendation,
    ) -> Self {
        Self {
            generated_at: Utc::now(),
            source,
            row_count,
            charts,
            recommendation,
        }
    }

    /// Write the summary as pretty-printed JSON into `out_dir/report.json`.
    ///
    /// Returns the path of the written file.
    pub fn write(&self, out_dir: impl AsRef<Path>) -> Result<PathBuf> {
        let path = out_dir.as_ref().join("report.json");
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, json)
            .map_err(|e| Error::Report(format!("failed to write {}: {e}", path.display())))?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Measurement;
    use crate::score;

    #[test]
    fn test_write_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let rows = vec![
            Measurement::new(2000.0, 10.0, 35.0, 0.92),
            Measurement::new(4000.0, 18.0, 41.0, 0.97),
        ];
        let rec = score::recommend(&rows).unwrap();

        let summary = ReportSummary::new(
            PathBuf::from("metrics.csv"),
            rows.len(),
            vec![PathBuf::from("quality_vs_bitrate.png")],
            rec.clone(),
        );

        let path = summary.write(dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), "report.json");

        let loaded: ReportSummary =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded.row_count, 2);
        assert_eq!(loaded.recommendation, rec);
    }
}
