//! PNG chart rendering for quality reports.
//!
//! Four fixed charts, each written to a fixed filename in the output
//! directory:
//!
//! - [`quality_vs_bitrate`]: PSNR and SSIM against bitrate, with threshold
//!   reference lines.
//! - [`size_vs_quality`]: PSNR and SSIM against file size.
//! - [`compression_efficiency`]: quality delivered per megabyte.
//! - [`summary_table`]: the metrics table rendered as an image, with a
//!   star rating per row.

use std::ops::Range;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::model::Measurement;

mod efficiency;
mod quality_vs_bitrate;
mod size_vs_quality;
mod summary_table;

pub use efficiency::compression_efficiency;
pub use quality_vs_bitrate::quality_vs_bitrate;
pub use size_vs_quality::size_vs_quality;
pub use summary_table::summary_table;

/// Result type used internally by the drawing routines, which deal in
/// backend-specific error types.
pub(crate) type DrawResult<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Render all four charts into `out_dir`, creating it if absent.
///
/// Returns the paths of the written PNG files, in render order.
pub fn render_all(rows: &[Measurement], out_dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let out_dir = out_dir.as_ref();
    if rows.is_empty() {
        return Err(Error::EmptyTable);
    }
    std::fs::create_dir_all(out_dir)?;

    Ok(vec![
        quality_vs_bitrate(rows, out_dir)?,
        size_vs_quality(rows, out_dir)?,
        compression_efficiency(rows, out_dir)?,
        summary_table(rows, out_dir)?,
    ])
}

/// Color palette shared by the charts.
pub mod palette {
    use plotters::style::RGBColor;

    /// Steel blue - PSNR series.
    pub const STEEL_BLUE: RGBColor = RGBColor(0x2e, 0x86, 0xab);
    /// Plum - SSIM series.
    pub const PLUM: RGBColor = RGBColor(0xa2, 0x3b, 0x72);
    /// Amber - PSNR vs size series.
    pub const AMBER: RGBColor = RGBColor(0xf1, 0x8f, 0x01);
    /// Brick red - SSIM vs size series.
    pub const BRICK: RGBColor = RGBColor(0xc7, 0x3e, 0x1d);
    /// Green - upper threshold reference lines.
    pub const THRESHOLD_GREEN: RGBColor = RGBColor(0x27, 0xae, 0x60);
    /// Orange - lower threshold reference lines.
    pub const THRESHOLD_ORANGE: RGBColor = RGBColor(0xe6, 0x7e, 0x22);
    /// Table header background.
    pub const HEADER_BLUE: RGBColor = RGBColor(0x2e, 0x86, 0xab);
    /// Alternating table row tint.
    pub const ROW_TINT: RGBColor = RGBColor(0xe8, 0xf4, 0xf8);
}

/// Axis range covering `values` with 5% padding on each side.
///
/// Degenerate spans (a single row, or identical values) are widened so the
/// chart still builds for N = 1.
pub(crate) fn padded_range(values: impl IntoIterator<Item = f64>) -> Range<f64> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }

    let span = max - min;
    let pad = if span > 0.0 {
        span * 0.05
    } else {
        (max.abs() * 0.1).max(0.5)
    };

    (min - pad)..(max + pad)
}

/// Wrap a drawing-backend failure into a chart error for `filename`.
pub(crate) fn chart_error(filename: &str, err: Box<dyn std::error::Error>) -> Error {
    Error::Chart {
        chart: filename.to_string(),
        reason: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<Measurement> {
        vec![
            Measurement::new(1000.0, 5.0, 30.0, 0.85),
            Measurement::new(2000.0, 10.0, 35.0, 0.92),
            Measurement::new(4000.0, 18.0, 41.0, 0.97),
            Measurement::new(8000.0, 30.0, 45.0, 0.99),
        ]
    }

    #[test]
    fn test_padded_range() {
        let range = padded_range([10.0, 20.0]);
        assert!(range.start < 10.0);
        assert!(range.end > 20.0);
    }

    #[test]
    fn test_padded_range_single_value() {
        let range = padded_range([5.0]);
        assert!(range.start < range.end);
        assert!(range.contains(&5.0));
    }

    #[test]
    fn test_render_all_writes_four_pngs() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("graphs");

        let paths = render_all(&sample_rows(), &out).unwrap();
        assert_eq!(paths.len(), 4);
        let names: Vec<_> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "quality_vs_bitrate.png",
                "size_vs_quality.png",
                "compression_efficiency.png",
                "summary_table.png",
            ]
        );
        for path in &paths {
            let len = std::fs::metadata(path).unwrap().len();
            assert!(len > 0, "{} is empty", path.display());
        }
    }

    #[test]
    fn test_render_all_single_row() {
        let dir = tempfile::tempdir().unwrap();
        let rows = vec![Measurement::new(2000.0, 10.0, 35.0, 0.92)];

        let paths = render_all(&rows, dir.path()).unwrap();
        assert_eq!(paths.len(), 4);
        for path in &paths {
            assert!(path.exists());
        }
    }

    #[test]
    fn test_render_all_empty_table() {
        let dir = tempfile::tempdir().unwrap();
        let err = render_all(&[], dir.path()).unwrap_err();
        assert!(matches!(err, Error::EmptyTable));
    }
}
