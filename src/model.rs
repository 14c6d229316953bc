//! Measurement rows and derived per-row metrics.

use serde::{Deserialize, Serialize};

/// A single encoding quality measurement.
///
/// One row of the metrics table: a video encoded at `bitrate_kbps`, the
/// resulting file size, and the fidelity scores measured against the
/// reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Encoding bitrate in kilobits per second.
    pub bitrate_kbps: f64,

    /// Encoded file size in megabytes.
    pub file_size_mb: f64,

    /// Peak signal-to-noise ratio in decibels.
    pub psnr_db: f64,

    /// Structural similarity index (0.0 to 1.0).
    pub ssim: f64,
}

impl Measurement {
    /// Create a new measurement row.
    #[must_use]
    pub fn new(bitrate_kbps: f64, file_size_mb: f64, psnr_db: f64, ssim: f64) -> Self {
        Self {
            bitrate_kbps,
            file_size_mb,
            psnr_db,
            ssim,
        }
    }

    /// PSNR delivered per megabyte of file size.
    #[must_use]
    pub fn psnr_per_mb(&self) -> f64 {
        self.psnr_db / self.file_size_mb
    }

    /// SSIM delivered per megabyte of file size.
    #[must_use]
    pub fn ssim_per_mb(&self) -> f64 {
        self.ssim / self.file_size_mb
    }
}

/// Sort measurements by bitrate, ascending.
pub fn sort_by_bitrate(rows: &mut [Measurement]) {
    rows.sort_by(|a, b| {
        a.bitrate_kbps
            .partial_cmp(&b.bitrate_kbps)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_metrics() {
        let m = Measurement::new(2000.0, 10.0, 35.0, 0.92);
        assert!((m.psnr_per_mb() - 3.5).abs() < 1e-9);
        assert!((m.ssim_per_mb() - 0.092).abs() < 1e-9);
    }

    #[test]
    fn test_sort_by_bitrate() {
        let mut rows = vec![
            Measurement::new(8000.0, 30.0, 45.0, 0.99),
            Measurement::new(1000.0, 5.0, 30.0, 0.85),
            Measurement::new(4000.0, 18.0, 41.0, 0.97),
        ];
        sort_by_bitrate(&mut rows);
        let bitrates: Vec<f64> = rows.iter().map(|r| r.bitrate_kbps).collect();
        assert_eq!(bitrates, vec![1000.0, 4000.0, 8000.0]);
    }
}
