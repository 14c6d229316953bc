//! Weighted quality scoring and the optimal-bitrate recommendation.
//!
//! SSIM is weighted more heavily than PSNR because it correlates better with
//! human perception. PSNR is normalized against a 50 dB ceiling before
//! weighting so both terms share a 0-to-1 scale.

use serde::{Deserialize, Serialize};

use crate::model::Measurement;

/// PSNR normalization ceiling in dB.
pub const PSNR_CEILING_DB: f64 = 50.0;

/// Weight of the normalized PSNR term.
pub const PSNR_WEIGHT: f64 = 0.4;

/// Weight of the SSIM term.
pub const SSIM_WEIGHT: f64 = 0.6;

/// Composite quality score: `(psnr_db / 50) * 0.4 + ssim * 0.6`.
#[must_use]
pub fn quality_score(m: &Measurement) -> f64 {
    (m.psnr_db / PSNR_CEILING_DB) * PSNR_WEIGHT + m.ssim * SSIM_WEIGHT
}

/// Quality delivered per megabyte: `quality_score / file_size_mb`.
#[must_use]
pub fn efficiency(m: &Measurement) -> f64 {
    quality_score(m) / m.file_size_mb
}

/// The recommended encoding setting: the row with the best
/// quality-to-size ratio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Recommended bitrate in kbps.
    pub bitrate_kbps: f64,

    /// File size at the recommended bitrate, in MB.
    pub file_size_mb: f64,

    /// PSNR at the recommended bitrate, in dB.
    pub psnr_db: f64,

    /// SSIM at the recommended bitrate.
    pub ssim: f64,

    /// Composite quality score of the selected row.
    pub quality_score: f64,

    /// Efficiency score (quality per MB) of the selected row.
    pub efficiency: f64,
}

/// Select the measurement with the highest efficiency score.
///
/// Ties are broken by first occurrence: a later row must strictly beat the
/// incumbent to replace it. Returns `None` for an empty table.
#[must_use]
pub fn recommend(rows: &[Measurement]) -> Option<Recommendation> {
    let mut best: Option<(&Measurement, f64)> = None;

    for row in rows {
        let eff = efficiency(row);
        match best {
            Some((_, best_eff)) if eff <= best_eff => {}
            _ => best = Some((row, eff)),
        }
    }

    best.map(|(row, eff)| Recommendation {
        bitrate_kbps: row.bitrate_kbps,
        file_size_mb: row.file_size_mb,
        psnr_db: row.psnr_db,
        ssim: row.ssim,
        quality_score: quality_score(row),
        efficiency: eff,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_score_weighting() {
        let m = Measurement::new(2000.0, 10.0, 50.0, 1.0);
        // Both terms saturated: (50/50)*0.4 + 1.0*0.6 = 1.0
        assert!((quality_score(&m) - 1.0).abs() < 1e-12);

        let m = Measurement::new(2000.0, 10.0, 25.0, 0.5);
        // (0.5)*0.4 + 0.5*0.6 = 0.5
        assert!((quality_score(&m) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_efficiency() {
        let m = Measurement::new(2000.0, 10.0, 35.0, 0.92);
        let expected = ((35.0 / 50.0) * 0.4 + 0.92 * 0.6) / 10.0;
        assert!((efficiency(&m) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_recommend_favors_lower_bitrate() {
        // The literal pair from the measurement campaign: the smaller file
        // delivers more quality per MB, so the lower bitrate must win.
        let rows = vec![
            Measurement::new(2000.0, 10.0, 35.0, 0.92),
            Measurement::new(4000.0, 18.0, 41.0, 0.97),
        ];

        let rec = recommend(&rows).unwrap();
        assert_eq!(rec.bitrate_kbps, 2000.0);
        assert!(efficiency(&rows[0]) > efficiency(&rows[1]));
    }

    #[test]
    fn test_recommend_reproducible() {
        let rows = vec![
            Measurement::new(1000.0, 5.0, 30.0, 0.85),
            Measurement::new(2000.0, 10.0, 35.0, 0.92),
            Measurement::new(4000.0, 18.0, 41.0, 0.97),
            Measurement::new(8000.0, 30.0, 45.0, 0.99),
        ];

        let first = recommend(&rows).unwrap();
        let second = recommend(&rows).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_recommend_tie_keeps_first() {
        let row = Measurement::new(2000.0, 10.0, 35.0, 0.92);
        let twin = Measurement::new(3000.0, 10.0, 35.0, 0.92);
        let rows = vec![row, twin];

        let rec = recommend(&rows).unwrap();
        assert_eq!(rec.bitrate_kbps, 2000.0);
    }

    #[test]
    fn test_recommend_empty() {
        assert!(recommend(&[]).is_none());
    }
}
