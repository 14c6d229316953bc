//! Star ratings derived from quality metric thresholds.

use serde::{Deserialize, Serialize};

/// Quality tier for a measurement, based on PSNR and SSIM thresholds.
///
/// A fixed step function with no interpolation: a tier applies only when
/// both its PSNR and SSIM thresholds are met.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum QualityRating {
    /// Below every threshold pair.
    Poor,
    /// PSNR >= 25 dB and SSIM >= 0.80.
    Fair,
    /// PSNR >= 30 dB and SSIM >= 0.85.
    Good,
    /// PSNR >= 35 dB and SSIM >= 0.90.
    VeryGood,
    /// PSNR >= 40 dB and SSIM >= 0.95.
    Excellent,
}

impl QualityRating {
    /// Determine the rating tier from PSNR (dB) and SSIM.
    #[must_use]
    pub fn from_metrics(psnr_db: f64, ssim: f64) -> Self {
        if psnr_db >= 40.0 && ssim >= 0.95 {
            Self::Excellent
        } else if psnr_db >= 35.0 && ssim >= 0.90 {
            Self::VeryGood
        } else if psnr_db >= 30.0 && ssim >= 0.85 {
            Self::Good
        } else if psnr_db >= 25.0 && ssim >= 0.80 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    /// Number of stars for this tier (1 to 5).
    #[must_use]
    pub fn stars(self) -> u8 {
        match self {
            Self::Poor => 1,
            Self::Fair => 2,
            Self::Good => 3,
            Self::VeryGood => 4,
            Self::Excellent => 5,
        }
    }

    /// Star string for table rendering, e.g. `★★★★☆`.
    #[must_use]
    pub fn star_string(self) -> String {
        let filled = usize::from(self.stars());
        let mut s = "★".repeat(filled);
        s.push_str(&"☆".repeat(5 - filled));
        s
    }
}

impl std::fmt::Display for QualityRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Poor => write!(f, "Poor"),
            Self::Fair => write!(f, "Fair"),
            Self::Good => write!(f, "Good"),
            Self::VeryGood => write!(f, "Very Good"),
            Self::Excellent => write!(f, "Excellent"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(QualityRating::from_metrics(40.0, 0.95), QualityRating::Excellent);
        assert_eq!(QualityRating::from_metrics(45.0, 0.99), QualityRating::Excellent);
        assert_eq!(QualityRating::from_metrics(35.0, 0.90), QualityRating::VeryGood);
        assert_eq!(QualityRating::from_metrics(30.0, 0.85), QualityRating::Good);
        assert_eq!(QualityRating::from_metrics(25.0, 0.80), QualityRating::Fair);
        assert_eq!(QualityRating::from_metrics(20.0, 0.70), QualityRating::Poor);
    }

    #[test]
    fn test_both_thresholds_required() {
        // High PSNR alone does not reach the tier if SSIM lags
        assert_eq!(QualityRating::from_metrics(42.0, 0.91), QualityRating::VeryGood);
        // High SSIM alone does not reach the tier if PSNR lags
        assert_eq!(QualityRating::from_metrics(33.0, 0.97), QualityRating::Good);
        // Neither threshold pair met at all
        assert_eq!(QualityRating::from_metrics(24.9, 0.99), QualityRating::Poor);
    }

    #[test]
    fn test_deterministic() {
        let a = QualityRating::from_metrics(37.5, 0.93);
        let b = QualityRating::from_metrics(37.5, 0.93);
        assert_eq!(a, b);
        assert_eq!(a, QualityRating::VeryGood);
    }

    #[test]
    fn test_star_string() {
        assert_eq!(QualityRating::Excellent.star_string(), "★★★★★");
        assert_eq!(QualityRating::Good.star_string(), "★★★☆☆");
        assert_eq!(QualityRating::Poor.stars(), 1);
    }
}
