//! Pareto front over the size/quality trade-off.
//!
//! A point is on the front when no other measurement is both smaller and of
//! higher composite quality. The weighted-sum recommendation always lands on
//! or near this front; reporting the front alongside it makes the trade-off
//! curve visible.

use crate::model::Measurement;
use crate::score;

/// Check whether `a` dominates `b` on (file size, quality score).
///
/// `a` dominates when it is no larger and no worse in quality, and strictly
/// better on at least one of the two.
#[must_use]
pub fn dominates(a: &Measurement, b: &Measurement) -> bool {
    let qa = score::quality_score(a);
    let qb = score::quality_score(b);

    let better_or_equal_size = a.file_size_mb <= b.file_size_mb;
    let better_or_equal_quality = qa >= qb;
    let strictly_better = a.file_size_mb < b.file_size_mb || qa > qb;

    better_or_equal_size && better_or_equal_quality && strictly_better
}

/// Compute the non-dominated measurements, sorted by file size ascending.
#[must_use]
pub fn pareto_front(rows: &[Measurement]) -> Vec<Measurement> {
    let mut front: Vec<Measurement> = Vec::new();

    for row in rows {
        let is_dominated = front.iter().any(|p| dominates(p, row));
        if !is_dominated {
            front.retain(|p| !dominates(row, p));
            front.push(row.clone());
        }
    }

    front.sort_by(|a, b| {
        a.file_size_mb
            .partial_cmp(&b.file_size_mb)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    front
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dominates() {
        let small_good = Measurement::new(2000.0, 10.0, 40.0, 0.95);
        let large_bad = Measurement::new(4000.0, 20.0, 35.0, 0.90);

        assert!(dominates(&small_good, &large_bad));
        assert!(!dominates(&large_bad, &small_good));
    }

    #[test]
    fn test_trade_off_no_dominance() {
        let small = Measurement::new(1000.0, 5.0, 30.0, 0.85);
        let large = Measurement::new(8000.0, 30.0, 45.0, 0.99);

        assert!(!dominates(&small, &large));
        assert!(!dominates(&large, &small));
    }

    #[test]
    fn test_front_drops_dominated_rows() {
        let rows = vec![
            Measurement::new(1000.0, 5.0, 30.0, 0.85),
            Measurement::new(2000.0, 10.0, 35.0, 0.92),
            // Larger file, worse quality than the 2000 kbps row: dominated
            Measurement::new(3000.0, 14.0, 33.0, 0.90),
            Measurement::new(4000.0, 18.0, 41.0, 0.97),
        ];

        let front = pareto_front(&rows);
        let bitrates: Vec<f64> = front.iter().map(|m| m.bitrate_kbps).collect();
        assert_eq!(bitrates, vec![1000.0, 2000.0, 4000.0]);
    }

    #[test]
    fn test_front_sorted_by_size() {
        let rows = vec![
            Measurement::new(8000.0, 30.0, 45.0, 0.99),
            Measurement::new(1000.0, 5.0, 30.0, 0.85),
        ];

        let front = pareto_front(&rows);
        assert_eq!(front.len(), 2);
        assert!(front[0].file_size_mb < front[1].file_size_mb);
    }
}
