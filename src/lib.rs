//! # vq-report
//!
//! Video encoding quality report generation.
//!
//! Loads a metrics table (bitrate, file size, PSNR, SSIM) from CSV, renders
//! a fixed set of PNG charts, and scores each row to recommend the bitrate
//! with the best quality-to-size ratio.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vq_report::{chart, import, score};
//!
//! let rows = import::load_measurements("metrics.csv")?;
//! let charts = chart::render_all(&rows, "results/graphs")?;
//! if let Some(rec) = score::recommend(&rows) {
//!     println!("Optimal bitrate: {} kbps", rec.bitrate_kbps);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`]: Error types for the library
//! - [`model`]: Measurement rows and derived metrics
//! - [`import`]: CSV loading
//! - [`rating`]: Star ratings from PSNR/SSIM thresholds
//! - [`score`]: Weighted quality scoring and the recommendation
//! - [`stats`]: Descriptive statistics per metric column
//! - [`pareto`]: Size/quality Pareto front
//! - [`chart`]: PNG chart rendering
//! - [`report`]: JSON report summary

pub mod chart;
pub mod error;
pub mod import;
pub mod model;
pub mod pareto;
pub mod rating;
pub mod report;
pub mod score;
pub mod stats;

// Re-export commonly used types
pub use error::{Error, Result};
pub use import::load_measurements;
pub use model::Measurement;
pub use rating::QualityRating;
pub use report::ReportSummary;
pub use score::{Recommendation, recommend};
pub use stats::Summary;
