//! Report generation command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use vq_report::model::Measurement;
use vq_report::report::ReportSummary;
use vq_report::score::Recommendation;
use vq_report::stats::Summary;
use vq_report::{chart, import, pareto, score};

pub fn run(csv_path: PathBuf, output_dir: PathBuf, verbose: bool) -> Result<()> {
    println!("{:=<50}", "");
    println!("VIDEO QUALITY REPORT GENERATOR");
    println!("{:=<50}", "");

    let rows = import::load_measurements(&csv_path)
        .with_context(|| format!("Error loading CSV: {}", csv_path.display()))?;
    println!("✓ Loaded {} records from {}", rows.len(), csv_path.display());

    if verbose {
        print_metric_summaries(&rows);
        print_pareto_front(&rows);
    }

    println!();
    println!("Generating visualizations...");

    let charts = chart::render_all(&rows, &output_dir).context("Failed to generate charts")?;
    for path in &charts {
        println!("✓ Saved: {}", path.display());
    }

    // render_all already rejected an empty table, so a recommendation exists
    let recommendation = score::recommend(&rows).context("No measurements to score")?;
    print_recommendation(&recommendation);

    let summary = ReportSummary::new(csv_path, rows.len(), charts.clone(), recommendation);
    let report_path = summary
        .write(&output_dir)
        .context("Failed to write report.json")?;

    println!();
    println!("✓ All reports generated successfully!");
    println!("✓ Output directory: {}", output_dir.display());
    println!();
    println!("Generated files:");
    for path in charts.iter().chain(std::iter::once(&report_path)) {
        println!("  - {}", path.display());
    }

    Ok(())
}

fn print_recommendation(rec: &Recommendation) {
    println!();
    println!("{:=<50}", "");
    println!("OPTIMAL BITRATE RECOMMENDATION");
    println!("{:=<50}", "");
    println!("Bitrate: {} kbps", rec.bitrate_kbps);
    println!("File Size: {:.2} MB", rec.file_size_mb);
    println!("PSNR: {:.2} dB", rec.psnr_db);
    println!("SSIM: {:.4}", rec.ssim);
    println!("Efficiency Score: {:.4}", rec.efficiency);
    println!("{:=<50}", "");
}

fn print_metric_summaries(rows: &[Measurement]) {
    let columns: [(&str, fn(&Measurement) -> f64); 4] = [
        ("Bitrate (kbps)", |m| m.bitrate_kbps),
        ("File size (MB)", |m| m.file_size_mb),
        ("PSNR (dB)", |m| m.psnr_db),
        ("SSIM", |m| m.ssim),
    ];

    println!();
    println!("Metric Statistics:");
    println!("{:-<50}", "");
    for (name, column) in columns {
        let values: Vec<f64> = rows.iter().map(column).collect();
        if let Some(summary) = Summary::compute(&values) {
            println!("{name}:");
            println!("  Mean: {:.3}, Median: {:.3}", summary.mean, summary.median);
            println!(
                "  Min: {:.3}, Max: {:.3}, StdDev: {:.3}",
                summary.min, summary.max, summary.std_dev
            );
        }
    }
}

fn print_pareto_front(rows: &[Measurement]) {
    let front = pareto::pareto_front(rows);

    println!();
    println!(
        "Size/quality Pareto front ({} of {} rows):",
        front.len(),
        rows.len()
    );
    for m in &front {
        println!(
            "  {:>8.0} kbps  {:>7.2} MB  quality score {:.4}",
            m.bitrate_kbps,
            m.file_size_mb,
            score::quality_score(m)
        );
    }
}
