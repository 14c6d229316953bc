//! PSNR and SSIM against encoded file size.

use std::path::{Path, PathBuf};

use plotters::prelude::*;

use super::{DrawResult, chart_error, padded_range, palette};
use crate::error::Result;
use crate::model::Measurement;

const FILENAME: &str = "size_vs_quality.png";

/// Render `size_vs_quality.png`: PSNR vs file size and SSIM vs file size,
/// side by side.
pub fn size_vs_quality(rows: &[Measurement], out_dir: &Path) -> Result<PathBuf> {
    let path = out_dir.join(FILENAME);
    draw(rows, &path).map_err(|e| chart_error(FILENAME, e))?;
    Ok(path)
}

fn draw(rows: &[Measurement], path: &Path) -> DrawResult<()> {
    let root = BitMapBackend::new(path, (1400, 500)).into_drawing_area();
    root.fill(&WHITE)?;

    let panels = root.split_evenly((1, 2));

    draw_panel(
        rows,
        &panels[0],
        "Quality vs File Size (PSNR)",
        "PSNR (dB)",
        |r| r.psnr_db,
        palette::AMBER,
    )?;
    draw_panel(
        rows,
        &panels[1],
        "Quality vs File Size (SSIM)",
        "SSIM",
        |r| r.ssim,
        palette::BRICK,
    )?;

    root.present()?;
    Ok(())
}

fn draw_panel<DB: DrawingBackend>(
    rows: &[Measurement],
    area: &DrawingArea<DB, plotters::coord::Shift>,
    title: &str,
    y_desc: &str,
    metric: impl Fn(&Measurement) -> f64,
    color: RGBColor,
) -> DrawResult<()>
where
    DB::ErrorType: 'static,
{
    let x_range = padded_range(rows.iter().map(|r| r.file_size_mb));
    let y_range = padded_range(rows.iter().map(&metric));

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(55)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc("File Size (MB)")
        .y_desc(y_desc)
        .draw()?;

    chart.draw_series(LineSeries::new(
        rows.iter().map(|r| (r.file_size_mb, metric(r))),
        color.stroke_width(2),
    ))?;

    chart.draw_series(
        rows.iter()
            .map(|r| Circle::new((r.file_size_mb, metric(r)), 4, color.filled())),
    )?;

    Ok(())
}
