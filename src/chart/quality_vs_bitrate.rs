//! PSNR and SSIM against bitrate, with quality threshold reference lines.

use std::path::{Path, PathBuf};

use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use super::{DrawResult, chart_error, padded_range, palette};
use crate::error::Result;
use crate::model::Measurement;

const FILENAME: &str = "quality_vs_bitrate.png";

/// Render `quality_vs_bitrate.png`: two panels, PSNR vs bitrate and
/// SSIM vs bitrate, each with dashed reference lines at the rating
/// thresholds.
pub fn quality_vs_bitrate(rows: &[Measurement], out_dir: &Path) -> Result<PathBuf> {
    let path = out_dir.join(FILENAME);
    draw(rows, &path).map_err(|e| chart_error(FILENAME, e))?;
    Ok(path)
}

fn draw(rows: &[Measurement], path: &Path) -> DrawResult<()> {
    let root = BitMapBackend::new(path, (1400, 500)).into_drawing_area();
    root.fill(&WHITE)?;

    let panels = root.split_evenly((1, 2));
    draw_psnr_panel(rows, &panels[0])?;
    draw_ssim_panel(rows, &panels[1])?;

    root.present()?;
    Ok(())
}

fn draw_psnr_panel<DB: DrawingBackend>(
    rows: &[Measurement],
    area: &DrawingArea<DB, plotters::coord::Shift>,
) -> DrawResult<()>
where
    DB::ErrorType: 'static,
{
    let x_range = padded_range(rows.iter().map(|r| r.bitrate_kbps));
    // Keep the threshold lines in frame even when all rows sit on one side
    let y_range = padded_range(
        rows.iter()
            .map(|r| r.psnr_db)
            .chain([30.0, 40.0]),
    );

    let mut chart = ChartBuilder::on(area)
        .caption("Video Quality vs Bitrate (PSNR)", ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(55)
        .build_cartesian_2d(x_range.clone(), y_range)?;

    chart
        .configure_mesh()
        .x_desc("Bitrate (kbps)")
        .y_desc("PSNR (dB)")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            rows.iter().map(|r| (r.bitrate_kbps, r.psnr_db)),
            palette::STEEL_BLUE.stroke_width(2),
        ))?
        .label("PSNR")
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], palette::STEEL_BLUE.stroke_width(2))
        });

    chart.draw_series(
        rows.iter()
            .map(|r| Circle::new((r.bitrate_kbps, r.psnr_db), 4, palette::STEEL_BLUE.filled())),
    )?;

    chart
        .draw_series(DashedLineSeries::new(
            [(x_range.start, 40.0), (x_range.end, 40.0)],
            8,
            6,
            palette::THRESHOLD_GREEN.stroke_width(1),
        ))?
        .label("Very Good (40 dB)")
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], palette::THRESHOLD_GREEN)
        });

    chart
        .draw_series(DashedLineSeries::new(
            [(x_range.start, 30.0), (x_range.end, 30.0)],
            8,
            6,
            palette::THRESHOLD_ORANGE.stroke_width(1),
        ))?
        .label("Acceptable (30 dB)")
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], palette::THRESHOLD_ORANGE)
        });

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .position(SeriesLabelPosition::LowerRight)
        .draw()?;

    Ok(())
}

fn draw_ssim_panel<DB: DrawingBackend>(
    rows: &[Measurement],
    area: &DrawingArea<DB, plotters::coord::Shift>,
) -> DrawResult<()>
where
    DB::ErrorType: 'static,
{
    let x_range = padded_range(rows.iter().map(|r| r.bitrate_kbps));
    let y_range = padded_range(rows.iter().map(|r| r.ssim).chain([0.90, 0.95]));

    let mut chart = ChartBuilder::on(area)
        .caption("Video Quality vs Bitrate (SSIM)", ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(55)
        .build_cartesian_2d(x_range.clone(), y_range)?;

    chart
        .configure_mesh()
        .x_desc("Bitrate (kbps)")
        .y_desc("SSIM")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            rows.iter().map(|r| (r.bitrate_kbps, r.ssim)),
            palette::PLUM.stroke_width(2),
        ))?
        .label("SSIM")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], palette::PLUM.stroke_width(2)));

    chart.draw_series(
        rows.iter()
            .map(|r| Circle::new((r.bitrate_kbps, r.ssim), 4, palette::PLUM.filled())),
    )?;

    chart
        .draw_series(DashedLineSeries::new(
            [(x_range.start, 0.95), (x_range.end, 0.95)],
            8,
            6,
            palette::THRESHOLD_GREEN.stroke_width(1),
        ))?
        .label("Excellent (0.95)")
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], palette::THRESHOLD_GREEN)
        });

    chart
        .draw_series(DashedLineSeries::new(
            [(x_range.start, 0.90), (x_range.end, 0.90)],
            8,
            6,
            palette::THRESHOLD_ORANGE.stroke_width(1),
        ))?
        .label("Good (0.90)")
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], palette::THRESHOLD_ORANGE)
        });

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .position(SeriesLabelPosition::LowerRight)
        .draw()?;

    Ok(())
}
