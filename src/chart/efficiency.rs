//! Compression efficiency: quality delivered per megabyte.

use std::path::{Path, PathBuf};

use plotters::prelude::*;

use super::{DrawResult, chart_error, padded_range, palette};
use crate::error::Result;
use crate::model::Measurement;

const FILENAME: &str = "compression_efficiency.png";

/// Render `compression_efficiency.png`: PSNR/MB on the primary y-axis and
/// SSIM/MB on the secondary y-axis, both against bitrate.
pub fn compression_efficiency(rows: &[Measurement], out_dir: &Path) -> Result<PathBuf> {
    let path = out_dir.join(FILENAME);
    draw(rows, &path).map_err(|e| chart_error(FILENAME, e))?;
    Ok(path)
}

fn draw(rows: &[Measurement], path: &Path) -> DrawResult<()> {
    let root = BitMapBackend::new(path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let x_range = padded_range(rows.iter().map(|r| r.bitrate_kbps));
    let psnr_range = padded_range(rows.iter().map(Measurement::psnr_per_mb));
    let ssim_range = padded_range(rows.iter().map(Measurement::ssim_per_mb));

    let mut chart = ChartBuilder::on(&root)
        .caption("Compression Efficiency (Quality per MB)", ("sans-serif", 26))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .right_y_label_area_size(60)
        .build_cartesian_2d(x_range.clone(), psnr_range)?
        .set_secondary_coord(x_range, ssim_range);

    chart
        .configure_mesh()
        .x_desc("Bitrate (kbps)")
        .y_desc("PSNR per MB")
        .draw()?;

    chart
        .configure_secondary_axes()
        .y_desc("SSIM per MB")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            rows.iter().map(|r| (r.bitrate_kbps, r.psnr_per_mb())),
            palette::STEEL_BLUE.stroke_width(2),
        ))?
        .label("PSNR/MB")
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], palette::STEEL_BLUE.stroke_width(2))
        });

    chart.draw_series(
        rows.iter()
            .map(|r| Circle::new((r.bitrate_kbps, r.psnr_per_mb()), 4, palette::STEEL_BLUE.filled())),
    )?;

    chart
        .draw_secondary_series(LineSeries::new(
            rows.iter().map(|r| (r.bitrate_kbps, r.ssim_per_mb())),
            palette::PLUM.stroke_width(2),
        ))?
        .label("SSIM/MB")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], palette::PLUM.stroke_width(2)));

    chart.draw_secondary_series(
        rows.iter()
            .map(|r| TriangleMarker::new((r.bitrate_kbps, r.ssim_per_mb()), 5, palette::PLUM.filled())),
    )?;

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .position(SeriesLabelPosition::UpperRight)
        .draw()?;

    root.present()?;
    Ok(())
}
