//! The metrics table rendered as an image, with per-row star ratings.

use std::path::{Path, PathBuf};

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontDesc, FontFamily, FontStyle};

use super::{DrawResult, chart_error, palette};
use crate::error::Result;
use crate::model::Measurement;
use crate::rating::QualityRating;

const FILENAME: &str = "summary_table.png";

const TABLE_WIDTH: u32 = 1100;
const ROW_HEIGHT: i32 = 44;
const TABLE_TOP: i32 = 80;
const SIDE_MARGIN: i32 = 50;

const COLUMNS: [&str; 5] = [
    "Bitrate (kbps)",
    "Size (MB)",
    "PSNR (dB)",
    "SSIM",
    "Quality",
];

/// Render `summary_table.png`: header row, one row per measurement, and a
/// star rating derived from the PSNR/SSIM thresholds. Even data rows get a
/// light tint.
pub fn summary_table(rows: &[Measurement], out_dir: &Path) -> Result<PathBuf> {
    let path = out_dir.join(FILENAME);
    draw(rows, &path).map_err(|e| chart_error(FILENAME, e))?;
    Ok(path)
}

fn draw(rows: &[Measurement], path: &Path) -> DrawResult<()> {
    let height = (TABLE_TOP + (rows.len() as i32 + 1) * ROW_HEIGHT + 40) as u32;
    let root = BitMapBackend::new(path, (TABLE_WIDTH, height)).into_drawing_area();
    root.fill(&WHITE)?;

    let centered = Pos::new(HPos::Center, VPos::Center);
    let title_style = FontDesc::new(FontFamily::SansSerif, 28.0, FontStyle::Bold)
        .color(&BLACK)
        .pos(centered);
    root.draw(&Text::new(
        "Video Quality Metrics Summary",
        (TABLE_WIDTH as i32 / 2, TABLE_TOP / 2),
        title_style,
    ))?;

    let table_right = TABLE_WIDTH as i32 - SIDE_MARGIN;
    let col_width = (table_right - SIDE_MARGIN) / COLUMNS.len() as i32;

    let header_style = FontDesc::new(FontFamily::SansSerif, 18.0, FontStyle::Bold)
        .color(&WHITE)
        .pos(centered);
    let cell_style = FontDesc::new(FontFamily::SansSerif, 17.0, FontStyle::Normal)
        .color(&BLACK)
        .pos(centered);
    let border = RGBColor(0xb0, 0xb0, 0xb0);

    // Header row
    for (col, name) in COLUMNS.iter().enumerate() {
        let (x0, x1) = cell_span(col, col_width);
        root.draw(&Rectangle::new(
            [(x0, TABLE_TOP), (x1, TABLE_TOP + ROW_HEIGHT)],
            palette::HEADER_BLUE.filled(),
        ))?;
        root.draw(&Text::new(
            *name,
            ((x0 + x1) / 2, TABLE_TOP + ROW_HEIGHT / 2),
            header_style.clone(),
        ))?;
    }

    // Data rows
    for (i, row) in rows.iter().enumerate() {
        let y0 = TABLE_TOP + (i as i32 + 1) * ROW_HEIGHT;
        let y1 = y0 + ROW_HEIGHT;
        let rating = QualityRating::from_metrics(row.psnr_db, row.ssim);

        let cells = [
            format!("{:.2}", row.bitrate_kbps),
            format!("{:.2}", row.file_size_mb),
            format!("{:.2}", row.psnr_db),
            format!("{:.2}", row.ssim),
            rating.star_string(),
        ];

        for (col, text) in cells.iter().enumerate() {
            let (x0, x1) = cell_span(col, col_width);
            if i % 2 == 1 {
                root.draw(&Rectangle::new(
                    [(x0, y0), (x1, y1)],
                    palette::ROW_TINT.filled(),
                ))?;
            }
            root.draw(&Rectangle::new([(x0, y0), (x1, y1)], border.stroke_width(1)))?;
            root.draw(&Text::new(
                text.as_str(),
                ((x0 + x1) / 2, (y0 + y1) / 2),
                cell_style.clone(),
            ))?;
        }
    }

    root.present()?;
    Ok(())
}

fn cell_span(col: usize, col_width: i32) -> (i32, i32) {
    let x0 = SIDE_MARGIN + col as i32 * col_width;
    (x0, x0 + col_width)
}
