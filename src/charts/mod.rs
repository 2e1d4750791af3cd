//! PNG chart rendering for an [`Analysis`].
//!
//! Two figures are produced: a 2×2 overview grid (notes groups, most and
//! least used airlines, highest fare airlines) and a histogram of the
//! average delay column with a density overlay. Each panel is drawn onto
//! its own [`DrawingArea`], nothing goes through shared plotting state.

pub mod panels;

use anyhow::{Context, Result};
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::analysis::Analysis;
use crate::analysis::utility::{GaussianKde, Histogram, present_values};
use crate::table::AirlineRecord;
use panels::{CountBars, draw_category_pairs, draw_count_bars, draw_histogram};

pub const OVERVIEW_FILE: &str = "airline_overview.png";
pub const DELAY_HISTOGRAM_FILE: &str = "average_delay_histogram.png";

const OVERVIEW_SIZE: (u32, u32) = (1500, 500);
const DELAY_HISTOGRAM_SIZE: (u32, u32) = (800, 500);
const DELAY_BINS: usize = 20;

const SKY_BLUE: RGBColor = RGBColor(135, 206, 235);
const ORANGE: RGBColor = RGBColor(255, 165, 0);
const VIRIDIS: [RGBColor; 5] = [
    RGBColor(68, 1, 84),
    RGBColor(59, 82, 139),
    RGBColor(33, 145, 140),
    RGBColor(94, 201, 98),
    RGBColor(253, 231, 37),
];
const MUTED: [RGBColor; 5] = [
    RGBColor(72, 120, 208),
    RGBColor(238, 133, 74),
    RGBColor(106, 204, 100),
    RGBColor(214, 95, 95),
    RGBColor(149, 108, 180),
];

/// Counts records per airline name, in first-seen order.
pub fn count_by_airline(records: &[AirlineRecord]) -> (Vec<String>, Vec<usize>) {
    let mut names: Vec<String> = Vec::new();
    let mut counts: Vec<usize> = Vec::new();

    for record in records {
        match names.iter().position(|n| *n == record.airline) {
            Some(idx) => counts[idx] += 1,
            None => {
                names.push(record.airline.clone());
                counts.push(1);
            }
        }
    }

    (names, counts)
}

/// Renders both figures into `output_dir`, creating it if needed.
/// Returns the written paths (overview first).
#[tracing::instrument(skip_all, fields(output_dir = %output_dir.display()))]
pub fn render_all(analysis: &Analysis, output_dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("creating chart directory {}", output_dir.display()))?;

    let overview = output_dir.join(OVERVIEW_FILE);
    render_overview(analysis, &overview)?;

    let histogram = output_dir.join(DELAY_HISTOGRAM_FILE);
    render_delay_histogram(analysis, &histogram)?;

    info!(count = 2, "Charts written");
    Ok(vec![overview, histogram])
}

/// Figure 1: the 2×2 overview grid.
pub fn render_overview(analysis: &Analysis, path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, OVERVIEW_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let cells = root.split_evenly((2, 2));

    let groups = analysis.groups.groups();
    draw_count_bars(
        &cells[0],
        &CountBars {
            title: "Airlines Sorted by Type",
            x_desc: "Type",
            y_desc: "Count",
            labels: groups.iter().map(|g| g.notes.clone()).collect(),
            counts: groups.iter().map(|g| g.count).collect(),
            palette: &[SKY_BLUE],
        },
    )?;

    let (labels, counts) = count_by_airline(&analysis.most_used_airlines);
    draw_count_bars(
        &cells[1],
        &CountBars {
            title: "Most Used Airlines",
            x_desc: "Airline",
            y_desc: "count",
            labels,
            counts,
            palette: &VIRIDIS,
        },
    )?;

    let (labels, counts) = count_by_airline(&analysis.least_used_airlines);
    draw_count_bars(
        &cells[2],
        &CountBars {
            title: "Least Used Airlines",
            x_desc: "Airline",
            y_desc: "count",
            labels,
            counts,
            palette: &VIRIDIS,
        },
    )?;

    let pairs: Vec<(String, String)> = analysis
        .highest_fare_airlines
        .iter()
        .map(|r| (r.airline.clone(), r.iata.clone()))
        .collect();
    draw_category_pairs(&cells[3], "Highest Fare Airlines", &pairs, &MUTED)?;

    root.present()
        .with_context(|| format!("writing {}", path.display()))?;
    debug!(path = %path.display(), "Overview chart written");

    Ok(())
}

/// Figure 2: histogram of the delay column with a density overlay.
pub fn render_delay_histogram(analysis: &Analysis, path: &Path) -> Result<()> {
    let values = present_values(&analysis.delays);
    let histogram = Histogram::new(&values, DELAY_BINS);
    let kde = GaussianKde::new(&values);

    let root = BitMapBackend::new(path, DELAY_HISTOGRAM_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    draw_histogram(
        &root,
        "Histogram of Average Delay Across Airlines",
        "Average Delay (minutes)",
        "Frequency",
        histogram.as_ref(),
        kde.as_ref(),
        ORANGE,
    )?;

    root.present()
        .with_context(|| format!("writing {}", path.display()))?;
    debug!(
        path = %path.display(),
        values = values.len(),
        "Delay histogram written"
    );

    Ok(())
}
