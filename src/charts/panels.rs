use anyhow::Result;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::analysis::utility::{GaussianKde, Histogram};

const TITLE_FONT: (&str, u32) = ("sans-serif", 18);
const LABEL_CHARS: usize = 14;

/// A bar per category, heights are counts.
pub struct CountBars<'a> {
    pub title: &'a str,
    pub x_desc: &'a str,
    pub y_desc: &'a str,
    pub labels: Vec<String>,
    pub counts: Vec<usize>,
    pub palette: &'a [RGBColor],
}

/// Shortens long category text so tick labels stay readable.
pub fn short_label(text: &str) -> String {
    if text.chars().count() <= LABEL_CHARS {
        return text.to_string();
    }
    let head: String = text.chars().take(LABEL_CHARS - 1).collect();
    format!("{}…", head)
}

/// Cycles through `palette`; an empty palette falls back to black.
fn pick_color(palette: &[RGBColor], i: usize) -> RGBColor {
    if palette.is_empty() {
        return BLACK;
    }
    palette[i % palette.len()]
}

fn category_label(labels: &[String], v: &SegmentValue<u32>) -> String {
    match v {
        SegmentValue::CenterOf(i) => labels
            .get(*i as usize)
            .map(|l| short_label(l))
            .unwrap_or_default(),
        _ => String::new(),
    }
}

// Category axes are `0..len` segmented, so there is one trailing empty slot
// and a single-category chart still has a proper width per bar.

/// Draws a categorical bar chart. No categories draws a blank panel.
pub fn draw_count_bars<DB>(area: &DrawingArea<DB, Shift>, bars: &CountBars) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let len = bars.labels.len() as u32;
    let y_max = bars.counts.iter().copied().max().unwrap_or(0) as u32 + 1;

    let mut chart = ChartBuilder::on(area)
        .caption(bars.title, TITLE_FONT)
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d((0u32..len).into_segmented(), 0u32..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(bars.labels.len() + 1)
        .x_label_formatter(&|v: &SegmentValue<u32>| category_label(&bars.labels, v))
        .x_desc(bars.x_desc)
        .y_desc(bars.y_desc)
        .draw()?;

    chart.draw_series(bars.counts.iter().enumerate().map(|(i, &count)| {
        let i = i as u32;
        let color = pick_color(bars.palette, i as usize);
        let mut bar = Rectangle::new(
            [
                (SegmentValue::Exact(i), 0u32),
                (SegmentValue::Exact(i + 1), count as u32),
            ],
            color.filled(),
        );
        bar.set_margin(0, 0, 4, 4);
        bar
    }))?;

    Ok(())
}

/// Draws one bar per `(x, y)` pair where both axes are categorical; each bar
/// reaches up to its y category. No pairs draws a blank panel.
pub fn draw_category_pairs<DB>(
    area: &DrawingArea<DB, Shift>,
    title: &str,
    pairs: &[(String, String)],
    palette: &[RGBColor],
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let x_labels: Vec<String> = pairs.iter().map(|(x, _)| x.clone()).collect();
    let mut y_labels: Vec<String> = Vec::new();
    for (_, y) in pairs {
        if !y_labels.contains(y) {
            y_labels.push(y.clone());
        }
    }

    let x_len = x_labels.len() as u32;
    let y_len = y_labels.len() as u32;

    let mut chart = ChartBuilder::on(area)
        .caption(title, TITLE_FONT)
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(
            (0u32..x_len).into_segmented(),
            (0u32..y_len).into_segmented(),
        )?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(x_labels.len() + 1)
        .y_labels(y_labels.len() + 1)
        .x_label_formatter(&|v: &SegmentValue<u32>| category_label(&x_labels, v))
        .y_label_formatter(&|v: &SegmentValue<u32>| category_label(&y_labels, v))
        .draw()?;

    chart.draw_series(pairs.iter().enumerate().map(|(i, (_, y))| {
        let i = i as u32;
        let level = y_labels.iter().position(|l| l == y).unwrap_or(0) as u32;
        let color = pick_color(palette, i as usize);
        let mut bar = Rectangle::new(
            [
                (SegmentValue::Exact(i), SegmentValue::Exact(0)),
                (SegmentValue::Exact(i + 1), SegmentValue::CenterOf(level)),
            ],
            color.filled(),
        );
        bar.set_margin(0, 0, 4, 4);
        bar
    }))?;

    Ok(())
}

/// Histogram plus an optional density curve scaled to counts
/// (`n * bin_width`). `None` draws a blank panel.
pub fn draw_histogram<DB>(
    area: &DrawingArea<DB, Shift>,
    title: &str,
    x_desc: &str,
    y_desc: &str,
    histogram: Option<&Histogram>,
    kde: Option<&GaussianKde>,
    color: RGBColor,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let (x_range, curve) = match histogram {
        Some(h) => {
            let lo = h.edges.first().copied().unwrap_or(0.0);
            let hi = h.edges.last().copied().unwrap_or(1.0);
            let scale = h.total() as f64 * h.bin_width();
            let curve: Vec<(f64, f64)> = kde
                .map(|k| {
                    k.curve(lo, hi, 200)
                        .into_iter()
                        .map(|(x, d)| (x, d * scale))
                        .collect()
                })
                .unwrap_or_default();
            (lo..hi, curve)
        }
        None => (0.0..1.0, Vec::new()),
    };

    let count_max = histogram.map(|h| h.max_count()).unwrap_or(0) as f64;
    let curve_max = curve.iter().map(|(_, y)| *y).fold(0.0, f64::max);
    let y_max = count_max.max(curve_max).max(1.0) * 1.1;

    let mut chart = ChartBuilder::on(area)
        .caption(title, TITLE_FONT)
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_range, 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc(y_desc)
        .x_label_formatter(&|v| format!("{:.1}", v))
        .y_label_formatter(&|v| format!("{:.1}", v))
        .draw()?;

    if let Some(h) = histogram {
        chart.draw_series(h.counts.iter().enumerate().map(|(i, &count)| {
            Rectangle::new(
                [(h.edges[i], 0.0), (h.edges[i + 1], count as f64)],
                color.mix(0.6).filled(),
            )
        }))?;
    }

    if !curve.is_empty() {
        chart.draw_series(LineSeries::new(curve, color.stroke_width(2)))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_label_keeps_short_text() {
        assert_eq!(short_label("Owned"), "Owned");
        assert_eq!(short_label(""), "");
    }

    #[test]
    fn test_short_label_truncates() {
        let label = short_label("Previously known as Slingair Heliworks.");
        assert_eq!(label.chars().count(), LABEL_CHARS);
        assert!(label.ends_with('…'));
    }

    #[test]
    fn test_pick_color_cycles_and_falls_back() {
        let palette = [RED, GREEN];
        assert_eq!(pick_color(&palette, 0), RED);
        assert_eq!(pick_color(&palette, 3), GREEN);
        assert_eq!(pick_color(&[], 7), BLACK);
    }

    #[test]
    fn test_category_label() {
        let labels = vec!["LZ".to_string(), "TL".to_string()];
        assert_eq!(category_label(&labels, &SegmentValue::CenterOf(1)), "TL");
        assert_eq!(category_label(&labels, &SegmentValue::CenterOf(5)), "");
        assert_eq!(category_label(&labels, &SegmentValue::Exact(0)), "");
    }
}
