//! Terminal chart renderers.
//!
//! These stand in for a plotting library: they only consume the prepared
//! structures from `core::charts` and turn them into ANSI strings.

use crate::core::charts::{HeatmapRow, TrendSeries};
use crate::utils::colors::{self, CYAN, GREY, RESET};
use ansi_term::Colour;

/// Horizontal bar chart of hours slept per night, one row per record.
/// Two columns per hour; the cyan marker is the nightly target.
pub fn render_trend(series: &TrendSeries) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Daily Sleep Duration (target {:.1} hrs)\n\n",
        series.target_hours
    ));

    let axis_hours = series
        .points
        .iter()
        .map(|p| p.hours)
        .fold(series.target_hours, f64::max)
        .ceil();
    let width = (axis_hours * 2.0) as usize + 1;
    let marker = (series.target_hours * 2.0).round() as usize;

    for p in &series.points {
        let filled = (p.hours * 2.0).round() as usize;
        let color = colors::color_for_hours(p.hours, series.target_hours);

        let mut bar = String::new();
        for col in 0..width {
            if col == marker {
                bar.push_str(&format!("{}|{}", CYAN, RESET));
            } else if col < filled {
                bar.push_str(&format!("{}█{}", color, RESET));
            } else {
                bar.push_str(&format!("{}·{}", GREY, RESET));
            }
        }

        out.push_str(&format!(
            "{}  {:>5.2} hrs  {}\n",
            p.date.format("%Y-%m-%d"),
            p.hours,
            bar
        ));
    }

    out
}

/// Bedtime/wake-time heatmap: one swatch per cell, colored by hour of day
/// on a cool-to-warm gradient (midnight blue, midday red).
pub fn render_heatmap(rows: &[HeatmapRow]) -> String {
    let mut out = String::new();
    out.push_str("Sleep and Wake Times Heatmap (color = hour of day)\n\n");
    out.push_str(&format!(
        "{:<12} {:<14} {:<14}\n",
        "Date", "Bedtime", "Wake Time"
    ));

    for row in rows {
        let bed = hour_color(row.bedtime_hour).paint("█████");
        let wake = hour_color(row.wake_hour).paint("█████");
        out.push_str(&format!(
            "{:<12} {} {:>5.2}  {} {:>5.2}\n",
            row.date.format("%Y-%m-%d"),
            bed,
            row.bedtime_hour,
            wake,
            row.wake_hour
        ));
    }

    out
}

fn hour_color(hour: f64) -> Colour {
    let t = (hour / 24.0).clamp(0.0, 1.0);
    let (r, g, b) = if t < 0.5 {
        lerp((59, 76, 192), (221, 221, 221), t / 0.5)
    } else {
        lerp((221, 221, 221), (180, 4, 38), (t - 0.5) / 0.5)
    };
    Colour::RGB(r, g, b)
}

fn lerp(a: (u8, u8, u8), b: (u8, u8, u8), k: f64) -> (u8, u8, u8) {
    let ch = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * k).round() as u8;
    (ch(a.0, b.0), ch(a.1, b.1), ch(a.2, b.2))
}
