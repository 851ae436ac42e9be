#[cfg(test)]
#[path = "../../tests/unit/profiling/plot_test.rs"]
mod plot_test;

use super::TimingReport;
use crate::utils::{Float, GenericError, GenericResult};
use plotters::prelude::*;
use serde::Deserialize;
use std::ops::Range;
use std::path::Path;

type DrawResult<T> = Result<T, Box<dyn std::error::Error>>;

/// A plot configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotConfig {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self { width: 800, height: 600 }
    }
}

/// Draws runtimes of both implementations per problem size as a log scale line chart and
/// stores it as an image at given path.
pub fn draw_timing_plot(report: &TimingReport, path: &Path, config: &PlotConfig) -> GenericResult<()> {
    draw_timing_chart(report, path, config).map_err(GenericError::from)
}

fn draw_timing_chart(report: &TimingReport, path: &Path, config: &PlotConfig) -> DrawResult<()> {
    let area = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
    area.fill(&WHITE)?;

    let sizes = report.reduction_times.len().max(report.naive_times.len());
    let y_range = get_log_range(report);

    let mut chart = ChartBuilder::on(&area)
        .caption("Log runtimes vs. problem size", ("sans-serif", 24))
        .margin(10)
        .set_label_area_size(LabelAreaPosition::Left, 70)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d(0..sizes.saturating_sub(1).max(1), y_range.log_scale())?;

    chart.configure_mesh().x_desc("Number of elements in U").y_desc("Runtimes (log seconds)").draw()?;

    [("reduction", &report.reduction_times, BLUE), ("naive", &report.naive_times, RED)].into_iter().try_for_each(
        |(label, times, color)| {
            chart
                .draw_series(LineSeries::new(get_positive_points(times), &color))?
                .label(label)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));

            DrawResult::Ok(())
        },
    )?;

    chart.configure_series_labels().background_style(&WHITE.mix(0.8)).border_style(&BLACK).draw()?;

    area.present()?;

    Ok(())
}

/// Returns y axis range which covers all positive runtimes. Non positive runtimes cannot be shown
/// on a log scale.
fn get_log_range(report: &TimingReport) -> Range<Float> {
    let (min, max) = report
        .reduction_times
        .iter()
        .chain(report.naive_times.iter())
        .filter(|&&time| time > 0.)
        .fold((Float::INFINITY, 0.), |(min, max): (Float, Float), &time| (min.min(time), max.max(time)));

    if max > 0. { (min / 2.)..(max * 2.) } else { 1E-9..1. }
}

fn get_positive_points(times: &[Float]) -> Vec<(usize, Float)> {
    times.iter().copied().enumerate().filter(|(_, time)| *time > 0.).collect()
}
