//! Roster statistics and chart job.

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::info;

use crate::charts::{ChartRenderer, ChartSize, category_bars, gender_by_category_grid, gender_pie};
use crate::config::{AnalyzerConfig, ChartFile};
use crate::error::Result;
use crate::models::{AgeBands, enrich};
use crate::roster::read_roster;
use crate::stats::RosterStats;

/// Result of an analysis run.
#[derive(Debug, Clone)]
pub struct AnalyzeResult {
    pub stats: RosterStats,
    /// Chart images written, in rendering order.
    pub charts: Vec<PathBuf>,
}

fn size_of(chart: &ChartFile) -> ChartSize {
    ChartSize {
        width: chart.width,
        height: chart.height,
    }
}

/// Read the roster at `input`, aggregate it, write the text report to `out`
/// and render the three charts.
///
/// The report is written before any chart, so it survives a rendering failure.
/// No chart is written when the roster cannot be read.
pub fn analyze<R: ChartRenderer, W: Write>(
    input: &Path,
    config: &AnalyzerConfig,
    renderer: &R,
    today: NaiveDate,
    bands: &AgeBands,
    out: &mut W,
) -> Result<AnalyzeResult> {
    info!("Reading roster from {}", input.display());
    let employees = enrich(read_roster(input)?, today, bands);
    info!("Read {} records", employees.len());

    let stats = RosterStats::from_employees(&employees);
    writeln!(out, "{}", stats.report())?;
    out.flush()?;

    let mut charts = Vec::with_capacity(3);

    let path = config.chart_path(&config.gender_chart);
    renderer.render_pie(&gender_pie(&stats), size_of(&config.gender_chart), &path)?;
    info!("Chart saved: {}", path.display());
    charts.push(path);

    let path = config.chart_path(&config.age_chart);
    renderer.render_bar(&category_bars(&stats), size_of(&config.age_chart), &path)?;
    info!("Chart saved: {}", path.display());
    charts.push(path);

    let path = config.chart_path(&config.gender_by_age_chart);
    renderer.render_pie_grid(
        &gender_by_category_grid(&stats),
        size_of(&config.gender_by_age_chart),
        &path,
    )?;
    info!("Chart saved: {}", path.display());
    charts.push(path);

    Ok(AnalyzeResult { stats, charts })
}
