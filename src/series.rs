use crate::{
    budget::Bank,
    core::{SeriesColor, SeriesPoint, Year},
    mark::{ChartSpec, ExtendMode},
    project::{project_with_plateau, project_years},
};

/// Assemble the rendered series for a chart: the historical record trimmed
/// to the chart's extent, then an optional projected tail consuming the
/// remaining budget from the year after the trimmed record ends.
#[tracing::instrument(skip(bank, chart))]
pub fn chart_series(bank: &Bank, chart: &ChartSpec) -> Vec<SeriesPoint> {
    let end = chart.stop_at.unwrap_or(chart.max_year);

    let mut series: Vec<SeriesPoint> = bank
        .table()
        .points()
        .iter()
        .filter(|d| d.year >= chart.min_year && d.year <= end)
        .map(|d| SeriesPoint {
            year: d.year,
            emissions: d.emissions,
            color: SeriesColor::Known,
        })
        .collect();

    let Some(extend) = chart.extend else {
        return series;
    };
    let Some(peak) = series.last().map(|p| p.emissions) else {
        return series;
    };

    let remaining = bank.remaining_budget(end);
    let projected = match extend {
        ExtendMode::Steady => project_years(remaining, peak, false),
        ExtendMode::Reduce => {
            project_with_plateau(remaining, peak, chart.steady.unwrap_or(0), true)
        }
    };

    // Flat plateau years keep the steady tag even on a reduce projection.
    let plateau_len = match extend {
        ExtendMode::Steady => projected.len(),
        ExtendMode::Reduce => projected.iter().take_while(|&&v| v == peak).count(),
    };

    for (i, &emissions) in projected.iter().enumerate() {
        series.push(SeriesPoint {
            year: Year(end.0 + 1 + i as i32),
            emissions,
            color: if i < plateau_len {
                SeriesColor::Steady
            } else {
                SeriesColor::Reduce
            },
        });
    }

    series
}

/// Smallest mapped value in `data`, or +inf when empty.
pub fn min_by<T>(data: &[T], f: impl Fn(&T) -> f64) -> f64 {
    data.iter().map(f).fold(f64::INFINITY, f64::min)
}

/// Largest mapped value in `data`, or -inf when empty.
pub fn max_by<T>(data: &[T], f: impl Fn(&T) -> f64) -> f64 {
    data.iter().map(f).fold(f64::NEG_INFINITY, f64::max)
}
