/// Future yearly emissions under one of two extrapolation policies, each
/// consuming `allowed_emissions` exactly (area under the projected curve).
///
/// `reduce = true` declines linearly from `peak_rate` to zero over
/// `ceil(2 * allowed / peak)` years (triangle area). `reduce = false` holds
/// flat at `peak_rate` for `allowed / peak` whole years (rectangle area).
/// A spent budget (`allowed_emissions <= 0`) projects no future at all.
pub fn project_years(allowed_emissions: f64, peak_rate: f64, reduce: bool) -> Vec<f64> {
    if allowed_emissions <= 0.0 || peak_rate <= 0.0 {
        return Vec::new();
    }

    if reduce {
        let years = (2.0 * allowed_emissions / peak_rate).ceil();
        let slope = -peak_rate / years;
        (1..=years as u64)
            .map(|i| peak_rate + i as f64 * slope)
            .collect()
    } else {
        let years = (allowed_emissions / peak_rate) as u64;
        vec![peak_rate; years as usize]
    }
}

/// Steady-then-reduce: up to `steady_years` flat years at `peak_rate`, each
/// drawing down the allowance, then the remainder under `project_years`.
/// The plateau stops early once a full flat year no longer fits.
pub fn project_with_plateau(
    allowed_emissions: f64,
    peak_rate: f64,
    steady_years: u32,
    reduce: bool,
) -> Vec<f64> {
    if allowed_emissions <= 0.0 || peak_rate <= 0.0 {
        return Vec::new();
    }

    let mut out = Vec::new();
    let mut remaining = allowed_emissions;
    for _ in 0..steady_years {
        if remaining < peak_rate {
            break;
        }
        out.push(peak_rate);
        remaining -= peak_rate;
    }

    out.extend(project_years(remaining, peak_rate, reduce));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn spent_budget_projects_nothing() {
        assert!(project_years(0.0, 30.0, true).is_empty());
        assert!(project_years(0.0, 30.0, false).is_empty());
        assert!(project_years(-5.0, 30.0, true).is_empty());
    }

    #[test]
    fn reduce_is_strictly_decreasing_to_zero() {
        let series = project_years(200.0, 30.0, true);
        assert_eq!(series.len(), (2.0f64 * 200.0 / 30.0).ceil() as usize);
        assert!(series.windows(2).all(|w| w[1] < w[0]));

        // Last value lands within one slope step of zero.
        let step = 30.0 / series.len() as f64;
        let last = *series.last().unwrap();
        assert!(last <= step && last >= -step);
    }

    #[test]
    fn reduce_area_matches_allowance() {
        let allowed = 200.0;
        let series = project_years(allowed, 30.0, true);
        let area: f64 = series.iter().sum();
        // Triangle discretized on integer years: the sum is within half a
        // peak-rate of the allowance.
        assert!((area - allowed).abs() < 15.0);
    }

    #[test]
    fn steady_holds_flat_at_peak() {
        let series = project_years(100.0, 30.0, false);
        assert_eq!(series.len(), 3);
        assert!(series.iter().all(|&v| v == 30.0));
    }

    #[test]
    fn steady_exact_division_uses_every_year() {
        let series = project_years(90.0, 30.0, false);
        assert_eq!(series.len(), 3);
    }

    #[test]
    fn plateau_precedes_decline() {
        let series = project_with_plateau(300.0, 30.0, 4, true);
        assert!(series[..4].iter().all(|&v| v == 30.0));
        assert!(series[4] < 30.0);
        assert!(series[4..].windows(2).all(|w| w[1] < w[0]));
    }

    #[test]
    fn plateau_stops_when_allowance_runs_out() {
        let series = project_with_plateau(50.0, 30.0, 10, true);
        assert_eq!(series.iter().filter(|&&v| v == 30.0).count(), 1);
        let area: f64 = series.iter().sum();
        assert_relative_eq!(area, 50.0, max_relative = 0.35);
    }

    #[test]
    fn zero_plateau_is_plain_projection() {
        assert_eq!(
            project_with_plateau(200.0, 30.0, 0, true),
            project_years(200.0, 30.0, true)
        );
    }
}
