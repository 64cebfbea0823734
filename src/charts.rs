//! Chart-ready datasets derived from monthly and yearly climate data.
//!
//! Each function prepares exactly the numbers one chart needs: the yearly
//! temperature line and its animation frames, the correlation matrix and
//! pairwise scatter panels over yearly columns, and the snowfall
//! histogram, scatter, bar and box plots over monthly records. Drawing is
//! left to whatever consumes the written tables.

use crate::constants::{WHISKER_IQR_FACTOR, columns};
use crate::models::{Month, MonthlyRecord, YearlySummary};
use serde::Serialize;
use std::collections::BTreeMap;

// =============================================================================
// Yearly columns
// =============================================================================

/// A numeric column of the yearly summary table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SummaryColumn {
    Year,
    MeanTempC,
    ExtremeMaxTempC,
    ExtremeMinTempC,
    TotalRainMm,
    TotalSnowCm,
    MeanTempF,
}

impl SummaryColumn {
    /// Columns in yearly summary table order
    pub const ALL: [SummaryColumn; 7] = [
        SummaryColumn::Year,
        SummaryColumn::MeanTempC,
        SummaryColumn::ExtremeMaxTempC,
        SummaryColumn::ExtremeMinTempC,
        SummaryColumn::TotalRainMm,
        SummaryColumn::TotalSnowCm,
        SummaryColumn::MeanTempF,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SummaryColumn::Year => columns::YEAR,
            SummaryColumn::MeanTempC => columns::MEAN_TEMP_C,
            SummaryColumn::ExtremeMaxTempC => columns::EXTREME_MAX_TEMP_C,
            SummaryColumn::ExtremeMinTempC => columns::EXTREME_MIN_TEMP_C,
            SummaryColumn::TotalRainMm => columns::TOTAL_RAIN_MM,
            SummaryColumn::TotalSnowCm => columns::TOTAL_SNOW_CM,
            SummaryColumn::MeanTempF => columns::MEAN_TEMP_F,
        }
    }

    pub fn value(&self, summary: &YearlySummary) -> Option<f64> {
        match self {
            SummaryColumn::Year => Some(summary.year as f64),
            SummaryColumn::MeanTempC => summary.mean_temp_c,
            SummaryColumn::ExtremeMaxTempC => summary.extreme_max_temp_c,
            SummaryColumn::ExtremeMinTempC => summary.extreme_min_temp_c,
            SummaryColumn::TotalRainMm => summary.total_rain_mm,
            SummaryColumn::TotalSnowCm => summary.total_snow_cm,
            SummaryColumn::MeanTempF => summary.mean_temp_f,
        }
    }
}

// =============================================================================
// Temperature line
// =============================================================================

/// (year, mean °F) points in ascending year, skipping years without a mean
pub fn temperature_line(summaries: &[YearlySummary]) -> Vec<(i32, f64)> {
    summaries
        .iter()
        .filter_map(|summary| summary.mean_temp_f.map(|f| (summary.year, f)))
        .collect()
}

/// Animation frames revealing the line one point at a time.
///
/// Frame `i` holds the first `i` points, clamped to the line length.
pub fn animation_frames(line: &[(i32, f64)], frame_count: usize) -> Vec<Vec<(i32, f64)>> {
    (0..frame_count)
        .map(|frame| line[..frame.min(line.len())].to_vec())
        .collect()
}

// =============================================================================
// Correlation and pairwise panels
// =============================================================================

/// Pairwise Pearson correlations over the yearly summary columns
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<SummaryColumn>,
    /// Row-major, `values[i][j]` correlates `columns[i]` with `columns[j]`
    pub values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    pub fn get(&self, row: SummaryColumn, column: SummaryColumn) -> Option<f64> {
        let i = self.columns.iter().position(|c| *c == row)?;
        let j = self.columns.iter().position(|c| *c == column)?;
        self.values[i][j]
    }
}

/// Correlate every pair of yearly columns using pairwise-complete rows
pub fn correlation_matrix(summaries: &[YearlySummary]) -> CorrelationMatrix {
    let series: Vec<Vec<Option<f64>>> = SummaryColumn::ALL
        .iter()
        .map(|column| summaries.iter().map(|s| column.value(s)).collect())
        .collect();

    let values = series
        .iter()
        .map(|x| series.iter().map(|y| pearson(x, y)).collect())
        .collect();

    CorrelationMatrix {
        columns: SummaryColumn::ALL.to_vec(),
        values,
    }
}

/// Pearson correlation over rows where both values are present.
///
/// `None` with fewer than two complete rows or zero variance on either side.
pub fn pearson(x: &[Option<f64>], y: &[Option<f64>]) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = x
        .iter()
        .zip(y)
        .filter_map(|(a, b)| Some(((*a)?, (*b)?)))
        .collect();

    if pairs.len() < 2 {
        return None;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(a, _)| a).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, b)| b).sum::<f64>() / n;

    let (mut sxx, mut syy, mut sxy) = (0.0, 0.0, 0.0);
    for (a, b) in &pairs {
        let dx = a - mean_x;
        let dy = b - mean_y;
        sxx += dx * dx;
        syy += dy * dy;
        sxy += dx * dy;
    }

    if sxx == 0.0 || syy == 0.0 {
        return None;
    }

    Some((sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0))
}

/// Points for one pairwise scatter panel, skipping incomplete years
pub fn pair_points(summaries: &[YearlySummary], x: SummaryColumn, y: SummaryColumn) -> Vec<(f64, f64)> {
    summaries
        .iter()
        .filter_map(|s| Some((x.value(s)?, y.value(s)?)))
        .collect()
}

// =============================================================================
// Snowfall charts
// =============================================================================

/// Equal-width histogram
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    /// `counts.len() + 1` ascending bin edges
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// (lower edge, upper edge, count) per bin
    pub fn bins(&self) -> impl Iterator<Item = (f64, f64, usize)> + '_ {
        self.edges
            .windows(2)
            .zip(&self.counts)
            .map(|(edge, count)| (edge[0], edge[1], *count))
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Bin finite `values` into `bins` equal-width bins spanning their range.
///
/// The last bin includes its upper edge. When every value is equal the
/// range is widened to one unit centred on that value.
pub fn histogram(values: &[f64], bins: usize) -> Option<Histogram> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() || bins == 0 {
        return None;
    }

    let mut low = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let mut high = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if low == high {
        low -= 0.5;
        high += 0.5;
    }

    let width = (high - low) / bins as f64;
    let edges: Vec<f64> = (0..=bins).map(|i| low + width * i as f64).collect();

    let mut counts = vec![0usize; bins];
    for value in finite {
        let index = (((value - low) / width) as usize).min(bins - 1);
        counts[index] += 1;
    }

    Some(Histogram { edges, counts })
}

/// Mean monthly temperature of the given records, skipping missing values
pub fn mean_temperatures(records: &[MonthlyRecord]) -> Vec<f64> {
    records.iter().filter_map(|r| r.mean_temp_c).collect()
}

/// (snowfall cm, mean temperature °C) for records that have both
pub fn snow_temperature_scatter(records: &[MonthlyRecord]) -> Vec<(f64, f64)> {
    records
        .iter()
        .filter_map(|r| Some((r.total_snow_cm?, r.mean_temp_c?)))
        .collect()
}

/// Mean snowfall of one calendar month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySnowfall {
    pub month: Month,
    pub mean_snow_cm: f64,
    pub records: usize,
}

/// Mean snowfall per calendar month, January first, months without data omitted
pub fn monthly_mean_snowfall(records: &[MonthlyRecord]) -> Vec<MonthlySnowfall> {
    let mut totals: BTreeMap<Month, (f64, usize)> = BTreeMap::new();
    for record in records {
        if let (Some(month), Some(snow)) = (record.month, record.total_snow_cm) {
            let entry = totals.entry(month).or_insert((0.0, 0));
            entry.0 += snow;
            entry.1 += 1;
        }
    }

    totals
        .into_iter()
        .map(|(month, (sum, count))| MonthlySnowfall {
            month,
            mean_snow_cm: sum / count as f64,
            records: count,
        })
        .collect()
}

/// Box plot statistics for one calendar month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxStats {
    pub month: Month,
    pub count: usize,
    pub whisker_low: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub whisker_high: f64,
    pub outliers: Vec<f64>,
}

/// Snowfall distribution per calendar month, January first
pub fn monthly_snow_box_stats(records: &[MonthlyRecord]) -> Vec<BoxStats> {
    let mut by_month: BTreeMap<Month, Vec<f64>> = BTreeMap::new();
    for record in records {
        if let (Some(month), Some(snow)) = (record.month, record.total_snow_cm) {
            by_month.entry(month).or_default().push(snow);
        }
    }

    by_month
        .into_iter()
        .filter_map(|(month, values)| box_stats(month, values))
        .collect()
}

fn box_stats(month: Month, mut values: Vec<f64>) -> Option<BoxStats> {
    values.retain(|v| v.is_finite());
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);

    let q1 = quantile(&values, 0.25);
    let median = quantile(&values, 0.5);
    let q3 = quantile(&values, 0.75);
    let reach = WHISKER_IQR_FACTOR * (q3 - q1);
    let (fence_low, fence_high) = (q1 - reach, q3 + reach);

    let within = |v: &f64| *v >= fence_low && *v <= fence_high;
    let whisker_low = values
        .iter()
        .copied()
        .filter(|v| within(v))
        .fold(f64::INFINITY, f64::min);
    let whisker_high = values
        .iter()
        .copied()
        .filter(|v| within(v))
        .fold(f64::NEG_INFINITY, f64::max);
    let outliers = values.iter().copied().filter(|v| !within(v)).collect();

    Some(BoxStats {
        month,
        count: values.len(),
        whisker_low,
        q1,
        median,
        q3,
        whisker_high,
        outliers,
    })
}

/// Linear-interpolated quantile of sorted, non-empty `values`
fn quantile(values: &[f64], q: f64) -> f64 {
    let position = q * (values.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    values[lower] + (values[upper] - values[lower]) * (position - lower as f64)
}
