//! Yearly aggregation of monthly climate records.
//!
//! Groups monthly records by calendar year and reduces each field with a
//! fixed function: mean temperature is averaged, extreme temperatures take
//! the max/min, rain and snow are summed. Missing values are skipped per
//! field; a field that is missing for every month of a year stays missing.

use crate::error::{ClimateError, Result};
use crate::models::{Month, MonthlyRecord, YearlySummary, fahrenheit_from_celsius};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Running per-year accumulator over present values only
#[derive(Debug, Default)]
struct YearAccumulator {
    mean_temp_sum: f64,
    mean_temp_count: usize,
    extreme_max: Option<f64>,
    extreme_min: Option<f64>,
    rain_total: Option<f64>,
    snow_total: Option<f64>,
}

impl YearAccumulator {
    fn add(&mut self, record: &MonthlyRecord) {
        if let Some(temp) = record.mean_temp_c {
            self.mean_temp_sum += temp;
            self.mean_temp_count += 1;
        }
        if let Some(max) = record.extreme_max_temp_c {
            self.extreme_max = Some(self.extreme_max.map_or(max, |current| current.max(max)));
        }
        if let Some(min) = record.extreme_min_temp_c {
            self.extreme_min = Some(self.extreme_min.map_or(min, |current| current.min(min)));
        }
        if let Some(rain) = record.total_rain_mm {
            self.rain_total = Some(self.rain_total.unwrap_or(0.0) + rain);
        }
        if let Some(snow) = record.total_snow_cm {
            self.snow_total = Some(self.snow_total.unwrap_or(0.0) + snow);
        }
    }

    fn finish(self, year: i32) -> YearlySummary {
        let mean_temp_c =
            (self.mean_temp_count > 0).then(|| self.mean_temp_sum / self.mean_temp_count as f64);

        YearlySummary {
            year,
            mean_temp_c,
            extreme_max_temp_c: self.extreme_max,
            extreme_min_temp_c: self.extreme_min,
            total_rain_mm: self.rain_total,
            total_snow_cm: self.snow_total,
            mean_temp_f: mean_temp_c.map(fahrenheit_from_celsius),
        }
    }
}

/// Aggregate monthly records into one summary per year, ascending by year.
///
/// Fails when `records` is empty or any record has no year.
pub fn aggregate_by_year(records: &[MonthlyRecord]) -> Result<Vec<YearlySummary>> {
    if records.is_empty() {
        return Err(ClimateError::invalid_input(
            "cannot aggregate an empty set of monthly records",
        ));
    }

    let mut years: BTreeMap<i32, YearAccumulator> = BTreeMap::new();
    for (index, record) in records.iter().enumerate() {
        let year = record.year.ok_or_else(|| {
            ClimateError::invalid_input(format!("monthly record {} has no year", index))
        })?;
        years.entry(year).or_default().add(record);
    }

    debug!(
        "Aggregated {} monthly records into {} years",
        records.len(),
        years.len()
    );

    Ok(years
        .into_iter()
        .map(|(year, accumulator)| accumulator.finish(year))
        .collect())
}

/// Keep records whose snowfall is strictly above `threshold_cm`, in input order.
///
/// Records without a snowfall value never pass.
pub fn filter_by_snow_threshold(records: &[MonthlyRecord], threshold_cm: f64) -> Vec<MonthlyRecord> {
    records
        .iter()
        .filter(|record| record.total_snow_cm.is_some_and(|snow| snow > threshold_cm))
        .cloned()
        .collect()
}

/// Which calendar months a set of records covers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthCoverage {
    pub present: Vec<Month>,
    pub missing: Vec<Month>,
    /// Records with no recognisable month
    pub unlabelled: usize,
}

impl MonthCoverage {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Report month coverage across `records`
pub fn month_coverage(records: &[MonthlyRecord]) -> MonthCoverage {
    let seen: BTreeSet<Month> = records.iter().filter_map(|record| record.month).collect();
    let unlabelled = records.iter().filter(|record| record.month.is_none()).count();

    let (present, missing): (Vec<Month>, Vec<Month>) = Month::ALL
        .iter()
        .copied()
        .partition(|month| seen.contains(month));

    MonthCoverage {
        present,
        missing,
        unlabelled,
    }
}
