//! Core data structures for climate analysis.
//!
//! Defines the month categorical, the monthly input record, the yearly
//! summary produced by aggregation, and the statistics reported by a
//! processing run.

use crate::error::ClimateError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Calendar month of a monthly observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// All twelve months in calendar order
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Month from its calendar number (1 = January)
    pub fn from_number(number: u32) -> Option<Self> {
        match number {
            1..=12 => Some(Self::ALL[(number - 1) as usize]),
            _ => None,
        }
    }

    /// Calendar number (1 = January)
    pub fn number(&self) -> u32 {
        *self as u32 + 1
    }

    /// Three-letter English abbreviation
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Month::January => "Jan",
            Month::February => "Feb",
            Month::March => "Mar",
            Month::April => "Apr",
            Month::May => "May",
            Month::June => "Jun",
            Month::July => "Jul",
            Month::August => "Aug",
            Month::September => "Sep",
            Month::October => "Oct",
            Month::November => "Nov",
            Month::December => "Dec",
        }
    }

    fn full_name(&self) -> &'static str {
        match self {
            Month::January => "january",
            Month::February => "february",
            Month::March => "march",
            Month::April => "april",
            Month::May => "may",
            Month::June => "june",
            Month::July => "july",
            Month::August => "august",
            Month::September => "september",
            Month::October => "october",
            Month::November => "november",
            Month::December => "december",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for Month {
    type Err = ClimateError;

    /// Accepts `1`..`12`, full English names and three-letter abbreviations
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        let unknown = || ClimateError::UnknownMonth {
            value: s.to_string(),
        };

        if let Ok(number) = value.parse::<u32>() {
            return Month::from_number(number).ok_or_else(unknown);
        }

        let lower = value.to_lowercase();
        Month::ALL
            .iter()
            .copied()
            .find(|month| {
                lower == month.full_name() || lower == month.abbreviation().to_lowercase()
            })
            .ok_or_else(unknown)
    }
}

/// One observation row for a single calendar month of a single year.
///
/// Numeric fields are `None` when the station reported nothing for that
/// month; missing values are normal in multi-decade records.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MonthlyRecord {
    /// Grouping key; a record without one is rejected by aggregation
    pub year: Option<i32>,
    pub month: Option<Month>,
    pub mean_temp_c: Option<f64>,
    pub extreme_max_temp_c: Option<f64>,
    pub extreme_min_temp_c: Option<f64>,
    pub total_rain_mm: Option<f64>,
    pub total_snow_cm: Option<f64>,
}

impl MonthlyRecord {
    /// Create an empty record for a year and month
    pub fn new(year: i32, month: Month) -> Self {
        Self {
            year: Some(year),
            month: Some(month),
            ..Default::default()
        }
    }

    pub fn with_mean_temp_c(mut self, value: f64) -> Self {
        self.mean_temp_c = Some(value);
        self
    }

    pub fn with_extreme_temps_c(mut self, max: f64, min: f64) -> Self {
        self.extreme_max_temp_c = Some(max);
        self.extreme_min_temp_c = Some(min);
        self
    }

    pub fn with_total_rain_mm(mut self, value: f64) -> Self {
        self.total_rain_mm = Some(value);
        self
    }

    pub fn with_total_snow_cm(mut self, value: f64) -> Self {
        self.total_snow_cm = Some(value);
        self
    }
}

/// Aggregated statistics for one calendar year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlySummary {
    pub year: i32,
    /// Mean of the monthly mean temperatures
    pub mean_temp_c: Option<f64>,
    /// Highest monthly extreme maximum
    pub extreme_max_temp_c: Option<f64>,
    /// Lowest monthly extreme minimum
    pub extreme_min_temp_c: Option<f64>,
    pub total_rain_mm: Option<f64>,
    pub total_snow_cm: Option<f64>,
    /// Derived from `mean_temp_c`, present exactly when it is
    pub mean_temp_f: Option<f64>,
}

/// Convert a Celsius temperature to Fahrenheit
pub fn fahrenheit_from_celsius(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Processing statistics
#[derive(Debug, Default)]
pub struct AnalysisStats {
    pub monthly_records: usize,
    pub years: usize,
    pub snowy_months: usize,
    pub tables_written: usize,
    pub output_dir: PathBuf,
    pub processing_time_ms: u128,
}
