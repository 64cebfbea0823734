//! Integration tests for the processor module
//!
//! Tests the complete analysis pipeline against small monthly CSV exports.

pub mod basic_processing;

use std::fmt::Write as _;
use std::path::PathBuf;
use tempfile::TempDir;

pub const HEADER: &str = "\"Station Name\",\"Year\",\"Month\",\"Mean Temp (°C)\",\"Mean Temp Flag\",\"Extr Max Temp (°C)\",\"Extr Min Temp (°C)\",\"Total Rain (mm)\",\"Total Snow (cm)\"";

/// Snowfall by month index (January first) used for every generated year
pub const SNOW_BY_MONTH: [f64; 12] = [
    40.0, 30.0, 15.0, 3.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 8.0, 35.0,
];

/// Write a complete export for `years`, one row per month
pub fn write_monthly_csv(temp_dir: &TempDir, years: std::ops::Range<i32>) -> PathBuf {
    let mut csv = String::from(HEADER);
    csv.push('\n');

    for year in years {
        for month in 1..=12 {
            let mean = -6.0 + (month as f64 - 1.0) * 2.5 + (year % 10) as f64 * 0.1;
            let rain = if month == 1 { String::new() } else { format!("{:.1}", 60.0 + month as f64) };
            writeln!(
                csv,
                "\"TORONTO\",\"{}\",\"{}\",\"{:.1}\",\"\",\"{:.1}\",\"{:.1}\",\"{}\",\"{:.1}\"",
                year,
                month,
                mean,
                mean + 12.0,
                mean - 14.0,
                rain,
                SNOW_BY_MONTH[month - 1]
            )
            .unwrap();
        }
    }

    let path = temp_dir.path().join("en_climate_monthly_Toronto.csv");
    std::fs::write(&path, csv).unwrap();
    path
}
