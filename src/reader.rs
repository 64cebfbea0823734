//! Monthly climate CSV loading.
//!
//! Reads an Environment Canada monthly export with polars and converts
//! each row into a typed [`MonthlyRecord`]. All columns are read as text
//! and cast non-strictly, so blanks and unparseable cells become missing
//! values instead of failing the load.

use crate::error::{ClimateError, Result};
use crate::models::{Month, MonthlyRecord};
use crate::schema::ColumnMap;
use polars::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Reader for monthly climate CSV files
#[derive(Debug, Default)]
pub struct MonthlyReader;

impl MonthlyReader {
    pub fn new() -> Self {
        Self
    }

    /// Load every row of the CSV at `path`, in file order
    pub fn read_path(&self, path: &Path) -> Result<Vec<MonthlyRecord>> {
        if !path.exists() {
            return Err(ClimateError::InputNotFound {
                path: path.to_path_buf(),
            });
        }

        // Zero-length inference reads every column as a string
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .try_into_reader_with_file_path(Some(path.to_path_buf()))?
            .finish()?;

        debug!(
            "Loaded {} rows x {} columns from {}",
            df.height(),
            df.width(),
            path.display()
        );

        self.read_frame(&df, path)
    }

    /// Convert an already loaded frame into monthly records
    pub fn read_frame(&self, df: &DataFrame, path: &Path) -> Result<Vec<MonthlyRecord>> {
        let map = ColumnMap::resolve(&df.get_column_names(), path)?;

        let years = int_column(df, &map.year)?;
        let months = text_column(df, &map.month)?;
        let mean_temps = float_column(df, &map.mean_temp_c)?;
        let max_temps = float_column(df, &map.extreme_max_temp_c)?;
        let min_temps = float_column(df, &map.extreme_min_temp_c)?;
        let rain = float_column(df, &map.total_rain_mm)?;
        let snow = float_column(df, &map.total_snow_cm)?;

        let mut unknown_months = 0usize;
        let mut negative_totals = 0usize;
        let mut records = Vec::with_capacity(df.height());

        for row in 0..df.height() {
            let month = match months[row].as_deref() {
                Some(value) => match value.parse::<Month>() {
                    Ok(month) => Some(month),
                    Err(_) => {
                        unknown_months += 1;
                        None
                    }
                },
                None => None,
            };

            if rain[row].is_some_and(|v| v < 0.0) || snow[row].is_some_and(|v| v < 0.0) {
                negative_totals += 1;
            }

            records.push(MonthlyRecord {
                year: years[row],
                month,
                mean_temp_c: mean_temps[row],
                extreme_max_temp_c: max_temps[row],
                extreme_min_temp_c: min_temps[row],
                total_rain_mm: rain[row],
                total_snow_cm: snow[row],
            });
        }

        if unknown_months > 0 {
            warn!(
                "{} rows in {} have an unrecognised month value",
                unknown_months,
                path.display()
            );
        }
        if negative_totals > 0 {
            warn!(
                "{} rows in {} report negative rain or snow totals",
                negative_totals,
                path.display()
            );
        }

        Ok(records)
    }
}

/// Load monthly records from a CSV file
pub fn read_monthly_csv(path: impl Into<PathBuf>) -> Result<Vec<MonthlyRecord>> {
    MonthlyReader::new().read_path(&path.into())
}

fn float_column(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let column = df.column(name)?.cast(&DataType::Float64)?;
    let values = column.as_materialized_series().f64()?;
    Ok(values
        .into_iter()
        .map(|value| value.filter(|v| v.is_finite()))
        .collect())
}

fn int_column(df: &DataFrame, name: &str) -> Result<Vec<Option<i32>>> {
    let column = df.column(name)?.cast(&DataType::Int32)?;
    let values = column.as_materialized_series().i32()?;
    Ok(values.into_iter().collect())
}

fn text_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = df.column(name)?.cast(&DataType::String)?;
    let values = column.as_materialized_series().str()?;
    Ok(values
        .into_iter()
        .map(|value| value.map(str::to_string))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> DataFrame {
        df!(
            "Station Name" => ["TORONTO", "TORONTO", "TORONTO"],
            "Year" => ["1950", "1950", ""],
            "Month" => ["1", "Feb", "13"],
            "Mean Temp (°C)" => [Some("-5.2"), None, Some("abc")],
            "Extr Max Temp (°C)" => ["8.3", "9.0", "10.1"],
            "Extr Min Temp (°C)" => ["-21.7", "-18.0", "-15.5"],
            "Total Rain (mm)" => [Some("12.4"), Some("0.0"), None],
            "Total Snow (cm)" => ["40.6", "25.1", "3.0"]
        )
        .unwrap()
    }

    #[test]
    fn test_read_frame_converts_types() {
        let records = MonthlyReader::new()
            .read_frame(&frame(), Path::new("frame.csv"))
            .unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].year, Some(1950));
        assert_eq!(records[0].month, Some(Month::January));
        assert_eq!(records[0].mean_temp_c, Some(-5.2));
        assert_eq!(records[1].month, Some(Month::February));
        assert_eq!(records[1].mean_temp_c, None);
        assert_eq!(records[0].total_snow_cm, Some(40.6));
    }

    #[test]
    fn test_unparseable_cells_become_missing() {
        let records = MonthlyReader::new()
            .read_frame(&frame(), Path::new("frame.csv"))
            .unwrap();

        assert_eq!(records[2].year, None);
        assert_eq!(records[2].month, None);
        assert_eq!(records[2].mean_temp_c, None);
        assert_eq!(records[2].total_rain_mm, None);
    }

    #[test]
    fn test_missing_file_is_reported() {
        let error = read_monthly_csv("/nonexistent/toronto.csv").unwrap_err();
        assert!(matches!(error, ClimateError::InputNotFound { .. }));
    }
}
