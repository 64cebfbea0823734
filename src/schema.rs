//! Column resolution for the monthly climate CSV.
//!
//! Locates the columns the reader needs within an input header. Exports
//! from the climate archive carry many extra columns (station name,
//! flags, gust data) which are ignored.

use crate::constants::columns;
use crate::error::{ClimateError, Result};
use std::path::Path;
use tracing::debug;

/// Actual header names of the required columns in one input file
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnMap {
    pub year: String,
    pub month: String,
    pub mean_temp_c: String,
    pub extreme_max_temp_c: String,
    pub extreme_min_temp_c: String,
    pub total_rain_mm: String,
    pub total_snow_cm: String,
}

impl ColumnMap {
    /// Resolve required columns against a header, reporting every missing one
    pub fn resolve<S: AsRef<str>>(header: &[S], path: &Path) -> Result<Self> {
        let mut missing = Vec::new();
        let mut find = |wanted: &str| -> String {
            match header
                .iter()
                .map(|name| name.as_ref())
                .find(|name| normalise(name) == wanted)
            {
                Some(name) => name.to_string(),
                None => {
                    missing.push(wanted.to_string());
                    String::new()
                }
            }
        };

        let map = Self {
            year: find(columns::YEAR),
            month: find(columns::MONTH),
            mean_temp_c: find(columns::MEAN_TEMP_C),
            extreme_max_temp_c: find(columns::EXTREME_MAX_TEMP_C),
            extreme_min_temp_c: find(columns::EXTREME_MIN_TEMP_C),
            total_rain_mm: find(columns::TOTAL_RAIN_MM),
            total_snow_cm: find(columns::TOTAL_SNOW_CM),
        };

        if !missing.is_empty() {
            return Err(ClimateError::MissingColumns {
                path: path.to_path_buf(),
                columns: missing,
            });
        }

        debug!(
            "Resolved {} required columns in {}",
            columns::REQUIRED.len(),
            path.display()
        );
        Ok(map)
    }
}

/// Strip whitespace and a leading byte-order mark from a header name
fn normalise(name: &str) -> &str {
    name.trim_start_matches('\u{feff}').trim()
}
